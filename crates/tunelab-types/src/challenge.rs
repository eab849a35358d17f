//! Tuning-challenge definitions and run results.

use serde::{Deserialize, Serialize};

use crate::ControllerGains;

/// Maximum number of run results retained for display
pub const RUN_HISTORY_CAP: usize = 10;

/// A PID tuning challenge scenario for the pointer widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeDef {
    pub name: String,
    /// Pointer angle at run start (radians)
    pub start_angle: f64,
    /// Disturbance mass in effect for the run
    pub mass: f64,
    /// Target angle to settle at (radians)
    pub target: f64,
    /// Absolute error tolerance for "settled"
    pub tolerance: f64,
    /// Absolute angular velocity tolerance for "settled"
    pub velocity_tolerance: f64,
    /// Continuous time the settle condition must hold (seconds)
    pub dwell: f64,
    /// Run fails once elapsed time exceeds this (seconds)
    pub time_limit: f64,
}

impl ChallengeDef {
    /// Built-in challenge roster for the pointer tuning widget
    pub fn presets() -> Vec<ChallengeDef> {
        vec![
            ChallengeDef {
                name: "Light load".into(),
                start_angle: std::f64::consts::FRAC_PI_2,
                mass: 0.2,
                target: 3.0 * std::f64::consts::FRAC_PI_4,
                tolerance: 0.02,
                velocity_tolerance: 0.05,
                dwell: 0.5,
                time_limit: 20.0,
            },
            ChallengeDef {
                name: "Heavy load".into(),
                start_angle: std::f64::consts::FRAC_PI_2,
                mass: 0.5,
                target: 3.0 * std::f64::consts::FRAC_PI_4,
                tolerance: 0.02,
                velocity_tolerance: 0.05,
                dwell: 0.5,
                time_limit: 20.0,
            },
            ChallengeDef {
                name: "Long swing".into(),
                start_angle: 0.1,
                mass: 0.35,
                target: 3.0 * std::f64::consts::FRAC_PI_4,
                tolerance: 0.02,
                velocity_tolerance: 0.05,
                dwell: 0.5,
                time_limit: 25.0,
            },
        ]
    }
}

/// A frequency-selective design challenge for the FIR widget
///
/// The filter passes when every signal frequency keeps at least
/// `pass_threshold` response magnitude and every noise frequency is
/// attenuated below `stop_threshold`. Frequencies are fractions of Nyquist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterChallengeDef {
    pub name: String,
    pub signal_freqs: Vec<f64>,
    pub noise_freqs: Vec<f64>,
    pub pass_threshold: f64,
    pub stop_threshold: f64,
}

impl FilterChallengeDef {
    pub fn presets() -> Vec<FilterChallengeDef> {
        vec![
            FilterChallengeDef {
                name: "Remove hum".into(),
                signal_freqs: vec![0.08],
                noise_freqs: vec![0.7],
                pass_threshold: 0.7,
                stop_threshold: 0.1,
            },
            FilterChallengeDef {
                name: "Keep the carrier".into(),
                signal_freqs: vec![0.5],
                noise_freqs: vec![0.08, 0.9],
                pass_threshold: 0.7,
                stop_threshold: 0.1,
            },
        ]
    }
}

/// Outcome of one challenge attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Gains in effect when the run ended
    pub gains: ControllerGains,
    /// Settling time, or `None` if the run timed out
    pub elapsed: Option<f64>,
}
