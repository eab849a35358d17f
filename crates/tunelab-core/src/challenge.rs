//! Challenge evaluation: settle detection, run scoring, filter goals.

use std::collections::VecDeque;

use tunelab_types::{ChallengeDef, FilterChallengeDef, RunResult, RUN_HISTORY_CAP};

use crate::fir::response_at;

/// Lifecycle of one tuning-challenge attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleStatus {
    Idle,
    Running,
    Passed,
    TimedOut,
}

/// Watches a running challenge for the settle condition.
///
/// The run passes once |error| and |velocity| have both stayed under their
/// tolerances for a continuous dwell period; dipping out of tolerance
/// resets the dwell with no partial credit. Exceeding the time limit first
/// fails the run.
///
/// Time here is simulated time: the monitor only advances when the driver
/// executes a tick, so hiding or pausing the widget freezes the clock.
#[derive(Debug, Clone)]
pub struct SettleMonitor {
    tolerance: f64,
    velocity_tolerance: f64,
    dwell_required: f64,
    time_limit: f64,

    // State
    status: SettleStatus,
    elapsed: f64,
    dwell_start: Option<f64>,
}

impl SettleMonitor {
    pub fn new(def: &ChallengeDef) -> Self {
        Self {
            tolerance: def.tolerance,
            velocity_tolerance: def.velocity_tolerance,
            dwell_required: def.dwell,
            time_limit: def.time_limit,
            status: SettleStatus::Idle,
            elapsed: 0.0,
            dwell_start: None,
        }
    }

    pub fn status(&self) -> SettleStatus {
        self.status
    }

    /// Simulated time since `start`
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Begin a run, clearing the elapsed clock and dwell timer
    pub fn start(&mut self) {
        self.status = SettleStatus::Running;
        self.elapsed = 0.0;
        self.dwell_start = None;
    }

    /// Abandon the current run without recording a result
    pub fn abort(&mut self) {
        self.status = SettleStatus::Idle;
        self.elapsed = 0.0;
        self.dwell_start = None;
    }

    /// Advance one tick. No-op unless the run is in progress.
    pub fn tick(&mut self, error_abs: f64, velocity_abs: f64, dt: f64) -> SettleStatus {
        if self.status != SettleStatus::Running {
            return self.status;
        }

        self.elapsed += dt;

        let in_tolerance = error_abs < self.tolerance && velocity_abs < self.velocity_tolerance;
        if in_tolerance {
            let dwell_start = *self.dwell_start.get_or_insert(self.elapsed);
            if self.elapsed - dwell_start >= self.dwell_required {
                self.status = SettleStatus::Passed;
                log::info!("challenge passed after {:.2}s", self.elapsed);
                return self.status;
            }
        } else {
            // No partial credit: the dwell restarts from zero
            self.dwell_start = None;
        }

        if self.elapsed > self.time_limit {
            self.status = SettleStatus::TimedOut;
            log::info!("challenge timed out at {:.2}s", self.elapsed);
        }

        self.status
    }
}

/// Most-recent-first list of run results, for display only.
#[derive(Debug, Clone, Default)]
pub struct RunHistory {
    runs: VecDeque<RunResult>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run at the head of the list
    pub fn record(&mut self, result: RunResult) {
        self.runs.push_front(result);
        self.runs.truncate(RUN_HISTORY_CAP);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RunResult> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Fastest recorded settling time, if any run passed
    pub fn best_time(&self) -> Option<f64> {
        self.runs
            .iter()
            .filter_map(|r| r.elapsed)
            .min_by(|a, b| a.partial_cmp(b).expect("times are finite"))
    }
}

/// Idempotent pass latch for a frequency-selective filter challenge.
///
/// Each frame the current coefficient set is checked against the goal:
/// every signal frequency must keep at least the pass-threshold response
/// and every noise frequency must be attenuated below the stop threshold.
/// Once both hold on any frame the challenge stays completed.
#[derive(Debug, Clone, Default)]
pub struct FilterGoalCheck {
    completed: bool,
}

impl FilterGoalCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn reset(&mut self) {
        self.completed = false;
    }

    /// True when the coefficients currently meet the goal
    pub fn meets_goal(def: &FilterChallengeDef, coeffs: &[f64]) -> bool {
        let signals_pass = def
            .signal_freqs
            .iter()
            .all(|&f| response_at(coeffs, f) > def.pass_threshold);
        let noise_blocked = def
            .noise_freqs
            .iter()
            .all(|&f| response_at(coeffs, f) < def.stop_threshold);
        signals_pass && noise_blocked
    }

    /// Evaluate this frame's coefficients, latching the first success
    pub fn evaluate(&mut self, def: &FilterChallengeDef, coeffs: &[f64]) -> bool {
        if !self.completed && Self::meets_goal(def, coeffs) {
            self.completed = true;
            log::info!("filter challenge '{}' completed", def.name);
        }
        self.completed
    }
}
