//! Simulation settings types.

use serde::{Deserialize, Serialize};

/// Per-widget simulation settings
///
/// The driver advances exactly one `dt` of simulated time per executed
/// animation frame; there is no wall-clock catch-up after a widget has been
/// hidden or paused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimSettings {
    /// Fixed time step per frame (seconds)
    pub dt: f64,

    /// History ring buffer capacity (samples kept for the live plot)
    pub history_capacity: usize,

    /// Period of the decorative flow-dot animation (seconds)
    pub flow_period: f64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            history_capacity: 240,
            flow_period: 2.0,
        }
    }
}
