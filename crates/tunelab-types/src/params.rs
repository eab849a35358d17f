//! Controller and plant parameter types.

use serde::{Deserialize, Serialize};

/// PID controller gains
///
/// P-only and PI controllers are expressed by leaving the unused gains at
/// zero; the controller math is identical for all three variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerGains {
    /// Proportional gain
    pub kp: f64,
    /// Integral gain
    pub ki: f64,
    /// Derivative gain
    pub kd: f64,
}

impl ControllerGains {
    /// Proportional-only controller
    pub fn p(kp: f64) -> Self {
        Self { kp, ki: 0.0, kd: 0.0 }
    }

    /// Proportional-integral controller
    pub fn pi(kp: f64, ki: f64) -> Self {
        Self { kp, ki, kd: 0.0 }
    }

    /// Full PID controller
    pub fn pid(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }
}

impl Default for ControllerGains {
    fn default() -> Self {
        Self { kp: 1.0, ki: 0.0, kd: 0.0 }
    }
}

/// Saturation bounds and anti-windup configuration for a PID controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerLimits {
    /// Magnitude bound on the accumulated integral term
    pub integral_max: f64,

    /// Magnitude bound on the controller output
    pub output_max: f64,

    /// Conditional integration: only accumulate the integral while the
    /// absolute error is below this threshold. `None` integrates always.
    pub integration_gate: Option<f64>,
}

impl ControllerLimits {
    pub fn new(integral_max: f64, output_max: f64) -> Self {
        Self {
            integral_max,
            output_max,
            integration_gate: None,
        }
    }

    /// Add a conditional-integration gate threshold
    pub fn with_gate(mut self, gate: f64) -> Self {
        self.integration_gate = Some(gate);
        self
    }
}

impl Default for ControllerLimits {
    fn default() -> Self {
        Self {
            integral_max: 10.0,
            output_max: 10.0,
            integration_gate: None,
        }
    }
}

/// Physical constants for the rotational pointer plant
///
/// The pointer swings over `[0, pi]` radians. A hanging mass applies a
/// gravity-like disturbance torque of `-mass * cos(angle)`: zero at the
/// vertical orientation, maximal at the horizontal extremes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerParams {
    /// Moment of inertia
    pub inertia: f64,
    /// Viscous friction coefficient
    pub friction: f64,
    /// Disturbance mass hanging on the pointer
    pub mass: f64,
}

impl Default for PointerParams {
    fn default() -> Self {
        Self {
            inertia: 0.12,
            friction: 0.02,
            mass: 0.0,
        }
    }
}

/// Physical constants and scenario parameters for the thermal oven plant
///
/// Temperatures are in degrees Fahrenheit. Opening the door multiplies the
/// heat-loss coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OvenParams {
    /// Heater power at 100% duty
    pub heater_power: f64,
    /// Thermal mass (energy per degree)
    pub thermal_mass: f64,
    /// Heat-loss coefficient toward ambient
    pub loss_coeff: f64,
    /// Ambient temperature
    pub ambient: f64,
    /// Multiplier on heat loss while the door is open
    pub door_loss_multiplier: f64,
    /// Scenario time compression (simulated seconds per tick second)
    pub time_scale: f64,
    /// Whether the oven door is open
    pub door_open: bool,
}

impl Default for OvenParams {
    fn default() -> Self {
        Self {
            heater_power: 120.0,
            thermal_mass: 8.0,
            loss_coeff: 0.15,
            ambient: 70.0,
            door_loss_multiplier: 4.0,
            time_scale: 6.0,
            door_open: false,
        }
    }
}
