//! PID controller step functions.

use tunelab_types::{ControllerGains, ControllerLimits};

/// Interface between the simulation driver and a controller implementation.
///
/// `step` consumes one fixed timestep: given the current target and
/// measurement it returns the actuation command and advances whatever
/// internal state the controller keeps (integral, previous error).
pub trait Controller {
    fn step(&mut self, target: f64, measured: f64, dt: f64) -> f64;

    /// Return to the declared initial condition
    fn reset(&mut self);
}

/// Per-term breakdown of the last computed output, for readout displays
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PidTerms {
    pub error: f64,
    pub p: f64,
    pub i: f64,
    pub d: f64,
}

/// PID controller with integral clamping and output saturation
///
/// # Control Law
///
/// e = target - measured
/// integral' = clamp(integral + e*dt, -I_max, +I_max)
/// derivative = (e - e_prev) / dt
/// u = clamp(Kp*e + Ki*integral' + Kd*derivative, -U_max, +U_max)
///
/// The integral clamp is the anti-windup guard: a sustained error can never
/// grow the stored integral beyond `integral_max` in magnitude. With a
/// conditional-integration gate configured, the integral additionally only
/// accumulates while |e| is below the gate threshold, which keeps a cold
/// start (large initial error) from winding up before the measurement gets
/// anywhere near the target.
///
/// P-only and PI behavior fall out of zero Kd / zero Ki.
///
/// # Example
///
/// ```ignore
/// let mut pid = PidController::new(
///     ControllerGains::pid(1.5, 0.4, 0.2),
///     ControllerLimits::new(5.0, 10.0),
/// );
/// let u = pid.step(target, measured, 1.0 / 60.0);
/// ```
#[derive(Debug, Clone)]
pub struct PidController {
    gains: ControllerGains,
    limits: ControllerLimits,

    // State
    integral: f64,
    prev_error: f64,

    // Last computed breakdown, for readouts
    terms: PidTerms,
}

impl PidController {
    pub fn new(gains: ControllerGains, limits: ControllerLimits) -> Self {
        Self {
            gains,
            limits,
            integral: 0.0,
            prev_error: 0.0,
            terms: PidTerms::default(),
        }
    }

    pub fn gains(&self) -> ControllerGains {
        self.gains
    }

    /// New gains take effect on the next step; state is kept.
    pub fn set_gains(&mut self, gains: ControllerGains) {
        self.gains = gains;
    }

    pub fn limits(&self) -> ControllerLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: ControllerLimits) {
        self.limits = limits;
    }

    /// Accumulated integral state
    pub fn integral(&self) -> f64 {
        self.integral
    }

    /// Breakdown of the most recent step
    pub fn terms(&self) -> PidTerms {
        self.terms
    }
}

impl Controller for PidController {
    fn step(&mut self, target: f64, measured: f64, dt: f64) -> f64 {
        let error = target - measured;

        let gate_open = match self.limits.integration_gate {
            Some(gate) => error.abs() < gate,
            None => true,
        };
        if gate_open {
            let i_max = self.limits.integral_max;
            self.integral = (self.integral + error * dt).clamp(-i_max, i_max);
        }

        // dt is fixed and nonzero by driver invariant
        let derivative = (error - self.prev_error) / dt;
        self.prev_error = error;

        let p = self.gains.kp * error;
        let i = self.gains.ki * self.integral;
        let d = self.gains.kd * derivative;

        let u_max = self.limits.output_max;
        let output = (p + i + d).clamp(-u_max, u_max);

        self.terms = PidTerms { error, p, i, d };
        output
    }

    fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
        self.terms = PidTerms::default();
    }
}

/// Two PID loops in cascade: an outer loop on the measured position
/// commands a velocity, an inner loop tracks that velocity with the
/// actuation output.
///
/// Only the position is measured; the inner loop's velocity feedback is a
/// backward difference of the measurement. The commanded velocity is
/// clamped so the outer loop cannot ask for more speed than the scenario
/// allows.
#[derive(Debug, Clone)]
pub struct CascadeController {
    outer: PidController,
    inner: PidController,
    velocity_cmd_max: f64,

    // State for the velocity estimate
    prev_measured: f64,
    initial_measured: f64,

    // Last commanded velocity, for readouts
    velocity_cmd: f64,
}

impl CascadeController {
    pub fn new(
        outer: PidController,
        inner: PidController,
        velocity_cmd_max: f64,
        initial_measured: f64,
    ) -> Self {
        Self {
            outer,
            inner,
            velocity_cmd_max,
            prev_measured: initial_measured,
            initial_measured,
            velocity_cmd: 0.0,
        }
    }

    pub fn outer(&self) -> &PidController {
        &self.outer
    }

    pub fn outer_mut(&mut self) -> &mut PidController {
        &mut self.outer
    }

    pub fn inner(&self) -> &PidController {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut PidController {
        &mut self.inner
    }

    /// Velocity the outer loop asked for on the last step
    pub fn velocity_cmd(&self) -> f64 {
        self.velocity_cmd
    }
}

impl Controller for CascadeController {
    fn step(&mut self, target: f64, measured: f64, dt: f64) -> f64 {
        let velocity_est = (measured - self.prev_measured) / dt;
        self.prev_measured = measured;

        let v_max = self.velocity_cmd_max;
        self.velocity_cmd = self.outer.step(target, measured, dt).clamp(-v_max, v_max);
        self.inner.step(self.velocity_cmd, velocity_est, dt)
    }

    fn reset(&mut self) {
        self.outer.reset();
        self.inner.reset();
        self.prev_measured = self.initial_measured;
        self.velocity_cmd = 0.0;
    }
}
