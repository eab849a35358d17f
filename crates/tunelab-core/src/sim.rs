//! Closed-loop composition of a controller and a plant.

use crate::controller::Controller;
use crate::plant::Plant;

/// One feedback loop: controller output drives the plant, plant measurement
/// feeds back into the controller.
///
/// `step` is the deterministic per-tick composition the simulation driver
/// schedules: controller first, then plant, so the actuation applied at
/// tick N is computed from the measurement produced by tick N-1.
#[derive(Debug, Clone)]
pub struct ClosedLoop<P: Plant, C: Controller> {
    pub plant: P,
    pub controller: C,
    pub target: f64,
}

impl<P: Plant, C: Controller> ClosedLoop<P, C> {
    pub fn new(plant: P, controller: C, target: f64) -> Self {
        Self {
            plant,
            controller,
            target,
        }
    }

    /// Advance one tick; returns the controller output applied
    pub fn step(&mut self, dt: f64) -> f64 {
        let u = self.controller.step(self.target, self.plant.measured(), dt);
        self.plant.step(u, dt);
        u
    }

    /// Current error as seen by the feedback path
    pub fn error(&self) -> f64 {
        self.target - self.plant.measured()
    }

    /// Reset both halves to their initial conditions
    pub fn reset(&mut self) {
        self.plant.reset();
        self.controller.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::PidController;
    use crate::plant::PointerPlant;
    use tunelab_types::{ControllerGains, ControllerLimits, PointerParams};

    #[test]
    fn test_step_applies_controller_to_plant() {
        let plant = PointerPlant::new(PointerParams::default(), 0.5);
        let pid = PidController::new(ControllerGains::p(1.0), ControllerLimits::new(5.0, 3.0));
        let mut sim = ClosedLoop::new(plant, pid, 1.0);

        let before = sim.plant.angle();
        let u = sim.step(1.0 / 60.0);
        assert!(u > 0.0);
        assert!(sim.plant.angle() > before);
    }

    #[test]
    fn test_reset_restores_both() {
        let plant = PointerPlant::new(PointerParams::default(), 0.5);
        let pid = PidController::new(
            ControllerGains::pi(1.0, 0.5),
            ControllerLimits::new(5.0, 3.0),
        );
        let mut sim = ClosedLoop::new(plant, pid, 1.0);

        for _ in 0..60 {
            sim.step(1.0 / 60.0);
        }
        assert!(sim.controller.integral() != 0.0);

        sim.reset();
        assert_eq!(sim.plant.angle(), 0.5);
        assert_eq!(sim.controller.integral(), 0.0);
    }
}
