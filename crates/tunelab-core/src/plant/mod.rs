//! Plant dynamics implementations.

mod oven;
mod pointer;

pub use oven::OvenPlant;
pub use pointer::{steady_state_angle, PointerPlant};

/// Interface between the simulation driver and a physical model.
///
/// One call to `step` advances the plant by a fixed `dt` under the given
/// actuation input. `measured` is the quantity fed back to the controller.
pub trait Plant {
    fn step(&mut self, input: f64, dt: f64);

    /// Controlled quantity as seen by the feedback path
    fn measured(&self) -> f64;

    /// Return to the declared initial condition
    fn reset(&mut self);
}
