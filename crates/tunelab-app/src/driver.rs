//! Frame-driven simulation driver.
//!
//! Owns the canonical closed-loop state across frames, outside any
//! render-triggering storage: the widgets read from it every frame but the
//! state only changes when a tick executes. One tick advances exactly one
//! fixed `dt` of simulated time, so hiding or pausing a widget freezes its
//! clock rather than queueing catch-up work.

use tunelab_core::{ClosedLoop, Controller, HistoryBuffer, Plant};
use tunelab_types::SimSettings;

/// Drives one closed loop at animation-frame rate.
///
/// Scheduling contract, per frame while running and visible:
/// 1. `tick()` advances the loop by `settings.dt` (controller then plant)
/// 2. one `(measured, target)` pair is appended to the history
/// 3. the caller draws from the post-tick state
///
/// Ticks are strictly sequential and synchronous; a parameter change made
/// between frames lands atomically at the start of the next tick.
pub struct SimDriver<P: Plant, C: Controller> {
    sim: ClosedLoop<P, C>,
    history: HistoryBuffer,
    settings: SimSettings,

    sim_time: f64,
    running: bool,
    visible: bool,
    last_output: f64,
}

impl<P: Plant, C: Controller> SimDriver<P, C> {
    pub fn new(plant: P, controller: C, target: f64, settings: SimSettings) -> Self {
        Self {
            sim: ClosedLoop::new(plant, controller, target),
            history: HistoryBuffer::new(settings.history_capacity),
            settings,
            sim_time: 0.0,
            running: false,
            visible: true,
            last_output: 0.0,
        }
    }

    /// Advance one tick if the driver is running and the widget is
    /// visible. Returns whether a tick executed.
    pub fn tick(&mut self) -> bool {
        if !self.running || !self.visible {
            return false;
        }

        let dt = self.settings.dt;
        self.last_output = self.sim.step(dt);
        self.history
            .push(self.sim.plant.measured(), self.sim.target);
        self.sim_time += dt;
        true
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Re-initialize plant and controller and clear the history.
    /// The driver comes back paused at t = 0.
    pub fn reset(&mut self) {
        self.running = false;
        self.sim.reset();
        self.history.clear();
        self.sim_time = 0.0;
        self.last_output = 0.0;
    }

    /// Host-supplied eligibility signal: ticking and history growth are
    /// suspended entirely while the widget's viewport is not visible.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn dt(&self) -> f64 {
        self.settings.dt
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Controller output applied on the most recent tick
    pub fn last_output(&self) -> f64 {
        self.last_output
    }

    pub fn target(&self) -> f64 {
        self.sim.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.sim.target = target;
    }

    pub fn error(&self) -> f64 {
        self.sim.error()
    }

    pub fn plant(&self) -> &P {
        &self.sim.plant
    }

    pub fn plant_mut(&mut self) -> &mut P {
        &mut self.sim.plant
    }

    pub fn controller(&self) -> &C {
        &self.sim.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.sim.controller
    }
}
