//! Cascaded control widget: an outer angle loop commanding an inner
//! velocity loop on the pointer plant.

use egui::Ui;

use tunelab_core::{CascadeController, PidController, PointerPlant};
use tunelab_types::{ControllerGains, ControllerLimits, PointerParams, SimSettings};

use crate::driver::SimDriver;
use crate::render::HandleState;
use crate::widgets::{Demo, DialCanvas};

pub struct CascadeDemo {
    driver: SimDriver<PointerPlant, CascadeController>,
    handle: HandleState,
}

impl CascadeDemo {
    pub fn new() -> Self {
        let start_angle = std::f64::consts::FRAC_PI_2;
        let params = PointerParams {
            mass: 0.3,
            ..PointerParams::default()
        };
        let plant = PointerPlant::new(params, start_angle);

        // Outer loop turns angle error into a velocity command; the inner
        // loop tracks it with torque. The inner loop carries the integral
        // action so the disturbance offset lands on the velocity loop.
        let outer = PidController::new(ControllerGains::p(3.0), ControllerLimits::new(5.0, 10.0));
        let inner = PidController::new(
            ControllerGains::pi(2.0, 4.0),
            ControllerLimits::new(5.0, 10.0),
        );
        let cascade = CascadeController::new(outer, inner, 3.0, start_angle);

        let mut driver = SimDriver::new(
            plant,
            cascade,
            3.0 * std::f64::consts::FRAC_PI_4,
            SimSettings::default(),
        );
        driver.start();

        Self {
            driver,
            handle: HandleState::Idle,
        }
    }
}

impl Default for CascadeDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for CascadeDemo {
    fn name(&self) -> &'static str {
        "Cascaded control"
    }

    fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if self.driver.is_running() {
                if ui.button("⏸ Pause").clicked() {
                    self.driver.pause();
                }
            } else if ui.button("▶ Run").clicked() {
                self.driver.start();
            }
            if ui.button("↺ Reset").clicked() {
                self.driver.reset();
                self.driver.start();
            }
        });

        // Outer (position) loop
        let mut outer_gains = self.driver.controller().outer().gains();
        if ui
            .add(egui::Slider::new(&mut outer_gains.kp, 0.0..=10.0).text("outer Kp (angle)"))
            .changed()
        {
            self.driver.controller_mut().outer_mut().set_gains(outer_gains);
        }

        // Inner (velocity) loop
        let mut inner_gains = self.driver.controller().inner().gains();
        let mut changed = false;
        changed |= ui
            .add(egui::Slider::new(&mut inner_gains.kp, 0.0..=10.0).text("inner Kp (velocity)"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut inner_gains.ki, 0.0..=10.0).text("inner Ki (velocity)"))
            .changed();
        if changed {
            self.driver.controller_mut().inner_mut().set_gains(inner_gains);
        }

        let mass = &mut self.driver.plant_mut().params_mut().mass;
        ui.add(egui::Slider::new(mass, 0.0..=1.0).text("hanging mass"));

        let canvas = DialCanvas::begin(ui, 230.0);

        if let Some(new_target) = canvas.target_interaction(self.driver.target(), &mut self.handle)
        {
            self.driver.set_target(new_target);
        }

        let visible = canvas.visible(ui);
        self.driver.set_visible(visible);
        self.driver.tick();

        if visible {
            canvas.draw(
                self.driver.plant().angle(),
                self.driver.plant().params().mass,
                self.driver.target(),
                self.handle,
                0.02,
                None,
            );
        }

        ui.horizontal(|ui| {
            ui.label(format!(
                "angle {:>6.1}°",
                self.driver.plant().angle().to_degrees()
            ));
            ui.separator();
            ui.label(format!(
                "velocity cmd {:>5.2} rad/s",
                self.driver.controller().velocity_cmd()
            ));
            ui.label(format!(
                "velocity {:>5.2} rad/s",
                self.driver.plant().velocity()
            ));
            ui.separator();
            ui.label(format!("torque {:>5.2}", self.driver.last_output()));
        });

        crate::render::history_plot(
            ui,
            "cascade_history",
            self.driver.history(),
            self.driver.dt(),
            self.driver.sim_time(),
            (0.0, std::f64::consts::PI),
            ("angle", "target"),
            140.0,
        );

        if self.driver.is_running() {
            ui.ctx().request_repaint();
        }
    }
}
