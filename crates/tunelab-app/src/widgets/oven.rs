//! Thermal oven PID widget with conditional integration and a door-open
//! disturbance.

use egui::Ui;

use tunelab_core::{OvenPlant, PidController};
use tunelab_types::{ControllerGains, ControllerLimits, OvenParams, SimSettings};

use crate::driver::SimDriver;
use crate::render::{readout_color, FAIL_COLOR, MEASURED_COLOR};
use crate::widgets::Demo;

/// Gate width for conditional integration: the integral only accumulates
/// within this error band. Tuning default, in degrees Fahrenheit.
const INTEGRATION_GATE: f64 = 50.0;

pub struct OvenDemo {
    driver: SimDriver<OvenPlant, PidController>,
}

impl OvenDemo {
    pub fn new() -> Self {
        let plant = OvenPlant::new(OvenParams::default());
        let pid = PidController::new(
            ControllerGains::pid(3.0, 0.4, 0.0),
            // Duty is 0..100%, so the output bound doubles as full duty
            ControllerLimits::new(80.0, 100.0).with_gate(INTEGRATION_GATE),
        );
        let mut driver = SimDriver::new(plant, pid, 350.0, SimSettings::default());
        driver.start();
        Self { driver }
    }

    /// Heater duty actually applied: the plant only accepts 0..100
    fn duty(&self) -> f64 {
        self.driver.last_output().clamp(0.0, 100.0)
    }
}

impl Default for OvenDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for OvenDemo {
    fn name(&self) -> &'static str {
        "Oven temperature PID"
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

            let door_open = self.driver.plant().params().door_open;
            if ui
                .selectable_label(door_open, if door_open { "🚪 Door open" } else { "🚪 Door closed" })
                .clicked()
            {
                self.driver.plant_mut().set_door_open(!door_open);
            }
        });

        let mut target = self.driver.target();
        if ui
            .add(egui::Slider::new(&mut target, 150.0..=450.0).text("setpoint °F"))
            .changed()
        {
            self.driver.set_target(target);
        }

        let mut gains = self.driver.controller().gains();
        let mut changed = false;
        changed |= ui
            .add(egui::Slider::new(&mut gains.kp, 0.0..=10.0).text("Kp"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut gains.ki, 0.0..=2.0).text("Ki"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut gains.kd, 0.0..=5.0).text("Kd"))
            .changed();
        if changed {
            self.driver.controller_mut().set_gains(gains);
        }

        // Tick before any drawing; the plot region is the widget viewport
        self.driver.set_visible(ui.is_rect_visible(ui.max_rect()));
        self.driver.tick();

        let error = self.driver.error();
        ui.horizontal(|ui| {
            ui.colored_label(
                MEASURED_COLOR,
                format!("{:.1} °F", self.driver.plant().temperature()),
            );
            ui.separator();
            ui.colored_label(
                readout_color(error, 5.0),
                format!("error {:>6.1} °F", error),
            );
            ui.separator();
            ui.label("heater");
            ui.add(
                egui::ProgressBar::new(self.duty() as f32 / 100.0)
                    .desired_width(120.0)
                    .text(format!("{:.0}%", self.duty())),
            );
            if self.driver.plant().params().door_open {
                ui.colored_label(FAIL_COLOR, "door open: losing heat");
            }
        });

        crate::render::history_plot(
            ui,
            "oven_history",
            self.driver.history(),
            self.driver.dt(),
            self.driver.sim_time(),
            (0.0, 500.0),
            ("temperature", "setpoint"),
            180.0,
        );

        if self.driver.is_running() {
            ui.ctx().request_repaint();
        }
    }
}
