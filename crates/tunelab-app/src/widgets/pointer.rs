//! Rotational pointer widgets: steady-state-error demo and PID tuning
//! challenge.

use egui::Ui;

use tunelab_core::{
    steady_state_angle, PidController, Plant, PointerPlant, RunHistory, SettleMonitor,
    SettleStatus,
};
use tunelab_types::{
    ChallengeDef, ControllerGains, ControllerLimits, PointerParams, RunResult, SimSettings,
};

use crate::driver::SimDriver;
use crate::render::{readout_color, HandleState, FAIL_COLOR, PASS_COLOR, TARGET_COLOR};
use crate::widgets::{Demo, DialCanvas};

/// Which gains the widget exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlMode {
    P,
    Pid,
}

/// Interactive pointer-on-a-dial widget.
///
/// Two flavors share this struct: the P-only steady-state-error demo
/// (mass slider plus settle-point prediction overlay) and the PID tuning
/// challenge (challenge presets, dwell evaluator, run leaderboard).
pub struct PointerDemo {
    title: &'static str,
    mode: ControlMode,
    driver: SimDriver<PointerPlant, PidController>,
    handle: HandleState,

    // Steady-state demo extras
    show_prediction: bool,

    // Challenge extras
    challenges: Vec<ChallengeDef>,
    selected_challenge: usize,
    monitor: Option<SettleMonitor>,
    results: RunHistory,

    /// Error band used for readout coloring and the dial's error arc
    tolerance: f64,
}

impl PointerDemo {
    fn new_driver(gains: ControllerGains, mass: f64) -> SimDriver<PointerPlant, PidController> {
        let params = PointerParams {
            mass,
            ..PointerParams::default()
        };
        let plant = PointerPlant::new(params, std::f64::consts::FRAC_PI_2);
        let pid = PidController::new(gains, ControllerLimits::new(5.0, 10.0));
        let mut driver = SimDriver::new(
            plant,
            pid,
            3.0 * std::f64::consts::FRAC_PI_4,
            SimSettings::default(),
        );
        driver.start();
        driver
    }

    /// P-only demo visualizing the offset a constant disturbance causes
    pub fn steady_state_demo() -> Self {
        Self {
            title: "Proportional control & steady-state error",
            mode: ControlMode::P,
            driver: Self::new_driver(ControllerGains::p(1.5), 0.5),
            handle: HandleState::Idle,
            show_prediction: true,
            challenges: Vec::new(),
            selected_challenge: 0,
            monitor: None,
            results: RunHistory::new(),
            tolerance: 0.05,
        }
    }

    /// Full PID widget with tuning challenges and a leaderboard
    pub fn tuning_challenge() -> Self {
        Self {
            title: "PID tuning challenge",
            mode: ControlMode::Pid,
            driver: Self::new_driver(ControllerGains::pid(1.5, 0.0, 0.0), 0.0),
            handle: HandleState::Idle,
            show_prediction: false,
            challenges: ChallengeDef::presets(),
            selected_challenge: 0,
            monitor: None,
            results: RunHistory::new(),
            tolerance: 0.02,
        }
    }

    fn start_challenge(&mut self) {
        let def = self.challenges[self.selected_challenge].clone();
        log::info!("starting challenge '{}'", def.name);

        self.driver.reset();
        self.driver.plant_mut().params_mut().mass = def.mass;
        self.driver.plant_mut().set_initial_angle(def.start_angle);
        self.driver.plant_mut().reset();
        self.driver.set_target(def.target);
        self.tolerance = def.tolerance;

        let mut monitor = SettleMonitor::new(&def);
        monitor.start();
        self.monitor = Some(monitor);
        self.driver.start();
    }

    fn gain_controls(&mut self, ui: &mut Ui) {
        let mut gains = self.driver.controller().gains();
        let mut changed = false;

        changed |= ui
            .add(egui::Slider::new(&mut gains.kp, 0.0..=10.0).text("Kp"))
            .changed();
        if self.mode == ControlMode::Pid {
            changed |= ui
                .add(egui::Slider::new(&mut gains.ki, 0.0..=5.0).text("Ki"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut gains.kd, 0.0..=5.0).text("Kd"))
                .changed();
        }

        if changed {
            // Takes effect atomically at the next tick
            self.driver.controller_mut().set_gains(gains);
        }
    }

    fn challenge_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("challenge_select")
                .selected_text(self.challenges[self.selected_challenge].name.clone())
                .show_ui(ui, |ui| {
                    for (i, def) in self.challenges.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_challenge, i, def.name.clone());
                    }
                });

            if ui.button("▶ Start run").clicked() {
                self.start_challenge();
            }

            if let Some(best) = self.results.best_time() {
                ui.label(format!("best: {:.2}s", best));
            }
        });

        if !self.results.is_empty() {
            ui.add_space(4.0);
            egui::Grid::new("run_results")
                .striped(true)
                .min_col_width(48.0)
                .show(ui, |ui| {
                    ui.label("Kp");
                    ui.label("Ki");
                    ui.label("Kd");
                    ui.label("time");
                    ui.end_row();

                    for result in self.results.iter() {
                        ui.label(format!("{:.2}", result.gains.kp));
                        ui.label(format!("{:.2}", result.gains.ki));
                        ui.label(format!("{:.2}", result.gains.kd));
                        match result.elapsed {
                            Some(t) => ui.colored_label(PASS_COLOR, format!("{:.2}s", t)),
                            None => ui.colored_label(FAIL_COLOR, "—"),
                        };
                        ui.end_row();
                    }
                });
        }
    }

    fn readouts(&self, ui: &mut Ui) {
        let error = self.driver.error();
        let terms = self.driver.controller().terms();

        ui.horizontal(|ui| {
            ui.colored_label(
                readout_color(error, self.tolerance),
                format!("error {:>6.1}°", error.to_degrees()),
            );
            ui.separator();
            ui.label(format!("P {:>5.2}", terms.p));
            if self.mode == ControlMode::Pid {
                ui.label(format!("I {:>5.2}", terms.i));
                ui.label(format!("D {:>5.2}", terms.d));
            }
            ui.separator();
            ui.label(format!("torque {:>5.2}", self.driver.last_output()));
            ui.label(format!("t = {:.1}s", self.driver.sim_time()));
        });
    }
}

impl Demo for PointerDemo {
    fn name(&self) -> &'static str {
        self.title
    }

    fn ui(&mut self, ui: &mut Ui) {
        // Controls
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
                self.monitor = None;
                self.driver.start();
            }
        });

        self.gain_controls(ui);

        if self.challenges.is_empty() {
            // The disturbance mass is a live scenario parameter here
            let mass = &mut self.driver.plant_mut().params_mut().mass;
            ui.add(egui::Slider::new(mass, 0.0..=1.0).text("hanging mass"));
            ui.checkbox(&mut self.show_prediction, "show predicted settle point");
        } else {
            self.challenge_controls(ui);
        }

        // Canvas: interaction, then tick, then draw
        let canvas = DialCanvas::begin(ui, 230.0);

        if let Some(new_target) = canvas.target_interaction(self.driver.target(), &mut self.handle)
        {
            self.driver.set_target(new_target);
        }

        let visible = canvas.visible(ui);
        self.driver.set_visible(visible);
        let ticked = self.driver.tick();

        if ticked {
            if let Some(monitor) = &mut self.monitor {
                let prev = monitor.status();
                let status = monitor.tick(
                    self.driver.error().abs(),
                    self.driver.plant().velocity().abs(),
                    self.driver.dt(),
                );
                if prev == SettleStatus::Running && status != SettleStatus::Running {
                    let elapsed = (status == SettleStatus::Passed).then(|| monitor.elapsed());
                    self.results.record(RunResult {
                        gains: self.driver.controller().gains(),
                        elapsed,
                    });
                    // A passed run freezes the pointer where it settled
                    self.driver.pause();
                }
            }
        }

        let prediction = (self.show_prediction && self.driver.plant().params().mass > 0.0)
            .then(|| {
                steady_state_angle(
                    self.driver.target(),
                    self.driver.plant().params().mass,
                    self.driver.controller().gains().kp,
                )
            })
            .flatten();

        // Drawing is suspended along with ticking while off-screen
        if visible {
            canvas.draw(
                self.driver.plant().angle(),
                self.driver.plant().params().mass,
                self.driver.target(),
                self.handle,
                self.tolerance,
                prediction,
            );

            if let Some(monitor) = &self.monitor {
                match monitor.status() {
                    SettleStatus::Running => canvas.banner(
                        &format!("{:.1}s, hold the target steady", monitor.elapsed()),
                        TARGET_COLOR,
                    ),
                    SettleStatus::Passed => canvas.banner(
                        &format!("PASSED in {:.2}s", monitor.elapsed()),
                        PASS_COLOR,
                    ),
                    SettleStatus::TimedOut => canvas.banner("TIMED OUT, try again", FAIL_COLOR),
                    SettleStatus::Idle => {}
                }
            }
        }

        self.readouts(ui);

        crate::render::history_plot(
            ui,
            "pointer_history",
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
