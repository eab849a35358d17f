//! IIR smoothing demo: a noisy tone filtered live by first- and
//! second-order recursive smoothers.

use egui::Ui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use tunelab_core::{FirstOrderIir, HistoryBuffer, SecondOrderIir};
use tunelab_types::{IirOrder, IirSpec, SimSettings};

use crate::render;
use crate::widgets::Demo;

/// Tone frequency of the synthetic input, Hz of simulated time
const TONE_HZ: f64 = 0.4;

/// Standard deviation of the additive measurement noise
const NOISE_STD: f64 = 0.35;

pub struct IirDemo {
    spec: IirSpec,
    first: FirstOrderIir,
    second: SecondOrderIir,

    settings: SimSettings,
    history: HistoryBuffer,
    sim_time: f64,
    running: bool,

    rng: StdRng,
    noise: Normal<f64>,
}

impl IirDemo {
    pub fn new() -> Self {
        let spec = IirSpec::default();
        let settings = SimSettings::default();
        Self {
            spec,
            first: FirstOrderIir::new(spec.alpha),
            second: SecondOrderIir::new(spec.alpha),
            settings,
            history: HistoryBuffer::new(settings.history_capacity),
            sim_time: 0.0,
            running: true,
            // Seeded so the demo replays identically after a reset
            rng: StdRng::seed_from_u64(7),
            noise: Normal::new(0.0, NOISE_STD).expect("std dev is finite"),
        }
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.history.clear();
        self.sim_time = 0.0;
        self.rng = StdRng::seed_from_u64(7);
    }

    fn tick(&mut self) {
        let t = self.sim_time;
        let raw = (2.0 * std::f64::consts::PI * TONE_HZ * t).sin()
            + self.noise.sample(&mut self.rng);

        // Both filters track every sample so switching the order compares
        // like for like
        let first_out = self.first.step(raw);
        let second_out = self.second.step(raw);
        let smoothed = match self.spec.order {
            IirOrder::First => first_out,
            IirOrder::Second => second_out,
        };

        self.history.push(smoothed, raw);
        self.sim_time += self.settings.dt;
    }

    /// Analytic response curves; nothing here is simulated
    fn response_curves(&self) -> (Vec<f64>, Vec<f64>) {
        let n = 100;
        let first: Vec<f64> = (0..n)
            .map(|k| FirstOrderIir::response_at(self.spec.alpha, k as f64 / n as f64))
            .collect();
        let second: Vec<f64> = (0..n)
            .map(|k| SecondOrderIir::response_at(self.spec.alpha, k as f64 / n as f64))
            .collect();
        (first, second)
    }
}

impl Default for IirDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for IirDemo {
    fn name(&self) -> &'static str {
        "IIR smoothing"
    }

    fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if self.running {
                if ui.button("⏸ Pause").clicked() {
                    self.running = false;
                }
            } else if ui.button("▶ Run").clicked() {
                self.running = true;
            }
            if ui.button("↺ Reset").clicked() {
                self.reset();
            }

            egui::ComboBox::from_id_salt("iir_order")
                .selected_text(self.spec.order.as_str())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.spec.order, IirOrder::First, "First order");
                    ui.selectable_value(&mut self.spec.order, IirOrder::Second, "Second order");
                });
        });

        if ui
            .add(egui::Slider::new(&mut self.spec.alpha, 0.01..=1.0).text("alpha"))
            .changed()
        {
            self.first.set_alpha(self.spec.alpha);
            self.second.set_alpha(self.spec.alpha);
        }

        // Tick before drawing; suspend entirely while not visible
        if self.running && ui.is_rect_visible(ui.max_rect()) {
            self.tick();
        }

        crate::render::history_plot(
            ui,
            "iir_history",
            &self.history,
            self.settings.dt,
            self.sim_time,
            (-2.2, 2.2),
            ("smoothed", "raw"),
            170.0,
        );

        let (first, second) = self.response_curves();
        render::response_plot(
            ui,
            "iir_response",
            &[("first order", &first), ("second order", &second)],
            &[],
            None,
            150.0,
        );

        if self.running {
            ui.ctx().request_repaint();
        }
    }
}
