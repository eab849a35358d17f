//! FIR filter design challenge widget.
//!
//! The user shapes a windowed-sinc filter (type, cutoff, tap count) until
//! the declared signal tones survive and the noise tones are attenuated.
//! Coefficients and responses are recomputed whenever the spec changes;
//! the synthetic input is fixed per challenge.

use egui::Ui;

use tunelab_core::{fir, FilterGoalCheck};
use tunelab_types::{FilterChallengeDef, FilterSpec, FilterType};

use crate::render::{self, ResponseMarker, FAIL_COLOR, PASS_COLOR};
use crate::widgets::Demo;

/// Samples of synthetic input shown in the time-domain plot
const INPUT_LEN: usize = 256;

pub struct FirDemo {
    spec: FilterSpec,

    // Derived artifacts, rebuilt on any spec or challenge change
    coeffs: Vec<f64>,
    response: Vec<f64>,
    input: Vec<f64>,
    filtered: Vec<f64>,

    challenges: Vec<FilterChallengeDef>,
    selected: usize,
    checks: Vec<FilterGoalCheck>,
}

impl FirDemo {
    pub fn new() -> Self {
        let challenges = FilterChallengeDef::presets();
        let checks = vec![FilterGoalCheck::new(); challenges.len()];
        let mut demo = Self {
            spec: FilterSpec::default(),
            coeffs: Vec::new(),
            response: Vec::new(),
            input: Vec::new(),
            filtered: Vec::new(),
            challenges,
            selected: 0,
            checks,
        };
        demo.rebuild();
        demo
    }

    /// Every tone of the current challenge mixed at unit amplitude
    fn synthesize_input(&self) -> Vec<f64> {
        let def = &self.challenges[self.selected];
        let tones: Vec<f64> = def
            .signal_freqs
            .iter()
            .chain(def.noise_freqs.iter())
            .copied()
            .collect();

        (0..INPUT_LEN)
            .map(|n| {
                tones
                    .iter()
                    .map(|f| (std::f64::consts::PI * f * n as f64).sin())
                    .sum()
            })
            .collect()
    }

    fn rebuild(&mut self) {
        self.coeffs = fir::design(&self.spec);
        self.response = fir::frequency_response(&self.coeffs);
        self.input = self.synthesize_input();
        self.filtered = fir::apply(&self.coeffs, &self.input);
    }

    fn current_def(&self) -> &FilterChallengeDef {
        &self.challenges[self.selected]
    }
}

impl Default for FirDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for FirDemo {
    fn name(&self) -> &'static str {
        "FIR filter designer"
    }

    fn ui(&mut self, ui: &mut Ui) {
        let mut changed = false;

        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("fir_challenge")
                .selected_text(self.current_def().name.clone())
                .show_ui(ui, |ui| {
                    for (i, def) in self.challenges.iter().enumerate() {
                        if ui
                            .selectable_value(&mut self.selected, i, def.name.clone())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            egui::ComboBox::from_id_salt("fir_type")
                .selected_text(self.spec.filter_type.as_str())
                .show_ui(ui, |ui| {
                    for ft in [FilterType::Lowpass, FilterType::Highpass, FilterType::Bandpass] {
                        if ui
                            .selectable_value(&mut self.spec.filter_type, ft, ft.as_str())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });
        });

        changed |= ui
            .add(
                egui::Slider::new(&mut self.spec.cutoff, 0.02..=0.98)
                    .text("cutoff (× Nyquist)"),
            )
            .changed();

        let mut taps = self.spec.taps as u32;
        if ui
            .add(egui::Slider::new(&mut taps, 5..=101).text("taps"))
            .changed()
        {
            self.spec.taps = taps as usize;
            changed = true;
        }

        if changed {
            self.rebuild();
        }

        // Pass/fail is re-evaluated every frame and latches on first success
        let def = self.challenges[self.selected].clone();
        let completed = self.checks[self.selected].evaluate(&def, &self.coeffs);
        let meets_now = FilterGoalCheck::meets_goal(&def, &self.coeffs);

        ui.horizontal(|ui| {
            if completed {
                ui.colored_label(PASS_COLOR, "✔ challenge complete");
                if !meets_now {
                    ui.label("(current design no longer passes)");
                }
            } else {
                ui.colored_label(FAIL_COLOR, "✘ not passing yet");
            }
            ui.separator();
            ui.label(format!("{} taps", self.coeffs.len()));
        });

        let markers: Vec<ResponseMarker> = def
            .signal_freqs
            .iter()
            .map(|&f| ResponseMarker { freq: f, is_signal: true })
            .chain(def.noise_freqs.iter().map(|&f| ResponseMarker {
                freq: f,
                is_signal: false,
            }))
            .collect();

        render::response_plot(
            ui,
            "fir_response",
            &[("response", &self.response)],
            &markers,
            Some((def.pass_threshold, def.stop_threshold)),
            160.0,
        );

        // Worst-case amplitude: one unit per mixed tone
        let tone_count = (def.signal_freqs.len() + def.noise_freqs.len()) as f64;
        render::samples_plot(
            ui,
            "fir_time",
            &[("input", &self.input), ("filtered", &self.filtered)],
            (-tone_count - 0.3, tone_count + 0.3),
            160.0,
        );
    }
}
