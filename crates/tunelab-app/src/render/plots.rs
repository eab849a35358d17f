//! Plot panels built on egui_plot: live history traces and frequency
//! responses.

use egui::Ui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints, VLine};

use super::{FAIL_COLOR, MEASURED_COLOR, PASS_COLOR, TARGET_COLOR};

/// A frequency of interest overlaid on a response plot
#[derive(Debug, Clone, Copy)]
pub struct ResponseMarker {
    /// Fraction of Nyquist (0..1)
    pub freq: f64,
    /// Signal frequencies are meant to survive; noise to be attenuated
    pub is_signal: bool,
}

/// Two-trace live plot over a history buffer: measured and target.
///
/// The y-axis is pinned to the plant's physical range rather than
/// auto-scaled, so the viewer sees overshoot in proportion. The x-window
/// scrolls with simulated time once the buffer is full.
pub fn history_plot(
    ui: &mut Ui,
    id: &str,
    history: &tunelab_core::HistoryBuffer,
    dt: f64,
    end_time: f64,
    y_range: (f64, f64),
    labels: (&str, &str),
    height: f32,
) {
    let span = history.capacity() as f64 * dt;
    let x1 = end_time.max(span);
    let x0 = x1 - span;

    Plot::new(id.to_owned())
        .height(height)
        .show_axes(true)
        .show_grid(true)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x0, y_range.0], [x1, y_range.1]));

            let len = history.len();
            let t_of = |i: usize| end_time - (len - 1 - i) as f64 * dt;

            let measured: PlotPoints = history
                .iter()
                .enumerate()
                .map(|(i, s)| [t_of(i), s.measured])
                .collect();
            let target: PlotPoints = history
                .iter()
                .enumerate()
                .map(|(i, s)| [t_of(i), s.target])
                .collect();

            plot_ui.line(Line::new(target).name(labels.1).color(TARGET_COLOR).width(1.5));
            plot_ui.line(Line::new(measured).name(labels.0).color(MEASURED_COLOR).width(2.0));
        });
}

/// Static multi-trace plot over raw sample sequences (x = sample index)
pub fn samples_plot(
    ui: &mut Ui,
    id: &str,
    curves: &[(&str, &[f64])],
    y_range: (f64, f64),
    height: f32,
) {
    let len = curves.iter().map(|(_, c)| c.len()).max().unwrap_or(0);

    Plot::new(id.to_owned())
        .height(height)
        .show_axes(true)
        .show_grid(true)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [0.0, y_range.0],
                [len as f64, y_range.1],
            ));

            for (ci, (name, curve)) in curves.iter().enumerate() {
                let points: PlotPoints = curve
                    .iter()
                    .enumerate()
                    .map(|(i, &y)| [i as f64, y])
                    .collect();
                let color = if ci == 0 { TARGET_COLOR } else { MEASURED_COLOR };
                plot_ui.line(Line::new(points).name(*name).color(color).width(1.5));
            }
        });
}

/// Frequency-response plot, normalized to the current maximum so the curve
/// stays visible across parameter changes.
///
/// Curves are sampled uniformly over [0, Nyquist); markers and thresholds
/// are drawn in the same normalized units.
pub fn response_plot(
    ui: &mut Ui,
    id: &str,
    curves: &[(&str, &[f64])],
    markers: &[ResponseMarker],
    thresholds: Option<(f64, f64)>,
    height: f32,
) {
    let max = curves
        .iter()
        .flat_map(|(_, c)| c.iter().copied())
        .fold(0.0f64, f64::max);
    let scale = if max > 0.0 { 1.0 / max } else { 1.0 };

    Plot::new(id.to_owned())
        .height(height)
        .show_axes(true)
        .show_grid(true)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, 0.0], [1.0, 1.05]));

            for (ci, (name, curve)) in curves.iter().enumerate() {
                let n = curve.len().max(1);
                let points: PlotPoints = curve
                    .iter()
                    .enumerate()
                    .map(|(i, &m)| [i as f64 / n as f64, m * scale])
                    .collect();
                let color = if ci == 0 { MEASURED_COLOR } else { TARGET_COLOR };
                plot_ui.line(Line::new(points).name(*name).color(color).width(2.0));
            }

            for marker in markers {
                let color = if marker.is_signal { PASS_COLOR } else { FAIL_COLOR };
                plot_ui.vline(VLine::new(marker.freq).color(color).width(1.0));
            }

            if let Some((pass, stop)) = thresholds {
                plot_ui.hline(
                    egui_plot::HLine::new(pass * scale)
                        .color(PASS_COLOR)
                        .width(1.0)
                        .style(egui_plot::LineStyle::dashed_loose()),
                );
                plot_ui.hline(
                    egui_plot::HLine::new(stop * scale)
                        .color(FAIL_COLOR)
                        .width(1.0)
                        .style(egui_plot::LineStyle::dashed_loose()),
                );
            }
        });
}
