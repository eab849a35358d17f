//! Block-diagram renderer: controller/plant boxes, sum junction, feedback
//! path, and the decorative animated flow dots.

use egui::{Color32, FontId, Painter, Pos2, Rect, Rounding, Stroke, Vec2};

use super::{DIM_COLOR, MEASURED_COLOR, TARGET_COLOR};

const BLOCK_FILL: Color32 = Color32::from_rgb(45, 45, 48);

/// Labels for the closed-loop diagram boxes
#[derive(Debug, Clone, Copy)]
pub struct DiagramLabels {
    pub input: &'static str,
    pub controller: &'static str,
    pub plant: &'static str,
    pub output: &'static str,
}

impl Default for DiagramLabels {
    fn default() -> Self {
        Self {
            input: "target",
            controller: "controller",
            plant: "plant",
            output: "output",
        }
    }
}

pub fn draw_block(painter: &Painter, rect: Rect, label: &str, accent: Color32) {
    painter.rect(rect, Rounding::same(4.0), BLOCK_FILL, Stroke::new(1.5, accent));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        FontId::proportional(12.0),
        Color32::WHITE,
    );
}

/// Sum junction: a circle with + on the reference input and - on the
/// feedback input
pub fn draw_sum_junction(painter: &Painter, center: Pos2, radius: f32) {
    painter.circle_stroke(center, radius, Stroke::new(1.5, DIM_COLOR));
    painter.text(
        center + Vec2::new(-radius - 7.0, -7.0),
        egui::Align2::CENTER_CENTER,
        "+",
        FontId::proportional(11.0),
        DIM_COLOR,
    );
    painter.text(
        center + Vec2::new(-7.0, radius + 7.0),
        egui::Align2::CENTER_CENTER,
        "−",
        FontId::proportional(11.0),
        DIM_COLOR,
    );
}

pub fn draw_arrow(painter: &Painter, from: Pos2, to: Pos2, color: Color32) {
    painter.arrow(from, to - from, Stroke::new(1.5, color));
}

/// Interpolate along a polyline by arc length; `phase` in [0, 1)
pub fn path_point(path: &[Pos2], phase: f32) -> Pos2 {
    if path.len() < 2 {
        return path.first().copied().unwrap_or(Pos2::ZERO);
    }

    let total: f32 = path.windows(2).map(|w| w[0].distance(w[1])).sum();
    let mut remaining = phase.clamp(0.0, 1.0) * total;

    for w in path.windows(2) {
        let seg = w[0].distance(w[1]);
        if remaining <= seg && seg > 0.0 {
            let t = remaining / seg;
            return w[0] + (w[1] - w[0]) * t;
        }
        remaining -= seg;
    }
    *path.last().expect("path checked non-empty")
}

/// Evenly spaced dots sliding along a path. Position is a function of
/// elapsed time modulo the period only; the animation carries no
/// simulation meaning.
pub fn draw_flow_dots(
    painter: &Painter,
    path: &[Pos2],
    time: f64,
    period: f64,
    count: usize,
    color: Color32,
) {
    for i in 0..count {
        let phase = (time / period + i as f64 / count as f64).fract() as f32;
        painter.circle_filled(path_point(path, phase), 2.5, color);
    }
}

/// Classic unity-feedback loop: target -> sum -> controller -> plant ->
/// output, with the measurement fed back to the sum junction.
///
/// `time` animates the flow dots; pass `None` for a static drawing.
pub fn draw_closed_loop_diagram(
    painter: &Painter,
    rect: Rect,
    labels: &DiagramLabels,
    time: Option<f64>,
    flow_period: f64,
) {
    let mid_y = rect.center().y - rect.height() * 0.12;
    let fb_y = rect.bottom() - rect.height() * 0.18;

    let sum_center = Pos2::new(rect.left() + rect.width() * 0.2, mid_y);
    let sum_r = 10.0;

    let block_size = Vec2::new(rect.width() * 0.18, 36.0);
    let controller_rect = Rect::from_center_size(
        Pos2::new(rect.left() + rect.width() * 0.42, mid_y),
        block_size,
    );
    let plant_rect = Rect::from_center_size(
        Pos2::new(rect.left() + rect.width() * 0.68, mid_y),
        block_size,
    );

    let input_start = Pos2::new(rect.left() + 8.0, mid_y);
    let output_end = Pos2::new(rect.right() - 8.0, mid_y);
    let tap = Pos2::new(rect.left() + rect.width() * 0.88, mid_y);

    // Forward path
    draw_arrow(painter, input_start, sum_center - Vec2::new(sum_r, 0.0), TARGET_COLOR);
    draw_arrow(
        painter,
        sum_center + Vec2::new(sum_r, 0.0),
        Pos2::new(controller_rect.left(), mid_y),
        DIM_COLOR,
    );
    draw_arrow(
        painter,
        Pos2::new(controller_rect.right(), mid_y),
        Pos2::new(plant_rect.left(), mid_y),
        DIM_COLOR,
    );
    draw_arrow(painter, Pos2::new(plant_rect.right(), mid_y), output_end, MEASURED_COLOR);

    // Feedback path: tap after the plant, down, back, and up into the sum
    let feedback = [
        tap,
        Pos2::new(tap.x, fb_y),
        Pos2::new(sum_center.x, fb_y),
        Pos2::new(sum_center.x, mid_y + sum_r),
    ];
    for w in feedback.windows(2) {
        painter.line_segment([w[0], w[1]], Stroke::new(1.5, DIM_COLOR));
    }
    draw_arrow(
        painter,
        Pos2::new(sum_center.x, mid_y + sum_r + 6.0),
        Pos2::new(sum_center.x, mid_y + sum_r),
        DIM_COLOR,
    );

    draw_sum_junction(painter, sum_center, sum_r);
    draw_block(painter, controller_rect, labels.controller, TARGET_COLOR);
    draw_block(painter, plant_rect, labels.plant, MEASURED_COLOR);

    painter.text(
        input_start + Vec2::new(0.0, -12.0),
        egui::Align2::LEFT_CENTER,
        labels.input,
        FontId::proportional(11.0),
        TARGET_COLOR,
    );
    painter.text(
        output_end + Vec2::new(0.0, -12.0),
        egui::Align2::RIGHT_CENTER,
        labels.output,
        FontId::proportional(11.0),
        MEASURED_COLOR,
    );

    if let Some(t) = time {
        let forward = [input_start, output_end];
        draw_flow_dots(painter, &forward, t, flow_period, 4, MEASURED_COLOR);
        draw_flow_dots(painter, &feedback, t, flow_period, 3, TARGET_COLOR);
    }
}

/// Open-loop chain with no feedback: input -> controller -> plant -> output
pub fn draw_open_loop_diagram(
    painter: &Painter,
    rect: Rect,
    labels: &DiagramLabels,
    time: Option<f64>,
    flow_period: f64,
) {
    let mid_y = rect.center().y;

    let block_size = Vec2::new(rect.width() * 0.2, 36.0);
    let controller_rect = Rect::from_center_size(
        Pos2::new(rect.left() + rect.width() * 0.35, mid_y),
        block_size,
    );
    let plant_rect = Rect::from_center_size(
        Pos2::new(rect.left() + rect.width() * 0.65, mid_y),
        block_size,
    );

    let input_start = Pos2::new(rect.left() + 8.0, mid_y);
    let output_end = Pos2::new(rect.right() - 8.0, mid_y);

    draw_arrow(painter, input_start, Pos2::new(controller_rect.left(), mid_y), TARGET_COLOR);
    draw_arrow(
        painter,
        Pos2::new(controller_rect.right(), mid_y),
        Pos2::new(plant_rect.left(), mid_y),
        DIM_COLOR,
    );
    draw_arrow(painter, Pos2::new(plant_rect.right(), mid_y), output_end, MEASURED_COLOR);

    draw_block(painter, controller_rect, labels.controller, TARGET_COLOR);
    draw_block(painter, plant_rect, labels.plant, MEASURED_COLOR);

    painter.text(
        input_start + Vec2::new(0.0, -12.0),
        egui::Align2::LEFT_CENTER,
        labels.input,
        FontId::proportional(11.0),
        TARGET_COLOR,
    );
    painter.text(
        output_end + Vec2::new(0.0, -12.0),
        egui::Align2::RIGHT_CENTER,
        labels.output,
        FontId::proportional(11.0),
        MEASURED_COLOR,
    );

    if let Some(t) = time {
        draw_flow_dots(painter, &[input_start, output_end], t, flow_period, 4, MEASURED_COLOR);
    }
}
