//! Semicircular dial renderer for the rotational pointer widgets.

use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::{DIM_COLOR, FAIL_COLOR, MEASURED_COLOR, PASS_COLOR, TARGET_COLOR};

/// Pointer hit radius around the target handle, in points
pub const HANDLE_HIT_RADIUS: f32 = 14.0;

/// Interaction state of the on-canvas target handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleState {
    #[default]
    Idle,
    Hovered,
    Dragging,
}

/// Screen-space layout of the dial: the pointer pivots at `center` and
/// sweeps the upper semicircle, angle 0 to the right, pi to the left.
#[derive(Debug, Clone, Copy)]
pub struct DialLayout {
    pub center: Pos2,
    pub radius: f32,
}

impl DialLayout {
    pub fn from_rect(rect: Rect) -> Self {
        let radius = (rect.width() * 0.5 - 30.0).min(rect.height() - 50.0).max(20.0);
        let center = Pos2::new(rect.center().x, rect.bottom() - 24.0);
        Self { center, radius }
    }

    /// Project a plant angle to screen space at a fraction of the radius
    pub fn angle_to_pos(&self, angle: f64, radius_frac: f32) -> Pos2 {
        let r = self.radius * radius_frac;
        Pos2::new(
            self.center.x + r * angle.cos() as f32,
            self.center.y - r * angle.sin() as f32,
        )
    }

    /// Inverse projection of a pointer position, clamped to the legal
    /// target range
    pub fn angle_from_pos(&self, pos: Pos2) -> f64 {
        let dx = (pos.x - self.center.x) as f64;
        let dy = (self.center.y - pos.y) as f64;
        dy.atan2(dx).clamp(0.0, std::f64::consts::PI)
    }

    /// Where the draggable target handle sits for a given target angle
    pub fn handle_pos(&self, target: f64) -> Pos2 {
        self.angle_to_pos(target, 1.12)
    }

    /// Whether a pointer position is within grab range of the handle
    pub fn hits_handle(&self, target: f64, pos: Pos2) -> bool {
        self.handle_pos(target).distance(pos) <= HANDLE_HIT_RADIUS
    }
}

/// Points along a circular arc from `a0` to `a1` (plant angles)
fn arc_points(layout: &DialLayout, radius_frac: f32, a0: f64, a1: f64, segments: usize) -> Vec<Pos2> {
    (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            layout.angle_to_pos(a0 + (a1 - a0) * t, radius_frac)
        })
        .collect()
}

/// Static dial face: sweep arc, tick marks, end labels
pub fn draw_dial_face(painter: &Painter, layout: &DialLayout) {
    let stroke = Stroke::new(2.0, DIM_COLOR);
    painter.add(Shape::line(
        arc_points(layout, 1.0, 0.0, std::f64::consts::PI, 64),
        stroke,
    ));

    // Ticks every 22.5 degrees, longer on the quarters
    for i in 0..=8 {
        let angle = std::f64::consts::PI * i as f64 / 8.0;
        let inner = if i % 2 == 0 { 0.93 } else { 0.965 };
        painter.line_segment(
            [
                layout.angle_to_pos(angle, inner),
                layout.angle_to_pos(angle, 1.0),
            ],
            Stroke::new(1.0, DIM_COLOR),
        );
    }

    for (angle, label) in [(0.0, "0°"), (std::f64::consts::FRAC_PI_2, "90°"), (std::f64::consts::PI, "180°")] {
        painter.text(
            layout.angle_to_pos(angle, 0.84),
            egui::Align2::CENTER_CENTER,
            label,
            FontId::proportional(11.0),
            DIM_COLOR,
        );
    }

    // Pivot
    painter.circle_filled(layout.center, 5.0, DIM_COLOR);
}

/// The pointer needle, with a hanging weight when a disturbance mass is on
pub fn draw_pointer(painter: &Painter, layout: &DialLayout, angle: f64, mass: f64) {
    let tip = layout.angle_to_pos(angle, 0.92);
    painter.line_segment([layout.center, tip], Stroke::new(3.0, MEASURED_COLOR));
    painter.circle_filled(tip, 4.0, MEASURED_COLOR);

    if mass > 0.0 {
        // Weight scales with the configured mass
        let side = 6.0 + 10.0 * mass as f32;
        let hang = tip + Vec2::new(0.0, 8.0 + side * 0.5);
        painter.rect_filled(
            Rect::from_center_size(hang, Vec2::splat(side)),
            2.0,
            Color32::from_rgb(180, 160, 120),
        );
        painter.line_segment([tip, hang], Stroke::new(1.0, Color32::from_rgb(180, 160, 120)));
    }
}

/// Draggable target marker, colored by interaction state
pub fn draw_target_handle(painter: &Painter, layout: &DialLayout, target: f64, state: HandleState) {
    let pos = layout.handle_pos(target);
    let (radius, color) = match state {
        HandleState::Idle => (6.0, TARGET_COLOR),
        HandleState::Hovered => (8.0, TARGET_COLOR),
        HandleState::Dragging => (9.0, Color32::WHITE),
    };

    // Guide line from the arc out to the handle
    painter.line_segment(
        [layout.angle_to_pos(target, 1.0), pos],
        Stroke::new(1.0, TARGET_COLOR),
    );
    painter.circle_filled(pos, radius, color);
    if state == HandleState::Hovered {
        painter.circle_stroke(pos, radius + 3.0, Stroke::new(1.0, TARGET_COLOR));
    }
}

/// Arc between the measured angle and the target, colored by error size
pub fn draw_error_arc(painter: &Painter, layout: &DialLayout, angle: f64, target: f64, tolerance: f64) {
    let error = (target - angle).abs();
    if error < 1e-4 {
        return;
    }
    let color = if error < tolerance { PASS_COLOR } else { FAIL_COLOR };
    painter.add(Shape::line(
        arc_points(layout, 0.55, angle, target, 32),
        Stroke::new(2.0, color),
    ));
}

/// Predicted steady-state marker (shown for P-only demos)
pub fn draw_settle_marker(painter: &Painter, layout: &DialLayout, predicted: f64) {
    let pos = layout.angle_to_pos(predicted, 1.0);
    painter.circle_stroke(pos, 6.0, Stroke::new(2.0, PASS_COLOR));
    painter.text(
        layout.angle_to_pos(predicted, 1.22),
        egui::Align2::CENTER_CENTER,
        "settles here",
        FontId::proportional(10.0),
        PASS_COLOR,
    );
}
