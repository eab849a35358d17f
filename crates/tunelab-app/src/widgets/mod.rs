//! The widget gallery: one self-contained interactive demo per module.

mod cascade;
mod diagrams;
mod fir_designer;
mod iir_demo;
mod oven;
mod pointer;

pub use cascade::CascadeDemo;
pub use diagrams::DiagramsDemo;
pub use fir_designer::FirDemo;
pub use iir_demo::IirDemo;
pub use oven::OvenDemo;
pub use pointer::PointerDemo;

use egui::{Sense, Ui, Vec2};

use crate::render::{self, DialLayout, HandleState};

/// One interactive teaching widget in the gallery.
///
/// Each demo owns its whole simulation state and performs its tick inside
/// `ui`, before any drawing for that frame.
pub trait Demo {
    fn name(&self) -> &'static str;

    fn ui(&mut self, ui: &mut Ui);
}

/// An allocated dial canvas: painter plus the interaction handling shared
/// by the pointer-style widgets (target dragging, hover, click-to-set).
pub(crate) struct DialCanvas {
    response: egui::Response,
    painter: egui::Painter,
    pub layout: DialLayout,
}

impl DialCanvas {
    /// Allocate the canvas region and compute its layout
    pub fn begin(ui: &mut Ui, height: f32) -> Self {
        let size = Vec2::new(ui.available_width(), height);
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let layout = DialLayout::from_rect(response.rect);
        Self {
            response,
            painter,
            layout,
        }
    }

    /// Whether the canvas viewport is currently visible; drives the
    /// simulation eligibility gate
    pub fn visible(&self, ui: &Ui) -> bool {
        ui.is_rect_visible(self.response.rect)
    }

    /// Process pointer interaction against the target handle.
    ///
    /// Returns the requested new target (already clamped to the legal
    /// range) when the user dragged the handle or clicked elsewhere on the
    /// canvas. Updates `handle` through hover/drag transitions.
    pub fn target_interaction(&self, target: f64, handle: &mut HandleState) -> Option<f64> {
        let mut new_target = None;

        match *handle {
            HandleState::Dragging => {
                if self.response.dragged() {
                    if let Some(pos) = self.response.interact_pointer_pos() {
                        new_target = Some(self.layout.angle_from_pos(pos));
                    }
                } else {
                    // Released or left the canvas
                    *handle = HandleState::Idle;
                }
            }
            _ => {
                let hovering = self
                    .response
                    .hover_pos()
                    .is_some_and(|pos| self.layout.hits_handle(target, pos));

                if hovering && self.response.drag_started() {
                    *handle = HandleState::Dragging;
                    if let Some(pos) = self.response.interact_pointer_pos() {
                        new_target = Some(self.layout.angle_from_pos(pos));
                    }
                } else if hovering {
                    *handle = HandleState::Hovered;
                } else {
                    *handle = HandleState::Idle;

                    // A plain click away from the handle moves the target
                    // straight to the clicked position
                    if self.response.clicked() {
                        if let Some(pos) = self.response.interact_pointer_pos() {
                            new_target = Some(self.layout.angle_from_pos(pos));
                        }
                    }
                }
            }
        }

        new_target
    }

    /// Draw the dial from post-tick state
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        angle: f64,
        mass: f64,
        target: f64,
        handle: HandleState,
        tolerance: f64,
        prediction: Option<f64>,
    ) {
        render::draw_dial_face(&self.painter, &self.layout);
        render::draw_error_arc(&self.painter, &self.layout, angle, target, tolerance);
        if let Some(predicted) = prediction {
            render::draw_settle_marker(&self.painter, &self.layout, predicted);
        }
        render::draw_pointer(&self.painter, &self.layout, angle, mass);
        render::draw_target_handle(&self.painter, &self.layout, target, handle);
    }

    /// Status banner across the top of the canvas
    pub fn banner(&self, text: &str, color: egui::Color32) {
        self.painter.text(
            egui::Pos2::new(self.response.rect.center().x, self.response.rect.top() + 14.0),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(14.0),
            color,
        );
    }
}
