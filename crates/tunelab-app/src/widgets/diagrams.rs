//! Static block-diagram widget: open-loop vs closed-loop topology with
//! decorative animated flow.

use egui::{Sense, Ui, Vec2};

use tunelab_types::SimSettings;

use crate::render::{draw_closed_loop_diagram, draw_open_loop_diagram, DiagramLabels};
use crate::widgets::Demo;

pub struct DiagramsDemo {
    animate: bool,
    flow_period: f64,
}

impl DiagramsDemo {
    pub fn new() -> Self {
        Self {
            animate: true,
            flow_period: SimSettings::default().flow_period,
        }
    }
}

impl Default for DiagramsDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for DiagramsDemo {
    fn name(&self) -> &'static str {
        "Open loop vs closed loop"
    }

    fn ui(&mut self, ui: &mut Ui) {
        ui.checkbox(&mut self.animate, "animate signal flow");

        let time = ui.input(|i| i.time);
        let labels = DiagramLabels::default();

        ui.label("Open loop: the controller never finds out what happened");
        let (response, painter) =
            ui.allocate_painter(Vec2::new(ui.available_width(), 110.0), Sense::hover());
        let open_visible = ui.is_rect_visible(response.rect);
        if open_visible {
            draw_open_loop_diagram(
                &painter,
                response.rect.shrink(8.0),
                &labels,
                self.animate.then_some(time),
                self.flow_period,
            );
        }

        ui.add_space(12.0);

        ui.label("Closed loop: the measurement feeds back and corrects");
        let (response, painter) =
            ui.allocate_painter(Vec2::new(ui.available_width(), 150.0), Sense::hover());
        let closed_visible = ui.is_rect_visible(response.rect);
        if closed_visible {
            draw_closed_loop_diagram(
                &painter,
                response.rect.shrink(8.0),
                &labels,
                self.animate.then_some(time),
                self.flow_period,
            );
        }

        // The animation is time-driven, so keep frames coming only while
        // something is actually on screen
        if self.animate && (open_visible || closed_visible) {
            ui.ctx().request_repaint();
        }
    }
}
