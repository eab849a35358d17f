//! Main application structure.

use eframe::egui;

use crate::widgets::{
    CascadeDemo, Demo, DiagramsDemo, FirDemo, IirDemo, OvenDemo, PointerDemo,
};

/// Main application: a gallery of teaching widgets with a selector panel.
///
/// Each widget owns its simulation state exclusively; selecting another
/// widget leaves the previous one intact but un-ticked, since only the
/// visible widget's `ui` runs.
pub struct TuneLabApp {
    demos: Vec<Box<dyn Demo>>,
    selected: usize,
}

impl TuneLabApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::configure_style(&cc.egui_ctx);

        Self {
            demos: vec![
                Box::new(DiagramsDemo::new()),
                Box::new(PointerDemo::steady_state_demo()),
                Box::new(PointerDemo::tuning_challenge()),
                Box::new(OvenDemo::new()),
                Box::new(CascadeDemo::new()),
                Box::new(FirDemo::new()),
                Box::new(IirDemo::new()),
            ],
            selected: 1,
        }
    }

    fn configure_style(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        style.visuals.window_rounding = egui::Rounding::same(8.0);
        style.visuals.menu_rounding = egui::Rounding::same(4.0);
        style.visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_style(style);
    }
}

impl eframe::App for TuneLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("demo_list")
            .resizable(true)
            .default_width(220.0)
            .min_width(160.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                ui.heading("TuneLab");
                ui.label("interactive control & DSP demos");
                ui.separator();

                for (i, demo) in self.demos.iter().enumerate() {
                    if ui.selectable_label(self.selected == i, demo.name()).clicked() {
                        self.selected = i;
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let demo = &mut self.demos[self.selected];
            ui.heading(demo.name());
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                demo.ui(ui);
            });
        });
    }
}
