//! TuneLab - interactive control-theory teaching widgets

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tunelab_app::TuneLabApp;

fn main() -> eframe::Result<()> {
    // Log to stdout on native
    #[cfg(not(target_arch = "wasm32"))]
    {
        env_logger::init();
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("TuneLab"),
        ..Default::default()
    };

    eframe::run_native(
        "TuneLab",
        native_options,
        Box::new(|cc| Ok(Box::new(TuneLabApp::new(cc)))),
    )
}

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Redirect panic messages to console.error
    console_error_panic_hook::set_once();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        use wasm_bindgen::JsCast as _;

        let document = eframe::web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        let canvas = document
            .get_element_by_id("tunelab-canvas")
            .expect("no element with id tunelab-canvas")
            .dyn_into::<eframe::web_sys::HtmlCanvasElement>()
            .expect("element is not a canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(TuneLabApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });

    Ok(())
}
