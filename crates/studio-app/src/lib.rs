//! Gemini Studio — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the platform adapter and hands it to the egui UI.

mod app;

pub use app::StudioApp;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point — called from index.html
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn main() {
    use wasm_bindgen::JsCast;

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Gemini Studio WASM starting...");

    // Launch the egui application
    let web_options = eframe::WebOptions::default();

    // Get the canvas element by ID
    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("studio_canvas")
        .expect("No canvas element with id 'studio_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::StudioApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
