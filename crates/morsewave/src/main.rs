//! Morse code ASK simulator (native entry point).
//!
//! Type text, press Generate Waveform, and see the amplitude-shift-keyed
//! carrier for its Morse encoding, with the Morse string shown alongside.

mod app;
mod views;

use app::AskSimulatorApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_title("Morse Code ASK Simulator"),
        ..Default::default()
    };

    eframe::run_native(
        "Morse Code ASK Simulator",
        native_options,
        Box::new(|cc| Ok(Box::new(AskSimulatorApp::new(cc)))),
    )
}
