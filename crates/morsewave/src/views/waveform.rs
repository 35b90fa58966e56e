//! Time-domain view of the modulated signal.

use egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};
use morsewave_ask::AskWaveform;

/// Traces longer than this are drawn with a stride.
const MAX_PLOT_POINTS: usize = 4000;

pub struct WaveformView {
    show_envelope: bool,
}

impl WaveformView {
    pub fn new() -> Self {
        Self {
            show_envelope: false,
        }
    }

    pub fn render(&mut self, ui: &mut Ui, title: &str, wave: &AskWaveform, envelope: &[f32]) {
        ui.heading(format!("ASK Waveform for '{title}'"));
        ui.checkbox(&mut self.show_envelope, "Show Envelope");
        ui.add_space(4.0);

        let stride = (wave.samples.len() / MAX_PLOT_POINTS).max(1);

        let plot = Plot::new("ask_waveform")
            .height(320.0)
            .allow_zoom(true)
            .allow_drag(true)
            .x_axis_label("Time (s)")
            .y_axis_label("Amplitude");

        plot.show(ui, |plot_ui| {
            let points: PlotPoints = wave
                .time
                .iter()
                .zip(&wave.samples)
                .step_by(stride)
                .map(|(t, s)| [*t as f64, *s as f64])
                .collect();
            plot_ui.line(
                Line::new(points)
                    .name("ASK Signal")
                    .color(egui::Color32::from_rgb(0, 255, 255)),
            );

            if self.show_envelope {
                let env_points: PlotPoints = wave
                    .time
                    .iter()
                    .zip(envelope)
                    .step_by(stride)
                    .map(|(t, e)| [*t as f64, *e as f64])
                    .collect();
                plot_ui.line(
                    Line::new(env_points)
                        .name("Envelope")
                        .color(egui::Color32::GOLD),
                );
            }
        });
    }
}
