//! Spectrum view of the modulated signal.

use egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

pub struct SpectrumView {
    fft_size: usize,
    window_pos: usize,
    log_scale: bool,
}

impl SpectrumView {
    pub fn new() -> Self {
        Self {
            fft_size: 1024,
            window_pos: 0,
            log_scale: true,
        }
    }

    pub fn render(&mut self, ui: &mut Ui, sample_rate_hz: f32, samples: &[f32]) {
        ui.heading("Spectrum");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("FFT Size:");
            egui::ComboBox::from_id_salt("fft_size")
                .selected_text(format!("{}", self.fft_size))
                .show_ui(ui, |ui| {
                    for size in [256, 512, 1024, 2048] {
                        ui.selectable_value(&mut self.fft_size, size, format!("{size}"));
                    }
                });
            ui.checkbox(&mut self.log_scale, "Log Scale (dB)");
        });

        if samples.len() < self.fft_size {
            ui.label(format!(
                "Need at least {} samples for this FFT size.",
                self.fft_size
            ));
            return;
        }

        let max_pos = samples.len() - self.fft_size;
        if max_pos > 0 {
            ui.add(egui::Slider::new(&mut self.window_pos, 0..=max_pos).text("Window Position"));
        }
        let window_pos = self.window_pos.min(max_pos);
        let window = &samples[window_pos..window_pos + self.fft_size];

        let mut bins: Vec<Complex<f32>> = window.iter().map(|s| Complex::new(*s, 0.0)).collect();
        let mut planner = FftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(self.fft_size);
        fft.process(&mut bins);

        // Real input: only the positive-frequency half is informative.
        let scale = 2.0 / self.fft_size as f32;
        let freq_step = sample_rate_hz / self.fft_size as f32;
        let points: PlotPoints = bins[..self.fft_size / 2]
            .iter()
            .enumerate()
            .map(|(i, bin)| {
                let mag = bin.norm() * scale;
                let y = if self.log_scale {
                    20.0 * mag.max(1e-9).log10()
                } else {
                    mag
                };
                [(i as f32 * freq_step) as f64, y as f64]
            })
            .collect();

        let plot = Plot::new("ask_spectrum")
            .height(320.0)
            .allow_zoom(true)
            .allow_drag(true)
            .x_axis_label("Frequency (Hz)")
            .y_axis_label(if self.log_scale {
                "Magnitude (dB)"
            } else {
                "Magnitude"
            });

        plot.show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("Magnitude")
                    .color(egui::Color32::LIGHT_GREEN),
            );
        });
    }
}
