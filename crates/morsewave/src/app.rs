use eframe::egui;
use morsewave_ask::{synthesize, text_to_morse, AskModulator, AskWaveform, SignalParams};
use std::sync::mpsc::Sender;

use crate::views::{SpectrumView, WaveformView};

const OUTPUT_LEVEL_DB_DOWN: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Waveform,
    Spectrum,
}

pub struct AskSimulatorApp {
    input: String,
    /// Uppercased input of the last generated waveform, used in the plot title.
    title: String,
    morse: Option<String>,
    waveform: Option<AskWaveform>,
    envelope_trace: Vec<f32>,
    warning: Option<String>,
    tab: Tab,
    waveform_view: WaveformView,
    spectrum_view: SpectrumView,
    audio: Option<AudioSink>,
}

/// Lazily opened output stream; kept alive for the rest of the session.
struct AudioSink {
    _stream: cpal::Stream,
    tx: Sender<Vec<f32>>,
    sample_rate_hz: f32,
}

impl AudioSink {
    fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let (tx, rx) = std::sync::mpsc::channel();
        let level = 10.0_f32.powf(-OUTPUT_LEVEL_DB_DOWN / 20.0);
        let (stream, sample_rate_hz) =
            morsewave_audio::device::start_default_output(rx, level, None)?;
        Ok(Self {
            _stream: stream,
            tx,
            sample_rate_hz: sample_rate_hz as f32,
        })
    }
}

impl AskSimulatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            input: String::new(),
            title: String::new(),
            morse: None,
            waveform: None,
            envelope_trace: Vec::new(),
            warning: None,
            tab: Tab::Waveform,
            waveform_view: WaveformView::new(),
            spectrum_view: SpectrumView::new(),
            audio: None,
        }
    }

    fn generate(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            tracing::warn!("rejecting empty input");
            self.warning = Some("Please enter text to transmit.".to_owned());
            return;
        }
        self.warning = None;

        let params = SignalParams::default();
        let morse = text_to_morse(&text);
        let envelope = synthesize(&morse, &params);
        let wave = AskModulator::new(&params).modulate(&envelope);
        tracing::info!(samples = wave.samples.len(), "generated waveform");

        self.title = text.to_uppercase();
        self.envelope_trace = envelope
            .iter()
            .by_vals()
            .map(|gate| if gate { 1.0 } else { 0.0 })
            .collect();
        self.morse = Some(morse);
        self.waveform = Some(wave);
    }

    fn play(&mut self) {
        let Some(morse) = self.morse.clone() else {
            self.warning = Some("Generate a waveform first.".to_owned());
            return;
        };

        if self.audio.is_none() {
            match AudioSink::open() {
                Ok(sink) => self.audio = Some(sink),
                Err(err) => {
                    tracing::error!("audio output unavailable: {err}");
                    self.warning = Some(format!("Audio output unavailable: {err}"));
                    return;
                }
            }
        }

        let send_failed = if let Some(sink) = &self.audio {
            let params = SignalParams::audible(sink.sample_rate_hz);
            let envelope = synthesize(&morse, &params);
            let wave = AskModulator::new(&params).modulate(&envelope);
            let secs = wave.samples.len() as f32 / params.sample_rate_hz;
            tracing::info!(secs, "queueing playback");
            sink.tx.send(wave.samples).is_err()
        } else {
            false
        };

        if send_failed {
            self.warning = Some("Audio stream closed.".to_owned());
            self.audio = None;
        }
    }
}

impl eframe::App for AskSimulatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading("Morse Code ASK Simulator"));
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.label("Enter Text:");
                ui.text_edit_singleline(&mut self.input);
                if ui.button("Generate Waveform").clicked() {
                    self.generate();
                }
                if ui.button("Play").clicked() {
                    self.play();
                }
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            if let Some(warning) = &self.warning {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::YELLOW, warning);
            }

            if let Some(morse) = &self.morse {
                ui.add_space(8.0);
                ui.monospace(format!("Morse Code: {morse}"));
            }

            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Waveform, "Waveform");
                ui.selectable_value(&mut self.tab, Tab::Spectrum, "Spectrum");
            });
            ui.add_space(8.0);

            if let Some(wave) = &self.waveform {
                match self.tab {
                    Tab::Waveform => {
                        self.waveform_view
                            .render(ui, &self.title, wave, &self.envelope_trace)
                    }
                    Tab::Spectrum => self.spectrum_view.render(
                        ui,
                        SignalParams::default().sample_rate_hz,
                        &wave.samples,
                    ),
                }
            } else {
                ui.label("Enter text and press Generate Waveform to see the ASK signal.");
            }
        });
    }
}
