mod spectrum;
mod waveform;

pub use spectrum::SpectrumView;
pub use waveform::WaveformView;
