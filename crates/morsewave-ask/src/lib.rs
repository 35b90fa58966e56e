pub mod encode;
pub mod envelope;
pub mod modulator;
pub mod params;

pub use encode::text_to_morse;
pub use envelope::synthesize;
pub use modulator::{AskModulator, AskWaveform};
pub use params::SignalParams;
