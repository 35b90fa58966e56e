use bitvec::slice::BitSlice;

use crate::params::SignalParams;

/// Time axis and samples produced by [`AskModulator::modulate`].
///
/// Both vectors always have the same length as the envelope they were
/// derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct AskWaveform {
    pub time: Vec<f32>,
    pub samples: Vec<f32>,
}

/// Multiplies an on/off envelope with a sinusoidal carrier (amplitude-shift
/// keying).
pub struct AskModulator {
    carrier_hz: f32,
    sample_rate_hz: f32,
}

impl AskModulator {
    pub fn new(params: &SignalParams) -> Self {
        Self {
            carrier_hz: params.carrier_hz,
            sample_rate_hz: params.sample_rate_hz,
        }
    }

    /// Modulate an envelope into an ASK waveform with its time axis.
    ///
    /// The axis runs evenly from 0 to `len / sample_rate` inclusive. An empty
    /// envelope yields empty outputs; a single-sample envelope yields the
    /// axis `[0.0]`.
    pub fn modulate(&self, envelope: &BitSlice) -> AskWaveform {
        let n = envelope.len();
        let span = n as f32 / self.sample_rate_hz;
        let step = if n > 1 { span / (n - 1) as f32 } else { 0.0 };

        let mut time = Vec::with_capacity(n);
        let mut samples = Vec::with_capacity(n);
        for (i, gate) in envelope.iter().by_vals().enumerate() {
            let t = i as f32 * step;
            time.push(t);
            if gate {
                samples.push((std::f32::consts::TAU * self.carrier_hz * t).sin());
            } else {
                samples.push(0.0);
            }
        }

        AskWaveform { time, samples }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{synthesize, text_to_morse};

    #[test]
    fn outputs_match_envelope_length() {
        let params = SignalParams::default();
        let env = synthesize(&text_to_morse("SOS"), &params);
        let wave = AskModulator::new(&params).modulate(&env);
        assert_eq!(wave.time.len(), env.len());
        assert_eq!(wave.samples.len(), env.len());
    }

    #[test]
    fn empty_envelope_yields_empty_waveform() {
        let params = SignalParams::default();
        let env = synthesize("", &params);
        let wave = AskModulator::new(&params).modulate(&env);
        assert!(wave.time.is_empty());
        assert!(wave.samples.is_empty());
    }

    #[test]
    fn single_sample_axis_is_origin() {
        let params = SignalParams::default();
        let mut env = bitvec::vec::BitVec::new();
        env.push(true);
        let wave = AskModulator::new(&params).modulate(&env);
        assert_eq!(wave.time, vec![0.0]);
        assert_eq!(wave.samples, vec![0.0]);
    }

    #[test]
    fn silent_where_envelope_is_off() {
        let params = SignalParams::default();
        let env = synthesize(&text_to_morse("E"), &params);
        let wave = AskModulator::new(&params).modulate(&env);
        for (gate, sample) in env.iter().by_vals().zip(&wave.samples) {
            if !gate {
                assert_eq!(*sample, 0.0);
            }
        }
    }

    #[test]
    fn samples_stay_within_unit_amplitude() {
        let params = SignalParams::default();
        let env = synthesize(&text_to_morse("PARIS"), &params);
        let wave = AskModulator::new(&params).modulate(&env);
        assert!(wave.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn axis_spans_envelope_duration() {
        let params = SignalParams::default();
        let env = synthesize("... --- ...", &params);
        let wave = AskModulator::new(&params).modulate(&env);
        let expected = env.len() as f32 / params.sample_rate_hz;
        assert!((wave.time.last().unwrap() - expected).abs() < 1e-3);
    }

    #[test]
    fn pipeline_is_deterministic() {
        let params = SignalParams::default();
        let run = || {
            let env = synthesize(&text_to_morse("HELLO 73"), &params);
            AskModulator::new(&params).modulate(&env)
        };
        assert_eq!(run(), run());
    }
}
