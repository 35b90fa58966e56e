/// Timing and carrier parameters shared by the synthesizer and modulator.
///
/// Durations are in seconds, frequencies in Hz. Sample counts derived from
/// them truncate toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    pub dot_secs: f32,
    pub dash_secs: f32,
    pub gap_secs: f32,
    pub carrier_hz: f32,
    pub sample_rate_hz: f32,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            dot_secs: 0.3,
            dash_secs: 0.9,
            gap_secs: 0.3,
            carrier_hz: 10.0,
            sample_rate_hz: 2000.0,
        }
    }
}

impl SignalParams {
    /// Parameters for playback: a 700 Hz tone at the given device rate.
    ///
    /// The default 10 Hz carrier exists to be plotted; it is below the range
    /// of any speaker.
    pub fn audible(sample_rate_hz: f32) -> Self {
        Self {
            carrier_hz: 700.0,
            sample_rate_hz,
            ..Self::default()
        }
    }

    /// Samples of tone contributed by a dot.
    pub fn dot_samples(&self) -> usize {
        (self.dot_secs * self.sample_rate_hz) as usize
    }

    /// Samples of tone contributed by a dash.
    pub fn dash_samples(&self) -> usize {
        (self.dash_secs * self.sample_rate_hz) as usize
    }

    /// Samples of silence between symbols.
    pub fn gap_samples(&self) -> usize {
        (self.gap_secs * self.sample_rate_hz) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sample_counts() {
        let params = SignalParams::default();
        assert_eq!(params.dot_samples(), 600);
        assert_eq!(params.dash_samples(), 1800);
        assert_eq!(params.gap_samples(), 600);
    }

    #[test]
    fn counts_truncate() {
        let params = SignalParams {
            dot_secs: 0.0999,
            sample_rate_hz: 10.0,
            ..SignalParams::default()
        };
        assert_eq!(params.dot_samples(), 0);
    }
}
