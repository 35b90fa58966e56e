use bitvec::vec::BitVec;

use crate::params::SignalParams;

/// Expand a Morse string into a sampled on/off envelope (1 = carrier on).
///
/// Every dot and dash is followed by one inter-symbol gap; each space in the
/// Morse string contributes three gaps of silence. Characters other than
/// '.', '-', and ' ' are skipped, so an empty string yields an empty
/// envelope.
pub fn synthesize(morse: &str, params: &SignalParams) -> BitVec {
    let mut gates = BitVec::new();
    for ch in morse.chars() {
        match ch {
            '.' => {
                push_gates(&mut gates, true, params.dot_samples());
                push_gates(&mut gates, false, params.gap_samples());
            }
            '-' => {
                push_gates(&mut gates, true, params.dash_samples());
                push_gates(&mut gates, false, params.gap_samples());
            }
            ' ' => push_gates(&mut gates, false, 3 * params.gap_samples()),
            _ => {}
        }
    }
    gates
}

fn push_gates(gates: &mut BitVec, value: bool, count: usize) {
    for _ in 0..count {
        gates.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_is_tone_then_gap() {
        let params = SignalParams::default();
        let env = synthesize(".", &params);
        assert_eq!(env.len(), 1200);
        assert!(env[..600].all());
        assert!(env[600..].not_any());
    }

    #[test]
    fn dash_is_longer_tone_then_gap() {
        let params = SignalParams::default();
        let env = synthesize("-", &params);
        assert_eq!(env.len(), 2400);
        assert!(env[..1800].all());
        assert!(env[1800..].not_any());
    }

    #[test]
    fn space_is_three_gaps_of_silence() {
        let params = SignalParams::default();
        let env = synthesize(" ", &params);
        assert_eq!(env.len(), 1800);
        assert!(env.not_any());
    }

    #[test]
    fn unknown_symbols_contribute_nothing() {
        let params = SignalParams::default();
        assert!(synthesize("x?/", &params).is_empty());
    }

    #[test]
    fn empty_morse_is_empty_envelope() {
        let params = SignalParams::default();
        assert!(synthesize("", &params).is_empty());
    }

    #[test]
    fn sos_sample_count() {
        // "... --- ..." = 6 dots, 3 dashes, 2 spaces.
        let params = SignalParams::default();
        let env = synthesize("... --- ...", &params);
        assert_eq!(env.len(), 6 * 1200 + 3 * 2400 + 2 * 1800);
        assert_eq!(env.len(), 18_000);
        assert_eq!(env.count_ones(), 6 * 600 + 3 * 1800);
    }
}
