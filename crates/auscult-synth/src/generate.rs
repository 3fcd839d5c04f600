//! Condition dispatch and the public generation entry point.
//!
//! The catalogue maps a condition id to a fully parameterized synthesizer;
//! this module runs it and normalizes the result to the requested length.

use auscult_spec::{ConditionKind, SynthesisProfile};
use rand_pcg::Pcg32;

use crate::error::{SynthError, SynthResult};
use crate::resample::resample;
use crate::rng::create_rng;
use crate::synthesis::cardiac::CardiacSynth;
use crate::synthesis::fetal::FetalSynth;
use crate::synthesis::respiratory::RespiratorySynth;
use crate::synthesis::Synthesizer;
use crate::waveform::Waveform;

/// Generates a condition signal of exactly `sample_count` samples.
///
/// `condition_id` is resolved through the catalogue; unknown ids fall back
/// to the normal-heart profile rather than failing. `cycles` is the number
/// of cardiac or respiratory cycles to span; zero yields a short
/// noise-dominated buffer, not an error. Identical arguments with the same
/// `seed` produce identical output.
///
/// # Errors
/// [`SynthError::InvalidParameter`] when `sample_count` is zero. No other
/// input is rejected.
pub fn generate(
    condition_id: &str,
    sample_count: usize,
    cycles: u32,
    seed: u32,
) -> SynthResult<Vec<f64>> {
    if sample_count == 0 {
        return Err(SynthError::invalid_param("sample_count", "must be at least 1"));
    }

    let kind = ConditionKind::from_id(condition_id);
    let mut rng = create_rng(seed);
    let wave = synthesize_raw(kind, cycles, sample_count, &mut rng);

    Ok(resample(&wave.t, &wave.y, sample_count))
}

/// Runs the condition's synthesizer without the length-normalizing pass.
///
/// The cardiac and fetal synthesizers return buffers at their internal
/// sampling rate; the respiratory synthesizer already honors `target_len`.
pub fn synthesize_raw(
    kind: ConditionKind,
    cycles: u32,
    target_len: usize,
    rng: &mut Pcg32,
) -> Waveform {
    match kind.profile() {
        SynthesisProfile::Cardiac(p) => CardiacSynth::new(p).synthesize(cycles, target_len, rng),
        SynthesisProfile::Fetal(p) => FetalSynth::new(p).synthesize(cycles, target_len, rng),
        SynthesisProfile::Respiratory(p) => {
            RespiratorySynth::new(p).synthesize(cycles, target_len, rng)
        }
    }
}
