//! Synthesis implementations for the three signal categories.
//!
//! - `cardiac` - adult heart sounds with murmur, friction and gallop artifacts
//! - `fetal` - fetal heart sounds with movement and contraction artifacts
//! - `respiratory` - additive breath sound synthesis
//!
//! All three implement [`Synthesizer`], the single polymorphic seam the
//! dispatch layer drives.

pub mod cardiac;
pub mod fetal;
pub mod respiratory;

use rand_pcg::Pcg32;

use crate::noise::gaussian;
use crate::pulse::sinc_pulse;
use crate::waveform::Waveform;

/// Shortest admissible RR interval in seconds.
pub(crate) const MIN_RR: f64 = 0.2;
/// Shortest admissible S1-to-S2 gap in seconds.
pub(crate) const MIN_SYSTOLE: f64 = 0.02;
/// Silent run-out appended after the last beat, in seconds.
pub(crate) const TAIL_SECONDS: f64 = 0.5;

/// Common trait for the category synthesizers.
pub trait Synthesizer {
    /// Produces the raw waveform spanning `cycles` cycles.
    ///
    /// `target_len` is the sample count the dispatch layer normalizes to
    /// afterwards. The cardiac and fetal synthesizers render at their own
    /// internal sampling rate and ignore it; the respiratory synthesizer
    /// renders exactly `target_len` samples so the normalizing pass is an
    /// identity.
    fn synthesize(&self, cycles: u32, target_len: usize, rng: &mut Pcg32) -> Waveform;
}

/// Draws one RR interval: the mean plus a one-sided uniform lengthening.
///
/// `u` is uniform on `[0, 1)`, so jitter only ever lengthens the interval.
pub(crate) fn draw_rr(mean_rr: f64, jitter: f64, rng: &mut Pcg32) -> f64 {
    use rand::Rng;
    (mean_rr + jitter * mean_rr * rng.gen::<f64>()).max(MIN_RR)
}

/// Sinc pulse with per-beat amplitude, frequency and duration jitter.
///
/// Amplitude varies by about eight percent of nominal, frequency and
/// duration by a few percent, all from standard-normal draws.
pub(crate) fn jittered_pulse(
    freq: f64,
    duration: f64,
    amplitude: f64,
    fs: f64,
    rng: &mut Pcg32,
) -> Vec<f64> {
    let f = freq * (1.0 + 0.03 * gaussian(rng));
    let d = (duration * (1.0 + 0.05 * gaussian(rng))).max(0.01);
    let a = amplitude * (1.0 + 0.08 * gaussian(rng));
    sinc_pulse(f, d, fs, a)
}
