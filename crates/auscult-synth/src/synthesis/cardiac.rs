//! Adult cardiac sound synthesis.
//!
//! Each beat draws an RR interval, renders S1/S2 sinc pulses around a
//! rate-dependent systole gap, overlays whichever murmur, friction or
//! gallop artifacts the profile enables, then advances to the next beat.
//! A fixed tail and a global white-noise floor finish the waveform.

use std::f64::consts::PI;

use auscult_spec::CardiacParams;
use rand_pcg::Pcg32;

use crate::filter::simple_bandpass;
use crate::noise::gaussian;
use crate::pulse::sinc_pulse;
use crate::waveform::Waveform;

use super::{draw_rr, jittered_pulse, Synthesizer, MIN_SYSTOLE, TAIL_SECONDS};

/// Nominal S1 shape: center frequency, duration, amplitude.
const S1: (f64, f64, f64) = (50.0, 0.08, 1.0);
/// Nominal S2 shape.
const S2: (f64, f64, f64) = (60.0, 0.05, 0.8);

/// Murmur guard margins in seconds, keeping the noise clear of the pulses.
const SYSTOLIC_GUARD_IN: f64 = 0.04;
const SYSTOLIC_GUARD_OUT: f64 = 0.01;
const DIASTOLIC_GUARD_IN: f64 = 0.06;
const DIASTOLIC_GUARD_OUT: f64 = 0.02;

/// Friction rub burst positions as fractions of the beat length.
const FRICTION_PHASES: [f64; 2] = [0.05, 0.60];
/// Friction rub burst duration in seconds.
const FRICTION_DURATION: f64 = 0.02;

/// Adult cardiac sound synthesizer.
#[derive(Debug, Clone)]
pub struct CardiacSynth {
    params: CardiacParams,
}

impl CardiacSynth {
    /// Creates a synthesizer over a fixed parameter record.
    pub fn new(params: CardiacParams) -> Self {
        Self { params }
    }
}

impl Synthesizer for CardiacSynth {
    fn synthesize(&self, cycles: u32, _target_len: usize, rng: &mut Pcg32) -> Waveform {
        let p = &self.params;
        let fs = p.sample_rate;
        let mean_rr = 60.0 / p.heart_rate;

        // RR intervals are drawn up front; the buffer length depends on
        // their sum.
        let rr: Vec<f64> = (0..cycles).map(|_| draw_rr(mean_rr, p.rr_jitter, rng)).collect();
        let total = rr.iter().sum::<f64>() + TAIL_SECONDS;
        let len = (total * fs).round() as usize;
        let mut wave = Waveform::zeroed(len, 1.0 / fs);

        let mut offset = 0usize;
        for &rr_i in &rr {
            let beat_len = (rr_i * fs).floor() as usize;
            // Systole shortens as the heart speeds up.
            let systole = ((210.0 - 0.5 * p.heart_rate) / 1000.0 + 0.01 * gaussian(rng))
                .max(MIN_SYSTOLE);

            let s1 = jittered_pulse(S1.0, S1.1, S1.2, fs, rng);
            wave.overlay(offset, &s1);
            let s2 = jittered_pulse(S2.0, S2.1, S2.2, fs, rng);
            wave.overlay(offset + (systole * fs).floor() as usize, &s2);

            if p.systolic_murmur {
                add_systolic_murmur(&mut wave, offset, systole, fs, rng);
            }
            if p.diastolic_murmur {
                add_diastolic_murmur(&mut wave, offset, systole, beat_len, fs, rng);
            }
            if p.continuous_murmur {
                add_continuous_murmur(&mut wave, offset, beat_len, fs, rng);
            }
            if p.friction_rub {
                add_friction_rub(&mut wave, offset, beat_len, fs, rng);
            }
            if p.gallop {
                add_gallop(&mut wave, offset, beat_len, fs);
            }

            offset += beat_len;
        }

        for y in wave.y.iter_mut() {
            *y += p.noise_amp * gaussian(rng);
        }
        wave
    }
}

/// Band-passed Gaussian noise shaped by a window, overlaid onto the wave.
fn add_shaped_noise(
    wave: &mut Waveform,
    start: usize,
    len: usize,
    band: (f64, f64),
    scale: f64,
    window: impl Fn(f64) -> f64,
    fs: f64,
    rng: &mut Pcg32,
) {
    if len == 0 {
        return;
    }
    let raw: Vec<f64> = (0..len).map(|_| gaussian(rng)).collect();
    let shaped: Vec<f64> = simple_bandpass(&raw, band.0, band.1, fs)
        .iter()
        .enumerate()
        .map(|(k, v)| scale * v * window(k as f64 / len as f64))
        .collect();
    wave.overlay(start, &shaped);
}

fn add_systolic_murmur(wave: &mut Waveform, offset: usize, systole: f64, fs: f64, rng: &mut Pcg32) {
    let start = offset + (SYSTOLIC_GUARD_IN * fs).floor() as usize;
    let end = offset + ((systole - SYSTOLIC_GUARD_OUT) * fs).max(0.0).floor() as usize;
    if end <= start {
        return;
    }
    // Crescendo: rising half-sine over the S1-S2 gap
    add_shaped_noise(
        wave,
        start,
        end - start,
        (100.0, 400.0),
        0.2,
        |u| (0.5 * PI * u).sin(),
        fs,
        rng,
    );
}

fn add_diastolic_murmur(
    wave: &mut Waveform,
    offset: usize,
    systole: f64,
    beat_len: usize,
    fs: f64,
    rng: &mut Pcg32,
) {
    let start = offset + ((systole + DIASTOLIC_GUARD_IN) * fs).floor() as usize;
    let end = (offset + beat_len).saturating_sub((DIASTOLIC_GUARD_OUT * fs).floor() as usize);
    if end <= start {
        return;
    }
    // Decrescendo: falling half-sine from S2 towards the next beat
    add_shaped_noise(
        wave,
        start,
        end - start,
        (80.0, 300.0),
        0.18,
        |u| (0.5 * PI * u).cos(),
        fs,
        rng,
    );
}

fn add_continuous_murmur(
    wave: &mut Waveform,
    offset: usize,
    beat_len: usize,
    fs: f64,
    rng: &mut Pcg32,
) {
    add_shaped_noise(wave, offset, beat_len, (60.0, 250.0), 0.08, |_| 1.0, fs, rng);
}

fn add_friction_rub(
    wave: &mut Waveform,
    offset: usize,
    beat_len: usize,
    fs: f64,
    rng: &mut Pcg32,
) {
    let len = ((FRICTION_DURATION * fs).floor() as usize).max(1);
    for phase in FRICTION_PHASES {
        let start = offset + (phase * beat_len as f64) as usize;
        let burst: Vec<f64> = (0..len)
            .map(|k| 0.25 * (-4.0 * k as f64 / len as f64).exp() * gaussian(rng))
            .collect();
        wave.overlay(start, &burst);
    }
}

fn add_gallop(wave: &mut Waveform, offset: usize, beat_len: usize, fs: f64) {
    let s3 = sinc_pulse(40.0, 0.06, fs, 0.25);
    wave.overlay(offset + (0.70 * beat_len as f64) as usize, &s3);
    let s4 = sinc_pulse(45.0, 0.05, fs, 0.22);
    wave.overlay(offset + (0.90 * beat_len as f64) as usize, &s4);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    fn quiet(params: CardiacParams) -> CardiacParams {
        CardiacParams {
            rr_jitter: 0.0,
            noise_amp: 0.0,
            ..params
        }
    }

    #[test]
    fn test_fixed_rr_produces_expected_buffer_length() {
        // hr 75 -> mean RR 0.8 s; 10 beats + 0.5 s tail = 8.5 s at 1 kHz
        let params = quiet(CardiacParams {
            heart_rate: 75.0,
            ..CardiacParams::default()
        });
        let mut rng = create_rng(42);
        let wave = CardiacSynth::new(params).synthesize(10, 0, &mut rng);
        assert_eq!(wave.len(), 8500);
        assert_eq!(wave.t.len(), wave.y.len());
    }

    #[test]
    fn test_zero_cycles_yields_tail_only_buffer() {
        let params = CardiacParams::default();
        let mut rng = create_rng(42);
        let wave = CardiacSynth::new(params).synthesize(0, 0, &mut rng);
        assert_eq!(wave.len(), 500);
    }

    #[test]
    fn test_faster_rate_shortens_raw_buffer() {
        let mut rng = create_rng(42);
        let slow = CardiacSynth::new(quiet(CardiacParams {
            heart_rate: 60.0,
            ..CardiacParams::default()
        }))
        .synthesize(8, 0, &mut rng);
        let fast = CardiacSynth::new(quiet(CardiacParams {
            heart_rate: 100.0,
            ..CardiacParams::default()
        }))
        .synthesize(8, 0, &mut rng);
        assert!(fast.len() < slow.len());
    }

    #[test]
    fn test_rr_jitter_never_shortens_intervals() {
        // With jitter, the buffer can only be as long as or longer than
        // the jitter-free buffer of the same seed count
        let mut rng = create_rng(7);
        let base = CardiacSynth::new(quiet(CardiacParams::default())).synthesize(12, 0, &mut rng);
        let mut rng = create_rng(7);
        let jittered = CardiacSynth::new(CardiacParams {
            rr_jitter: 0.2,
            noise_amp: 0.0,
            ..CardiacParams::default()
        })
        .synthesize(12, 0, &mut rng);
        assert!(jittered.len() >= base.len());
    }

    #[test]
    fn test_determinism_with_same_seed() {
        let params = CardiacParams {
            systolic_murmur: true,
            ..CardiacParams::default()
        };
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let a = CardiacSynth::new(params.clone()).synthesize(5, 0, &mut rng1);
        let b = CardiacSynth::new(params).synthesize(5, 0, &mut rng2);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn test_murmur_flag_changes_output() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let plain =
            CardiacSynth::new(quiet(CardiacParams::default())).synthesize(5, 0, &mut rng1);
        let murmur = CardiacSynth::new(quiet(CardiacParams {
            systolic_murmur: true,
            ..CardiacParams::default()
        }))
        .synthesize(5, 0, &mut rng2);
        assert_eq!(plain.len(), murmur.len());
        assert_ne!(plain.y, murmur.y);
    }

    #[test]
    fn test_flags_compose_additively() {
        // Setting every artifact flag at once is allowed
        let params = CardiacParams {
            systolic_murmur: true,
            diastolic_murmur: true,
            continuous_murmur: true,
            friction_rub: true,
            gallop: true,
            ..CardiacParams::default()
        };
        let mut rng = create_rng(3);
        let wave = CardiacSynth::new(params).synthesize(4, 0, &mut rng);
        assert!(wave.y.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_time_axis_is_monotonic() {
        let mut rng = create_rng(42);
        let wave = CardiacSynth::new(CardiacParams::default()).synthesize(3, 0, &mut rng);
        assert!(wave.t.windows(2).all(|w| w[1] > w[0]));
    }
}
