//! Additive respiratory sound synthesis.
//!
//! Unlike the cardiac synthesizers, these render exactly the requested
//! number of samples: the target length doubles as the sampling grid, so
//! the dispatch layer's normalizing pass reproduces the buffer unchanged.
//!
//! The base sound is a fundamental plus integer overtones under a
//! per-breath envelope, with a uniform noise floor. Crackle variants add
//! short decaying impulse bursts during inspiration; the wheeze variant
//! superimposes a sustained narrow-band tone.

use std::f64::consts::PI;

use auscult_spec::{RespiratoryParams, RespiratoryVariant};
use rand::Rng;
use rand_pcg::Pcg32;

use crate::noise::noise;
use crate::waveform::Waveform;

use super::Synthesizer;

/// Overall level of the enveloped oscillation.
const BASE_LEVEL: f64 = 0.6;

/// Crackle burst shape per variant: center frequency, duration, amplitude.
const COARSE_CRACKLE: (f64, f64, f64) = (300.0, 0.009, 0.5);
const FINE_CRACKLE: (f64, f64, f64) = (650.0, 0.004, 0.4);
/// Crackle count range per respiratory cycle.
const COARSE_PER_CYCLE: (u32, u32) = (2, 5);
const FINE_PER_CYCLE: (u32, u32) = (4, 8);

/// Wheeze tone frequency in Hz and level relative to the base oscillation.
const WHEEZE_FREQ: f64 = 400.0;
const WHEEZE_LEVEL: f64 = 0.35;

/// Respiratory sound synthesizer.
#[derive(Debug, Clone)]
pub struct RespiratorySynth {
    params: RespiratoryParams,
}

impl RespiratorySynth {
    /// Creates a synthesizer over a fixed parameter record.
    pub fn new(params: RespiratoryParams) -> Self {
        Self { params }
    }
}

impl Synthesizer for RespiratorySynth {
    fn synthesize(&self, cycles: u32, target_len: usize, rng: &mut Pcg32) -> Waveform {
        let p = &self.params;
        let count = target_len.max(1);
        let period = 60.0 / p.breath_rate;
        let duration = cycles as f64 * period;
        let dt = if count > 1 { duration / (count - 1) as f64 } else { 0.0 };
        let mut wave = Waveform::zeroed(count, dt);

        for i in 0..count {
            let t = wave.t[i];
            // Zero at every cycle boundary, peaking mid-breath
            let env = (PI * t / period).sin().powi(2);

            let mut osc = (2.0 * PI * p.fundamental * t).sin();
            for ot in &p.overtones {
                osc += ot.level * (2.0 * PI * p.fundamental * ot.multiple as f64 * t).sin();
            }
            if p.variant == RespiratoryVariant::Wheeze {
                osc += WHEEZE_LEVEL * (2.0 * PI * WHEEZE_FREQ * t).sin();
            }

            wave.y[i] = BASE_LEVEL * env * osc + noise(rng, p.noise_level);
        }

        match p.variant {
            RespiratoryVariant::CoarseCrackles => {
                add_crackles(&mut wave, cycles, period, dt, COARSE_CRACKLE, COARSE_PER_CYCLE, rng);
            }
            RespiratoryVariant::FineCrackles => {
                add_crackles(&mut wave, cycles, period, dt, FINE_CRACKLE, FINE_PER_CYCLE, rng);
            }
            RespiratoryVariant::Normal | RespiratoryVariant::Wheeze => {}
        }

        wave
    }
}

/// Scatters decaying sine bursts over the inspiratory half of each cycle.
fn add_crackles(
    wave: &mut Waveform,
    cycles: u32,
    period: f64,
    dt: f64,
    shape: (f64, f64, f64),
    per_cycle: (u32, u32),
    rng: &mut Pcg32,
) {
    if dt <= 0.0 {
        return;
    }
    let (freq, dur, amp) = shape;
    let len = ((dur / dt) as usize).max(2);

    for c in 0..cycles {
        let n = rng.gen_range(per_cycle.0..=per_cycle.1);
        for _ in 0..n {
            let t0 = (c as f64 + 0.5 * rng.gen::<f64>()) * period;
            let start = (t0 / dt) as usize;
            let burst: Vec<f64> = (0..len)
                .map(|k| {
                    let tk = k as f64 * dt;
                    amp * (-6.0 * k as f64 / len as f64).exp() * (2.0 * PI * freq * tk).sin()
                })
                .collect();
            wave.overlay(start, &burst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    fn params(variant: RespiratoryVariant) -> RespiratoryParams {
        RespiratoryParams {
            variant,
            ..RespiratoryParams::default()
        }
    }

    #[test]
    fn test_output_length_matches_target() {
        let synth = RespiratorySynth::new(params(RespiratoryVariant::Normal));
        for target in [1, 2, 100, 1000, 20_000] {
            let mut rng = create_rng(42);
            let wave = synth.synthesize(6, target, &mut rng);
            assert_eq!(wave.len(), target);
        }
    }

    #[test]
    fn test_zero_cycles_is_noise_only() {
        let p = params(RespiratoryVariant::Normal);
        let noise_level = p.noise_level;
        let mut rng = create_rng(42);
        let wave = RespiratorySynth::new(p).synthesize(0, 500, &mut rng);
        assert_eq!(wave.len(), 500);
        for &v in &wave.y {
            assert!(v.abs() <= noise_level + 1e-12);
        }
    }

    #[test]
    fn test_time_axis_spans_all_cycles() {
        let mut rng = create_rng(42);
        let wave = RespiratorySynth::new(params(RespiratoryVariant::Normal))
            .synthesize(5, 2000, &mut rng);
        // 5 breaths at 15 per minute is 20 seconds
        let span = wave.t[wave.len() - 1];
        assert!((span - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_crackles_differ_from_normal() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let normal = RespiratorySynth::new(params(RespiratoryVariant::Normal))
            .synthesize(4, 4000, &mut rng1);
        let crackles = RespiratorySynth::new(params(RespiratoryVariant::CoarseCrackles))
            .synthesize(4, 4000, &mut rng2);
        assert_ne!(normal.y, crackles.y);
    }

    #[test]
    fn test_wheeze_adds_energy_to_base_sound() {
        let quiet = RespiratoryParams {
            noise_level: 0.0,
            ..RespiratoryParams::default()
        };
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let normal = RespiratorySynth::new(quiet.clone()).synthesize(3, 3000, &mut rng1);
        let wheeze = RespiratorySynth::new(RespiratoryParams {
            variant: RespiratoryVariant::Wheeze,
            ..quiet
        })
        .synthesize(3, 3000, &mut rng2);

        let energy = |w: &Waveform| w.y.iter().map(|v| v * v).sum::<f64>();
        assert!(energy(&wheeze) > energy(&normal));
    }

    #[test]
    fn test_determinism_with_same_seed() {
        let mut rng1 = create_rng(9);
        let mut rng2 = create_rng(9);
        let a = RespiratorySynth::new(params(RespiratoryVariant::FineCrackles))
            .synthesize(4, 2500, &mut rng1);
        let b = RespiratorySynth::new(params(RespiratoryVariant::FineCrackles))
            .synthesize(4, 2500, &mut rng2);
        assert_eq!(a.y, b.y);
    }
}
