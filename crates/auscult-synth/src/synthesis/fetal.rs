//! Fetal heart sound synthesis.
//!
//! Structurally the same beat loop as the adult cardiac synthesizer, at a
//! fetal rate with higher-frequency, shorter sounds, plus two optional
//! artifact families: short band-limited movement bursts and slow
//! noise-enveloped uterine contractions.

use std::f64::consts::PI;

use auscult_spec::{ContractionParams, FetalParams, MovementParams};
use rand::Rng;
use rand_pcg::Pcg32;

use crate::filter::simple_bandpass;
use crate::noise::gaussian;
use crate::waveform::Waveform;

use super::{draw_rr, jittered_pulse, Synthesizer, MIN_SYSTOLE, TAIL_SECONDS};

/// Nominal fetal S1 shape: center frequency, duration, amplitude.
const S1: (f64, f64, f64) = (70.0, 0.045, 0.9);
/// Nominal fetal S2 shape.
const S2: (f64, f64, f64) = (85.0, 0.03, 0.65);

/// Movement burst band in Hz.
const MOVEMENT_BAND: (f64, f64) = (30.0, 80.0);
/// Movement burst duration range in seconds.
const MOVEMENT_DURATION: (f64, f64) = (0.1, 0.25);
/// Movement burst amplitude at full intensity.
const MOVEMENT_AMP: f64 = 0.45;

/// Contraction envelope amplitude.
const CONTRACTION_AMP: f64 = 0.3;

/// Fetal heart sound synthesizer.
#[derive(Debug, Clone)]
pub struct FetalSynth {
    params: FetalParams,
}

impl FetalSynth {
    /// Creates a synthesizer over a fixed parameter record.
    pub fn new(params: FetalParams) -> Self {
        Self { params }
    }
}

impl Synthesizer for FetalSynth {
    fn synthesize(&self, cycles: u32, _target_len: usize, rng: &mut Pcg32) -> Waveform {
        let p = &self.params;
        let fs = p.sample_rate;
        let mean_rr = 60.0 / p.heart_rate;

        let rr: Vec<f64> = (0..cycles).map(|_| draw_rr(mean_rr, p.rr_jitter, rng)).collect();
        let total = rr.iter().sum::<f64>() + TAIL_SECONDS;
        let len = (total * fs).round() as usize;
        let mut wave = Waveform::zeroed(len, 1.0 / fs);

        let mut offset = 0usize;
        for &rr_i in &rr {
            let beat_len = (rr_i * fs).floor() as usize;
            let systole = ((210.0 - 0.5 * p.heart_rate) / 1000.0 + 0.01 * gaussian(rng))
                .max(MIN_SYSTOLE);

            let s1 = jittered_pulse(S1.0, S1.1, S1.2, fs, rng);
            wave.overlay(offset, &s1);
            let s2 = jittered_pulse(S2.0, S2.1, S2.2, fs, rng);
            wave.overlay(offset + (systole * fs).floor() as usize, &s2);

            offset += beat_len;
        }

        if let Some(m) = &p.movement {
            add_movements(&mut wave, m, total, fs, rng);
        }
        if let Some(c) = &p.contractions {
            add_contractions(&mut wave, c, total, fs, rng);
        }

        for y in wave.y.iter_mut() {
            *y += p.noise_amp * gaussian(rng);
        }
        wave
    }
}

/// Expected-count draw: floor of the expectation plus a Bernoulli trial on
/// the fractional part.
fn stochastic_count(expected: f64, rng: &mut Pcg32) -> usize {
    let base = expected.max(0.0).floor();
    let extra = (rng.gen::<f64>() < expected - base) as usize;
    base as usize + extra
}

fn add_movements(
    wave: &mut Waveform,
    m: &MovementParams,
    total: f64,
    fs: f64,
    rng: &mut Pcg32,
) {
    let expected = m.rate_per_min * m.intensity * total / 60.0;
    for _ in 0..stochastic_count(expected, rng) {
        let dur = MOVEMENT_DURATION.0
            + (MOVEMENT_DURATION.1 - MOVEMENT_DURATION.0) * rng.gen::<f64>();
        let len = ((dur * fs) as usize).max(1);
        let start = (rng.gen::<f64>() * total * fs) as usize;

        let raw: Vec<f64> = (0..len).map(|_| gaussian(rng)).collect();
        let shaped: Vec<f64> = simple_bandpass(&raw, MOVEMENT_BAND.0, MOVEMENT_BAND.1, fs)
            .iter()
            .enumerate()
            .map(|(k, v)| MOVEMENT_AMP * m.intensity * v * (PI * k as f64 / len as f64).sin())
            .collect();
        wave.overlay(start, &shaped);
    }
}

fn add_contractions(
    wave: &mut Waveform,
    c: &ContractionParams,
    total: f64,
    fs: f64,
    rng: &mut Pcg32,
) {
    let expected = c.rate_per_10min * total / 600.0;
    let (lo, hi) = c.duration_range;
    for _ in 0..stochastic_count(expected, rng) {
        let dur = (lo + (hi - lo) * rng.gen::<f64>()).max(0.5);
        let len = ((dur * fs) as usize).max(1);
        let start = (rng.gen::<f64>() * total * fs) as usize;

        // Broadband noise under a slow half-sine envelope; anything past
        // the buffer end is clipped by the overlay.
        let burst: Vec<f64> = (0..len)
            .map(|k| CONTRACTION_AMP * (PI * k as f64 / len as f64).sin() * gaussian(rng))
            .collect();
        wave.overlay(start, &burst);
    }
}
