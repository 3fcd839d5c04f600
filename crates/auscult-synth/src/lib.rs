//! Auscult Synthesis Backend
//!
//! This crate synthesizes finite-length numeric time series that emulate
//! physiological acoustic phenomena: adult cardiac sounds, fetal cardiac
//! sounds, and respiratory sounds, parameterized by a clinical-condition
//! id from `auscult-spec`.
//!
//! # Overview
//!
//! The caller supplies a condition id, a requested sample count, a cycle
//! count and a seed; the backend dispatches to the condition's synthesizer
//! (cardiac beat sequencing, fetal beat sequencing with movement and
//! contraction artifacts, or additive respiratory synthesis), then
//! normalizes the raw waveform to exactly the requested length with a
//! piecewise-linear resampling pass.
//!
//! # Determinism
//!
//! All randomness flows through one PCG32 generator per call, created from
//! the caller's seed. Given the same condition, lengths and seed, the
//! output is identical across runs; different seeds give statistically
//! equivalent but distinct signals.
//!
//! # Example
//!
//! ```
//! use auscult_synth::generate;
//!
//! let samples = generate("heart-failure", 4096, 8, 42)?;
//! assert_eq!(samples.len(), 4096);
//! # Ok::<(), auscult_synth::SynthError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point for signal generation
//! - [`noise`] - Standard-normal and bounded-uniform draw primitives
//! - [`filter`] - One-pole low/high-pass and crude band-pass
//! - [`pulse`] - Sinc pulse shaping for discrete heart-sound components
//! - [`resample`] - Length-normalizing linear resampler
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`synthesis`] - The cardiac, fetal and respiratory synthesizers
//! - [`waveform`] - Owned (time, value) sample buffers

pub mod error;
pub mod filter;
pub mod generate;
pub mod noise;
pub mod pulse;
pub mod resample;
pub mod rng;
pub mod synthesis;
pub mod waveform;

// Re-export main types at crate root
pub use error::{SynthError, SynthResult};
pub use generate::{generate, synthesize_raw};
pub use resample::resample;
pub use waveform::Waveform;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use auscult_spec::ConditionKind;

    #[test]
    fn test_full_pipeline_for_each_category() {
        for id in ["normal-heart", "fetal-normal", "normal-lung"] {
            let out = generate(id, 1000, 5, 42).expect("generation should succeed");
            assert_eq!(out.len(), 1000);
            assert!(out.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_repeated_calls_keep_shape_but_vary_with_seed() {
        // Shape idempotence: every call of the same request has the same
        // length, while different seeds vary the values
        let runs: Vec<Vec<f64>> = (0..4)
            .map(|seed| generate("atrial-fibrillation", 777, 6, seed).unwrap())
            .collect();
        assert!(runs.iter().all(|r| r.len() == 777));
        assert!(runs.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_signal_has_energy_above_noise_floor() {
        // A murmuring heart should carry clearly more energy than its
        // configured background noise alone
        let out = generate("aortic-stenosis", 8000, 8, 42).unwrap();
        let rms = (out.iter().map(|v| v * v).sum::<f64>() / out.len() as f64).sqrt();
        assert!(rms > 0.02, "rms {rms} is implausibly low");
    }

    #[test]
    fn test_catalogue_and_dispatch_agree() {
        // Every catalogued id resolves to itself, so the dispatch path
        // never hits the fallback unintentionally
        for kind in ConditionKind::ALL {
            assert_eq!(ConditionKind::from_id(kind.id()), kind);
            let out = generate(kind.id(), 64, 2, 1).unwrap();
            assert_eq!(out.len(), 64);
        }
    }
}
