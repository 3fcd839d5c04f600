//! Random draw primitives: standard-normal and bounded-uniform samples.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;

/// One standard-normal sample via the Box-Muller transform.
///
/// Draws two independent uniforms and keeps only the cosine branch of the
/// transform; the paired sine-branch value is discarded. Two uniform draws
/// per Gaussian sample is the intended draw sequence, matched by every
/// consumer in the backend.
pub fn gaussian(rng: &mut Pcg32) -> f64 {
    let mut u1: f64 = rng.gen();
    // An exact zero would hit the logarithm singularity.
    while u1 == 0.0 {
        u1 = rng.gen();
    }
    let u2: f64 = rng.gen();

    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Uniform sample in `[-amplitude, amplitude]`.
pub fn noise(rng: &mut Pcg32, amplitude: f64) -> f64 {
    (rng.gen::<f64>() * 2.0 - 1.0) * amplitude
}
