//! Sinc pulse shaping for discrete heart-sound components.
//!
//! S1 through S4 are rendered as short band-limited clicks: a sinc shape
//! whose main lobe width follows the component's center frequency.

use std::f64::consts::PI;

/// Normalized sinc, `sin(PI*x) / (PI*x)` with `sinc(0) = 1`.
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Samples `amplitude * sinc(2 * center_freq * t)` over `floor(fs * duration)`
/// points evenly spaced across `[-duration/2, duration/2]`, endpoints
/// included.
///
/// Degenerate durations yield an empty or single-sample pulse rather than
/// failing.
pub fn sinc_pulse(center_freq: f64, duration: f64, fs: f64, amplitude: f64) -> Vec<f64> {
    let n = (fs * duration).max(0.0).floor() as usize;
    match n {
        0 => Vec::new(),
        1 => vec![amplitude],
        _ => {
            let step = duration / (n - 1) as f64;
            (0..n)
                .map(|k| {
                    let t = -duration / 2.0 + k as f64 * step;
                    amplitude * sinc(2.0 * center_freq * t)
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_length_is_floor_of_fs_times_duration() {
        assert_eq!(sinc_pulse(50.0, 0.08, 1000.0, 1.0).len(), 80);
        assert_eq!(sinc_pulse(60.0, 0.05, 1000.0, 1.0).len(), 50);
    }

    #[test]
    fn test_pulse_peaks_at_center() {
        // Odd point count puts one sample exactly at t = 0
        let pulse = sinc_pulse(50.0, 0.081, 1000.0, 0.7);
        assert_eq!(pulse.len(), 81);
        assert_eq!(pulse[40], 0.7);
        for &v in &pulse {
            assert!(v.abs() <= 0.7 + 1e-12);
        }
    }

    #[test]
    fn test_pulse_is_symmetric() {
        let pulse = sinc_pulse(40.0, 0.06, 1000.0, 1.0);
        let n = pulse.len();
        for k in 0..n / 2 {
            assert!(
                (pulse[k] - pulse[n - 1 - k]).abs() < 1e-9,
                "asymmetry at {k}: {} vs {}",
                pulse[k],
                pulse[n - 1 - k]
            );
        }
    }

    #[test]
    fn test_degenerate_durations() {
        assert!(sinc_pulse(50.0, 0.0, 1000.0, 1.0).is_empty());
        assert!(sinc_pulse(50.0, -0.1, 1000.0, 1.0).is_empty());
        assert_eq!(sinc_pulse(50.0, 0.0015, 1000.0, 0.5), vec![0.5]);
    }
}
