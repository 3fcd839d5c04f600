//! Parameter records for the three synthesis categories.
//!
//! These are the fixed, per-condition configuration values handed to the
//! synthesis backend. They are immutable for the duration of one synthesis
//! call; nothing in the backend writes them back.

use serde::{Deserialize, Serialize};

/// Parameters for cardiac sound synthesis.
///
/// The artifact flags are independent booleans. The built-in catalogue only
/// ever sets one of them per condition, but callers composing their own
/// profiles may combine any subset; the engine overlays them additively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardiacParams {
    /// Internal sampling rate in Hz.
    pub sample_rate: f64,
    /// Heart rate in beats per minute.
    pub heart_rate: f64,
    /// Amplitude of the global white noise added to every output sample.
    pub noise_amp: f64,
    /// One-sided RR lengthening fraction. Each RR interval is drawn as
    /// `mean_rr + rr_jitter * mean_rr * u` with `u` uniform in `[0, 1)`, so
    /// the jitter only ever lengthens intervals, never shortens them.
    pub rr_jitter: f64,
    /// Band-passed noise over the S1-to-S2 gap (e.g. aortic stenosis).
    pub systolic_murmur: bool,
    /// Band-passed noise over the S2-to-next-beat gap (e.g. regurgitation).
    pub diastolic_murmur: bool,
    /// Unwindowed band-passed noise across the whole beat (e.g. PDA).
    pub continuous_murmur: bool,
    /// Paired decaying noise bursts per beat (pericardial friction rub).
    pub friction_rub: bool,
    /// Extra low-frequency S3/S4 pulses late in the beat.
    pub gallop: bool,
}

impl Default for CardiacParams {
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            heart_rate: 72.0,
            noise_amp: 0.02,
            rr_jitter: 0.03,
            systolic_murmur: false,
            diastolic_murmur: false,
            continuous_murmur: false,
            friction_rub: false,
            gallop: false,
        }
    }
}

/// Fetal movement artifact configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementParams {
    /// Relative movement intensity (0.0 to 1.0).
    pub intensity: f64,
    /// Expected movements per minute at full intensity.
    pub rate_per_min: f64,
}

/// Uterine contraction artifact configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractionParams {
    /// Expected contractions per ten minutes.
    pub rate_per_10min: f64,
    /// Contraction duration range in seconds, drawn uniformly per event.
    pub duration_range: (f64, f64),
}

/// Parameters for fetal heart sound synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetalParams {
    /// Internal sampling rate in Hz.
    pub sample_rate: f64,
    /// Fetal heart rate in beats per minute.
    pub heart_rate: f64,
    /// Amplitude of the global white noise added to every output sample.
    pub noise_amp: f64,
    /// One-sided RR lengthening fraction, as for [`CardiacParams`].
    pub rr_jitter: f64,
    /// Fetal movement artifacts, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement: Option<MovementParams>,
    /// Uterine contraction artifacts, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractions: Option<ContractionParams>,
}

impl Default for FetalParams {
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            heart_rate: 140.0,
            noise_amp: 0.03,
            rr_jitter: 0.05,
            movement: None,
            contractions: None,
        }
    }
}

/// A single overtone of the respiratory base oscillation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overtone {
    /// Integer multiple of the fundamental frequency.
    pub multiple: u32,
    /// Relative level (fundamental is 1.0).
    pub level: f64,
}

/// Respiratory sound variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespiratoryVariant {
    /// Vesicular breath sound with no adventitious components.
    Normal,
    /// Low-frequency, longer crackle bursts during inspiration.
    CoarseCrackles,
    /// High-frequency, shorter crackle bursts during inspiration.
    FineCrackles,
    /// Sustained narrow-band tone superimposed on the breath sound.
    Wheeze,
}

/// Parameters for respiratory sound synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespiratoryParams {
    /// Breathing rate in breaths per minute.
    pub breath_rate: f64,
    /// Fundamental frequency of the base oscillation in Hz.
    pub fundamental: f64,
    /// Overtone table added on top of the fundamental.
    pub overtones: Vec<Overtone>,
    /// Amplitude of the uniform background noise.
    pub noise_level: f64,
    /// Adventitious sound variant.
    pub variant: RespiratoryVariant,
}

impl Default for RespiratoryParams {
    fn default() -> Self {
        Self {
            breath_rate: 15.0,
            fundamental: 220.0,
            overtones: vec![
                Overtone {
                    multiple: 2,
                    level: 0.5,
                },
                Overtone {
                    multiple: 3,
                    level: 0.25,
                },
            ],
            noise_level: 0.08,
            variant: RespiratoryVariant::Normal,
        }
    }
}

/// A fully parameterized synthesis selection for one condition.
///
/// This is the read-only value the id-to-profile mapping produces; the
/// backend dispatches on the category and consumes the inner record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum SynthesisProfile {
    /// Adult cardiac sound synthesis.
    Cardiac(CardiacParams),
    /// Fetal cardiac sound synthesis with optional artifacts.
    Fetal(FetalParams),
    /// Respiratory sound synthesis.
    Respiratory(RespiratoryParams),
}
