//! Condition ids and the id-to-profile mapping.
//!
//! The catalogue is a pure, read-only table. Parsing an unknown id falls
//! back to [`ConditionKind::NormalHeart`] rather than failing, matching the
//! permissive lookup contract of the engine: every id produces a signal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::{
    CardiacParams, ContractionParams, FetalParams, MovementParams, RespiratoryParams,
    RespiratoryVariant, SynthesisProfile,
};

/// A clinical condition the engine can emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionKind {
    /// Normal adult heart sounds. Default fallback for unknown ids.
    NormalHeart,
    /// Systolic ejection murmur.
    AorticStenosis,
    /// Systolic murmur with a softer first sound.
    MitralRegurgitation,
    /// Early diastolic murmur.
    AorticRegurgitation,
    /// Diastolic murmur at a low heart rate.
    MitralStenosis,
    /// Continuous machinery murmur (patent ductus arteriosus).
    PatentDuctus,
    /// Pericardial friction rub.
    Pericarditis,
    /// S3/S4 gallop rhythm.
    HeartFailure,
    /// Irregularly irregular RR intervals.
    AtrialFibrillation,
    /// Fast regular rhythm.
    Tachycardia,
    /// Slow regular rhythm.
    Bradycardia,
    /// Normal fetal heart sounds.
    FetalNormal,
    /// Fetal heart sounds with movement artifacts.
    FetalMovement,
    /// Fetal heart sounds with uterine contraction artifacts.
    UterineContraction,
    /// Normal vesicular breath sounds.
    NormalLung,
    /// Breath sounds with coarse inspiratory crackles.
    CoarseCrackles,
    /// Breath sounds with fine inspiratory crackles.
    FineCrackles,
    /// Breath sounds with an expiratory wheeze.
    Wheeze,
}

impl ConditionKind {
    /// Every catalogued condition, in display order.
    pub const ALL: [ConditionKind; 18] = [
        ConditionKind::NormalHeart,
        ConditionKind::AorticStenosis,
        ConditionKind::MitralRegurgitation,
        ConditionKind::AorticRegurgitation,
        ConditionKind::MitralStenosis,
        ConditionKind::PatentDuctus,
        ConditionKind::Pericarditis,
        ConditionKind::HeartFailure,
        ConditionKind::AtrialFibrillation,
        ConditionKind::Tachycardia,
        ConditionKind::Bradycardia,
        ConditionKind::FetalNormal,
        ConditionKind::FetalMovement,
        ConditionKind::UterineContraction,
        ConditionKind::NormalLung,
        ConditionKind::CoarseCrackles,
        ConditionKind::FineCrackles,
        ConditionKind::Wheeze,
    ];

    /// Resolves a condition id string.
    ///
    /// Ids are case-insensitive; spaces and underscores are treated as
    /// hyphens. Unknown ids resolve to [`ConditionKind::NormalHeart`];
    /// this lookup never fails.
    pub fn from_id(id: &str) -> Self {
        let norm = id.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match norm.as_str() {
            "normal-heart" => ConditionKind::NormalHeart,
            "aortic-stenosis" => ConditionKind::AorticStenosis,
            "mitral-regurgitation" => ConditionKind::MitralRegurgitation,
            "aortic-regurgitation" => ConditionKind::AorticRegurgitation,
            "mitral-stenosis" => ConditionKind::MitralStenosis,
            "patent-ductus" => ConditionKind::PatentDuctus,
            "pericarditis" => ConditionKind::Pericarditis,
            "heart-failure" => ConditionKind::HeartFailure,
            "atrial-fibrillation" => ConditionKind::AtrialFibrillation,
            "tachycardia" => ConditionKind::Tachycardia,
            "bradycardia" => ConditionKind::Bradycardia,
            "fetal-normal" => ConditionKind::FetalNormal,
            "fetal-movement" => ConditionKind::FetalMovement,
            "uterine-contraction" => ConditionKind::UterineContraction,
            "normal-lung" => ConditionKind::NormalLung,
            "coarse-crackles" => ConditionKind::CoarseCrackles,
            "fine-crackles" => ConditionKind::FineCrackles,
            "wheeze" => ConditionKind::Wheeze,
            _ => ConditionKind::NormalHeart,
        }
    }

    /// The stable kebab-case id for this condition.
    pub fn id(&self) -> &'static str {
        match self {
            ConditionKind::NormalHeart => "normal-heart",
            ConditionKind::AorticStenosis => "aortic-stenosis",
            ConditionKind::MitralRegurgitation => "mitral-regurgitation",
            ConditionKind::AorticRegurgitation => "aortic-regurgitation",
            ConditionKind::MitralStenosis => "mitral-stenosis",
            ConditionKind::PatentDuctus => "patent-ductus",
            ConditionKind::Pericarditis => "pericarditis",
            ConditionKind::HeartFailure => "heart-failure",
            ConditionKind::AtrialFibrillation => "atrial-fibrillation",
            ConditionKind::Tachycardia => "tachycardia",
            ConditionKind::Bradycardia => "bradycardia",
            ConditionKind::FetalNormal => "fetal-normal",
            ConditionKind::FetalMovement => "fetal-movement",
            ConditionKind::UterineContraction => "uterine-contraction",
            ConditionKind::NormalLung => "normal-lung",
            ConditionKind::CoarseCrackles => "coarse-crackles",
            ConditionKind::FineCrackles => "fine-crackles",
            ConditionKind::Wheeze => "wheeze",
        }
    }

    /// Human-readable label for catalogue listings.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionKind::NormalHeart => "Normal heart sounds",
            ConditionKind::AorticStenosis => "Aortic stenosis (systolic murmur)",
            ConditionKind::MitralRegurgitation => "Mitral regurgitation (systolic murmur)",
            ConditionKind::AorticRegurgitation => "Aortic regurgitation (diastolic murmur)",
            ConditionKind::MitralStenosis => "Mitral stenosis (diastolic murmur)",
            ConditionKind::PatentDuctus => "Patent ductus arteriosus (continuous murmur)",
            ConditionKind::Pericarditis => "Pericarditis (friction rub)",
            ConditionKind::HeartFailure => "Heart failure (S3/S4 gallop)",
            ConditionKind::AtrialFibrillation => "Atrial fibrillation",
            ConditionKind::Tachycardia => "Sinus tachycardia",
            ConditionKind::Bradycardia => "Sinus bradycardia",
            ConditionKind::FetalNormal => "Normal fetal heart sounds",
            ConditionKind::FetalMovement => "Fetal heart sounds with movement",
            ConditionKind::UterineContraction => "Fetal heart sounds with contractions",
            ConditionKind::NormalLung => "Normal vesicular breath sounds",
            ConditionKind::CoarseCrackles => "Coarse crackles",
            ConditionKind::FineCrackles => "Fine crackles",
            ConditionKind::Wheeze => "Expiratory wheeze",
        }
    }

    /// Builds the fixed synthesis profile for this condition.
    ///
    /// Every call returns a fresh value; profiles are never cached or
    /// shared between synthesis calls.
    pub fn profile(&self) -> SynthesisProfile {
        match self {
            ConditionKind::NormalHeart => SynthesisProfile::Cardiac(CardiacParams::default()),
            ConditionKind::AorticStenosis => SynthesisProfile::Cardiac(CardiacParams {
                heart_rate: 74.0,
                systolic_murmur: true,
                ..CardiacParams::default()
            }),
            ConditionKind::MitralRegurgitation => SynthesisProfile::Cardiac(CardiacParams {
                heart_rate: 78.0,
                noise_amp: 0.025,
                systolic_murmur: true,
                ..CardiacParams::default()
            }),
            ConditionKind::AorticRegurgitation => SynthesisProfile::Cardiac(CardiacParams {
                heart_rate: 76.0,
                diastolic_murmur: true,
                ..CardiacParams::default()
            }),
            ConditionKind::MitralStenosis => SynthesisProfile::Cardiac(CardiacParams {
                heart_rate: 62.0,
                diastolic_murmur: true,
                ..CardiacParams::default()
            }),
            ConditionKind::PatentDuctus => SynthesisProfile::Cardiac(CardiacParams {
                heart_rate: 80.0,
                continuous_murmur: true,
                ..CardiacParams::default()
            }),
            ConditionKind::Pericarditis => SynthesisProfile::Cardiac(CardiacParams {
                heart_rate: 88.0,
                friction_rub: true,
                ..CardiacParams::default()
            }),
            ConditionKind::HeartFailure => SynthesisProfile::Cardiac(CardiacParams {
                heart_rate: 65.0,
                gallop: true,
                ..CardiacParams::default()
            }),
            ConditionKind::AtrialFibrillation => SynthesisProfile::Cardiac(CardiacParams {
                heart_rate: 95.0,
                rr_jitter: 0.25,
                noise_amp: 0.03,
                ..CardiacParams::default()
            }),
            ConditionKind::Tachycardia => SynthesisProfile::Cardiac(CardiacParams {
                heart_rate: 120.0,
                ..CardiacParams::default()
            }),
            ConditionKind::Bradycardia => SynthesisProfile::Cardiac(CardiacParams {
                heart_rate: 45.0,
                ..CardiacParams::default()
            }),
            ConditionKind::FetalNormal => SynthesisProfile::Fetal(FetalParams::default()),
            ConditionKind::FetalMovement => SynthesisProfile::Fetal(FetalParams {
                movement: Some(MovementParams {
                    intensity: 0.8,
                    rate_per_min: 8.0,
                }),
                ..FetalParams::default()
            }),
            ConditionKind::UterineContraction => SynthesisProfile::Fetal(FetalParams {
                // Rates and durations are scaled to the short synthesis
                // windows this engine produces, not to clinical timescales.
                contractions: Some(ContractionParams {
                    rate_per_10min: 80.0,
                    duration_range: (3.0, 8.0),
                }),
                ..FetalParams::default()
            }),
            ConditionKind::NormalLung => {
                SynthesisProfile::Respiratory(RespiratoryParams::default())
            }
            ConditionKind::CoarseCrackles => SynthesisProfile::Respiratory(RespiratoryParams {
                noise_level: 0.1,
                variant: RespiratoryVariant::CoarseCrackles,
                ..RespiratoryParams::default()
            }),
            ConditionKind::FineCrackles => SynthesisProfile::Respiratory(RespiratoryParams {
                variant: RespiratoryVariant::FineCrackles,
                ..RespiratoryParams::default()
            }),
            ConditionKind::Wheeze => SynthesisProfile::Respiratory(RespiratoryParams {
                fundamental: 240.0,
                variant: RespiratoryVariant::Wheeze,
                ..RespiratoryParams::default()
            }),
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
