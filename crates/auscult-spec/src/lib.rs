//! Auscult Condition Catalogue
//!
//! This crate provides the declarative side of the auscult simulator: the
//! catalogue of clinical conditions and the parameter records each condition
//! fixes for the synthesis backend.
//!
//! # Overview
//!
//! A condition is identified by a stable kebab-case id (`"heart-failure"`,
//! `"fine-crackles"`, ...). Each id maps to a read-only
//! [`SynthesisProfile`]: a tagged variant selecting one of the three
//! synthesis categories (cardiac, fetal, respiratory) together with its
//! fixed parameters. Unknown ids resolve to the default normal-heart
//! profile; lookup never fails.
//!
//! # Example
//!
//! ```
//! use auscult_spec::{ConditionKind, SynthesisProfile};
//!
//! let kind = ConditionKind::from_id("heart-failure");
//! assert_eq!(kind, ConditionKind::HeartFailure);
//!
//! match kind.profile() {
//!     SynthesisProfile::Cardiac(p) => {
//!         assert!(p.gallop);
//!         assert_eq!(p.heart_rate, 65.0);
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! # Modules
//!
//! - [`condition`]: Condition ids and the id-to-profile mapping
//! - [`params`]: Parameter records for the three synthesis categories

pub mod condition;
pub mod params;

// Re-export commonly used types at the crate root
pub use condition::ConditionKind;
pub use params::{
    CardiacParams, ContractionParams, FetalParams, MovementParams, Overtone, RespiratoryParams,
    RespiratoryVariant, SynthesisProfile,
};
