//! Powerscore - rule-based quality scoring for power statements
//!
//! A power statement is a short persuasive value-proposition paragraph.
//! Powerscore evaluates one deterministically across four weighted
//! dimensions (clarity, impact, action, specificity - 25 points each) and
//! reports a 0-100 composite score with machine-generated issues and
//! strengths for every point awarded or withheld.
//!
//! The engine is a pure, synchronous function pipeline:
//!
//! ```text
//! raw text ──▶ detectors ──▶ signal bundles ──▶ dimension scorers ──▶ aggregator
//! ```
//!
//! There is no I/O, no shared mutable state, and no failure mode: every
//! input, including empty text, maps to a valid [`ValidationResult`].
//!
//! ```
//! use powerscore::validate_power_statement;
//!
//! let result = validate_power_statement(
//!     "Led a team of 8 engineers to cut deployment time 75% in Q1, saving $500K annually.",
//! );
//! assert!(result.total_score >= 70);
//! ```

pub mod cli;
pub mod config;
pub mod detectors;
pub mod lexicon;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use config::{Calibration, CalibrationProfile, WordBand};
pub use detectors::{
    detect_action_verbs, detect_clarity, detect_clarity_with, detect_impact, detect_slop,
    detect_specificity, ActionSignals, ClaritySignals, ImpactSignals, SlopSignals,
    SpecificitySignals,
};
pub use models::{
    score_color, score_label, DimensionScore, ScoreColor, ScoreLabel, SlopDetection,
    ValidationResult, DIMENSION_MAX,
};
pub use scoring::{
    score_action, score_action_with, score_clarity, score_clarity_with, score_impact,
    score_specificity, validate_power_statement, validate_with_calibration,
};
