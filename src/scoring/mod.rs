//! Dimension scoring and aggregation
//!
//! Converts detector signal bundles into four 25-point dimension scores
//! and a 0-100 composite, with an issue or strength string for every
//! explainable award or deduction.
//!
//! # Scoring Formula
//!
//! ```text
//! total = clarity + impact + action + specificity - slop_deduction
//!
//! Each dimension allocates 25 points across its sub-checks:
//!   clarity     = fillers(8)  + jargon(7)          + length(5)  + voice(5)
//!   impact      = presence(10) + quantification(10) + scale(5)
//!   action      = opener(15)  + verb variety(5)     + weak verbs(5)
//!   specificity = metrics(10) + context(8)          + timeframe(7)
//!
//! slop_deduction = min(5, floor(slop_penalty * 0.6))
//! total is floored at 0
//! ```
//!
//! Priority ladders (quantification, opener, metrics) are evaluated
//! top-to-bottom; exactly one rung fires.

mod dimensions;
mod validate;

pub use dimensions::{
    score_action, score_action_with, score_clarity, score_clarity_with, score_impact,
    score_specificity,
};
pub use validate::{validate_power_statement, validate_with_calibration};
