//! Power-statement validation
//!
//! The aggregator: guards the input, runs the four dimension scorers,
//! sums their points, and applies the bounded slop deduction. Malformed
//! or empty input is a valid zero-score case, never an error; the scorer
//! must not take down a caller mid-render.

use crate::config::Calibration;
use crate::detectors::detect_slop;
use crate::models::{DimensionScore, SlopDetection, ValidationResult, SLOP_DEDUCTION_CAP};
use crate::scoring::{score_action_with, score_clarity_with, score_impact, score_specificity};
use tracing::debug;

/// Validate a power statement with the default (sales) calibration
pub fn validate_power_statement(text: &str) -> ValidationResult {
    validate_with_calibration(text, &Calibration::default())
}

/// Validate a power statement against a specific calibration
pub fn validate_with_calibration(text: &str, calibration: &Calibration) -> ValidationResult {
    if text.trim().chars().count() < calibration.min_chars {
        return zero_result();
    }

    let clarity = score_clarity_with(text, calibration);
    let impact = score_impact(text);
    let action = score_action_with(text, calibration);
    let specificity = score_specificity(text);

    let mut total_score = clarity.score + impact.score + action.score + specificity.score;

    let slop_detection = if calibration.slop_enabled {
        let slop = detect_slop(text);
        let deduction = SLOP_DEDUCTION_CAP.min(slop.penalty * 6 / 10);
        total_score = total_score.saturating_sub(deduction);
        Some(SlopDetection {
            penalty: slop.penalty,
            deduction,
            issues: slop.issues,
        })
    } else {
        None
    };

    debug!(
        clarity = clarity.score,
        impact = impact.score,
        action = action.score,
        specificity = specificity.score,
        total = total_score,
        "power statement scored"
    );

    ValidationResult {
        total_score,
        clarity,
        impact,
        action,
        specificity,
        slop_detection,
    }
}

fn zero_result() -> ValidationResult {
    ValidationResult {
        total_score: 0,
        clarity: DimensionScore::no_content(),
        impact: DimensionScore::no_content(),
        action: DimensionScore::no_content(),
        specificity: DimensionScore::no_content(),
        slop_detection: None,
    }
}
