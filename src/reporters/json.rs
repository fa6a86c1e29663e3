//! JSON reporter
//!
//! Outputs the full ValidationResult as pretty-printed JSON. Useful for
//! machine consumption, piping to jq, or further processing.

use crate::models::ValidationResult;
use anyhow::Result;

/// Render result as JSON
pub fn render(result: &ValidationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render result as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(result: &ValidationResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_json_render_valid() {
        let result = test_result();
        let json_str = render(&result).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["total_score"], result.total_score);
        assert_eq!(parsed["clarity"]["max_score"], 25);
    }

    #[test]
    fn test_json_render_compact() {
        let result = test_result();
        let json_str = render_compact(&result).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }

    #[test]
    fn test_json_omits_disabled_slop() {
        let mut calibration = crate::config::Calibration::default();
        calibration.slop_enabled = false;
        let result = crate::scoring::validate_with_calibration(
            "Led the team to cut onboarding time by 30% this quarter.",
            &calibration,
        );
        let json_str = render(&result).expect("render JSON");
        assert!(!json_str.contains("slop_detection"));
    }
}
