//! Core data models for Powerscore
//!
//! These models are shared by the detectors, scorers, and reporters for
//! representing dimension scores and the composite validation result.

use serde::{Deserialize, Serialize};

/// Maximum points a single dimension can contribute.
pub const DIMENSION_MAX: u32 = 25;

/// Maximum composite score across all four dimensions.
pub const TOTAL_MAX: u32 = 100;

/// Points deducted for slop never exceed this cap.
pub const SLOP_DEDUCTION_CAP: u32 = 5;

/// Score breakdown for one quality dimension
///
/// Every explainable point award appends one string to `strengths`; every
/// explainable deduction appends one string to `issues`. The lists are
/// ordered by the fixed order the underlying checks run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: u32,
    pub max_score: u32,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
}

impl Default for DimensionScore {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionScore {
    pub fn new() -> Self {
        Self {
            score: 0,
            max_score: DIMENSION_MAX,
            issues: Vec::new(),
            strengths: Vec::new(),
        }
    }

    /// Award points with a strength explanation
    pub(crate) fn award(&mut self, points: u32, strength: impl Into<String>) {
        self.score += points;
        self.strengths.push(strength.into());
    }

    /// Record partial or zero credit with an issue explanation
    pub(crate) fn flag(&mut self, points: u32, issue: impl Into<String>) {
        self.score += points;
        self.issues.push(issue.into());
    }

    /// Award points with no explanation (borderline branches)
    pub(crate) fn add(&mut self, points: u32) {
        self.score += points;
    }

    /// A zero-score dimension carrying the empty-input issue
    pub(crate) fn no_content() -> Self {
        Self {
            score: 0,
            max_score: DIMENSION_MAX,
            issues: vec!["No content to validate".to_string()],
            strengths: Vec::new(),
        }
    }
}

/// Outcome of the generic-AI-phrasing check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlopDetection {
    /// Raw penalty accumulated across slop rules
    pub penalty: u32,
    /// Points actually subtracted from the total (bounded)
    pub deduction: u32,
    /// Remediation advice, one entry per distinct offense
    pub issues: Vec<String>,
}

/// Composite validation result for one power statement
///
/// Invariant: `total_score` equals the sum of the four dimension scores
/// minus the slop deduction, clamped to a minimum of 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub total_score: u32,
    pub clarity: DimensionScore,
    pub impact: DimensionScore,
    pub action: DimensionScore,
    pub specificity: DimensionScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slop_detection: Option<SlopDetection>,
}

impl ValidationResult {
    /// Sum of the four dimension scores, before any slop deduction
    pub fn dimension_sum(&self) -> u32 {
        self.clarity.score + self.impact.score + self.action.score + self.specificity.score
    }

    /// UI color tier for this result's total
    pub fn color(&self) -> ScoreColor {
        score_color(self.total_score)
    }

    /// Readiness label for this result's total
    pub fn label(&self) -> ScoreLabel {
        score_label(self.total_score)
    }
}

/// UI color tiers for a composite score
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Yellow,
    Orange,
    #[default]
    Red,
}

impl std::fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreColor::Green => write!(f, "green"),
            ScoreColor::Yellow => write!(f, "yellow"),
            ScoreColor::Orange => write!(f, "orange"),
            ScoreColor::Red => write!(f, "red"),
        }
    }
}

/// Readiness labels for a composite score
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum ScoreLabel {
    Excellent,
    Ready,
    #[serde(rename = "Needs Work")]
    NeedsWork,
    Draft,
    #[default]
    Incomplete,
}

impl std::fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreLabel::Excellent => write!(f, "Excellent"),
            ScoreLabel::Ready => write!(f, "Ready"),
            ScoreLabel::NeedsWork => write!(f, "Needs Work"),
            ScoreLabel::Draft => write!(f, "Draft"),
            ScoreLabel::Incomplete => write!(f, "Incomplete"),
        }
    }
}

/// Map a composite score to its UI color tier
pub fn score_color(score: u32) -> ScoreColor {
    match score {
        s if s >= 70 => ScoreColor::Green,
        s if s >= 50 => ScoreColor::Yellow,
        s if s >= 30 => ScoreColor::Orange,
        _ => ScoreColor::Red,
    }
}

/// Map a composite score to its readiness label
pub fn score_label(score: u32) -> ScoreLabel {
    match score {
        s if s >= 80 => ScoreLabel::Excellent,
        s if s >= 70 => ScoreLabel::Ready,
        s if s >= 50 => ScoreLabel::NeedsWork,
        s if s >= 30 => ScoreLabel::Draft,
        _ => ScoreLabel::Incomplete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color_tiers() {
        assert_eq!(score_color(100), ScoreColor::Green);
        assert_eq!(score_color(70), ScoreColor::Green);
        assert_eq!(score_color(69), ScoreColor::Yellow);
        assert_eq!(score_color(50), ScoreColor::Yellow);
        assert_eq!(score_color(49), ScoreColor::Orange);
        assert_eq!(score_color(30), ScoreColor::Orange);
        assert_eq!(score_color(29), ScoreColor::Red);
        assert_eq!(score_color(0), ScoreColor::Red);
    }

    #[test]
    fn test_score_label_tiers() {
        assert_eq!(score_label(95), ScoreLabel::Excellent);
        assert_eq!(score_label(80), ScoreLabel::Excellent);
        assert_eq!(score_label(79), ScoreLabel::Ready);
        assert_eq!(score_label(70), ScoreLabel::Ready);
        assert_eq!(score_label(69), ScoreLabel::NeedsWork);
        assert_eq!(score_label(50), ScoreLabel::NeedsWork);
        assert_eq!(score_label(49), ScoreLabel::Draft);
        assert_eq!(score_label(30), ScoreLabel::Draft);
        assert_eq!(score_label(29), ScoreLabel::Incomplete);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(ScoreLabel::NeedsWork.to_string(), "Needs Work");
        assert_eq!(ScoreColor::Orange.to_string(), "orange");
    }

    #[test]
    fn test_dimension_sum() {
        let mut result = ValidationResult {
            total_score: 0,
            clarity: DimensionScore::new(),
            impact: DimensionScore::new(),
            action: DimensionScore::new(),
            specificity: DimensionScore::new(),
            slop_detection: None,
        };
        result.clarity.add(20);
        result.impact.add(15);
        assert_eq!(result.dimension_sum(), 35);
    }
}
