//! The four dimension scorers
//!
//! Each scorer consumes its detector's signal bundle (impact also reads
//! the specificity bundle) and allocates exactly 25 points across its
//! sub-checks. Point weights are exact contracts, kept as consts so the
//! allocation is auditable at a glance.

use crate::config::Calibration;
use crate::detectors::{
    detect_action_verbs, detect_clarity_with, detect_impact, detect_specificity,
};
use crate::models::DimensionScore;
use tracing::debug;

// Clarity: 8 + 7 + 5 + 5 = 25
const NO_FILLER_POINTS: u32 = 8;
const NO_JARGON_POINTS: u32 = 7;
const CONCISE_POINTS: u32 = 5;
const BORDERLINE_LENGTH_POINTS: u32 = 3;
const TOO_SHORT_POINTS: u32 = 2;
const ACTIVE_VOICE_POINTS: u32 = 5;
const PASSIVE_VOICE_POINTS: u32 = 2;

// Impact: 10 + 10 + 5 = 25
const IMPACT_PRESENCE_POINTS: u32 = 10;
const COMPARISON_POINTS: u32 = 10;
const HARD_NUMBER_POINTS: u32 = 8;
const BARE_NUMBER_POINTS: u32 = 5;
const SCALE_POINTS: u32 = 5;

// Action: 15 + 5 + 5 = 25
const STRONG_OPENER_POINTS: u32 = 15;
const BURIED_VERB_POINTS: u32 = 8;
const VERB_VARIETY_POINTS: u32 = 5;
const SINGLE_VERB_POINTS: u32 = 3;
const NO_WEAK_VERB_POINTS: u32 = 5;

// Specificity: 10 + 8 + 7 = 25
const METRICS_POINTS: u32 = 10;
const SINGLE_METRIC_POINTS: u32 = 6;
const BARE_NUMBER_METRIC_POINTS: u32 = 3;
const FULL_CONTEXT_POINTS: u32 = 8;
const PARTIAL_CONTEXT_POINTS: u32 = 5;
const TIMEFRAME_POINTS: u32 = 7;

fn name_up_to_three(found: &[String]) -> String {
    found
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Score clarity with the default (sales) calibration
pub fn score_clarity(text: &str) -> DimensionScore {
    score_clarity_with(text, &Calibration::default())
}

/// Score clear, concise language: fillers, jargon, length, voice
pub fn score_clarity_with(text: &str, calibration: &Calibration) -> DimensionScore {
    let signals = detect_clarity_with(text, calibration);
    let mut dim = DimensionScore::new();

    // Filler words (8 pts)
    if !signals.has_fillers {
        dim.award(NO_FILLER_POINTS, "Clean, direct language with no filler words");
    } else {
        let points = NO_FILLER_POINTS.saturating_sub(signals.filler_penalty);
        dim.flag(
            points,
            format!(
                "Remove filler words: {}",
                name_up_to_three(&signals.fillers_found)
            ),
        );
    }

    // Jargon (7 pts)
    if !signals.has_jargon {
        dim.award(NO_JARGON_POINTS, "Free of jargon and buzzwords");
    } else {
        let points = NO_JARGON_POINTS.saturating_sub(signals.jargon_penalty);
        dim.flag(
            points,
            format!(
                "Replace jargon with plain language: {}",
                name_up_to_three(&signals.jargon_found)
            ),
        );
    }

    // Length (5 pts); the borderline bands earn partial credit silently
    if signals.is_concise && !signals.is_too_short {
        dim.award(CONCISE_POINTS, "Good length for a power statement");
    } else if signals.is_too_long {
        dim.flag(
            0,
            format!(
                "Too long - tighten to under {} words",
                calibration.word_band.too_long
            ),
        );
    } else if signals.is_too_short {
        dim.flag(TOO_SHORT_POINTS, "Too short - expand with more detail");
    } else {
        dim.add(BORDERLINE_LENGTH_POINTS);
    }

    // Active voice (5 pts)
    if !signals.has_passive_voice {
        dim.award(ACTIVE_VOICE_POINTS, "Active voice throughout");
    } else {
        dim.flag(
            PASSIVE_VOICE_POINTS,
            "Rewrite passive constructions in active voice",
        );
    }

    debug!(score = dim.score, "clarity scored");
    dim
}

/// Score demonstrated business and customer impact
pub fn score_impact(text: &str) -> DimensionScore {
    let impact = detect_impact(text);
    let numbers = detect_specificity(text);
    let mut dim = DimensionScore::new();

    // Business or customer impact (10 pts), one strength per family
    if impact.has_business_impact || impact.has_customer_impact {
        dim.add(IMPACT_PRESENCE_POINTS);
        if impact.has_business_impact {
            dim.strengths
                .push("Names concrete business impact".to_string());
        }
        if impact.has_customer_impact {
            dim.strengths.push("Names customer impact".to_string());
        }
    } else {
        dim.flag(0, "Add business or customer impact");
    }

    // Tiered quantification (10 pts): strict priority ladder, first rung
    // wins
    if numbers.has_comparisons {
        dim.award(
            COMPARISON_POINTS,
            "Quantifies the change with a direct comparison",
        );
    } else if numbers.has_percentages || numbers.has_dollar_amounts {
        dim.award(HARD_NUMBER_POINTS, "Backs the claim with hard numbers");
    } else if numbers.has_numbers {
        dim.flag(
            BARE_NUMBER_POINTS,
            "Quantify the impact further - turn raw numbers into outcomes",
        );
    } else {
        dim.flag(0, "Add quantified impact");
    }

    // Scale or organizational reach (5 pts)
    if impact.has_scale || numbers.has_team_context {
        dim.award(SCALE_POINTS, "Shows scale or organizational reach");
    } else {
        dim.flag(0, "Add context about the scale of the work");
    }

    debug!(score = dim.score, "impact scored");
    dim
}

/// Score action with the default (sales) calibration
pub fn score_action(text: &str) -> DimensionScore {
    score_action_with(text, &Calibration::default())
}

/// Score strong, active verb usage
pub fn score_action_with(text: &str, calibration: &Calibration) -> DimensionScore {
    let signals = detect_action_verbs(text);
    let mut dim = DimensionScore::new();

    // Opening word (15 pts): priority ladder, exactly one rung fires
    if signals.starts_with_strong_verb {
        dim.award(STRONG_OPENER_POINTS, "Opens with a strong action verb");
    } else if signals.starts_with_weak_pattern {
        dim.flag(0, "Replace the weak opening with a strong action verb");
    } else if signals.strong_verb_count > 0 {
        dim.flag(
            BURIED_VERB_POINTS,
            "Move your strongest action verb to the beginning",
        );
    } else {
        dim.flag(0, "Start with a strong action verb");
    }

    // Verb variety (5 pts); a single verb earns partial credit silently
    if signals.strong_verb_count >= 2 {
        dim.award(
            VERB_VARIETY_POINTS,
            format!(
                "Strong verb variety: {}",
                name_up_to_three(&signals.strong_verbs_found)
            ),
        );
    } else if signals.strong_verb_count == 1 {
        dim.add(SINGLE_VERB_POINTS);
    }

    // Weak verbs (5 pts); the deduction floor is calibration-scoped
    if !signals.has_weak_verbs {
        dim.award(NO_WEAK_VERB_POINTS, "No weak verbs diluting the message");
    } else {
        let points = calibration.profile.weak_verb_points(signals.weak_verb_count);
        dim.flag(
            points,
            format!(
                "Replace weak verbs: {}",
                name_up_to_three(&signals.weak_verbs_found)
            ),
        );
    }

    debug!(score = dim.score, "action scored");
    dim
}

/// Score concrete detail: metrics, context, timeframe
pub fn score_specificity(text: &str) -> DimensionScore {
    let signals = detect_specificity(text);
    let mut dim = DimensionScore::new();

    // Quantified metrics (10 pts): priority ladder over the metric count;
    // bare numbers only reach the third rung
    let metric_count = signals.metric_count();
    if metric_count >= 2 {
        dim.award(
            METRICS_POINTS,
            format!("{metric_count} quantified metrics anchor the claim"),
        );
    } else if metric_count == 1 {
        dim.flag(
            SINGLE_METRIC_POINTS,
            "Add more metrics - a single number is easy to dismiss",
        );
    } else if signals.has_numbers {
        dim.flag(
            BARE_NUMBER_METRIC_POINTS,
            "Convert bare numbers into meaningful metrics (%, $, time)",
        );
    } else {
        dim.flag(0, "Add specific numbers and metrics");
    }

    // Context (8 pts)
    if signals.has_context && signals.has_team_context {
        dim.award(FULL_CONTEXT_POINTS, "Names both the setting and the team");
    } else if signals.has_context || signals.has_team_context {
        dim.flag(
            PARTIAL_CONTEXT_POINTS,
            "Add more context - name the company or the team",
        );
    } else {
        dim.flag(0, "Add context about where this happened");
    }

    // Timeframe (7 pts)
    if signals.has_time_metrics || signals.has_temporal_cadence {
        dim.award(TIMEFRAME_POINTS, "Anchored to a concrete timeframe");
    } else {
        dim.flag(0, "Add a timeframe");
    }

    debug!(score = dim.score, "specificity scored");
    dim
}
