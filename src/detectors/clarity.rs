//! Clarity signal detection
//!
//! Runs the filler/jargon rule table over the statement, classifies the
//! word count against the calibrated band, and spots passive-voice
//! constructions ("was delivered", "were improved").

use crate::config::Calibration;
use crate::detectors::dedup_and_cap;
use crate::lexicon::{clarity_rules, RuleKind};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static PASSIVE_RE: OnceLock<Regex> = OnceLock::new();

fn passive_re() -> &'static Regex {
    PASSIVE_RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:was|were|been|being)\s+\w+ed\b").expect("valid passive regex")
    })
}

/// Signals extracted by [`detect_clarity`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClaritySignals {
    pub has_fillers: bool,
    pub filler_count: u32,
    /// Sum of rule weights across filler matches
    pub filler_penalty: u32,
    /// First distinct filler matches, capped
    pub fillers_found: Vec<String>,
    pub has_jargon: bool,
    pub jargon_count: u32,
    pub jargon_penalty: u32,
    pub jargon_found: Vec<String>,
    /// Whitespace-delimited tokens, empty tokens discarded
    pub word_count: u32,
    pub is_concise: bool,
    pub is_too_short: bool,
    pub is_too_long: bool,
    pub has_passive_voice: bool,
    /// Short human-readable flags, in fixed check order:
    /// fillers, jargon, length, voice
    pub indicators: Vec<String>,
}

/// Detect clarity signals with the default (sales) calibration
pub fn detect_clarity(text: &str) -> ClaritySignals {
    detect_clarity_with(text, &Calibration::default())
}

/// Detect clarity signals against a specific word band
pub fn detect_clarity_with(text: &str, calibration: &Calibration) -> ClaritySignals {
    let mut filler_count = 0u32;
    let mut filler_penalty = 0u32;
    let mut filler_matches = Vec::new();
    let mut jargon_count = 0u32;
    let mut jargon_penalty = 0u32;
    let mut jargon_matches = Vec::new();

    for rule in clarity_rules() {
        for m in rule.pattern.find_iter(text) {
            let matched = m.as_str().to_lowercase();
            match rule.kind {
                RuleKind::Filler => {
                    filler_count += 1;
                    filler_penalty += rule.weight;
                    filler_matches.push(matched);
                }
                RuleKind::Jargon => {
                    jargon_count += 1;
                    jargon_penalty += rule.weight;
                    jargon_matches.push(matched);
                }
            }
        }
    }

    let word_count = text.split_whitespace().count() as u32;
    let band = &calibration.word_band;
    let is_too_short = word_count < band.too_short;
    let is_too_long = word_count > band.too_long;
    let is_concise = word_count >= band.concise_min && word_count <= band.concise_max;
    let has_passive_voice = passive_re().is_match(text);

    let has_fillers = filler_count > 0;
    let has_jargon = jargon_count > 0;

    let mut indicators = Vec::new();
    indicators.push(if has_fillers {
        "filler words present".to_string()
    } else {
        "no filler words".to_string()
    });
    indicators.push(if has_jargon {
        "jargon detected".to_string()
    } else {
        "no jargon".to_string()
    });
    if is_concise {
        indicators.push("concise".to_string());
    } else if is_too_long {
        indicators.push("too long".to_string());
    } else if is_too_short {
        indicators.push("too short".to_string());
    }
    indicators.push(if has_passive_voice {
        "passive voice".to_string()
    } else {
        "active voice".to_string()
    });

    ClaritySignals {
        has_fillers,
        filler_count,
        filler_penalty,
        fillers_found: dedup_and_cap(filler_matches),
        has_jargon,
        jargon_count,
        jargon_penalty,
        jargon_found: dedup_and_cap(jargon_matches),
        word_count,
        is_concise,
        is_too_short,
        is_too_long,
        has_passive_voice,
        indicators,
    }
}
