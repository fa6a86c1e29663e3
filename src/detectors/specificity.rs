//! Specificity signal detection
//!
//! Extracts five independent match families (bare numbers, percentages,
//! dollar/scale amounts, time durations, quantity-noun phrases), plus
//! comparison phrasing ("reduced by 40"), setting context ("at Acme"),
//! organizational context ("team", "department"), and temporal cadence
//! words ("Q1", "annually").

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
static PERCENT_RE: OnceLock<Regex> = OnceLock::new();
static DOLLAR_RE: OnceLock<Regex> = OnceLock::new();
static TIME_RE: OnceLock<Regex> = OnceLock::new();
static QUANTITY_RE: OnceLock<Regex> = OnceLock::new();
static COMPARISON_RE: OnceLock<Regex> = OnceLock::new();
static CONTEXT_RE: OnceLock<Regex> = OnceLock::new();
static TEAM_RE: OnceLock<Regex> = OnceLock::new();
static CADENCE_RE: OnceLock<Regex> = OnceLock::new();

fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("valid number regex"))
}

fn percent_re() -> &'static Regex {
    PERCENT_RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?%").expect("valid percent regex"))
}

fn dollar_re() -> &'static Regex {
    DOLLAR_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\$[\d,]+(?:\.\d+)?\s*(?:[kmb]\b|million\b|billion\b|thousand\b)?|\b\d+(?:\.\d+)?\s+(?:million|billion|thousand)\b",
        )
        .expect("valid dollar regex")
    })
}

fn time_re() -> &'static Regex {
    TIME_RE.get_or_init(|| {
        Regex::new(r"(?i)\b\d+\s*(?:hour|day|week|month|year|quarter)s?\b")
            .expect("valid time regex")
    })
}

fn quantity_re() -> &'static Regex {
    QUANTITY_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b\d+\+?\s+(?:engineer|developer|designer|analyst|specialist|person|people|team|member|employee|contractor|client|customer|account|store|location|branch|region|country|market|dealership|rep)s?\b",
        )
        .expect("valid quantity regex")
    })
}

fn comparison_re() -> &'static Regex {
    COMPARISON_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:increased|decreased|reduced|improved|grew|doubled|tripled|cut|boosted|lowered|raised)\s+(?:\w+\s+){0,3}by\s+\d+",
        )
        .expect("valid comparison regex")
    })
}

// The trailing [A-Z] is deliberately case-sensitive: the capitalized
// word is the signal
fn context_re() -> &'static Regex {
    CONTEXT_RE.get_or_init(|| {
        Regex::new(r"\b(?:[Aa]t|[Ff]or|[Ww]ith|[Aa]cross)\s+[A-Z][A-Za-z]")
            .expect("valid context regex")
    })
}

fn team_re() -> &'static Regex {
    TEAM_RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:team|teams|department|company|organization|org|division|group|firm)\b")
            .expect("valid team regex")
    })
}

fn cadence_re() -> &'static Regex {
    CADENCE_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:quarter|quarterly|q[1-4]|annually|annual|monthly|weekly|yearly|year-over-year|yoy)\b",
        )
        .expect("valid cadence regex")
    })
}

/// Signals extracted by [`detect_specificity`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpecificitySignals {
    pub has_numbers: bool,
    pub number_count: u32,
    pub has_percentages: bool,
    pub percentage_count: u32,
    pub has_dollar_amounts: bool,
    pub dollar_count: u32,
    pub has_time_metrics: bool,
    pub time_count: u32,
    pub has_quantity_metrics: bool,
    pub quantity_count: u32,
    /// Comparison verb + "by" + number, e.g. "reduced costs by 40"
    pub has_comparisons: bool,
    /// Preposition + capitalized word, e.g. "at Acme"
    pub has_context: bool,
    /// Organizational noun present
    pub has_team_context: bool,
    /// Cadence word with no explicit duration, e.g. "Q1", "annually"
    pub has_temporal_cadence: bool,
}

impl SpecificitySignals {
    /// Meaningful metrics: percentages, dollar amounts, durations, and
    /// quantity phrases. Bare numbers do not count.
    pub fn metric_count(&self) -> u32 {
        self.percentage_count + self.dollar_count + self.time_count + self.quantity_count
    }
}

/// Detect quantification and context signals
pub fn detect_specificity(text: &str) -> SpecificitySignals {
    let number_count = number_re().find_iter(text).count() as u32;
    let percentage_count = percent_re().find_iter(text).count() as u32;
    let dollar_count = dollar_re().find_iter(text).count() as u32;
    let time_count = time_re().find_iter(text).count() as u32;
    let quantity_count = quantity_re().find_iter(text).count() as u32;

    SpecificitySignals {
        has_numbers: number_count > 0,
        number_count,
        has_percentages: percentage_count > 0,
        percentage_count,
        has_dollar_amounts: dollar_count > 0,
        dollar_count,
        has_time_metrics: time_count > 0,
        time_count,
        has_quantity_metrics: quantity_count > 0,
        quantity_count,
        has_comparisons: comparison_re().is_match(text),
        has_context: context_re().is_match(text),
        has_team_context: team_re().is_match(text),
        has_temporal_cadence: cadence_re().is_match(text),
    }
}
