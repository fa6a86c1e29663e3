//! Generic-AI-phrasing ("slop") detection
//!
//! An advisory detector for prose that reads as stock AI output: inflated
//! vocabulary, hedging transitions, meta-communication tells, and the
//! "not just X, but Y" cadence. The aggregator converts the raw penalty
//! into a bounded deduction, so slop can nudge the composite score but
//! never dominate it.

use crate::detectors::dedup_and_cap;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

const SLOP_WORD_WEIGHT: u32 = 2;
const SLOP_PHRASE_WEIGHT: u32 = 3;
const NOT_JUST_BUT_WEIGHT: u32 = 3;
const META_WEIGHT: u32 = 3;
const TRIADIC_WEIGHT: u32 = 1;
const TRIADIC_COUNT_CAP: usize = 3;

static SLOP_WORD_RE: OnceLock<Regex> = OnceLock::new();
static SLOP_PHRASE_RE: OnceLock<Regex> = OnceLock::new();
static NOT_JUST_BUT_RE: OnceLock<Regex> = OnceLock::new();
static META_RE: OnceLock<Regex> = OnceLock::new();
static TRIADIC_RE: OnceLock<Regex> = OnceLock::new();

/// Single-token vocabulary that marks generated prose
const SLOP_WORDS: &[&str] = &[
    // Adjectives
    "crucial",
    "groundbreaking",
    "pivotal",
    "paramount",
    "seamless",
    "seamlessly",
    "holistic",
    "multifaceted",
    "meticulous",
    "profound",
    "unparalleled",
    "robust",
    "transformative",
    // Verbs
    "delve",
    "delves",
    "delved",
    "delving",
    "embark",
    "embarked",
    "unleash",
    "unleashed",
    "unlock",
    "unlocked",
    "transcend",
    "underscore",
    "underscores",
    // Nouns
    "landscape",
    "tapestry",
    "journey",
    "testament",
    "trajectory",
    "nexus",
    "symphony",
    "odyssey",
    "pinnacle",
    "realm",
    "intricacies",
    // Hedging transitions
    "furthermore",
    "moreover",
    "additionally",
    "notably",
];

fn slop_word_re() -> &'static Regex {
    SLOP_WORD_RE.get_or_init(|| {
        let alt = SLOP_WORDS
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{alt})\b")).expect("valid slop-word regex")
    })
}

fn slop_phrase_re() -> &'static Regex {
    SLOP_PHRASE_RE.get_or_init(|| {
        let phrases = [
            "it's worth noting",
            "it's important to note",
            "at the end of the day",
            "in today's fast-paced",
            "as technology continues to",
            "let's dive in",
            "without further ado",
            "in conclusion",
            "in summary",
            "the bottom line is",
            "the key takeaway",
            "look no further",
            "we've got you covered",
            "take it to the next level",
            "in the ever-evolving",
        ];
        let alt = phrases
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i){alt}")).expect("valid slop-phrase regex")
    })
}

fn not_just_but_re() -> &'static Regex {
    NOT_JUST_BUT_RE.get_or_init(|| {
        Regex::new(r"(?i)\bnot (?:just|only) .{1,40}, but (?:also )?")
            .expect("valid not-just-but regex")
    })
}

fn meta_re() -> &'static Regex {
    META_RE.get_or_init(|| {
        Regex::new(
            r"(?i)let me know if|i hope this helps|feel free to|don't hesitate to|would you like",
        )
        .expect("valid meta regex")
    })
}

fn triadic_re() -> &'static Regex {
    TRIADIC_RE.get_or_init(|| Regex::new(r"(?i)\w+, \w+, and \w+").expect("valid triadic regex"))
}

/// Signals extracted by [`detect_slop`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct SlopSignals {
    /// Raw penalty, sum of rule weights across all matches
    pub penalty: u32,
    /// First distinct offending snippets, capped
    pub matches: Vec<String>,
    /// Remediation advice, one entry per distinct offense
    pub issues: Vec<String>,
}

/// Scan a statement for generic AI-sounding phrasing
pub fn detect_slop(text: &str) -> SlopSignals {
    let mut penalty = 0u32;
    let mut matches = Vec::new();
    let mut issues = Vec::new();

    for m in slop_word_re().find_iter(text) {
        let word = m.as_str().to_lowercase();
        penalty += SLOP_WORD_WEIGHT;
        issues.push(format!("Replace '{word}' with something concrete"));
        matches.push(word);
    }

    for m in slop_phrase_re().find_iter(text) {
        let phrase = m.as_str().to_lowercase();
        penalty += SLOP_PHRASE_WEIGHT;
        issues.push(format!("Cut '{phrase}' and state the point directly"));
        matches.push(phrase);
    }

    for m in not_just_but_re().find_iter(text) {
        let phrase = m.as_str().trim().to_lowercase();
        penalty += NOT_JUST_BUT_WEIGHT;
        issues.push("Drop the 'not just X, but Y' framing".to_string());
        matches.push(phrase);
    }

    for m in meta_re().find_iter(text) {
        let phrase = m.as_str().to_lowercase();
        penalty += META_WEIGHT;
        issues.push(format!("Remove '{phrase}', a direct AI tell"));
        matches.push(phrase);
    }

    let triadic_count = triadic_re().find_iter(text).count();
    if triadic_count > 0 {
        penalty += TRIADIC_WEIGHT * triadic_count.min(TRIADIC_COUNT_CAP) as u32;
        issues.push("Vary the list cadence; 'X, Y, and Z' triads read as generated".to_string());
        for m in triadic_re().find_iter(text).take(TRIADIC_COUNT_CAP) {
            matches.push(m.as_str().to_lowercase());
        }
    }

    SlopSignals {
        penalty,
        matches: dedup_and_cap(matches),
        issues: dedup(issues),
    }
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|i| seen.insert(i.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_has_no_penalty() {
        let signals = detect_slop("Led a team of 8 engineers to cut deployment time 75%.");
        assert_eq!(signals.penalty, 0);
        assert!(signals.matches.is_empty());
        assert!(signals.issues.is_empty());
    }

    #[test]
    fn test_slop_words() {
        let signals = detect_slop("A seamless, robust solution for the modern landscape.");
        assert_eq!(signals.penalty, 3 * SLOP_WORD_WEIGHT);
        assert!(signals.matches.contains(&"seamless".to_string()));
    }

    #[test]
    fn test_slop_phrases() {
        let signals = detect_slop("At the end of the day, results matter.");
        assert_eq!(signals.penalty, SLOP_PHRASE_WEIGHT);
    }

    #[test]
    fn test_not_just_but() {
        let signals = detect_slop("This is not just a tool, but also a partner.");
        assert_eq!(signals.penalty, NOT_JUST_BUT_WEIGHT);
        assert!(signals.issues[0].contains("not just X, but Y"));
    }

    #[test]
    fn test_meta_communication() {
        let signals = detect_slop("Let me know if you need anything else.");
        assert_eq!(signals.penalty, META_WEIGHT);
    }

    #[test]
    fn test_triadic_capped() {
        let text = "fast, cheap, and good; quick, easy, and fun; big, bold, and bright; red, green, and blue";
        let signals = detect_slop(text);
        assert_eq!(signals.penalty, TRIADIC_WEIGHT * TRIADIC_COUNT_CAP as u32);
    }

    #[test]
    fn test_duplicate_advice_collapsed() {
        let signals = detect_slop("A robust plan with a robust team and robust tools.");
        assert_eq!(signals.penalty, 3 * SLOP_WORD_WEIGHT);
        assert_eq!(signals.issues.len(), 1);
        assert_eq!(signals.matches, vec!["robust"]);
    }
}
