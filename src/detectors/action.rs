//! Action-verb signal detection
//!
//! Checks the opening word against the strong-verb lexicon, scans the
//! whole statement for strong and weak verbs, and flags weak openers
//! ("was responsible for", "helped with"). The two opening checks are
//! independent: a statement starting with a neutral word sets neither.

use crate::detectors::MAX_REPORTED_MATCHES;
use crate::lexicon::{is_strong_verb, strong_verb_re, weak_opener_re, weak_verb_re};
use serde::Serialize;
use std::collections::HashSet;

/// Signals extracted by [`detect_action_verbs`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionSignals {
    /// Lowercased first whitespace-delimited token, edge punctuation
    /// stripped
    pub opening_word: String,
    pub starts_with_strong_verb: bool,
    pub starts_with_weak_pattern: bool,
    /// Distinct strong verbs found anywhere in the statement
    pub strong_verb_count: u32,
    pub strong_verbs_found: Vec<String>,
    pub has_weak_verbs: bool,
    pub weak_verb_count: u32,
    pub weak_verbs_found: Vec<String>,
}

/// Scan a statement for strong and weak action verbs
pub fn detect_action_verbs(text: &str) -> ActionSignals {
    let opening_word = text
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    let starts_with_strong_verb = !opening_word.is_empty() && is_strong_verb(&opening_word);
    let starts_with_weak_pattern = weak_opener_re().is_match(text);

    let (strong_verb_count, strong_verbs_found) = distinct_matches(strong_verb_re(), text);
    let (weak_verb_count, weak_verbs_found) = distinct_matches(weak_verb_re(), text);

    ActionSignals {
        opening_word,
        starts_with_strong_verb,
        starts_with_weak_pattern,
        strong_verb_count,
        strong_verbs_found,
        has_weak_verbs: weak_verb_count > 0,
        weak_verb_count,
        weak_verbs_found,
    }
}

/// Count distinct lowercased matches; report the first few in match order
fn distinct_matches(re: &regex::Regex, text: &str) -> (u32, Vec<String>) {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for m in re.find_iter(text) {
        let word = m.as_str().to_lowercase();
        if seen.insert(word.clone()) && found.len() < MAX_REPORTED_MATCHES {
            found.push(word);
        }
    }
    (seen.len() as u32, found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_opener() {
        let signals = detect_action_verbs("Led team to deliver results.");
        assert!(signals.starts_with_strong_verb);
        assert!(!signals.starts_with_weak_pattern);
        assert_eq!(signals.opening_word, "led");
    }

    #[test]
    fn test_strong_opener_with_punctuation() {
        let signals = detect_action_verbs("\"Delivered\" the platform on time.");
        assert!(signals.starts_with_strong_verb);
        assert_eq!(signals.opening_word, "delivered");
    }

    #[test]
    fn test_weak_opener() {
        let signals = detect_action_verbs("Was responsible for managing the team.");
        assert!(signals.starts_with_weak_pattern);
        assert!(!signals.starts_with_strong_verb);
    }

    #[test]
    fn test_neutral_opener_sets_neither_flag() {
        let signals = detect_action_verbs("The team delivered the platform.");
        assert!(!signals.starts_with_strong_verb);
        assert!(!signals.starts_with_weak_pattern);
        assert_eq!(signals.strong_verb_count, 1);
    }

    #[test]
    fn test_counts_distinct_strong_verbs() {
        let signals = detect_action_verbs("Launched, launched, and launched the product we built.");
        assert_eq!(signals.strong_verb_count, 2); // launched, built
        assert_eq!(signals.strong_verbs_found, vec!["launched", "built"]);
    }

    #[test]
    fn test_weak_verbs() {
        let signals = detect_action_verbs("Helped and assisted with various projects.");
        assert!(signals.has_weak_verbs);
        assert_eq!(signals.weak_verb_count, 2);
        assert_eq!(signals.weak_verbs_found, vec!["helped", "assisted"]);
    }

    #[test]
    fn test_weak_phrases() {
        let signals = detect_action_verbs("I worked on the migration and was involved in planning.");
        assert!(signals.has_weak_verbs);
        assert!(signals
            .weak_verbs_found
            .contains(&"worked on".to_string()));
    }

    #[test]
    fn test_empty_text() {
        let signals = detect_action_verbs("");
        assert_eq!(signals.opening_word, "");
        assert!(!signals.starts_with_strong_verb);
        assert!(!signals.starts_with_weak_pattern);
        assert_eq!(signals.strong_verb_count, 0);
    }
}
