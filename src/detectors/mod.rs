//! Signal detectors
//!
//! Each detector scans the statement once and returns an immutable bundle
//! of booleans, counts, and capped match lists. Detectors depend only on
//! the lexicons; the dimension scorers consume their bundles.
//!
//! ```text
//! raw text ──▶ detect_clarity ──────▶ ClaritySignals ─────▶ score_clarity
//!          ──▶ detect_impact ───────▶ ImpactSignals ──────▶ score_impact
//!          ──▶ detect_action_verbs ─▶ ActionSignals ──────▶ score_action
//!          ──▶ detect_specificity ──▶ SpecificitySignals ─▶ score_specificity
//!          ──▶ detect_slop ─────────▶ SlopSignals ────────▶ aggregator deduction
//! ```
//!
//! All matching is literal or pattern-based, word-boundary-aware, and
//! case-insensitive unless a detector notes otherwise.

mod action;
mod clarity;
mod impact;
mod slop;
mod specificity;

pub use action::{detect_action_verbs, ActionSignals};
pub use clarity::{detect_clarity, detect_clarity_with, ClaritySignals};
pub use impact::{detect_impact, ImpactSignals};
pub use slop::{detect_slop, SlopSignals};
pub use specificity::{detect_specificity, SpecificitySignals};

/// Matched-substring lists report at most this many entries
pub(crate) const MAX_REPORTED_MATCHES: usize = 5;

/// Deduplicate case-insensitively, preserving first-seen order, and cap
/// the list at [`MAX_REPORTED_MATCHES`]
pub(crate) fn dedup_and_cap(matches: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for m in matches {
        if seen.insert(m.to_lowercase()) {
            out.push(m);
            if out.len() >= MAX_REPORTED_MATCHES {
                break;
            }
        }
    }
    out
}
