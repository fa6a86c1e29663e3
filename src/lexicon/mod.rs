//! Static lexicons for power-statement scoring
//!
//! Domain knowledge tables, no logic: strong action verbs, weak
//! verbs/openers, and the filler/jargon pattern-rule table. Everything here
//! is immutable, built once behind `OnceLock`, and safe to share across
//! threads without synchronization.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Strong action verbs, stored in past tense as they appear in finished
/// statements. Grouped loosely by theme; the groups have no semantic
/// meaning at match time.
pub const STRONG_VERBS: &[&str] = &[
    // Leadership and team direction
    "led",
    "directed",
    "managed",
    "supervised",
    "oversaw",
    "chaired",
    "headed",
    "guided",
    "steered",
    "coordinated",
    "orchestrated",
    "mobilized",
    "delegated",
    "empowered",
    "aligned",
    "unified",
    "rallied",
    "presided",
    "captained",
    "spearheaded",
    "championed",
    "drove",
    "piloted",
    "shepherded",
    "mentored",
    "coached",
    "trained",
    "onboarded",
    "recruited",
    "hired",
    "staffed",
    "promoted",
    "appointed",
    "organized",
    "restructured",
    "reorganized",
    "galvanized",
    "motivated",
    "inspired",
    // Building and creation
    "built",
    "created",
    "developed",
    "designed",
    "architected",
    "engineered",
    "constructed",
    "established",
    "founded",
    "launched",
    "initiated",
    "instituted",
    "introduced",
    "pioneered",
    "invented",
    "devised",
    "formulated",
    "crafted",
    "authored",
    "drafted",
    "composed",
    "produced",
    "assembled",
    "prototyped",
    "programmed",
    "coded",
    "scripted",
    "implemented",
    "deployed",
    "shipped",
    "released",
    "installed",
    "configured",
    "customized",
    "integrated",
    "migrated",
    "ported",
    "refactored",
    "rebuilt",
    "redesigned",
    // Growth and revenue
    "grew",
    "increased",
    "expanded",
    "scaled",
    "accelerated",
    "boosted",
    "amplified",
    "multiplied",
    "doubled",
    "tripled",
    "quadrupled",
    "maximized",
    "generated",
    "earned",
    "captured",
    "monetized",
    "acquired",
    "won",
    "secured",
    "closed",
    "sold",
    "upsold",
    "renewed",
    "retained",
    "converted",
    "attracted",
    "gained",
    "broadened",
    "deepened",
    "extended",
    "enlarged",
    "propelled",
    "advanced",
    "elevated",
    "outpaced",
    "outsold",
    // Optimization and efficiency
    "optimized",
    "streamlined",
    "improved",
    "enhanced",
    "refined",
    "simplified",
    "standardized",
    "automated",
    "systematized",
    "modernized",
    "upgraded",
    "revamped",
    "overhauled",
    "reduced",
    "decreased",
    "cut",
    "trimmed",
    "lowered",
    "minimized",
    "eliminated",
    "removed",
    "shortened",
    "compressed",
    "consolidated",
    "saved",
    "conserved",
    "recovered",
    "reclaimed",
    "salvaged",
    "tuned",
    "calibrated",
    "rationalized",
    "debugged",
    "stabilized",
    "hardened",
    // Delivery and execution
    "delivered",
    "executed",
    "completed",
    "finished",
    "achieved",
    "accomplished",
    "attained",
    "exceeded",
    "surpassed",
    "outperformed",
    "beat",
    "fulfilled",
    "realized",
    "finalized",
    "concluded",
    "performed",
    "conducted",
    "administered",
    "operated",
    "maintained",
    "sustained",
    "processed",
    "handled",
    "resolved",
    "solved",
    "fixed",
    "repaired",
    "remediated",
    "corrected",
    "addressed",
    "mitigated",
    "prevented",
    "averted",
    "overcame",
    "troubleshot",
    "expedited",
    // Analysis and strategy
    "analyzed",
    "assessed",
    "evaluated",
    "audited",
    "measured",
    "quantified",
    "benchmarked",
    "forecasted",
    "projected",
    "modeled",
    "diagnosed",
    "investigated",
    "researched",
    "studied",
    "examined",
    "surveyed",
    "mapped",
    "identified",
    "discovered",
    "uncovered",
    "detected",
    "pinpointed",
    "prioritized",
    "planned",
    "strategized",
    "scoped",
    "defined",
    "specified",
    "validated",
    "verified",
    "tested",
    "reviewed",
    "inspected",
    "monitored",
    "tracked",
    "profiled",
    "segmented",
    "synthesized",
    // Communication and influence
    "presented",
    "communicated",
    "articulated",
    "reported",
    "briefed",
    "documented",
    "published",
    "wrote",
    "edited",
    "translated",
    "summarized",
    "persuaded",
    "negotiated",
    "influenced",
    "convinced",
    "advocated",
    "pitched",
    "demonstrated",
    "illustrated",
    "explained",
    "clarified",
    "facilitated",
    "moderated",
    "hosted",
    "interviewed",
    "liaised",
    "collaborated",
    "partnered",
    "consulted",
    "advised",
    "counseled",
    "educated",
    "taught",
    "evangelized",
    "arbitrated",
    "mediated",
    // Innovation and change
    "innovated",
    "transformed",
    "revolutionized",
    "reimagined",
    "reinvented",
    "redefined",
    "disrupted",
    "differentiated",
    "adapted",
    "evolved",
    "incubated",
    "experimented",
    "iterated",
    "conceived",
    "envisioned",
    "explored",
    "conceptualized",
    "originated",
    "patented",
    "commercialized",
    "productized",
    "repositioned",
    "rebranded",
    "relaunched",
    "transitioned",
    "digitized",
    "virtualized",
    "containerized",
    "parallelized",
    // Operations and finance
    "budgeted",
    "allocated",
    "invested",
    "funded",
    "financed",
    "procured",
    "sourced",
    "purchased",
    "contracted",
    "outsourced",
    "insourced",
    "balanced",
    "reconciled",
    "billed",
    "invoiced",
    "collected",
    "appraised",
    "valued",
    "priced",
    "capitalized",
    "divested",
    "merged",
    "underwrote",
    "syndicated",
    "hedged",
    "scheduled",
    "dispatched",
    "routed",
    "warehoused",
    "inventoried",
    // Quality, safety, and compliance
    "certified",
    "accredited",
    "enforced",
    "regulated",
    "safeguarded",
    "protected",
    "fortified",
    "encrypted",
    "patched",
    "authorized",
    "approved",
    "ratified",
    "sanctioned",
    "licensed",
    "guaranteed",
    "insured",
    "assured",
    // Customer and service
    "served",
    "satisfied",
    "delighted",
    "engaged",
    "cultivated",
    "nurtured",
    "strengthened",
    "personalized",
    "anticipated",
    // Data and tooling
    "instrumented",
    "visualized",
    "curated",
    "catalogued",
    "indexed",
    "archived",
    "compiled",
    "unblocked",
];

/// Weak verbs and phrases that dilute a statement
pub const WEAK_VERBS: &[&str] = &[
    "was",
    "were",
    "been",
    "being",
    "had",
    "helped",
    "assisted",
    "participated",
    "contributed",
    "tried",
    "attempted",
    "worked on",
    "responsible for",
    "involved in",
    "tasked with",
];

/// Weak opening words; a statement starting with one of these buries or
/// omits the action entirely
pub const WEAK_OPENERS: &[&str] = &[
    "was",
    "were",
    "had",
    "helped",
    "assisted",
    "worked",
    "participated",
    "responsible",
    "involved",
];

static STRONG_VERB_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static STRONG_VERB_RE: OnceLock<Regex> = OnceLock::new();
static WEAK_VERB_RE: OnceLock<Regex> = OnceLock::new();
static WEAK_OPENER_RE: OnceLock<Regex> = OnceLock::new();

/// Strong-verb lookup set for exact opening-word checks
pub fn strong_verb_set() -> &'static HashSet<&'static str> {
    STRONG_VERB_SET.get_or_init(|| STRONG_VERBS.iter().copied().collect())
}

/// True if `word` (already lowercased) is a strong verb, exactly or with a
/// trailing "d"/"ed"
pub fn is_strong_verb(word: &str) -> bool {
    let set = strong_verb_set();
    if set.contains(word) {
        return true;
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if set.contains(stem) {
            return true;
        }
    }
    if let Some(stem) = word.strip_suffix('d') {
        if set.contains(stem) {
            return true;
        }
    }
    false
}

/// Whole-text scan pattern for strong verbs
pub fn strong_verb_re() -> &'static Regex {
    STRONG_VERB_RE.get_or_init(|| {
        let alt = STRONG_VERBS
            .iter()
            .map(|v| regex::escape(v))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{alt})(?:d|ed)?\b")).expect("valid strong-verb regex")
    })
}

/// Whole-text scan pattern for weak verbs and phrases
pub fn weak_verb_re() -> &'static Regex {
    WEAK_VERB_RE.get_or_init(|| {
        let alt = WEAK_VERBS
            .iter()
            .map(|v| regex::escape(v))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{alt})\b")).expect("valid weak-verb regex")
    })
}

/// Anchored pattern matching statements that open with a weak word
pub fn weak_opener_re() -> &'static Regex {
    WEAK_OPENER_RE.get_or_init(|| {
        let alt = WEAK_OPENERS
            .iter()
            .map(|v| regex::escape(v))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)^\s*(?:{alt})\b")).expect("valid weak-opener regex")
    })
}

/// What a clarity pattern rule flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Filler,
    Jargon,
}

/// A single clarity rule: a named pattern with a point weight.
///
/// Rules are iterated once per detector call; each match contributes
/// `weight` to the dimension's deduction.
pub struct PatternRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub kind: RuleKind,
    pub weight: u32,
}

static CLARITY_RULES: OnceLock<Vec<PatternRule>> = OnceLock::new();

/// The ordered clarity rule table (filler rules first, then jargon)
pub fn clarity_rules() -> &'static [PatternRule] {
    CLARITY_RULES.get_or_init(|| {
        vec![
            PatternRule {
                name: "intensifiers",
                pattern: Regex::new(
                    r"(?i)\b(?:very|really|quite|somewhat|extremely|incredibly|totally|definitely|truly|honestly)\b",
                )
                .expect("valid intensifier regex"),
                kind: RuleKind::Filler,
                weight: 2,
            },
            PatternRule {
                name: "hedges",
                pattern: Regex::new(
                    r"(?i)\b(?:basically|actually|literally|essentially|arguably|practically|virtually)\b",
                )
                .expect("valid hedge regex"),
                kind: RuleKind::Filler,
                weight: 2,
            },
            PatternRule {
                name: "padding",
                pattern: Regex::new(r"(?i)\b(?:just|simply|merely)\b").expect("valid padding regex"),
                kind: RuleKind::Filler,
                weight: 2,
            },
            PatternRule {
                name: "wordy-connectors",
                pattern: Regex::new(
                    r"(?i)\b(?:in order to|a lot of|lots of|kind of|sort of|needless to say|at this point in time|due to the fact that|for all intents and purposes|as a matter of fact|each and every)\b",
                )
                .expect("valid connector regex"),
                kind: RuleKind::Filler,
                weight: 2,
            },
            PatternRule {
                name: "buzzwords",
                pattern: Regex::new(
                    r"(?i)\b(?:synergy|synergies|paradigm|leverage|leverages|leveraged|leveraging|ideate|ideated|incentivize|incentivized)\b",
                )
                .expect("valid buzzword regex"),
                kind: RuleKind::Jargon,
                weight: 2,
            },
            PatternRule {
                name: "buzz-compounds",
                pattern: Regex::new(
                    r"(?i)\b(?:best[- ]in[- ]class|world[- ]class|cutting[- ]edge|state[- ]of[- ]the[- ]art|next[- ]generation|game[- ]changing|mission[- ]critical)\b",
                )
                .expect("valid buzz-compound regex"),
                kind: RuleKind::Jargon,
                weight: 2,
            },
            PatternRule {
                name: "buzz-phrases",
                pattern: Regex::new(
                    r"(?i)\b(?:move the needle|circle back|touch base|deep dive|boil the ocean|low[- ]hanging fruit|win[- ]win|think outside the box|drill down|take it offline|secret sauce|core competency|value[- ]add|peel the onion)\b",
                )
                .expect("valid buzz-phrase regex"),
                kind: RuleKind::Jargon,
                weight: 2,
            },
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_strong_verbs() {
        let unique: HashSet<_> = STRONG_VERBS.iter().collect();
        assert_eq!(
            unique.len(),
            STRONG_VERBS.len(),
            "strong verb list contains duplicates"
        );
    }

    #[test]
    fn test_strong_and_weak_lists_disjoint() {
        let strong = strong_verb_set();
        for weak in WEAK_VERBS {
            assert!(!strong.contains(weak), "'{weak}' is in both lists");
        }
    }

    #[test]
    fn test_is_strong_verb_suffix_tolerance() {
        assert!(is_strong_verb("led"));
        assert!(is_strong_verb("launched"));
        // Entries are already past tense; the suffix tolerance still
        // resolves "launche" + "d" style tokens to their entry
        assert!(is_strong_verb("cut"));
        assert!(!is_strong_verb("helped"));
        assert!(!is_strong_verb("was"));
    }

    #[test]
    fn test_strong_verb_re_matches_whole_words() {
        let re = strong_verb_re();
        assert!(re.is_match("We delivered the platform"));
        assert!(re.is_match("DELIVERED on time"));
        assert!(!re.is_match("the cutlery drawer")); // "cut" must not match inside a word
    }

    #[test]
    fn test_weak_opener_anchored() {
        let re = weak_opener_re();
        assert!(re.is_match("Helped the team"));
        assert!(re.is_match("  was responsible"));
        assert!(!re.is_match("Led the team that helped"));
    }

    #[test]
    fn test_clarity_rules_ordered_fillers_first() {
        let rules = clarity_rules();
        let first_jargon = rules
            .iter()
            .position(|r| r.kind == RuleKind::Jargon)
            .expect("jargon rules present");
        assert!(rules[..first_jargon]
            .iter()
            .all(|r| r.kind == RuleKind::Filler));
        assert!(rules[first_jargon..]
            .iter()
            .all(|r| r.kind == RuleKind::Jargon));
    }

    #[test]
    fn test_filler_rule_matches() {
        let rules = clarity_rules();
        let hits: usize = rules
            .iter()
            .filter(|r| r.kind == RuleKind::Filler)
            .map(|r| r.pattern.find_iter("We basically just did a lot of work").count())
            .sum();
        assert_eq!(hits, 3); // basically, just, a lot of
    }

    #[test]
    fn test_jargon_rule_matches_compound_spellings() {
        let rules = clarity_rules();
        let jargon: Vec<_> = rules.iter().filter(|r| r.kind == RuleKind::Jargon).collect();
        let text = "best-in-class synergy to move the needle";
        let hits: usize = jargon
            .iter()
            .map(|r| r.pattern.find_iter(text).count())
            .sum();
        assert_eq!(hits, 3);
    }
}
