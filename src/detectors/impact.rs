//! Impact signal detection
//!
//! Four independent pattern families: business-impact nouns, customer
//! nouns, scale/scope phrases, and improvement verbs. Each family
//! contributes one boolean and one count; there is no cross-family
//! interaction.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static BUSINESS_RE: OnceLock<Regex> = OnceLock::new();
static CUSTOMER_RE: OnceLock<Regex> = OnceLock::new();
static SCALE_RE: OnceLock<Regex> = OnceLock::new();
static IMPROVEMENT_RE: OnceLock<Regex> = OnceLock::new();

fn business_re() -> &'static Regex {
    BUSINESS_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:revenue|profit|profits|margin|margins|cost|costs|savings|sales|bookings|pipeline|efficiency|productivity|growth|roi|conversion|turnover)\b",
        )
        .expect("valid business regex")
    })
}

fn customer_re() -> &'static Regex {
    CUSTOMER_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:customer|customers|client|clients|user|users|subscriber|subscribers|satisfaction|retention|churn|engagement|loyalty|nps)\b",
        )
        .expect("valid customer regex")
    })
}

fn scale_re() -> &'static Regex {
    SCALE_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:company-wide|org-wide|organization-wide|enterprise|global|globally|nationwide|worldwide|at scale|across the (?:company|organization|business))\b",
        )
        .expect("valid scale regex")
    })
}

fn improvement_re() -> &'static Regex {
    IMPROVEMENT_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:improved|increased|reduced|decreased|boosted|accelerated|grew|doubled|tripled|streamlined|eliminated|cut)\b",
        )
        .expect("valid improvement regex")
    })
}

/// Signals extracted by [`detect_impact`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImpactSignals {
    pub has_business_impact: bool,
    pub business_count: u32,
    pub has_customer_impact: bool,
    pub customer_count: u32,
    pub has_scale: bool,
    pub scale_count: u32,
    pub has_improvement_language: bool,
    pub improvement_count: u32,
}

/// Detect business/customer impact, scale, and improvement language
pub fn detect_impact(text: &str) -> ImpactSignals {
    let business_count = business_re().find_iter(text).count() as u32;
    let customer_count = customer_re().find_iter(text).count() as u32;
    let scale_count = scale_re().find_iter(text).count() as u32;
    let improvement_count = improvement_re().find_iter(text).count() as u32;

    ImpactSignals {
        has_business_impact: business_count > 0,
        business_count,
        has_customer_impact: customer_count > 0,
        customer_count,
        has_scale: scale_count > 0,
        scale_count,
        has_improvement_language: improvement_count > 0,
        improvement_count,
    }
}
