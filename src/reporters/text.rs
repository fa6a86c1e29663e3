//! Text (terminal) reporter with colors and formatting

use crate::models::{ScoreColor, ValidationResult};
use anyhow::Result;

/// Score-tier colors (ANSI escape codes)
fn tier_color(color: ScoreColor) -> &'static str {
    match color {
        ScoreColor::Green => "\x1b[32m",
        ScoreColor::Yellow => "\x1b[33m",
        ScoreColor::Orange => "\x1b[91m", // Light red; closest ANSI tier
        ScoreColor::Red => "\x1b[31m",
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Render result as formatted terminal output
pub fn render(result: &ValidationResult) -> Result<String> {
    let mut out = String::new();

    let color = tier_color(result.color());
    out.push_str(&format!("\n{BOLD}Powerscore Report{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {color}{BOLD}{}/100{RESET}  {color}{}{RESET}\n\n",
        result.total_score,
        result.label()
    ));

    // Dimension breakdown
    out.push_str(&format!("{BOLD}DIMENSIONS{RESET}\n"));
    for (name, dim) in [
        ("Clarity", &result.clarity),
        ("Impact", &result.impact),
        ("Action", &result.action),
        ("Specificity", &result.specificity),
    ] {
        out.push_str(&format!(
            "  {:<12} {:>2}/{}\n",
            name, dim.score, dim.max_score
        ));
        for strength in &dim.strengths {
            out.push_str(&format!("    {GREEN}+{RESET} {strength}\n"));
        }
        for issue in &dim.issues {
            out.push_str(&format!("    {YELLOW}!{RESET} {issue}\n"));
        }
    }

    // Slop deduction, only when it bites
    if let Some(slop) = &result.slop_detection {
        if slop.deduction > 0 {
            out.push_str(&format!(
                "\n{BOLD}SLOP{RESET} {DIM}(-{} points){RESET}\n",
                slop.deduction
            ));
            for issue in &slop.issues {
                out.push_str(&format!("    {YELLOW}!{RESET} {issue}\n"));
            }
        }
    }

    // Tip based on readiness
    out.push('\n');
    match result.total_score {
        s if s >= 80 => out.push_str(&format!("{DIM}Excellent. Ship it.{RESET}\n")),
        s if s >= 70 => out.push_str(&format!(
            "{DIM}Ready. Address the remaining issues to push past 80.{RESET}\n"
        )),
        s if s >= 50 => out.push_str(&format!(
            "{DIM}Needs work. Start with the issues above.{RESET}\n"
        )),
        _ => out.push_str(&format!(
            "{DIM}Early draft. Work through the issues dimension by dimension.{RESET}\n"
        )),
    }

    Ok(out)
}
