//! Markdown reporter
//!
//! GitHub-flavored Markdown, suitable for pasting into a PR description
//! or a shared doc.

use crate::models::ValidationResult;
use anyhow::Result;

/// Render result as Markdown
pub fn render(result: &ValidationResult) -> Result<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "# Power Statement Score: {}/100 ({})\n",
        result.total_score,
        result.label()
    ));

    for (name, dim) in [
        ("Clarity", &result.clarity),
        ("Impact", &result.impact),
        ("Action", &result.action),
        ("Specificity", &result.specificity),
    ] {
        lines.push(format!("## {}: {}/{}\n", name, dim.score, dim.max_score));
        for strength in &dim.strengths {
            lines.push(format!("- ✅ {strength}"));
        }
        for issue in &dim.issues {
            lines.push(format!("- ⚠️ {issue}"));
        }
        lines.push(String::new());
    }

    if let Some(slop) = &result.slop_detection {
        if slop.deduction > 0 {
            lines.push(format!("## Slop: -{} points\n", slop.deduction));
            for issue in &slop.issues {
                lines.push(format!("- ⚠️ {issue}"));
            }
            lines.push(String::new());
        }
    }

    Ok(lines.join("\n"))
}
