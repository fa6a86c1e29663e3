//! CLI command definitions and handlers

mod init;
mod score;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate a fail-under threshold (0-100)
fn parse_threshold(s: &str) -> Result<u32, String> {
    let n: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n > 100 {
        Err("threshold cannot exceed 100".to_string())
    } else {
        Ok(n)
    }
}

/// Powerscore - rule-based power statement scoring
///
/// 100% LOCAL - no account needed, no data leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "powerscore")]
#[command(
    version,
    about = "Score a power statement across clarity, impact, action, and specificity",
    long_about = "Powerscore runs a deterministic rule-based evaluation of a short \
persuasive statement: four weighted dimensions worth 25 points each, a bounded \
deduction for generic AI-sounding phrasing, and an explanation for every point \
awarded or withheld.\n\n\
100% LOCAL - no account needed, no data leaves your machine.",
    after_help = "\
Examples:
  powerscore score statement.txt                  Score a file
  echo 'Led a team...' | powerscore score -       Score stdin
  powerscore score statement.txt --format json    JSON output for scripting
  powerscore score statement.txt --fail-under 70  CI gate (exit 1 below 70)
  powerscore score statement.txt --profile resume Resume-bullet calibration
  powerscore init                                 Write an example powerscore.toml"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a power statement from a file or stdin
    Score {
        /// Path to the statement ("-" for stdin)
        #[arg(default_value = "-")]
        path: PathBuf,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Calibration profile: sales, resume (overrides the config file)
        #[arg(long, value_parser = ["sales", "resume"])]
        profile: Option<String>,

        /// Path to a config file (default: ./powerscore.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable the slop deduction for this run
        #[arg(long)]
        no_slop: bool,

        /// Exit with code 1 if the total score is below this threshold
        #[arg(long, value_parser = parse_threshold)]
        fail_under: Option<u32>,
    },

    /// Initialize a powerscore.toml config file with example settings
    Init,
}

/// Dispatch a parsed CLI invocation
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            path,
            format,
            output,
            profile,
            config,
            no_slop,
            fail_under,
        } => score::run(score::ScoreOptions {
            path,
            format,
            output,
            profile,
            config,
            no_slop,
            fail_under,
        }),
        Commands::Init => init::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_defaults() {
        let cli = Cli::try_parse_from(["powerscore", "score"]).unwrap();
        match cli.command {
            Commands::Score {
                path,
                format,
                no_slop,
                fail_under,
                ..
            } => {
                assert_eq!(path, PathBuf::from("-"));
                assert_eq!(format, "text");
                assert!(!no_slop);
                assert!(fail_under.is_none());
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_parse_score_flags() {
        let cli = Cli::try_parse_from([
            "powerscore",
            "score",
            "statement.txt",
            "--format",
            "json",
            "--profile",
            "resume",
            "--fail-under",
            "70",
            "--no-slop",
        ])
        .unwrap();
        match cli.command {
            Commands::Score {
                path,
                format,
                profile,
                no_slop,
                fail_under,
                ..
            } => {
                assert_eq!(path, PathBuf::from("statement.txt"));
                assert_eq!(format, "json");
                assert_eq!(profile.as_deref(), Some("resume"));
                assert!(no_slop);
                assert_eq!(fail_under, Some(70));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        assert!(Cli::try_parse_from(["powerscore", "score", "--fail-under", "101"]).is_err());
        assert!(Cli::try_parse_from(["powerscore", "score", "--fail-under", "abc"]).is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Cli::try_parse_from(["powerscore", "score", "--format", "sarif"]).is_err());
    }
}
