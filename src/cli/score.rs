//! `powerscore score` command handler

use crate::config::{load_calibration, CalibrationProfile};
use crate::reporters;
use crate::scoring::validate_with_calibration;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

pub struct ScoreOptions {
    pub path: PathBuf,
    pub format: String,
    pub output: Option<PathBuf>,
    pub profile: Option<String>,
    pub config: Option<PathBuf>,
    pub no_slop: bool,
    pub fail_under: Option<u32>,
}

pub fn run(opts: ScoreOptions) -> Result<()> {
    let mut calibration = load_calibration(opts.config.as_deref())?;

    // A CLI profile override resets the word band to that profile's stock
    // values; config-file band overrides only apply to the configured
    // profile
    if let Some(name) = &opts.profile {
        let profile = CalibrationProfile::from_str(name).map_err(anyhow::Error::msg)?;
        calibration.profile = profile;
        calibration.word_band = profile.word_band();
    }
    if opts.no_slop {
        calibration.slop_enabled = false;
    }

    let text = read_input(&opts.path)?;
    let result = validate_with_calibration(&text, &calibration);
    info!(
        total = result.total_score,
        profile = %calibration.profile,
        "scored statement"
    );

    let rendered = reporters::report(&result, &opts.format)?;
    match &opts.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    if let Some(threshold) = opts.fail_under {
        if result.total_score < threshold {
            eprintln!(
                "Score {} is below the --fail-under threshold {}",
                result.total_score, threshold
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}
