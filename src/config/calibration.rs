//! Calibration profiles and config-file loading
//!
//! The scoring weights in this engine's history were calibrated twice:
//! once for resume bullets (single 15-25 word achievement lines) and once
//! for sales paragraphs (3-5 sentence value propositions). A profile
//! selects one calibration wholesale - the two are never blended. Sales is
//! the default.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Project config filename searched in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "powerscore.toml";

const DEFAULT_MIN_CHARS: usize = 10;

/// Example config written by `powerscore init`
pub const EXAMPLE_CONFIG: &str = r#"# Powerscore configuration
#
# profile selects the scoring calibration:
#   "sales"  - 3-5 sentence value propositions (default)
#   "resume" - single achievement bullets
profile = "sales"

[guard]
# Statements shorter than this (trimmed characters) score zero
# min_chars = 10

[slop]
# Deduct up to 5 points for generic AI-sounding phrasing
# enabled = true

# Override the word-count band of the selected profile
# [words]
# too_short = 30
# concise_min = 50
# concise_max = 150
# too_long = 200
"#;

/// Which corpus the scoring weights are tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalibrationProfile {
    /// Sales paragraphs: 3-5 sentence value propositions (default)
    #[default]
    Sales,
    /// Resume bullets: single achievement lines
    Resume,
}

impl CalibrationProfile {
    /// Word-count band for the clarity length check
    pub fn word_band(&self) -> WordBand {
        match self {
            CalibrationProfile::Sales => WordBand {
                too_short: 30,
                concise_min: 50,
                concise_max: 150,
                too_long: 200,
            },
            CalibrationProfile::Resume => WordBand {
                too_short: 8,
                concise_min: 8,
                concise_max: 25,
                too_long: 35,
            },
        }
    }

    /// Points for the weak-verb sub-check when weak verbs are present.
    ///
    /// Sales scales the deduction with the offense count down to zero;
    /// Resume keeps the historical fixed floor of 3 points regardless of
    /// count. Each profile is internally consistent.
    pub fn weak_verb_points(&self, weak_verb_count: u32) -> u32 {
        match self {
            CalibrationProfile::Sales => 5u32.saturating_sub(weak_verb_count),
            CalibrationProfile::Resume => 3,
        }
    }
}

impl FromStr for CalibrationProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sales" => Ok(CalibrationProfile::Sales),
            "resume" => Ok(CalibrationProfile::Resume),
            _ => Err(format!(
                "Unknown profile '{}'. Valid profiles: sales, resume",
                s
            )),
        }
    }
}

impl std::fmt::Display for CalibrationProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalibrationProfile::Sales => write!(f, "sales"),
            CalibrationProfile::Resume => write!(f, "resume"),
        }
    }
}

/// Word-count thresholds for the length check.
///
/// Counts outside `concise_min..=concise_max` but inside the too-short /
/// too-long limits are borderline: partial credit, no issue raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WordBand {
    pub too_short: u32,
    pub concise_min: u32,
    pub concise_max: u32,
    pub too_long: u32,
}

/// Effective scoring calibration, resolved from profile + overrides
#[derive(Debug, Clone)]
pub struct Calibration {
    pub profile: CalibrationProfile,
    pub word_band: WordBand,
    /// Trimmed-length guard; shorter input scores zero
    pub min_chars: usize,
    pub slop_enabled: bool,
}

impl Default for Calibration {
    fn default() -> Self {
        Self::for_profile(CalibrationProfile::default())
    }
}

impl Calibration {
    /// Calibration with a profile's stock bands and defaults
    pub fn for_profile(profile: CalibrationProfile) -> Self {
        Self {
            profile,
            word_band: profile.word_band(),
            min_chars: DEFAULT_MIN_CHARS,
            slop_enabled: true,
        }
    }
}

/// Errors from loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Raw `powerscore.toml` shape
#[derive(Debug, Default, Deserialize)]
struct CalibrationFile {
    profile: Option<CalibrationProfile>,
    #[serde(default)]
    guard: GuardSection,
    #[serde(default)]
    slop: SlopSection,
    words: Option<WordsSection>,
}

#[derive(Debug, Default, Deserialize)]
struct GuardSection {
    min_chars: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct SlopSection {
    enabled: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct WordsSection {
    too_short: Option<u32>,
    concise_min: Option<u32>,
    concise_max: Option<u32>,
    too_long: Option<u32>,
}

impl CalibrationFile {
    fn into_calibration(self) -> Calibration {
        let mut calibration = Calibration::for_profile(self.profile.unwrap_or_default());
        if let Some(min_chars) = self.guard.min_chars {
            calibration.min_chars = min_chars;
        }
        if let Some(enabled) = self.slop.enabled {
            calibration.slop_enabled = enabled;
        }
        if let Some(words) = self.words {
            if let Some(v) = words.too_short {
                calibration.word_band.too_short = v;
            }
            if let Some(v) = words.concise_min {
                calibration.word_band.concise_min = v;
            }
            if let Some(v) = words.concise_max {
                calibration.word_band.concise_max = v;
            }
            if let Some(v) = words.too_long {
                calibration.word_band.too_long = v;
            }
        }
        calibration
    }
}

/// Load calibration from a config file.
///
/// With an explicit path, the file must exist and parse. Without one,
/// `powerscore.toml` in the working directory is used when present;
/// a missing default file yields the stock calibration, but a malformed
/// one is still an error.
pub fn load_calibration(explicit: Option<&Path>) -> Result<Calibration, ConfigError> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) if !required && source.kind() == std::io::ErrorKind::NotFound => {
            debug!("no {} found, using default calibration", path.display());
            return Ok(Calibration::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let file: CalibrationFile =
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

    let calibration = file.into_calibration();
    debug!(
        "loaded calibration from {}: profile={}",
        path.display(),
        calibration.profile
    );
    Ok(calibration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sales() {
        let calibration = Calibration::default();
        assert_eq!(calibration.profile, CalibrationProfile::Sales);
        assert_eq!(calibration.word_band.concise_min, 50);
        assert_eq!(calibration.word_band.concise_max, 150);
        assert_eq!(calibration.word_band.too_long, 200);
        assert_eq!(calibration.min_chars, 10);
        assert!(calibration.slop_enabled);
    }

    #[test]
    fn test_resume_band() {
        let band = CalibrationProfile::Resume.word_band();
        assert_eq!(band.concise_min, 8);
        assert_eq!(band.concise_max, 25);
        assert_eq!(band.too_long, 35);
    }

    #[test]
    fn test_weak_verb_points_sales_scales() {
        let profile = CalibrationProfile::Sales;
        assert_eq!(profile.weak_verb_points(1), 4);
        assert_eq!(profile.weak_verb_points(3), 2);
        assert_eq!(profile.weak_verb_points(5), 0);
        assert_eq!(profile.weak_verb_points(9), 0);
    }

    #[test]
    fn test_weak_verb_points_resume_fixed_floor() {
        let profile = CalibrationProfile::Resume;
        assert_eq!(profile.weak_verb_points(1), 3);
        assert_eq!(profile.weak_verb_points(7), 3);
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!(
            CalibrationProfile::from_str("sales").unwrap(),
            CalibrationProfile::Sales
        );
        assert_eq!(
            CalibrationProfile::from_str("RESUME").unwrap(),
            CalibrationProfile::Resume
        );
        assert!(CalibrationProfile::from_str("poetry").is_err());
    }

    #[test]
    fn test_toml_parsing_full() {
        let toml_str = r#"
profile = "resume"

[guard]
min_chars = 20

[slop]
enabled = false

[words]
too_long = 40
"#;
        let file: CalibrationFile = toml::from_str(toml_str).unwrap();
        let calibration = file.into_calibration();
        assert_eq!(calibration.profile, CalibrationProfile::Resume);
        assert_eq!(calibration.min_chars, 20);
        assert!(!calibration.slop_enabled);
        assert_eq!(calibration.word_band.too_long, 40);
        // Untouched fields keep the profile's stock values
        assert_eq!(calibration.word_band.concise_max, 25);
    }

    #[test]
    fn test_toml_parsing_minimal() {
        let file: CalibrationFile = toml::from_str("").unwrap();
        let calibration = file.into_calibration();
        assert_eq!(calibration.profile, CalibrationProfile::Sales);
    }

    #[test]
    fn test_example_config_parses() {
        let file: CalibrationFile = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(file.profile, Some(CalibrationProfile::Sales));
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = load_calibration(Some(&missing));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_explicit_malformed_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("powerscore.toml");
        std::fs::write(&path, "this is [[ not valid toml {{{").unwrap();
        let result = load_calibration(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_explicit_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("powerscore.toml");
        std::fs::write(&path, "profile = \"resume\"\n").unwrap();
        let calibration = load_calibration(Some(&path)).unwrap();
        assert_eq!(calibration.profile, CalibrationProfile::Resume);
    }
}
