//! Configuration module for Powerscore
//!
//! This module handles:
//! - Calibration profiles (sales paragraphs vs resume bullets)
//! - Word-band and guard overrides from `powerscore.toml`
//! - The slop-detection switch

mod calibration;

pub use calibration::{
    load_calibration, Calibration, CalibrationProfile, ConfigError, WordBand, DEFAULT_CONFIG_FILE,
    EXAMPLE_CONFIG,
};
