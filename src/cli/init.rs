//! `powerscore init` command handler

use crate::config::{DEFAULT_CONFIG_FILE, EXAMPLE_CONFIG};
use anyhow::{bail, Context, Result};
use std::path::Path;

pub fn run() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() {
        bail!("{DEFAULT_CONFIG_FILE} already exists, not overwriting");
    }
    std::fs::write(path, EXAMPLE_CONFIG)
        .with_context(|| format!("failed to write {DEFAULT_CONFIG_FILE}"))?;
    println!("Wrote {DEFAULT_CONFIG_FILE}");
    Ok(())
}
