//! TOML scenario file parsing

use super::Scenario;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a TOML scenario file
pub fn parse_toml_file(path: &Path) -> Result<Scenario> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse scenario file: {}", path.display()))
}

/// Parse a TOML scenario from a string
pub fn parse_toml_string(contents: &str) -> Result<Scenario> {
    let scenario: Scenario =
        ::toml::from_str(contents).context("Failed to parse TOML scenario")?;

    Ok(scenario)
}
