//! Custom assertions for trustctl-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - `config show` output parsing and provenance checks
//! - Trust home layout verification after `init`
//! - Usage-error shape (exit 64 plus hint line)

use crate::world::CliResult;
use anyhow::{Context, Result};
use std::path::Path;

pub const USAGE_EXIT_CODE: i32 = 64;

/// Parsed `config show` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigShow {
    pub trust_home: String,
    pub source: String,
}

/// Parse the two `key=value` lines printed by `config show`.
pub fn parse_config_show(stdout: &str) -> Result<ConfigShow> {
    let mut lines = stdout.lines();
    let trust_home = lines
        .next()
        .and_then(|l| l.strip_prefix("trust_home="))
        .context("Expected 'trust_home=' on the first line")?;
    let source = lines
        .next()
        .and_then(|l| l.strip_prefix("source="))
        .context("Expected 'source=' on the second line")?;

    if let Some(extra) = lines.next() {
        anyhow::bail!("Unexpected extra output line: {}", extra);
    }

    Ok(ConfigShow {
        trust_home: trust_home.to_string(),
        source: source.to_string(),
    })
}

/// Assert that `config show` reported the expected trust home and source.
pub fn assert_trust_home(result: &CliResult, expected_value: &str, expected_source: &str) -> Result<()> {
    if !result.success() {
        anyhow::bail!(
            "config show failed with {:?}\nstderr: {}",
            result.code(),
            result.stderr()
        );
    }

    let shown = parse_config_show(result.stdout())?;
    if shown.trust_home != expected_value {
        anyhow::bail!(
            "Expected trust_home {} but got {}",
            expected_value,
            shown.trust_home
        );
    }
    if shown.source != expected_source {
        anyhow::bail!("Expected source {} but got {}", expected_source, shown.source);
    }

    Ok(())
}

/// Assert that the command failed as a usage error mentioning `fragment`.
pub fn assert_usage_error(result: &CliResult, fragment: &str) -> Result<()> {
    if result.code() != Some(USAGE_EXIT_CODE) {
        anyhow::bail!(
            "Expected exit {} but got {:?}\nstderr: {}",
            USAGE_EXIT_CODE,
            result.code(),
            result.stderr()
        );
    }
    if !result.stderr().contains(fragment) {
        anyhow::bail!("Expected stderr to mention {:?}, got:\n{}", fragment, result.stderr());
    }
    if !result.stderr().contains("hint: try --help") {
        anyhow::bail!("Usage error is missing the hint line:\n{}", result.stderr());
    }
    if !result.stdout().is_empty() {
        anyhow::bail!("Usage error wrote to stdout:\n{}", result.stdout());
    }

    Ok(())
}

/// Assert that the trust home contains the directories `init` creates.
pub fn assert_layout(trust_home: &Path) -> Result<()> {
    for dir in ["logs", "store", "keys"] {
        let path = trust_home.join(dir);
        if !path.is_dir() {
            anyhow::bail!("Expected directory {}", path.display());
        }
    }
    Ok(())
}
