//! Global option scan.
//!
//! Flags are recognized anywhere in the argument list, before or after the
//! command words. Only the exact tokens below are treated as global flags;
//! everything else is left for [`crate::router::extract_command`].

use crate::{Error, Result};
use std::ffi::OsStr;

pub(crate) const HELP: &str = "--help";
pub(crate) const VERSION: &str = "--version";
pub(crate) const TESTING: &str = "--testing";
pub(crate) const TRUST_HOME: &str = "--trust-home";
pub(crate) const TRUST_HOME_EQ: &str = "--trust-home=";

/// How a non-UTF-8 flag value is named in errors.
pub(crate) const TRUST_HOME_VALUE: &str = "--trust-home value";

/// Outcome of scanning for `--trust-home`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrustHomeArg {
    #[default]
    Absent,
    /// `--trust-home` was the final token.
    MissingValue,
    /// The value is not valid UTF-8.
    NotUtf8,
    Given(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobalOptions {
    pub help: bool,
    pub version: bool,
    pub testing: bool,
    pub trust_home: TrustHomeArg,
}

impl GlobalOptions {
    /// Scan the raw `tokens` for global flags.
    ///
    /// Never fails: a dangling or non-UTF-8 `--trust-home` is recorded and only
    /// reported by [`GlobalOptions::validate`], so `--help`/`--version` can win
    /// first.
    pub fn parse<S: AsRef<OsStr>>(tokens: &[S]) -> Self {
        let mut opts = GlobalOptions::default();
        for token in tokens {
            match token.as_ref().to_str() {
                Some(HELP) => opts.help = true,
                Some(VERSION) => opts.version = true,
                Some(TESTING) => opts.testing = true,
                _ => {}
            }
        }
        opts.trust_home = scan_trust_home(tokens);
        opts
    }

    /// Report flag errors that were deferred during [`GlobalOptions::parse`].
    pub fn validate(&self) -> Result<()> {
        match self.trust_home {
            TrustHomeArg::MissingValue => Err(Error::MissingTrustHomeValue),
            TrustHomeArg::NotUtf8 => Err(Error::NotUtf8 {
                what: TRUST_HOME_VALUE,
            }),
            _ => Ok(()),
        }
    }

    /// Help or version was requested; nothing else should run.
    pub fn wants_early_exit(&self) -> bool {
        self.help || self.version
    }

    /// Value given to `--trust-home`, if any. May be empty.
    pub fn trust_home_override(&self) -> Option<&str> {
        match &self.trust_home {
            TrustHomeArg::Given(value) => Some(value),
            _ => None,
        }
    }
}

/// First occurrence wins; the scan stops there.
fn scan_trust_home<S: AsRef<OsStr>>(tokens: &[S]) -> TrustHomeArg {
    for (idx, token) in tokens.iter().enumerate() {
        let bytes = token.as_ref().as_encoded_bytes();
        if let Some(value) = bytes.strip_prefix(TRUST_HOME_EQ.as_bytes()) {
            return given(value);
        }
        if bytes == TRUST_HOME.as_bytes() {
            return match tokens.get(idx + 1) {
                Some(value) => given(value.as_ref().as_encoded_bytes()),
                None => TrustHomeArg::MissingValue,
            };
        }
    }
    TrustHomeArg::Absent
}

fn given(value: &[u8]) -> TrustHomeArg {
    match std::str::from_utf8(value) {
        Ok(value) => TrustHomeArg::Given(value.to_string()),
        Err(_) => TrustHomeArg::NotUtf8,
    }
}
