use crate::env::{EnvSnapshot, TRUST_HOME_VAR};
use crate::options::{GlobalOptions, TRUST_HOME_VALUE, TrustHomeArg};
use crate::{Error, Result};
use std::fmt;

/// Directory name used under the home directory (or the cwd, without one).
pub const DEFAULT_DIR_NAME: &str = ".trustctl";

/// Repo-local default used by `--testing`.
pub const TESTING_DIR_NAME: &str = ".trustctl-test";

/// Which precedence rule produced the trust home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrustHomeSource {
    Default,
    Env,
    Flag,
}

impl TrustHomeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            TrustHomeSource::Default => "default",
            TrustHomeSource::Env => "env",
            TrustHomeSource::Flag => "flag",
        }
    }
}

impl fmt::Display for TrustHomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustHome {
    pub value: String,
    pub source: TrustHomeSource,
}

/// Resolve the trust home based on priority (lowest first):
/// 1. `<home>/.trustctl`, or `.trustctl` without a home directory
/// 2. `.trustctl-test` when `--testing` is set (still `default`)
/// 3. TRUST_HOME environment variable
/// 4. `--trust-home` flag
///
/// A rule only applies when it supplies a non-empty value. The winning value
/// must be valid UTF-8; values that lose are never inspected.
pub fn resolve_trust_home(opts: &GlobalOptions, env: &EnvSnapshot) -> Result<TrustHome> {
    match &opts.trust_home {
        TrustHomeArg::Given(value) if !value.is_empty() => {
            return Ok(TrustHome {
                value: value.clone(),
                source: TrustHomeSource::Flag,
            });
        }
        TrustHomeArg::NotUtf8 => {
            return Err(Error::NotUtf8 {
                what: TRUST_HOME_VALUE,
            });
        }
        _ => {}
    }

    if let Some(raw) = env.get_os(TRUST_HOME_VAR).filter(|v| !v.is_empty()) {
        let value = raw.to_str().ok_or(Error::NotUtf8 {
            what: TRUST_HOME_VAR,
        })?;
        return Ok(TrustHome {
            value: value.to_string(),
            source: TrustHomeSource::Env,
        });
    }

    let value = if opts.testing {
        TESTING_DIR_NAME.to_string()
    } else {
        default_value(env)?
    };
    Ok(TrustHome {
        value,
        source: TrustHomeSource::Default,
    })
}

fn default_value(env: &EnvSnapshot) -> Result<String> {
    match env.home_dir() {
        Some(home) => home
            .join(DEFAULT_DIR_NAME)
            .into_os_string()
            .into_string()
            .map_err(|_| Error::NotUtf8 {
                what: "home directory",
            }),
        None => Ok(DEFAULT_DIR_NAME.to_string()),
    }
}
