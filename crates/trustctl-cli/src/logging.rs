use is_terminal::IsTerminal;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use trustctl_core::EnvSnapshot;
use trustctl_core::env::{LOG_FORMAT_VAR, LOG_VAR};

pub const DEFAULT_DIRECTIVE: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env(env: &EnvSnapshot) -> Self {
        match env.get(LOG_FORMAT_VAR) {
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Install the global subscriber. Diagnostics always go to stderr so stdout
/// stays reserved for command output.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(env: &EnvSnapshot) {
    let directive = env.get_non_empty(LOG_VAR).unwrap_or(DEFAULT_DIRECTIVE);
    let (filter, rejected) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(_) => (EnvFilter::new(DEFAULT_DIRECTIVE), Some(directive)),
    };

    let installed = match LogFormat::from_env(env) {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
    };

    if installed.is_ok()
        && let Some(directive) = rejected
    {
        warn!(directive, "invalid {} directive, using {}", LOG_VAR, DEFAULT_DIRECTIVE);
    }
}
