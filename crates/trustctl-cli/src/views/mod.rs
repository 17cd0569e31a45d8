use owo_colors::OwoColorize;
use std::io::{self, Write};
use trustctl_core::{Error, TrustHome};

pub const VERSION: &str = concat!("trustctl ", env!("CARGO_PKG_VERSION"));

const HELP: &str = "\
Usage:
  trustctl [--testing] [--trust-home PATH] <command> [args]

Commands:
  config show        Show resolved TRUST_HOME and its source
  init               Initialize TRUST_HOME directory layout
  wait               Wait until interrupted (Ctrl+C)

Global options:
  --help             Show this help and exit
  --version          Show version and exit
  --trust-home PATH  Override TRUST_HOME (flag wins)
  --testing          Deterministic output for tests

Config precedence:
  default < env TRUST_HOME < --trust-home

Environment:
  TRUST_HOME           Trust home directory
  TRUSTCTL_LOG         Log filter for stderr diagnostics (default: warn)
  TRUSTCTL_LOG_FORMAT  Log line format: text or json
";

pub fn print_help(out: &mut dyn Write) -> io::Result<()> {
    out.write_all(HELP.as_bytes())
}

pub fn print_version(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", VERSION)
}

pub fn print_trust_home(out: &mut dyn Write, trust_home: &TrustHome) -> io::Result<()> {
    writeln!(out, "trust_home={}", trust_home.value)?;
    writeln!(out, "source={}", trust_home.source)
}

/// Render a failure. Usage errors get a hint line pointing at `--help`.
pub fn print_error(err: &mut dyn Write, error: &Error, color: bool) -> io::Result<()> {
    if color {
        writeln!(err, "{} {}", "error:".red().bold(), error)?;
    } else {
        writeln!(err, "error: {}", error)?;
    }
    if error.is_usage() {
        writeln!(err, "hint: try --help")?;
    }
    Ok(())
}
