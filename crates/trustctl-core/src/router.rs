use crate::options::{TESTING, TRUST_HOME, TRUST_HOME_EQ};
use crate::{Error, Result};
use std::fmt;

const FLAG_PREFIX: char = '-';

/// Command words and their arguments, global flags stripped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand(Vec<String>);

impl ParsedCommand {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    ConfigShow,
    Init,
    Wait,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Capability::ConfigShow, Capability::Init, Capability::Wait];

    /// Command words as typed by the user.
    pub fn name(self) -> &'static str {
        match self {
            Capability::ConfigShow => "config show",
            Capability::Init => "init",
            Capability::Wait => "wait",
        }
    }

    fn words(self) -> &'static [&'static str] {
        match self {
            Capability::ConfigShow => &["config", "show"],
            Capability::Init => &["init"],
            Capability::Wait => &["wait"],
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A matched command and the arguments that followed its words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub capability: Capability,
    pub args: Vec<String>,
}

/// Find where the command starts: the first token that is neither a known
/// global flag (with its operand) nor anything else starting with `-`.
///
/// Unknown flags before the command are skipped, not rejected.
pub fn extract_command(tokens: &[String]) -> ParsedCommand {
    let mut idx = 0;
    while idx < tokens.len() {
        let token = tokens[idx].as_str();
        if token == TESTING || token.starts_with(TRUST_HOME_EQ) {
            idx += 1;
            continue;
        }
        if token == TRUST_HOME {
            idx += 2;
            continue;
        }
        if token.starts_with(FLAG_PREFIX) {
            idx += 1;
            continue;
        }
        return ParsedCommand(tokens[idx..].to_vec());
    }
    ParsedCommand::default()
}

/// Match the command against the dispatch table, most specific first.
pub fn route(command: &ParsedCommand) -> Result<Route> {
    let tokens = command.tokens();
    let Some(first) = tokens.first() else {
        return Err(Error::MissingCommand);
    };

    // ALL is ordered by specificity: two-word commands come first.
    for capability in Capability::ALL {
        let words = capability.words();
        let matches = tokens.len() >= words.len()
            && words.iter().zip(tokens).all(|(word, token)| *word == token);
        if matches {
            return Ok(Route {
                capability,
                args: tokens[words.len()..].to_vec(),
            });
        }
    }

    Err(Error::UnknownCommand(first.clone()))
}
