use crate::exit::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("argument {position} is {len} bytes; arguments are limited to {limit} bytes")]
    OversizedToken {
        position: usize,
        len: usize,
        limit: usize,
    },

    #[error("--trust-home requires a value")]
    MissingTrustHomeValue,

    /// A trust home candidate that cannot be represented as text.
    #[error("{what} is not valid UTF-8")]
    NotUtf8 { what: &'static str },

    #[error("missing command")]
    MissingCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0} not implemented yet")]
    NotImplemented(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install interrupt handler: {0}")]
    SignalHandler(String),
}

impl Error {
    /// Exit status reported for this error.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Error::OversizedToken { .. }
            | Error::MissingTrustHomeValue
            | Error::NotUtf8 { .. }
            | Error::MissingCommand
            | Error::UnknownCommand(_)
            | Error::NotImplemented(_) => ExitStatus::Usage,
            Error::Io(_) => ExitStatus::IoError,
            Error::SignalHandler(_) => ExitStatus::Software,
        }
    }

    /// Whether the user can fix this by changing the command line.
    pub fn is_usage(&self) -> bool {
        self.exit_status() == ExitStatus::Usage
    }
}

pub type Result<T> = std::result::Result<T, Error>;
