mod commands;
mod context;
pub mod handlers;
pub mod logging;
mod views;

pub use commands::{run, run_with};
pub use context::Streams;
