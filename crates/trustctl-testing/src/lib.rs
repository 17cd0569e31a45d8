//! Testing infrastructure for trustctl integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated HOME / cwd sandbox with a scrubbed environment
//! - `assertions`: checks for `config show` output and the `init` layout
//! - `process`: background process management for `wait`

pub mod assertions;
pub mod process;
pub mod world;

pub use world::{CliResult, TestWorld};
