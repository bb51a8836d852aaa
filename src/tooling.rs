//! Tooling Layer
//!
//! Command-line surface: argument parsing, the interactive command loop and
//! text or JSON rendering of the stored records.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands, ShowTarget};
