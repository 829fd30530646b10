use std::path::PathBuf;

use thiserror::Error;

/// Typed errors for TinyClean operations.
/// We use `anyhow` at the top level for CLI error handling,
/// but these let callers match on the failures the dispatcher surfaces.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The first argument named a subcommand we don't know
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    /// Flag parsing failed; clap's rendered message already says everything
    #[error("{0}")]
    InvalidArguments(clap::Error),

    /// Configuration file is missing or invalid
    #[error("Config error in '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },
}
