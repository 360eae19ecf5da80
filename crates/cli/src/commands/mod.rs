//! CLI subcommands.

use thiserror::Error;

pub mod config;
pub mod ping;
pub mod tokens;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pool environment variables are missing or invalid.
    #[error(transparent)]
    InvalidConfig(#[from] storekeeper_db::InvalidConfig),

    /// One or more pools could not run `SELECT 1`.
    #[error("{failed} of {total} pools failed to respond")]
    PingFailed { failed: usize, total: usize },
}
