//! Storekeeper CLI - Pool configuration checks and token listings.
//!
//! # Usage
//!
//! ```bash
//! # Show the resolved endpoint and per-role users (never passwords)
//! sk-cli config
//!
//! # Fail if any pool variable is missing or invalid
//! sk-cli check
//!
//! # Connect with every pool and run SELECT 1
//! sk-cli ping
//!
//! # Connect with a single pool
//! sk-cli ping --role read
//!
//! # List privilege tokens, e.g. for a CHECK constraint
//! sk-cli tokens privileges
//! ```
//!
//! # Commands
//!
//! - `config` - Print resolved pool settings
//! - `check` - Validate pool environment variables
//! - `ping` - Health-check pools against the database
//! - `tokens` - Print catalog token sets

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use storekeeper_db::PoolRole;

mod commands;

#[derive(Parser)]
#[command(name = "sk-cli")]
#[command(author, version, about = "Storekeeper CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print resolved pool settings
    Config,
    /// Validate pool environment variables
    Check,
    /// Connect with each pool and run `SELECT 1`
    Ping {
        /// Only ping this pool
        #[arg(short, long, value_enum)]
        role: Option<RoleArg>,
    },
    /// Print catalog token sets
    Tokens {
        /// Token set to print
        #[arg(value_enum, default_value_t = commands::tokens::TokenKind::All)]
        kind: commands::tokens::TokenKind,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    Read,
    Create,
    Update,
    Delete,
    Crud,
}

impl From<RoleArg> for PoolRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Read => Self::Read,
            RoleArg::Create => Self::Create,
            RoleArg::Update => Self::Update,
            RoleArg::Delete => Self::Delete,
            RoleArg::Crud => Self::Crud,
        }
    }
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sk_cli=info,storekeeper_db=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Config => commands::config::show(),
        Commands::Check => commands::config::check()?,
        Commands::Ping { role } => commands::ping::run(role.map(PoolRole::from)).await?,
        Commands::Tokens { kind } => commands::tokens::show(kind),
    }
    Ok(())
}
