//! Show and validate pool settings.
//!
//! # Environment Variables
//!
//! - `NODE_ENV` - `production` selects the production endpoint
//! - `POSTGRES_ENDPOINT` / `POSTGRES_DB` - Production host and database
//! - `POSTGRES_ENDPOINT_DEV` / `POSTGRES_DB_DEV` - Development host and database
//! - `POSTGRES_PORT` - Server port (defaults to 5432)
//! - `POSTGRES_{READ,CREATE,UPDATE,DELETE,CRUD}_USER` - Per-role login
//! - `POSTGRES_{READ,CREATE,UPDATE,DELETE,CRUD}_USER_PASSWORD` - Per-role password

use std::fmt::Write as _;

use storekeeper_db::{PoolRole, PoolSettings};

use super::CliError;

/// Print resolved settings. Passwords are never shown.
#[allow(clippy::print_stdout)]
pub fn show() {
    let settings = PoolSettings::from_env();
    print!("{}", render(&settings));
}

/// Load settings and fail on any recorded issue.
pub fn check() -> Result<(), CliError> {
    let settings = PoolSettings::from_env();
    settings.validate()?;
    tracing::info!(environment = %settings.environment, "Pool configuration is complete");
    Ok(())
}

/// Human-readable settings summary.
#[must_use]
pub fn render(settings: &PoolSettings) -> String {
    let mut out = String::new();
    let endpoint = &settings.endpoint;

    // Writing to a String cannot fail
    let _ = writeln!(out, "environment: {}", settings.environment);
    let _ = writeln!(out, "host:        {}", display_or_unset(&endpoint.host));
    let _ = writeln!(out, "port:        {}", endpoint.port);
    let _ = writeln!(out, "database:    {}", display_or_unset(&endpoint.database));
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<8}{:<24}max_connections", "role", "user");
    for role in PoolRole::ALL {
        let user = &settings.credentials.get(role).user;
        let _ = writeln!(
            out,
            "{:<8}{:<24}{}",
            role.as_str(),
            display_or_unset(user),
            role.max_connections()
        );
    }

    let issues = settings.issues();
    if !issues.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "issues:");
        for issue in issues {
            let _ = writeln!(out, "  - {issue}");
        }
    }
    out
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() { "<unset>" } else { value }
}
