//! Pool configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Endpoint
//! - `NODE_ENV` - `production` selects the production endpoint; any other
//!   value (or none) selects the development endpoint
//! - `POSTGRES_ENDPOINT` / `POSTGRES_DB` - Production host and database
//! - `POSTGRES_ENDPOINT_DEV` / `POSTGRES_DB_DEV` - Development host and database
//! - `POSTGRES_PORT` - Port shared by both (default: 5432)
//!
//! ## Credentials (one pair per pool)
//! - `POSTGRES_READ_USER` / `POSTGRES_READ_USER_PASSWORD`
//! - `POSTGRES_CREATE_USER` / `POSTGRES_CREATE_USER_PASSWORD`
//! - `POSTGRES_UPDATE_USER` / `POSTGRES_UPDATE_USER_PASSWORD`
//! - `POSTGRES_DELETE_USER` / `POSTGRES_DELETE_USER_PASSWORD`
//! - `POSTGRES_CRUD_USER` / `POSTGRES_CRUD_USER_PASSWORD`
//!
//! Loading never fails. Missing values resolve to empty strings and a bad
//! port resolves to 5432; each fallback is recorded as a [`ConfigError`] and
//! logged. A misconfigured pool then fails when it first connects. Call
//! [`PoolSettings::validate`] to fail early instead.

use core::fmt;

use secrecy::SecretString;
use thiserror::Error;

use crate::role::PoolRole;

/// Selects between production and development endpoints.
pub const NODE_ENV: &str = "NODE_ENV";
/// Production database host.
pub const POSTGRES_ENDPOINT: &str = "POSTGRES_ENDPOINT";
/// Development database host.
pub const POSTGRES_ENDPOINT_DEV: &str = "POSTGRES_ENDPOINT_DEV";
/// Production database name.
pub const POSTGRES_DB: &str = "POSTGRES_DB";
/// Development database name.
pub const POSTGRES_DB_DEV: &str = "POSTGRES_DB_DEV";
/// Database port shared by both environments.
pub const POSTGRES_PORT: &str = "POSTGRES_PORT";

/// Port used when `POSTGRES_PORT` is missing or invalid.
pub const DEFAULT_PORT: u16 = 5432;

const PRODUCTION: &str = "production";

/// A problem found while resolving pool settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Every problem found while resolving pool settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid pool configuration: {}", join_errors(.0))]
pub struct InvalidConfig(pub Vec<ConfigError>);

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Deployment environment, decided once from `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// `Production` only for the exact value `"production"`.
    #[must_use]
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some(PRODUCTION) => Self::Production,
            _ => Self::Development,
        }
    }

    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// The (host, database) variable pair this environment reads.
    #[must_use]
    pub const fn endpoint_vars(self) -> (&'static str, &'static str) {
        match self {
            Self::Production => (POSTGRES_ENDPOINT, POSTGRES_DB),
            Self::Development => (POSTGRES_ENDPOINT_DEV, POSTGRES_DB_DEV),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where every pool connects. Shared by all five pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub database: String,
}

/// One pool's database login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub password: SecretString,
}

/// Credentials for every role, each from its dedicated variable pair.
#[derive(Debug, Clone)]
pub struct RoleCredentials {
    read: Credentials,
    create: Credentials,
    update: Credentials,
    delete: Credentials,
    crud: Credentials,
}

impl RoleCredentials {
    /// Credentials for `role`.
    #[must_use]
    pub const fn get(&self, role: PoolRole) -> &Credentials {
        match role {
            PoolRole::Read => &self.read,
            PoolRole::Create => &self.create,
            PoolRole::Update => &self.update,
            PoolRole::Delete => &self.delete,
            PoolRole::Crud => &self.crud,
        }
    }
}

/// Fully resolved settings for the five role pools.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub environment: Environment,
    pub endpoint: Endpoint,
    pub credentials: RoleCredentials,
    issues: Vec<ConfigError>,
}

impl PoolSettings {
    /// Load settings from the process environment.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, which maps a variable name to its
    /// value.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut resolver = Resolver {
            lookup,
            issues: Vec::new(),
        };

        let environment = Environment::from_node_env((resolver.lookup)(NODE_ENV).as_deref());
        let (host_var, database_var) = environment.endpoint_vars();

        let endpoint = Endpoint {
            host: resolver.required(host_var),
            port: resolver.port(),
            database: resolver.required(database_var),
        };

        let credentials = RoleCredentials {
            read: resolver.credentials(PoolRole::Read),
            create: resolver.credentials(PoolRole::Create),
            update: resolver.credentials(PoolRole::Update),
            delete: resolver.credentials(PoolRole::Delete),
            crud: resolver.credentials(PoolRole::Crud),
        };

        tracing::info!(
            environment = %environment,
            host = %endpoint.host,
            port = endpoint.port,
            database = %endpoint.database,
            "Resolved database endpoint"
        );
        for issue in &resolver.issues {
            tracing::warn!(%issue, "Pool configuration issue");
        }

        Self {
            environment,
            endpoint,
            credentials,
            issues: resolver.issues,
        }
    }

    /// Problems recorded while loading, in discovery order.
    #[must_use]
    pub fn issues(&self) -> &[ConfigError] {
        &self.issues
    }

    /// Fail if anything was missing or invalid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` listing every recorded issue.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(InvalidConfig(self.issues.clone()))
        }
    }
}

struct Resolver<F> {
    lookup: F,
    issues: Vec<ConfigError>,
}

impl<F> Resolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// The variable's value, or an empty string with a recorded issue.
    fn required(&mut self, key: &'static str) -> String {
        match (self.lookup)(key) {
            Some(value) if !value.is_empty() => value,
            Some(empty) => {
                self.issues.push(ConfigError::MissingEnvVar(key));
                empty
            }
            None => {
                self.issues.push(ConfigError::MissingEnvVar(key));
                String::new()
            }
        }
    }

    fn port(&mut self) -> u16 {
        let Some(raw) = (self.lookup)(POSTGRES_PORT) else {
            self.issues.push(ConfigError::MissingEnvVar(POSTGRES_PORT));
            return DEFAULT_PORT;
        };
        raw.trim().parse::<u16>().unwrap_or_else(|e| {
            self.issues.push(ConfigError::InvalidEnvVar(
                POSTGRES_PORT,
                format!("{raw:?} is not a port number ({e})"),
            ));
            DEFAULT_PORT
        })
    }

    fn credentials(&mut self, role: PoolRole) -> Credentials {
        Credentials {
            user: self.required(role.user_var()),
            password: SecretString::from(self.required(role.password_var())),
        }
    }
}
