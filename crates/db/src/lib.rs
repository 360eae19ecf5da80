//! Storekeeper DB - Role-scoped `PostgreSQL` connection pools.
//!
//! Five pools point at the same database, one per permission class. Each
//! authenticates as its own database user, so a component handed only the
//! read pool cannot issue writes: the server's grant system refuses them.
//!
//! # Usage
//!
//! ```rust,no_run
//! use storekeeper_db::{PoolRole, PoolSettings, RolePools};
//!
//! # async fn run() -> Result<(), sqlx::Error> {
//! let settings = PoolSettings::from_env();
//! let pools = RolePools::connect_lazy(&settings);
//!
//! let row: (i32,) = sqlx::query_as("SELECT 1").fetch_one(pools.read()).await?;
//! assert_eq!(row.0, 1);
//!
//! pools.ping(PoolRole::Crud).await?;
//! pools.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! Construction never touches the network. Bad credentials or an unreachable
//! host surface as `sqlx::Error` the first time a connection is acquired.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod pools;
pub mod role;

pub use config::{
    ConfigError, Credentials, Endpoint, Environment, InvalidConfig, PoolSettings, RoleCredentials,
};
pub use pools::RolePools;
pub use role::PoolRole;
