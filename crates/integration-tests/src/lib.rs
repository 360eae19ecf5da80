//! Integration tests for Storekeeper.
//!
//! # Running Tests
//!
//! The live tests are `#[ignore]`d. They need a `PostgreSQL` server with the
//! five role users from `.env` and a probe table the users are granted on:
//!
//! ```sql
//! CREATE TABLE pool_probe (id uuid PRIMARY KEY, note text NOT NULL);
//! GRANT SELECT ON pool_probe TO read_user;
//! GRANT INSERT ON pool_probe TO create_user;
//! GRANT UPDATE ON pool_probe TO update_user;
//! GRANT DELETE, SELECT (id) ON pool_probe TO delete_user;
//! GRANT SELECT, INSERT, UPDATE, DELETE ON pool_probe TO crud_user;
//! ```
//!
//! `DELETE ... WHERE id = $1` reads `id`, so the delete user also needs
//! `SELECT` on that one column. It still cannot read `note`.
//!
//! ```bash
//! cargo test -p storekeeper-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use storekeeper_db::{PoolSettings, RolePools};

/// Table every role user is granted its one privilege on.
pub const PROBE_TABLE: &str = "pool_probe";

/// SQLSTATE for `insufficient_privilege`.
pub const INSUFFICIENT_PRIVILEGE: &str = "42501";

/// Settings and pools loaded from the environment.
///
/// # Panics
///
/// Panics if any pool variable is missing, since live tests cannot run
/// against a partial configuration.
#[must_use]
pub fn live_pools() -> (PoolSettings, RolePools) {
    let settings = PoolSettings::from_env();
    if let Err(e) = settings.validate() {
        panic!("live tests need a complete pool configuration: {e}");
    }
    let pools = RolePools::connect_lazy(&settings);
    (settings, pools)
}

/// Whether `error` is the server refusing a statement for lack of a grant.
#[must_use]
pub fn is_permission_denied(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == INSUFFICIENT_PRIVILEGE)
}
