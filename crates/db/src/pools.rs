//! The five role-scoped connection pools.
//!
//! Pools are built with `connect_lazy_with`: construction opens no sockets
//! and cannot fail. Connections are established on first acquire, and
//! queueing beyond `max_connections`, acquire timeouts, and idle reaping are
//! left to `sqlx` defaults.

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::{Credentials, Endpoint, PoolSettings};
use crate::role::PoolRole;

/// Connection handles for every permission class.
///
/// Build once at startup and pass down explicitly. Cloning is cheap; clones
/// share the same underlying pools.
#[derive(Debug, Clone)]
pub struct RolePools {
    read: PgPool,
    create: PgPool,
    update: PgPool,
    delete: PgPool,
    crud: PgPool,
}

impl RolePools {
    /// Build all five pools from resolved settings without connecting.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn connect_lazy(settings: &PoolSettings) -> Self {
        let build = |role: PoolRole| {
            let pool = pool_options(role).connect_lazy_with(connect_options(
                &settings.endpoint,
                settings.credentials.get(role),
            ));
            tracing::debug!(
                role = %role,
                max_connections = role.max_connections(),
                "Database pool created"
            );
            pool
        };

        let pools = Self {
            read: build(PoolRole::Read),
            create: build(PoolRole::Create),
            update: build(PoolRole::Update),
            delete: build(PoolRole::Delete),
            crud: build(PoolRole::Crud),
        };
        tracing::info!(
            environment = %settings.environment,
            host = %settings.endpoint.host,
            database = %settings.endpoint.database,
            "Role pools created"
        );
        pools
    }

    /// Load settings from the environment and build the pools.
    #[must_use]
    pub fn from_env() -> Self {
        Self::connect_lazy(&PoolSettings::from_env())
    }

    /// Pool whose user may only `SELECT`.
    #[must_use]
    pub const fn read(&self) -> &PgPool {
        &self.read
    }

    /// Pool whose user may only `INSERT`.
    #[must_use]
    pub const fn create(&self) -> &PgPool {
        &self.create
    }

    /// Pool whose user may only `UPDATE`.
    #[must_use]
    pub const fn update(&self) -> &PgPool {
        &self.update
    }

    /// Pool whose user may only `DELETE`.
    #[must_use]
    pub const fn delete(&self) -> &PgPool {
        &self.delete
    }

    /// Pool whose user holds all four grants.
    #[must_use]
    pub const fn crud(&self) -> &PgPool {
        &self.crud
    }

    /// Pool for `role`.
    #[must_use]
    pub const fn get(&self, role: PoolRole) -> &PgPool {
        match role {
            PoolRole::Read => &self.read,
            PoolRole::Create => &self.create,
            PoolRole::Update => &self.update,
            PoolRole::Delete => &self.delete,
            PoolRole::Crud => &self.crud,
        }
    }

    /// Every pool with its role, in provisioning order.
    pub fn iter(&self) -> impl Iterator<Item = (PoolRole, &PgPool)> {
        PoolRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Acquire a connection from `role`'s pool and run `SELECT 1`.
    ///
    /// # Errors
    ///
    /// Returns the `sqlx::Error` from connecting, authenticating, or querying.
    pub async fn ping(&self, role: PoolRole) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(self.get(role)).await?;
        tracing::debug!(role = %role, "Pool ping succeeded");
        Ok(())
    }

    /// Ping every pool in turn, collecting each outcome.
    ///
    /// Failures are returned, not logged; reporting is left to the caller.
    pub async fn ping_all(&self) -> Vec<(PoolRole, Result<(), sqlx::Error>)> {
        let mut results = Vec::with_capacity(PoolRole::ALL.len());
        for role in PoolRole::ALL {
            results.push((role, self.ping(role).await));
        }
        results
    }

    /// Close every pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        for (_, pool) in self.iter() {
            pool.close().await;
        }
        tracing::info!("Role pools closed");
    }
}

/// Pool options for `role`: only the connection cap differs between roles.
#[must_use]
pub fn pool_options(role: PoolRole) -> PgPoolOptions {
    PgPoolOptions::new().max_connections(role.max_connections())
}

/// Connect options for one login against the shared endpoint.
///
/// Host, port, database, user and password are always set explicitly and
/// `.pgpass` is never consulted, so the pool authenticates with exactly the
/// configured credentials.
#[must_use]
pub fn connect_options(endpoint: &Endpoint, credentials: &Credentials) -> PgConnectOptions {
    PgConnectOptions::new_without_pgpass()
        .host(&endpoint.host)
        .port(endpoint.port)
        .database(&endpoint.database)
        .username(&credentials.user)
        .password(credentials.password.expose_secret())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::tests::{full_env, settings_from};
    use crate::config::{
        NODE_ENV, POSTGRES_DB, POSTGRES_ENDPOINT, POSTGRES_ENDPOINT_DEV, POSTGRES_PORT,
    };

    #[tokio::test]
    async fn test_pools_share_endpoint() {
        let mut env = full_env();
        env.insert(NODE_ENV, "production".to_string());
        env.insert(POSTGRES_ENDPOINT, "db.prod".to_string());
        env.insert(POSTGRES_DB, "shop".to_string());

        let pools = RolePools::connect_lazy(&settings_from(&env));
        for (role, pool) in pools.iter() {
            let options = pool.connect_options();
            assert_eq!(options.get_host(), "db.prod", "{role} host");
            assert_eq!(options.get_port(), 6543, "{role} port");
            assert_eq!(options.get_database(), Some("shop"), "{role} database");
        }
    }

    #[tokio::test]
    async fn test_pools_use_their_own_user() {
        let pools = RolePools::connect_lazy(&settings_from(&full_env()));
        for (role, pool) in pools.iter() {
            assert_eq!(
                pool.connect_options().get_username(),
                format!("{role}_user"),
                "{role} pool must authenticate as its own user"
            );
        }
        assert_eq!(
            pools.create().connect_options().get_username(),
            "create_user"
        );
    }

    #[tokio::test]
    async fn test_read_pool_has_double_capacity() {
        let pools = RolePools::connect_lazy(&settings_from(&full_env()));
        assert_eq!(pools.read().options().get_max_connections(), 20);
        for role in [
            PoolRole::Create,
            PoolRole::Update,
            PoolRole::Delete,
            PoolRole::Crud,
        ] {
            assert_eq!(
                pools.get(role).options().get_max_connections(),
                10,
                "{role} cap"
            );
        }
    }

    #[tokio::test]
    async fn test_construction_does_not_connect() {
        let mut env = full_env();
        env.insert(POSTGRES_ENDPOINT_DEV, "unreachable.invalid".to_string());
        env.insert(POSTGRES_PORT, "1".to_string());

        let pools = RolePools::connect_lazy(&settings_from(&env));
        for (_, pool) in pools.iter() {
            assert_eq!(pool.size(), 0);
        }
    }

    #[tokio::test]
    async fn test_missing_config_still_builds_pools() {
        let pools = RolePools::connect_lazy(&PoolSettings::from_lookup(|_| None));
        assert_eq!(pools.iter().count(), 5);
        assert_eq!(pools.crud().connect_options().get_port(), 5432);
        assert_eq!(pools.crud().connect_options().get_host(), "");
    }

    #[test]
    fn test_connect_options() {
        let settings = settings_from(&full_env());
        let options = connect_options(
            &settings.endpoint,
            settings.credentials.get(PoolRole::Update),
        );
        assert_eq!(options.get_host(), "db.dev");
        assert_eq!(options.get_database(), Some("shop_dev"));
        assert_eq!(options.get_username(), "update_user");
    }
}
