//! Permission classes and their fixed pool sizing.

use core::fmt;

/// The permission class a pool's database user is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PoolRole {
    Read,
    Create,
    Update,
    Delete,
    /// All four operations.
    Crud,
}

impl PoolRole {
    /// Every role in provisioning order.
    pub const ALL: [Self; 5] = [
        Self::Read,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Crud,
    ];

    /// Connection cap for write-capable pools.
    pub const WRITE_MAX_CONNECTIONS: u32 = 10;

    /// Connection cap for the read pool. Reads dominate, so it gets twice
    /// the write cap.
    pub const READ_MAX_CONNECTIONS: u32 = 2 * Self::WRITE_MAX_CONNECTIONS;

    /// Maximum concurrent connections for this role's pool.
    #[must_use]
    pub const fn max_connections(self) -> u32 {
        match self {
            Self::Read => Self::READ_MAX_CONNECTIONS,
            Self::Create | Self::Update | Self::Delete | Self::Crud => {
                Self::WRITE_MAX_CONNECTIONS
            }
        }
    }

    /// Environment variable holding this role's database user.
    #[must_use]
    pub const fn user_var(self) -> &'static str {
        match self {
            Self::Read => "POSTGRES_READ_USER",
            Self::Create => "POSTGRES_CREATE_USER",
            Self::Update => "POSTGRES_UPDATE_USER",
            Self::Delete => "POSTGRES_DELETE_USER",
            Self::Crud => "POSTGRES_CRUD_USER",
        }
    }

    /// Environment variable holding this role's database password.
    #[must_use]
    pub const fn password_var(self) -> &'static str {
        match self {
            Self::Read => "POSTGRES_READ_USER_PASSWORD",
            Self::Create => "POSTGRES_CREATE_USER_PASSWORD",
            Self::Update => "POSTGRES_UPDATE_USER_PASSWORD",
            Self::Delete => "POSTGRES_DELETE_USER_PASSWORD",
            Self::Crud => "POSTGRES_CRUD_USER_PASSWORD",
        }
    }

    /// Lowercase name, used in logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Crud => "crud",
        }
    }
}

impl fmt::Display for PoolRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
