//! Staff accounts, roles, and login payloads.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::image::Image;
use super::shared::SharedFields;
use crate::types::{Privilege, RoleId, StaffId};

/// A named set of privileges assigned to staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub role_name: String,
    /// Granted privileges in the order they were assigned.
    pub privileges: Vec<Privilege>,
}

impl Role {
    /// Whether `privilege` was granted to this role.
    ///
    /// Exact membership only. Holding an admin token says nothing about the
    /// matching staff or internal token.
    #[must_use]
    pub fn has_privilege(&self, privilege: impl Into<Privilege>) -> bool {
        let privilege = privilege.into();
        self.privileges.contains(&privilege)
    }

    /// Whether the role carries `super_admin_privilege`.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.privileges.iter().any(Privilege::is_super_admin)
    }
}

/// A staff member's account.
///
/// `password` and `password_hash` are accepted on input but never serialized
/// and are redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAccount {
    pub id: StaffId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password_hash: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    pub active: bool,
    pub profile: Image,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<RoleId>,
    #[serde(flatten)]
    pub shared: SharedFields,
}

impl StaffAccount {
    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Debug for StaffAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaffAccount")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone_number", &self.phone_number)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .field("active", &self.active)
            .field("profile", &self.profile)
            .field("role", &self.role)
            .field("role_id", &self.role_id)
            .field("shared", &self.shared)
            .finish()
    }
}

/// Staff login form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub store_name: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("remember_me", &self.remember_me)
            .field("store_name", &self.store_name)
            .finish()
    }
}
