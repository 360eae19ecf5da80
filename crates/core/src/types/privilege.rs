//! Privilege tokens, roles' building blocks, and permission-check actions.
//!
//! Privileges come in three independent namespaces: internal (customer-facing
//! service access), staff, and admin. Admin adds a `super_admin_privilege`
//! token used to elevate an [`Action`].
//!
//! Tokens are opaque. There is no ranking between namespaces:
//! `admin_read_privilege` does not imply `staff_read_privilege`, and nothing in
//! this module pretends otherwise. Callers that need implication rules must
//! define them in their own authorization layer.

use core::str::FromStr;

use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::token::{UnknownToken, define_token, impl_token_traits};

define_token! {
    /// Internal (customer) privileges.
    InternalPrivilege {
        Read => "read_privilege",
        Create => "create_privilege",
        Update => "update_privilege",
        Delete => "delete_privilege",
    }
}

define_token! {
    /// Staff privileges.
    StaffPrivilege {
        Read => "staff_read_privilege",
        Create => "staff_create_privilege",
        Update => "staff_update_privilege",
        Delete => "staff_delete_privilege",
    }
}

define_token! {
    /// Admin privileges.
    AdminPrivilege {
        Read => "admin_read_privilege",
        Create => "admin_create_privilege",
        Update => "admin_update_privilege",
        Delete => "admin_delete_privilege",
        /// Elevation token. Only valid as the second element of an [`Action`].
        Super => "super_admin_privilege",
    }
}

/// Which namespace a [`Privilege`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrivilegeScope {
    Internal,
    Staff,
    Admin,
}

/// Any privilege token from any namespace.
///
/// Serializes as the bare token string, e.g. `"staff_update_privilege"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privilege {
    Internal(InternalPrivilege),
    Staff(StaffPrivilege),
    Admin(AdminPrivilege),
}

impl Privilege {
    /// The super-admin elevation token.
    pub const SUPER_ADMIN: Self = Self::Admin(AdminPrivilege::Super);

    /// All thirteen tokens: internal, then staff, then admin.
    pub const ALL: [Self; 13] = [
        Self::Internal(InternalPrivilege::Read),
        Self::Internal(InternalPrivilege::Create),
        Self::Internal(InternalPrivilege::Update),
        Self::Internal(InternalPrivilege::Delete),
        Self::Staff(StaffPrivilege::Read),
        Self::Staff(StaffPrivilege::Create),
        Self::Staff(StaffPrivilege::Update),
        Self::Staff(StaffPrivilege::Delete),
        Self::Admin(AdminPrivilege::Read),
        Self::Admin(AdminPrivilege::Create),
        Self::Admin(AdminPrivilege::Update),
        Self::Admin(AdminPrivilege::Delete),
        Self::Admin(AdminPrivilege::Super),
    ];

    /// The exact token string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Internal(p) => p.as_str(),
            Self::Staff(p) => p.as_str(),
            Self::Admin(p) => p.as_str(),
        }
    }

    /// The namespace this token belongs to.
    #[must_use]
    pub const fn scope(&self) -> PrivilegeScope {
        match self {
            Self::Internal(_) => PrivilegeScope::Internal,
            Self::Staff(_) => PrivilegeScope::Staff,
            Self::Admin(_) => PrivilegeScope::Admin,
        }
    }

    /// Whether this is the super-admin elevation token.
    #[must_use]
    pub const fn is_super_admin(&self) -> bool {
        matches!(self, Self::Admin(AdminPrivilege::Super))
    }
}

impl FromStr for Privilege {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(p) = s.parse::<InternalPrivilege>() {
            return Ok(Self::Internal(p));
        }
        if let Ok(p) = s.parse::<StaffPrivilege>() {
            return Ok(Self::Staff(p));
        }
        if let Ok(p) = s.parse::<AdminPrivilege>() {
            return Ok(Self::Admin(p));
        }
        Err(UnknownToken::new("Privilege", s))
    }
}

impl_token_traits!(Privilege);

impl From<InternalPrivilege> for Privilege {
    fn from(p: InternalPrivilege) -> Self {
        Self::Internal(p)
    }
}

impl From<StaffPrivilege> for Privilege {
    fn from(p: StaffPrivilege) -> Self {
        Self::Staff(p)
    }
}

impl From<AdminPrivilege> for Privilege {
    fn from(p: AdminPrivilege) -> Self {
        Self::Admin(p)
    }
}

/// Errors building an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// `super_admin_privilege` cannot be the base of an action.
    #[error("super_admin_privilege cannot be used as a base privilege")]
    SuperAsBase,
    /// The second element of an action must be `super_admin_privilege`.
    #[error("action elevation must be super_admin_privilege, got {0}")]
    InvalidElevation(Privilege),
    /// Actions have one or two elements.
    #[error("action must have 1 or 2 privileges, got {0}")]
    Arity(usize),
}

/// A permission-check token: one base privilege, optionally elevated by
/// super-admin.
///
/// On the wire this is a one- or two-element array:
/// `["admin_read_privilege"]` or
/// `["admin_read_privilege", "super_admin_privilege"]`.
///
/// ```
/// use storekeeper_core::{Action, AdminPrivilege, StaffPrivilege};
///
/// let action = Action::elevated(StaffPrivilege::Delete).unwrap();
/// assert!(action.is_elevated());
///
/// // The elevation token is never a base.
/// assert!(Action::new(AdminPrivilege::Super).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    base: Privilege,
    elevated: bool,
}

impl Action {
    /// An action requiring only `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::SuperAsBase`] if `base` is the super-admin token.
    pub fn new(base: impl Into<Privilege>) -> Result<Self, ActionError> {
        let base = base.into();
        if base.is_super_admin() {
            return Err(ActionError::SuperAsBase);
        }
        Ok(Self {
            base,
            elevated: false,
        })
    }

    /// An action requiring `base` elevated by super-admin.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::SuperAsBase`] if `base` is the super-admin token.
    pub fn elevated(base: impl Into<Privilege>) -> Result<Self, ActionError> {
        let mut action = Self::new(base)?;
        action.elevated = true;
        Ok(action)
    }

    /// The base privilege.
    #[must_use]
    pub const fn base(&self) -> Privilege {
        self.base
    }

    /// Whether the super-admin token accompanies the base.
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// The tokens in wire order.
    pub fn tokens(&self) -> impl Iterator<Item = Privilege> {
        core::iter::once(self.base).chain(self.elevated.then_some(Privilege::SUPER_ADMIN))
    }
}

impl TryFrom<&[Privilege]> for Action {
    type Error = ActionError;

    fn try_from(tokens: &[Privilege]) -> Result<Self, Self::Error> {
        match *tokens {
            [base] => Self::new(base),
            [base, elevation] if elevation.is_super_admin() => Self::elevated(base),
            [_, other] => Err(ActionError::InvalidElevation(other)),
            _ => Err(ActionError::Arity(tokens.len())),
        }
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.elevated { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        for token in self.tokens() {
            seq.serialize_element(&token)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tokens = Vec::<Privilege>::deserialize(deserializer)?;
        Self::try_from(tokens.as_slice()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_tokens() {
        assert_eq!(InternalPrivilege::Read.as_str(), "read_privilege");
        assert_eq!(InternalPrivilege::Create.as_str(), "create_privilege");
        assert_eq!(InternalPrivilege::Update.as_str(), "update_privilege");
        assert_eq!(InternalPrivilege::Delete.as_str(), "delete_privilege");
    }

    #[test]
    fn test_staff_tokens() {
        assert_eq!(StaffPrivilege::Read.as_str(), "staff_read_privilege");
        assert_eq!(StaffPrivilege::Create.as_str(), "staff_create_privilege");
        assert_eq!(StaffPrivilege::Update.as_str(), "staff_update_privilege");
        assert_eq!(StaffPrivilege::Delete.as_str(), "staff_delete_privilege");
    }

    #[test]
    fn test_admin_tokens() {
        assert_eq!(AdminPrivilege::Read.as_str(), "admin_read_privilege");
        assert_eq!(AdminPrivilege::Create.as_str(), "admin_create_privilege");
        assert_eq!(AdminPrivilege::Update.as_str(), "admin_update_privilege");
        assert_eq!(AdminPrivilege::Delete.as_str(), "admin_delete_privilege");
        assert_eq!(AdminPrivilege::Super.as_str(), "super_admin_privilege");
    }

    #[test]
    fn test_privilege_roundtrip_all_tokens() {
        for privilege in Privilege::ALL {
            let json = serde_json::to_string(&privilege).unwrap();
            assert_eq!(json, format!("\"{}\"", privilege.as_str()));
            let parsed: Privilege = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, privilege);
        }
    }

    #[test]
    fn test_privilege_tokens_are_distinct() {
        let mut tokens: Vec<&str> = Privilege::ALL.iter().map(Privilege::as_str).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), Privilege::ALL.len());
    }

    #[test]
    fn test_privilege_scope() {
        assert_eq!(
            Privilege::from(InternalPrivilege::Read).scope(),
            PrivilegeScope::Internal
        );
        assert_eq!(
            Privilege::from(StaffPrivilege::Read).scope(),
            PrivilegeScope::Staff
        );
        assert_eq!(Privilege::SUPER_ADMIN.scope(), PrivilegeScope::Admin);
    }

    #[test]
    fn test_privilege_rejects_unknown() {
        let err = "root_privilege".parse::<Privilege>().unwrap_err();
        assert_eq!(err.kind, "Privilege");
        assert_eq!(err.value, "root_privilege");
        assert!(serde_json::from_str::<Privilege>("\"READ\"").is_err());
    }

    #[test]
    fn test_namespaced_parse_does_not_cross() {
        assert!("staff_read_privilege".parse::<AdminPrivilege>().is_err());
        assert!("read_privilege".parse::<StaffPrivilege>().is_err());
    }

    #[test]
    fn test_action_plain_serializes_as_single_element() {
        let action = Action::new(AdminPrivilege::Read).unwrap();
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"["admin_read_privilege"]"#);
    }

    #[test]
    fn test_action_elevated_serializes_with_super() {
        let action = Action::elevated(StaffPrivilege::Delete).unwrap();
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"["staff_delete_privilege","super_admin_privilege"]"#);

        let parsed: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, action);
        assert!(parsed.is_elevated());
        assert_eq!(parsed.base(), Privilege::Staff(StaffPrivilege::Delete));
    }

    #[test]
    fn test_action_rejects_super_base() {
        assert_eq!(
            Action::new(AdminPrivilege::Super),
            Err(ActionError::SuperAsBase)
        );
        assert!(serde_json::from_str::<Action>(r#"["super_admin_privilege"]"#).is_err());
    }

    #[test]
    fn test_action_rejects_non_super_elevation() {
        let tokens = [
            Privilege::from(AdminPrivilege::Read),
            Privilege::from(AdminPrivilege::Delete),
        ];
        assert_eq!(
            Action::try_from(tokens.as_slice()),
            Err(ActionError::InvalidElevation(Privilege::Admin(
                AdminPrivilege::Delete
            )))
        );
    }

    #[test]
    fn test_action_rejects_bad_arity() {
        let empty: [Privilege; 0] = [];
        assert_eq!(
            Action::try_from(empty.as_slice()),
            Err(ActionError::Arity(0))
        );
        assert!(
            serde_json::from_str::<Action>(
                r#"["read_privilege","super_admin_privilege","super_admin_privilege"]"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_action_tokens_order() {
        let action = Action::elevated(InternalPrivilege::Update).unwrap();
        let tokens: Vec<Privilege> = action.tokens().collect();
        assert_eq!(
            tokens,
            vec![
                Privilege::Internal(InternalPrivilege::Update),
                Privilege::SUPER_ADMIN
            ]
        );
    }
}
