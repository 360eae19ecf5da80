//! Core types for Storekeeper.
//!
//! This module provides closed token enums and type-safe wrappers shared by
//! the catalog shapes and the database layer.

pub mod token;

pub mod id;
pub mod privilege;
pub mod sort;
pub mod status;
pub mod timestamp;

pub use id::*;
pub use privilege::{
    Action, ActionError, AdminPrivilege, InternalPrivilege, Privilege, PrivilegeScope,
    StaffPrivilege,
};
pub use sort::{OrderBy, SortOrder};
pub use status::{CouponDiscountType, ProductStatus};
pub use timestamp::Timestamp;
pub use token::UnknownToken;
