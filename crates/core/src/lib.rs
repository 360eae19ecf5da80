//! Storekeeper Core - Shared domain types.
//!
//! This crate provides the vocabulary shared by every Storekeeper component:
//! - `storekeeper-db` - Role-scoped `PostgreSQL` pool provisioning
//! - `storekeeper-cli` - Operator tooling
//! - downstream API and persistence layers
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. Shapes are non-validating: deserializing a payload never checks
//! business rules, only structure.
//!
//! # Modules
//!
//! - [`types`] - Closed token enums (privileges, sort orders, coupon kinds),
//!   typed IDs, and flexible scalars
//! - [`catalog`] - Entity shapes (products, categories, staff, suppliers, ...)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
