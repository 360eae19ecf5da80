//! Catalog entity shapes.
//!
//! These are data-transfer structures exchanged with the database and API
//! layers. They carry no behavior beyond small accessors and perform no
//! validation beyond what serde needs to decode the structure.

pub mod attribute;
pub mod category;
pub mod coupon;
pub mod image;
pub mod order_status;
pub mod product;
pub mod shared;
pub mod shipping;
pub mod staff;
pub mod supplier;
pub mod tag;

pub use attribute::{Attribute, AttributeValue};
pub use category::Category;
pub use coupon::Coupon;
pub use image::Image;
pub use order_status::OrderStatus;
pub use product::{Product, ProductVariation, VariationOption};
pub use shared::{AuditActor, SharedFields};
pub use shipping::{ProductShipping, ProductShippingInfo, Shipping, ShippingZone, ShippingZoneRate};
pub use staff::{LoginRequest, Role, StaffAccount};
pub use supplier::Supplier;
pub use tag::Tag;
