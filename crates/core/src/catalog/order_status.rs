//! Configurable order statuses.

use serde::{Deserialize, Serialize};

use super::shared::SharedFields;
use crate::types::OrderStatusId;

/// A named order status with its badge color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderStatusId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Visibility of the status (e.g. shown to customers or staff only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
    #[serde(flatten)]
    pub shared: SharedFields,
}
