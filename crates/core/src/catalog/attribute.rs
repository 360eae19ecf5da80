//! Product attributes (size, color, ...) and their values.

use serde::{Deserialize, Serialize};

use super::shared::SharedFields;
use crate::types::{AttributeId, AttributeValueId};

/// A variation axis such as "Size" or "Color".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AttributeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_values: Option<Vec<AttributeValue>>,
    #[serde(flatten)]
    pub shared: SharedFields,
}

/// One value of an [`Attribute`], e.g. "XL" or "Red".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AttributeValueId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_id: Option<AttributeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_value: Option<String>,
    /// Display color for swatches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
