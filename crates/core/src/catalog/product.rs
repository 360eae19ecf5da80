//! Products, their variation options, and embedded relations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::attribute::{Attribute, AttributeValue};
use super::category::Category;
use super::image::Image;
use super::shared::SharedFields;
use super::shipping::{ProductShipping, ProductShippingInfo};
use super::supplier::Supplier;
use super::tag::Tag;
use crate::types::{ProductId, ProductStatus, VariationOptionId};

/// A sellable product.
///
/// Relations (categories, suppliers, tags, shipping) are embedded shapes,
/// not foreign keys. Nullable lists may contain `null` entries when the
/// producer joined against missing rows; they are kept as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_out_of_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<Image>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppliers: Option<Vec<Option<Supplier>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Option<Tag>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shippings: Option<Vec<Option<ProductShipping>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_shipping_info: Option<ProductShippingInfo>,
    pub variation_options: Vec<VariationOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<ProductVariation>>,
    #[serde(flatten)]
    pub shared: SharedFields,
}

impl Product {
    /// Variation options that are active and not disabled.
    pub fn available_options(&self) -> impl Iterator<Item = &VariationOption> {
        self.variation_options
            .iter()
            .filter(|option| option.active && !option.is_disable)
    }

    /// Tags that are present, skipping `null` entries.
    pub fn present_tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().flatten().flatten()
    }
}

/// A concrete purchasable combination of attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationOption {
    pub id: VariationOptionId,
    pub title: String,
    pub is_disable: bool,
    pub active: bool,
    pub image: String,
    /// Attribute values making up this option, e.g. `["XL", "Red"]`.
    pub options: Vec<String>,
    pub sale_price: Decimal,
    pub compare_price: Decimal,
    pub buying_price: Decimal,
    pub quantity: i64,
    pub sku: String,
}

/// An attribute together with the values this product offers for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariation {
    pub attribute: Attribute,
    pub attribute_values: Vec<Option<AttributeValue>>,
}
