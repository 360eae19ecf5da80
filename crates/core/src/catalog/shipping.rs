//! Shipping providers and per-product shipping data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::image::Image;
use super::shared::SharedFields;
use crate::types::{ProductId, ShippingId, ShippingInfoId};

/// A shipping provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShippingId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Image>,
    #[serde(flatten)]
    pub shared: SharedFields,
}

/// A geographic zone a product ships to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingZone {
    pub name: String,
    pub code: String,
}

/// Price for shipping to a group of zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingZoneRate {
    pub zones: Vec<ShippingZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_price: Option<Decimal>,
}

/// How a product ships: zone pricing and the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductShipping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_zones: Option<Vec<ShippingZoneRate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_provider: Option<Shipping>,
}

impl ProductShipping {
    /// Shipping price for the zone with the given code, if any rate covers it.
    ///
    /// Rates are checked in order and the first match wins.
    #[must_use]
    pub fn price_for_zone(&self, code: &str) -> Option<Decimal> {
        self.shipping_zones
            .as_deref()?
            .iter()
            .find(|rate| rate.zones.iter().any(|zone| zone.code == code))
            .and_then(|rate| rate.shipping_price)
    }
}

/// Physical shipping attributes of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductShippingInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShippingInfoId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_depth: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_unit: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;

    fn shipping() -> ProductShipping {
        serde_json::from_value(json!({
            "shipping_zones": [
                {"zones": [{"name": "United Kingdom", "code": "GB"}], "shipping_price": "3.50"},
                {"zones": [
                    {"name": "France", "code": "FR"},
                    {"name": "Germany", "code": "DE"}
                ], "shipping_price": 7.25},
                {"zones": [{"name": "Iceland", "code": "IS"}]}
            ],
            "shipping_provider": {"id": "ship_1", "shipper_name": "Royal Mail", "active": true}
        }))
        .unwrap()
    }

    #[test]
    fn test_price_for_zone() {
        let shipping = shipping();
        assert_eq!(shipping.price_for_zone("GB"), Some(Decimal::new(350, 2)));
        assert_eq!(shipping.price_for_zone("DE"), Some(Decimal::new(725, 2)));
    }

    #[test]
    fn test_price_for_zone_without_price_or_match() {
        let shipping = shipping();
        assert_eq!(shipping.price_for_zone("IS"), None);
        assert_eq!(shipping.price_for_zone("US"), None);
        assert_eq!(ProductShipping::default().price_for_zone("GB"), None);
    }

    #[test]
    fn test_provider_shape() {
        let provider = shipping().shipping_provider.unwrap();
        assert_eq!(provider.shipper_name.as_deref(), Some("Royal Mail"));
        assert_eq!(provider.active, Some(true));
        assert!(provider.thumbnail.is_none());
    }
}
