//! Discount coupons.

use serde::{Deserialize, Serialize};

use super::shared::SharedFields;
use crate::types::{CouponDiscountType, CouponId, Timestamp};

/// A discount coupon and its usage counters.
///
/// Amounts are whole units of the store currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CouponId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<i64>,
    /// Minimum order amount the coupon applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_amount_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<CouponDiscountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times_used: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_usage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_start_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_end_date: Option<Timestamp>,
    #[serde(flatten)]
    pub shared: SharedFields,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_discount_type_uses_exact_tokens() {
        let coupon: Coupon = serde_json::from_value(json!({
            "code": "SHIPFREE",
            "discount_type": "free_shipping",
            "coupon_start_date": "2024-01-01",
            "max_usage": 100,
            "times_used": 12
        }))
        .unwrap();

        assert_eq!(coupon.discount_type, Some(CouponDiscountType::FreeShipping));
        assert_eq!(coupon.max_usage, Some(100));

        let value = serde_json::to_value(&coupon).unwrap();
        assert_eq!(value["discount_type"], "free_shipping");
        assert_eq!(value["coupon_start_date"], "2024-01-01");
    }

    #[test]
    fn test_unknown_discount_type_is_rejected() {
        let result = serde_json::from_value::<Coupon>(json!({"discount_type": "bogo"}));
        assert!(result.is_err());
    }
}
