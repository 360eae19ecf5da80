//! Status and kind tokens for catalog entities.

use super::token::define_token;

define_token! {
    /// How a coupon discounts an order.
    CouponDiscountType {
        /// A fixed amount off.
        Fixed => "fixed",
        /// A percentage of the order amount.
        Percentage => "percentage",
        /// Shipping is waived.
        FreeShipping => "free_shipping",
    }
}

define_token! {
    /// Product publication status.
    ProductStatus {
        Draft => "draft",
        Publish => "publish",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_discount_tokens() {
        assert_eq!(CouponDiscountType::Fixed.as_str(), "fixed");
        assert_eq!(CouponDiscountType::Percentage.as_str(), "percentage");
        assert_eq!(CouponDiscountType::FreeShipping.as_str(), "free_shipping");
    }

    #[test]
    fn test_coupon_discount_serde_roundtrip() {
        for kind in CouponDiscountType::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
            let parsed: CouponDiscountType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn test_product_status_from_str() {
        assert_eq!("draft".parse::<ProductStatus>().unwrap(), ProductStatus::Draft);
        assert_eq!(
            "publish".parse::<ProductStatus>().unwrap(),
            ProductStatus::Publish
        );
        let err = "published".parse::<ProductStatus>().unwrap_err();
        assert_eq!(err.kind, "ProductStatus");
    }
}
