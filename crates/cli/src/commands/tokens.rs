//! Print the closed token sets shared with the database and API clients.

use clap::ValueEnum;
use storekeeper_core::{CouponDiscountType, OrderBy, Privilege, ProductStatus, SortOrder};

/// Which token set to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenKind {
    Privileges,
    SortOrder,
    OrderBy,
    CouponDiscount,
    ProductStatus,
    All,
}

#[allow(clippy::print_stdout)]
pub fn show(kind: TokenKind) {
    for line in lines(kind) {
        println!("{line}");
    }
}

/// Token listing for `kind`. `All` prefixes each token with its set name.
#[must_use]
pub fn lines(kind: TokenKind) -> Vec<String> {
    match kind {
        TokenKind::Privileges => Privilege::ALL.iter().map(|p| p.as_str().to_owned()).collect(),
        TokenKind::SortOrder => strs(SortOrder::ALL.iter().map(SortOrder::as_str)),
        TokenKind::OrderBy => strs(OrderBy::ALL.iter().map(OrderBy::as_str)),
        TokenKind::CouponDiscount => {
            strs(CouponDiscountType::ALL.iter().map(CouponDiscountType::as_str))
        }
        TokenKind::ProductStatus => strs(ProductStatus::ALL.iter().map(ProductStatus::as_str)),
        TokenKind::All => [
            ("privilege", TokenKind::Privileges),
            ("sort_order", TokenKind::SortOrder),
            ("order_by", TokenKind::OrderBy),
            ("coupon_discount_type", TokenKind::CouponDiscount),
            ("product_status", TokenKind::ProductStatus),
        ]
        .into_iter()
        .flat_map(|(label, kind)| {
            lines(kind)
                .into_iter()
                .map(move |token| format!("{label}\t{token}"))
        })
        .collect(),
    }
}

fn strs<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<String> {
    tokens.map(str::to_owned).collect()
}
