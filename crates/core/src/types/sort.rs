//! Listing order tokens.

use super::token::define_token;

define_token! {
    /// Sort direction for listings. Defaults to newest first.
    #[derive(Default)]
    SortOrder {
        /// Sort records in ascending order.
        Asc => "ASC",
        /// Sort records in descending order.
        #[default]
        Desc => "DESC",
    }
}

define_token! {
    /// Column a listing is ordered by.
    #[derive(Default)]
    OrderBy {
        #[default]
        CreatedAt => "created_at",
        UpdatedAt => "updated_at",
    }
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_tokens() {
        assert_eq!(SortOrder::Asc.as_str(), "ASC");
        assert_eq!(SortOrder::Desc.as_str(), "DESC");
        assert_eq!(SortOrder::ALL, &[SortOrder::Asc, SortOrder::Desc]);
    }

    #[test]
    fn test_order_by_tokens() {
        assert_eq!(OrderBy::CreatedAt.as_str(), "created_at");
        assert_eq!(OrderBy::UpdatedAt.as_str(), "updated_at");
    }

    #[test]
    fn test_serde_roundtrip() {
        for order in SortOrder::ALL {
            let json = serde_json::to_string(order).unwrap();
            let parsed: SortOrder = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, *order);
        }
        for column in OrderBy::ALL {
            let json = serde_json::to_string(column).unwrap();
            let parsed: OrderBy = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, *column);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("asc".parse::<SortOrder>().is_err());
        assert!("CREATED_AT".parse::<OrderBy>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SortOrder::Desc), "DESC");
        assert_eq!(OrderBy::UpdatedAt.to_string(), "updated_at");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(OrderBy::default(), OrderBy::CreatedAt);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(SortOrder::Asc.reversed(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.reversed().reversed(), SortOrder::Desc);
    }
}
