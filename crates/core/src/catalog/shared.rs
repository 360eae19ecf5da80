//! Fields shared by most catalog entities.

use serde::{Deserialize, Serialize};

use super::image::Image;
use crate::types::{OrderBy, SortOrder, StaffId, Timestamp};

/// Staff member referenced by audit fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditActor {
    pub id: StaffId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Image>,
}

/// Audit trail and listing metadata carried alongside an entity.
///
/// Flattened into the entity's JSON, so a category serializes as
/// `{"id": ..., "category_name": ..., "created_at": ..., "orderBy": ...}`.
///
/// `page` and `limit` are always present on the wire (as `null` when unset).
/// Every field is defaulted on input, so payloads that omit the listing
/// metadata entirely still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<AuditActor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<AuditActor>,

    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(rename = "orderBy", default)]
    pub order_by: OrderBy,
    #[serde(rename = "sortedBy", default)]
    pub sorted_by: SortOrder,
    #[serde(default)]
    pub count: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_listing_metadata() {
        let shared = SharedFields::default();
        let value = serde_json::to_value(&shared).unwrap();
        assert_eq!(
            value,
            json!({
                "page": null,
                "limit": null,
                "orderBy": "created_at",
                "sortedBy": "DESC",
                "count": 0
            })
        );
    }

    #[test]
    fn test_audit_fields() {
        let shared: SharedFields = serde_json::from_value(json!({
            "created_at": "2020-04-20T13:53:12+02:00",
            "created_by": {"id": "staff_1", "first_name": "Ada"},
            "page": 2,
            "limit": 25,
            "orderBy": "updated_at",
            "sortedBy": "ASC",
            "count": 120
        }))
        .unwrap();

        assert!(shared.created_at.is_some());
        assert!(shared.updated_at.is_none());
        let actor = shared.created_by.unwrap();
        assert_eq!(actor.id.as_str(), "staff_1");
        assert_eq!(actor.first_name.as_deref(), Some("Ada"));
        assert_eq!(shared.page, Some(2));
        assert_eq!(shared.order_by, OrderBy::UpdatedAt);
        assert_eq!(shared.sorted_by, SortOrder::Asc);
        assert_eq!(shared.count, 120);
    }

    #[test]
    fn test_rejects_unknown_sort_token() {
        let result = serde_json::from_value::<SharedFields>(json!({"sortedBy": "UP"}));
        assert!(result.is_err());
    }
}
