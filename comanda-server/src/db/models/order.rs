//! Order Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order ID type
pub type OrderId = RecordId;

/// Order model matching the `order` table
///
/// `items` holds one menu-item record id per unit ordered; duplicates are
/// meaningful. The list is append-only and `is_active` flips to false
/// exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<OrderId>,
    pub is_active: bool,
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub items: Vec<RecordId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserialize_defaults_items() {
        let json = r#"{"is_active":true}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert!(order.is_active);
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_order_items_keep_duplicates() {
        let json = r#"{"is_active":true,"items":["menu_item:a","menu_item:b","menu_item:a"]}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.items.len(), 3);
        assert_eq!(order.items[0], order.items[2]);
    }
}
