//! Request and response DTOs shared between the server and its clients
//!
//! Field names follow the wire contract (camelCase), so every view model
//! carries a `rename_all` attribute. Costs ride as decimals serialized to
//! plain JSON numbers.

use crate::types::Role;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    pub role: Role,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Body of `POST /orders`
///
/// `menuItemTitle` historically arrived either as a single value or as a
/// repeated parameter; both forms are accepted and normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub waiter_id: String,
    pub menu_item_title: OneOrMany,
}

/// A value that may arrive as a scalar or as a sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Normalize to a sequence, preserving order of appearance
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

// =============================================================================
// View models
// =============================================================================

/// Full menu item projection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemData {
    pub id: String,
    pub title: String,
    pub picture: String,
    pub cost: Decimal,
    pub call_quantity: i64,
    pub description: String,
}

/// One row of a waiter's current-order view; carries the owning order's
/// id and state alongside the menu item fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRow {
    pub order_id: String,
    pub is_active: bool,
    pub id: String,
    pub title: String,
    pub picture: String,
    pub cost: Decimal,
    pub call_quantity: i64,
    pub description: String,
}

/// Waiter dashboard: the current (last) order expanded into rows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub order_id: String,
    pub menu_items_data: Vec<OrderItemRow>,
    pub order_price: Decimal,
    pub no_order: bool,
}

/// Response of `POST /orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedView {
    pub order_id: String,
    pub menu_items_data: Vec<MenuItemData>,
    pub order_price: Decimal,
}

/// Admin dashboard: one card per order across all waiters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCard {
    pub id: String,
    pub waiter_name: String,
    pub is_active: bool,
    pub items: Vec<MenuItemData>,
}

/// Waiter history: menu item stripped to its display subset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub title: String,
    pub picture: String,
    pub cost: Decimal,
    pub description: String,
}

/// Waiter history: one entry per order the waiter has worked
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOrder {
    pub id: String,
    pub is_active: bool,
    pub order_items: Vec<HistoryItem>,
}

/// Menu listing entry; each item rides wrapped in a `data` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    pub data: MenuItemData,
}

/// A selectable title on the order-creation form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTitle {
    pub title: String,
}

/// Order-creation form: read-only waiter identity plus the selectable menu
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormView {
    pub waiter_id: String,
    pub waiter_name: String,
    pub menu_items: Vec<MenuTitle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_or_many_scalar() {
        let value: OneOrMany = serde_json::from_str("\"Burger\"").unwrap();
        assert_eq!(value.into_vec(), vec!["Burger".to_string()]);
    }

    #[test]
    fn test_one_or_many_sequence() {
        let value: OneOrMany = serde_json::from_str("[\"Burger\",\"Salad\"]").unwrap();
        assert_eq!(
            value.into_vec(),
            vec!["Burger".to_string(), "Salad".to_string()]
        );
    }

    #[test]
    fn test_one_or_many_preserves_order_and_duplicates() {
        let value: OneOrMany =
            serde_json::from_str("[\"Salad\",\"Burger\",\"Salad\"]").unwrap();
        assert_eq!(value.into_vec(), vec!["Salad", "Burger", "Salad"]);
    }

    #[test]
    fn test_one_or_many_empty_sequence() {
        let value: OneOrMany = serde_json::from_str("[]").unwrap();
        assert!(value.into_vec().is_empty());
    }

    #[test]
    fn test_create_order_request_scalar() {
        let json = r#"{"waiterId":"user:1","menuItemTitle":"Burger"}"#;
        let req: CreateOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.waiter_id, "user:1");
        assert_eq!(req.menu_item_title.into_vec(), vec!["Burger"]);
    }

    #[test]
    fn test_create_order_request_sequence() {
        let json = r#"{"waiterId":"user:1","menuItemTitle":["Burger","Salad"]}"#;
        let req: CreateOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.menu_item_title.into_vec(), vec!["Burger", "Salad"]);
    }

    #[test]
    fn test_register_request_rejects_unknown_role() {
        let json = r#"{"login":"alice","password":"pw","role":"chef"}"#;
        let result: Result<RegisterRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_view_wire_names() {
        let view = OrderView {
            order_id: "order:1".to_string(),
            menu_items_data: vec![],
            order_price: Decimal::ZERO,
            no_order: false,
        };
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"orderId\""));
        assert!(json.contains("\"menuItemsData\""));
        assert!(json.contains("\"orderPrice\""));
        assert!(json.contains("\"noOrder\":false"));
    }

    #[test]
    fn test_order_card_wire_names() {
        let card = OrderCard {
            id: "order:1".to_string(),
            waiter_name: "Alice".to_string(),
            is_active: true,
            items: vec![],
        };
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"waiterName\":\"Alice\""));
        assert!(json.contains("\"isActive\":true"));
    }

    #[test]
    fn test_menu_item_cost_serializes_as_number() {
        let item = MenuItemData {
            id: "menu_item:1".to_string(),
            title: "Burger".to_string(),
            picture: "/images/burger.png".to_string(),
            cost: Decimal::new(999, 2),
            call_quantity: 10,
            description: "Delicious burger".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"cost\":9.99"));
        assert!(json.contains("\"callQuantity\":10"));
    }

    #[test]
    fn test_menu_entry_envelope() {
        let entry = MenuEntry {
            data: MenuItemData {
                id: "menu_item:2".to_string(),
                title: "Salad".to_string(),
                picture: "/images/salad.png".to_string(),
                cost: Decimal::new(699, 2),
                call_quantity: 15,
                description: "Fresh salad".to_string(),
            },
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.starts_with("{\"data\":{"));
    }
}
