//! Menu Item Model

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Menu item ID type
pub type MenuItemId = RecordId;

/// Menu item model matching the `menu_item` table
///
/// Seeded at startup and immutable afterwards. `title` is the unique
/// lookup key used by order creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<MenuItemId>,
    pub title: String,
    pub picture: String,
    pub cost: Decimal,
    pub call_quantity: i64,
    pub description: String,
}

/// Create menu item payload (seeding only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub title: String,
    pub picture: String,
    pub cost: Decimal,
    pub call_quantity: i64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_deserialize() {
        let json = r#"{"id":"menu_item:burger","title":"Burger","picture":"/images/burger.png","cost":9.99,"call_quantity":10,"description":"Delicious burger"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Burger");
        assert_eq!(item.cost, "9.99".parse::<Decimal>().unwrap());
        assert_eq!(item.call_quantity, 10);
    }
}
