//! Conversions between database models and wire DTOs

use crate::db::models::MenuItem;
use shared::client::{HistoryItem, MenuItemData};
use surrealdb::RecordId;

/// Wire form of an optional record id ("table:key", empty when unset)
pub fn record_id_string(id: &Option<RecordId>) -> String {
    id.as_ref().map(|t| t.to_string()).unwrap_or_default()
}

/// Full menu item projection
pub fn menu_item_data(item: &MenuItem) -> MenuItemData {
    MenuItemData {
        id: record_id_string(&item.id),
        title: item.title.clone(),
        picture: item.picture.clone(),
        cost: item.cost,
        call_quantity: item.call_quantity,
        description: item.description.clone(),
    }
}

/// Display subset used by the waiter history view
pub fn history_item(item: &MenuItem) -> HistoryItem {
    HistoryItem {
        id: record_id_string(&item.id),
        title: item.title.clone(),
        picture: item.picture.clone(),
        cost: item.cost,
        description: item.description.clone(),
    }
}
