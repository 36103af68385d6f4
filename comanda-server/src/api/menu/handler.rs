//! Menu API Handlers

use axum::{Json, extract::State};

use crate::api::convert::menu_item_data;
use crate::core::ServerState;
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult};

use shared::client::MenuEntry;

/// GET /menu - list every menu item, each wrapped in a `data` envelope
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuEntry>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let entries = items
        .iter()
        .map(|item| MenuEntry {
            data: menu_item_data(item),
        })
        .collect();

    Ok(Json(entries))
}
