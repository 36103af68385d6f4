//! Dashboard API Handlers
//!
//! The landing page depends on the session role: admins see every waiter's
//! orders as cards, waiters see their current (last) order.

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::api::convert::{history_item, menu_item_data, record_id_string};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Order;
use crate::db::repository::{MenuItemRepository, OrderRepository, RepoError, UserRepository};
use crate::utils::{ApiResponse, AppError, redirect_back};

use shared::ErrorCode;
use shared::client::{HistoryOrder, OrderCard, OrderItemRow, OrderView};

/// Shown to a waiter who has no order to work on yet
const WORK_MOTIVATION: &str = "Off to the guests you go, waiter!\n\
    The whole trade fits in one line:\n\
    carry food there, carry plates back.\n\
    Now get to work!";

/// GET / - role-dependent dashboard
///
/// No session redirects to the sign-in page.
pub async fn dashboard(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
) -> Result<Response, AppError> {
    let Some(user) = user else {
        return Ok(Redirect::to("/signin").into_response());
    };

    if user.role.is_admin() {
        admin_dashboard(&state).await
    } else {
        waiter_dashboard(&state, &user).await
    }
}

/// Admin view: one card per order across all waiters, closed orders
/// included
async fn admin_dashboard(state: &ServerState) -> Result<Response, AppError> {
    let user_repo = UserRepository::new(state.db.clone());
    let order_repo = OrderRepository::new(state.db.clone());
    let menu_repo = MenuItemRepository::new(state.db.clone());

    let waiters = user_repo
        .find_waiters()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let mut orders_info = Vec::new();
    for waiter in waiters {
        for order_id in &waiter.orders {
            let Some(order) = order_repo
                .find_by_record_id(order_id)
                .await
                .map_err(|e| AppError::database(e.to_string()))?
            else {
                continue;
            };

            let items = menu_repo
                .find_by_ids(&order.items)
                .await
                .map_err(|e| AppError::database(e.to_string()))?;

            orders_info.push(OrderCard {
                id: record_id_string(&order.id),
                waiter_name: waiter.name.clone(),
                is_active: order.is_active,
                items: items.iter().map(menu_item_data).collect(),
            });
        }
    }

    Ok(Json(orders_info).into_response())
}

/// Waiter view: the last order expanded into rows, or the motivational
/// message when there is none
async fn waiter_dashboard(state: &ServerState, user: &CurrentUser) -> Result<Response, AppError> {
    let user_repo = UserRepository::new(state.db.clone());

    let record = user_repo
        .find_by_login(&user.login)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::WaiterNotFound))?;

    let Some(order_id) = record.orders.last() else {
        return Ok(WORK_MOTIVATION.into_response());
    };

    let order_repo = OrderRepository::new(state.db.clone());
    let order = order_repo
        .find_by_record_id(order_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;

    let menu_items_data = order_rows(state, &order).await?;
    let order_price: Decimal = menu_items_data.iter().map(|row| row.cost).sum();

    Ok(Json(OrderView {
        order_id: order_id.to_string(),
        menu_items_data,
        order_price,
        no_order: false,
    })
    .into_response())
}

/// Expand an order into one row per `items` entry (duplicates preserved)
async fn order_rows(state: &ServerState, order: &Order) -> Result<Vec<OrderItemRow>, AppError> {
    let menu_repo = MenuItemRepository::new(state.db.clone());
    let order_id = record_id_string(&order.id);

    let mut rows = Vec::with_capacity(order.items.len());
    for item_id in &order.items {
        let item = menu_repo
            .find_by_record_id(item_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::internal(format!("Menu item {} missing", item_id)))?;

        rows.push(OrderItemRow {
            order_id: order_id.clone(),
            is_active: order.is_active,
            id: record_id_string(&item.id),
            title: item.title,
            picture: item.picture,
            cost: item.cost,
            call_quantity: item.call_quantity,
            description: item.description,
        });
    }
    Ok(rows)
}

/// Query params for the waiter history lookup
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "waiterId")]
    pub waiter_id: Option<String>,
}

/// GET /main_content?waiterId= - all orders a waiter has worked
///
/// Answers a 404 redirect back when the waiter does not exist or has no
/// orders yet.
pub async fn history(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Query(query): Query<HistoryQuery>,
) -> Result<Response, AppError> {
    let Some(waiter_id) = query.waiter_id else {
        return Ok(redirect_back(StatusCode::NOT_FOUND, &headers));
    };

    let user_repo = UserRepository::new(state.db.clone());
    let waiter = match user_repo.find_waiter_by_id(&waiter_id).await {
        Ok(Some(waiter)) => waiter,
        // Unknown and malformed ids both read as "no such waiter"
        Ok(None) | Err(RepoError::Validation(_)) => {
            return Ok(redirect_back(StatusCode::NOT_FOUND, &headers));
        }
        Err(e) => return Err(AppError::database(e.to_string())),
    };

    if waiter.orders.is_empty() {
        return Ok(redirect_back(StatusCode::NOT_FOUND, &headers));
    }

    let order_repo = OrderRepository::new(state.db.clone());
    let menu_repo = MenuItemRepository::new(state.db.clone());

    let mut orders_info = Vec::new();
    for order_id in &waiter.orders {
        let Some(order) = order_repo
            .find_by_record_id(order_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
        else {
            continue;
        };

        let items = menu_repo
            .find_by_ids(&order.items)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        orders_info.push(HistoryOrder {
            id: record_id_string(&order.id),
            is_active: order.is_active,
            order_items: items.iter().map(history_item).collect(),
        });
    }

    Ok(Json(orders_info).into_response())
}

/// GET /router - static page
pub async fn router_page() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok())
}
