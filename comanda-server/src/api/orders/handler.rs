//! Orders API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;

use crate::api::convert::{menu_item_data, record_id_string};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{MenuItemRepository, OrderRepository, RepoError, UserRepository};
use crate::utils::{AppError, AppResult, redirect_back, redirect_with_status};

use shared::ErrorCode;
use shared::client::{CreateOrderRequest, MenuTitle, OrderCreatedView, OrderFormView};

/// GET /orders - order creation form data
///
/// Waiter-only: the form carries the waiter's own read-only identity plus
/// the menu sorted by title. Anyone else is sent to the sign-in page.
pub async fn creation_form(
    State(state): State<ServerState>,
    headers: HeaderMap,
    user: Option<CurrentUser>,
) -> Result<Response, AppError> {
    let Some(user) = user.filter(|u| u.role.is_waiter()) else {
        return Ok(redirect_with_status(StatusCode::FORBIDDEN, "/signin"));
    };

    let user_repo = UserRepository::new(state.db.clone());
    let Some(waiter) = user_repo
        .find_by_login(&user.login)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
    else {
        return Ok(redirect_back(StatusCode::NOT_FOUND, &headers));
    };

    let menu_repo = MenuItemRepository::new(state.db.clone());
    let menu_items = menu_repo
        .find_all_sorted_by_title()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(OrderFormView {
        waiter_id: record_id_string(&waiter.id),
        waiter_name: waiter.name,
        menu_items: menu_items
            .into_iter()
            .map(|item| MenuTitle { title: item.title })
            .collect(),
    })
    .into_response())
}

/// POST /orders - create an order
///
/// `menuItemTitle` may be a scalar or a sequence; both are normalized.
/// Every title is resolved before anything is written, so an unknown title
/// fails the request without leaving a half-built order behind. The new
/// order's id is then appended to the waiter's order list atomically.
pub async fn create(
    State(state): State<ServerState>,
    Json(req): Json<CreateOrderRequest>,
) -> AppResult<Json<OrderCreatedView>> {
    let titles = req.menu_item_title.into_vec();

    let user_repo = UserRepository::new(state.db.clone());
    let waiter = match user_repo.find_waiter_by_id(&req.waiter_id).await {
        Ok(Some(waiter)) => waiter,
        Ok(None) | Err(RepoError::Validation(_)) => {
            return Err(AppError::new(ErrorCode::WaiterNotFound));
        }
        Err(e) => return Err(AppError::database(e.to_string())),
    };

    let menu_repo = MenuItemRepository::new(state.db.clone());

    let mut item_ids = Vec::with_capacity(titles.len());
    let mut menu_items_data = Vec::with_capacity(titles.len());
    let mut order_price = Decimal::ZERO;

    for title in &titles {
        let item = menu_repo
            .find_by_title(title)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::MenuItemNotFound,
                    format!("Menu item '{}' not found", title),
                )
            })?;

        order_price += item.cost;
        menu_items_data.push(menu_item_data(&item));
        item_ids.push(
            item.id
                .ok_or_else(|| AppError::internal("Menu item record is missing its id"))?,
        );
    }

    let order_repo = OrderRepository::new(state.db.clone());
    let order = order_repo
        .create(item_ids)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let order_id = order
        .id
        .ok_or_else(|| AppError::internal("Order record is missing its id"))?;
    let waiter_id = waiter
        .id
        .ok_or_else(|| AppError::internal("User record is missing its id"))?;

    user_repo
        .append_order(&waiter_id, &order_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!(
        order_id = %order_id,
        waiter = %waiter.login,
        items = titles.len(),
        "Order created"
    );

    Ok(Json(OrderCreatedView {
        order_id: order_id.to_string(),
        menu_items_data,
        order_price,
    }))
}

/// GET /orders/close/{order_id} - close an order
///
/// Unconditional flip to inactive; closing twice is a no-op. A missing
/// order answers a 404 redirect back.
pub async fn close(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Path(order_id): Path<String>,
) -> Result<Response, AppError> {
    let order_repo = OrderRepository::new(state.db.clone());

    match order_repo.close(&order_id).await {
        Ok(Some(order)) => {
            tracing::info!(order_id = %record_id_string(&order.id), "Order closed");
            Ok(Redirect::to("/").into_response())
        }
        Ok(None) | Err(RepoError::Validation(_)) => {
            Ok(redirect_back(StatusCode::NOT_FOUND, &headers))
        }
        Err(e) => Err(AppError::database(e.to_string())),
    }
}
