//! Orders API module
//!
//! Creation form, order creation, and closing. Closing is deliberately
//! reachable without a session; see DESIGN.md.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::creation_form).post(handler::create))
        .route("/orders/close/{order_id}", get(handler::close))
}
