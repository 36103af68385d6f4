//! Dashboard API module
//!
//! Role-dependent landing page and the waiter history lookup.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::dashboard))
        .route("/main_content", get(handler::history))
        .route("/router", get(handler::router_page))
}
