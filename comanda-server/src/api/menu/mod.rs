//! Menu API module
//!
//! Public listing, reachable regardless of session state.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/menu", get(handler::list))
}
