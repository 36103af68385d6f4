//! Auth API module
//!
//! Registration, sign-in, and the static auth pages.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/signup", get(handler::signup_page))
        .route("/signin", get(handler::signin_page))
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
}
