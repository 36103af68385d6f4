//! Auth API Handlers
//!
//! Handles registration and login. Sessions are server-side records; the
//! browser only ever sees the opaque cookie id.

use axum::{
    Form, Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::SessionService;
use crate::core::ServerState;
use crate::db::models::UserCreate;
use crate::db::repository::UserRepository;
use crate::utils::{ApiResponse, AppError, redirect_back};

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, RegisterRequest};

/// GET /signup - static sign-up page
pub async fn signup_page() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok())
}

/// GET /signin - static sign-in page
pub async fn signin_page() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok())
}

/// POST /register - create a user
///
/// Always redirects to the sign-in page. The display name is derived from
/// the login; logins are deliberately not checked for uniqueness here.
pub async fn register(
    State(state): State<ServerState>,
    Form(req): Form<RegisterRequest>,
) -> Result<Response, AppError> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .create(UserCreate {
            login: req.login,
            password: req.password,
            role: req.role,
            name: None,
        })
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!(login = %user.login, role = %user.role, "User registered");

    Ok(Redirect::to("/signin").into_response())
}

/// POST /login - authenticate
///
/// Success stores `{login, role}` server-side and sets the session cookie;
/// failure answers 401 with a `Location` back to the referring page.
pub async fn login(
    State(state): State<ServerState>,
    headers: HeaderMap,
    jar: CookieJar,
    Form(req): Form<LoginRequest>,
) -> Result<Response, AppError> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_credentials(&req.login, &req.password)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let Some(user) = user else {
        tracing::warn!(login = %req.login, "Login failed - invalid credentials");
        return Ok(redirect_back(StatusCode::UNAUTHORIZED, &headers));
    };

    let session_id = state.sessions.issue(&user.login, user.role).await?;

    tracing::info!(login = %user.login, role = %user.role, "User logged in");

    let jar = jar.add(SessionService::cookie(session_id));
    Ok((jar, Redirect::to("/")).into_response())
}
