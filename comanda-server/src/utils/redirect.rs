//! Redirect helpers
//!
//! Several page-flow failures answer with a status code plus a `Location`
//! header pointing back at the referring page (401 on bad credentials,
//! 404 on missing records, 403 to the sign-in page).

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Response with an explicit status and a `Location` header
pub fn redirect_with_status(status: StatusCode, location: &str) -> Response {
    (status, [(header::LOCATION, location.to_string())]).into_response()
}

/// Location of the referring page, falling back to `/`
pub fn back(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/")
        .to_string()
}

/// Redirect to the referring page with the given status
pub fn redirect_back(status: StatusCode, headers: &HeaderMap) -> Response {
    redirect_with_status(status, &back(headers))
}
