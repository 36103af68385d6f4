//! Session Extractor
//!
//! Resolves the session cookie into a [`CurrentUser`], so handlers receive
//! the authenticated identity as an `Option<CurrentUser>` argument rather
//! than reading ambient request state.

use std::convert::Infallible;

use axum::{extract::OptionalFromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::{CurrentUser, session::SESSION_COOKIE};
use crate::core::ServerState;

impl OptionalFromRequestParts<ServerState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Option<Self>, Self::Rejection> {
        // Check if already extracted earlier in this request
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(Some(user.clone()));
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Ok(None);
        };

        match state.sessions.resolve(cookie.value()).await {
            Ok(Some(user)) => {
                // Store in extensions for potential reuse
                parts.extensions.insert(user.clone());
                Ok(Some(user))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                // An unreadable session store degrades to "not signed in"
                tracing::warn!(error = %e, "Session lookup failed");
                Ok(None)
            }
        }
    }
}
