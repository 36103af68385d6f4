//! Cookie-backed server-side sessions
//!
//! The browser carries only an opaque id; the `{login, role}` payload lives
//! in the `session` table.

use axum_extra::extract::cookie::{Cookie, SameSite};
use shared::{AppError, Role};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

use crate::db::models::SessionCreate;
use crate::db::repository::SessionRepository;

/// Cookie name for the session id
pub const SESSION_COOKIE: &str = "comanda_sid";

/// Authenticated identity resolved from the session cookie
///
/// Passed into handlers explicitly instead of living on an ambient
/// request context.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub login: String,
    pub role: Role,
}

/// Session service issuing and resolving session records
#[derive(Clone, Debug)]
pub struct SessionService {
    repo: SessionRepository,
}

impl SessionService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: SessionRepository::new(db),
        }
    }

    /// Create a server-side session and return its opaque id
    pub async fn issue(&self, login: &str, role: Role) -> Result<String, AppError> {
        let key = Uuid::new_v4().simple().to_string();
        self.repo
            .create(
                &key,
                SessionCreate {
                    login: login.to_string(),
                    role,
                    created_at: chrono::Utc::now().timestamp(),
                },
            )
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok(key)
    }

    /// Resolve a session id to its identity, if the session exists
    pub async fn resolve(&self, key: &str) -> Result<Option<CurrentUser>, AppError> {
        let session = self
            .repo
            .find_by_key(key)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok(session.map(|s| CurrentUser {
            login: s.login,
            role: s.role,
        }))
    }

    /// Build the HttpOnly cookie carrying a session id
    pub fn cookie(key: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, key))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_attributes() {
        let cookie = SessionService::cookie("abc123".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc123");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }
}
