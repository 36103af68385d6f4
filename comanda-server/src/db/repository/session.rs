//! Session Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Session, SessionCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const SESSION_TABLE: &str = "session";

#[derive(Clone, Debug)]
pub struct SessionRepository {
    base: BaseRepository,
}

impl SessionRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a session record under the given opaque key
    pub async fn create(&self, key: &str, data: SessionCreate) -> RepoResult<Session> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE type::thing('session', $key) SET
                    login = $login,
                    role = $role,
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("key", key.to_string()))
            .bind(("login", data.login))
            .bind(("role", data.role))
            .bind(("created_at", data.created_at))
            .await?;

        let created: Option<Session> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create session".to_string()))
    }

    /// Find session by its opaque key
    pub async fn find_by_key(&self, key: &str) -> RepoResult<Option<Session>> {
        let session: Option<Session> = self.base.db().select((SESSION_TABLE, key)).await?;
        Ok(session)
    }
}
