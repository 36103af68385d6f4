//! Repository Module
//!
//! Provides CRUD operations over the SurrealDB tables.

pub mod menu_item;
pub mod order;
pub mod session;
pub mod user;

// Re-exports
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use session::SessionRepository;
pub use user::UserRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings on the wire, RecordId internally
// =============================================================================
//
//   - parse: let id: RecordId = "order:abc".parse()?;
//   - build: let id = RecordId::from_table_key("order", "abc");
//   - table name: id.table()
//   - CRUD: db.select(id) / db.delete(id) take RecordId directly

/// Parse a wire id ("table:key" or bare key) into a RecordId for `table`
///
/// A prefixed id naming a different table is rejected.
pub(crate) fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    if id.contains(':') {
        let record_id: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if record_id.table() != table {
            return Err(RepoError::Validation(format!("Invalid ID: {}", id)));
        }
        Ok(record_id)
    } else {
        Ok(RecordId::from_table_key(table, id))
    }
}

/// Base repository with database reference
#[derive(Clone, Debug)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id_bare_key() {
        let id = parse_record_id("order", "abc").unwrap();
        assert_eq!(id.to_string(), "order:abc");
    }

    #[test]
    fn test_parse_record_id_prefixed() {
        let id = parse_record_id("user", "user:abc").unwrap();
        assert_eq!(id.to_string(), "user:abc");
    }

    #[test]
    fn test_parse_record_id_wrong_table() {
        let result = parse_record_id("user", "order:abc");
        assert!(matches!(result, Err(RepoError::Validation(_))));
    }
}
