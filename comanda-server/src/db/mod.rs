//! Database Module
//!
//! Owns the embedded SurrealDB instance and applies the schema at connect

pub mod models;
pub mod repository;
pub mod seed;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "comanda";
const DATABASE: &str = "comanda";

/// Database service that owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at the given path
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let service = Self::prepare(db).await?;
        tracing::info!(path = %db_path, "Database connection established");
        Ok(service)
    }

    /// Open an in-memory database; used by tests
    pub async fn in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        Ok(Self { db })
    }
}

/// Apply schema definitions (idempotent)
///
/// `menu_item.title` is the lookup key for order creation and must stay
/// unique. `user.login` intentionally has no such index.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query("DEFINE INDEX IF NOT EXISTS menu_item_title ON TABLE menu_item COLUMNS title UNIQUE")
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

    Ok(())
}
