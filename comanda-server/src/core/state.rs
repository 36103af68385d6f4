//! Server state

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::SessionService;
use crate::core::Config;
use crate::db::{DbService, seed};
use shared::AppError;

/// Server state holding shared references to every service
///
/// Cloned per request; all members are cheap handles.
///
/// | Field | Type | Purpose |
/// |-------|------|---------|
/// | config | Config | Configuration (immutable) |
/// | db | Surreal<Db> | Embedded database |
/// | sessions | SessionService | Cookie-backed sessions |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Session service
    pub sessions: SessionService,
}

impl ServerState {
    /// Initialize server state
    ///
    /// Order: working directory structure, database (under
    /// `work_dir/database/`), seed data, session service.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("comanda.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;
        let db = db_service.db;

        seed::seed_if_empty(&db)
            .await
            .map_err(|e| AppError::database(format!("Seeding failed: {e}")))?;

        let sessions = SessionService::new(db.clone());

        Ok(Self {
            config: config.clone(),
            db,
            sessions,
        })
    }

    /// State backed by an in-memory database; used by tests
    pub async fn in_memory() -> Result<Self, AppError> {
        let db_service = DbService::in_memory().await?;
        let db = db_service.db;

        seed::seed_if_empty(&db)
            .await
            .map_err(|e| AppError::database(format!("Seeding failed: {e}")))?;

        let sessions = SessionService::new(db.clone());

        Ok(Self {
            config: Config::with_overrides("/tmp/comanda-test", 0),
            db,
            sessions,
        })
    }

    /// Get a database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
