//! Comanda Server - restaurant order-management service
//!
//! # Architecture overview
//!
//! - **Database** (`db`): embedded SurrealDB storage with one repository
//!   per table
//! - **Sessions** (`auth`): cookie-backed server-side sessions
//! - **HTTP API** (`api`): one router module per resource
//!
//! # Module structure
//!
//! ```text
//! comanda-server/src/
//! ├── core/          # Configuration, state, server
//! ├── auth/          # Session service, identity extractor
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Database layer (models, repositories, seed)
//! └── utils/         # Logger, redirects
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::auth::{CurrentUser, SessionService};
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::logger::{init_logger, init_logger_with_file};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Load `.env` and initialize logging before anything else runs
pub fn setup_environment() -> anyhow::Result<()> {
    // Missing .env is fine; environment variables may come from the shell
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______
  / ____/___  ____ ___  ____ _____  ____/ /___ _
 / /   / __ \/ __ `__ \/ __ `/ __ \/ __  / __ `/
/ /___/ /_/ / / / / / / /_/ / / / / /_/ / /_/ /
\____/\____/_/ /_/ /_/\__,_/_/ /_/\__,_/\__,_/
    "#
    );
}
