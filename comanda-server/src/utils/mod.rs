//! Utility module - logging and response helpers
//!
//! Error types live in the `shared` crate and are re-exported here for
//! handler convenience.

pub mod logger;
pub mod redirect;

pub use redirect::{back, redirect_back, redirect_with_status};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
