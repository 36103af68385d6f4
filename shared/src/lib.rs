//! Shared types for the Comanda order-management service
//!
//! Common vocabulary used across crates: error codes and response
//! structures, request/response DTOs, and role types.

pub mod client;
pub mod error;
pub mod types;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use types::Role;
