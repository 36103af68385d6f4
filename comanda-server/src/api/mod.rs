//! API route modules
//!
//! # Structure
//!
//! - [`auth`] - registration, sign-in, static auth pages
//! - [`dashboard`] - role-dependent dashboard and waiter history
//! - [`orders`] - order creation form, creation, closing
//! - [`menu`] - public menu listing
//! - [`health`] - health check

pub mod convert;

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod menu;
pub mod orders;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
