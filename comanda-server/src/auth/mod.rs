//! Session authentication module
//!
//! - [`SessionService`] - issues and resolves cookie-backed sessions
//! - [`CurrentUser`] - authenticated identity passed into handlers

pub mod extractor;
pub mod session;

pub use session::{CurrentUser, SESSION_COOKIE, SessionService};
