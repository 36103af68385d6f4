//! User Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::Role;
use surrealdb::RecordId;

/// User ID type
pub type UserId = RecordId;

/// User model matching the `user` table
///
/// `orders` is the append-only list of order record ids this user (when a
/// waiter) has created. The association lives only here; orders carry no
/// back reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<UserId>,
    pub name: String,
    pub role: Role,
    pub login: String,
    /// Stored in clear text; see DESIGN.md for the documented gap
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub orders: Vec<RecordId>,
}

/// Create user payload
///
/// `name` is only set by seeding; registration derives it from the login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub login: String,
    pub password: String,
    pub role: Role,
    pub name: Option<String>,
}

impl User {
    /// Display name derived from the login at registration time
    pub fn derive_name(login: &str) -> String {
        format!("{}_name", login)
    }
}
