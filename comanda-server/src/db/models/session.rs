//! Session Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::Role;
use surrealdb::RecordId;

/// Session record; the record key is the opaque id carried by the cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub login: String,
    pub role: Role,
    pub created_at: i64,
}

/// Create session payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreate {
    pub login: String,
    pub role: Role,
    pub created_at: i64,
}
