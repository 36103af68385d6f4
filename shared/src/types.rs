//! Common vocabulary types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role
///
/// Waiters create and view their own orders; admins see every waiter's
/// orders but cannot create any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Waiter,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn is_waiter(&self) -> bool {
        matches!(self, Role::Waiter)
    }

    /// Wire name, as stored in the database and session payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Waiter => "waiter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
