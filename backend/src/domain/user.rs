//! User records and roles.

use serde::{Deserialize, Serialize};

/// Account role. Every operation is gated on one of these two roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Parse the role string supplied at registration.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            _ => None,
        }
    }
}

/// A registered account.
///
/// No credential is stored: registration discards the supplied password and
/// the login check compares against the lower-cased display name instead
/// (see [`crate::domain::credentials`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Unique among users, but only checked at registration time. The store
    /// itself enforces nothing.
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: String,
}
