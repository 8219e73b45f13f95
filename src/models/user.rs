//! User account data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered login account
///
/// Accounts are created by register and read by login; they are never
/// updated or deleted. The password is stored and compared verbatim —
/// a known weakness of the original tool, preserved deliberately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    /// Row ID (AUTOINCREMENT)
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// Plaintext password
    pub password: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
}
