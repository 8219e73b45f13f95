//! Contact data model
//!
//! Defines the Contact record and the allow-listed sort columns
//! used by the contact listing queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single address-book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Contact {
    /// Row ID (AUTOINCREMENT, immutable once created)
    pub id: i64,
    /// Contact name (mandatory)
    pub name: String,
    /// Phone number (mandatory)
    pub phone: String,
    /// Email address (optional)
    pub email: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time (refreshed on every field overwrite)
    pub updated_at: DateTime<Utc>,
}

/// Allow-listed sort column for contact listings
///
/// The sort query interpolates `as_str()` into its ORDER BY clause,
/// so this enum is the only path from caller input to SQL. Arbitrary
/// column text from the caller is rejected by `parse()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    /// Sort by contact name
    Name,
    /// Sort by phone number
    Phone,
    /// Sort by email address
    Email,
}

impl SortColumn {
    /// Parse a caller-supplied column name
    ///
    /// Returns `None` for anything outside the allow-list.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(SortColumn::Name),
            "phone" => Some(SortColumn::Phone),
            "email" => Some(SortColumn::Email),
            _ => None,
        }
    }

    /// Column name as it appears in the contacts schema
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Phone => "phone",
            SortColumn::Email => "email",
        }
    }
}

/// Import result statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ImportResult {
    /// Number of rows inserted
    pub imported_count: u32,
    /// Number of rows skipped because their id already existed
    pub skipped_count: u32,
    /// Per-row parse failures (the batch continues past them)
    pub errors: Vec<String>,
}
