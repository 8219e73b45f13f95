//! Repository layer for database CRUD operations
//!
//! Provides the contact and user account operations on `Database`.
//! Column constraints live here; business rules (field validation,
//! column allow-listing) are enforced by the service before any of
//! these methods run.

mod contact;
mod user;

use chrono::{DateTime, Utc};

pub use super::error::StorageError;

/// Parse an RFC 3339 column value, falling back to now on corrupt data
pub(super) fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests;
