//! Local storage module for the contact book
//!
//! Provides SQLite-based persistence for contacts and user accounts.
//! All reads and writes go through the `Database` wrapper; business
//! rules live one layer up in the service.

mod database;
mod error;
mod repository;

pub use database::Database;
pub use error::StorageError;
