//! User account operations
//!
//! Provides registration and credential lookup methods for the Database.

use chrono::Utc;
use rusqlite::params;

use super::{parse_timestamp, StorageError};
use crate::models::User;
use crate::storage::Database;

impl Database {
    /// Insert a new user account
    ///
    /// Username uniqueness is enforced by the UNIQUE column constraint;
    /// a collision surfaces as `StorageError::DuplicateUser` and the
    /// existing row is never overwritten.
    ///
    /// # Arguments
    /// * `username` - Login name (unique)
    /// * `password` - Plaintext password, stored verbatim
    pub fn insert_user(&self, username: &str, password: &str) -> Result<User, StorageError> {
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        let result = self.connection().execute(
            "INSERT INTO users (username, password, created_at) VALUES (?1, ?2, ?3)",
            params![username, password, now_str],
        );

        match result {
            Ok(_) => Ok(User {
                id: self.connection().last_insert_rowid(),
                username: username.to_string(),
                password: password.to_string(),
                created_at: now,
            }),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StorageError::DuplicateUser(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Find a user by exact username and password match
    pub fn find_user(&self, username: &str, password: &str) -> Result<Option<User>, StorageError> {
        let result = self.connection().query_row(
            "SELECT id, username, password, created_at FROM users
             WHERE username = ?1 AND password = ?2",
            params![username, password],
            |row| {
                let created_at_str: String = row.get(3)?;
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password: row.get(2)?,
                    created_at: parse_timestamp(&created_at_str),
                })
            },
        );

        match result {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
