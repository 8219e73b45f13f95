//! Contact book service layer
//!
//! Validates inputs, applies business rules and calls into storage.
//! This is the surface a presentation layer consumes; selection is the
//! caller's concept, so every update/delete takes an explicit id.

mod backup;

use std::path::Path;

use crate::error::AppError;
use crate::models::{Contact, SortColumn, User};
use crate::storage::Database;

/// The contact book service
///
/// Owns the database connection. Every method is a single short-lived
/// synchronous operation with no cross-operation state; a UI layer is
/// expected to hold this behind a `Mutex` in its app state.
pub struct ContactBook {
    db: Database,
}

fn require_contact_fields(name: &str, phone: &str) -> Result<(), AppError> {
    if name.trim().is_empty() || phone.trim().is_empty() {
        return Err(AppError::Validation(
            "Name and Phone fields are mandatory".to_string(),
        ));
    }
    Ok(())
}

/// Treat a blank email entry as no email at all
fn normalize_email(email: Option<&str>) -> Option<&str> {
    email.filter(|e| !e.trim().is_empty())
}

fn require_credentials(username: &str, password: &str) -> Result<(), AppError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(AppError::Validation("All fields are required".to_string()));
    }
    Ok(())
}

impl ContactBook {
    /// Create a service over an already-open database
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open (or create) the database file at `path` and wrap it
    pub fn open(path: &Path) -> Result<Self, AppError> {
        Ok(Self::new(Database::new(path)?))
    }

    /// Add a new contact
    ///
    /// Name and phone are mandatory; email is optional, and a blank
    /// email (as a UI entry field yields) is stored as absent so the
    /// CSV round trip stays exact. Returns the stored contact with
    /// its assigned id.
    pub fn add_contact(
        &self,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Contact, AppError> {
        require_contact_fields(name, phone)?;
        Ok(self.db.insert_contact(name, phone, normalize_email(email))?)
    }

    /// Overwrite an existing contact's fields
    ///
    /// Same validation as add. An id that matches no row fails with
    /// `NotFound`: with explicit-id calls, a vanished id means the
    /// caller's selection no longer exists.
    pub fn update_contact(
        &self,
        id: i64,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Contact, AppError> {
        require_contact_fields(name, phone)?;

        if !self.db.update_contact(id, name, phone, normalize_email(email))? {
            return Err(AppError::NotFound(format!("contact with id {} not found", id)));
        }

        self.db
            .get_contact(id)?
            .ok_or_else(|| AppError::NotFound(format!("contact with id {} not found", id)))
    }

    /// Delete a contact by id
    ///
    /// Intent confirmation is a UI concern; once invoked this is
    /// unconditional, and a missing id is not an error.
    pub fn delete_contact(&self, id: i64) -> Result<(), AppError> {
        self.db.delete_contact(id)?;
        Ok(())
    }

    /// List all contacts in insertion order
    pub fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.db.list_contacts()?)
    }

    /// Count all contacts (for the status bar)
    pub fn count_contacts(&self) -> Result<u32, AppError> {
        Ok(self.db.count_contacts()?)
    }

    /// Search contacts by substring across name, phone and email
    ///
    /// An empty query returns the full unsorted list.
    pub fn search_contacts(&self, query: &str) -> Result<Vec<Contact>, AppError> {
        if query.is_empty() {
            return self.list_contacts();
        }
        Ok(self.db.search_contacts(query)?)
    }

    /// List all contacts sorted by a caller-named column
    ///
    /// The column name goes through the `SortColumn` allow-list; any
    /// other text fails with a validation error before a query runs.
    pub fn sort_contacts(&self, column: &str) -> Result<Vec<Contact>, AppError> {
        let column = SortColumn::parse(column)
            .ok_or_else(|| AppError::Validation(format!("invalid sort column: {}", column)))?;
        Ok(self.db.list_contacts_sorted(column)?)
    }

    /// Register a new user account
    ///
    /// Both fields are mandatory; a taken username fails with
    /// `DuplicateUser` and never overwrites the existing account.
    pub fn register_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        require_credentials(username, password)?;
        Ok(self.db.insert_user(username, password)?)
    }

    /// Authenticate a user by exact username/password match
    pub fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        require_credentials(username, password)?;
        self.db
            .find_user(username, password)?
            .ok_or(AppError::Authentication)
    }
}
