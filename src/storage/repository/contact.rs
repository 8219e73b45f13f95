//! Contact CRUD operations
//!
//! Provides contact management methods for the Database.

use chrono::Utc;
use rusqlite::{params, Row};

use super::{parse_timestamp, StorageError};
use crate::models::{Contact, SortColumn};
use crate::storage::Database;

/// Columns selected by every contact query, in `map_contact` order
const CONTACT_COLUMNS: &str = "id, name, phone, email, created_at, updated_at";

fn map_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    let created_at_str: String = row.get(4)?;
    let updated_at_str: String = row.get(5)?;

    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        created_at: parse_timestamp(&created_at_str),
        updated_at: parse_timestamp(&updated_at_str),
    })
}

impl Database {
    /// Insert a new contact and return it with its assigned id
    ///
    /// Field validation (non-blank name and phone) is the caller's
    /// responsibility and must happen before this runs.
    ///
    /// # Arguments
    /// * `name` - Contact name
    /// * `phone` - Phone number
    /// * `email` - Optional email address
    pub fn insert_contact(
        &self,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Contact, StorageError> {
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        self.connection().execute(
            "INSERT INTO contacts (name, phone, email, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![name, phone, email, now_str, now_str],
        )?;

        Ok(Contact {
            id: self.connection().last_insert_rowid(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Insert a contact under an explicit id, ignoring id collisions
    ///
    /// Backs the import path: `INSERT OR IGNORE` keeps existing rows
    /// untouched when the file contains an id that is already present.
    ///
    /// # Returns
    /// `true` if the row was inserted, `false` if the id already existed
    pub fn restore_contact(
        &self,
        id: i64,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<bool, StorageError> {
        let now_str = Utc::now().to_rfc3339();

        let rows_affected = self.connection().execute(
            "INSERT OR IGNORE INTO contacts (id, name, phone, email, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            params![id, name, phone, email, now_str],
        )?;

        Ok(rows_affected > 0)
    }

    /// Get a contact by id
    pub fn get_contact(&self, id: i64) -> Result<Option<Contact>, StorageError> {
        let result = self.connection().query_row(
            &format!("SELECT {} FROM contacts WHERE id = ?1", CONTACT_COLUMNS),
            params![id],
            map_contact,
        );

        match result {
            Ok(contact) => Ok(Some(contact)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite a contact's fields in place
    ///
    /// A stale id is a no-op, not an error; the update simply matches
    /// zero rows.
    ///
    /// # Returns
    /// `true` if a row was updated, `false` if the id matched nothing
    pub fn update_contact(
        &self,
        id: i64,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<bool, StorageError> {
        let rows_affected = self.connection().execute(
            "UPDATE contacts SET name = ?1, phone = ?2, email = ?3, updated_at = ?4
             WHERE id = ?5",
            params![name, phone, email, Utc::now().to_rfc3339(), id],
        )?;

        Ok(rows_affected > 0)
    }

    /// Delete a contact by id
    ///
    /// # Returns
    /// `true` if a row was deleted, `false` if the id matched nothing
    pub fn delete_contact(&self, id: i64) -> Result<bool, StorageError> {
        let rows_affected = self
            .connection()
            .execute("DELETE FROM contacts WHERE id = ?1", params![id])?;

        Ok(rows_affected > 0)
    }

    /// List all contacts in insertion (id) order
    pub fn list_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        let mut stmt = self.connection().prepare(&format!(
            "SELECT {} FROM contacts ORDER BY id",
            CONTACT_COLUMNS
        ))?;

        let contacts = stmt
            .query_map([], map_contact)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(contacts)
    }

    /// Search contacts by substring across name, phone and email
    ///
    /// The pattern is wrapped in `%...%` and bound as a parameter; an
    /// empty pattern matches every row.
    pub fn search_contacts(&self, pattern: &str) -> Result<Vec<Contact>, StorageError> {
        let mut stmt = self.connection().prepare(&format!(
            "SELECT {} FROM contacts
             WHERE name LIKE ?1 OR phone LIKE ?1 OR email LIKE ?1
             ORDER BY id",
            CONTACT_COLUMNS
        ))?;

        let like = format!("%{}%", pattern);
        let contacts = stmt
            .query_map(params![like], map_contact)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(contacts)
    }

    /// List all contacts ordered by an allow-listed column
    ///
    /// `SortColumn` is the only path from caller input to the ORDER BY
    /// clause; raw column text never reaches this query.
    pub fn list_contacts_sorted(&self, column: SortColumn) -> Result<Vec<Contact>, StorageError> {
        let mut stmt = self.connection().prepare(&format!(
            "SELECT {} FROM contacts ORDER BY {}, id",
            CONTACT_COLUMNS,
            column.as_str()
        ))?;

        let contacts = stmt
            .query_map([], map_contact)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(contacts)
    }

    /// Count all contacts
    pub fn count_contacts(&self) -> Result<u32, StorageError> {
        let count: u32 =
            self.connection()
                .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;

        Ok(count)
    }
}
