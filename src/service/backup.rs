//! CSV backup and restore
//!
//! Serializes contacts as delimited UTF-8 text with an
//! `ID,Name,Phone,Email` header row. Restore reads the same format
//! back with an insert-or-ignore policy: rows whose id already exists
//! are skipped, never merged.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ContactBook;
use crate::error::AppError;
use crate::models::ImportResult;

/// One line of the backup file
///
/// Field renames bind reads to the `ID,Name,Phone,Email` header;
/// timestamps are deliberately not part of the format.
#[derive(Debug, Serialize, Deserialize)]
struct BackupRecord {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Phone")]
    phone: String,
    #[serde(rename = "Email")]
    email: Option<String>,
}

impl ContactBook {
    /// Export all contacts to a CSV file
    ///
    /// # Arguments
    /// * `path` - Destination file (created or truncated)
    ///
    /// # Returns
    /// The number of contacts written
    pub fn export_to_file(&self, path: &Path) -> Result<u32, AppError> {
        let contacts = self.db.list_contacts()?;

        // Serde-driven headers only appear with the first record, so an
        // empty store would otherwise produce a headerless file. Write
        // the header row unconditionally instead.
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(["ID", "Name", "Phone", "Email"])?;

        let mut exported = 0u32;
        for contact in &contacts {
            writer.serialize(BackupRecord {
                id: contact.id,
                name: contact.name.clone(),
                phone: contact.phone.clone(),
                email: contact.email.clone(),
            })?;
            exported += 1;
        }

        writer.flush()?;
        Ok(exported)
    }

    /// Import contacts from a CSV file written by `export_to_file`
    ///
    /// The header row is consumed by the reader. Rows whose id already
    /// exists in the store are silently skipped; malformed rows are
    /// recorded in the result's error list and the batch continues.
    pub fn import_from_file(&self, path: &Path) -> Result<ImportResult, AppError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut result = ImportResult::default();

        for (line, row) in reader.deserialize::<BackupRecord>().enumerate() {
            let record = match row {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("[import_from_file] skipping row {}: {}", line + 2, e);
                    result.errors.push(format!("row {}: {}", line + 2, e));
                    continue;
                }
            };

            let inserted = self.db.restore_contact(
                record.id,
                &record.name,
                &record.phone,
                record.email.as_deref(),
            )?;

            if inserted {
                result.imported_count += 1;
            } else {
                result.skipped_count += 1;
            }
        }

        Ok(result)
    }
}
