// Contact Book Library
// Storage and service layer for a small desktop contact manager;
// the presentation layer consumes `ContactBook` and maps `AppError`
// responses onto its dialogs.

pub mod error;
pub mod models;
pub mod service;
pub mod storage;

pub use error::{AppError, ErrorResponse};
pub use models::{Contact, ImportResult, SortColumn, User};
pub use service::ContactBook;
pub use storage::{Database, StorageError};
