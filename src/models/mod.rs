//! Contact book data models
//!
//! This module defines the core data structures for contacts,
//! user accounts and import/export bookkeeping.

pub mod contact;
pub mod user;

pub use contact::*;
pub use user::*;
