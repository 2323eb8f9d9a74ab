//! Domain types for the contact book.
//!
//! This module provides:
//! - The `Contact` record and its editable `ContactFields`
//! - Field validation rules (name/surname length, email syntax, phone length, ids)
//! - The week-birthday matching rule

pub mod contact;
pub mod validation;

pub use contact::{birthday_in_week_of, Contact, ContactFields};
pub use validation::ValidationError;
