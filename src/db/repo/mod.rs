//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules:
//! - `contacts.rs` - Contact lookups, mutations, and the week-birthday query

mod contacts;

use crate::domain::Contact;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

const CONTACT_COLUMNS: &str = "id, name, sur_name, email, phone, birthday";

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Round-trip a trivial query, returning its single value if a row came back.
    ///
    /// # Errors
    /// Returns an error if the database cannot be reached.
    pub async fn ping(&self) -> Result<Option<i64>, sqlx::Error> {
        let row = sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        row.map(|r| r.try_get::<i64, _>(0)).transpose()
    }
}

fn contact_from_row(row: &SqliteRow) -> Result<Contact, sqlx::Error> {
    Ok(Contact {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        sur_name: row.try_get("sur_name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        birthday: row.try_get("birthday")?,
    })
}
