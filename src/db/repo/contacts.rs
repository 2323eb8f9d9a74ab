//! Contact CRUD operations for the repository.

use crate::domain::{Contact, ContactFields};
use chrono::{Local, NaiveDate};

use super::{contact_from_row, Repository, CONTACT_COLUMNS};

impl Repository {
    /// List every contact, ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, sqlx::Error> {
        let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY id ASC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(contact_from_row).collect()
    }

    /// Number of stored contacts.
    pub async fn count_contacts(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Contact>, sqlx::Error> {
        let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(contact_from_row).transpose()
    }

    /// Exact-match lookup; the lowest id wins when several contacts share a name.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Contact>, sqlx::Error> {
        self.find_first_by("name", name).await
    }

    /// Exact-match lookup by surname.
    pub async fn get_by_sur_name(&self, sur_name: &str) -> Result<Option<Contact>, sqlx::Error> {
        self.find_first_by("sur_name", sur_name).await
    }

    /// Exact-match lookup by email.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Contact>, sqlx::Error> {
        self.find_first_by("email", email).await
    }

    /// Exact-match lookup by phone, used for the uniqueness pre-check.
    pub async fn get_by_phone(&self, phone: &str) -> Result<Option<Contact>, sqlx::Error> {
        self.find_first_by("phone", phone).await
    }

    /// Insert a new contact and return it with its assigned id.
    ///
    /// # Errors
    /// Returns a unique-violation database error if the phone is already taken.
    pub async fn create(&self, fields: &ContactFields) -> Result<Contact, sqlx::Error> {
        let sql = format!(
            "INSERT INTO contacts (name, sur_name, email, phone, birthday) \
             VALUES (?, ?, ?, ?, ?) RETURNING {CONTACT_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&fields.name)
            .bind(&fields.sur_name)
            .bind(&fields.email)
            .bind(&fields.phone)
            .bind(fields.birthday)
            .fetch_one(&self.pool)
            .await?;
        contact_from_row(&row)
    }

    /// Overwrite every editable field of `existing`, keeping its id.
    ///
    /// # Errors
    /// Returns `RowNotFound` if the contact was deleted in the meantime, or a
    /// unique-violation database error if the phone belongs to another contact.
    pub async fn update(
        &self,
        existing: &Contact,
        fields: &ContactFields,
    ) -> Result<Contact, sqlx::Error> {
        let sql = format!(
            "UPDATE contacts SET name = ?, sur_name = ?, email = ?, phone = ?, birthday = ? \
             WHERE id = ? RETURNING {CONTACT_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&fields.name)
            .bind(&fields.sur_name)
            .bind(&fields.email)
            .bind(&fields.phone)
            .bind(fields.birthday)
            .bind(existing.id)
            .fetch_one(&self.pool)
            .await?;
        contact_from_row(&row)
    }

    /// Remove `existing` permanently.
    pub async fn delete(&self, existing: &Contact) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(existing.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Contacts whose birthday shares the ISO week and the month of today's local date.
    pub async fn get_week_birthdays(&self) -> Result<Vec<Contact>, sqlx::Error> {
        self.get_week_birthdays_on(Local::now().date_naive()).await
    }

    /// Contacts whose birthday shares the ISO week and the month of `today`.
    ///
    /// Both checks run on the decoded dates; the stored text is not fixed-width
    /// for years outside 0000..=9999.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_week_birthdays_on(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY id ASC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        let mut contacts = Vec::new();
        for row in &rows {
            let contact = contact_from_row(row)?;
            if contact.has_birthday_week_of(today) {
                contacts.push(contact);
            }
        }
        Ok(contacts)
    }

    /// `column` is always one of the fixed lookup columns above, never user input.
    async fn find_first_by(
        &self,
        column: &'static str,
        value: &str,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let sql = format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE {column} = ? ORDER BY id ASC LIMIT 1"
        );
        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(contact_from_row).transpose()
    }
}
