//! Contact record and the request body used to create or replace one.

use super::validation::{validate_email, validate_name, validate_phone, ValidationError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Albert";
pub const DEFAULT_SUR_NAME: &str = "Einstein";
pub const DEFAULT_PHONE: &str = "+380967774411";

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Assigned by storage on insert, never changes afterwards.
    pub id: i64,
    pub name: String,
    pub sur_name: String,
    pub email: String,
    /// Unique across all contacts.
    pub phone: String,
    /// Serialized as `YYYY-MM-DD`.
    pub birthday: NaiveDate,
}

impl Contact {
    /// Whether the birthday falls in the same ISO week-of-year and the same
    /// month as `today`.
    ///
    /// The week number is taken from the birthday date itself, so a birthday
    /// in a different year can land in a different week than this year's
    /// anniversary does.
    pub fn has_birthday_week_of(&self, today: NaiveDate) -> bool {
        birthday_in_week_of(self.birthday, today)
    }
}

/// The user-editable fields of a contact (everything but `id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_sur_name")]
    pub sur_name: String,
    pub email: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    pub birthday: NaiveDate,
}

impl ContactFields {
    /// Check every field rule, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("name", &self.name)?;
        validate_name("sur_name", &self.sur_name)?;
        validate_email("email", &self.email)?;
        validate_phone("phone", &self.phone)?;
        Ok(())
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_sur_name() -> String {
    DEFAULT_SUR_NAME.to_string()
}

fn default_phone() -> String {
    DEFAULT_PHONE.to_string()
}

pub fn birthday_in_week_of(birthday: NaiveDate, today: NaiveDate) -> bool {
    birthday.iso_week().week() == today.iso_week().week() && birthday.month() == today.month()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            sur_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            phone: "+380900000000".to_string(),
            birthday: date(1815, 12, 10),
        }
    }

    #[test]
    fn test_defaults_applied_when_missing() {
        let body: ContactFields =
            serde_json::from_str(r#"{"email":"a@b.co","birthday":"2000-01-01"}"#).unwrap();
        assert_eq!(body.name, "Albert");
        assert_eq!(body.sur_name, "Einstein");
        assert_eq!(body.phone, "+380967774411");
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_birthday_is_required() {
        let result: Result<ContactFields, _> = serde_json::from_str(r#"{"email":"a@b.co"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_serializes_birthday_as_iso_date() {
        let contact = Contact {
            id: 7,
            name: "Ada".to_string(),
            sur_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            phone: "+380900000000".to_string(),
            birthday: date(1815, 12, 10),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["sur_name"], "Lovelace");
        assert_eq!(json["birthday"], "1815-12-10");
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let mut body = fields();
        assert!(body.validate().is_ok());

        body.email = "not-an-email".to_string();
        assert_eq!(
            body.validate(),
            Err(ValidationError::Email { field: "email" })
        );

        body.name = "Al".to_string();
        assert!(matches!(
            body.validate(),
            Err(ValidationError::Length { field: "name", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_short_phone() {
        let mut body = fields();
        body.phone = "12345".to_string();
        assert!(matches!(
            body.validate(),
            Err(ValidationError::Length { field: "phone", .. })
        ));
    }

    #[test]
    fn test_birthday_week_same_week_and_month() {
        // 2026-10-19 is a Monday in ISO week 43; 2026-10-21 is in the same week.
        assert!(birthday_in_week_of(date(2026, 10, 21), date(2026, 10, 19)));
    }

    #[test]
    fn test_birthday_week_uses_birthday_year() {
        // 1990-10-21 is a Sunday in ISO week 42, not week 43.
        assert!(!birthday_in_week_of(date(1990, 10, 21), date(2026, 10, 19)));
        // 1990-10-22 is a Monday in ISO week 43.
        assert!(birthday_in_week_of(date(1990, 10, 22), date(2026, 10, 19)));
    }

    #[test]
    fn test_birthday_week_requires_same_month() {
        // 2026-09-30 and 2026-10-01 share ISO week 40 but not the month.
        assert!(!birthday_in_week_of(date(2026, 9, 30), date(2026, 10, 1)));
        assert!(birthday_in_week_of(date(2026, 10, 2), date(2026, 10, 1)));
    }
}
