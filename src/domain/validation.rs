//! Field rules shared by request bodies and path parameters.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum length (in characters) of `name` and `sur_name`.
pub const NAME_MIN_LEN: usize = 3;
/// Maximum length (in characters) of `name` and `sur_name`.
pub const NAME_MAX_LEN: usize = 100;
/// Exact length (in characters) of a phone number, e.g. `+380967774411`.
pub const PHONE_LEN: usize = 13;

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
    #[error("{field} is not a valid email address")]
    Email { field: &'static str },
    #[error("{field} must be a positive integer, got {value}")]
    NotPositive { field: &'static str, value: i64 },
}

/// Check that `value` is 3 to 100 characters long.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    validate_length(field, value, NAME_MIN_LEN, NAME_MAX_LEN)
}

/// Check that `value` is exactly 13 characters long.
pub fn validate_phone(field: &'static str, value: &str) -> Result<(), ValidationError> {
    validate_length(field, value, PHONE_LEN, PHONE_LEN)
}

pub fn validate_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::Email { field })
    }
}

pub fn validate_id(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

/// Syntactic email check: `local@domain.tld`, no consecutive or edge dots in
/// the local part, at least one dot in the domain.
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LEN {
        return false;
    }
    let re = EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));
    if !re.is_match(value) {
        return false;
    }

    let local = match value.split_once('@') {
        Some((local, _)) => local,
        None => return false,
    };
    local.len() <= 64 && !local.starts_with('.') && !local.ends_with('.') && !local.contains("..")
}

fn validate_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual < min || actual > max {
        return Err(ValidationError::Length {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}
