//! User field validators

use chrono::NaiveDate;
use validator::ValidateEmail;

use crate::domain::date::parse_date;
use crate::domain::record::{non_empty, FieldErrorKind, FormatError};

/// chrono format of the stored birthday, e.g. "Friday 01 January 2021"
pub const BIRTHDAY_FORMAT: &str = "%A %d %B %Y";

/// Validate an email address
///
/// Rules:
/// - Standard address shape (`local@domain`)
/// - The domain holds at least one `.` between labels
pub fn validate_email(input: &str) -> Result<String, FieldErrorKind> {
    let email = non_empty(input)?;

    let dotted_domain = email.rsplit_once('@').is_some_and(|(_, domain)| {
        domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });

    if !dotted_domain || !email.validate_email() {
        return Err(FormatError::Email.into());
    }

    Ok(email)
}

pub fn format_birthday(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}

/// Validate a birthday
///
/// Accepts the display form ("Friday 01 January 2021", weekday must match the
/// date) or `DD-MM-YYYY`. Both are normalized to the display form.
pub fn validate_birthday(input: &str) -> Result<String, FieldErrorKind> {
    let value = non_empty(input)?;

    if let Ok(date) = NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT) {
        return Ok(format_birthday(date));
    }

    parse_date(&value)
        .map(format_birthday)
        .map_err(|_| FormatError::Birthday.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert_eq!(
            validate_email(" ada@example.com "),
            Ok("ada@example.com".to_string())
        );
        assert!(validate_email("first.last+tag@mail.example.org").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        for input in ["not-an-email", "ada@", "@example.com", "ada@localhost", "ada@example.", "a b@example.com"] {
            assert_eq!(
                validate_email(input),
                Err(FieldErrorKind::Format(FormatError::Email)),
                "{input} should be rejected"
            );
        }
        assert_eq!(validate_email(""), Err(FieldErrorKind::Empty));
    }

    #[test]
    fn test_birthday_from_date() {
        assert_eq!(
            validate_birthday("01-01-2021"),
            Ok("Friday 01 January 2021".to_string())
        );
        assert_eq!(
            validate_birthday("29-02-2000"),
            Ok("Tuesday 29 February 2000".to_string())
        );
    }

    #[test]
    fn test_birthday_display_form_is_kept() {
        assert_eq!(
            validate_birthday("  Friday 01 January 2021 "),
            Ok("Friday 01 January 2021".to_string())
        );
    }

    #[test]
    fn test_birthday_weekday_must_match() {
        assert_eq!(
            validate_birthday("Monday 01 January 2021"),
            Err(FieldErrorKind::Format(FormatError::Birthday))
        );
    }

    #[test]
    fn test_invalid_birthdays() {
        for input in ["31-02-2020", "2021-01-01", "someday"] {
            assert_eq!(
                validate_birthday(input),
                Err(FieldErrorKind::Format(FormatError::Birthday)),
                "{input} should be rejected"
            );
        }
    }
}
