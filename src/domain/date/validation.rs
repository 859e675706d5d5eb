//! Day-month-year date validation

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::record::{FieldErrorKind, FormatError};

/// Literal pattern accepted for dates
pub const DATE_PATTERN: &str = "DD-MM-YYYY";

/// chrono format matching [`DATE_PATTERN`]
pub const DATE_FORMAT: &str = "%d-%m-%Y";

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})-([0-9]{2})-([0-9]{4})$").unwrap());

/// Parse a `DD-MM-YYYY` string into a calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, FieldErrorKind> {
    let caps = DATE_SHAPE
        .captures(input.trim())
        .ok_or(FormatError::Date)?;

    let day = caps[1].parse::<u32>().map_err(|_| FormatError::Date)?;
    let month = caps[2].parse::<u32>().map_err(|_| FormatError::Date)?;
    let year = caps[3].parse::<i32>().map_err(|_| FormatError::Date)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| FormatError::Date.into())
}

/// Validate a `DD-MM-YYYY` date, returning it stripped of whitespace
pub fn validate_date(input: &str) -> Result<String, FieldErrorKind> {
    parse_date(input)?;
    Ok(input.trim().to_string())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Rewrite `DD-MM-YYYY` as `YYYYMMDD` so lexical order is calendar order
pub fn sortable(date: &str) -> Option<String> {
    let caps = DATE_SHAPE.captures(date.trim())?;
    Some(format!("{}{}{}", &caps[3], &caps[2], &caps[1]))
}
