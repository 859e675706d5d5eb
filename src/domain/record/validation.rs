//! Field validation primitives shared by every record type

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::descriptor::{Draft, FieldDescriptor, FieldKind};

/// Shape violations reported by the field validators
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("Dates have to be in DD-MM-YYYY format")]
    Date,

    #[error("Birthday has to be in \"Weekday DD Month YYYY\" or DD-MM-YYYY format")]
    Birthday,

    #[error("value is not a valid email address")]
    Email,

    #[error("value is not a valid base-10 integer")]
    Integer,

    #[error("contact type must be one of fixed, mobile, office, other")]
    ContactType,

    #[error("duration has to be in \"<Y> yrs <M> months <D> days\" format")]
    Duration,
}

/// Why a single field value was rejected
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    #[error("value cannot be empty")]
    Empty,

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("started needs to be before ended")]
    Order,
}

/// A validator attached to a plain field. Returns the normalized value.
pub type Validator = fn(&str) -> Result<String, FieldErrorKind>;

/// A rejected field together with the raw input that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub value: String,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: input='{}', error: {}", self.field, self.value, self.kind)
    }
}

/// Every field rejected while constructing one record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid {record}: {} field(s) rejected", .errors.len())]
pub struct RecordError {
    pub record: &'static str,
    pub errors: Vec<FieldError>,
}

impl RecordError {
    pub fn single(
        record: &'static str,
        field: &'static str,
        value: impl Into<String>,
        kind: FieldErrorKind,
    ) -> Self {
        Self {
            record,
            errors: vec![FieldError {
                field,
                value: value.into(),
                kind,
            }],
        }
    }

    /// Find the error reported for a given field
    pub fn field(&self, name: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == name)
    }
}

/// Non-empty after stripping surrounding whitespace
pub fn non_empty(input: &str) -> Result<String, FieldErrorKind> {
    let value = input.trim();

    if value.is_empty() {
        return Err(FieldErrorKind::Empty);
    }

    Ok(value.to_string())
}

pub fn parse_integer(input: &str) -> Result<i64, FieldErrorKind> {
    let value = non_empty(input)?;
    value
        .parse::<i64>()
        .map_err(|_| FormatError::Integer.into())
}

/// Base-10 integer, normalized to its canonical rendering
pub fn integer(input: &str) -> Result<String, FieldErrorKind> {
    parse_integer(input).map(|n| n.to_string())
}

/// Runs the validators of a descriptor table against a draft, collecting
/// every failure instead of stopping at the first one.
#[derive(Debug)]
pub struct FieldReport {
    values: BTreeMap<&'static str, String>,
    errors: Vec<FieldError>,
}

impl FieldReport {
    pub fn check<D: Draft>(fields: &[FieldDescriptor<D>], draft: &D) -> Self {
        let mut report = Self {
            values: BTreeMap::new(),
            errors: Vec::new(),
        };

        for field in fields {
            let FieldKind::Plain(validate) = &field.kind else {
                continue;
            };

            let raw = draft.text(field.name).unwrap_or_default();
            match validate(raw) {
                Ok(value) => {
                    report.values.insert(field.name, value);
                }
                Err(kind) => report.reject(field.name, raw, kind),
            }
        }

        report
    }

    /// Normalized value of a field that passed its validator
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Record a cross-field failure discovered after the per-field pass
    pub fn reject(&mut self, field: &'static str, value: impl Into<String>, kind: FieldErrorKind) {
        self.values.remove(field);
        self.errors.push(FieldError {
            field,
            value: value.into(),
            kind,
        });
    }

    pub fn finish(self, record: &'static str) -> Result<ValidatedFields, RecordError> {
        if !self.errors.is_empty() {
            return Err(RecordError {
                record,
                errors: self.errors,
            });
        }

        Ok(ValidatedFields {
            record,
            values: self.values,
        })
    }
}

/// Normalized field values of a draft that passed validation
#[derive(Debug)]
pub struct ValidatedFields {
    record: &'static str,
    values: BTreeMap<&'static str, String>,
}

impl ValidatedFields {
    pub fn text(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    /// Convert a validated value into its typed form
    pub fn parse_with<T>(
        &self,
        name: &'static str,
        parse: fn(&str) -> Result<T, FieldErrorKind>,
    ) -> Result<T, RecordError> {
        let value = self.text(name);
        parse(&value).map_err(|kind| RecordError::single(self.record, name, value, kind))
    }
}
