//! Contact entity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::record::{
    integer, parse_integer, FieldDescriptor, FieldErrorKind, FieldReport, FormatError, Record,
    RecordError, TextFields,
};

/// Kind of phone line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    #[serde(alias = "fix")]
    Fixed,
    Mobile,
    Office,
    Other,
}

impl ContactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Mobile => "mobile",
            Self::Office => "office",
            Self::Other => "other",
        }
    }

    pub fn parse(input: &str) -> Result<Self, FieldErrorKind> {
        match input.trim().to_lowercase().as_str() {
            "" => Err(FieldErrorKind::Empty),
            "fixed" | "fix" => Ok(Self::Fixed),
            "mobile" => Ok(Self::Mobile),
            "office" => Ok(Self::Office),
            "other" => Ok(Self::Other),
            _ => Err(FormatError::ContactType.into()),
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = FieldErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn contact_type(input: &str) -> Result<String, FieldErrorKind> {
    ContactType::parse(input).map(|kind| kind.as_str().to_string())
}

const CONTACT_FIELDS: &[FieldDescriptor<TextFields>] = &[
    FieldDescriptor::plain("type", "type (fixed/mobile/office/other)", contact_type),
    FieldDescriptor::plain("number", "number", integer),
    FieldDescriptor::plain("code", "code", integer),
];

/// One phone contact of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "type")]
    kind: ContactType,
    number: i64,
    code: i64,
}

impl Contact {
    pub fn new(kind: ContactType, number: i64, code: i64) -> Self {
        Self { kind, number, code }
    }

    pub fn kind(&self) -> ContactType {
        self.kind
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn code(&self) -> i64 {
        self.code
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +{} {}", self.kind, self.code, self.number)
    }
}

impl Record for Contact {
    type Draft = TextFields;

    const NAME: &'static str = "Contact";

    fn fields() -> &'static [FieldDescriptor<TextFields>] {
        CONTACT_FIELDS
    }

    fn to_draft(&self) -> TextFields {
        TextFields::new()
            .with("type", self.kind.as_str())
            .with("number", self.number.to_string())
            .with("code", self.code.to_string())
    }

    fn from_draft(draft: &TextFields) -> Result<Self, RecordError> {
        let values = FieldReport::check(Self::fields(), draft).finish(Self::NAME)?;

        Ok(Self {
            kind: values.parse_with("type", ContactType::parse)?,
            number: values.parse_with("number", parse_integer)?,
            code: values.parse_with("code", parse_integer)?,
        })
    }
}
