//! Job history entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::date::{parse_date, sortable, validate_date, Stay};
use crate::domain::record::{
    non_empty, FieldDescriptor, FieldErrorKind, FieldReport, Record, RecordError, TextFields,
};

const JOB_HISTORY_FIELDS: &[FieldDescriptor<TextFields>] = &[
    FieldDescriptor::plain("role", "role", non_empty),
    FieldDescriptor::plain("company", "company", non_empty),
    FieldDescriptor::plain("started", "started (DD-MM-YYYY)", validate_date),
    FieldDescriptor::plain("ended", "ended (DD-MM-YYYY)", validate_date),
    FieldDescriptor::derived("stayed"),
];

/// A past job of a user. `stayed` is always derived from the two dates.
///
/// Stored records are taken as they are, except that `stayed` is derived
/// again when both dates can be read. Otherwise the stored text is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredJobHistory")]
pub struct JobHistory {
    role: String,
    company: String,
    started: String,
    ended: String,
    stayed: String,
}

#[derive(Deserialize)]
struct StoredJobHistory {
    role: String,
    company: String,
    started: String,
    ended: String,
    #[serde(default)]
    stayed: String,
}

impl From<StoredJobHistory> for JobHistory {
    fn from(stored: StoredJobHistory) -> Self {
        let derived = parse_date(&stored.started)
            .ok()
            .zip(parse_date(&stored.ended).ok())
            .and_then(|(started, ended)| Stay::between(started, ended));

        Self {
            stayed: derived.map_or(stored.stayed, |stay| stay.to_string()),
            role: stored.role,
            company: stored.company,
            started: stored.started,
            ended: stored.ended,
        }
    }
}

impl JobHistory {
    /// Validate the given values and derive `stayed`
    pub fn new(
        role: impl Into<String>,
        company: impl Into<String>,
        started: impl Into<String>,
        ended: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let draft = TextFields::new()
            .with("role", role)
            .with("company", company)
            .with("started", started)
            .with("ended", ended);

        Self::from_draft(&draft)
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn started(&self) -> &str {
        &self.started
    }

    pub fn ended(&self) -> &str {
        &self.ended
    }

    pub fn stayed(&self) -> &str {
        &self.stayed
    }

    /// `stayed` as a duration, `None` for stored text that is not one
    pub fn stay(&self) -> Option<Stay> {
        self.stayed.parse().ok()
    }
}

impl fmt::Display for JobHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} from {} to {} ({})",
            self.role, self.company, self.started, self.ended, self.stayed
        )
    }
}

impl Record for JobHistory {
    type Draft = TextFields;

    const NAME: &'static str = "JobHistory";

    fn fields() -> &'static [FieldDescriptor<TextFields>] {
        JOB_HISTORY_FIELDS
    }

    fn to_draft(&self) -> TextFields {
        TextFields::new()
            .with("role", self.role.as_str())
            .with("company", self.company.as_str())
            .with("started", self.started.as_str())
            .with("ended", self.ended.as_str())
    }

    fn from_draft(draft: &TextFields) -> Result<Self, RecordError> {
        let mut report = FieldReport::check(Self::fields(), draft);

        let out_of_order = match (report.value("started"), report.value("ended")) {
            (Some(started), Some(ended)) if sortable(started) > sortable(ended) => {
                Some(ended.to_string())
            }
            _ => None,
        };

        if let Some(ended) = out_of_order {
            report.reject("ended", ended, FieldErrorKind::Order);
        }

        let values = report.finish(Self::NAME)?;
        let started = values.parse_with("started", parse_date)?;
        let ended = values.parse_with("ended", parse_date)?;
        let stayed = Stay::between(started, ended).ok_or_else(|| {
            RecordError::single(Self::NAME, "ended", values.text("ended"), FieldErrorKind::Order)
        })?;

        Ok(Self {
            role: values.text("role"),
            company: values.text("company"),
            started: values.text("started"),
            ended: values.text("ended"),
            stayed: stayed.to_string(),
        })
    }
}
