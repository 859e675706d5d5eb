//! User entity and related types

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_birthday, validate_email};
use crate::domain::console::ConsoleError;
use crate::domain::contact::Contact;
use crate::domain::job_history::JobHistory;
use crate::domain::record::{
    non_empty, CreationEvent, Draft, FieldDescriptor, FieldReport, Record, RecordBuilder,
    RecordError, TextFields,
};

/// User identifier - a random UUID assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values collected for a user before validation
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    id: Option<UserId>,
    fields: TextFields,
    contacts: Vec<Contact>,
    job_history: Vec<JobHistory>,
}

impl UserDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.fields.set_text(field, value.into());
        self
    }

    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_job_history(mut self, job_history: Vec<JobHistory>) -> Self {
        self.job_history = job_history;
        self
    }
}

impl Draft for UserDraft {
    fn text(&self, field: &str) -> Option<&str> {
        self.fields.text(field)
    }

    fn set_text(&mut self, field: &'static str, value: String) {
        self.fields.set_text(field, value);
    }
}

fn edit_contacts(builder: &mut RecordBuilder<'_>, draft: &mut UserDraft) -> Result<(), ConsoleError> {
    let current = std::mem::take(&mut draft.contacts);
    draft.contacts = builder.build_list("contacts", current)?;
    Ok(())
}

fn edit_job_history(
    builder: &mut RecordBuilder<'_>,
    draft: &mut UserDraft,
) -> Result<(), ConsoleError> {
    let current = std::mem::take(&mut draft.job_history);
    draft.job_history = builder.build_list("jobHistory", current)?;
    Ok(())
}

const USER_FIELDS: &[FieldDescriptor<UserDraft>] = &[
    FieldDescriptor::generated("id"),
    FieldDescriptor::plain("firstname", "firstname", non_empty),
    FieldDescriptor::plain("email", "email", validate_email),
    FieldDescriptor::plain("country", "country", non_empty),
    FieldDescriptor::plain("city", "city", non_empty),
    FieldDescriptor::plain("zipCode", "zipCode", non_empty),
    FieldDescriptor::plain("currentRole", "currentRole", non_empty),
    FieldDescriptor::plain("currentCompany", "currentCompany", non_empty),
    FieldDescriptor::plain("gender", "gender", non_empty),
    FieldDescriptor::plain("birthday", "birthday (DD-MM-YYYY)", validate_birthday),
    FieldDescriptor::nested_list("contacts", "contacts", edit_contacts),
    FieldDescriptor::nested_list("jobHistory", "jobHistory", edit_job_history),
];

/// A recorded user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    firstname: String,
    email: String,
    country: String,
    city: String,
    zip_code: String,
    current_role: String,
    current_company: String,
    gender: String,
    birthday: String,
    contacts: Vec<Contact>,
    job_history: Vec<JobHistory>,
}

impl User {
    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn current_role(&self) -> &str {
        &self.current_role
    }

    pub fn current_company(&self) -> &str {
        &self.current_company
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn birthday(&self) -> &str {
        &self.birthday
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn job_history(&self) -> &[JobHistory] {
        &self.job_history
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} <{}>, {} at {}, {} {} {}, born {}, {} contact(s), {} job(s)",
            self.id,
            self.firstname,
            self.email,
            self.current_role,
            self.current_company,
            self.zip_code,
            self.city,
            self.country,
            self.birthday,
            self.contacts.len(),
            self.job_history.len()
        )
    }
}

impl Record for User {
    type Draft = UserDraft;

    const NAME: &'static str = "User";

    fn fields() -> &'static [FieldDescriptor<UserDraft>] {
        USER_FIELDS
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            id: Some(self.id),
            fields: TextFields::new()
                .with("firstname", self.firstname.as_str())
                .with("email", self.email.as_str())
                .with("country", self.country.as_str())
                .with("city", self.city.as_str())
                .with("zipCode", self.zip_code.as_str())
                .with("currentRole", self.current_role.as_str())
                .with("currentCompany", self.current_company.as_str())
                .with("gender", self.gender.as_str())
                .with("birthday", self.birthday.as_str()),
            contacts: self.contacts.clone(),
            job_history: self.job_history.clone(),
        }
    }

    fn from_draft(draft: &UserDraft) -> Result<Self, RecordError> {
        let values = FieldReport::check(Self::fields(), draft).finish(Self::NAME)?;

        Ok(Self {
            id: draft.id.unwrap_or_else(UserId::generate),
            firstname: values.text("firstname"),
            email: values.text("email"),
            country: values.text("country"),
            city: values.text("city"),
            zip_code: values.text("zipCode"),
            current_role: values.text("currentRole"),
            current_company: values.text("currentCompany"),
            gender: values.text("gender"),
            birthday: values.text("birthday"),
            contacts: draft.contacts.clone(),
            job_history: draft.job_history.clone(),
        })
    }

    fn creation_event(&self) -> Option<CreationEvent> {
        Some(CreationEvent {
            id: self.id.to_string(),
            firstname: self.firstname.clone(),
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::contact::ContactType;

    pub fn user_draft() -> UserDraft {
        UserDraft::new()
            .with("firstname", "Ada")
            .with("email", "ada@example.com")
            .with("country", "France")
            .with("city", "Paris")
            .with("zipCode", "75001")
            .with("currentRole", "Engineer")
            .with("currentCompany", "Cisco")
            .with("gender", "female")
            .with("birthday", "01-01-2021")
            .with_contacts(vec![
                Contact::new(ContactType::Mobile, 123456789, 48),
                Contact::new(ContactType::Office, 987654321, 33),
            ])
            .with_job_history(vec![
                JobHistory::new("cisconian", "cisco", "24-01-2000", "24-01-3000").unwrap(),
                JobHistory::new("intern", "acme", "31-01-1999", "01-03-1999").unwrap(),
            ])
    }

    pub fn user(firstname: &str) -> User {
        User::from_draft(&user_draft().with("firstname", firstname)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{user, user_draft};
    use super::*;
    use crate::domain::record::{FieldErrorKind, FormatError};

    #[test]
    fn test_user_creation() {
        let user = user("Ada");

        assert_eq!(user.firstname(), "Ada");
        assert_eq!(user.zip_code(), "75001");
        assert_eq!(user.birthday(), "Friday 01 January 2021");
        assert_eq!(user.contacts().len(), 2);
        assert_eq!(user.job_history()[1].stayed().to_string(), "0 yrs 1 months 1 days");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(user("Ada").id(), user("Ada").id());
    }

    #[test]
    fn test_id_survives_edit() {
        let original = user("Ada");
        let edited = User::from_draft(&original.to_draft().with("city", "Lyon")).unwrap();

        assert_eq!(edited.id(), original.id());
        assert_eq!(edited.city(), "Lyon");
    }

    #[test]
    fn test_malformed_email_is_reported_on_email() {
        let error = User::from_draft(&user_draft().with("email", "not-an-email")).unwrap_err();

        assert_eq!(error.errors.len(), 1);
        let email = error.field("email").unwrap();
        assert_eq!(email.value, "not-an-email");
        assert_eq!(email.kind, FieldErrorKind::Format(FormatError::Email));
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let error = User::from_draft(&UserDraft::new()).unwrap_err();

        // contacts and jobHistory may be empty
        assert_eq!(error.errors.len(), 9);
        assert!(error.field("id").is_none());
        assert!(error.field("contacts").is_none());
    }

    #[test]
    fn test_creation_event() {
        let user = user("Ada");
        let event = user.creation_event().unwrap();

        assert_eq!(event.id, user.id().to_string());
        assert_eq!(event.firstname, "Ada");
    }

    #[test]
    fn test_json_field_names() {
        let user = user("Ada");
        let json = serde_json::to_value(&user).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "birthday",
                "city",
                "contacts",
                "country",
                "currentCompany",
                "currentRole",
                "email",
                "firstname",
                "gender",
                "id",
                "jobHistory",
                "zipCode",
            ]
        );
        assert_eq!(object["id"], serde_json::json!(user.id().to_string()));
    }

    #[test]
    fn test_json_round_trip() {
        let user = user("Ada");
        let line = serde_json::to_string(&user).unwrap();

        assert!(!line.contains('\n'));
        let parsed: User = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, user);
        assert_eq!(parsed.job_history()[0].role(), "cisconian");
        assert_eq!(parsed.job_history()[1].role(), "intern");
    }
}
