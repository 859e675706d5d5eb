//! Declarative field tables describing how each record type is entered

use std::collections::BTreeMap;
use std::fmt;

use super::builder::RecordBuilder;
use super::event::CreationEvent;
use super::validation::{RecordError, Validator};
use crate::domain::console::ConsoleError;

/// Edits a nested list held by a draft, driving the builder for each entry
pub type ListEditor<D> = fn(&mut RecordBuilder<'_>, &mut D) -> Result<(), ConsoleError>;

/// How a field takes part in console entry
pub enum FieldKind<D> {
    /// Prompted for and checked by the attached validator
    Plain(Validator),
    /// Computed from other fields, never prompted for
    Derived,
    /// Assigned once by the system, never prompted for
    Generated,
    /// A list of nested records entered one after the other
    NestedList(ListEditor<D>),
}

pub struct FieldDescriptor<D> {
    pub name: &'static str,
    pub prompt: &'static str,
    pub kind: FieldKind<D>,
}

impl<D> FieldDescriptor<D> {
    pub const fn plain(name: &'static str, prompt: &'static str, validator: Validator) -> Self {
        Self {
            name,
            prompt,
            kind: FieldKind::Plain(validator),
        }
    }

    pub const fn derived(name: &'static str) -> Self {
        Self {
            name,
            prompt: name,
            kind: FieldKind::Derived,
        }
    }

    pub const fn generated(name: &'static str) -> Self {
        Self {
            name,
            prompt: name,
            kind: FieldKind::Generated,
        }
    }

    pub const fn nested_list(name: &'static str, prompt: &'static str, editor: ListEditor<D>) -> Self {
        Self {
            name,
            prompt,
            kind: FieldKind::NestedList(editor),
        }
    }

    pub fn is_prompted(&self) -> bool {
        matches!(self.kind, FieldKind::Plain(_) | FieldKind::NestedList(_))
    }
}

/// Raw, not yet validated values collected for one record
pub trait Draft: Default + Clone + fmt::Debug {
    fn text(&self, field: &str) -> Option<&str>;

    fn set_text(&mut self, field: &'static str, value: String);
}

/// Draft made only of text fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFields(BTreeMap<&'static str, String>);

impl TextFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.0.insert(field, value.into());
        self
    }
}

impl Draft for TextFields {
    fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    fn set_text(&mut self, field: &'static str, value: String) {
        self.0.insert(field, value);
    }
}

/// A record type that can be entered from the console
pub trait Record: Sized + Clone + fmt::Display {
    type Draft: Draft + 'static;

    /// Name shown in prompts and error reports
    const NAME: &'static str;

    fn fields() -> &'static [FieldDescriptor<Self::Draft>];

    /// Draft holding the current values, used when editing
    fn to_draft(&self) -> Self::Draft;

    /// Validate every field and construct the record in one step
    fn from_draft(draft: &Self::Draft) -> Result<Self, RecordError>;

    /// Event to record once the record has been accepted interactively
    fn creation_event(&self) -> Option<CreationEvent> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::non_empty;

    #[test]
    fn test_text_fields() {
        let mut draft = TextFields::new().with("role", "engineer");
        assert_eq!(draft.text("role"), Some("engineer"));
        assert_eq!(draft.text("company"), None);

        draft.set_text("role", "manager".to_string());
        assert_eq!(draft.text("role"), Some("manager"));
    }

    #[test]
    fn test_prompted_kinds() {
        let plain = FieldDescriptor::<TextFields>::plain("role", "Role", non_empty);
        let derived = FieldDescriptor::<TextFields>::derived("stayed");
        let generated = FieldDescriptor::<TextFields>::generated("id");

        assert!(plain.is_prompted());
        assert!(!derived.is_prompted());
        assert!(!generated.is_prompted());
    }
}
