//! Generic console builder driven by a record's field table

use tracing::{debug, info, warn};

use super::descriptor::{Draft, FieldKind, Record};
use super::event::CreationSink;
use super::validation::RecordError;
use crate::domain::console::{self, Console, ConsoleError};

enum BuildState<R> {
    Prompting,
    Validating,
    Reprompt(RecordError),
    Accepted(R),
    Abandoned,
}

/// Builds records field by field from a console
pub struct RecordBuilder<'a> {
    console: &'a mut dyn Console,
    sink: Option<&'a dyn CreationSink>,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(console: &'a mut dyn Console) -> Self {
        Self {
            console,
            sink: None,
        }
    }

    /// Send creation events of accepted records to `sink`
    pub fn with_sink(mut self, sink: &'a dyn CreationSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Enter one record. With `current`, its values are offered as defaults.
    ///
    /// Returns `None` when the user abandons after a validation failure.
    pub fn build<R: Record>(&mut self, current: Option<&R>) -> Result<Option<R>, ConsoleError> {
        self.console
            .print(&format!("Enter values for new {} object", R::NAME))?;

        let mut draft = current.map(R::to_draft).unwrap_or_default();
        let mut state = BuildState::Prompting;

        loop {
            state = match state {
                BuildState::Prompting => {
                    self.prompt_fields::<R>(&mut draft)?;
                    BuildState::Validating
                }
                BuildState::Validating => match R::from_draft(&draft) {
                    Ok(record) => BuildState::Accepted(record),
                    Err(error) => BuildState::Reprompt(error),
                },
                BuildState::Reprompt(error) => {
                    debug!(record = R::NAME, rejected = error.errors.len(), "Record rejected");
                    self.report(&error)?;

                    if self.yes_no("Re-enter? (Y/N)")? {
                        BuildState::Prompting
                    } else {
                        BuildState::Abandoned
                    }
                }
                BuildState::Accepted(record) => {
                    self.record_created(&record);
                    return Ok(Some(record));
                }
                BuildState::Abandoned => return Ok(None),
            };
        }
    }

    /// Enter a list of records, editing `values` in place.
    ///
    /// Entries past the last confirmed one are dropped.
    pub fn build_list<R: Record>(
        &mut self,
        name: &str,
        mut values: Vec<R>,
    ) -> Result<Vec<R>, ConsoleError> {
        self.console
            .print(&format!("{}: enter list of {} objects", name, R::NAME))?;

        let mut index = 0;

        loop {
            index += 1;
            self.console.print(&format!("--{} #{}--", R::NAME, index))?;

            let current = values.get(index - 1).cloned();
            match self.build::<R>(current.as_ref())? {
                None => index -= 1,
                Some(value) if values.len() >= index => values[index - 1] = value,
                Some(value) => values.push(value),
            }

            if !self.yes_no(&format!("Enter further {} objects? (Y/N)", R::NAME))? {
                break;
            }
        }

        values.truncate(index);
        Ok(values)
    }

    pub fn yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        console::yes_no(self.console, prompt)
    }

    fn prompt_fields<R: Record>(&mut self, draft: &mut R::Draft) -> Result<(), ConsoleError> {
        for field in R::fields() {
            match &field.kind {
                FieldKind::Derived | FieldKind::Generated => continue,
                FieldKind::NestedList(edit) => edit(self, draft)?,
                FieldKind::Plain(_) => {
                    let value = match draft.text(field.name) {
                        Some(current) => {
                            let answer = self.console.read_line(&format!(
                                "{}.{} ({}), ENTER to keep: ",
                                R::NAME,
                                field.prompt,
                                current
                            ))?;

                            if answer.trim().is_empty() {
                                current.to_string()
                            } else {
                                answer
                            }
                        }
                        None => self
                            .console
                            .read_line(&format!("{}.{}: ", R::NAME, field.prompt))?,
                    };

                    draft.set_text(field.name, value);
                }
            }
        }

        Ok(())
    }

    fn report(&mut self, error: &RecordError) -> Result<(), ConsoleError> {
        self.console.print("Invalid input")?;

        for field_error in &error.errors {
            self.console.print(&field_error.to_string())?;
        }

        Ok(())
    }

    fn record_created<R: Record>(&self, record: &R) {
        let Some(event) = record.creation_event() else {
            return;
        };

        info!(id = %event.id, firstname = %event.firstname, "{} created", R::NAME);

        if let Some(sink) = self.sink {
            if let Err(e) = sink.record_created(&event) {
                warn!(id = %event.id, error = %e, "Failed to write creation log entry");
            }
        }
    }
}
