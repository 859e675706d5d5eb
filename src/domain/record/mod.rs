//! Record construction engine
//!
//! Every record type describes its fields in a static descriptor table. The
//! generic [`RecordBuilder`] walks that table to prompt for values, and
//! [`FieldReport`] runs the validators attached to it so construction either
//! succeeds as a whole or reports every rejected field.

mod builder;
mod descriptor;
mod event;
mod validation;

pub use builder::RecordBuilder;
pub use descriptor::{Draft, FieldDescriptor, FieldKind, ListEditor, Record, TextFields};
pub use event::{CreationEvent, CreationSink};
pub use validation::{
    integer, non_empty, parse_integer, FieldError, FieldErrorKind, FieldReport, FormatError,
    RecordError, ValidatedFields, Validator,
};

#[cfg(test)]
pub use event::mock;
