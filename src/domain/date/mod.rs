//! Date handling
//!
//! Dates are entered as `DD-MM-YYYY`. This module validates them and
//! computes the time spent between two of them.

mod stay;
mod validation;

pub use stay::Stay;
pub use validation::{format_date, parse_date, sortable, validate_date, DATE_FORMAT, DATE_PATTERN};
