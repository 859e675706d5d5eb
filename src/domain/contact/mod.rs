//! Contact domain

mod entity;

pub use entity::{Contact, ContactType};
