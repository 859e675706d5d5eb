//! Job history domain

mod entity;

pub use entity::JobHistory;
