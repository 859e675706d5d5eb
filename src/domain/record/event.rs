//! Creation events emitted when a record is accepted interactively

use std::fmt::Debug;

use crate::domain::DomainError;

/// A record that was just created from the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationEvent {
    pub id: String,
    pub firstname: String,
}

/// Destination for creation events
pub trait CreationSink: Debug {
    fn record_created(&self, event: &CreationEvent) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Keeps events in memory
    #[derive(Debug, Default)]
    pub struct MockCreationSink {
        events: RefCell<Vec<CreationEvent>>,
        should_fail: Cell<bool>,
    }

    impl MockCreationSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_should_fail(&self, fail: bool) {
            self.should_fail.set(fail);
        }

        pub fn events(&self) -> Vec<CreationEvent> {
            self.events.borrow().clone()
        }
    }

    impl CreationSink for MockCreationSink {
        fn record_created(&self, event: &CreationEvent) -> Result<(), DomainError> {
            if self.should_fail.get() {
                return Err(DomainError::persistence_write(
                    "mock.log",
                    "Mock sink configured to fail",
                ));
            }
            self.events.borrow_mut().push(event.clone());
            Ok(())
        }
    }
}
