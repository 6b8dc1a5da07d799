//! Event record types.
//!
//! `Event` is the flat record the board stores and displays. `EventDraft` is
//! the unvalidated creation form; `validate` enforces the all-fields-non-empty
//! rule before an `Event` ever exists.

use serde::{Deserialize, Serialize};

use crate::error::{EventBoardError, EventBoardResult};

/// A single user-created event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    /// Free-form date text. Doubles as the deletion key within a list, so two
    /// events sharing a date are deleted together.
    pub date: String,
    pub location: String,
    pub description: String,
    /// URI or local path of the event's image.
    pub image_ref: String,
}

/// The five creation-form fields, before validation.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub image_ref: String,
}

impl EventDraft {
    /// Check that every field is non-empty and produce the finished `Event`.
    ///
    /// Fields are checked in declaration order; the first empty one is the
    /// one reported.
    pub fn validate(self) -> EventBoardResult<Event> {
        for (field, value) in [
            ("name", &self.name),
            ("date", &self.date),
            ("location", &self.location),
            ("description", &self.description),
            ("image", &self.image_ref),
        ] {
            if value.is_empty() {
                return Err(EventBoardError::Validation(field));
            }
        }

        Ok(Event {
            name: self.name,
            date: self.date,
            location: self.location,
            description: self.description,
            image_ref: self.image_ref,
        })
    }
}
