//! Event DTOs
//!
//! Form payloads for creating and updating events.

use serde::Serialize;

use crate::domain::event::EventId;

/// Request to create a new event
///
/// Has no identifier; the back end assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEvent {
    pub name: String,
    pub time: String,
    pub location: String,
}

impl CreateEvent {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            location: location.into(),
        }
    }
}

/// Request to replace the fields of an existing event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateEvent {
    pub name: String,
    pub time: String,
    pub location: String,
    pub id: EventId,
}

impl UpdateEvent {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        time: impl Into<String>,
        id: EventId,
    ) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            location: location.into(),
            id,
        }
    }
}
