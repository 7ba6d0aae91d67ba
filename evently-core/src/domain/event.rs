//! Event domain model
//!
//! Represents a single event record managed by the remote events service.

use serde::{Deserialize, Serialize};

/// Identifier assigned to an event by the back end
///
/// Unsigned, so a record with a negative identifier fails to parse.
pub type EventId = u32;

/// An event as returned by the events service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Identifier assigned by the back end
    pub id: EventId,

    /// Display name of the event
    pub name: String,

    /// Where the event takes place
    pub location: String,

    /// When the event takes place, in whatever format the back end stores
    pub time: String,
}

impl Event {
    /// Whether this event carries the given identifier
    ///
    /// Negative or out-of-range identifiers never match.
    pub fn has_id(&self, id: i64) -> bool {
        EventId::try_from(id).is_ok_and(|id| id == self.id)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} @ {} ({})", self.id, self.name, self.location, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_maps_each_field() {
        let event: Event = serde_json::from_value(json!({
            "name": "Retro",
            "location": "Room 4",
            "time": "10:00 AM 12-01-2026",
            "id": 7
        }))
        .unwrap();

        assert_eq!(event.id, 7);
        assert_eq!(event.name, "Retro");
        assert_eq!(event.location, "Room 4");
        assert_eq!(event.time, "10:00 AM 12-01-2026");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let event: Event = serde_json::from_value(json!({
            "name": "Retro",
            "location": "Room 4",
            "time": "noon",
            "id": 1,
            "version": 3
        }))
        .unwrap();

        assert_eq!(event.id, 1);
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let result = serde_json::from_value::<Event>(json!({
            "name": "Retro",
            "time": "noon",
            "id": 1
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative_id() {
        let result = serde_json::from_value::<Event>(json!({
            "name": "Retro",
            "location": "Room 4",
            "time": "noon",
            "id": -1
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_has_id() {
        let event = Event {
            id: 3,
            name: "Standup".to_string(),
            location: "Lobby".to_string(),
            time: "9:00".to_string(),
        };

        assert!(event.has_id(3));
        assert!(!event.has_id(4));
        assert!(!event.has_id(-3));
        assert!(!event.has_id(i64::from(u32::MAX) + 4));
    }
}
