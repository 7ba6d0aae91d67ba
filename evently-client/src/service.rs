//! Event service abstraction
//!
//! The front end talks to the events back end through [`EventService`] so it
//! can run against the HTTP client or an in-memory stand-in.

use async_trait::async_trait;
use evently_core::domain::event::{Event, EventId};
use evently_core::dto::event::{CreateEvent, UpdateEvent};
use tracing::debug;

use crate::EventsClient;
use crate::error::Result;

/// Operations offered by the events back end
#[async_trait]
pub trait EventService: Send + Sync {
    /// Fetches every event
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Creates an event; the back end assigns its identifier
    async fn submit_event(&self, req: CreateEvent) -> Result<()>;

    /// Replaces the fields of an existing event
    async fn update_event(&self, req: UpdateEvent) -> Result<()>;

    /// Deletes an event by identifier
    async fn delete_event(&self, event_id: EventId) -> Result<()>;

    /// Looks up a single event by identifier
    ///
    /// Negative identifiers are absent without contacting the back end.
    /// Otherwise the full list is fetched and scanned for a match.
    async fn find_event(&self, event_id: i64) -> Result<Option<Event>> {
        if event_id < 0 {
            debug!("Skipping lookup of negative event id {}", event_id);
            return Ok(None);
        }

        let events = self.list_events().await?;
        Ok(events.into_iter().find(|event| event.has_id(event_id)))
    }
}

#[async_trait]
impl EventService for EventsClient {
    async fn list_events(&self) -> Result<Vec<Event>> {
        EventsClient::list_events(self).await
    }

    async fn submit_event(&self, req: CreateEvent) -> Result<()> {
        EventsClient::submit_event(self, req).await
    }

    async fn update_event(&self, req: UpdateEvent) -> Result<()> {
        EventsClient::update_event(self, req).await
    }

    async fn delete_event(&self, event_id: EventId) -> Result<()> {
        EventsClient::delete_event(self, event_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory back end that counts list calls
    #[derive(Default)]
    struct FakeEvents {
        events: Mutex<Vec<Event>>,
        list_calls: AtomicUsize,
        fail_listing: bool,
    }

    impl FakeEvents {
        fn with(events: Vec<Event>) -> Self {
            Self {
                events: Mutex::new(events),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl EventService for FakeEvents {
        async fn list_events(&self) -> Result<Vec<Event>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_listing {
                return Err(ClientError::api_error(500, "database offline"));
            }
            Ok(self.events.lock().unwrap().clone())
        }

        async fn submit_event(&self, req: CreateEvent) -> Result<()> {
            let mut events = self.events.lock().unwrap();
            let id = events.iter().map(|e| e.id + 1).max().unwrap_or(1);
            events.push(Event {
                id,
                name: req.name,
                location: req.location,
                time: req.time,
            });
            Ok(())
        }

        async fn update_event(&self, req: UpdateEvent) -> Result<()> {
            let mut events = self.events.lock().unwrap();
            if let Some(event) = events.iter_mut().find(|e| e.id == req.id) {
                event.name = req.name;
                event.location = req.location;
                event.time = req.time;
            }
            Ok(())
        }

        async fn delete_event(&self, event_id: EventId) -> Result<()> {
            self.events.lock().unwrap().retain(|e| e.id != event_id);
            Ok(())
        }
    }

    fn event(id: EventId, name: &str) -> Event {
        Event {
            id,
            name: name.to_string(),
            location: format!("Room {}", id),
            time: "10:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_negative_id_is_absent_without_listing() {
        let service = FakeEvents::with(vec![event(0, "Kickoff")]);

        assert_eq!(service.find_event(-1).await.unwrap(), None);
        assert_eq!(service.find_event(i64::MIN).await.unwrap(), None);
        assert_eq!(service.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_find_missing_id_is_absent() {
        let service = FakeEvents::with(vec![event(1, "Kickoff"), event(2, "Review")]);

        assert_eq!(service.find_event(3).await.unwrap(), None);
        assert_eq!(service.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_find_present_id_returns_matching_event() {
        let service = FakeEvents::with(vec![event(1, "Kickoff"), event(2, "Review")]);

        let found = service.find_event(2).await.unwrap();
        assert_eq!(found, Some(event(2, "Review")));
    }

    #[tokio::test]
    async fn test_find_id_zero() {
        let service = FakeEvents::with(vec![event(0, "Kickoff")]);

        assert_eq!(service.find_event(0).await.unwrap(), Some(event(0, "Kickoff")));
    }

    #[tokio::test]
    async fn test_find_refetches_every_time() {
        let service = FakeEvents::with(vec![event(1, "Kickoff")]);

        assert!(service.find_event(1).await.unwrap().is_some());
        service.delete_event(1).await.unwrap();
        assert!(service.find_event(1).await.unwrap().is_none());
        assert_eq!(service.list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_find_sees_updates() {
        let service = FakeEvents::default();
        service
            .submit_event(CreateEvent::new("Kickoff", "Lobby", "09:00"))
            .await
            .unwrap();
        service
            .update_event(UpdateEvent::new("Kickoff", "Roof", "09:30", 1))
            .await
            .unwrap();

        let found = service.find_event(1).await.unwrap().unwrap();
        assert_eq!(found.location, "Roof");
        assert_eq!(found.time, "09:30");
    }

    #[tokio::test]
    async fn test_find_propagates_listing_errors() {
        let service = FakeEvents {
            fail_listing: true,
            ..Default::default()
        };

        let err = service.find_event(1).await.unwrap_err();
        assert!(err.is_server_error());
    }
}
