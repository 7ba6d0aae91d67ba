//! Event-related API endpoints

use evently_core::domain::event::{Event, EventId};
use evently_core::dto::event::{CreateEvent, UpdateEvent};
use tracing::debug;

use crate::EventsClient;
use crate::error::Result;

impl EventsClient {
    // =============================================================================
    // Event Management
    // =============================================================================

    /// Submit a new event
    ///
    /// Sends the fields as a form body. The service assigns the identifier.
    /// The response is discarded: an error status is logged, not returned.
    ///
    /// # Example
    /// ```no_run
    /// # use evently_client::EventsClient;
    /// # use evently_core::dto::event::CreateEvent;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = EventsClient::new("http://localhost:9080");
    /// client
    ///     .submit_event(CreateEvent::new("Demo day", "Auditorium", "14:00"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_event(&self, req: CreateEvent) -> Result<()> {
        let url = format!("{}/events", self.base_url);
        debug!("POST {} name={}", url, req.name);
        let response = self.client.post(&url).form(&req).send().await?;

        self.discard_response(response);
        Ok(())
    }

    /// Submit new field values for an existing event
    ///
    /// The identifier travels only in the form body, not in the path.
    ///
    /// # Arguments
    /// * `req` - The replacement fields, including the event's identifier
    pub async fn update_event(&self, req: UpdateEvent) -> Result<()> {
        let url = format!("{}/events/update/", self.base_url);
        debug!("POST {} id={}", url, req.id);
        let response = self.client.post(&url).form(&req).send().await?;

        self.discard_response(response);
        Ok(())
    }

    /// Delete an event
    ///
    /// # Arguments
    /// * `event_id` - The identifier of the event to delete
    pub async fn delete_event(&self, event_id: EventId) -> Result<()> {
        let url = format!("{}/events/delete/{}", self.base_url, event_id);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;

        self.discard_response(response);
        Ok(())
    }

    /// List all events
    ///
    /// # Returns
    /// Every event the service holds, in the order the service returned them
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let url = format!("{}/events", self.base_url);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let events: Vec<Event> = self.handle_response(response).await?;
        debug!("Retrieved {} event(s)", events.len());
        Ok(events)
    }
}
