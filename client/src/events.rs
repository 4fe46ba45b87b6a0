//! Event endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use boxoffice_domain::page::Paginated;
use boxoffice_domain::query::{AdminQuery, EventFilter};
use boxoffice_domain::types::{Event, EventId, PublishStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Payload for creating an event.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    /// Display title.
    pub title: String,
    /// Optional long-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the event occurs.
    pub date: DateTime<Utc>,
    /// Optional venue name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Optional hero image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Public visibility.
    pub status: PublishStatus,
}

/// Partial payload for updating an event; unset fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// New venue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// New hero image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// New visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
}

impl ApiClient {
    /// List public events. Visibility filtering is applied client-side
    /// regardless of what the backend returns.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_data(self.endpoint(&["api", "events"])).await
    }

    /// Fetch one event by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the event does not exist.
    pub async fn get_event(&self, id: &EventId) -> Result<Event, ApiError> {
        self.get_data(self.endpoint(&["api", "events", id.as_str()]))
            .await
    }

    /// List events for the admin console.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without a valid session token.
    pub async fn list_admin_events(
        &self,
        query: &AdminQuery<EventFilter>,
    ) -> Result<Paginated<Event>, ApiError> {
        let url = self.endpoint_with_query(
            &["api", "events", "admin", "all"],
            &query.to_query_pairs(),
        );
        self.get_page(url).await
    }

    /// Create an event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the server's message when the
    /// payload is refused.
    pub async fn create_event(&self, payload: &NewEvent) -> Result<Event, ApiError> {
        self.post_data(self.endpoint(&["api", "events"]), payload)
            .await
    }

    /// Update an event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn update_event(
        &self,
        id: &EventId,
        payload: &UpdateEvent,
    ) -> Result<Event, ApiError> {
        self.put_data(self.endpoint(&["api", "events", id.as_str()]), payload)
            .await
    }

    /// Delete an event; returns the server acknowledgement message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn delete_event(&self, id: &EventId) -> Result<String, ApiError> {
        self.delete_ack(self.endpoint(&["api", "events", id.as_str()]))
            .await
    }
}
