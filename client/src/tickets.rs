//! Ticket endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use boxoffice_domain::money::Money;
use boxoffice_domain::page::Paginated;
use boxoffice_domain::query::{AdminQuery, TicketFilter};
use boxoffice_domain::types::{EventId, PublishStatus, Ticket, TicketId};
use serde::Serialize;

/// Payload for creating a ticket tier.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    /// Owning event.
    pub event_id: EventId,
    /// Tier name.
    pub name: String,
    /// Optional tier description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in minor units.
    pub price: Money,
    /// Total quantity to issue.
    pub quantity: u32,
    /// Public visibility; server defaults apply when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
}

/// Partial payload for updating a ticket tier.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicket {
    /// New tier name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New price in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    /// New total quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// New visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
}

impl ApiClient {
    /// List ticket tiers for an event (public booking page).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn list_event_tickets(&self, event_id: &EventId) -> Result<Vec<Ticket>, ApiError> {
        self.get_data(self.endpoint(&["api", "tickets", "event", event_id.as_str()]))
            .await
    }

    /// Fetch one ticket tier by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the ticket does not exist.
    pub async fn get_ticket(&self, id: &TicketId) -> Result<Ticket, ApiError> {
        self.get_data(self.endpoint(&["api", "tickets", id.as_str()]))
            .await
    }

    /// List tickets for the admin console.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without a valid session token.
    pub async fn list_admin_tickets(
        &self,
        query: &AdminQuery<TicketFilter>,
    ) -> Result<Paginated<Ticket>, ApiError> {
        let url = self.endpoint_with_query(
            &["api", "tickets", "admin", "all"],
            &query.to_query_pairs(),
        );
        self.get_page(url).await
    }

    /// Create a ticket tier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn create_ticket(&self, payload: &NewTicket) -> Result<Ticket, ApiError> {
        self.post_data(self.endpoint(&["api", "tickets"]), payload)
            .await
    }

    /// Update a ticket tier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn update_ticket(
        &self,
        id: &TicketId,
        payload: &UpdateTicket,
    ) -> Result<Ticket, ApiError> {
        self.put_data(self.endpoint(&["api", "tickets", id.as_str()]), payload)
            .await
    }

    /// Delete a ticket tier; returns the server acknowledgement message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn delete_ticket(&self, id: &TicketId) -> Result<String, ApiError> {
        self.delete_ack(self.endpoint(&["api", "tickets", id.as_str()]))
            .await
    }
}
