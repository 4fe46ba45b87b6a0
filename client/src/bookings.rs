//! Booking endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use boxoffice_domain::page::Paginated;
use boxoffice_domain::query::{AdminQuery, BookingFilter};
use boxoffice_domain::types::{Booking, EventId, TicketId};
use serde::Serialize;

/// Payload for creating a booking from the public flow.
///
/// The total amount is computed and enforced server-side from the ticket
/// price and quantity; the client never sends a price.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    /// The event being booked.
    pub event_id: EventId,
    /// The chosen ticket tier.
    pub ticket_id: TicketId,
    /// Purchaser full name.
    pub full_name: String,
    /// Purchaser email.
    pub email: String,
    /// Purchaser phone number.
    pub phone_number: String,
    /// Number of tickets.
    pub quantity: u32,
}

impl ApiClient {
    /// Create a booking; it starts in `pending` status until payment is
    /// confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the server's message when the
    /// booking is refused (e.g. insufficient remaining quantity).
    pub async fn create_booking(&self, payload: &NewBooking) -> Result<Booking, ApiError> {
        self.post_data(self.endpoint(&["api", "bookings"]), payload)
            .await
    }

    /// Look up a booking by its human-shareable reference code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown reference.
    pub async fn find_booking_by_reference(&self, reference: &str) -> Result<Booking, ApiError> {
        self.get_data(self.endpoint(&["api", "bookings", "reference", reference]))
            .await
    }

    /// List bookings for the admin console.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without a valid session token.
    pub async fn list_admin_bookings(
        &self,
        query: &AdminQuery<BookingFilter>,
    ) -> Result<Paginated<Booking>, ApiError> {
        let url = self.endpoint_with_query(
            &["api", "bookings", "admin", "all"],
            &query.to_query_pairs(),
        );
        self.get_page(url).await
    }

    /// List bookings for one event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without a valid session token.
    pub async fn list_admin_bookings_by_event(
        &self,
        event_id: &EventId,
        query: &AdminQuery<()>,
    ) -> Result<Paginated<Booking>, ApiError> {
        let url = self.endpoint_with_query(
            &["api", "bookings", "admin", "event", event_id.as_str()],
            &query.to_query_pairs(),
        );
        self.get_page(url).await
    }

    /// List bookings for one ticket tier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without a valid session token.
    pub async fn list_admin_bookings_by_ticket(
        &self,
        ticket_id: &TicketId,
        query: &AdminQuery<()>,
    ) -> Result<Paginated<Booking>, ApiError> {
        let url = self.endpoint_with_query(
            &["api", "bookings", "admin", "ticket", ticket_id.as_str()],
            &query.to_query_pairs(),
        );
        self.get_page(url).await
    }
}
