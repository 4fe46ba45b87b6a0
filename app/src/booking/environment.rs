//! Environment for the booking flow.

use boxoffice_client::{ApiClient, ApiError, NewBooking};
use boxoffice_domain::types::{Booking, Event, EventId, Ticket, TicketId};
use futures::future::BoxFuture;
use std::sync::Arc;

/// Booking-flow endpoints.
///
/// Returns `BoxFuture` instead of async fn to be dyn-compatible
/// (object-safe).
pub trait BookingGateway: Send + Sync {
    /// Fetch one event.
    fn fetch_event(&self, id: EventId) -> BoxFuture<'static, Result<Event, ApiError>>;

    /// Fetch one ticket tier.
    fn fetch_ticket(&self, id: TicketId) -> BoxFuture<'static, Result<Ticket, ApiError>>;

    /// Submit a booking.
    fn submit(&self, booking: NewBooking) -> BoxFuture<'static, Result<Booking, ApiError>>;

    /// Look a booking up by reference code.
    fn find_by_reference(&self, reference: String)
    -> BoxFuture<'static, Result<Booking, ApiError>>;
}

impl BookingGateway for ApiClient {
    fn fetch_event(&self, id: EventId) -> BoxFuture<'static, Result<Event, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.get_event(&id).await })
    }

    fn fetch_ticket(&self, id: TicketId) -> BoxFuture<'static, Result<Ticket, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.get_ticket(&id).await })
    }

    fn submit(&self, booking: NewBooking) -> BoxFuture<'static, Result<Booking, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.create_booking(&booking).await })
    }

    fn find_by_reference(
        &self,
        reference: String,
    ) -> BoxFuture<'static, Result<Booking, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.find_booking_by_reference(&reference).await })
    }
}

/// Dependencies of the booking flow.
#[derive(Clone)]
pub struct BookingEnvironment {
    gateway: Arc<dyn BookingGateway>,
}

impl BookingEnvironment {
    /// Create a booking environment.
    #[must_use]
    pub fn new(gateway: Arc<dyn BookingGateway>) -> Self {
        Self { gateway }
    }

    /// The booking gateway.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn BookingGateway> {
        Arc::clone(&self.gateway)
    }
}
