//! Environment for the generic admin list view.

use boxoffice_client::{ApiClient, ApiError};
use boxoffice_domain::page::Paginated;
use boxoffice_domain::query::{AdminQuery, BookingFilter, EventFilter, TicketFilter};
use boxoffice_domain::types::{Booking, Event, Ticket};
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;

/// Default debounce window for free-text search.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Listing endpoint for one admin resource.
///
/// Returns `BoxFuture` instead of async fn to be dyn-compatible
/// (object-safe); implementations clone what they need so the future owns
/// its data.
pub trait ListGateway<T, F>: Send + Sync {
    /// Fetch one page for `query`.
    fn fetch_page(&self, query: AdminQuery<F>) -> BoxFuture<'static, Result<Paginated<T>, ApiError>>;
}

/// Dependencies of an admin list view.
#[derive(Clone)]
pub struct ListEnvironment<T, F> {
    gateway: Arc<dyn ListGateway<T, F>>,
    debounce: Duration,
}

impl<T, F> ListEnvironment<T, F> {
    /// Create an environment with the default search debounce.
    #[must_use]
    pub fn new(gateway: Arc<dyn ListGateway<T, F>>) -> Self {
        Self {
            gateway,
            debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }

    /// Override the search debounce window (tests use zero).
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// The listing gateway.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn ListGateway<T, F>> {
        Arc::clone(&self.gateway)
    }

    /// The search debounce window.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }
}

impl ListGateway<Event, EventFilter> for ApiClient {
    fn fetch_page(
        &self,
        query: AdminQuery<EventFilter>,
    ) -> BoxFuture<'static, Result<Paginated<Event>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.list_admin_events(&query).await })
    }
}

impl ListGateway<Ticket, TicketFilter> for ApiClient {
    fn fetch_page(
        &self,
        query: AdminQuery<TicketFilter>,
    ) -> BoxFuture<'static, Result<Paginated<Ticket>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.list_admin_tickets(&query).await })
    }
}

impl ListGateway<Booking, BookingFilter> for ApiClient {
    fn fetch_page(
        &self,
        query: AdminQuery<BookingFilter>,
    ) -> BoxFuture<'static, Result<Paginated<Booking>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.list_admin_bookings(&query).await })
    }
}
