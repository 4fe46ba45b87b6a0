//! Environment for the landing view.

use boxoffice_client::{ApiClient, ApiError};
use boxoffice_core::environment::Clock;
use boxoffice_domain::types::Event;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;

/// Public event listing endpoint.
///
/// Returns `BoxFuture` instead of async fn to be dyn-compatible
/// (object-safe).
pub trait EventsGateway: Send + Sync {
    /// Fetch the public event list.
    fn fetch_events(&self) -> BoxFuture<'static, Result<Vec<Event>, ApiError>>;
}

impl EventsGateway for ApiClient {
    fn fetch_events(&self) -> BoxFuture<'static, Result<Vec<Event>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.list_events().await })
    }
}

/// Dependencies of the landing view.
#[derive(Clone)]
pub struct HomeEnvironment {
    clock: Arc<dyn Clock>,
    gateway: Arc<dyn EventsGateway>,
    tick_interval: Duration,
}

impl HomeEnvironment {
    /// Create an environment with the production one-second tick.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, gateway: Arc<dyn EventsGateway>) -> Self {
        Self {
            clock,
            gateway,
            tick_interval: Duration::from_secs(1),
        }
    }

    /// Override the countdown tick interval (tests use a large value to
    /// keep ticks from firing on their own).
    #[must_use]
    pub const fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// The injected clock.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// The event listing gateway.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn EventsGateway> {
        Arc::clone(&self.gateway)
    }

    /// The countdown tick interval.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}
