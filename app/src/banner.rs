//! Public notification banner.
//!
//! At most one banner is surfaced at a time: the first active notification
//! the API hands back. Dismissal is per-view and transient.

use boxoffice_client::{ApiClient, ApiError};
use boxoffice_core::effect::Effect;
use boxoffice_core::reducer::{Effects, Reducer};
use boxoffice_domain::selection::active_banner;
use boxoffice_domain::types::Notification;
use futures::future::BoxFuture;
use smallvec::smallvec;
use std::sync::Arc;

/// State of the banner view.
#[derive(Clone, Debug, Default)]
pub struct BannerState {
    /// The active banner, if the API has one.
    pub banner: Option<Notification>,
    /// The visitor dismissed the banner for this view's lifetime.
    pub dismissed: bool,
}

impl BannerState {
    /// The banner to render, honoring dismissal.
    #[must_use]
    pub fn visible(&self) -> Option<&Notification> {
        if self.dismissed {
            None
        } else {
            self.banner.as_ref()
        }
    }
}

/// Inputs to the banner view.
#[derive(Debug, Clone)]
pub enum BannerAction {
    /// The layout mounted; fetch the active banner.
    ViewAppeared,

    /// Banner fetch completed. A failure is deliberately silent: a missing
    /// banner never degrades the page around it.
    Loaded(Option<Notification>),

    /// The visitor dismissed the banner.
    Dismissed,
}

/// Active-banner endpoint.
///
/// Returns `BoxFuture` instead of async fn to be dyn-compatible
/// (object-safe).
pub trait BannerGateway: Send + Sync {
    /// Fetch the currently active banner, if any.
    fn fetch_active(&self) -> BoxFuture<'static, Result<Option<Notification>, ApiError>>;
}

impl BannerGateway for ApiClient {
    fn fetch_active(&self) -> BoxFuture<'static, Result<Option<Notification>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.active_notification().await })
    }
}

/// Dependencies of the banner view.
#[derive(Clone)]
pub struct BannerEnvironment {
    gateway: Arc<dyn BannerGateway>,
}

impl BannerEnvironment {
    /// Create a banner environment.
    #[must_use]
    pub fn new(gateway: Arc<dyn BannerGateway>) -> Self {
        Self { gateway }
    }

    /// The banner gateway.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn BannerGateway> {
        Arc::clone(&self.gateway)
    }
}

/// Reducer for the banner view.
pub struct BannerReducer;

impl BannerReducer {
    /// Create a new banner reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BannerReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for BannerReducer {
    type State = BannerState;
    type Action = BannerAction;
    type Environment = BannerEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            BannerAction::ViewAppeared => {
                let gateway = env.gateway();
                smallvec![Effect::Future(Box::pin(async move {
                    match gateway.fetch_active().await {
                        Ok(banner) => Some(BannerAction::Loaded(banner)),
                        Err(error) => {
                            tracing::debug!(%error, "banner fetch failed; staying hidden");
                            Some(BannerAction::Loaded(None))
                        },
                    }
                }))]
            },

            BannerAction::Loaded(banner) => {
                // Trust but verify: only an active notification is surfaced,
                // whatever the endpoint returned.
                state.banner = active_banner(banner.as_slice()).cloned();
                smallvec![]
            },

            BannerAction::Dismissed => {
                state.dismissed = true;
                smallvec![]
            },
        }
    }
}
