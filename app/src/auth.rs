//! Admin session: login, sign-out, and invalidation.
//!
//! The presence of a token in the [`SessionStore`] is what gates admin
//! views. The reducer never touches the store directly; persistence happens
//! inside effects so the reducer stays pure. Any `Unauthorized` result from
//! an admin call should be dispatched here as
//! [`AuthAction::SessionInvalidated`].

use boxoffice_client::{ApiClient, ApiError, LoginData, LoginRequest};
use boxoffice_core::effect::Effect;
use boxoffice_core::environment::SessionStore;
use boxoffice_core::reducer::{Effects, Reducer};
use boxoffice_domain::types::Admin;
use futures::future::BoxFuture;
use smallvec::smallvec;
use std::sync::Arc;

/// Where the admin session currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthStatus {
    /// No session; admin routes redirect to login.
    #[default]
    SignedOut,
    /// Login request in flight.
    SigningIn,
    /// A token is present. The profile is populated after a fresh login
    /// and absent when the session was restored from storage.
    SignedIn {
        /// The authenticated admin's profile, when known.
        admin: Option<Admin>,
    },
}

/// State of the admin session view.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// Session status.
    pub status: AuthStatus,
    /// User-facing message of the most recent failure, if any.
    pub error: Option<String>,
}

impl AuthState {
    /// Whether admin routes may render.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.status, AuthStatus::SignedIn { .. })
    }
}

/// Inputs to the admin session view.
#[derive(Debug, Clone)]
pub enum AuthAction {
    /// App start: adopt whatever session the store already holds.
    SessionRestored,

    /// The login form was submitted.
    LoginSubmitted {
        /// Admin login email.
        email: String,
        /// Admin password.
        password: String,
    },

    /// Login completed; on success the token is already persisted.
    LoginFinished(Result<Admin, String>),

    /// The admin chose to sign out.
    SignOutRequested,

    /// An admin call answered `Unauthorized`; the session is gone.
    SessionInvalidated,
}

/// Login endpoint.
///
/// Returns `BoxFuture` instead of async fn to be dyn-compatible
/// (object-safe).
pub trait AuthGateway: Send + Sync {
    /// Authenticate and return the token plus profile.
    fn login(&self, request: LoginRequest) -> BoxFuture<'static, Result<LoginData, ApiError>>;
}

impl AuthGateway for ApiClient {
    fn login(&self, request: LoginRequest) -> BoxFuture<'static, Result<LoginData, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.login(&request).await })
    }
}

/// Dependencies of the admin session view.
#[derive(Clone)]
pub struct AuthEnvironment {
    gateway: Arc<dyn AuthGateway>,
    session: Arc<dyn SessionStore>,
}

impl AuthEnvironment {
    /// Create an auth environment.
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>, session: Arc<dyn SessionStore>) -> Self {
        Self { gateway, session }
    }

    /// The login gateway.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn AuthGateway> {
        Arc::clone(&self.gateway)
    }

    /// The session store.
    #[must_use]
    pub fn session(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.session)
    }
}

/// Reducer for the admin session view.
pub struct AuthReducer;

impl AuthReducer {
    /// Create a new auth reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for AuthReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;
    type Environment = AuthEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            AuthAction::SessionRestored => {
                state.status = if env.session().token().is_some() {
                    AuthStatus::SignedIn { admin: None }
                } else {
                    AuthStatus::SignedOut
                };
                smallvec![]
            },

            AuthAction::LoginSubmitted { email, password } => {
                // Required-field check blocks the round-trip client-side.
                if email.trim().is_empty() || password.is_empty() {
                    state.error = Some("Email and password are required".to_string());
                    return smallvec![];
                }

                state.status = AuthStatus::SigningIn;
                state.error = None;

                let gateway = env.gateway();
                let session = env.session();
                smallvec![Effect::Future(Box::pin(async move {
                    let request = LoginRequest { email, password };
                    let result = match gateway.login(request).await {
                        Ok(data) => {
                            // Persist before reporting success so a reload
                            // right after login stays signed in.
                            session.set_token(&data.token);
                            Ok(data.admin)
                        },
                        Err(e) => Err(e.user_message()),
                    };
                    Some(AuthAction::LoginFinished(result))
                }))]
            },

            AuthAction::LoginFinished(Ok(admin)) => {
                state.status = AuthStatus::SignedIn { admin: Some(admin) };
                state.error = None;
                smallvec![]
            },

            AuthAction::LoginFinished(Err(message)) => {
                state.status = AuthStatus::SignedOut;
                state.error = Some(message);
                smallvec![]
            },

            AuthAction::SignOutRequested => {
                state.status = AuthStatus::SignedOut;
                state.error = None;
                let session = env.session();
                smallvec![Effect::Future(Box::pin(async move {
                    session.clear();
                    None
                }))]
            },

            AuthAction::SessionInvalidated => {
                state.status = AuthStatus::SignedOut;
                state.error = Some("Your session has expired. Please sign in again.".to_string());
                let session = env.session();
                smallvec![Effect::Future(Box::pin(async move {
                    session.clear();
                    None
                }))]
            },
        }
    }
}
