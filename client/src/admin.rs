//! Admin session and profile endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use boxoffice_domain::types::Admin;
use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    /// Admin login email.
    pub email: String,
    /// Admin password.
    pub password: String,
}

/// Successful login payload: the bearer token plus the admin profile.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginData {
    /// Bearer token for subsequent admin requests.
    pub token: String,
    /// The authenticated admin's profile.
    pub admin: Admin,
}

/// Partial payload for updating the admin profile.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateProfile {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New login email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ApiClient {
    /// Authenticate an admin. On success the returned token should be
    /// persisted in the session store and attached via
    /// [`ApiClient::authorized`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the server's message for bad
    /// credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginData, ApiError> {
        self.post_data(self.endpoint(&["api", "admin", "login"]), request)
            .await
    }

    /// Fetch the authenticated admin's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without a valid session token.
    pub async fn admin_profile(&self) -> Result<Admin, ApiError> {
        self.get_data(self.endpoint(&["api", "admin", "profile"]))
            .await
    }

    /// Update the authenticated admin's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without a valid session token.
    pub async fn update_admin_profile(&self, payload: &UpdateProfile) -> Result<Admin, ApiError> {
        self.put_data(self.endpoint(&["api", "admin", "profile"]), payload)
            .await
    }
}
