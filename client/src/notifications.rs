//! Notification banner endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use boxoffice_domain::types::{Notification, NotificationId, PublishStatus};
use serde::Serialize;

/// Payload for creating a notification banner.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    /// Banner message text.
    pub message: String,
    /// Public visibility; server defaults apply when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
}

/// Partial payload for updating a notification banner.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotification {
    /// New message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// New visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
}

impl ApiClient {
    /// The currently active banner, if the server has one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn active_notification(&self) -> Result<Option<Notification>, ApiError> {
        self.get_optional_data(self.endpoint(&["api", "notifications"]))
            .await
    }

    /// All banners, for the admin console.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without a valid session token.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_data(self.endpoint(&["api", "notifications", "all"]))
            .await
    }

    /// Create a banner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn create_notification(
        &self,
        payload: &NewNotification,
    ) -> Result<Notification, ApiError> {
        self.post_data(self.endpoint(&["api", "notifications"]), payload)
            .await
    }

    /// Update a banner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn update_notification(
        &self,
        id: &NotificationId,
        payload: &UpdateNotification,
    ) -> Result<Notification, ApiError> {
        self.put_data(
            self.endpoint(&["api", "notifications", id.as_str()]),
            payload,
        )
        .await
    }

    /// Delete a banner; returns the server acknowledgement message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn delete_notification(&self, id: &NotificationId) -> Result<String, ApiError> {
        self.delete_ack(self.endpoint(&["api", "notifications", id.as_str()]))
            .await
    }
}
