//! Image upload endpoints (event hero images).
//!
//! Images live on a third-party CDN behind the API; the client only ships
//! bytes up and receives the hosted URL back.

use crate::client::{ApiClient, parse_envelope, rejection};
use crate::error::ApiError;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Payload returned by a successful upload.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadedImage {
    /// Publicly served URL of the uploaded image.
    pub url: String,
}

impl ApiClient {
    /// Upload an image as multipart form data (field name `image`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the server's message when the
    /// file is refused (type, size).
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ApiError> {
        let url = self.endpoint(&["api", "images", "upload"]);
        tracing::debug!(url = %url, file_name, "POST multipart");

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("image", part);

        let response = self.send(self.http().post(url).multipart(form)).await?;
        let envelope = parse_envelope::<UploadedImage>(response).await?;
        if envelope.success {
            envelope
                .data
                .ok_or_else(|| ApiError::Decode("upload response missing url".to_string()))
        } else {
            Err(rejection(envelope.message))
        }
    }

    /// Delete an uploaded image by CDN file id, or by full URL when that is
    /// all the caller has. The value is percent-encoded into the path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, decode, or server failure.
    pub async fn delete_image(&self, id_or_url: &str) -> Result<String, ApiError> {
        self.delete_ack(self.endpoint(&["api", "images", "delete", id_or_url]))
            .await
    }
}
