//! Ticketing API client implementation.

use crate::envelope::{Envelope, ListEnvelope};
use crate::error::ApiError;
use boxoffice_domain::page::Paginated;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Ticketing API client.
///
/// Cheap to clone; clones share the underlying connection pool. The token,
/// if present, is attached as a bearer credential to every request;
/// admin-scoped endpoints require it, public endpoints ignore it.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create an unauthenticated client for a base URL such as
    /// `https://api.example.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the URL does not parse or
    /// cannot carry path segments.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{base_url} cannot carry path segments"
            )));
        }
        Ok(Self {
            http: Client::new(),
            base_url: parsed,
            token: None,
        })
    }

    /// A clone of this client that authenticates with `token`.
    #[must_use]
    pub fn authorized(&self, token: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: Some(token.into()),
        }
    }

    /// Whether this client carries a bearer token.
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        self.token.is_some()
    }

    /// Build a URL under the base, percent-encoding each path segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Build a URL with query pairs appended.
    pub(crate) fn endpoint_with_query(
        &self,
        segments: &[&str],
        pairs: &[(String, String)],
    ) -> Url {
        let mut url = self.endpoint(segments);
        url.query_pairs_mut()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        url
    }

    fn attach_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        self.attach_auth(builder)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// GET a `{success, data}` envelope and unwrap the payload.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(url = %url, "GET");
        let response = self.send(self.http.get(url)).await?;
        require_data(parse_envelope(response).await?)
    }

    /// GET a `{success, data}` envelope whose payload may be absent.
    pub(crate) async fn get_optional_data<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<Option<T>, ApiError> {
        tracing::debug!(url = %url, "GET");
        let response = self.send(self.http.get(url)).await?;
        let envelope: Envelope<T> = parse_envelope(response).await?;
        if envelope.success {
            Ok(envelope.data)
        } else {
            Err(rejection(envelope.message))
        }
    }

    /// GET a `{success, data, pagination}` envelope into a [`Paginated`].
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<Paginated<T>, ApiError> {
        tracing::debug!(url = %url, "GET");
        let response = self.send(self.http.get(url)).await?;
        let envelope: ListEnvelope<T> = parse_body(response).await?;
        if envelope.success {
            Ok(Paginated {
                items: envelope.data,
                page: envelope.pagination,
            })
        } else {
            Err(rejection(envelope.message))
        }
    }

    /// POST a JSON body and unwrap the response payload.
    pub(crate) async fn post_data<B, T>(&self, url: Url, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!(url = %url, "POST");
        let response = self.send(self.http.post(url).json(body)).await?;
        require_data(parse_envelope(response).await?)
    }

    /// PUT a JSON body and unwrap the response payload.
    pub(crate) async fn put_data<B, T>(&self, url: Url, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!(url = %url, "PUT");
        let response = self.send(self.http.put(url).json(body)).await?;
        require_data(parse_envelope(response).await?)
    }

    /// DELETE and return the acknowledgement message.
    pub(crate) async fn delete_ack(&self, url: Url) -> Result<String, ApiError> {
        tracing::debug!(url = %url, "DELETE");
        let response = self.send(self.http.delete(url)).await?;
        let envelope: Envelope<serde_json::Value> = parse_envelope(response).await?;
        if envelope.success {
            Ok(envelope.message.unwrap_or_default())
        } else {
            Err(rejection(envelope.message))
        }
    }

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }
}

/// Map an HTTP response to a typed envelope, converting failure statuses
/// into the error taxonomy first.
pub(crate) async fn parse_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<Envelope<T>, ApiError> {
    parse_body(response).await
}

async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    match response.status() {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        status if status.is_success() => {
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
        },
        status => {
            let body = response.text().await.unwrap_or_default();
            // Prefer the server's own failure message when the body carries
            // the standard envelope.
            if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
                if let Some(message) = envelope.message {
                    return Err(ApiError::Rejected { message });
                }
            }
            Err(ApiError::Status {
                status: status.as_u16(),
                message: body,
            })
        },
    }
}

pub(crate) fn rejection(message: Option<String>) -> ApiError {
    ApiError::Rejected {
        message: message.unwrap_or_else(|| "The request was rejected.".to_string()),
    }
}

fn require_data<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    if !envelope.success {
        return Err(rejection(envelope.message));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response data missing".to_string()))
}
