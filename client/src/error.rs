//! Error types for the ticketing API client.

use thiserror::Error;

/// Errors that can occur when talking to the ticketing API.
///
/// The variants mirror how views degrade: transport failures keep the
/// previous view state, server rejections surface their message verbatim,
/// `Unauthorized` invalidates the admin session, and `NotFound` renders an
/// explicit not-found state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL could not be parsed or cannot carry path segments.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The request never completed (connection, DNS, timeout).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with `success: false`; the message is shown to
    /// the user verbatim.
    #[error("{message}")]
    Rejected {
        /// Server-provided failure message.
        message: String,
    },

    /// Bearer token missing, expired, or invalid.
    #[error("Unauthorized - admin session is not valid")]
    Unauthorized,

    /// The requested entity does not exist.
    #[error("Resource not found")]
    NotFound,

    /// The response body did not match the expected shape.
    #[error("Response parsing failed: {0}")]
    Decode(String),

    /// Any other HTTP failure status.
    #[error("API error (status {status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as received.
        message: String,
    },
}

impl ApiError {
    /// The message a view should surface for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message } => message.clone(),
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::NotFound => "The requested item could not be found.".to_string(),
            ApiError::Transport(_)
            | ApiError::Decode(_)
            | ApiError::Status { .. }
            | ApiError::InvalidBaseUrl(_) => "Unable to load data. Please try again.".to_string(),
        }
    }
}
