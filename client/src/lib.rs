//! # Boxoffice Client
//!
//! Typed HTTP client for the remote ticketing API.
//!
//! The API is the single owner of all persistent state; this crate only
//! issues reads and mutation requests and maps the wire envelopes
//! (`{success, message?, data?}` and `{success, data, pagination}`) into
//! domain types and a typed error taxonomy.
//!
//! Admin-scoped endpoints require a bearer token; use
//! [`ApiClient::authorized`] to derive an authenticated client from a
//! session token.

mod admin;
mod bookings;
mod client;
mod envelope;
mod error;
mod events;
mod images;
mod notifications;
mod tickets;

pub use admin::{LoginData, LoginRequest, UpdateProfile};
pub use bookings::NewBooking;
pub use client::ApiClient;
pub use envelope::{Envelope, ListEnvelope};
pub use error::ApiError;
pub use events::{NewEvent, UpdateEvent};
pub use images::UploadedImage;
pub use notifications::{NewNotification, UpdateNotification};
pub use tickets::{NewTicket, UpdateTicket};
