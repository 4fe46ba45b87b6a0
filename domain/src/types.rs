//! Domain entities as consumed from the remote ticketing API.
//!
//! Wire shape notes: the API uses camelCase field names, `_id` for
//! identifiers, and RFC 3339 timestamps. Entities are read-owned here; all
//! mutation happens through the API and is reconciled by refetch.

use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a server-assigned identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id! {
    /// Server-assigned identifier of an [`Event`].
    EventId
}

string_id! {
    /// Server-assigned identifier of a [`Ticket`].
    TicketId
}

string_id! {
    /// Server-assigned identifier of a [`Booking`].
    BookingId
}

string_id! {
    /// Server-assigned identifier of a [`Notification`].
    NotificationId
}

string_id! {
    /// Server-assigned identifier of an [`Admin`].
    AdminId
}

// ============================================================================
// Statuses
// ============================================================================

/// Publish-state flag on events, tickets, and notifications.
///
/// Controls public visibility only; it is independent of any scheduling
/// logic (an `Active` event may be in the past).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    /// Visible to the public UI.
    Active,
    /// Hidden from the public UI.
    Inactive,
}

impl PublishStatus {
    /// `true` for [`PublishStatus::Active`].
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Lifecycle status of a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created, payment not yet confirmed.
    Pending,
    /// Payment confirmed; the booking is valid for entry.
    Confirmed,
    /// Cancelled; not valid for entry.
    Cancelled,
}

// ============================================================================
// Entities
// ============================================================================

/// A public event listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// Optional long-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the event occurs. Ordering and featured-event selection compare
    /// this instant's millisecond value.
    pub date: DateTime<Utc>,
    /// Optional venue name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Optional hero image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Public visibility.
    pub status: PublishStatus,
    /// Creation audit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update audit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A ticket tier for an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: TicketId,
    /// Owning event.
    pub event_id: EventId,
    /// Tier name ("Regular", "VIP", ...).
    pub name: String,
    /// Optional tier description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price: Money,
    /// Total quantity issued.
    pub quantity: u32,
    /// Quantity still available. Invariant: `available_quantity <= quantity`.
    pub available_quantity: u32,
    /// Public visibility.
    pub status: PublishStatus,
    /// Creation audit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update audit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Threshold at or below which remaining stock is called out in the UI.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

impl Ticket {
    /// No remaining quantity. Sold-out tickets stay visible but their
    /// call-to-action is disabled and booking attempts are rejected.
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.available_quantity == 0
    }

    /// Remaining quantity is positive but at or below
    /// [`LOW_STOCK_THRESHOLD`].
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.available_quantity > 0 && self.available_quantity <= LOW_STOCK_THRESHOLD
    }
}

/// Either a bare identifier or the API-expanded object it refers to.
///
/// List endpoints return bare ids; detail endpoints may expand the
/// reference in place. Modeling the union explicitly keeps the
/// type-narrowing in one place instead of scattered across views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    /// Bare identifier.
    Id(String),
    /// Fully populated object.
    Expanded(T),
}

/// Entity with a server-assigned string identifier, for uniform access
/// through [`Reference`].
pub trait Identified {
    /// The identifier as a string slice.
    fn ident(&self) -> &str;
}

impl Identified for Event {
    fn ident(&self) -> &str {
        self.id.as_str()
    }
}

impl Identified for Ticket {
    fn ident(&self) -> &str {
        self.id.as_str()
    }
}

impl<T: Identified> Reference<T> {
    /// The referenced identifier, regardless of expansion.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Expanded(value) => value.ident(),
        }
    }

    /// The expanded object, if the API populated it.
    #[must_use]
    pub const fn expanded(&self) -> Option<&T> {
        match self {
            Reference::Id(_) => None,
            Reference::Expanded(value) => Some(value),
        }
    }
}

/// A customer's ticket purchase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: BookingId,
    /// The booked event, bare or expanded depending on the endpoint.
    pub event_id: Reference<Event>,
    /// The booked ticket tier, bare or expanded depending on the endpoint.
    pub ticket_id: Reference<Ticket>,
    /// Payment transaction identifier (owned by the payment service).
    pub transaction_id: String,
    /// Purchaser email.
    pub email: String,
    /// Purchaser full name.
    pub full_name: String,
    /// Purchaser phone number.
    pub phone_number: String,
    /// Number of tickets purchased.
    pub quantity: u32,
    /// Total charged, in minor units. Equals `ticket.price × quantity` at
    /// creation time; enforced by the API.
    pub total_amount: Money,
    /// Booking lifecycle status.
    pub status: BookingStatus,
    /// Payload rendered as a QR code on the confirmation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_data: Option<String>,
    /// Human-shareable reference code used for customer-facing lookup,
    /// distinct from the internal identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Creation audit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update audit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A site-wide announcement banner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: NotificationId,
    /// Banner message text.
    pub message: String,
    /// Public visibility; the UI surfaces at most one active banner.
    pub status: PublishStatus,
    /// Creation audit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update audit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An administrator account profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: AdminId,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role label (authorization semantics live with the API).
    pub role: String,
    /// Creation audit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update audit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
