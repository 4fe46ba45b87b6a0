//! State for the booking flow.

use super::validate::ValidationIssue;
use boxoffice_domain::money::Money;
use boxoffice_domain::types::{Booking, Event, Ticket};

/// The purchaser's form draft. Transient; discarded on navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingDraft {
    /// Purchaser full name.
    pub full_name: String,
    /// Purchaser email.
    pub email: String,
    /// Purchaser phone number.
    pub phone_number: String,
    /// Number of tickets requested.
    pub quantity: u32,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            quantity: 1,
        }
    }
}

/// State of the booking flow.
#[derive(Clone, Debug, Default)]
pub struct BookingState {
    /// The event being booked, once context is loaded.
    pub event: Option<Event>,
    /// The chosen ticket tier, once context is loaded.
    pub ticket: Option<Ticket>,
    /// The purchaser's form draft.
    pub draft: BookingDraft,
    /// Validation issues from the last submission attempt.
    pub issues: Vec<ValidationIssue>,
    /// Context (event + ticket) is being fetched.
    pub loading: bool,
    /// A submission or lookup is in flight.
    pub submitting: bool,
    /// The confirmed booking, after submission or reference lookup.
    pub confirmation: Option<Booking>,
    /// The requested context or reference does not exist.
    pub not_found: bool,
    /// User-facing message of the most recent failure, if any.
    pub error: Option<String>,
}

impl BookingState {
    /// Order total for the current draft, when the ticket is known and the
    /// multiplication does not overflow.
    #[must_use]
    pub fn order_total(&self) -> Option<Money> {
        self.ticket
            .as_ref()
            .and_then(|ticket| ticket.price.total_for(self.draft.quantity))
    }
}
