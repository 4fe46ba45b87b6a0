//! Actions for the booking flow.

use super::state::BookingDraft;
use boxoffice_domain::types::{Booking, Event, EventId, Ticket, TicketId};
use thiserror::Error;

/// Why a load failed, with not-found kept distinct so the view can render
/// its explicit not-found state with a recovery action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadFailure {
    /// The entity does not exist.
    #[error("Not found")]
    NotFound,
    /// Any other failure; the message is already user-facing.
    #[error("{0}")]
    Other(String),
}

/// Inputs to the booking flow.
#[derive(Debug, Clone)]
pub enum BookingAction {
    /// The booking page opened for an event/ticket pair; fetch both.
    ContextRequested {
        /// The event to book.
        event_id: EventId,
        /// The chosen ticket tier.
        ticket_id: TicketId,
    },

    /// Context fetch completed.
    ContextLoaded(Result<(Event, Ticket), LoadFailure>),

    /// The purchaser edited the form.
    DraftChanged(BookingDraft),

    /// The purchaser pressed submit; validate and, if clean, send.
    SubmitRequested,

    /// Submission completed; the error is already a user-facing message.
    SubmitFinished(Result<Booking, String>),

    /// The confirmation page opened for a reference code; look it up.
    ConfirmationRequested {
        /// Human-shareable booking reference code.
        reference: String,
    },

    /// Reference lookup completed.
    ConfirmationLoaded(Result<Booking, LoadFailure>),
}
