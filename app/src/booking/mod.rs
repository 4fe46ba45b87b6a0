//! Public booking flow.
//!
//! Loads the event/ticket context, validates the purchaser draft before
//! any network round-trip (required fields, email shape, quantity bounds,
//! sold-out rejection), submits the booking, and looks confirmations up by
//! their human-shareable reference code.

mod actions;
mod environment;
mod reducer;
mod state;
mod validate;

#[cfg(test)]
mod tests;

pub use actions::{BookingAction, LoadFailure};
pub use environment::{BookingEnvironment, BookingGateway};
pub use reducer::BookingReducer;
pub use state::{BookingDraft, BookingState};
pub use validate::{ValidationIssue, validate_draft};
