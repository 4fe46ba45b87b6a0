//! Generic admin list view.
//!
//! Every admin resource list (events, tickets, bookings) behaves the same
//! way: it owns an [`AdminQuery`], re-issues it on any search/filter/sort
//! change (resetting to page 1), pages through results, and renders
//! loading/error/empty states. The reducer is generic over the item type
//! and the resource filter; concrete aliases below pin it to each
//! resource.
//!
//! Two layers guard against out-of-order responses:
//! - each issued request carries a monotonically increasing id, and a
//!   response is applied only if its id is the latest issued one;
//! - the fetch effect runs under a fixed [`EffectId`], so issuing a new
//!   fetch aborts the previous one when it is still in flight.

mod actions;
mod environment;
mod reducer;
mod state;

#[cfg(test)]
mod tests;

pub use actions::ListAction;
pub use environment::{ListEnvironment, ListGateway};
pub use reducer::{ListReducer, PAGE_FETCH, SEARCH_DEBOUNCE};
pub use state::{ListState, RequestId};

use boxoffice_domain::query::{BookingFilter, EventFilter, TicketFilter};
use boxoffice_domain::types::{Booking, Event, Ticket};

/// Admin events list state.
pub type EventListState = ListState<Event, EventFilter>;
/// Admin events list reducer.
pub type EventListReducer = ListReducer<Event, EventFilter>;

/// Admin tickets list state.
pub type TicketListState = ListState<Ticket, TicketFilter>;
/// Admin tickets list reducer.
pub type TicketListReducer = ListReducer<Ticket, TicketFilter>;

/// Admin bookings list state.
pub type BookingListState = ListState<Booking, BookingFilter>;
/// Admin bookings list reducer.
pub type BookingListReducer = ListReducer<Booking, BookingFilter>;
