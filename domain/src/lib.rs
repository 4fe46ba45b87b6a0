//! # Boxoffice Domain
//!
//! Entities and pure decision logic for the event-ticketing front-of-house:
//!
//! - [`types`]: events, tickets, bookings, notifications, and the
//!   id-or-expanded [`types::Reference`] union used by API expansions
//! - [`selection`]: which events/tickets are publicly visible and which
//!   single event is featured (lookahead with past fallback)
//! - [`countdown`]: decomposition of the time left until an event
//! - [`money`]: integer minor-unit currency storage and display
//! - [`dates`]: fail-soft timestamp rendering
//! - [`query`]: the admin list-query contract (search, filter, sort, page)
//! - [`page`]: pagination metadata and its boundary invariants
//!
//! Everything here is pure: no I/O, no clock access, no globals. Callers
//! pass `now` in explicitly, which keeps all of it trivially testable.

pub mod countdown;
pub mod dates;
pub mod money;
pub mod page;
pub mod query;
pub mod selection;
pub mod types;

pub use countdown::{TimeRemaining, time_remaining};
pub use money::Money;
pub use page::{PageInfo, Paginated};
pub use query::{AdminQuery, BookingFilter, EventFilter, ResourceFilter, SortOrder, TicketFilter};
pub use selection::{active_banner, bookable_tickets, eligible_events, upcoming_event};
pub use types::{
    Admin, AdminId, Booking, BookingId, BookingStatus, Event, EventId, Identified, Notification,
    NotificationId, PublishStatus, Reference, Ticket, TicketId,
};
