//! Public-visibility filtering and featured-event selection.

use crate::types::{Event, Notification, Ticket};
use chrono::{DateTime, Utc};

/// Events eligible for public display: active ones, input order preserved.
///
/// Pure and total; idempotent over its own output.
#[must_use]
pub fn eligible_events(events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.status.is_active())
        .cloned()
        .collect()
}

/// The single event to feature, given the current instant.
///
/// Prefers the soonest active event at or after `now` (lookahead); if every
/// active event is in the past, falls back to the most recently elapsed one,
/// so the UI is never empty while any active event exists.
///
/// Ties on equal dates are deterministic: among future candidates the first
/// in input order wins, among past candidates the last.
#[must_use]
pub fn upcoming_event(events: &[Event], now: DateTime<Utc>) -> Option<&Event> {
    let mut next_future: Option<&Event> = None;
    let mut latest_past: Option<&Event> = None;

    for event in events.iter().filter(|e| e.status.is_active()) {
        if event.date >= now {
            if next_future.is_none_or(|best| event.date < best.date) {
                next_future = Some(event);
            }
        } else if latest_past.is_none_or(|best| event.date >= best.date) {
            latest_past = Some(event);
        }
    }

    next_future.or(latest_past)
}

/// Ticket tiers shown on the booking page: active ones, input order
/// preserved.
///
/// Sold-out tiers are deliberately kept: they stay visible for
/// transparency, with [`Ticket::is_sold_out`] driving the disabled
/// call-to-action. Rejecting booking attempts against them is the booking
/// flow's job.
#[must_use]
pub fn bookable_tickets(tickets: &[Ticket]) -> Vec<Ticket> {
    tickets
        .iter()
        .filter(|ticket| ticket.status.is_active())
        .cloned()
        .collect()
}

/// The banner to surface: the first active notification, if any.
#[must_use]
pub fn active_banner(notifications: &[Notification]) -> Option<&Notification> {
    notifications.iter().find(|n| n.status.is_active())
}
