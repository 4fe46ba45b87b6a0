//! Actions for the landing view.

use boxoffice_domain::types::Event;

/// Inputs to the landing view.
#[derive(Debug, Clone)]
pub enum HomeAction {
    /// The view became visible; fetch the public event list.
    ViewAppeared,

    /// The event fetch completed; the error is already a user-facing
    /// message.
    EventsLoaded(Result<Vec<Event>, String>),

    /// One countdown interval elapsed; recompute the remaining time.
    Tick,

    /// The view is being dismantled; stop the countdown.
    ViewDismissed,
}
