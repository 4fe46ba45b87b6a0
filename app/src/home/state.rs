//! State for the landing view.

use boxoffice_domain::countdown::TimeRemaining;
use boxoffice_domain::types::Event;

/// State of the landing view.
#[derive(Clone, Debug, Default)]
pub struct HomeState {
    /// Active events, sorted ascending by date (soonest first).
    pub events: Vec<Event>,
    /// The featured event, when any active event exists.
    pub featured: Option<Event>,
    /// Countdown to the featured event; `None` when nothing is featured,
    /// all zeros once the event has started.
    pub remaining: Option<TimeRemaining>,
    /// The event list is being fetched.
    pub loading: bool,
    /// User-facing message of the most recent failure, if any.
    pub error: Option<String>,
}

impl HomeState {
    /// Whether the countdown card should render.
    #[must_use]
    pub const fn shows_countdown(&self) -> bool {
        self.featured.is_some() && self.remaining.is_some()
    }
}
