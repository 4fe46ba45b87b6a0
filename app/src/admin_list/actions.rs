//! Actions for the generic admin list view.

use super::state::RequestId;
use boxoffice_domain::page::Paginated;
use boxoffice_domain::query::SortOrder;

/// Inputs to an admin list view.
#[derive(Debug, Clone)]
pub enum ListAction<T, F> {
    /// The view became visible; load with the current query.
    ViewAppeared,

    /// The free-text search field changed. Resets to page 1 and opens a
    /// debounce window before fetching.
    SearchChanged(String),

    /// The search debounce window elapsed; fetch now.
    SearchDebounceElapsed,

    /// A column sort was chosen. Resets to page 1 and fetches.
    SortChanged {
        /// Server-side field name to sort by.
        field: String,
        /// Sort direction.
        order: SortOrder,
    },

    /// The resource filter changed. Resets to page 1 and fetches.
    FilterChanged(F),

    /// A pagination control was used. Changes only the page and fetches.
    PageRequested(u32),

    /// Re-issue the current query unchanged (manual retry).
    Refresh,

    /// A fetch completed. Applied only if `request` is still the latest
    /// issued one; stale responses are discarded.
    ResponseArrived {
        /// Id of the request this response answers.
        request: RequestId,
        /// The page, or a user-facing failure message.
        result: Result<Paginated<T>, String>,
    },
}
