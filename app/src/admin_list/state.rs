//! State for the generic admin list view.

use boxoffice_domain::page::PageInfo;
use boxoffice_domain::query::AdminQuery;

/// Identifier of one issued list request, monotonically increasing within
/// the owning view. The view is the sole issuer, so a plain counter is
/// enough to decide which in-flight request is the latest.
pub type RequestId = u64;

/// State of one admin list view.
#[derive(Clone, Debug)]
pub struct ListState<T, F> {
    /// The query this view currently renders.
    pub query: AdminQuery<F>,
    /// Last successfully loaded page of items. Kept intact across failed
    /// refreshes so an error never blanks the table.
    pub items: Vec<T>,
    /// Pagination metadata of the last successful load.
    pub page_info: Option<PageInfo>,
    /// A request is in flight.
    pub loading: bool,
    /// User-facing message of the most recent failure, if any.
    pub error: Option<String>,
    /// At least one response (success or failure) has been applied.
    pub loaded_once: bool,
    next_request: RequestId,
    current_request: Option<RequestId>,
}

impl<T, F: Default> Default for ListState<T, F> {
    fn default() -> Self {
        Self {
            query: AdminQuery::default(),
            items: Vec::new(),
            page_info: None,
            loading: false,
            error: None,
            loaded_once: false,
            next_request: 0,
            current_request: None,
        }
    }
}

impl<T, F> ListState<T, F> {
    /// Allocate the id for a new request and mark it as the latest one.
    pub(crate) fn issue_request(&mut self) -> RequestId {
        self.next_request += 1;
        self.current_request = Some(self.next_request);
        self.next_request
    }

    /// Whether `request` is the latest issued request.
    pub(crate) fn is_current(&self, request: RequestId) -> bool {
        self.current_request == Some(request)
    }

    /// Id of the in-flight request, if one is outstanding.
    #[must_use]
    pub const fn current_request(&self) -> Option<RequestId> {
        self.current_request
    }

    pub(crate) fn settle(&mut self) {
        self.current_request = None;
        self.loading = false;
        self.loaded_once = true;
    }

    /// The view has loaded and holds no rows: render the explicit empty
    /// state rather than a bare table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded_once && !self.loading && self.items.is_empty()
    }
}
