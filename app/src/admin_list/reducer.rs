//! Reducer for the generic admin list view.

use super::actions::ListAction;
use super::environment::ListEnvironment;
use super::state::ListState;
use boxoffice_core::effect::Effect;
use boxoffice_core::reducer::{Effects, Reducer};
use boxoffice_domain::query::ResourceFilter;
use smallvec::smallvec;
use std::marker::PhantomData;

/// Cancellation id of the search debounce window.
pub const SEARCH_DEBOUNCE: &str = "admin-list.search-debounce";

/// Cancellation id of the in-flight page fetch. A newly issued fetch
/// replaces (aborts) the previous one under this id.
pub const PAGE_FETCH: &str = "admin-list.fetch";

/// Reducer for one admin list view, generic over item and filter types.
pub struct ListReducer<T, F> {
    _marker: PhantomData<fn(T, F)>,
}

impl<T, F> ListReducer<T, F> {
    /// Create a new list reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, F> Default for ListReducer<T, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> ListReducer<T, F>
where
    T: Send + 'static,
    F: ResourceFilter + Clone + Send + 'static,
{
    /// Issue a fetch for the current query.
    ///
    /// Allocates the next request id (making every earlier response stale)
    /// and starts the fetch under [`PAGE_FETCH`] so a still-running
    /// predecessor is aborted.
    fn load(
        state: &mut ListState<T, F>,
        env: &ListEnvironment<T, F>,
    ) -> Effects<ListAction<T, F>> {
        state.loading = true;
        state.error = None;
        let request = state.issue_request();
        let gateway = env.gateway();
        let query = state.query.clone();

        tracing::debug!(request, page = query.page, "issuing list query");

        smallvec![Effect::cancellable(PAGE_FETCH, async move {
            let result = gateway
                .fetch_page(query)
                .await
                .map_err(|e| e.user_message());
            Some(ListAction::ResponseArrived { request, result })
        })]
    }
}

impl<T, F> Reducer for ListReducer<T, F>
where
    T: Send + 'static,
    F: ResourceFilter + Clone + Send + 'static,
{
    type State = ListState<T, F>;
    type Action = ListAction<T, F>;
    type Environment = ListEnvironment<T, F>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            ListAction::ViewAppeared | ListAction::Refresh => Self::load(state, env),

            ListAction::SearchChanged(search) => {
                state.query.set_search(search);
                smallvec![Effect::cancellable_delay(
                    SEARCH_DEBOUNCE,
                    env.debounce(),
                    ListAction::SearchDebounceElapsed,
                )]
            },

            ListAction::SearchDebounceElapsed => Self::load(state, env),

            ListAction::SortChanged { field, order } => {
                state.query.set_sort(field, order);
                Self::load(state, env)
            },

            ListAction::FilterChanged(filter) => {
                state.query.set_filter(filter);
                Self::load(state, env)
            },

            ListAction::PageRequested(page) => {
                state.query.set_page(page);
                Self::load(state, env)
            },

            ListAction::ResponseArrived { request, result } => {
                if !state.is_current(request) {
                    tracing::debug!(request, "discarding stale list response");
                    return smallvec![];
                }
                state.settle();
                match result {
                    Ok(page) => {
                        state.items = page.items;
                        state.page_info = Some(page.page);
                        state.error = None;
                    },
                    Err(message) => {
                        // Previously rendered rows stay intact.
                        state.error = Some(message);
                    },
                }
                smallvec![]
            },
        }
    }
}
