//! Reducer-level tests for the admin list view.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code

use super::*;
use boxoffice_client::ApiError;
use boxoffice_core::effect::Effect;
use boxoffice_core::reducer::Reducer;
use boxoffice_domain::page::{PageInfo, Paginated};
use boxoffice_domain::query::{AdminQuery, EventFilter, SortOrder};
use boxoffice_domain::types::{Event, EventId, PublishStatus};
use chrono::{TimeZone, Utc};
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;

struct StubGateway;

impl ListGateway<Event, EventFilter> for StubGateway {
    fn fetch_page(
        &self,
        _query: AdminQuery<EventFilter>,
    ) -> BoxFuture<'static, Result<Paginated<Event>, ApiError>> {
        Box::pin(async { Ok(Paginated::empty(10)) })
    }
}

fn env() -> ListEnvironment<Event, EventFilter> {
    ListEnvironment::new(Arc::new(StubGateway)).with_debounce(Duration::ZERO)
}

fn event(id: &str) -> Event {
    Event {
        id: EventId::new(id),
        title: format!("Event {id}"),
        description: None,
        date: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).single().unwrap(),
        venue: None,
        image_url: None,
        status: PublishStatus::Active,
        created_at: None,
        updated_at: None,
    }
}

fn page_of(ids: &[&str]) -> Paginated<Event> {
    Paginated {
        items: ids.iter().map(|id| event(id)).collect(),
        page: PageInfo::compute(1, ids.len() as u64, 10),
    }
}

fn ids(state: &EventListState) -> Vec<String> {
    state.items.iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn view_appeared_issues_a_fetch_and_marks_loading() {
    let reducer = EventListReducer::new();
    let mut state = EventListState::default();

    let effects = reducer.reduce(&mut state, ListAction::ViewAppeared, &env());

    assert!(state.loading);
    assert!(state.current_request().is_some());
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::Cancellable { id, .. } => assert_eq!(id.as_str(), PAGE_FETCH),
        other => panic!("expected cancellable fetch, got {other:?}"),
    }
}

#[test]
fn search_change_resets_page_and_opens_debounce_window() {
    let reducer = EventListReducer::new();
    let mut state = EventListState::default();
    state.query.set_page(4);

    let effects = reducer.reduce(
        &mut state,
        ListAction::SearchChanged("gold".to_string()),
        &env(),
    );

    assert_eq!(state.query.page, 1);
    assert_eq!(state.query.search.as_deref(), Some("gold"));
    match &effects[0] {
        Effect::Cancellable { id, effect } => {
            assert_eq!(id.as_str(), SEARCH_DEBOUNCE);
            assert!(matches!(**effect, Effect::Delay { .. }));
        },
        other => panic!("expected debounce delay, got {other:?}"),
    }
}

#[test]
fn page_change_keeps_the_rest_of_the_query() {
    let reducer = EventListReducer::new();
    let mut state = EventListState::default();
    state.query.set_search("summit");
    state.query.set_sort("date", SortOrder::Desc);

    reducer.reduce(&mut state, ListAction::PageRequested(3), &env());

    assert_eq!(state.query.page, 3);
    assert_eq!(state.query.search.as_deref(), Some("summit"));
    assert_eq!(state.query.sort_by.as_deref(), Some("date"));
}

#[test]
fn stale_response_is_discarded_and_latest_wins() {
    let reducer = EventListReducer::new();
    let mut state = EventListState::default();
    let env = env();

    // "gold" issued first.
    reducer.reduce(
        &mut state,
        ListAction::SearchChanged("gold".to_string()),
        &env,
    );
    reducer.reduce(&mut state, ListAction::SearchDebounceElapsed, &env);
    let gold_request = state.current_request().expect("gold request issued");

    // Superseded by "silver" before "gold" resolves.
    reducer.reduce(
        &mut state,
        ListAction::SearchChanged("silver".to_string()),
        &env,
    );
    reducer.reduce(&mut state, ListAction::SearchDebounceElapsed, &env);
    let silver_request = state.current_request().expect("silver request issued");
    assert_ne!(gold_request, silver_request);

    // The late "gold" response must not render.
    reducer.reduce(
        &mut state,
        ListAction::ResponseArrived {
            request: gold_request,
            result: Ok(page_of(&["gold-1", "gold-2"])),
        },
        &env,
    );
    assert!(state.items.is_empty());
    assert!(state.loading);

    // The "silver" response does.
    reducer.reduce(
        &mut state,
        ListAction::ResponseArrived {
            request: silver_request,
            result: Ok(page_of(&["silver-1"])),
        },
        &env,
    );
    assert_eq!(ids(&state), vec!["silver-1"]);
    assert!(!state.loading);
}

#[test]
fn failed_refresh_keeps_previous_rows_and_sets_error() {
    let reducer = EventListReducer::new();
    let mut state = EventListState::default();
    let env = env();

    reducer.reduce(&mut state, ListAction::ViewAppeared, &env);
    let first = state.current_request().unwrap();
    reducer.reduce(
        &mut state,
        ListAction::ResponseArrived {
            request: first,
            result: Ok(page_of(&["e1", "e2"])),
        },
        &env,
    );
    assert_eq!(ids(&state), vec!["e1", "e2"]);

    reducer.reduce(&mut state, ListAction::Refresh, &env);
    assert!(state.error.is_none());
    let second = state.current_request().unwrap();
    reducer.reduce(
        &mut state,
        ListAction::ResponseArrived {
            request: second,
            result: Err("Unable to load data. Please try again.".to_string()),
        },
        &env,
    );

    assert_eq!(ids(&state), vec!["e1", "e2"]);
    assert_eq!(
        state.error.as_deref(),
        Some("Unable to load data. Please try again.")
    );
    assert!(!state.loading);
}

#[test]
fn empty_state_requires_a_completed_load() {
    let reducer = EventListReducer::new();
    let mut state = EventListState::default();
    let env = env();

    assert!(!state.is_empty());

    reducer.reduce(&mut state, ListAction::ViewAppeared, &env);
    assert!(!state.is_empty());

    let request = state.current_request().unwrap();
    reducer.reduce(
        &mut state,
        ListAction::ResponseArrived {
            request,
            result: Ok(page_of(&[])),
        },
        &env,
    );
    assert!(state.is_empty());
}

#[test]
fn sort_and_filter_changes_reset_page_and_fetch_immediately() {
    let reducer = EventListReducer::new();
    let mut state = EventListState::default();
    let env = env();
    state.query.set_page(5);

    let effects = reducer.reduce(
        &mut state,
        ListAction::SortChanged {
            field: "date".to_string(),
            order: SortOrder::Asc,
        },
        &env,
    );
    assert_eq!(state.query.page, 1);
    assert!(matches!(&effects[0], Effect::Cancellable { id, .. } if id.as_str() == PAGE_FETCH));

    state.query.set_page(2);
    let effects = reducer.reduce(
        &mut state,
        ListAction::FilterChanged(EventFilter {
            status: Some(PublishStatus::Inactive),
            ..EventFilter::default()
        }),
        &env,
    );
    assert_eq!(state.query.page, 1);
    assert!(matches!(&effects[0], Effect::Cancellable { id, .. } if id.as_str() == PAGE_FETCH));
}
