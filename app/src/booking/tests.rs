//! Reducer-level tests for the booking flow.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code

use super::*;
use boxoffice_client::{ApiError, NewBooking};
use boxoffice_core::effect::Effect;
use boxoffice_core::reducer::Reducer;
use boxoffice_domain::money::Money;
use boxoffice_domain::types::{
    Booking, BookingId, BookingStatus, Event, EventId, PublishStatus, Reference, Ticket, TicketId,
};
use chrono::{TimeZone, Utc};
use futures::future::BoxFuture;
use std::sync::Arc;

struct UnusedGateway;

impl BookingGateway for UnusedGateway {
    fn fetch_event(&self, _id: EventId) -> BoxFuture<'static, Result<Event, ApiError>> {
        Box::pin(async { Err(ApiError::NotFound) })
    }
    fn fetch_ticket(&self, _id: TicketId) -> BoxFuture<'static, Result<Ticket, ApiError>> {
        Box::pin(async { Err(ApiError::NotFound) })
    }
    fn submit(&self, _booking: NewBooking) -> BoxFuture<'static, Result<Booking, ApiError>> {
        Box::pin(async { Err(ApiError::NotFound) })
    }
    fn find_by_reference(
        &self,
        _reference: String,
    ) -> BoxFuture<'static, Result<Booking, ApiError>> {
        Box::pin(async { Err(ApiError::NotFound) })
    }
}

fn env() -> BookingEnvironment {
    BookingEnvironment::new(Arc::new(UnusedGateway))
}

fn ticket(available: u32) -> Ticket {
    Ticket {
        id: TicketId::new("t1"),
        event_id: EventId::new("e1"),
        name: "Regular".to_string(),
        description: None,
        price: Money::from_minor(500_000),
        quantity: 100,
        available_quantity: available,
        status: PublishStatus::Active,
        created_at: None,
        updated_at: None,
    }
}

fn event() -> Event {
    Event {
        id: EventId::new("e1"),
        title: "Innovation Summit".to_string(),
        description: None,
        date: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).single().unwrap(),
        venue: None,
        image_url: None,
        status: PublishStatus::Active,
        created_at: None,
        updated_at: None,
    }
}

fn booking() -> Booking {
    Booking {
        id: BookingId::new("b1"),
        event_id: Reference::Id("e1".to_string()),
        ticket_id: Reference::Id("t1".to_string()),
        transaction_id: "tx-1".to_string(),
        email: "ada@example.com".to_string(),
        full_name: "Ada Obi".to_string(),
        phone_number: "+2348012345678".to_string(),
        quantity: 2,
        total_amount: Money::from_minor(1_000_000),
        status: BookingStatus::Pending,
        qr_code_data: None,
        reference: Some("BKG-0001".to_string()),
        created_at: None,
        updated_at: None,
    }
}

fn valid_draft() -> BookingDraft {
    BookingDraft {
        full_name: "Ada Obi".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: "+2348012345678".to_string(),
        quantity: 2,
    }
}

fn loaded_state(available: u32) -> BookingState {
    let mut state = BookingState::default();
    BookingReducer::new().reduce(
        &mut state,
        BookingAction::ContextLoaded(Ok((event(), ticket(available)))),
        &env(),
    );
    state
}

#[test]
fn context_load_populates_event_and_ticket() {
    let state = loaded_state(10);
    assert_eq!(state.event.as_ref().map(|e| e.id.as_str()), Some("e1"));
    assert_eq!(state.ticket.as_ref().map(|t| t.id.as_str()), Some("t1"));
    assert!(!state.loading);
}

#[test]
fn missing_context_renders_not_found_instead_of_crashing() {
    let mut state = BookingState::default();
    BookingReducer::new().reduce(
        &mut state,
        BookingAction::ContextLoaded(Err(LoadFailure::NotFound)),
        &env(),
    );
    assert!(state.not_found);
    assert!(state.error.is_none());
}

#[test]
fn invalid_draft_blocks_submission_without_an_effect() {
    let mut state = loaded_state(10);
    state.draft = BookingDraft::default();

    let effects = BookingReducer::new().reduce(&mut state, BookingAction::SubmitRequested, &env());

    assert!(effects.is_empty());
    assert!(!state.submitting);
    assert!(state.issues.contains(&ValidationIssue::MissingFullName));
}

#[test]
fn sold_out_ticket_rejects_submission() {
    let mut state = loaded_state(0);
    state.draft = valid_draft();

    let effects = BookingReducer::new().reduce(&mut state, BookingAction::SubmitRequested, &env());

    assert!(effects.is_empty());
    assert_eq!(state.issues, vec![ValidationIssue::TicketSoldOut]);
}

#[test]
fn valid_draft_submits() {
    let mut state = loaded_state(10);
    state.draft = valid_draft();

    let effects = BookingReducer::new().reduce(&mut state, BookingAction::SubmitRequested, &env());

    assert!(state.submitting);
    assert!(state.issues.is_empty());
    assert!(matches!(&effects[0], Effect::Future(_)));
}

#[test]
fn successful_submission_stores_the_confirmation() {
    let mut state = loaded_state(10);
    BookingReducer::new().reduce(
        &mut state,
        BookingAction::SubmitFinished(Ok(booking())),
        &env(),
    );
    assert!(!state.submitting);
    assert_eq!(
        state.confirmation.as_ref().and_then(|b| b.reference.as_deref()),
        Some("BKG-0001")
    );
}

#[test]
fn rejected_submission_surfaces_the_server_message() {
    let mut state = loaded_state(10);
    state.submitting = true;
    BookingReducer::new().reduce(
        &mut state,
        BookingAction::SubmitFinished(Err("Only 2 tickets remaining".to_string())),
        &env(),
    );
    assert!(!state.submitting);
    assert_eq!(state.error.as_deref(), Some("Only 2 tickets remaining"));
    assert!(state.confirmation.is_none());
}

#[test]
fn draft_edits_clear_stale_validation_feedback() {
    let mut state = loaded_state(10);
    state.issues = vec![ValidationIssue::MissingEmail];

    BookingReducer::new().reduce(
        &mut state,
        BookingAction::DraftChanged(valid_draft()),
        &env(),
    );
    assert!(state.issues.is_empty());
}

#[test]
fn unknown_reference_renders_not_found() {
    let mut state = BookingState::default();
    BookingReducer::new().reduce(
        &mut state,
        BookingAction::ConfirmationLoaded(Err(LoadFailure::NotFound)),
        &env(),
    );
    assert!(state.not_found);
    assert!(state.confirmation.is_none());
}

#[test]
fn order_total_tracks_draft_quantity() {
    let mut state = loaded_state(10);
    state.draft = valid_draft();
    assert_eq!(state.order_total(), Some(Money::from_minor(1_000_000)));

    state.draft.quantity = 3;
    assert_eq!(state.order_total(), Some(Money::from_minor(1_500_000)));
}
