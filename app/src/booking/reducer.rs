//! Reducer for the booking flow.

use super::actions::{BookingAction, LoadFailure};
use super::environment::BookingEnvironment;
use super::state::BookingState;
use super::validate::{ValidationIssue, validate_draft};
use boxoffice_client::{ApiError, NewBooking};
use boxoffice_core::effect::Effect;
use boxoffice_core::reducer::{Effects, Reducer};
use smallvec::smallvec;

/// Reducer for the booking flow.
pub struct BookingReducer;

impl BookingReducer {
    /// Create a new booking reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BookingReducer {
    fn default() -> Self {
        Self::new()
    }
}

fn load_failure(error: &ApiError) -> LoadFailure {
    match error {
        ApiError::NotFound => LoadFailure::NotFound,
        other => LoadFailure::Other(other.user_message()),
    }
}

impl Reducer for BookingReducer {
    type State = BookingState;
    type Action = BookingAction;
    type Environment = BookingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            BookingAction::ContextRequested {
                event_id,
                ticket_id,
            } => {
                state.loading = true;
                state.not_found = false;
                state.error = None;
                let gateway = env.gateway();
                smallvec![Effect::Future(Box::pin(async move {
                    let result = async {
                        let event = gateway.fetch_event(event_id).await?;
                        let ticket = gateway.fetch_ticket(ticket_id).await?;
                        Ok((event, ticket))
                    }
                    .await
                    .map_err(|e: ApiError| load_failure(&e));
                    Some(BookingAction::ContextLoaded(result))
                }))]
            },

            BookingAction::ContextLoaded(Ok((event, ticket))) => {
                state.loading = false;
                state.event = Some(event);
                state.ticket = Some(ticket);
                smallvec![]
            },

            BookingAction::ContextLoaded(Err(failure)) => {
                state.loading = false;
                match failure {
                    LoadFailure::NotFound => state.not_found = true,
                    LoadFailure::Other(message) => state.error = Some(message),
                }
                smallvec![]
            },

            BookingAction::DraftChanged(draft) => {
                state.draft = draft;
                // Stale feedback is cleared; the draft is re-validated on
                // the next submission attempt.
                state.issues.clear();
                smallvec![]
            },

            BookingAction::SubmitRequested => {
                let Some(ticket) = &state.ticket else {
                    state.issues = vec![ValidationIssue::TicketUnavailable];
                    return smallvec![];
                };

                let issues = validate_draft(&state.draft, ticket);
                if !issues.is_empty() {
                    // Blocked client-side; no network round-trip.
                    state.issues = issues;
                    return smallvec![];
                }

                state.issues.clear();
                state.submitting = true;
                state.error = None;

                let payload = NewBooking {
                    event_id: ticket.event_id.clone(),
                    ticket_id: ticket.id.clone(),
                    full_name: state.draft.full_name.trim().to_string(),
                    email: state.draft.email.trim().to_string(),
                    phone_number: state.draft.phone_number.trim().to_string(),
                    quantity: state.draft.quantity,
                };
                let gateway = env.gateway();
                smallvec![Effect::Future(Box::pin(async move {
                    let result = gateway
                        .submit(payload)
                        .await
                        .map_err(|e| e.user_message());
                    Some(BookingAction::SubmitFinished(result))
                }))]
            },

            BookingAction::SubmitFinished(Ok(booking)) => {
                state.submitting = false;
                state.confirmation = Some(booking);
                smallvec![]
            },

            BookingAction::SubmitFinished(Err(message)) => {
                state.submitting = false;
                state.error = Some(message);
                smallvec![]
            },

            BookingAction::ConfirmationRequested { reference } => {
                state.submitting = true;
                state.not_found = false;
                state.error = None;
                let gateway = env.gateway();
                smallvec![Effect::Future(Box::pin(async move {
                    let result = gateway
                        .find_by_reference(reference)
                        .await
                        .map_err(|e| load_failure(&e));
                    Some(BookingAction::ConfirmationLoaded(result))
                }))]
            },

            BookingAction::ConfirmationLoaded(Ok(booking)) => {
                state.submitting = false;
                state.confirmation = Some(booking);
                smallvec![]
            },

            BookingAction::ConfirmationLoaded(Err(failure)) => {
                state.submitting = false;
                match failure {
                    LoadFailure::NotFound => state.not_found = true,
                    LoadFailure::Other(message) => state.error = Some(message),
                }
                smallvec![]
            },
        }
    }
}
