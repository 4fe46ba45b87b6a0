//! Reducer for the landing view.

use super::actions::HomeAction;
use super::environment::HomeEnvironment;
use super::state::HomeState;
use boxoffice_core::effect::{Effect, EffectId};
use boxoffice_core::reducer::{Effects, Reducer};
use boxoffice_domain::countdown::time_remaining;
use boxoffice_domain::selection::{eligible_events, upcoming_event};
use smallvec::smallvec;

/// Cancellation id of the countdown tick. Armed while the featured event
/// is ahead; cancelled on dismissal and left unarmed once the countdown
/// reaches zero.
pub const COUNTDOWN_TICK: &str = "home.countdown-tick";

/// Reducer for the landing view.
pub struct HomeReducer;

impl HomeReducer {
    /// Create a new landing-view reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Recompute the countdown and re-arm the tick while it still runs.
    fn refresh_countdown(state: &mut HomeState, env: &HomeEnvironment) -> Effects<HomeAction> {
        let Some(featured) = &state.featured else {
            state.remaining = None;
            return smallvec![];
        };

        let remaining = time_remaining(featured.date, env.clock().now());
        state.remaining = Some(remaining);

        if remaining.is_zero() {
            // Terminal state; the tick is not re-armed.
            smallvec![]
        } else {
            smallvec![Effect::cancellable_delay(
                COUNTDOWN_TICK,
                env.tick_interval(),
                HomeAction::Tick,
            )]
        }
    }
}

impl Default for HomeReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for HomeReducer {
    type State = HomeState;
    type Action = HomeAction;
    type Environment = HomeEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            HomeAction::ViewAppeared => {
                state.loading = true;
                state.error = None;
                let gateway = env.gateway();
                smallvec![Effect::Future(Box::pin(async move {
                    let result = gateway
                        .fetch_events()
                        .await
                        .map_err(|e| e.user_message());
                    Some(HomeAction::EventsLoaded(result))
                }))]
            },

            HomeAction::EventsLoaded(Ok(events)) => {
                state.loading = false;
                let mut active = eligible_events(&events);
                active.sort_by_key(|event| event.date);
                state.featured = upcoming_event(&active, env.clock().now()).cloned();
                state.events = active;
                Self::refresh_countdown(state, env)
            },

            HomeAction::EventsLoaded(Err(message)) => {
                // Previously rendered events stay intact.
                state.loading = false;
                state.error = Some(message);
                smallvec![]
            },

            HomeAction::Tick => Self::refresh_countdown(state, env),

            HomeAction::ViewDismissed => {
                smallvec![Effect::Cancel(EffectId::new(COUNTDOWN_TICK))]
            },
        }
    }
}
