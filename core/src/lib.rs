//! # Boxoffice Core
//!
//! Core traits and types for the boxoffice view architecture.
//!
//! Every view in the system is modeled the same way:
//!
//! - **State**: the in-memory model a single view owns exclusively
//! - **Action**: all possible inputs to that view (user intent, network
//!   results, timer ticks)
//! - **Reducer**: pure function `(State, Action, Environment) → Effects`
//! - **Effect**: a *description* of a side effect (never its execution)
//! - **Environment**: injected dependencies behind traits
//!
//! The runtime crate executes effects and feeds resulting actions back into
//! the reducer. Because reducers are pure and every dependency (clock,
//! session storage, API gateways) is injected, all view behavior is testable
//! without wall-clock waiting or a network, countdown ticking and the
//! stale-response guard on admin lists included.

// Re-export commonly used types
pub use chrono::{DateTime, Utc};

/// Reducer module - the core trait for view logic.
///
/// Reducers are pure functions: `(State, Action, Environment) → Effects`.
/// They contain all decision logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// Effect list returned from a reducer.
    ///
    /// Most actions produce zero or one effect, so the inline capacity of
    /// four avoids heap allocation on every dispatch.
    pub type Effects<Action> = SmallVec<[Effect<Action>; 4]>;

    /// The Reducer trait - core abstraction for view logic.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for BannerReducer {
    ///     type State = BannerState;
    ///     type Action = BannerAction;
    ///     type Environment = BannerEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut BannerState,
    ///         action: BannerAction,
    ///         env: &BannerEnvironment,
    ///     ) -> Effects<BannerAction> {
    ///         match action {
    ///             BannerAction::Dismissed => {
    ///                 state.dismissed = true;
    ///                 smallvec![]
    ///             }
    ///             // ...
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects.
        ///
        /// This is a pure function that:
        /// 1. Validates the action against current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions for the runtime to execute
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Effects<Self::Action>;
    }
}

/// Effect module - side effect descriptions.
///
/// Effects describe side effects to be performed by the runtime. They are
/// values (not execution) and are composable and cancellable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Identifier for a cancellable in-flight effect.
    ///
    /// A view cancels work it no longer wants (a superseded list query, the
    /// countdown tick after the view is dismantled) by returning
    /// [`Effect::Cancel`] with the same id it used to start the work.
    /// Each view owns its store exclusively, so ids only need to be unique
    /// within one view.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct EffectId(String);

    impl EffectId {
        /// Create an effect id from any string-like value.
        #[must_use]
        pub fn new(id: impl Into<String>) -> Self {
            Self(id.into())
        }

        /// Borrow the id as a string slice.
        #[must_use]
        pub fn as_str(&self) -> &str {
            &self.0
        }
    }

    impl From<&str> for EffectId {
        fn from(id: &str) -> Self {
            Self::new(id)
        }
    }

    impl std::fmt::Display for EffectId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    /// Effect type - describes a side effect to be executed.
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[allow(missing_docs)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (debounce windows, countdown ticks)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into
        /// the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),

        /// A cancellable effect, registered under `id` while it runs.
        ///
        /// Starting a new cancellable effect under an id that is already
        /// registered aborts the previous one first, so "latest wins" holds
        /// even without an explicit cancel.
        Cancellable {
            /// Registration key for later cancellation
            id: EffectId,
            /// The effect to run under that key
            effect: Box<Effect<Action>>,
        },

        /// Abort the in-flight effect registered under `id`, if any.
        Cancel(EffectId),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
                Effect::Cancellable { id, effect } => f
                    .debug_struct("Effect::Cancellable")
                    .field("id", id)
                    .field("effect", effect)
                    .finish(),
                Effect::Cancel(id) => f.debug_tuple("Effect::Cancel").field(id).finish(),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Wrap a future as a cancellable effect registered under `id`.
        pub fn cancellable<F>(id: impl Into<EffectId>, future: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Cancellable {
                id: id.into(),
                effect: Box::new(Effect::Future(Box::pin(future))),
            }
        }

        /// A delayed action registered under `id` for cancellation.
        ///
        /// This is the building block for debounce windows and for the
        /// one-second countdown tick: the reducer re-arms the delay on each
        /// tick and cancels it when the owning view goes away.
        #[must_use]
        pub fn cancellable_delay(
            id: impl Into<EffectId>,
            duration: Duration,
            action: Action,
        ) -> Effect<Action> {
            Effect::Cancellable {
                id: id.into(),
                effect: Box::new(Effect::Delay {
                    duration,
                    action: Box::new(action),
                }),
            }
        }
    }

    impl From<String> for EffectId {
        fn from(id: String) -> Self {
            Self(id)
        }
    }
}

/// Environment module - dependency injection traits.
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter, so reducers stay deterministic under test.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability.
    ///
    /// Production uses [`SystemClock`]; tests use a fixed or stepping clock
    /// so countdown and selection logic never depends on the wall clock.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Clock backed by the system time.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Persistent holder of the admin session token.
    ///
    /// The presence of a token is what gates admin views; the token value is
    /// attached as a bearer credential to admin API calls. Implementations
    /// decide where the token lives (browser storage, keychain, memory).
    pub trait SessionStore: Send + Sync {
        /// Current token, if a session is present.
        fn token(&self) -> Option<String>;

        /// Store a token, replacing any previous session.
        fn set_token(&self, token: &str);

        /// Remove the session token.
        fn clear(&self);
    }
}
