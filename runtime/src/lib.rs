//! # Boxoffice Runtime
//!
//! Store implementation for the boxoffice view architecture.
//!
//! A [`Store`] owns one view's state, runs its reducer, and executes the
//! effects the reducer returns. Execution rules:
//!
//! - The reducer runs synchronously under a write lock; concurrent `send`
//!   calls serialize at the reducer.
//! - Effects run in spawned tasks and may complete in any order; actions
//!   they produce are fed back through `send`.
//! - [`Effect::Cancellable`] registers the running task under an
//!   [`EffectId`]; [`Effect::Cancel`] aborts it. Re-using an id replaces
//!   (aborts) the previous task, so "latest wins" holds per id.
//! - [`Store::until_idle`] resolves once no spawned effect is pending,
//!   which is how tests await quiescence without sleeping.

use boxoffice_core::effect::{Effect, EffectId};
use boxoffice_core::reducer::Reducer;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{Notify, RwLock};
use tokio::task::AbortHandle;

/// Errors produced by the store runtime.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store is shutting down and rejects new actions.
    #[error("store is shutting down")]
    ShutdownInProgress,

    /// Shutdown timed out with effects still pending.
    #[error("shutdown timed out with {0} effects still pending")]
    ShutdownTimeout(usize),
}

/// Entry in the cancellation registry.
///
/// The generation distinguishes a task from its same-id successor so a
/// finishing task never removes the entry of the effect that replaced it.
struct Registration {
    generation: u64,
    handle: AbortHandle,
}

struct StoreInner<S, A, E, R> {
    state: RwLock<S>,
    reducer: R,
    environment: E,
    shutdown: AtomicBool,
    pending_effects: AtomicUsize,
    idle_notify: Notify,
    cancellations: Mutex<HashMap<EffectId, Registration>>,
    generation: AtomicU64,
    _actions: std::marker::PhantomData<fn(A)>,
}

/// Decrements the pending-effect counter when dropped, even if the effect
/// task panicked or was aborted mid-await.
struct PendingGuard<'a> {
    pending: &'a AtomicUsize,
    notify: &'a Notify,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.notify.notify_waiters();
        }
    }
}

/// The Store - runtime container for one view.
///
/// Cloning a store is cheap (shared `Arc` internals); every clone addresses
/// the same state and cancellation registry.
///
/// # Example
///
/// ```ignore
/// let store = Store::new(BannerState::default(), BannerReducer, env);
/// store.send(BannerAction::ViewAppeared).await?;
/// store.until_idle().await;
/// let dismissed = store.state(|s| s.dismissed).await;
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    inner: Arc<StoreInner<S, A, E, R>>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial_state),
                reducer,
                environment,
                shutdown: AtomicBool::new(false),
                pending_effects: AtomicUsize::new(0),
                idle_notify: Notify::new(),
                cancellations: Mutex::new(HashMap::new()),
                generation: AtomicU64::new(0),
                _actions: std::marker::PhantomData,
            }),
        }
    }

    /// Send an action to the store.
    ///
    /// Runs the reducer under the state write lock, then starts execution of
    /// the returned effects. Returns once execution has *started*; effects
    /// complete asynchronously and feed their actions back here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn send(&self, action: A) -> Result<(), StoreError> {
        if self.inner.shutdown.load(Ordering::Acquire) {
            return Err(StoreError::ShutdownInProgress);
        }

        let effects = {
            let mut state = self.inner.state.write().await;
            self.inner
                .reducer
                .reduce(&mut state, action, &self.inner.environment)
        };

        for effect in effects {
            self.start_effect(effect);
        }

        Ok(())
    }

    /// Read a projection of the current state.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.inner.state.read().await;
        f(&state)
    }

    /// Number of effects currently pending.
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.inner.pending_effects.load(Ordering::Acquire)
    }

    /// Resolve once no spawned effect is pending.
    ///
    /// A still-armed cancellable delay counts as pending; cancel it first
    /// (the way a dismissed view does) if quiescence is expected.
    pub async fn until_idle(&self) {
        loop {
            let notified = self.inner.idle_notify.notified();
            if self.inner.pending_effects.load(Ordering::Acquire) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Initiate graceful shutdown.
    ///
    /// Rejects new actions, aborts all registered cancellable effects (they
    /// are view-lifetime work by construction), then waits for remaining
    /// effects to drain.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if effects are still pending
    /// when the timeout expires.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("initiating store shutdown");
        self.inner.shutdown.store(true, Ordering::Release);
        self.cancel_all();

        match tokio::time::timeout(timeout, self.until_idle()).await {
            Ok(()) => {
                tracing::info!("store shutdown complete");
                Ok(())
            },
            Err(_) => {
                let pending = self.pending_effects();
                tracing::error!(pending, "store shutdown timed out");
                Err(StoreError::ShutdownTimeout(pending))
            },
        }
    }

    /// Start executing one effect, spawning where needed.
    fn start_effect(&self, effect: Effect<A>) {
        match effect {
            Effect::None => {
                tracing::trace!("executing Effect::None (no-op)");
            },
            Effect::Parallel(effects) => {
                tracing::trace!(count = effects.len(), "executing Effect::Parallel");
                for effect in effects {
                    self.start_effect(effect);
                }
            },
            Effect::Cancel(id) => {
                self.cancel(&id);
            },
            Effect::Cancellable { id, effect } => {
                self.spawn_cancellable(id, *effect);
            },
            other => {
                self.spawn_tracked(None, other);
            },
        }
    }

    /// Spawn an effect in a tracked task, optionally registered for
    /// cancellation under `key`.
    fn spawn_tracked(&self, key: Option<EffectId>, effect: Effect<A>) {
        self.inner.pending_effects.fetch_add(1, Ordering::AcqRel);

        let store = self.clone();
        let registration_key = key.clone();
        let generation = self.inner.generation.fetch_add(1, Ordering::Relaxed);

        let handle = tokio::spawn(async move {
            let _guard = PendingGuard {
                pending: &store.inner.pending_effects,
                notify: &store.inner.idle_notify,
            };

            Self::run_effect(store.clone(), effect).await;

            if let Some(key) = registration_key {
                store.remove_registration(&key, generation);
            }
        });

        if let Some(key) = key {
            // Replace (and abort) any previous effect under the same id. If
            // the new task already finished, the stale entry is harmless:
            // aborting a completed task is a no-op and the entry is replaced
            // on the next registration.
            let mut registry = self
                .inner
                .cancellations
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(previous) = registry.insert(
                key.clone(),
                Registration {
                    generation,
                    handle: handle.abort_handle(),
                },
            ) {
                tracing::debug!(id = %key, "replacing in-flight cancellable effect");
                previous.handle.abort();
            }
        }
    }

    fn spawn_cancellable(&self, id: EffectId, effect: Effect<A>) {
        tracing::trace!(id = %id, "executing Effect::Cancellable");
        self.spawn_tracked(Some(id), effect);
    }

    /// Abort the effect registered under `id`, if any.
    fn cancel(&self, id: &EffectId) {
        let removed = {
            let mut registry = self
                .inner
                .cancellations
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            registry.remove(id)
        };
        if let Some(registration) = removed {
            tracing::debug!(id = %id, "cancelling in-flight effect");
            registration.handle.abort();
        } else {
            tracing::trace!(id = %id, "cancel requested for unknown effect id");
        }
    }

    /// Abort everything in the cancellation registry.
    fn cancel_all(&self) {
        let drained: Vec<Registration> = {
            let mut registry = self
                .inner
                .cancellations
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            registry.drain().map(|(_, reg)| reg).collect()
        };
        for registration in drained {
            registration.handle.abort();
        }
    }

    fn remove_registration(&self, key: &EffectId, generation: u64) {
        let mut registry = self
            .inner
            .cancellations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if registry
            .get(key)
            .is_some_and(|reg| reg.generation == generation)
        {
            registry.remove(key);
        }
    }

    /// Execute an effect to completion inside an already-tracked task.
    ///
    /// Boxed because `Sequential` recurses.
    fn run_effect(store: Self, effect: Effect<A>) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            match effect {
                Effect::None => {},
                Effect::Future(future) => {
                    tracing::trace!("executing Effect::Future");
                    if let Some(action) = future.await {
                        tracing::trace!("Effect::Future produced an action, feeding back");
                        let _ = store.send(action).await;
                    }
                },
                Effect::Delay { duration, action } => {
                    tracing::trace!(?duration, "executing Effect::Delay");
                    tokio::time::sleep(duration).await;
                    let _ = store.send(*action).await;
                },
                Effect::Sequential(effects) => {
                    tracing::trace!(count = effects.len(), "executing Effect::Sequential");
                    for effect in effects {
                        Self::run_effect(store.clone(), effect).await;
                    }
                },
                Effect::Parallel(effects) => {
                    for effect in effects {
                        store.start_effect(effect);
                    }
                },
                Effect::Cancellable { id, effect } => {
                    store.spawn_cancellable(id, *effect);
                },
                Effect::Cancel(id) => {
                    store.cancel(&id);
                },
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code
mod tests {
    use super::*;
    use boxoffice_core::reducer::Effects;
    use smallvec::smallvec;

    #[derive(Debug, Default)]
    struct CounterState {
        count: i32,
        pings: Vec<&'static str>,
    }

    #[derive(Debug, Clone)]
    enum CounterAction {
        Increment,
        IncrementLater,
        Ping(&'static str),
        PingAfter(&'static str, Duration),
        ArmTick(Duration),
        Tick,
        Disarm,
        InOrder,
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = CounterState;
        type Action = CounterAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> Effects<Self::Action> {
            match action {
                CounterAction::Increment => {
                    state.count += 1;
                    smallvec![]
                },
                CounterAction::IncrementLater => {
                    smallvec![Effect::Future(Box::pin(async {
                        Some(CounterAction::Increment)
                    }))]
                },
                CounterAction::Ping(tag) => {
                    state.pings.push(tag);
                    smallvec![]
                },
                CounterAction::PingAfter(tag, delay) => {
                    smallvec![Effect::Delay {
                        duration: delay,
                        action: Box::new(CounterAction::Ping(tag)),
                    }]
                },
                CounterAction::ArmTick(delay) => {
                    smallvec![Effect::cancellable_delay(
                        "tick",
                        delay,
                        CounterAction::Tick,
                    )]
                },
                CounterAction::Tick => {
                    state.count += 100;
                    smallvec![]
                },
                CounterAction::Disarm => {
                    smallvec![Effect::Cancel(EffectId::new("tick"))]
                },
                CounterAction::InOrder => {
                    smallvec![Effect::chain(vec![
                        Effect::Future(Box::pin(async { Some(CounterAction::Ping("first")) })),
                        Effect::Future(Box::pin(async { Some(CounterAction::Ping("second")) })),
                    ])]
                },
            }
        }
    }

    fn store() -> Store<CounterState, CounterAction, (), CounterReducer> {
        Store::new(CounterState::default(), CounterReducer, ())
    }

    #[tokio::test]
    async fn dispatch_updates_state() {
        let store = store();
        store.send(CounterAction::Increment).await.unwrap();
        assert_eq!(store.state(|s| s.count).await, 1);
    }

    #[tokio::test]
    async fn future_effect_feeds_action_back() {
        let store = store();
        store.send(CounterAction::IncrementLater).await.unwrap();
        store.until_idle().await;
        assert_eq!(store.state(|s| s.count).await, 1);
    }

    #[tokio::test]
    async fn delay_effect_fires_after_duration() {
        let store = store();
        store
            .send(CounterAction::PingAfter("late", Duration::from_millis(10)))
            .await
            .unwrap();
        store.until_idle().await;
        assert_eq!(store.state(|s| s.pings.clone()).await, vec!["late"]);
    }

    #[tokio::test]
    async fn sequential_effects_run_in_order() {
        let store = store();
        store.send(CounterAction::InOrder).await.unwrap();
        store.until_idle().await;
        assert_eq!(
            store.state(|s| s.pings.clone()).await,
            vec!["first", "second"]
        );
    }

    #[tokio::test]
    async fn cancel_aborts_armed_delay() {
        let store = store();
        store
            .send(CounterAction::ArmTick(Duration::from_secs(600)))
            .await
            .unwrap();
        assert_eq!(store.pending_effects(), 1);

        store.send(CounterAction::Disarm).await.unwrap();
        tokio::time::timeout(Duration::from_secs(5), store.until_idle())
            .await
            .expect("store should drain after cancel");
        assert_eq!(store.state(|s| s.count).await, 0);
    }

    #[tokio::test]
    async fn same_id_replaces_previous_effect() {
        let store = store();
        store
            .send(CounterAction::ArmTick(Duration::from_secs(600)))
            .await
            .unwrap();
        store
            .send(CounterAction::ArmTick(Duration::from_millis(10)))
            .await
            .unwrap();

        tokio::time::timeout(Duration::from_secs(5), store.until_idle())
            .await
            .expect("replaced effect should not keep the store busy");
        // Only the second tick landed.
        assert_eq!(store.state(|s| s.count).await, 100);
    }

    #[tokio::test]
    async fn shutdown_rejects_new_actions() {
        let store = store();
        store.shutdown(Duration::from_secs(1)).await.unwrap();
        assert!(matches!(
            store.send(CounterAction::Increment).await,
            Err(StoreError::ShutdownInProgress)
        ));
    }

    #[tokio::test]
    async fn shutdown_aborts_registered_effects() {
        let store = store();
        store
            .send(CounterAction::ArmTick(Duration::from_secs(600)))
            .await
            .unwrap();
        store.shutdown(Duration::from_secs(5)).await.unwrap();
        assert_eq!(store.pending_effects(), 0);
    }
}
