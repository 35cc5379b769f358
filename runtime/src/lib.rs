//! # Sanctuary Runtime
//!
//! Runtime implementation for Sanctuary reducers.
//!
//! The [`Store`] owns a flow's state, runs the reducer for every action, and
//! executes the returned effects on tokio, feeding any resulting actions back
//! into the reducer.
//!
//! ## Example
//!
//! ```ignore
//! use sanctuary_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action and wait for its effects to settle
//! store.send(Action::DoSomething).await.wait().await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use sanctuary_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, broadcast, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Timeout waiting for terminal action
        ///
        /// Returned by `send_and_wait_for` when the timeout expires before
        /// a matching action is received.
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// Completion tracking shared by every effect spawned from one `send`.
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: Arc<watch::Sender<()>>,
}

impl EffectTracking {
    fn new() -> Self {
        let (notifier, _) = watch::channel(());
        Self {
            counter: Arc::new(AtomicUsize::new(0)),
            notifier: Arc::new(notifier),
        }
    }

    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn handle(&self) -> EffectHandle {
        EffectHandle {
            counter: Arc::clone(&self.counter),
            receiver: self.notifier.subscribe(),
        }
    }
}

/// Decrements the tracking counter on drop, even if the effect task panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        if self.0.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            let _ = self.0.notifier.send(());
        }
    }
}

/// Handle for waiting until the effects of one `send` have finished
///
/// Effects are tracked transitively: if a delayed effect dispatches an action
/// whose own effects spawn more work, `wait` covers all of it.
#[derive(Debug)]
pub struct EffectHandle {
    counter: Arc<AtomicUsize>,
    receiver: watch::Receiver<()>,
}

impl EffectHandle {
    /// A handle with nothing left to wait for
    #[must_use]
    pub fn completed() -> Self {
        EffectTracking::new().handle()
    }

    /// Number of effects still running
    #[must_use]
    pub fn pending(&self) -> usize {
        self.counter.load(Ordering::SeqCst)
    }

    /// Wait for all tracked effects to complete
    pub async fn wait(&mut self) {
        loop {
            if self.counter.load(Ordering::SeqCst) == 0 {
                return;
            }
            if self.receiver.changed().await.is_err() {
                return;
            }
        }
    }
}

/// The Store - runtime for a reducer
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: Arc<R>,
    environment: Arc<E>,
    /// Actions produced by effects are broadcast to observers.
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            environment: Arc::clone(&self.environment),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + Clone + std::fmt::Debug + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// The action broadcast channel buffers 16 actions.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Create a new store with a custom action broadcast capacity
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (action_broadcast, _) = broadcast::channel(capacity.max(1));

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer: Arc::new(reducer),
            environment: Arc::new(environment),
            action_broadcast,
        }
    }

    /// Send an action to the store
    ///
    /// Runs the reducer under the state write lock, then starts executing the
    /// returned effects. The returned handle resolves once they have finished.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> EffectHandle {
        tracing::debug!(?action, "Reducing action");
        metrics::counter!("store.actions.sent").increment(1);

        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        let tracking = EffectTracking::new();
        for effect in effects {
            self.execute_effect(effect, &tracking);
        }
        tracking.handle()
    }

    /// Send an action and wait for a matching result action
    ///
    /// Subscribes to the action broadcast before sending, then returns the
    /// first action produced by an effect that satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`]: Timeout expired before a matching action was received
    /// - [`StoreError::ChannelClosed`]: The action broadcast channel closed
    pub async fn send_and_wait_for<F>(
        &self,
        action: A,
        predicate: F,
        timeout: Duration,
    ) -> Result<A, StoreError>
    where
        F: Fn(&A) -> bool,
    {
        let mut receiver = self.action_broadcast.subscribe();
        let _handle = self.send(action).await;

        let wait = async {
            loop {
                match receiver.recv().await {
                    Ok(candidate) if predicate(&candidate) => return Ok(candidate),
                    Ok(_) => {},
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Action observer lagged");
                    },
                    Err(broadcast::error::RecvError::Closed) => {
                        return Err(StoreError::ChannelClosed);
                    },
                }
            }
        };

        tokio::time::timeout(timeout, wait)
            .await
            .map_err(|_| StoreError::Timeout)?
    }

    /// Subscribe to actions produced by effects
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Read a value out of the current state
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&*state)
    }

    /// Broadcast an effect-produced action and feed it back into the reducer.
    async fn feed_back(&self, action: A) {
        let _ = self.action_broadcast.send(action.clone());
        self.send(action).await.wait().await;
    }

    /// Execute an effect under `tracking`
    ///
    /// - `None`: No-op
    /// - `Future`: Executes async computation, sends resulting action if `Some`
    /// - `Delay`: Waits for duration, then sends action
    /// - `Parallel`: Executes effects concurrently
    /// - `Sequential`: Executes effects in order, waiting for each to complete
    fn execute_effect(&self, effect: Effect<A>, tracking: &EffectTracking) {
        match effect {
            Effect::None => {
                tracing::trace!("Executing Effect::None (no-op)");
                metrics::counter!("store.effects.executed", "type" => "none").increment(1);
            },
            Effect::Future(fut) => {
                tracing::trace!("Executing Effect::Future");
                metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                tracking.increment();

                let guard = DecrementGuard(tracking.clone());
                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = guard;
                    if let Some(action) = fut.await {
                        tracing::trace!("Effect::Future produced an action, sending to store");
                        store.feed_back(action).await;
                    }
                });
            },
            Effect::Delay { duration, action } => {
                tracing::trace!("Executing Effect::Delay (duration: {:?})", duration);
                metrics::counter!("store.effects.executed", "type" => "delay").increment(1);
                tracking.increment();

                let guard = DecrementGuard(tracking.clone());
                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = guard;
                    tokio::time::sleep(duration).await;
                    tracing::trace!("Effect::Delay completed, sending action");
                    store.feed_back(*action).await;
                });
            },
            Effect::Parallel(effects) => {
                tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                metrics::counter!("store.effects.executed", "type" => "parallel").increment(1);

                for effect in effects {
                    self.execute_effect(effect, tracking);
                }
            },
            Effect::Sequential(effects) => {
                tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                metrics::counter!("store.effects.executed", "type" => "sequential").increment(1);
                tracking.increment();

                let guard = DecrementGuard(tracking.clone());
                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = guard;
                    for effect in effects {
                        let step = EffectTracking::new();
                        store.execute_effect(effect, &step);
                        step.handle().wait().await;
                    }
                });
            },
        }
    }
}
