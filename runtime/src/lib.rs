//! # Taskboard Runtime
//!
//! Runtime implementation for the Taskboard reducer architecture.
//!
//! This crate provides the [`Store`]: the explicitly owned state container a
//! screen creates when it mounts and drops when it unmounts.
//!
//! ## Core Components
//!
//! - **Store**: Owns the reducer, the environment and the current snapshot
//! - **Snapshots**: Every accepted action publishes a new `Arc<State>`; old
//!   snapshots are never mutated, so readers holding one never see it change
//! - **Feedback**: `Effect::Send` actions run inside the same transaction
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action; the new snapshot is returned
//! let snapshot = store.send(Action::DoSomething)?;
//!
//! // Subscribe to later snapshots
//! let mut rx = store.subscribe();
//! ```

use std::fmt::Debug;
use std::sync::Arc;
use taskboard_core::reducer::Reducer;

pub use store::Store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur while a Store processes an action
    ///
    /// Any error discards the whole transaction: the snapshot that was current
    /// before `send` stays current and nothing is broadcast.
    #[derive(Error, Debug)]
    pub enum StoreError<E>
    where
        E: std::error::Error + 'static,
    {
        /// The reducer refused an action
        #[error(transparent)]
        Rejected(E),

        /// Feedback effects kept producing actions past the configured depth
        #[error("Feedback effects exceeded depth {depth}")]
        FeedbackLimit {
            /// Configured maximum depth
            depth: usize,
        },
    }

    impl<E> StoreError<E>
    where
        E: std::error::Error + 'static,
    {
        /// Returns the reducer error, if this is a rejection
        #[must_use]
        pub const fn rejection(&self) -> Option<&E> {
            match self {
                Self::Rejected(error) => Some(error),
                Self::FeedbackLimit { .. } => None,
            }
        }

        /// Consumes the error, returning the reducer error if this is a rejection
        #[must_use]
        pub fn into_rejection(self) -> Option<E> {
            match self {
                Self::Rejected(error) => Some(error),
                Self::FeedbackLimit { .. } => None,
            }
        }
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use taskboard_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_max_feedback_depth(8)
///     .with_action_buffer(64);
/// assert_eq!(config.max_feedback_depth, 8);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// How many nested `Effect::Send` hops one `send` may take
    pub max_feedback_depth: usize,
    /// Capacity of the accepted-action broadcast channel
    pub action_buffer: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_depth: usize, action_buffer: usize) -> Self {
        Self {
            max_feedback_depth,
            action_buffer,
        }
    }

    /// Set the maximum feedback depth
    #[must_use]
    pub const fn with_max_feedback_depth(mut self, depth: usize) -> Self {
        self.max_feedback_depth = depth;
        self
    }

    /// Set the action broadcast capacity
    #[must_use]
    pub const fn with_action_buffer(mut self, capacity: usize) -> Self {
        self.action_buffer = capacity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_depth: 32,
            action_buffer: 16,
        }
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Arc, Debug, Reducer, StoreConfig, StoreError};
    use tokio::sync::{broadcast, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. The current snapshot (published through a `watch` channel)
    /// 2. Reducer (screen logic)
    /// 3. Environment (injected dependencies)
    /// 4. Feedback effects (run before the snapshot is published)
    ///
    /// Mutation takes `&mut self`: the screen that mounted the Store is its
    /// only writer, and actions are processed one at a time to completion.
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
        reducer: R,
        environment: E,
        config: StoreConfig,
        snapshots: watch::Sender<Arc<S>>,
        /// Accepted actions, in processing order, including feedback actions.
        action_broadcast: broadcast::Sender<A>,
        version: u64,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        R::Error: 'static,
        S: Clone + PartialEq,
        A: Clone + Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (snapshots, _) = watch::channel(Arc::new(initial_state));
            let (action_broadcast, _) = broadcast::channel(config.action_buffer.max(1));

            Self {
                reducer,
                environment,
                config,
                snapshots,
                action_broadcast,
                version: 0,
            }
        }

        /// Process an action to completion
        ///
        /// The reducer runs against a copy of the current snapshot. Feedback
        /// actions from `Effect::Send` are reduced depth-first on the same copy.
        /// Only when every step succeeds is the copy published; when it equals
        /// the current snapshot nothing is published and the current snapshot
        /// is returned.
        ///
        /// # Errors
        ///
        /// - [`StoreError::Rejected`]: the reducer refused an action
        /// - [`StoreError::FeedbackLimit`]: feedback went deeper than configured
        ///
        /// On error the current snapshot is unchanged.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<Arc<S>, StoreError<R::Error>> {
            tracing::debug!(action = ?action, "Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let current = self.snapshot();
            let mut next = S::clone(&current);
            let mut accepted = Vec::new();

            if let Err(error) = self.run(&mut next, action, 0, &mut accepted) {
                tracing::debug!(error = %error, "Action rejected, snapshot unchanged");
                metrics::counter!("store.actions.rejected").increment(1);
                return Err(error);
            }

            for action in accepted {
                // No receivers is not an error: nobody is listening yet.
                let _ = self.action_broadcast.send(action);
            }

            if next == *current {
                tracing::trace!("State unchanged, nothing published");
                return Ok(current);
            }

            let next = Arc::new(next);
            self.snapshots.send_replace(Arc::clone(&next));
            self.version += 1;
            metrics::counter!("store.snapshots.published").increment(1);
            tracing::trace!(version = self.version, "Published snapshot");

            Ok(next)
        }

        fn run(
            &self,
            state: &mut S,
            action: A,
            depth: usize,
            accepted: &mut Vec<A>,
        ) -> Result<(), StoreError<R::Error>> {
            if depth > self.config.max_feedback_depth {
                tracing::warn!(depth, "Feedback depth exceeded");
                return Err(StoreError::FeedbackLimit {
                    depth: self.config.max_feedback_depth,
                });
            }

            let record = action.clone();
            let effects = self
                .reducer
                .reduce(state, action, &self.environment)
                .map_err(StoreError::Rejected)?;
            accepted.push(record);

            tracing::trace!("Reducer returned {} effects", effects.len());
            for effect in effects {
                for feedback in effect.flatten() {
                    self.run(state, feedback, depth + 1, accepted)?;
                }
            }

            Ok(())
        }

        /// Returns the current snapshot
        #[must_use]
        pub fn snapshot(&self) -> Arc<S> {
            Arc::clone(&self.snapshots.borrow())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.tasks.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.snapshots.borrow())
        }

        /// Subscribe to published snapshots
        ///
        /// The receiver starts with the current snapshot marked as seen, so
        /// `changed()` resolves on the next publish.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
            self.snapshots.subscribe()
        }

        /// Subscribe to accepted actions
        ///
        /// Actions from rejected transactions are never broadcast.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Number of snapshots published since the store was created
        #[must_use]
        pub const fn version(&self) -> u64 {
            self.version
        }

        /// The injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }
    }
}
