//! # Taskboard Core
//!
//! Core traits and types for the Taskboard reducer architecture.
//!
//! A screen's behavior is written as a reducer over an owned state value.
//! The runtime crate owns the state and publishes immutable snapshots; this
//! crate only describes what a reducer, an effect and a projection are.
//!
//! ## Core Concepts
//!
//! - **State**: Owned, clonable domain state for one screen
//! - **Action**: Every input the screen reacts to (typing, submit, taps)
//! - **Reducer**: `(State, Action, Environment) → Result<Effects, Error>`
//! - **Effect**: Description of follow-up work (feedback actions only)
//! - **Environment**: Injected dependencies (`Clock`, `IdGenerator`)
//! - **Projector**: Pure derivation of a display model from a snapshot
//!
//! ## Example
//!
//! ```
//! use std::convert::Infallible;
//! use taskboard_core::{effect::Effects, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!     type Error = Infallible;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> Result<Effects<CounterAction>, Infallible> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         Ok(SmallVec::new())
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let effects = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! assert!(effects.is_ok());
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::{smallvec, SmallVec};
pub use uuid::Uuid;

/// Projections: pure derivations of display models from state snapshots
pub mod projection;

/// Reducer module - The core trait for screen logic
///
/// Reducers are deterministic: `(State, Action, Environment) → Result<Effects, Error>`.
/// Everything non-deterministic (time, identifiers) comes from the environment.
pub mod reducer {
    use super::effect::Effects;

    /// The Reducer trait - core abstraction for screen logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: Why an action can be refused (`Infallible` for total reducers)
    ///
    /// # Contract
    ///
    /// A reducer that returns `Err` must not have modified `state`.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// The error returned when an action is refused
        type Error: std::error::Error;

        /// Reduce an action into state changes and effects
        ///
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions for the runtime
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action is refused. State is left as it was.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<Effects<Self::Action>, Self::Error>;
    }
}

/// Effect module - Follow-up work descriptions
///
/// Effects are values returned from reducers and interpreted by the Store.
/// The Store runs them synchronously, inside the same transaction as the
/// action that produced them.
pub mod effect {
    use smallvec::SmallVec;

    /// Effect list returned by a reducer
    pub type Effects<Action> = SmallVec<[Effect<Action>; 4]>;

    /// Effect type - describes follow-up work
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects feed back into the reducer
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        Send(Action),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Returns true if running this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Send(_) => false,
                Effect::Sequential(effects) => effects.iter().all(Effect::is_none),
            }
        }

        /// Flattens the effect into the feedback actions it sends, in order
        #[must_use]
        pub fn flatten(self) -> Vec<Action> {
            let mut actions = Vec::new();
            self.collect_into(&mut actions);
            actions
        }

        fn collect_into(self, actions: &mut Vec<Action>) {
            match self {
                Effect::None => {},
                Effect::Send(action) => actions.push(action),
                Effect::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_into(actions);
                    }
                },
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// Time and identifiers are the only non-deterministic inputs a reducer sees,
/// so both are injected and can be replaced by fixed implementations in tests.
pub mod environment {
    use chrono::{DateTime, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Identifier source for newly created entities
    ///
    /// Implementations must never hand out the same identifier twice.
    /// Wall-clock time is not an acceptable source: two creations in the
    /// same tick would collide.
    pub trait IdGenerator: Send + Sync {
        /// Returns a fresh identifier
        fn next_id(&self) -> Uuid;
    }

    /// Random (v4) UUID generator
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RandomIdGenerator;

    impl IdGenerator for RandomIdGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }

    /// Monotonic counter: `1`, `2`, `3`, ... as UUIDs
    ///
    /// Unique within one generator. Used for reproducible sessions and tests.
    ///
    /// ```
    /// use taskboard_core::environment::{IdGenerator, SequentialIdGenerator};
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.next_id(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is `1`
        #[must_use]
        pub const fn new() -> Self {
            Self {
                issued: AtomicU64::new(0),
            }
        }

        /// Returns the id that the `n`th call to `next_id` hands out
        #[must_use]
        pub const fn nth(n: u64) -> Uuid {
            Uuid::from_u128(n as u128)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
            Self::nth(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::environment::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
    use proptest::prelude::*;

    #[test]
    fn flatten_preserves_order() {
        let effect = Effect::chain(vec![
            Effect::Send(1),
            Effect::None,
            Effect::chain(vec![Effect::Send(2), Effect::Send(3)]),
        ]);

        assert_eq!(effect.flatten(), vec![1, 2, 3]);
    }

    #[test]
    fn nested_none_is_none() {
        let effect: Effect<u8> = Effect::chain(vec![Effect::None, Effect::chain(vec![])]);
        assert!(effect.is_none());
        assert!(!Effect::Send(1).is_none());
    }

    #[test]
    fn random_ids_differ() {
        let ids = RandomIdGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn sequential_ids_never_repeat() {
        let ids = SequentialIdGenerator::new();
        let issued: std::collections::HashSet<_> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 1000);
        assert!(issued.contains(&SequentialIdGenerator::nth(1000)));
    }

    fn effect_tree() -> impl Strategy<Value = Effect<u32>> {
        let leaf = prop_oneof![Just(Effect::None), any::<u32>().prop_map(Effect::Send)];
        leaf.prop_recursive(4, 32, 4, |inner| {
            proptest::collection::vec(inner, 0..4).prop_map(Effect::chain)
        })
    }

    fn sends(effect: &Effect<u32>) -> usize {
        match effect {
            Effect::None => 0,
            Effect::Send(_) => 1,
            Effect::Sequential(effects) => effects.iter().map(sends).sum(),
        }
    }

    proptest! {
        #[test]
        fn flatten_yields_every_send(effect in effect_tree()) {
            let expected = sends(&effect);
            let none = effect.is_none();
            let actions = effect.flatten();

            prop_assert_eq!(actions.len(), expected);
            prop_assert_eq!(none, expected == 0);
        }
    }
}
