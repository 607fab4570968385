//! # Taskboard Testing
//!
//! Testing utilities and helpers for the Taskboard reducer architecture.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Assertion helpers for effects
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_testing::{test_clock, SequentialIdGenerator};
//!
//! let env = TaskEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new()));
//! let mut store = Store::new(TaskState::new(), TaskReducer::new(), env);
//! store.send(TaskAction::AddTask { text: "Buy milk".into() })?;
//! ```

use chrono::{DateTime, Utc};
use taskboard_core::environment::Clock;


pub use reducer_test::{assertions, ReducerTest};

/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use taskboard_testing::mocks::FixedClock;
    /// use taskboard_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::days(20_089))
    }

    /// Predictable identifiers: `1`, `2`, `3`, ... as UUIDs
    pub use taskboard_core::environment::SequentialIdGenerator;
}

/// Property-based testing strategies using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Text of 1..=`max_chars` characters that contains at least one
    /// non-whitespace character and has no surrounding whitespace.
    pub fn non_blank_text(max_chars: usize) -> impl Strategy<Value = String> {
        let max = max_chars.max(1);
        proptest::collection::vec(any::<char>(), 1..=max)
            .prop_map(|chars| chars.into_iter().collect::<String>())
            .prop_filter_map("needs visible text", |text| {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
    }

    /// Strings made only of whitespace (including the empty string).
    pub fn blank_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\u{3000}')], 0..8)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Arbitrary raw keyboard input up to `max_chars` characters.
    pub fn raw_input(max_chars: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(any::<char>(), 0..=max_chars)
            .prop_map(|chars| chars.into_iter().collect())
    }
}

// Re-export commonly used items
pub use mocks::{test_clock, FixedClock, SequentialIdGenerator};
