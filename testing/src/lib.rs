//! # Sanctuary Testing
//!
//! Testing utilities and helpers for Sanctuary reducers.
//!
//! This crate provides:
//! - A deterministic [`Clock`] implementation
//! - [`ReducerTest`], a Given-When-Then builder for reducer tests
//! - Assertion helpers for returned effects
//!
//! ## Example
//!
//! ```ignore
//! use sanctuary_testing::{ReducerTest, test_clock};
//!
//! ReducerTest::new(RegistrationReducer::new())
//!     .with_env(test_environment())
//!     .given_state(RegistrationState::default())
//!     .when_action(RegistrationAction::GoBack)
//!     .then_state(|state| assert_eq!(state.step.number(), 1))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use sanctuary_core::environment::Clock;


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use sanctuary_testing::mocks::FixedClock;
    /// use sanctuary_core::environment::Clock;
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

        /// Create a fixed clock at `millis` since the Unix epoch
        ///
        /// Out-of-range values fall back to the epoch itself.
        #[must_use]
        pub fn from_millis(millis: i64) -> Self {
            Self::new(DateTime::from_timestamp_millis(millis).unwrap_or_default())
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
        FixedClock::from_millis(1_735_689_600_000)
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
