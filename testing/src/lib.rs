//! # Boxoffice Testing
//!
//! Deterministic test doubles for the boxoffice view architecture.
//!
//! This crate provides:
//! - Clocks that never touch wall time ([`FixedClock`], [`SteppingClock`])
//! - An in-memory [`MemorySessionStore`] so session gating is testable
//!   without persistent storage
//!
//! ## Example
//!
//! ```ignore
//! use boxoffice_testing::{SteppingClock, test_clock};
//!
//! let clock = SteppingClock::starting_at(test_clock().now());
//! clock.advance(chrono::Duration::seconds(1));
//! ```

use boxoffice_core::environment::{Clock, SessionStore};
use chrono::{DateTime, Duration, Utc};
use std::sync::{Mutex, PoisonError};

/// Mock implementations of environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Duration, Mutex, PoisonError, SessionStore, Utc};

    /// Fixed clock for deterministic tests.
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use boxoffice_testing::mocks::FixedClock;
    /// use boxoffice_core::environment::Clock;
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

    /// Clock that only moves when the test tells it to.
    ///
    /// Lets countdown tests step through tick boundaries without sleeping.
    #[derive(Debug)]
    pub struct SteppingClock {
        time: Mutex<DateTime<Utc>>,
    }

    impl SteppingClock {
        /// Create a stepping clock at the given start time.
        #[must_use]
        pub const fn starting_at(time: DateTime<Utc>) -> Self {
            Self {
                time: Mutex::new(time),
            }
        }

        /// Move the clock forward (or backward, with a negative duration).
        pub fn advance(&self, by: Duration) {
            let mut time = self.time.lock().unwrap_or_else(PoisonError::into_inner);
            *time += by;
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            *self.time.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    /// In-memory session store.
    ///
    /// Behaves like the browser-storage-backed production store without any
    /// persistence, so route-gating logic is testable in isolation.
    #[derive(Debug, Default)]
    pub struct MemorySessionStore {
        token: Mutex<Option<String>>,
    }

    impl MemorySessionStore {
        /// An empty store (signed out).
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// A store pre-seeded with a token (signed in).
        #[must_use]
        pub fn with_token(token: &str) -> Self {
            Self {
                token: Mutex::new(Some(token.to_string())),
            }
        }
    }

    impl SessionStore for MemorySessionStore {
        fn token(&self) -> Option<String> {
            self.token
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        fn set_token(&self, token: &str) {
            *self.token.lock().unwrap_or_else(PoisonError::into_inner) =
                Some(token.to_string());
        }

        fn clear(&self) {
            *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC).
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, MemorySessionStore, SteppingClock, test_clock};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_frozen() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn stepping_clock_moves_on_demand() {
        let clock = SteppingClock::starting_at(test_clock().now());
        let start = clock.now();
        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now() - start, Duration::seconds(90));
    }

    #[test]
    fn session_store_round_trips_tokens() {
        let store = MemorySessionStore::new();
        assert!(store.token().is_none());

        store.set_token("abc123");
        assert_eq!(store.token().as_deref(), Some("abc123"));

        store.clear();
        assert!(store.token().is_none());
    }
}
