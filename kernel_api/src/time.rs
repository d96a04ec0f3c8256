//! Sleep durations

use serde::{Deserialize, Serialize};

/// Requested sleep length in nanoseconds
///
/// Unlike `std::time::Duration` this is signed: the kernel assigns meaning to
/// a few non-positive values (see the `YIELD_*` constants). The value is
/// never clamped or rewritten on its way to the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SleepDuration {
    nanos: i64,
}

impl SleepDuration {
    /// Yield to threads of the same priority on the current core
    pub const YIELD_WITHOUT_CORE_MIGRATION: SleepDuration = SleepDuration::from_nanos(0);
    /// Yield and allow the scheduler to migrate the thread to another core
    pub const YIELD_WITH_CORE_MIGRATION: SleepDuration = SleepDuration::from_nanos(-1);
    /// Yield to any other runnable thread
    pub const YIELD_TO_ANY_THREAD: SleepDuration = SleepDuration::from_nanos(-2);

    /// Creates a duration from nanoseconds
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Creates a duration from microseconds, saturating at the i64 bounds
    pub const fn from_micros(micros: i64) -> Self {
        Self {
            nanos: micros.saturating_mul(1_000),
        }
    }

    /// Creates a duration from milliseconds, saturating at the i64 bounds
    pub const fn from_millis(millis: i64) -> Self {
        Self {
            nanos: millis.saturating_mul(1_000_000),
        }
    }

    /// Creates a duration from seconds, saturating at the i64 bounds
    pub const fn from_secs(secs: i64) -> Self {
        Self {
            nanos: secs.saturating_mul(1_000_000_000),
        }
    }

    /// Returns the duration in nanoseconds
    pub const fn as_nanos(&self) -> i64 {
        self.nanos
    }

    /// Whether the kernel treats this as a yield rather than a timed sleep
    pub const fn is_yield(&self) -> bool {
        self.nanos <= 0
    }
}

impl From<i64> for SleepDuration {
    fn from(nanos: i64) -> Self {
        Self::from_nanos(nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_creation() {
        let d1 = SleepDuration::from_secs(1);
        let d2 = SleepDuration::from_millis(1000);
        let d3 = SleepDuration::from_micros(1_000_000);
        let d4 = SleepDuration::from_nanos(1_000_000_000);

        assert_eq!(d1, d2);
        assert_eq!(d2, d3);
        assert_eq!(d3, d4);
    }

    #[test]
    fn test_duration_saturates() {
        assert_eq!(SleepDuration::from_secs(i64::MAX).as_nanos(), i64::MAX);
        assert_eq!(SleepDuration::from_millis(i64::MIN).as_nanos(), i64::MIN);
    }

    #[test]
    fn test_yield_constants() {
        assert_eq!(SleepDuration::YIELD_WITHOUT_CORE_MIGRATION.as_nanos(), 0);
        assert_eq!(SleepDuration::YIELD_WITH_CORE_MIGRATION.as_nanos(), -1);
        assert_eq!(SleepDuration::YIELD_TO_ANY_THREAD.as_nanos(), -2);
        assert!(SleepDuration::YIELD_TO_ANY_THREAD.is_yield());
        assert!(!SleepDuration::from_millis(50).is_yield());
    }

    #[test]
    fn test_negative_values_are_kept() {
        let d = SleepDuration::from(-12345);
        assert_eq!(d.as_nanos(), -12345);
    }
}
