//! Lengths of time on the timeline.

use std::ops::{Add, Sub, Mul};

use crate::error::Error;
use crate::temporal::{Temporal, TemporalAmount};
use crate::unit::CalendarUnit;
use crate::util::{add_exact, mul_exact, neg_exact};


const NANOS_PER_SECOND: i64 = 1_000_000_000;


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with nanosecond precision.
///
/// The nanosecond part is always between 0 and 999,999,999, so a negative
/// duration has a negative number of seconds and a positive adjustment.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy)]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

/// The units a `Duration` exposes as a `TemporalAmount`.
static DURATION_UNITS: &[CalendarUnit] = &[CalendarUnit::Seconds, CalendarUnit::Nanos];

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, nanos: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Create a new duration that’s the given number of milliseconds long.
    pub fn of_millis(millis: i64) -> Self {
        let (seconds, ms) = crate::util::split_cycles(millis, 1_000);
        Self { seconds, nanos: (ms * 1_000_000) as i32 }
    }

    /// Create a new duration that’s the given number of nanoseconds long.
    pub fn of_nanos(nanos: i64) -> Self {
        let (seconds, ns) = crate::util::split_cycles(nanos, NANOS_PER_SECOND);
        Self { seconds, nanos: ns as i32 }
    }

    /// Create a new duration from a number of seconds and a nanosecond
    /// adjustment, which may be outside of a single second.
    pub fn of_seconds_nanos(seconds: i64, nanos: i64) -> Self {
        let (extra, ns) = crate::util::split_cycles(nanos, NANOS_PER_SECOND);
        Self { seconds: seconds.saturating_add(extra), nanos: ns as i32 }
    }

    /// Return the seconds and nanoseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i32) {
        (self.seconds, self.nanos)
    }

    // I’ve done it like this instead of having separate seconds() and
    // nanoseconds() functions, because I think there’s a danger that
    // people will think that nanoseconds() returns the *total* length
    // in nanoseconds, rather than just this particular portion. This
    // way, it’s clear that there are two separate values being returned.

    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// Adds two durations, failing on overflow.
    pub fn checked_add(self, rhs: Self) -> Result<Self, Error> {
        let nanos = self.nanos as i64 + rhs.nanos as i64;
        let seconds = add_exact(self.seconds, rhs.seconds)?;
        Self::of(seconds).with_extra_nanos(nanos)
    }

    /// Subtracts a duration, failing on overflow.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, Error> {
        self.checked_add(rhs.checked_neg()?)
    }

    pub fn checked_neg(self) -> Result<Self, Error> {
        if self.nanos == 0 {
            Ok(Self::of(neg_exact(self.seconds)?))
        }
        else {
            let seconds = neg_exact(add_exact(self.seconds, 1)?)?;
            Ok(Self { seconds, nanos: (NANOS_PER_SECOND - self.nanos as i64) as i32 })
        }
    }

    /// Multiplies this duration by a scalar, failing on overflow.
    pub fn checked_mul(self, amount: i64) -> Result<Self, Error> {
        let nanos = mul_exact(self.nanos as i64, amount)?;
        let seconds = mul_exact(self.seconds, amount)?;
        Self::of(seconds).with_extra_nanos(nanos)
    }

    fn with_extra_nanos(self, nanos: i64) -> Result<Self, Error> {
        let (extra, ns) = crate::util::split_cycles(self.nanos as i64 + nanos % NANOS_PER_SECOND, NANOS_PER_SECOND);
        let seconds = add_exact(add_exact(self.seconds, nanos / NANOS_PER_SECOND)?, extra)?;
        Ok(Self { seconds, nanos: ns as i32 })
    }
}

impl TemporalAmount for Duration {
    fn units(&self) -> &[CalendarUnit] {
        DURATION_UNITS
    }

    fn get(&self, unit: CalendarUnit) -> Result<i64, Error> {
        match unit {
            CalendarUnit::Seconds  => Ok(self.seconds),
            CalendarUnit::Nanos    => Ok(self.nanos as i64),
            _                      => Err(Error::UnsupportedUnit(unit)),
        }
    }

    fn add_to<T: Temporal>(&self, temporal: T) -> Result<T, Error> {
        let mut temporal = temporal;
        if self.seconds != 0 {
            temporal = temporal.plus(self.seconds, CalendarUnit::Seconds)?;
        }
        if self.nanos != 0 {
            temporal = temporal.plus(self.nanos as i64, CalendarUnit::Nanos)?;
        }
        Ok(temporal)
    }

    fn subtract_from<T: Temporal>(&self, temporal: T) -> Result<T, Error> {
        let mut temporal = temporal;
        if self.seconds != 0 {
            temporal = temporal.minus(self.seconds, CalendarUnit::Seconds)?;
        }
        if self.nanos != 0 {
            temporal = temporal.minus(self.nanos as i64, CalendarUnit::Nanos)?;
        }
        Ok(temporal)
    }
}

// The operators panic on overflow, like the primitive integer operators
// do in debug builds. Use the `checked_` methods to handle it.

impl Add<Duration> for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs).expect("overflow when adding durations")
    }
}

impl Sub<Duration> for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        self.checked_sub(rhs).expect("overflow when subtracting durations")
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, amount: i64) -> Duration {
        self.checked_mul(amount).expect("overflow when multiplying duration")
    }
}

#[cfg(test)]
mod test {
    pub use super::Duration;

    mod addition {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(10), Duration::of(2) + Duration::of(8))
        }

        #[test]
        fn milliseconds() {
            assert_eq!(Duration::of_millis(500), Duration::of_millis(167) + Duration::of_millis(333))
        }

        #[test]
        fn wrapping() {
            assert_eq!(Duration::of_millis(1_500), Duration::of_millis(750) + Duration::of_millis(750))
        }

        #[test]
        fn overflow() {
            assert!(Duration::of(i64::MAX).checked_add(Duration::of(1)).is_err())
        }
    }

    mod subtraction {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(13), Duration::of(28) - Duration::of(15))
        }

        #[test]
        fn wrapping() {
            assert_eq!(Duration::of_millis(750), Duration::of_millis(1_500) - Duration::of_millis(750))
        }

        #[test]
        fn into_negative() {
            assert_eq!(Duration::of_millis(-250), Duration::of_millis(500) - Duration::of_millis(750));
            assert_eq!(Duration::of_millis(-250).lengths(), (-1, 750_000_000));
        }
    }

    mod multiplication {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(16), Duration::of(8) * 2)
        }

        #[test]
        fn milliseconds() {
            assert_eq!(Duration::of(1), Duration::of_millis(500) * 2)
        }

        #[test]
        fn negative() {
            assert_eq!(Duration::of_millis(-1_500), Duration::of_millis(500) * -3)
        }
    }

    #[test]
    fn nanos_normalise() {
        assert_eq!(Duration::of_nanos(1_000_000_001).lengths(), (1, 1));
        assert_eq!(Duration::of_seconds_nanos(2, -1).lengths(), (1, 999_999_999));
    }
}
