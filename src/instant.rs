//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};

use crate::duration::Duration;
use crate::error::Error;
use crate::system::sys_time;
use crate::util::{add_exact, split_cycles, sub_exact};


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with millisecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds, and a
/// 16-bit integer of milliseconds, which is always between 0 and 999.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    milliseconds: i16,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero milliseconds.
    pub fn at(seconds: i64) -> Self {
        Self::at_ms(seconds, 0)
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of milliseconds so far this
    /// second. Milliseconds outside of 0 to 999 carry into the seconds.
    pub fn at_ms(seconds: i64, milliseconds: i16) -> Self {
        let (extra, milliseconds) = split_cycles(i64::from(milliseconds), 1000);
        Self { seconds: seconds + extra, milliseconds: milliseconds as i16 }
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, milliseconds) = unsafe { sys_time() };
        Self { seconds, milliseconds }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of milliseconds at this instant
    pub fn milliseconds(&self) -> i16 {
        self.milliseconds
    }

    /// Returns this instant moved forward by a duration. Any part of the
    /// duration smaller than a millisecond is dropped.
    pub fn checked_add(self, duration: Duration) -> Result<Self, Error> {
        let (seconds, nanos) = duration.lengths();
        let milliseconds = self.milliseconds + (nanos / 1_000_000) as i16;
        let (extra, milliseconds) = split_cycles(i64::from(milliseconds), 1000);

        Ok(Self {
            seconds: add_exact(add_exact(self.seconds, seconds)?, extra)?,
            milliseconds: milliseconds as i16,
        })
    }

    /// Returns this instant moved back by a duration.
    pub fn checked_sub(self, duration: Duration) -> Result<Self, Error> {
        self.checked_add(duration.checked_neg()?)
    }

    /// Returns the duration from this instant to a later one, which is
    /// negative if the other one is earlier.
    pub fn duration_until(&self, end: &Self) -> Result<Duration, Error> {
        let seconds = sub_exact(end.seconds, self.seconds)?;
        let millis = i64::from(end.milliseconds) - i64::from(self.milliseconds);
        Duration::of(seconds).checked_add(Duration::of_millis(millis))
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ms)", self.seconds, self.milliseconds)
    }
}

// Like the duration operators, these panic on overflow.

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        self.checked_add(duration).expect("instant out of range")
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self.checked_sub(duration).expect("instant out of range")
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn carrying_milliseconds() {
        assert_eq!(Instant::at_ms(10, 1500), Instant::at_ms(11, 500));
        assert_eq!(Instant::at_ms(10, -1), Instant::at_ms(9, 999));
    }

    #[test]
    fn adding_durations() {
        let instant = Instant::at_ms(100, 900);
        assert_eq!(instant + Duration::of_millis(250), Instant::at_ms(101, 150));
        assert_eq!(instant - Duration::of_millis(901), Instant::at_ms(99, 999));
        assert_eq!(instant.checked_add(Duration::of_nanos(1_999_999)), Ok(Instant::at_ms(100, 901)));
    }

    #[test]
    fn overflow() {
        assert_eq!(Instant::at(i64::MAX).checked_add(Duration::of(1)), Err(Error::Overflow));
    }

    #[test]
    fn durations_between() {
        let start = Instant::at_ms(5, 750);
        assert_eq!(start.duration_until(&Instant::at_ms(7, 250)), Ok(Duration::of_millis(1500)));
        assert_eq!(Instant::at_ms(7, 250).duration_until(&start), Ok(Duration::of_millis(-1500)));
    }
}
