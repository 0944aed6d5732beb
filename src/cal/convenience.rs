//! Adds convenience functions to some structs.
//!
//! # Example
//! ```
//! use datetime_extra::{LocalDate, MutableClock, Instant};
//! use datetime_extra::cal::convenience::Now;
//!
//! let today = LocalDate::current();
//!
//! let clock = MutableClock::of(Instant::at(0));
//! assert_eq!(LocalDate::now_from(&clock), LocalDate::from_epoch_day(0).unwrap());
//! ```

use crate::cal::datetime::{LocalDate, LocalDateTime, LocalTime};
use crate::cal::hour_minute::HourMinute;
use crate::clock::{Clock, SystemClock};


/// Values that can be read off a clock.
pub trait Now: Sized {

    /// Reads this value off the given clock, in UTC.
    fn now_from<C: Clock + ?Sized>(clock: &C) -> Self;

    /// Reads this value off the system clock, in UTC.
    fn current() -> Self {
        Self::now_from(&SystemClock)
    }
}

impl Now for LocalDate {
    fn now_from<C: Clock + ?Sized>(clock: &C) -> Self {
        clock.date()
    }
}

impl Now for LocalTime {
    fn now_from<C: Clock + ?Sized>(clock: &C) -> Self {
        clock.time()
    }
}

impl Now for LocalDateTime {
    fn now_from<C: Clock + ?Sized>(clock: &C) -> Self {
        clock.date_time()
    }
}

impl Now for HourMinute {
    fn now_from<C: Clock + ?Sized>(clock: &C) -> Self {
        HourMinute::from(clock.time())
    }
}
