//! Sources of the current time.
//!
//! Code that needs to know what time it is can take a `Clock` instead of
//! asking the system directly, so tests can hand it a `MutableClock` and
//! move time around at will.

use std::sync::{Arc, PoisonError, RwLock};

use log::trace;

use crate::cal::datetime::{LocalDate, LocalDateTime, LocalTime};
use crate::error::Error;
use crate::field::TemporalField;
use crate::instant::Instant;
use crate::temporal::{Temporal, TemporalAmount};
use crate::unit::CalendarUnit;


/// Something that can say what the current instant is.
pub trait Clock {

    /// The current instant.
    fn instant(&self) -> Instant;

    /// The current date and time, in UTC.
    fn date_time(&self) -> LocalDateTime {
        LocalDateTime::from_instant(self.instant())
    }

    /// The current date, in UTC.
    fn date(&self) -> LocalDate {
        self.date_time().date()
    }

    /// The current time of day, in UTC.
    fn time(&self) -> LocalTime {
        self.date_time().time()
    }
}


/// The clock that reads the computer’s own time.
#[derive(PartialEq, Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn instant(&self) -> Instant {
        Instant::now()
    }
}


/// A clock that stays at a fixed instant until it’s told to move.
///
/// Cloning a mutable clock gives another handle to the same instant, so a
/// test can keep one handle and give the other to the code under test.
///
/// ```rust
/// use datetime_extra::{Clock, Instant, MutableClock};
/// use datetime_extra::unit::CalendarUnit;
///
/// let clock = MutableClock::of(Instant::at(0));
/// let handle = clock.clone();
///
/// clock.add_unit(90, CalendarUnit::Minutes).unwrap();
/// assert_eq!(handle.instant(), Instant::at(5_400));
/// ```
#[derive(Debug, Clone)]
pub struct MutableClock {
    instant: Arc<RwLock<Instant>>,
}

impl MutableClock {

    /// Creates a clock set to the given instant.
    pub fn of(instant: Instant) -> Self {
        Self { instant: Arc::new(RwLock::new(instant)) }
    }

    /// Creates a clock set to the Unix epoch.
    pub fn epoch() -> Self {
        Self::of(Instant::at_epoch())
    }

    /// Moves the clock to the given instant.
    pub fn set_instant(&self, instant: Instant) {
        trace!("Setting clock to {:?}", instant);
        *self.instant.write().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Moves the clock by an amount, such as a `Duration` or a `Period`.
    pub fn add<A: TemporalAmount>(&self, amount: &A) -> Result<(), Error> {
        self.update(|dt| dt.plus_amount(amount))
    }

    /// Moves the clock by a number of some unit.
    pub fn add_unit(&self, amount: i64, unit: CalendarUnit) -> Result<(), Error> {
        self.update(|dt| dt.plus(amount, unit))
    }

    /// Sets one field of the clock’s date or time, in UTC, leaving the
    /// others alone.
    pub fn set_field<F: TemporalField>(&self, field: F, value: i64) -> Result<(), Error> {
        self.update(|dt| dt.with(field, value))
    }

    /// Applies a change to the clock’s date and time. The write lock is
    /// held throughout, and the clock is left alone if the change fails.
    fn update<F>(&self, change: F) -> Result<(), Error>
    where F: FnOnce(LocalDateTime) -> Result<LocalDateTime, Error>
    {
        let mut instant = self.instant.write().unwrap_or_else(PoisonError::into_inner);
        let updated = change(LocalDateTime::from_instant(*instant))?.to_instant();

        trace!("Moving clock from {:?} to {:?}", *instant, updated);
        *instant = updated;
        Ok(())
    }
}

impl Default for MutableClock {
    fn default() -> Self {
        Self::epoch()
    }
}

impl Clock for MutableClock {
    fn instant(&self) -> Instant {
        *self.instant.read().unwrap_or_else(PoisonError::into_inner)
    }
}
