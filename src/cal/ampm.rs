//! Morning and afternoon.

use std::fmt;

use crate::error::Error;
use crate::field::ChronoField;
use crate::temporal::Temporal;


/// Whether a time is before or after midday.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum AmPm {
    Am = 0,
    Pm = 1,
}

impl AmPm {

    /// Returns the half of the day with the given number: 0 for AM, 1 for
    /// PM.
    pub fn of(value: i64) -> Result<Self, Error> {
        match ChronoField::AmPmOfDay.check_valid_value(value)? {
            0 => Ok(AmPm::Am),
            _ => Ok(AmPm::Pm),
        }
    }

    /// Returns the half of the day an hour falls in.
    ///
    /// ```rust
    /// use datetime_extra::AmPm;
    ///
    /// assert_eq!(AmPm::of_hour(11), Ok(AmPm::Am));
    /// assert_eq!(AmPm::of_hour(12), Ok(AmPm::Pm));
    /// assert!(AmPm::of_hour(24).is_err());
    /// ```
    pub fn of_hour(hour: i64) -> Result<Self, Error> {
        Self::of(ChronoField::HourOfDay.check_valid_value(hour)? / 12)
    }

    pub fn from_temporal<T: Temporal>(temporal: &T) -> Result<Self, Error> {
        Self::of(temporal.get_field(ChronoField::AmPmOfDay)?)
    }

    pub fn value(self) -> i64 {
        self as i64
    }
}

impl fmt::Display for AmPm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AmPm::Am => f.write_str("AM"),
            AmPm::Pm => f.write_str("PM"),
        }
    }
}
