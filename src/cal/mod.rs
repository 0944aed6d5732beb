//! ISO-8601 date and time calculations, which use years, months, days,
//! hours, minutes, and seconds, along with the halves, quarters, and
//! other divisions of them.

pub(crate) mod datetime;
pub mod fmt;
#[cfg(feature="parse")] pub(crate) mod parse;
pub(crate) mod temporal;
pub mod convenience;

pub(crate) mod ampm;
pub(crate) mod half;
pub(crate) mod hour_minute;
pub(crate) mod quarter;
pub(crate) mod range;

use self::datetime::{Weekday, Month};
use self::ampm::AmPm;
use self::half::Half;
use self::quarter::Quarter;


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// The half of the year the month falls in.
    fn half(&self) -> Half { Half::from_month(self.month()) }

    /// The quarter of the year the month falls in.
    fn quarter(&self) -> Quarter { Quarter::from_month(self.month()) }

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year() % 100 }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day, from 0 to 23.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16;

    /// Whether the time is before or after noon.
    fn am_pm(&self) -> AmPm { if self.hour() < 12 { AmPm::Am } else { AmPm::Pm } }
}
