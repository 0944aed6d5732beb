#![crate_name = "datetime_extra"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Calendar value types and unit arithmetic on top of ISO-8601 dates and
//! times: halves and quarters of the year, AM and PM, hour-minutes, date
//! ranges, and amounts of time in a single unit.
//!
//! # Examples
//!
//! ```
//! use datetime_extra::{DatePiece, Half, LocalDate, Month, Weeks};
//! use datetime_extra::field::half::{DAY_OF_HALF, HALF_OF_YEAR};
//! use datetime_extra::temporal::Temporal;
//!
//! let date = LocalDate::ymd(2023, Month::August, 2).unwrap();
//! assert_eq!(Half::from_temporal(&date), Ok(Half::H2));
//! assert_eq!(date.get(DAY_OF_HALF), Ok(33));
//!
//! let later = date.plus_amount(&Weeks::of(3)).unwrap();
//! assert_eq!(later.day(), 23);
//!
//! let back = later.with(HALF_OF_YEAR, 1).unwrap();
//! assert_eq!(back.month(), Month::February);
//! ```

pub mod cal;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Year, YearMonth};
pub use crate::cal::datetime::Error as DateError;
pub use crate::cal::fmt::{ISO, ISOString};
pub use crate::cal::convenience::Now;
pub use crate::cal::ampm::AmPm;
pub use crate::cal::half::Half;
pub use crate::cal::hour_minute::HourMinute;
pub use crate::cal::quarter::Quarter;
pub use crate::cal::range::{LocalDateRange, RangeDates};

#[cfg(feature="format")]
pub use crate::cal::fmt::custom as format;

#[cfg(feature="parse")]
pub use crate::cal::parse::Error as ParseError;

pub mod amount;
pub use crate::amount::{Amount, Seconds, Minutes, Hours, Days, Weeks, Months, Years};

pub mod clock;
pub use crate::clock::{Clock, MutableClock, SystemClock};

pub mod duration;
pub use crate::duration::Duration;

mod error;
pub use crate::error::Error;

pub mod field;

pub mod instant;
pub use crate::instant::Instant;

pub mod period;
pub use crate::period::Period;

mod system;

pub mod temporal;

pub mod unit;

mod util;
