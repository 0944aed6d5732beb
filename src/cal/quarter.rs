//! Quarters of the year.

use std::fmt;
use std::str::FromStr;

use crate::cal::datetime::Month;
use crate::error::Error;
use crate::field::ChronoField;
use crate::temporal::Temporal;
use crate::util::split_cycles;

use self::Quarter::*;


/// A quarter of the year: three months, starting in January, April, July,
/// or October.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Quarter {
    Q1 = 1, Q2 = 2, Q3 = 3, Q4 = 4,
}

static QUARTERS: &[Quarter] = &[ Q1, Q2, Q3, Q4 ];

impl Quarter {

    /// Returns the quarter with the given number, from 1 to 4.
    ///
    /// ```rust
    /// use datetime_extra::Quarter;
    ///
    /// assert_eq!(Quarter::of(3), Ok(Quarter::Q3));
    /// assert!(Quarter::of(5).is_err());
    /// ```
    pub fn of(quarter: i64) -> Result<Self, Error> {
        let quarter = ChronoField::QuarterOfYear.check_valid_value(quarter)?;
        Ok(QUARTERS[quarter as usize - 1])
    }

    /// Returns the quarter a month falls in.
    pub fn from_month(month: Month) -> Self {
        QUARTERS[month.months_from_january() / 3]
    }

    /// Returns the quarter of any temporal that has a quarter-of-year.
    pub fn from_temporal<T: Temporal>(temporal: &T) -> Result<Self, Error> {
        Self::of(temporal.get_field(ChronoField::QuarterOfYear)?)
    }

    /// The number of the quarter, from 1 to 4.
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Returns the quarter this many quarters later, wrapping around from
    /// Q4 back to Q1.
    pub fn plus(self, quarters: i64) -> Self {
        let (_, index) = split_cycles(self as i64 - 1 + quarters % 4, 4);
        QUARTERS[index as usize]
    }

    /// Returns the quarter this many quarters earlier.
    pub fn minus(self, quarters: i64) -> Self {
        self.plus(-(quarters % 4))
    }

    /// The number of days in this quarter, which depends on whether it’s a
    /// leap year for the first quarter.
    pub fn length(self, leap_year: bool) -> i16 {
        match self {
            Q1 => if leap_year { 91 } else { 90 },
            Q2 => 91,
            Q3 | Q4 => 92,
        }
    }

    /// The first month of the quarter.
    pub fn first_month(self) -> Month {
        match self {
            Q1 => Month::January,
            Q2 => Month::April,
            Q3 => Month::July,
            Q4 => Month::October,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Q{}", self.value())
    }
}

impl FromStr for Quarter {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.as_bytes() {
            [b'Q', n] | [b'q', n] if (b'1' ..= b'4').contains(n) => Ok(QUARTERS[(n - b'1') as usize]),
            [b'Q', ..] | [b'q', ..] => Err(Error::parse(input, 1)),
            _                       => Err(Error::parse(input, 0)),
        }
    }
}
