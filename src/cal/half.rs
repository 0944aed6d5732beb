//! Halves of the year.

use std::fmt;
use std::str::FromStr;

use crate::cal::datetime::Month;
use crate::error::Error;
use crate::field::TemporalField;
use crate::field::half::HALF_OF_YEAR;
use crate::temporal::Temporal;

use self::Half::*;


/// A half of the year: January to June, or July to December.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Half {
    H1 = 1, H2 = 2,
}

impl Half {

    /// Returns the half with the given number, 1 or 2.
    pub fn of(half: i64) -> Result<Self, Error> {
        match HALF_OF_YEAR.range().check_valid_value(half, HALF_OF_YEAR.name())? {
            1 => Ok(H1),
            _ => Ok(H2),
        }
    }

    /// Returns the half a month falls in.
    pub fn from_month(month: Month) -> Self {
        if month <= Month::June { H1 } else { H2 }
    }

    /// Returns the half of any temporal that supports the half-of-year
    /// field.
    ///
    /// ```rust
    /// use datetime_extra::{Half, LocalDate, Month};
    ///
    /// let date = LocalDate::ymd(2023, Month::September, 9).unwrap();
    /// assert_eq!(Half::from_temporal(&date), Ok(Half::H2));
    /// ```
    pub fn from_temporal<T: Temporal>(temporal: &T) -> Result<Self, Error> {
        Self::of(HALF_OF_YEAR.get_from(temporal)?)
    }

    /// The number of the half, 1 or 2.
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Returns the half this many halves later. Adding an odd number
    /// switches to the other half.
    pub fn plus(self, halves: i64) -> Self {
        if halves % 2 == 0 { self }
        else if self == H1 { H2 }
        else               { H1 }
    }

    /// The number of days in this half, 181 or 182 for the first half and
    /// always 184 for the second.
    pub fn length(self, leap_year: bool) -> i16 {
        match self {
            H1 => if leap_year { 182 } else { 181 },
            H2 => 184,
        }
    }

    /// The first month of the half.
    pub fn first_month(self) -> Month {
        match self {
            H1 => Month::January,
            H2 => Month::July,
        }
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "H{}", self.value())
    }
}

impl FromStr for Half {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "H1" | "h1"  => Ok(H1),
            "H2" | "h2"  => Ok(H2),
            _ if input.starts_with('H') || input.starts_with('h') => Err(Error::parse(input, 1)),
            _            => Err(Error::parse(input, 0)),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::LocalDate;

    #[test]
    fn of() {
        assert_eq!(Half::of(1), Ok(H1));
        assert!(Half::of(0).is_err());
        assert!(Half::of(3).is_err());
    }

    #[test]
    fn from_months() {
        assert_eq!(Half::from_month(Month::June), H1);
        assert_eq!(Half::from_month(Month::July), H2);
    }

    #[test]
    fn from_temporal() {
        let date = LocalDate::ymd(2023, Month::March, 9).unwrap();
        assert_eq!(Half::from_temporal(&date), Ok(H1));
    }

    #[test]
    fn wrapping() {
        assert_eq!(H1.plus(1), H2);
        assert_eq!(H2.plus(-3), H1);
        assert_eq!(H2.plus(4), H2);
    }

    #[test]
    fn lengths() {
        assert_eq!(H1.length(false) + H2.length(false), 365);
        assert_eq!(H1.length(true) + H2.length(true), 366);
    }

    #[test]
    fn text() {
        assert_eq!(H2.to_string(), "H2");
        assert_eq!("h1".parse::<Half>(), Ok(H1));
        assert_eq!("H3".parse::<Half>(), Err(Error::parse("H3", 1)));
    }
}
