//! Date-based amounts of years, months, and days.

use std::fmt;
use std::str::FromStr;

use crate::amount::parse::{scan, Designator, Grammar};
use crate::cal::DatePiece;
use crate::cal::datetime::{LocalDate, Year};
use crate::error::Error;
use crate::temporal::{Temporal, TemporalAmount};
use crate::unit::CalendarUnit;
use crate::util::{add_exact, mul_exact, neg_exact, to_int_exact};


/// A **period** is an amount of time measured in years, months, and days,
/// such as “2 years, 3 months, and 4 days”.
///
/// Unlike a `Duration`, a period has no fixed length: adding one month to
/// a date in January moves it a different number of days than adding one
/// month to a date in February. The three parts are stored separately and
/// are never normalised into each other unless you ask.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

static PERIOD_UNITS: &[CalendarUnit] = &[CalendarUnit::Years, CalendarUnit::Months, CalendarUnit::Days];

static PERIOD_GRAMMAR: Grammar = Grammar {
    date: &[ Designator { symbol: b'Y', multiplier: 1 },
             Designator { symbol: b'M', multiplier: 1 },
             Designator { symbol: b'W', multiplier: 7 },
             Designator { symbol: b'D', multiplier: 1 } ],
    time: &[],
};

impl Period {

    /// A period of no time at all.
    pub const ZERO: Self = Self { years: 0, months: 0, days: 0 };

    pub const fn of(years: i32, months: i32, days: i32) -> Self {
        Self { years, months, days }
    }

    pub const fn of_years(years: i32) -> Self {
        Self::of(years, 0, 0)
    }

    pub const fn of_months(months: i32) -> Self {
        Self::of(0, months, 0)
    }

    /// Creates a period of the given number of weeks, stored as days.
    pub fn of_weeks(weeks: i32) -> Result<Self, Error> {
        Ok(Self::of(0, 0, mul_exact(weeks, 7)?))
    }

    pub const fn of_days(days: i32) -> Self {
        Self::of(0, 0, days)
    }

    /// Returns the period between two dates, with the start included and
    /// the end excluded. The months part is always less than twelve, and
    /// all three parts have the same sign.
    ///
    /// ```rust
    /// use datetime_extra::{LocalDate, Month, Period};
    ///
    /// let start = LocalDate::ymd(2020, Month::January, 31).unwrap();
    /// let end   = LocalDate::ymd(2021, Month::March, 1).unwrap();
    /// assert_eq!(Period::between(&start, &end), Ok(Period::of(1, 1, 1)));
    /// ```
    pub fn between(start: &LocalDate, end: &LocalDate) -> Result<Self, Error> {
        let mut total_months = end.proleptic_month() - start.proleptic_month();
        let mut days = i64::from(end.day()) - i64::from(start.day());

        if total_months > 0 && days < 0 {
            total_months -= 1;
            let calculated = start.plus_months(total_months)?;
            days = end.epoch_day() - calculated.epoch_day();
        }
        else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(Year(end.year()).month(end.month()).day_count());
        }

        Ok(Self {
            years:  to_int_exact(total_months / 12)?,
            months: to_int_exact(total_months % 12)?,
            days:   to_int_exact(days)?,
        })
    }

    pub fn years(&self) -> i32 {
        self.years
    }

    pub fn months(&self) -> i32 {
        self.months
    }

    pub fn days(&self) -> i32 {
        self.days
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns whether any of the three parts is negative.
    pub fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// The years and months parts together, as a number of months.
    pub fn to_total_months(&self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }

    /// Adds each part of the other period to the matching part of this
    /// one.
    pub fn plus(self, other: Self) -> Result<Self, Error> {
        Ok(Self {
            years:  add_exact(self.years, other.years)?,
            months: add_exact(self.months, other.months)?,
            days:   add_exact(self.days, other.days)?,
        })
    }

    pub fn multiplied_by(self, scalar: i32) -> Result<Self, Error> {
        Ok(Self {
            years:  mul_exact(self.years, scalar)?,
            months: mul_exact(self.months, scalar)?,
            days:   mul_exact(self.days, scalar)?,
        })
    }

    pub fn negated(self) -> Result<Self, Error> {
        Ok(Self {
            years:  neg_exact(self.years)?,
            months: neg_exact(self.months)?,
            days:   neg_exact(self.days)?,
        })
    }

    /// Moves whole years out of the months part, so the months part ends
    /// up between -11 and 11. Days are left alone.
    pub fn normalized(self) -> Result<Self, Error> {
        let total = self.to_total_months();
        Ok(Self {
            years:  to_int_exact(total / 12)?,
            months: (total % 12) as i32,
            days:   self.days,
        })
    }
}

impl TemporalAmount for Period {
    fn units(&self) -> &[CalendarUnit] {
        PERIOD_UNITS
    }

    fn get(&self, unit: CalendarUnit) -> Result<i64, Error> {
        match unit {
            CalendarUnit::Years   => Ok(i64::from(self.years)),
            CalendarUnit::Months  => Ok(i64::from(self.months)),
            CalendarUnit::Days    => Ok(i64::from(self.days)),
            _                     => Err(Error::UnsupportedUnit(unit)),
        }
    }

    fn add_to<T: Temporal>(&self, temporal: T) -> Result<T, Error> {
        let mut temporal = temporal;

        let months = self.to_total_months();
        if months != 0 {
            temporal = temporal.plus(months, CalendarUnit::Months)?;
        }

        if self.days != 0 {
            temporal = temporal.plus(i64::from(self.days), CalendarUnit::Days)?;
        }

        Ok(temporal)
    }

    fn subtract_from<T: Temporal>(&self, temporal: T) -> Result<T, Error> {
        let mut temporal = temporal;

        let months = self.to_total_months();
        if months != 0 {
            temporal = temporal.minus(months, CalendarUnit::Months)?;
        }

        if self.days != 0 {
            temporal = temporal.minus(i64::from(self.days), CalendarUnit::Days)?;
        }

        Ok(temporal)
    }
}

impl fmt::Debug for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Period({})", self)
    }
}

/// Formats the period as `PnYnMnD`, leaving out any zero parts, or as
/// `P0D` for a zero period.
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }

        f.write_str("P")?;
        if self.years != 0  { write!(f, "{}Y", self.years)?; }
        if self.months != 0 { write!(f, "{}M", self.months)?; }
        if self.days != 0   { write!(f, "{}D", self.days)?; }
        Ok(())
    }
}

/// Parses the `PnYnMnWnD` form. Weeks are added into the days, and a
/// leading minus sign negates every part.
impl FromStr for Period {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let scanned = scan(input, &PERIOD_GRAMMAR)?;

        let mut period = Self::ZERO;
        for &(designator, value) in &scanned.components {
            let part = match designator.symbol {
                b'Y'  => Self::of_years(value),
                b'M'  => Self::of_months(value),
                b'W'  => Self::of_weeks(value)?,
                _     => Self::of_days(value),
            };
            period = period.plus(part)?;
        }

        if scanned.negative { period.negated() }
                       else { Ok(period) }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::Month;

    fn date(year: i64, month: Month, day: i8) -> LocalDate {
        LocalDate::ymd(year, month, day).unwrap()
    }

    mod between {
        use super::*;

        #[test]
        fn forwards() {
            let start = date(2023, Month::January, 15);
            assert_eq!(Period::between(&start, &date(2023, Month::January, 20)), Ok(Period::of_days(5)));
            assert_eq!(Period::between(&start, &date(2024, Month::March, 14)), Ok(Period::of(1, 1, 28)));
        }

        #[test]
        fn backwards() {
            let start = date(2023, Month::March, 10);
            assert_eq!(Period::between(&start, &date(2023, Month::February, 15)), Ok(Period::of(0, 0, -23)));
            assert_eq!(Period::between(&start, &date(2022, Month::January, 10)), Ok(Period::of(-1, -2, 0)));
        }

        #[test]
        fn same_day() {
            let day = date(2000, Month::February, 29);
            assert_eq!(Period::between(&day, &day), Ok(Period::ZERO));
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn added_to_a_date() {
            let start = date(2023, Month::January, 31);
            assert_eq!(start.plus_amount(&Period::of(0, 1, 1)), Ok(date(2023, Month::March, 1)));
            assert_eq!(start.minus_amount(&Period::of(1, 0, 31)), Ok(date(2021, Month::December, 31)));
        }

        #[test]
        fn normalising() {
            assert_eq!(Period::of(1, 15, 40).normalized(), Ok(Period::of(2, 3, 40)));
            assert_eq!(Period::of(1, -15, 0).normalized(), Ok(Period::of(0, -3, 0)));
        }

        #[test]
        fn overflow() {
            assert_eq!(Period::of_days(i32::MAX).plus(Period::of_days(1)), Err(Error::Overflow));
            assert_eq!(Period::of_years(i32::MIN).negated(), Err(Error::Overflow));
        }
    }

    mod text {
        use super::*;

        #[test]
        fn display() {
            assert_eq!(Period::ZERO.to_string(), "P0D");
            assert_eq!(Period::of(1, 0, -3).to_string(), "P1Y-3D");
            assert_eq!(format!("{:?}", Period::of_months(6)), "Period(P6M)");
        }

        #[test]
        fn parse() {
            assert_eq!("P1Y2M3D".parse::<Period>(), Ok(Period::of(1, 2, 3)));
            assert_eq!("p2w1d".parse::<Period>(), Ok(Period::of_days(15)));
            assert_eq!("-P1Y-2M".parse::<Period>(), Ok(Period::of(-1, 2, 0)));
            assert_eq!("P1D2Y".parse::<Period>(), Err(Error::parse("P1D2Y", 4)));
            assert_eq!("PT1H".parse::<Period>(), Err(Error::parse("PT1H", 3)));
        }
    }
}
