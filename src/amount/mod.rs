//! Amounts of time in a single unit, such as “5 seconds” or “3 weeks”.
//!
//! Each of the seven amount types is an `Amount` tagged with a marker
//! type for its unit, so `Seconds` and `Minutes` share all their
//! arithmetic and parsing, yet can never be mixed up with each other. To
//! move between them, go through `from_amount`, which only succeeds when
//! the conversion is exact.
//!
//! ```rust
//! use datetime_extra::{Hours, Minutes};
//!
//! let minutes: Minutes = "PT1H30M".parse().unwrap();
//! assert_eq!(minutes.amount(), 90);
//!
//! assert_eq!(Hours::from_amount(&Minutes::of(120)), Ok(Hours::of(2)));
//! assert!(Hours::from_amount(&minutes).is_err());
//! ```

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::str::FromStr;

use log::trace;

use crate::duration::Duration;
use crate::error::Error;
use crate::period::Period;
use crate::temporal::{Temporal, TemporalAmount, TemporalUnit};
use crate::unit::{convert, CalendarUnit};
use crate::util::{add_exact, mul_exact, sub_exact, to_int_exact};

pub(crate) mod parse;
pub use self::parse::{Designator, Grammar};
use self::parse::scan;


/// The unit an `Amount` is counted in. This is only implemented by the
/// marker types in the `marker` module.
pub trait AmountUnit: Copy + Eq + Ord + Hash + fmt::Debug + 'static {

    /// The calendar unit one of these is worth.
    const UNIT: CalendarUnit;

    /// The name of the amount type, used when debugging.
    const NAME: &'static str;

    /// The letter written after the number, such as the `S` in `PT5S`.
    const SYMBOL: char;

    /// Whether the number goes after a `T` when written out.
    const TIME_BASED: bool;

    /// The designators accepted when parsing.
    const GRAMMAR: Grammar;

    /// The calendar unit, as a slice.
    const UNITS: &'static [CalendarUnit];
}

/// The unit markers. These types have no values; they only exist to tell
/// the amount types apart.
pub mod marker {
    use super::*;

    macro_rules! marker {
        ($marker: ident, $name: expr, $unit: ident, $symbol: expr, $time: expr, [ $( $date_d: expr => $date_m: expr ),* ], [ $( $time_d: expr => $time_m: expr ),* ]) => {
            #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
            pub enum $marker {}

            impl AmountUnit for $marker {
                const UNIT: CalendarUnit = CalendarUnit::$unit;
                const NAME: &'static str = $name;
                const SYMBOL: char = $symbol;
                const TIME_BASED: bool = $time;
                const GRAMMAR: Grammar = Grammar {
                    date: &[ $( Designator { symbol: $date_d, multiplier: $date_m } ),* ],
                    time: &[ $( Designator { symbol: $time_d, multiplier: $time_m } ),* ],
                };
                const UNITS: &'static [CalendarUnit] = &[ CalendarUnit::$unit ];
            }
        };
    }

    marker!(Second, "Seconds", Seconds, 'S', true,  [ b'D' => 86_400 ], [ b'H' => 3_600, b'M' => 60, b'S' => 1 ]);
    marker!(Minute, "Minutes", Minutes, 'M', true,  [ b'D' => 1_440 ],  [ b'H' => 60, b'M' => 1 ]);
    marker!(Hour,   "Hours",   Hours,   'H', true,  [ b'D' => 24 ],     [ b'H' => 1 ]);
    marker!(Day,    "Days",    Days,    'D', false, [ b'W' => 7, b'D' => 1 ], []);
    marker!(Week,   "Weeks",   Weeks,   'W', false, [ b'W' => 1 ], []);
    marker!(Month,  "Months",  Months,  'M', false, [ b'Y' => 12, b'M' => 1 ], []);
    marker!(Year,   "Years",   Years,   'Y', false, [ b'Y' => 1 ], []);
}


/// A whole number of a single unit of time.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Amount<U: AmountUnit> {
    amount: i32,
    unit: PhantomData<U>,
}

pub type Seconds = Amount<marker::Second>;
pub type Minutes = Amount<marker::Minute>;
pub type Hours   = Amount<marker::Hour>;
pub type Days    = Amount<marker::Day>;
pub type Weeks   = Amount<marker::Week>;
pub type Months  = Amount<marker::Month>;
pub type Years   = Amount<marker::Year>;

impl<U: AmountUnit> Amount<U> {

    /// An amount of zero.
    pub const ZERO: Self = Self::of(0);

    pub const fn of(amount: i32) -> Self {
        Self { amount, unit: PhantomData }
    }

    /// Converts any temporal amount into this unit. Every non-zero part of
    /// the amount has to convert exactly: two hours can become minutes,
    /// but ninety minutes can’t become hours.
    pub fn from_amount<A: TemporalAmount>(amount: &A) -> Result<Self, Error> {
        let mut total = 0_i32;

        for &unit in amount.units() {
            let value = amount.get(unit)?;
            if value == 0 {
                continue;
            }

            let (converted, remainder) = convert(value, unit, U::UNIT)?;
            if remainder != 0 {
                trace!("{} {} leaves {} over as {}", value, unit, remainder, U::NAME);
                return Err(Error::IncompatibleAmount { value, unit, target: U::UNIT });
            }

            total = add_exact(total, to_int_exact(converted)?)?;
        }

        Ok(Self::of(total))
    }

    /// Returns the whole number of units between two temporals.
    pub fn between<T: Temporal>(start: &T, end: &T) -> Result<Self, Error> {
        Ok(Self::of(to_int_exact(U::UNIT.between(start, end)?)?))
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    pub fn plus(self, other: Self) -> Result<Self, Error> {
        self.plus_value(other.amount)
    }

    pub fn minus(self, other: Self) -> Result<Self, Error> {
        self.minus_value(other.amount)
    }

    /// Adds any temporal amount, which has to convert exactly into this
    /// unit.
    pub fn plus_amount<A: TemporalAmount>(self, other: &A) -> Result<Self, Error> {
        self.plus(Self::from_amount(other)?)
    }

    pub fn minus_amount<A: TemporalAmount>(self, other: &A) -> Result<Self, Error> {
        self.minus(Self::from_amount(other)?)
    }

    pub fn plus_value(self, amount: i32) -> Result<Self, Error> {
        if amount == 0 {
            return Ok(self);
        }

        Ok(Self::of(add_exact(self.amount, amount)?))
    }

    pub fn minus_value(self, amount: i32) -> Result<Self, Error> {
        if amount == 0 {
            return Ok(self);
        }

        Ok(Self::of(sub_exact(self.amount, amount)?))
    }

    pub fn multiplied_by(self, scalar: i32) -> Result<Self, Error> {
        if scalar == 1 {
            return Ok(self);
        }

        Ok(Self::of(mul_exact(self.amount, scalar)?))
    }

    /// Divides the amount, rounding towards zero.
    pub fn divided_by(self, divisor: i32) -> Result<Self, Error> {
        match divisor {
            0 => Err(Error::DivideByZero),
            1 => Ok(self),
            _ => self.amount.checked_div(divisor).map(Self::of).ok_or(Error::Overflow),
        }
    }

    pub fn negated(self) -> Result<Self, Error> {
        self.multiplied_by(-1)
    }

    pub fn abs(self) -> Result<Self, Error> {
        if self.is_negative() { self.negated() }
                         else { Ok(self) }
    }
}

impl Seconds {

    pub fn of_minutes(minutes: i32) -> Result<Self, Error> {
        Ok(Self::of(mul_exact(minutes, 60)?))
    }

    pub fn of_hours(hours: i32) -> Result<Self, Error> {
        Ok(Self::of(mul_exact(hours, 3_600)?))
    }

    pub fn to_duration(&self) -> Duration {
        Duration::of(i64::from(self.amount))
    }
}

impl Minutes {

    pub fn of_hours(hours: i32) -> Result<Self, Error> {
        Ok(Self::of(mul_exact(hours, 60)?))
    }

    pub fn to_duration(&self) -> Duration {
        Duration::of(i64::from(self.amount) * 60)
    }
}

impl Hours {
    pub fn to_duration(&self) -> Duration {
        Duration::of(i64::from(self.amount) * 3_600)
    }
}

impl Days {

    pub fn of_weeks(weeks: i32) -> Result<Self, Error> {
        Ok(Self::of(mul_exact(weeks, 7)?))
    }

    pub fn to_period(&self) -> Period {
        Period::of_days(self.amount)
    }
}

impl Weeks {
    pub fn to_period(&self) -> Result<Period, Error> {
        Period::of_weeks(self.amount)
    }
}

impl Months {

    pub fn of_years(years: i32) -> Result<Self, Error> {
        Ok(Self::of(mul_exact(years, 12)?))
    }

    pub fn to_period(&self) -> Period {
        Period::of_months(self.amount)
    }
}

impl Years {
    pub fn to_period(&self) -> Period {
        Period::of_years(self.amount)
    }
}

impl<U: AmountUnit> TemporalAmount for Amount<U> {
    fn units(&self) -> &[CalendarUnit] {
        U::UNITS
    }

    fn get(&self, unit: CalendarUnit) -> Result<i64, Error> {
        if unit == U::UNIT {
            Ok(i64::from(self.amount))
        }
        else {
            Err(Error::UnsupportedUnit(unit))
        }
    }

    fn add_to<T: Temporal>(&self, temporal: T) -> Result<T, Error> {
        if self.is_zero() {
            return Ok(temporal);
        }

        temporal.plus(i64::from(self.amount), U::UNIT)
    }

    fn subtract_from<T: Temporal>(&self, temporal: T) -> Result<T, Error> {
        if self.is_zero() {
            return Ok(temporal);
        }

        temporal.minus(i64::from(self.amount), U::UNIT)
    }
}

impl<U: AmountUnit> fmt::Debug for Amount<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", U::NAME, self)
    }
}

/// Formats the amount in ISO-8601 form, such as `PT5S` or `P-2W`.
impl<U: AmountUnit> fmt::Display for Amount<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prefix = if U::TIME_BASED { "PT" } else { "P" };
        write!(f, "{}{}{}", prefix, self.amount, U::SYMBOL)
    }
}

/// Parses an ISO-8601 duration, accepting any designators that convert
/// exactly into this unit: `P1DT2H` is a valid number of minutes, but not
/// a valid number of days.
impl<U: AmountUnit> FromStr for Amount<U> {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let total = scan(input, &U::GRAMMAR)?.total()?;
        Ok(Self::of(total))
    }
}

impl<U: AmountUnit> Default for Amount<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: AmountUnit> From<Amount<U>> for i64 {
    fn from(amount: Amount<U>) -> i64 {
        i64::from(amount.amount)
    }
}
