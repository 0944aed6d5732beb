//! Fields: the named parts of a date or time, such as the month of the
//! year or the day of the half-year.
//!
//! Each field is a stateless descriptor that knows its valid range, how to
//! read its value from a temporal, how to set it, and (for some fields) how
//! to combine it with other fields to produce a date. The built-in fields
//! live in `ChronoField`; the half-year fields live in `half`.

pub mod half;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::cal::datetime::{LocalDate, Month};
use crate::error::Error;
use crate::util::sub_exact;
use crate::temporal::Temporal;
use crate::unit::CalendarUnit;

use self::half::{HalfField, DAY_OF_HALF};


/// The range of valid values for a field.
///
/// Some fields have a range that depends on the date it’s being applied
/// to, such as the day of the month, which can end anywhere from 28 to 31.
/// This is expressed through a *largest minimum* and a *smallest maximum*:
/// every value from `largest_min` to `smallest_max` is always valid, and
/// every value outside of `min` to `max` never is.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct ValueRange {
    min: i64,
    largest_min: i64,
    smallest_max: i64,
    max: i64,
}

impl ValueRange {

    /// Creates a fixed range, where every value from `min` to `max`
    /// inclusive is valid.
    pub const fn of(min: i64, max: i64) -> Self {
        Self { min, largest_min: min, smallest_max: max, max }
    }

    /// Creates a range with a fixed minimum and a maximum that varies
    /// between `smallest_max` and `max`.
    pub const fn of_variable(min: i64, smallest_max: i64, max: i64) -> Self {
        Self { min, largest_min: min, smallest_max, max }
    }

    pub fn min(&self) -> i64 { self.min }
    pub fn largest_min(&self) -> i64 { self.largest_min }
    pub fn smallest_max(&self) -> i64 { self.smallest_max }
    pub fn max(&self) -> i64 { self.max }

    /// Returns whether the range is the same regardless of context.
    pub fn is_fixed(&self) -> bool {
        self.min == self.largest_min && self.smallest_max == self.max
    }

    /// Returns whether the value is within the outer bounds of the range.
    pub fn is_valid_value(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks the value, returning it if it’s within the range and an
    /// error naming the field if it isn’t.
    pub fn check_valid_value(&self, value: i64, field: &'static str) -> Result<i64, Error> {
        if self.is_valid_value(value) {
            Ok(value)
        }
        else {
            Err(Error::OutOfRange { field, value, range: *self })
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.min)?;
        if self.min != self.largest_min {
            write!(f, "/{}", self.largest_min)?;
        }
        write!(f, " - {}", self.smallest_max)?;
        if self.smallest_max != self.max {
            write!(f, "/{}", self.max)?;
        }
        Ok(())
    }
}


/// A field of a date or time: something with a value that can be read
/// from a temporal and set on one.
pub trait TemporalField: Copy + fmt::Debug {

    /// The name of the field, such as `DayOfHalf`.
    fn name(&self) -> &'static str;

    /// The unit the field is measured in, such as days for the day of the
    /// month.
    fn base_unit(&self) -> CalendarUnit;

    /// The unit the field is bounded by, such as months for the day of the
    /// month.
    fn range_unit(&self) -> CalendarUnit;

    fn is_date_based(&self) -> bool;

    fn is_time_based(&self) -> bool;

    /// The outer range of the field, valid in any context.
    fn range(&self) -> ValueRange;

    /// Returns whether the temporal has this field.
    fn is_supported_by<T: Temporal>(&self, temporal: &T) -> bool;

    /// The range of the field for this particular temporal.
    fn range_refined_by<T: Temporal>(&self, temporal: &T) -> Result<ValueRange, Error>;

    /// Reads the value of the field.
    fn get_from<T: Temporal>(&self, temporal: &T) -> Result<i64, Error>;

    /// Returns the temporal with this field set to a new value.
    fn adjust_into<T: Temporal>(&self, temporal: T, value: i64) -> Result<T, Error>;

    /// Tries to combine this field with others in the bag to produce a
    /// date. `Ok(None)` means there’s not enough information, and the caller
    /// should try something else.
    fn resolve(&self, _values: &FieldValues, _style: ResolverStyle) -> Result<Option<Resolved>, Error> {
        Ok(None)
    }
}


/// The built-in fields of the ISO calendar.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum ChronoField {
    MilliOfSecond,
    SecondOfMinute,
    MinuteOfHour,
    MinuteOfDay,
    HourOfDay,
    AmPmOfDay,
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    DayOfQuarter,
    MonthOfYear,
    QuarterOfYear,
    ProlepticMonth,
    Year,
    EpochDay,
}

/// The lowest and highest years a date can have.
pub const MIN_YEAR: i64 = -999_999_999;
pub const MAX_YEAR: i64 =  999_999_999;

impl TemporalField for ChronoField {
    fn name(&self) -> &'static str {
        use self::ChronoField::*;
        match *self {
            MilliOfSecond   => "MilliOfSecond",
            SecondOfMinute  => "SecondOfMinute",
            MinuteOfHour    => "MinuteOfHour",
            MinuteOfDay     => "MinuteOfDay",
            HourOfDay       => "HourOfDay",
            AmPmOfDay       => "AmPmOfDay",
            DayOfWeek       => "DayOfWeek",
            DayOfMonth      => "DayOfMonth",
            DayOfYear       => "DayOfYear",
            DayOfQuarter    => "DayOfQuarter",
            MonthOfYear     => "MonthOfYear",
            QuarterOfYear   => "QuarterOfYear",
            ProlepticMonth  => "ProlepticMonth",
            Year            => "Year",
            EpochDay        => "EpochDay",
        }
    }

    fn base_unit(&self) -> CalendarUnit {
        use self::ChronoField::*;
        match *self {
            MilliOfSecond                   => CalendarUnit::Millis,
            SecondOfMinute                  => CalendarUnit::Seconds,
            MinuteOfHour | MinuteOfDay      => CalendarUnit::Minutes,
            HourOfDay                       => CalendarUnit::Hours,
            AmPmOfDay                       => CalendarUnit::HalfDays,
            DayOfWeek | DayOfMonth | DayOfYear
            | DayOfQuarter | EpochDay       => CalendarUnit::Days,
            MonthOfYear | ProlepticMonth    => CalendarUnit::Months,
            QuarterOfYear                   => CalendarUnit::QuarterYears,
            Year                            => CalendarUnit::Years,
        }
    }

    fn range_unit(&self) -> CalendarUnit {
        use self::ChronoField::*;
        match *self {
            MilliOfSecond                               => CalendarUnit::Seconds,
            SecondOfMinute                              => CalendarUnit::Minutes,
            MinuteOfHour                                => CalendarUnit::Hours,
            MinuteOfDay | HourOfDay | AmPmOfDay         => CalendarUnit::Days,
            DayOfWeek                                   => CalendarUnit::Weeks,
            DayOfMonth                                  => CalendarUnit::Months,
            DayOfQuarter                                => CalendarUnit::QuarterYears,
            DayOfYear | MonthOfYear | QuarterOfYear     => CalendarUnit::Years,
            ProlepticMonth | Year | EpochDay            => CalendarUnit::Forever,
        }
    }

    fn is_date_based(&self) -> bool {
        *self >= ChronoField::DayOfWeek
    }

    fn is_time_based(&self) -> bool {
        *self < ChronoField::DayOfWeek
    }

    fn range(&self) -> ValueRange {
        use self::ChronoField::*;
        match *self {
            MilliOfSecond   => ValueRange::of(0, 999),
            SecondOfMinute  => ValueRange::of(0, 59),
            MinuteOfHour    => ValueRange::of(0, 59),
            MinuteOfDay     => ValueRange::of(0, 24 * 60 - 1),
            HourOfDay       => ValueRange::of(0, 23),
            AmPmOfDay       => ValueRange::of(0, 1),
            DayOfWeek       => ValueRange::of(1, 7),
            DayOfMonth      => ValueRange::of_variable(1, 28, 31),
            DayOfYear       => ValueRange::of_variable(1, 365, 366),
            DayOfQuarter    => ValueRange::of_variable(1, 90, 92),
            MonthOfYear     => ValueRange::of(1, 12),
            QuarterOfYear   => ValueRange::of(1, 4),
            ProlepticMonth  => ValueRange::of(MIN_YEAR * 12, MAX_YEAR * 12 + 11),
            Year            => ValueRange::of(MIN_YEAR, MAX_YEAR),
            EpochDay        => ValueRange::of(-365_243_219_162, 365_241_780_471),
        }
    }

    fn is_supported_by<T: Temporal>(&self, temporal: &T) -> bool {
        temporal.is_supported_field(*self)
    }

    fn range_refined_by<T: Temporal>(&self, temporal: &T) -> Result<ValueRange, Error> {
        temporal.field_range(*self)
    }

    fn get_from<T: Temporal>(&self, temporal: &T) -> Result<i64, Error> {
        temporal.get_field(*self)
    }

    fn adjust_into<T: Temporal>(&self, temporal: T, value: i64) -> Result<T, Error> {
        temporal.with_field(*self, value)
    }
}

impl ChronoField {

    /// Checks that a value fits this field’s outer range.
    pub fn check_valid_value(self, value: i64) -> Result<i64, Error> {
        self.range().check_valid_value(value, self.name())
    }
}

impl fmt::Display for ChronoField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// How strictly to treat field values when combining them into a date.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default)]
pub enum ResolverStyle {

    /// Every value must be valid for the exact date being produced.
    Strict,

    /// Values must be within each field’s outer range, and values that
    /// run past the end of a month or half roll forward or are clamped.
    #[default]
    Smart,

    /// Values are not checked, and anything out of range is added on.
    Lenient,
}

/// A parsing error for `ResolverStyle`.
#[derive(PartialEq, Debug, Clone, Copy, thiserror::Error)]
#[error("provided string was not a valid resolver style")]
pub struct ParseResolverStyleError;

impl FromStr for ResolverStyle {
    type Err = ParseResolverStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict"   => Ok(Self::Strict),
            "smart"    => Ok(Self::Smart),
            "lenient"  => Ok(Self::Lenient),
            _          => Err(ParseResolverStyleError),
        }
    }
}

impl fmt::Display for ResolverStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Strict   => "strict",
            Self::Smart    => "smart",
            Self::Lenient  => "lenient",
        }
        .fmt(f)
    }
}


/// Any field, built-in or extension, used as the key into a bag of field
/// values.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum FieldKey {
    Chrono(ChronoField),
    Half(HalfField),
}

impl From<ChronoField> for FieldKey {
    fn from(field: ChronoField) -> Self {
        FieldKey::Chrono(field)
    }
}

impl From<HalfField> for FieldKey {
    fn from(field: HalfField) -> Self {
        FieldKey::Half(field)
    }
}

macro_rules! dispatch {
    ($self:ident, $f:ident => $e:expr) => {
        match *$self {
            FieldKey::Chrono($f) => $e,
            FieldKey::Half($f)   => $e,
        }
    };
}

impl TemporalField for FieldKey {
    fn name(&self) -> &'static str { dispatch!(self, f => f.name()) }
    fn base_unit(&self) -> CalendarUnit { dispatch!(self, f => f.base_unit()) }
    fn range_unit(&self) -> CalendarUnit { dispatch!(self, f => f.range_unit()) }
    fn is_date_based(&self) -> bool { dispatch!(self, f => f.is_date_based()) }
    fn is_time_based(&self) -> bool { dispatch!(self, f => f.is_time_based()) }
    fn range(&self) -> ValueRange { dispatch!(self, f => f.range()) }

    fn is_supported_by<T: Temporal>(&self, temporal: &T) -> bool {
        dispatch!(self, f => f.is_supported_by(temporal))
    }

    fn range_refined_by<T: Temporal>(&self, temporal: &T) -> Result<ValueRange, Error> {
        dispatch!(self, f => f.range_refined_by(temporal))
    }

    fn get_from<T: Temporal>(&self, temporal: &T) -> Result<i64, Error> {
        dispatch!(self, f => f.get_from(temporal))
    }

    fn adjust_into<T: Temporal>(&self, temporal: T, value: i64) -> Result<T, Error> {
        dispatch!(self, f => f.adjust_into(temporal, value))
    }

    fn resolve(&self, values: &FieldValues, style: ResolverStyle) -> Result<Option<Resolved>, Error> {
        dispatch!(self, f => f.resolve(values, style))
    }
}


/// The outcome of a successful resolution: the date, and the fields that
/// went into it.
#[derive(PartialEq, Debug, Clone)]
pub struct Resolved {
    pub date: LocalDate,
    pub consumed: Vec<FieldKey>,
}


/// A bag of field values, such as the ones produced by parsing, waiting to
/// be combined into a date.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct FieldValues {
    values: BTreeMap<FieldKey, i64>,
}

impl FieldValues {

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field value to the bag, returning the value it replaced.
    pub fn insert<F: Into<FieldKey>>(&mut self, field: F, value: i64) -> Option<i64> {
        self.values.insert(field.into(), value)
    }

    /// Builder-style version of `insert`.
    pub fn with<F: Into<FieldKey>>(mut self, field: F, value: i64) -> Self {
        let _ = self.insert(field, value);
        self
    }

    pub fn get<F: Into<FieldKey>>(&self, field: F) -> Option<i64> {
        self.values.get(&field.into()).copied()
    }

    pub fn contains<F: Into<FieldKey>>(&self, field: F) -> bool {
        self.values.contains_key(&field.into())
    }

    pub fn remove<F: Into<FieldKey>>(&mut self, field: F) -> Option<i64> {
        self.values.remove(&field.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes the fields that went into a resolved date.
    pub fn apply(&mut self, resolved: &Resolved) {
        for key in &resolved.consumed {
            let _ = self.values.remove(key);
        }
    }

    /// Tries each way of building a date from the values in turn: the day
    /// of the half, then the day of the month, then the day of the year.
    /// A half with no day only counts once the others have failed.
    /// The fields that were used are removed from the bag.
    pub fn resolve_date(&mut self, style: ResolverStyle) -> Result<Option<LocalDate>, Error> {
        let has_day_of_half = self.contains(DAY_OF_HALF);

        let mut resolved = None;
        if has_day_of_half {
            resolved = HalfField::DayOfHalf.resolve(self, style)?;
        }
        if resolved.is_none() {
            resolved = self.resolve_year_month_day(style)?;
        }
        if resolved.is_none() {
            resolved = self.resolve_year_day(style)?;
        }
        if resolved.is_none() && !has_day_of_half {
            resolved = HalfField::DayOfHalf.resolve(self, style)?;
        }

        Ok(resolved.map(|resolved| {
            trace!("Resolved {:?} from {:?}", resolved.date, resolved.consumed);
            self.apply(&resolved);
            resolved.date
        }))
    }

    fn resolve_year_month_day(&self, style: ResolverStyle) -> Result<Option<Resolved>, Error> {
        let (year, month, day) = match (self.get(ChronoField::Year), self.get(ChronoField::MonthOfYear), self.get(ChronoField::DayOfMonth)) {
            (Some(y), Some(m), Some(d)) => (ChronoField::Year.check_valid_value(y)?, m, d),
            _ => return Ok(None),
        };

        let date = match style {
            ResolverStyle::Lenient => {
                LocalDate::ymd(year, Month::January, 1)?
                    .plus(sub_exact(month, 1)?, CalendarUnit::Months)?
                    .plus(sub_exact(day, 1)?, CalendarUnit::Days)?
            },
            ResolverStyle::Smart => {
                let month = Month::from_one(ChronoField::MonthOfYear.check_valid_value(month)? as i8)?;
                let day = ChronoField::DayOfMonth.check_valid_value(day)?;
                let last = crate::cal::datetime::Year(year).month(month).day_count() as i64;
                LocalDate::ymd(year, month, day.min(last) as i8)?
            },
            ResolverStyle::Strict => {
                let month = Month::from_one(ChronoField::MonthOfYear.check_valid_value(month)? as i8)?;
                let day = ChronoField::DayOfMonth.check_valid_value(day)?;
                LocalDate::ymd(year, month, day as i8)?
            },
        };

        Ok(Some(Resolved {
            date,
            consumed: vec![ ChronoField::Year.into(), ChronoField::MonthOfYear.into(), ChronoField::DayOfMonth.into() ],
        }))
    }

    fn resolve_year_day(&self, style: ResolverStyle) -> Result<Option<Resolved>, Error> {
        let (year, yearday) = match (self.get(ChronoField::Year), self.get(ChronoField::DayOfYear)) {
            (Some(y), Some(d)) => (ChronoField::Year.check_valid_value(y)?, d),
            _ => return Ok(None),
        };

        let date = match style {
            ResolverStyle::Lenient => {
                LocalDate::ymd(year, Month::January, 1)?.plus(sub_exact(yearday, 1)?, CalendarUnit::Days)?
            },
            _ => LocalDate::yd(year, ChronoField::DayOfYear.check_valid_value(yearday)?)?,
        };

        Ok(Some(Resolved {
            date,
            consumed: vec![ ChronoField::Year.into(), ChronoField::DayOfYear.into() ],
        }))
    }
}
