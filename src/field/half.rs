//! Fields and units that split the year into two halves.
//!
//! The first half runs from January to June, and the second from July to
//! December. The half of the year is derived from the quarter of the year,
//! and the day of the half is derived from the day of the year, so any
//! temporal with those built-in fields supports these too.
//!
//! ```
//! use datetime_extra::{LocalDate, Month};
//! use datetime_extra::field::half::{DAY_OF_HALF, HALF_OF_YEAR};
//! use datetime_extra::temporal::Temporal;
//!
//! let date = LocalDate::ymd(2023, Month::August, 1).unwrap();
//! assert_eq!(date.get(HALF_OF_YEAR), Ok(2));
//! assert_eq!(date.get(DAY_OF_HALF), Ok(32));
//! ```

use log::{debug, trace};

use crate::cal::datetime::{LocalDate, Month, Year};
use crate::duration::Duration;
use crate::error::Error;
use crate::field::{ChronoField, FieldKey, FieldValues, ResolverStyle, Resolved, TemporalField, ValueRange};
use crate::temporal::{Temporal, TemporalUnit};
use crate::unit::CalendarUnit;
use crate::util::{add_exact, mul_exact, sub_exact};


/// The two fields based on the half-year.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum HalfField {

    /// The day within the half, from 1 to 181, 182, or 184.
    DayOfHalf,

    /// The half of the year, 1 or 2.
    HalfOfYear,
}

/// The day within the half-year.
pub const DAY_OF_HALF: HalfField = HalfField::DayOfHalf;

/// The half of the year.
pub const HALF_OF_YEAR: HalfField = HalfField::HalfOfYear;

/// The unit of half-years.
pub const HALF_YEARS: HalfYears = HalfYears;


const RANGE_HALF:   ValueRange = ValueRange::of(1, 2);
const RANGE_DOH:    ValueRange = ValueRange::of_variable(1, 181, 184);
const RANGE_H1_181: ValueRange = ValueRange::of(1, 181);
const RANGE_H1_182: ValueRange = ValueRange::of(1, 182);
const RANGE_H2_184: ValueRange = ValueRange::of(1, 184);

/// Days in the first half of a common year.
const H1_DAYS: i64 = 181;


impl TemporalField for HalfField {
    fn name(&self) -> &'static str {
        match *self {
            HalfField::DayOfHalf   => "DayOfHalf",
            HalfField::HalfOfYear  => "HalfOfYear",
        }
    }

    fn base_unit(&self) -> CalendarUnit {
        match *self {
            HalfField::DayOfHalf   => CalendarUnit::Days,
            HalfField::HalfOfYear  => CalendarUnit::HalfYears,
        }
    }

    fn range_unit(&self) -> CalendarUnit {
        match *self {
            HalfField::DayOfHalf   => CalendarUnit::HalfYears,
            HalfField::HalfOfYear  => CalendarUnit::Years,
        }
    }

    fn is_date_based(&self) -> bool {
        true
    }

    fn is_time_based(&self) -> bool {
        false
    }

    fn range(&self) -> ValueRange {
        match *self {
            HalfField::DayOfHalf   => RANGE_DOH,
            HalfField::HalfOfYear  => RANGE_HALF,
        }
    }

    fn is_supported_by<T: Temporal>(&self, temporal: &T) -> bool {
        match *self {
            HalfField::DayOfHalf => {
                temporal.is_supported_field(ChronoField::DayOfYear)
                    && temporal.is_supported_field(ChronoField::MonthOfYear)
                    && temporal.is_supported_field(ChronoField::Year)
            },
            HalfField::HalfOfYear => {
                temporal.is_supported_field(ChronoField::QuarterOfYear)
            },
        }
    }

    fn range_refined_by<T: Temporal>(&self, temporal: &T) -> Result<ValueRange, Error> {
        self.check_supported(temporal)?;

        match *self {
            HalfField::HalfOfYear  => Ok(RANGE_HALF),
            HalfField::DayOfHalf   => {
                match HALF_OF_YEAR.get_from(temporal)? {
                    1 if is_leap(temporal.get_field(ChronoField::Year)?)  => Ok(RANGE_H1_182),
                    1  => Ok(RANGE_H1_181),
                    2  => Ok(RANGE_H2_184),
                    _  => Ok(RANGE_DOH),
                }
            },
        }
    }

    fn get_from<T: Temporal>(&self, temporal: &T) -> Result<i64, Error> {
        self.check_supported(temporal)?;

        match *self {
            HalfField::HalfOfYear => {
                let quarter = temporal.get_field(ChronoField::QuarterOfYear)?;
                Ok(if quarter <= 2 { 1 } else { 2 })
            },
            HalfField::DayOfHalf => {
                let yearday = temporal.get_field(ChronoField::DayOfYear)?;
                let month   = temporal.get_field(ChronoField::MonthOfYear)?;
                let year    = temporal.get_field(ChronoField::Year)?;

                if month <= 6 {
                    Ok(yearday)
                }
                else {
                    Ok(yearday - H1_DAYS - if is_leap(year) { 1 } else { 0 })
                }
            },
        }
    }

    fn adjust_into<T: Temporal>(&self, temporal: T, value: i64) -> Result<T, Error> {
        let current = self.get_from(&temporal)?;

        match *self {
            HalfField::HalfOfYear => {
                // Goes through the month field rather than adding months, so
                // the day of the month gets clamped the same way.
                let _ = RANGE_HALF.check_valid_value(value, self.name())?;
                let month = temporal.get_field(ChronoField::MonthOfYear)?;
                let shift = mul_exact(value - current, 6)?;
                temporal.with_field(ChronoField::MonthOfYear, add_exact(month, shift)?)
            },
            HalfField::DayOfHalf => {
                let _ = self.range_refined_by(&temporal)?.check_valid_value(value, self.name())?;
                let yearday = temporal.get_field(ChronoField::DayOfYear)?;
                temporal.with_field(ChronoField::DayOfYear, yearday + (value - current))
            },
        }
    }

    fn resolve(&self, values: &FieldValues, style: ResolverStyle) -> Result<Option<Resolved>, Error> {
        match *self {
            HalfField::DayOfHalf   => resolve_day_of_half(values, style),
            HalfField::HalfOfYear  => Ok(None),
        }
    }
}

impl HalfField {
    fn check_supported<T: Temporal>(&self, temporal: &T) -> Result<(), Error> {
        if self.is_supported_by(temporal) {
            Ok(())
        }
        else {
            Err(Error::UnsupportedField(self.name()))
        }
    }
}

fn is_leap(year: i64) -> bool {
    Year(year).is_leap_year()
}


/// Combines the year, the half of the year, and the day of the half into a
/// date.
///
/// The year is always checked. After that:
///
/// - **Lenient** style starts at the first of January, adds six months for
///   each half after the first, then adds the days, without checking
///   anything, so days past the end of a half spill into the next one;
/// - **Strict** style checks the half, and accepts days 1 to 181 as-is, but
///   anything higher must fit the exact length of that half;
/// - **Smart** style checks the half, and accepts any day up to 184, which
///   spills into the next half if this one is shorter.
///
/// Without a day of the half, only lenient style produces a date: the first
/// day of the half.
fn resolve_day_of_half(values: &FieldValues, style: ResolverStyle) -> Result<Option<Resolved>, Error> {
    let (year, half) = match (values.get(ChronoField::Year), values.get(HALF_OF_YEAR)) {
        (Some(y), Some(h)) => (y, h),
        _                  => return Ok(None),
    };

    let day_of_half = values.get(DAY_OF_HALF);
    if day_of_half.is_none() && style != ResolverStyle::Lenient {
        return Ok(None);
    }

    let year = ChronoField::Year.check_valid_value(year)?;
    let day_of_half = day_of_half.unwrap_or(1);

    let first_day = match style {
        ResolverStyle::Lenient => {
            let months = mul_exact(sub_exact(half, 1)?, 6)?;
            LocalDate::ymd(year, Month::January, 1)?.plus(months, CalendarUnit::Months)?
        },
        ResolverStyle::Strict | ResolverStyle::Smart => {
            let half = RANGE_HALF.check_valid_value(half, HALF_OF_YEAR.name())?;
            let first_day = LocalDate::ymd(year, first_month(half)?, 1)?;

            if day_of_half < 1 || day_of_half > H1_DAYS {
                let range = if style == ResolverStyle::Strict { DAY_OF_HALF.range_refined_by(&first_day)? }
                                                         else { DAY_OF_HALF.range() };

                if let Err(e) = range.check_valid_value(day_of_half, DAY_OF_HALF.name()) {
                    debug!("Rejecting day {} of H{} {} under {} resolution", day_of_half, half, year, style);
                    return Err(e);
                }
            }

            first_day
        },
    };

    let date = first_day.plus(sub_exact(day_of_half, 1)?, CalendarUnit::Days)?;
    trace!("Resolved year {}, half {}, day {} to {:?}", year, half, day_of_half, date);

    let mut consumed: Vec<FieldKey> = vec![ ChronoField::Year.into(), HALF_OF_YEAR.into() ];
    if values.contains(DAY_OF_HALF) {
        consumed.push(DAY_OF_HALF.into());
    }

    Ok(Some(Resolved { date, consumed }))
}

fn first_month(half: i64) -> Result<Month, Error> {
    Ok(Month::from_one(((half - 1) * 6 + 1) as i8)?)
}


/// The half-year unit: six months, or two quarters.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct HalfYears;

impl From<HalfYears> for CalendarUnit {
    fn from(_: HalfYears) -> Self {
        CalendarUnit::HalfYears
    }
}

impl TemporalUnit for HalfYears {

    /// Half of an average Gregorian year.
    fn duration(&self) -> Duration {
        Duration::of(31_556_952 / 2)
    }

    fn is_duration_estimated(&self) -> bool {
        true
    }

    fn is_date_based(&self) -> bool {
        true
    }

    fn is_time_based(&self) -> bool {
        false
    }

    fn is_supported_by<T: Temporal>(&self, temporal: &T) -> bool {
        temporal.is_supported_unit(CalendarUnit::QuarterYears)
    }

    fn add_to<T: Temporal>(&self, temporal: T, amount: i64) -> Result<T, Error> {
        temporal.plus(mul_exact(amount, 2)?, CalendarUnit::QuarterYears)
    }

    fn between<T: Temporal>(&self, start: &T, end: &T) -> Result<i64, Error> {
        Ok(start.until(end, CalendarUnit::QuarterYears)? / 2)
    }
}
