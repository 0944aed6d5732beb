//! Units of time, and exact conversion between them.
//!
//! Units fall into two disjoint classes. **Precise** units, from
//! nanoseconds up to weeks, have a fixed length that doesn’t depend on
//! where they are in the calendar, so they convert through their lengths
//! in nanoseconds. **Calendar** units, from months up to millennia (plus
//! quarter-years), convert through their lengths in months. Nothing
//! converts across the two classes: there is no exact number of days in a
//! month.

use std::fmt;

use log::debug;

use crate::duration::Duration;
use crate::error::Error;
use crate::util::mul_exact;

use self::CalendarUnit::*;


/// A unit of time.
///
/// The variants are ordered from shortest to longest, so comparing two
/// units compares their (estimated) lengths.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum CalendarUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    QuarterYears,
    HalfYears,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
    Forever,
}

/// Seconds in an average Gregorian year: 365.2425 days.
const SECONDS_PER_YEAR: i64 = 31_556_952;

impl CalendarUnit {

    /// Returns the exact length of this unit in nanoseconds, if it’s one of
    /// the precise units.
    pub fn nanos(self) -> Option<i64> {
        Some(match self {
            Nanos     => 1,
            Micros    => 1_000,
            Millis    => 1_000_000,
            Seconds   => 1_000_000_000,
            Minutes   => 60 * 1_000_000_000,
            Hours     => 3_600 * 1_000_000_000,
            HalfDays  => 43_200 * 1_000_000_000,
            Days      => 86_400 * 1_000_000_000,
            Weeks     => 7 * 86_400 * 1_000_000_000,
            _         => return None,
        })
    }

    /// Returns the length of this unit in months, if it’s one of the
    /// calendar units the conversion engine understands.
    /// Half-years have no factor here, as they live in `field::half`.
    pub fn month_factor(self) -> Option<i64> {
        Some(match self {
            Months        => 1,
            QuarterYears  => 3,
            Years         => 12,
            Decades       => 120,
            Centuries     => 1_200,
            Millennia     => 12_000,
            _             => return None,
        })
    }

    /// Returns whether this unit has a fixed length, independent of the
    /// calendar: everything from nanoseconds up to weeks.
    pub fn is_precise(self) -> bool {
        self <= Weeks
    }

    /// Returns whether this unit is a date unit, from days upwards.
    /// Eras and forever are neither date- nor time-based.
    pub fn is_date_based(self) -> bool {
        self >= Days && self < Eras
    }

    /// Returns whether this unit is a time unit, up to half-days.
    pub fn is_time_based(self) -> bool {
        self < Days
    }

    /// Returns whether the length of this unit is only an estimate, which
    /// is true for everything from days upwards.
    pub fn is_duration_estimated(self) -> bool {
        self >= Days
    }

    /// Returns the length of this unit. For estimated units, this is based
    /// on a 365.2425-day year.
    pub fn duration(self) -> Duration {
        match self {
            Forever => Duration::of_seconds_nanos(i64::MAX, 999_999_999),
            Eras    => Duration::of(SECONDS_PER_YEAR * 1_000_000_000),
            _ => match (self.nanos(), self.month_factor()) {
                (Some(nanos), _)   => Duration::of_nanos(nanos),
                (None, Some(f))    => Duration::of(SECONDS_PER_YEAR / 12 * f),
                (None, None)       => Duration::of(SECONDS_PER_YEAR / 2),  // half-years
            },
        }
    }

    /// Checks that the conversion engine will accept this unit.
    fn validate(self) -> Result<Self, Error> {
        match self {
            Eras | Forever | HalfYears => Err(Error::UnsupportedUnit(self)),
            _                          => Ok(self),
        }
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Nanos         => "Nanos",
            Micros        => "Micros",
            Millis        => "Millis",
            Seconds       => "Seconds",
            Minutes       => "Minutes",
            Hours         => "Hours",
            HalfDays      => "HalfDays",
            Days          => "Days",
            Weeks         => "Weeks",
            Months        => "Months",
            QuarterYears  => "QuarterYears",
            HalfYears     => "HalfYears",
            Years         => "Years",
            Decades       => "Decades",
            Centuries     => "Centuries",
            Millennia     => "Millennia",
            Eras          => "Eras",
            Forever       => "Forever",
        };

        f.write_str(name)
    }
}


/// Converts an amount of one unit into another unit, returning the whole
/// amount of the target unit and the remainder left in the source unit.
///
/// The result is always exact: `amount == whole * ratio + remainder`,
/// where the remainder has the same sign as the amount (or is zero) and is
/// smaller than the ratio between the two units.
///
/// ### Examples
///
/// ```
/// use datetime_extra::unit::{convert, CalendarUnit};
///
/// assert_eq!(convert(3, CalendarUnit::Hours, CalendarUnit::Minutes), Ok((180, 0)));
/// assert_eq!(convert(-90, CalendarUnit::Minutes, CalendarUnit::Hours), Ok((-1, -30)));
/// assert_eq!(convert(7, CalendarUnit::Months, CalendarUnit::QuarterYears), Ok((2, 1)));
/// assert!(convert(1, CalendarUnit::Days, CalendarUnit::Months).is_err());
/// ```
pub fn convert(amount: i64, from: CalendarUnit, to: CalendarUnit) -> Result<(i64, i64), Error> {
    let from = from.validate()?;
    let to   = to.validate()?;

    if from == to {
        return Ok((amount, 0));
    }

    let (from_length, to_length) = if from.is_precise() && to.is_precise() {
        // Both of these are always present for precise units.
        match (from.nanos(), to.nanos()) {
            (Some(f), Some(t)) => (f, t),
            _                  => return Err(Error::IncompatibleUnits { from, to }),
        }
    }
    else {
        match (from.month_factor(), to.month_factor()) {
            (Some(f), Some(t)) => (f, t),
            _ => {
                debug!("No exact ratio between {} and {}", from, to);
                return Err(Error::IncompatibleUnits { from, to });
            }
        }
    };

    split_by_ratio(amount, from_length, to_length)
}

/// Either widens (multiplies) or narrows (divides) an amount, given the
/// lengths of the source and target units in some common base.
fn split_by_ratio(amount: i64, from_length: i64, to_length: i64) -> Result<(i64, i64), Error> {
    if from_length > to_length {
        let ratio = from_length / to_length;
        Ok((mul_exact(amount, ratio)?, 0))
    }
    else {
        let ratio = to_length / from_length;
        Ok((amount / ratio, amount % ratio))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    static ALL: &[CalendarUnit] = &[
        Nanos, Micros, Millis, Seconds, Minutes, Hours, HalfDays, Days, Weeks,
        Months, QuarterYears, HalfYears, Years, Decades, Centuries, Millennia,
        Eras, Forever,
    ];

    /// Every pair of units the engine accepts, with the ratio between them.
    fn supported_pairs() -> Vec<(CalendarUnit, CalendarUnit, i64)> {
        let mut pairs = Vec::new();
        for &a in ALL {
            for &b in ALL {
                let lengths = match (a.nanos(), b.nanos(), a.month_factor(), b.month_factor()) {
                    (Some(x), Some(y), _, _) => (x, y),
                    (_, _, Some(x), Some(y)) => (x, y),
                    _ => continue,
                };
                let ratio = if lengths.0 > lengths.1 { lengths.0 / lengths.1 } else { lengths.1 / lengths.0 };
                pairs.push((a, b, ratio));
            }
        }
        pairs
    }

    mod identity {
        use super::*;

        #[test]
        fn same_unit_is_identity() {
            for &unit in ALL.iter().filter(|u| u.validate().is_ok()) {
                for &n in &[0, 1, -1, 17, i64::MAX, i64::MIN] {
                    assert_eq!(convert(n, unit, unit), Ok((n, 0)), "{}", unit);
                }
            }
        }
    }

    mod precise {
        use super::*;

        #[test]
        fn widening() {
            assert_eq!(convert(2, Hours, Minutes), Ok((120, 0)));
            assert_eq!(convert(1, Weeks, Seconds), Ok((604_800, 0)));
            assert_eq!(convert(-3, Days, Hours), Ok((-72, 0)));
        }

        #[test]
        fn narrowing() {
            assert_eq!(convert(125, Minutes, Hours), Ok((2, 5)));
            assert_eq!(convert(-125, Minutes, Hours), Ok((-2, -5)));
            assert_eq!(convert(1_500, Millis, Seconds), Ok((1, 500)));
            assert_eq!(convert(13, Days, Weeks), Ok((1, 6)));
        }

        #[test]
        fn widening_overflow() {
            assert_eq!(convert(i64::MAX / 60 + 1, Hours, Minutes), Err(Error::Overflow));
            assert_eq!(convert(i64::MAX, Weeks, Nanos), Err(Error::Overflow));
        }
    }

    mod calendar {
        use super::*;

        #[test]
        fn widening() {
            assert_eq!(convert(2, Decades, Years), Ok((20, 0)));
            assert_eq!(convert(1, Millennia, Months), Ok((12_000, 0)));
            assert_eq!(convert(5, QuarterYears, Months), Ok((15, 0)));
        }

        #[test]
        fn narrowing() {
            assert_eq!(convert(14, Months, Years), Ok((1, 2)));
            assert_eq!(convert(-7, Months, QuarterYears), Ok((-2, -1)));
            assert_eq!(convert(250, Years, Centuries), Ok((2, 50)));
        }
    }

    mod failures {
        use super::*;

        #[test]
        fn eras_and_forever() {
            assert_eq!(convert(1, Eras, Years), Err(Error::UnsupportedUnit(Eras)));
            assert_eq!(convert(1, Years, Forever), Err(Error::UnsupportedUnit(Forever)));
            assert_eq!(convert(1, Eras, Eras), Err(Error::UnsupportedUnit(Eras)));
        }

        #[test]
        fn half_years() {
            assert_eq!(convert(1, HalfYears, Months), Err(Error::UnsupportedUnit(HalfYears)));
        }

        #[test]
        fn across_classes() {
            assert_eq!(convert(1, Days, Months), Err(Error::IncompatibleUnits { from: Days, to: Months }));
            assert_eq!(convert(1, Years, Seconds), Err(Error::IncompatibleUnits { from: Years, to: Seconds }));
        }
    }

    mod properties {
        use super::*;

        static SAMPLES: &[i64] = &[0, 1, -1, 5, -5, 59, 61, -61, 1_000, 86_399, -86_401, 123_456_789];

        #[test]
        fn ratio_invariant() {
            for (a, b, ratio) in supported_pairs() {
                for &n in SAMPLES {
                    let (whole, remainder) = match convert(n, a, b) {
                        Ok(r) => r,
                        Err(Error::Overflow) => continue,
                        Err(e) => panic!("{} -> {}: {}", a, b, e),
                    };

                    if a > b {
                        assert_eq!(remainder, 0);
                        assert_eq!(whole, n * ratio);
                    }
                    else {
                        assert_eq!(n, whole * ratio + remainder, "{} {} -> {}", n, a, b);
                        assert!(remainder.abs() < ratio);
                        assert!(remainder == 0 || remainder.signum() == n.signum());
                    }
                }
            }
        }

        #[test]
        fn exact_conversions_reverse() {
            for (a, b, _) in supported_pairs() {
                for &n in SAMPLES {
                    if let Ok((whole, 0)) = convert(n, a, b) {
                        assert_eq!(convert(whole, b, a), Ok((n, 0)), "{} {} -> {}", n, a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn durations() {
        assert_eq!(Days.duration(), Duration::of(86_400));
        assert_eq!(HalfYears.duration(), Duration::of(15_778_476));
        assert_eq!(Millis.duration(), Duration::of_millis(1));
        assert!(Months.is_duration_estimated());
        assert!(!Hours.is_duration_estimated());
    }
}
