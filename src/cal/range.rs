//! Ranges of dates.

use std::cmp::{max, min};
use std::fmt;

use crate::cal::datetime::LocalDate;
use crate::cal::fmt::ISO;
use crate::error::Error;
use crate::period::Period;
use crate::temporal::Temporal;


/// A **date range** is the span of days from a start date, included, up
/// to an end date, excluded.
///
/// Either end can be unbounded, which is represented by the earliest or
/// latest date there is: a range ending at `LocalDate::max()` goes on
/// forever, and includes the latest date. A range whose start equals its
/// end is empty, though it still has a position on the calendar.
///
/// ```rust
/// use datetime_extra::{LocalDate, LocalDateRange, Month};
///
/// let start = LocalDate::ymd(2023, Month::March, 1).unwrap();
/// let end   = LocalDate::ymd(2023, Month::April, 1).unwrap();
/// let march = LocalDateRange::of(start, end).unwrap();
///
/// assert_eq!(march.length_in_days(), Ok(31));
/// assert!(march.contains(LocalDate::ymd(2023, Month::March, 31).unwrap()));
/// assert!(!march.contains(end));
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct LocalDateRange {
    start: LocalDate,
    end: LocalDate,
}

impl LocalDateRange {

    /// Creates a range from a start date, included, to an end date,
    /// excluded.
    pub fn of(start: LocalDate, end_exclusive: LocalDate) -> Result<Self, Error> {
        if end_exclusive < start {
            Err(Error::InvalidRange("end date must be on or after start date"))
        }
        else if start == LocalDate::max() {
            Err(Error::InvalidRange("range must not start at the latest date"))
        }
        else if end_exclusive == LocalDate::min() {
            Err(Error::InvalidRange("range must not end at the earliest date"))
        }
        else {
            Ok(Self { start, end: end_exclusive })
        }
    }

    /// Creates a range from a start date to an end date, both included.
    /// An end date of `LocalDate::max()` makes the range unbounded.
    pub fn of_closed(start: LocalDate, end_inclusive: LocalDate) -> Result<Self, Error> {
        if end_inclusive < start {
            return Err(Error::InvalidRange("end date must be on or after start date"));
        }

        if end_inclusive == LocalDate::max() {
            Self::of(start, end_inclusive)
        }
        else {
            Self::of(start, end_inclusive.plus_days(1)?)
        }
    }

    /// Creates a range that starts at the given date and lasts for the
    /// given period.
    pub fn of_period(start: LocalDate, period: &Period) -> Result<Self, Error> {
        Self::of(start, start.plus_amount(period)?)
    }

    /// Creates an empty range positioned at the given date.
    pub fn of_empty(date: LocalDate) -> Result<Self, Error> {
        Self::of(date, date)
    }

    /// Creates a range stretching back from the given date, excluded,
    /// without limit.
    pub fn of_unbounded_start(end_exclusive: LocalDate) -> Result<Self, Error> {
        Self::of(LocalDate::min(), end_exclusive)
    }

    /// Creates a range stretching forward from the given date, included,
    /// without limit.
    pub fn of_unbounded_end(start: LocalDate) -> Result<Self, Error> {
        Self::of(start, LocalDate::max())
    }

    /// The range of every date.
    pub fn all() -> Self {
        Self { start: LocalDate::min(), end: LocalDate::max() }
    }

    pub fn start(&self) -> LocalDate {
        self.start
    }

    /// The end date, which is not part of the range, unless the range is
    /// unbounded.
    pub fn end(&self) -> LocalDate {
        self.end
    }

    /// The last date in the range. For an empty range, this is the day
    /// before the start.
    pub fn end_inclusive(&self) -> Result<LocalDate, Error> {
        if self.is_unbounded_end() {
            Ok(self.end)
        }
        else {
            Ok(self.end.plus_days(-1)?)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_unbounded_start(&self) -> bool {
        self.start == LocalDate::min()
    }

    pub fn is_unbounded_end(&self) -> bool {
        self.end == LocalDate::max()
    }

    /// Returns a range with the same end and a different start.
    pub fn with_start(&self, start: LocalDate) -> Result<Self, Error> {
        Self::of(start, self.end)
    }

    /// Returns a range with the same start and a different end.
    pub fn with_end(&self, end_exclusive: LocalDate) -> Result<Self, Error> {
        Self::of(self.start, end_exclusive)
    }

    /// Returns whether the date is in this range.
    pub fn contains(&self, date: LocalDate) -> bool {
        self.start <= date && (date < self.end || self.is_unbounded_end())
    }

    /// Returns whether the other range is entirely inside this one.
    pub fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns whether one of the two ranges starts exactly where the
    /// other one ends, with no overlap.
    pub fn abuts(&self, other: &Self) -> bool {
        (self.end == other.start) ^ (self.start == other.end)
    }

    /// Returns whether the two ranges overlap or abut, meaning their union
    /// would have no gap in it.
    pub fn is_connected(&self, other: &Self) -> bool {
        self == other || (self.start <= other.end && other.start <= self.end)
    }

    /// Returns whether the two ranges share at least one date. Two equal
    /// empty ranges count as overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        self == other || (self.start < other.end && other.start < self.end)
    }

    /// Returns the dates both ranges share, which fails if they aren’t
    /// connected.
    pub fn intersection(&self, other: &Self) -> Result<Self, Error> {
        if !self.is_connected(other) {
            return Err(Error::InvalidRange("ranges do not connect"));
        }

        Self::of(max(self.start, other.start), min(self.end, other.end))
    }

    /// Returns the dates in either range, which fails if there’s a gap
    /// between them.
    pub fn union(&self, other: &Self) -> Result<Self, Error> {
        if !self.is_connected(other) {
            return Err(Error::InvalidRange("ranges do not connect"));
        }

        Ok(self.span(other))
    }

    /// Returns the smallest range that encloses both ranges, including
    /// any gap between them.
    pub fn span(&self, other: &Self) -> Self {
        Self { start: min(self.start, other.start), end: max(self.end, other.end) }
    }

    /// Returns whether every date in this range comes before the given
    /// date.
    pub fn is_before(&self, date: LocalDate) -> bool {
        self.end <= date && self.start < date
    }

    /// Returns whether every date in this range comes after the given
    /// date.
    pub fn is_after(&self, date: LocalDate) -> bool {
        self.start > date
    }

    /// Returns whether this range ends before the other one starts.
    pub fn is_before_range(&self, other: &Self) -> bool {
        self.end <= other.start && self != other
    }

    /// Returns whether this range starts after the other one ends.
    pub fn is_after_range(&self, other: &Self) -> bool {
        self.start >= other.end && self != other
    }

    /// The number of days in the range, which can’t be counted if either
    /// end is unbounded.
    pub fn length_in_days(&self) -> Result<i64, Error> {
        if self.is_unbounded_start() || self.is_unbounded_end() {
            return Err(Error::InvalidRange("an unbounded range has no length"));
        }

        Ok(self.end.epoch_day() - self.start.epoch_day())
    }

    /// The length of the range in years, months, and days.
    pub fn to_period(&self) -> Result<Period, Error> {
        if self.is_unbounded_start() || self.is_unbounded_end() {
            return Err(Error::InvalidRange("an unbounded range has no length"));
        }

        Period::between(&self.start, &self.end)
    }

    /// Iterates through every date in the range, in order.
    pub fn dates(&self) -> RangeDates {
        let last = if self.is_unbounded_end() { Some(self.end) }
                   else if self.is_empty()    { None }
                   else                       { self.end.plus_days(-1).ok() };

        RangeDates { next: last.map(|last| (self.start, last)) }
    }
}

impl fmt::Debug for LocalDateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateRange({})", self)
    }
}

/// Formats the range as its start and exclusive end, separated by a
/// slash, such as `2023-01-01/2023-02-01`.
impl fmt::Display for LocalDateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.start.iso(), self.end.iso())
    }
}


/// An iterator over the dates in a range.
#[derive(Debug, Clone)]
pub struct RangeDates {
    next: Option<(LocalDate, LocalDate)>,
}

impl Iterator for RangeDates {
    type Item = LocalDate;

    fn next(&mut self) -> Option<LocalDate> {
        let (current, last) = self.next?;

        self.next = if current < last {
            current.plus_days(1).ok().map(|next| (next, last))
        }
        else {
            None
        };

        Some(current)
    }
}


#[cfg(feature="parse")]
mod parse {
    use std::str::FromStr;

    use super::*;

    /// Parses `start/end`, `start/period`, or `period/end`, where the
    /// dates are in ISO-8601 form and the end is excluded.
    impl FromStr for LocalDateRange {
        type Err = Error;

        fn from_str(input: &str) -> Result<Self, Self::Err> {
            let slash = input.find('/').ok_or_else(|| Error::parse(input, input.len()))?;
            let (first, second) = (&input[.. slash], &input[slash + 1 ..]);
            let second_offset = slash + 1;

            let is_period = |text: &str| matches!(text.as_bytes().first(), Some(b'P') | Some(b'p'));

            match (is_period(first), is_period(second)) {
                (false, false) => {
                    let start = parse_date(input, first, 0)?;
                    let end   = parse_date(input, second, second_offset)?;
                    Self::of(start, end)
                },
                (false, true) => {
                    let start = parse_date(input, first, 0)?;
                    let period = parse_period(input, second, second_offset)?;
                    Self::of_period(start, &period)
                },
                (true, false) => {
                    let period = parse_period(input, first, 0)?;
                    let end = parse_date(input, second, second_offset)?;
                    Self::of(end.minus_amount(&period)?, end)
                },
                (true, true) => Err(Error::parse(input, second_offset)),
            }
        }
    }

    fn parse_date(input: &str, part: &str, offset: usize) -> Result<LocalDate, Error> {
        part.parse().map_err(|_| Error::parse(input, offset))
    }

    fn parse_period(input: &str, part: &str, offset: usize) -> Result<Period, Error> {
        part.parse().map_err(|e| match e {
            Error::Parse { offset: inner, .. } => Error::parse(input, offset + inner),
            other                              => other,
        })
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::Month::{self, *};

    fn date(year: i64, month: Month, day: i8) -> LocalDate {
        LocalDate::ymd(year, month, day).unwrap()
    }

    fn range(start: (i64, Month, i8), end: (i64, Month, i8)) -> LocalDateRange {
        LocalDateRange::of(date(start.0, start.1, start.2), date(end.0, end.1, end.2)).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn backwards() {
            assert_eq!(LocalDateRange::of(date(2023, May, 2), date(2023, May, 1)),
                       Err(Error::InvalidRange("end date must be on or after start date")));
        }

        #[test]
        fn closed() {
            let closed = LocalDateRange::of_closed(date(2023, May, 1), date(2023, May, 31)).unwrap();
            assert_eq!(closed.end(), date(2023, June, 1));
            assert_eq!(closed.end_inclusive(), Ok(date(2023, May, 31)));
        }

        #[test]
        fn closed_to_the_end_of_time() {
            let closed = LocalDateRange::of_closed(date(2023, May, 1), LocalDate::max()).unwrap();
            assert!(closed.is_unbounded_end());
            assert!(closed.contains(LocalDate::max()));
        }

        #[test]
        fn limits() {
            assert!(LocalDateRange::of_empty(LocalDate::max()).is_err());
            assert!(LocalDateRange::of_empty(LocalDate::min()).is_err());
            assert!(LocalDateRange::all().is_unbounded_start());
        }

        #[test]
        fn from_period() {
            let quarter = LocalDateRange::of_period(date(2024, January, 1), &Period::of_months(3)).unwrap();
            assert_eq!(quarter.length_in_days(), Ok(91));
        }
    }

    mod relations {
        use super::*;

        #[test]
        fn contains() {
            let r = range((2023, May, 1), (2023, May, 10));
            assert!(r.contains(date(2023, May, 1)));
            assert!(r.contains(date(2023, May, 9)));
            assert!(!r.contains(date(2023, May, 10)));
            assert!(!r.contains(date(2023, April, 30)));
        }

        #[test]
        fn empty_contains_nothing() {
            let r = LocalDateRange::of_empty(date(2023, May, 1)).unwrap();
            assert!(r.is_empty());
            assert!(!r.contains(date(2023, May, 1)));
        }

        #[test]
        fn abutting() {
            let a = range((2023, May, 1), (2023, May, 10));
            let b = range((2023, May, 10), (2023, May, 20));
            assert!(a.abuts(&b));
            assert!(b.abuts(&a));
            assert!(a.is_connected(&b));
            assert!(!a.overlaps(&b));
            assert!(!a.abuts(&a));
        }

        #[test]
        fn overlapping() {
            let a = range((2023, May, 1), (2023, May, 10));
            let b = range((2023, May, 5), (2023, May, 20));
            assert!(a.overlaps(&b));
            assert_eq!(a.intersection(&b), Ok(range((2023, May, 5), (2023, May, 10))));
            assert_eq!(a.union(&b), Ok(range((2023, May, 1), (2023, May, 20))));
        }

        #[test]
        fn with_a_gap() {
            let a = range((2023, May, 1), (2023, May, 10));
            let b = range((2023, June, 1), (2023, June, 5));
            assert_eq!(a.union(&b), Err(Error::InvalidRange("ranges do not connect")));
            assert_eq!(a.span(&b), range((2023, May, 1), (2023, June, 5)));
            assert!(a.is_before_range(&b));
            assert!(b.is_after_range(&a));
        }

        #[test]
        fn enclosing() {
            let outer = range((2023, May, 1), (2023, June, 1));
            assert!(outer.encloses(&range((2023, May, 5), (2023, May, 6))));
            assert!(outer.encloses(&outer));
            assert!(!outer.encloses(&range((2023, April, 30), (2023, May, 6))));
        }

        #[test]
        fn before_and_after() {
            let r = range((2023, May, 1), (2023, May, 10));
            assert!(r.is_before(date(2023, May, 10)));
            assert!(!r.is_before(date(2023, May, 9)));
            assert!(r.is_after(date(2023, April, 30)));
            assert!(!r.is_after(date(2023, May, 1)));
        }
    }

    mod lengths {
        use super::*;

        #[test]
        fn bounded() {
            let r = range((2023, January, 31), (2024, March, 1));
            assert_eq!(r.length_in_days(), Ok(395));
            assert_eq!(r.to_period(), Ok(Period::of(1, 1, 1)));
        }

        #[test]
        fn unbounded() {
            let r = LocalDateRange::of_unbounded_end(date(2023, January, 1)).unwrap();
            assert!(r.length_in_days().is_err());
            assert!(r.to_period().is_err());
        }

        #[test]
        fn iterating() {
            let dates: Vec<_> = range((2024, February, 27), (2024, March, 2)).dates().collect();
            assert_eq!(dates, vec![ date(2024, February, 27), date(2024, February, 28),
                                    date(2024, February, 29), date(2024, March, 1) ]);

            assert_eq!(LocalDateRange::of_empty(date(2024, March, 1)).unwrap().dates().count(), 0);
        }

        #[test]
        fn iterating_to_the_end_of_time() {
            let start = LocalDate::max().plus_days(-2).unwrap();
            let r = LocalDateRange::of_unbounded_end(start).unwrap();
            assert_eq!(r.dates().count(), 3);
        }
    }

    mod text {
        use super::*;

        #[test]
        fn display() {
            assert_eq!(range((2023, January, 1), (2023, February, 1)).to_string(), "2023-01-01/2023-02-01");
        }

        #[cfg(feature="parse")]
        #[test]
        fn parse_dates() {
            assert_eq!("2023-01-01/2023-02-01".parse::<LocalDateRange>(), Ok(range((2023, January, 1), (2023, February, 1))));
        }

        #[cfg(feature="parse")]
        #[test]
        fn parse_periods() {
            assert_eq!("2023-01-01/P1M".parse::<LocalDateRange>(), Ok(range((2023, January, 1), (2023, February, 1))));
            assert_eq!("P2D/2023-01-03".parse::<LocalDateRange>(), Ok(range((2023, January, 1), (2023, January, 3))));
        }

        #[cfg(feature="parse")]
        #[test]
        fn parse_failures() {
            assert_eq!("2023-01-01".parse::<LocalDateRange>(), Err(Error::parse("2023-01-01", 10)));
            assert_eq!("2023-01-01/2023-13-01".parse::<LocalDateRange>(), Err(Error::parse("2023-01-01/2023-13-01", 11)));
            assert_eq!("2023-01-01/P1X".parse::<LocalDateRange>(), Err(Error::parse("2023-01-01/P1X", 13)));
            assert_eq!("P1D/P1D".parse::<LocalDateRange>(), Err(Error::parse("P1D/P1D", 4)));
        }
    }
}
