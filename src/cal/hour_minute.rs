//! Times of day to the minute.

use std::fmt;
use std::str::FromStr;

use crate::cal::TimePiece;
use crate::cal::ampm::AmPm;
use crate::cal::datetime::{LocalDate, LocalDateTime, LocalTime};
use crate::error::Error;
use crate::field::{ChronoField, TemporalField};
use crate::temporal::Temporal;
use crate::unit::{convert, CalendarUnit};
use crate::util::split_cycles;


const MINUTES_IN_DAY: i64 = 24 * 60;


/// An **hour-minute** is a time of day with no seconds: `09:30`, or
/// `23:59`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct HourMinute {
    hour: i8,
    minute: i8,
}

impl HourMinute {

    /// Creates an hour-minute, checking that the hour is from 0 to 23 and
    /// the minute from 0 to 59.
    pub fn of(hour: i64, minute: i64) -> Result<Self, Error> {
        let hour   = ChronoField::HourOfDay.check_valid_value(hour)?;
        let minute = ChronoField::MinuteOfHour.check_valid_value(minute)?;
        Ok(Self { hour: hour as i8, minute: minute as i8 })
    }

    /// Creates an hour-minute from a number of minutes since midnight,
    /// wrapping around at the end of the day.
    pub fn of_minute_of_day(minutes: i64) -> Self {
        let (_, minutes) = split_cycles(minutes, MINUTES_IN_DAY);
        Self { hour: (minutes / 60) as i8, minute: (minutes % 60) as i8 }
    }

    /// Extracts the hour and minute from any temporal that has them.
    ///
    /// ```rust
    /// use datetime_extra::{HourMinute, LocalTime};
    ///
    /// let time = LocalTime::hms(14, 45, 59).unwrap();
    /// assert_eq!(HourMinute::from_temporal(&time), HourMinute::of(14, 45));
    /// ```
    pub fn from_temporal<T: Temporal>(temporal: &T) -> Result<Self, Error> {
        Self::of(temporal.get_field(ChronoField::HourOfDay)?,
                 temporal.get_field(ChronoField::MinuteOfHour)?)
    }

    pub fn hour(&self) -> i8 {
        self.hour
    }

    pub fn minute(&self) -> i8 {
        self.minute
    }

    pub fn am_pm(&self) -> AmPm {
        if self.hour < 12 { AmPm::Am } else { AmPm::Pm }
    }

    /// The number of minutes since midnight.
    pub fn minute_of_day(&self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }

    /// Returns the time this many hours later, wrapping around midnight.
    pub fn plus_hours(self, hours: i64) -> Self {
        self.plus_minutes((hours % 24) * 60)
    }

    /// Returns the time this many minutes later, wrapping around midnight.
    pub fn plus_minutes(self, minutes: i64) -> Self {
        Self::of_minute_of_day(self.minute_of_day() + minutes % MINUTES_IN_DAY)
    }

    /// Combines this time with a date.
    pub fn at_date(self, date: LocalDate) -> LocalDateTime {
        LocalDateTime::new(date, self.to_local_time())
    }

    pub fn to_local_time(self) -> LocalTime {
        LocalTime::from_seconds_since_midnight(self.minute_of_day() * 60)
    }
}

impl From<LocalTime> for HourMinute {
    fn from(time: LocalTime) -> Self {
        Self { hour: time.hour(), minute: time.minute() }
    }
}

impl Temporal for HourMinute {
    fn is_supported_field(&self, field: ChronoField) -> bool {
        matches!(field, ChronoField::HourOfDay | ChronoField::MinuteOfHour
                      | ChronoField::MinuteOfDay | ChronoField::AmPmOfDay)
    }

    fn is_supported_unit(&self, unit: CalendarUnit) -> bool {
        matches!(unit, CalendarUnit::Minutes | CalendarUnit::Hours | CalendarUnit::HalfDays)
    }

    fn get_field(&self, field: ChronoField) -> Result<i64, Error> {
        match field {
            ChronoField::HourOfDay     => Ok(self.hour as i64),
            ChronoField::MinuteOfHour  => Ok(self.minute as i64),
            ChronoField::MinuteOfDay   => Ok(self.minute_of_day()),
            ChronoField::AmPmOfDay     => Ok(self.am_pm().value()),
            _                          => Err(Error::UnsupportedField(field.name())),
        }
    }

    fn with_field(&self, field: ChronoField, value: i64) -> Result<Self, Error> {
        let value = field.check_valid_value(value)?;

        match field {
            ChronoField::HourOfDay     => Self::of(value, self.minute as i64),
            ChronoField::MinuteOfHour  => Self::of(self.hour as i64, value),
            ChronoField::MinuteOfDay   => Ok(Self::of_minute_of_day(value)),
            ChronoField::AmPmOfDay     => Ok(self.plus_hours((value - self.am_pm().value()) * 12)),
            _                          => Err(Error::UnsupportedField(field.name())),
        }
    }

    fn plus(&self, amount: i64, unit: CalendarUnit) -> Result<Self, Error> {
        match unit {
            CalendarUnit::Minutes   => Ok(self.plus_minutes(amount)),
            CalendarUnit::Hours     => Ok(self.plus_hours(amount)),
            CalendarUnit::HalfDays  => Ok(self.plus_hours((amount % 2) * 12)),
            _                       => Err(Error::UnsupportedUnit(unit)),
        }
    }

    fn until(&self, end: &Self, unit: CalendarUnit) -> Result<i64, Error> {
        if !self.is_supported_unit(unit) {
            return Err(Error::UnsupportedUnit(unit));
        }

        let minutes = end.minute_of_day() - self.minute_of_day();
        Ok(convert(minutes, CalendarUnit::Minutes, unit)?.0)
    }
}

impl fmt::Debug for HourMinute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HourMinute({})", self)
    }
}

impl fmt::Display for HourMinute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parses the `HH:MM` form, with exactly two digits for each part.
impl FromStr for HourMinute {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let bytes = input.as_bytes();

        if let Some(pos) = (0 .. 5).find(|&i| match (i, bytes.get(i)) {
            (2, Some(b':')) => false,
            (2, _)          => true,
            (_, Some(b))    => !b.is_ascii_digit(),
            (_, None)       => true,
        }) {
            return Err(Error::parse(input, pos));
        }

        if bytes.len() > 5 {
            return Err(Error::parse(input, 5));
        }

        let digits = |a: u8, b: u8| i64::from(a - b'0') * 10 + i64::from(b - b'0');
        Self::of(digits(bytes[0], bytes[1]), digits(bytes[3], bytes[4]))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn hm(hour: i64, minute: i64) -> HourMinute {
        HourMinute::of(hour, minute).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn of() {
            assert_eq!(hm(9, 30).hour(), 9);
            assert!(HourMinute::of(24, 0).is_err());
            assert!(HourMinute::of(12, 60).is_err());
        }

        #[test]
        fn from_datetime() {
            let dt = LocalDateTime::at(3_600 * 5 + 60 * 7 + 13);
            assert_eq!(HourMinute::from_temporal(&dt), Ok(hm(5, 7)));
        }

        #[test]
        fn from_date_fails() {
            let date = LocalDate::ymd(2023, crate::cal::datetime::Month::May, 1).unwrap();
            assert_eq!(HourMinute::from_temporal(&date), Err(Error::UnsupportedField("HourOfDay")));
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn wrapping() {
            assert_eq!(hm(23, 30).plus_minutes(45), hm(0, 15));
            assert_eq!(hm(1, 0).plus_hours(-2), hm(23, 0));
            assert_eq!(hm(1, 0).plus_hours(49), hm(2, 0));
        }

        #[test]
        fn through_units() {
            assert_eq!(hm(10, 0).plus(3, CalendarUnit::HalfDays), Ok(hm(22, 0)));
            assert_eq!(hm(10, 0).plus(1, CalendarUnit::Seconds), Err(Error::UnsupportedUnit(CalendarUnit::Seconds)));
            assert_eq!(hm(10, 0).until(&hm(12, 59), CalendarUnit::Hours), Ok(2));
            assert_eq!(hm(10, 0).until(&hm(9, 0), CalendarUnit::Minutes), Ok(-60));
        }

        #[test]
        fn fields() {
            assert_eq!(hm(13, 5).get_field(ChronoField::AmPmOfDay), Ok(1));
            assert_eq!(hm(13, 5).with_field(ChronoField::AmPmOfDay, 0), Ok(hm(1, 5)));
            assert_eq!(hm(13, 5).with_field(ChronoField::MinuteOfDay, 90), Ok(hm(1, 30)));
        }
    }

    mod text {
        use super::*;

        #[test]
        fn display() {
            assert_eq!(hm(7, 5).to_string(), "07:05");
            assert_eq!(format!("{:?}", hm(7, 5)), "HourMinute(07:05)");
        }

        #[test]
        fn parse() {
            assert_eq!("23:59".parse::<HourMinute>(), Ok(hm(23, 59)));
            assert_eq!("2:59".parse::<HourMinute>(), Err(Error::parse("2:59", 1)));
            assert_eq!("12-00".parse::<HourMinute>(), Err(Error::parse("12-00", 2)));
            assert_eq!("12:00:00".parse::<HourMinute>(), Err(Error::parse("12:00:00", 5)));
            assert!("24:00".parse::<HourMinute>().is_err());
        }
    }

    #[test]
    fn to_local_time() {
        assert_eq!(hm(6, 45).to_local_time(), LocalTime::hm(6, 45).unwrap());
    }
}
