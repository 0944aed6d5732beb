//! Parsing ISO-8601 dates and times.

use std::str::FromStr;

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Error as DateTimeError};


impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match iso8601::date(input) {
            Ok(fields)  => Ok(fields_to_date(fields)?),
            Err(e)      => Err(Error::Parse(e)),
        }
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match iso8601::time(input) {
            Ok(fields)  => fields_to_time(fields),
            Err(e)      => Err(Error::Parse(e)),
        }
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = match iso8601::datetime(input) {
            Ok(fields)  => fields,
            Err(e)      => return Err(Error::Parse(e)),
        };

        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;
        Ok(Self::new(date, time))
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate, DateTimeError> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month_variant = Month::from_one(month as i8)?;
            LocalDate::ymd(year as i64, month_variant, day as i8)
        },
        iso8601::Date::Week { year, ww, d } => {
            let weekday_variant = Weekday::from_one(d as i8)?;
            LocalDate::ywd(year as i64, ww as i64, weekday_variant)
        },
        iso8601::Date::Ordinal { year, ddd } => {
            LocalDate::yd(year as i64, ddd as i64)
        },
    }
}

/// Local times have no offset, so a time with a non-zero one is an error
/// rather than being silently shifted.
fn fields_to_time(fields: iso8601::Time) -> Result<LocalTime, Error> {
    if fields.tz_offset_hours != 0 || fields.tz_offset_minutes != 0 {
        return Err(Error::Offset);
    }

    let h  = fields.hour as i8;
    let m  = fields.minute as i8;
    let s  = fields.second as i8;
    let ms = fields.millisecond as i16;

    Ok(LocalTime::hms_ms(h, m, s, ms)?)
}


/// The error returned when a date or time fails to parse.
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum Error {

    /// The text was well-formed, but named a date or time that doesn’t
    /// exist.
    #[error("parsing resulted in an invalid date: {0}")]
    Date(#[from] DateTimeError),

    #[error("local times cannot have a UTC offset")]
    Offset,

    #[error("parse error: {0}")]
    Parse(String),
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::DatePiece;

    #[test]
    fn date_forms() {
        let date = LocalDate::ymd(2015, Month::June, 26).unwrap();
        assert_eq!("2015-06-26".parse(), Ok(date));
        assert_eq!("2015-W26-5".parse::<LocalDate>().map(|d| d.weekday()), Ok(Weekday::Friday));
    }

    #[test]
    fn invalid_dates() {
        assert_eq!("2015-02-29".parse::<LocalDate>(), Err(Error::Date(DateTimeError::OutOfRange)));
        assert!(matches!("26/06/2015".parse::<LocalDate>(), Err(Error::Parse(_))));
    }

    #[test]
    fn times() {
        assert_eq!("14:30:15.250".parse(), Ok(LocalTime::hms_ms(14, 30, 15, 250).unwrap()));
        assert_eq!("14:30:15+01:00".parse::<LocalTime>(), Err(Error::Offset));
    }

    #[test]
    fn date_times() {
        let expected = LocalDateTime::new(LocalDate::ymd(2001, Month::February, 3).unwrap(), LocalTime::hms(4, 5, 6).unwrap());
        assert_eq!("2001-02-03T04:05:06".parse(), Ok(expected));
        assert_eq!("2001-02-03T04:05:06Z".parse(), Ok(expected));
    }
}
