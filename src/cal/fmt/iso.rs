use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime};
use crate::cal::fmt::ISO;
use crate::util::RangeExt;


// Years outside of 0000 to 9999 get a sign and at least four digits.

impl ISO for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.year();
        if year.is_within(0 ..= 9999) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
    }
}

impl ISO for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}.{:03}", self.hour(), self.minute(), self.second(), self.millisecond())
    }
}

impl ISO for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date().iso(), self.time().iso())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::Month;

    #[test]
    fn dates() {
        let date = LocalDate::ymd(1985, Month::February, 28).unwrap();
        assert_eq!(date.iso().to_string(), "1985-02-28");
    }

    #[test]
    fn distant_years() {
        assert_eq!(LocalDate::ymd(-753, Month::December, 1).unwrap().iso().to_string(), "-0753-12-01");
        assert_eq!(LocalDate::ymd(10601, Month::January, 31).unwrap().iso().to_string(), "+10601-01-31");
    }

    #[test]
    fn date_times() {
        let time = LocalTime::hms_ms(7, 5, 3, 20).unwrap();
        assert_eq!(time.iso().to_string(), "07:05:03.020");

        let date = LocalDate::ymd(2000, Month::January, 1).unwrap();
        assert_eq!(LocalDateTime::new(date, time).iso().to_string(), "2000-01-01T07:05:03.020");
    }
}
