extern crate datetime_extra;
pub use datetime_extra::ISO;
pub use std::string::ToString;

mod datetimes {
    use super::*;
    use datetime_extra::{LocalDate, LocalTime, LocalDateTime, Month};

    #[test]
    fn leap_day() {
        let date = LocalDate::ymd(1600, Month::February, 29).unwrap();
        assert_eq!(date.iso().to_string(), "1600-02-29");
    }

    #[test]
    fn before_year_zero() {
        let date = LocalDate::ymd(-44, Month::March, 15).unwrap();
        assert_eq!(date.iso().to_string(), "-0044-03-15");
    }

    #[test]
    fn past_year_9999() {
        let date = LocalDate::ymd(12021, Month::July, 4).unwrap();
        assert_eq!(date.iso().to_string(), "+12021-07-04");
    }

    #[test]
    fn half_past_nine() {
        let time = LocalTime::hms_ms(21, 30, 0, 5).unwrap();
        assert_eq!(time.iso().to_string(), "21:30:00.005");
    }

    #[test]
    fn date_and_time() {
        let then = LocalDateTime::new(
                    LocalDate::ymd(2023, Month::June, 30).unwrap(),
                    LocalTime::hms(23, 59, 59).unwrap());

        assert_eq!(then.iso().to_string(), "2023-06-30T23:59:59.000");
    }
}

mod amounts {
    use datetime_extra::{Days, Hours, Minutes, Months, Period, Seconds, Weeks, Years};

    #[test]
    fn time_based() {
        assert_eq!(Seconds::of(-5).to_string(), "PT-5S");
        assert_eq!(Minutes::of(90).to_string(), "PT90M");
        assert_eq!(Hours::of(0).to_string(), "PT0H");
    }

    #[test]
    fn date_based() {
        assert_eq!(Days::of(12).to_string(), "P12D");
        assert_eq!(Weeks::of(3).to_string(), "P3W");
        assert_eq!(Months::of(18).to_string(), "P18M");
        assert_eq!(Years::of(-2).to_string(), "P-2Y");
    }

    #[test]
    fn periods() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(Period::of(1, 0, 4).to_string(), "P1Y4D");
        assert_eq!(Period::of(0, -3, 0).to_string(), "P-3M");
    }
}

mod calendar_values {
    use datetime_extra::{AmPm, Half, HourMinute, LocalDate, LocalDateRange, Month, Quarter};

    #[test]
    fn halves_and_quarters() {
        assert_eq!(Half::H2.to_string(), "H2");
        assert_eq!(Quarter::from_month(Month::November).to_string(), "Q4");
    }

    #[test]
    fn am_pm() {
        assert_eq!(AmPm::of_hour(12).unwrap().to_string(), "PM");
    }

    #[test]
    fn hour_minute() {
        assert_eq!(HourMinute::of(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn range() {
        let range = LocalDateRange::of_closed(
                        LocalDate::ymd(2023, Month::January, 1).unwrap(),
                        LocalDate::ymd(2023, Month::January, 31).unwrap()).unwrap();

        assert_eq!(range.to_string(), "2023-01-01/2023-02-01");
    }
}
