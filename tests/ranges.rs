extern crate datetime_extra;
use datetime_extra::{DatePiece, Error, LocalDate, LocalDateRange, Month, Period, Weekday};


fn date(year: i64, month: Month, day: i8) -> LocalDate {
    LocalDate::ymd(year, month, day).unwrap()
}

fn month_of(year: i64, month: Month) -> LocalDateRange {
    LocalDateRange::of_period(date(year, month, 1), &Period::of_months(1)).unwrap()
}


#[test]
fn months_abut() {
    let january = month_of(2023, Month::January);
    let february = month_of(2023, Month::February);

    assert!(january.abuts(&february));
    assert!(!january.overlaps(&february));
    assert_eq!(january.union(&february).unwrap().length_in_days(), Ok(59));
}

#[test]
fn gaps_only_span() {
    let january = month_of(2023, Month::January);
    let march = month_of(2023, Month::March);

    assert_eq!(january.union(&march), Err(Error::InvalidRange("ranges do not connect")));
    assert_eq!(january.span(&march).to_period(), Ok(Period::of_months(3)));
}

#[test]
fn counting_weekends() {
    let weekends = month_of(2023, Month::April).dates()
        .filter(|d| d.weekday() == Weekday::Saturday || d.weekday() == Weekday::Sunday)
        .count();

    assert_eq!(weekends, 10);
}

#[test]
fn empty_ranges_have_no_dates() {
    let range = LocalDateRange::of_empty(date(2023, Month::May, 5)).unwrap();

    assert!(range.is_empty());
    assert_eq!(range.dates().next(), None);
    assert!(!range.contains(date(2023, Month::May, 5)));
}

#[test]
fn unbounded() {
    let from_2000 = LocalDateRange::of_unbounded_end(date(2000, Month::January, 1)).unwrap();

    assert!(from_2000.contains(date(99_999, Month::December, 31)));
    assert!(from_2000.encloses(&month_of(2023, Month::June)));
    assert!(from_2000.length_in_days().is_err());
    assert!(LocalDateRange::all().encloses(&from_2000));
}

#[cfg(feature="parse")]
mod text {
    use super::*;

    #[test]
    fn start_and_end() {
        let range: LocalDateRange = "2023-01-01/2023-04-01".parse().unwrap();
        assert_eq!(range.to_period(), Ok(Period::of_months(3)));
    }

    #[test]
    fn start_and_period() {
        assert_eq!("2023-01-01/P1M".parse(), Ok(month_of(2023, Month::January)));
    }

    #[test]
    fn period_and_end() {
        assert_eq!("P1M/2023-03-01".parse(), Ok(month_of(2023, Month::February)));
    }

    #[test]
    fn display_round_trip() {
        let range = month_of(2024, Month::February);
        assert_eq!(range.to_string().parse(), Ok(range));
    }

    #[test]
    fn backwards() {
        assert!("2023-04-01/2023-01-01".parse::<LocalDateRange>().is_err());
    }
}
