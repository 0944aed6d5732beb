extern crate datetime_extra;
use datetime_extra::LocalDate;
use datetime_extra::field::{ChronoField, FieldValues, ResolverStyle};
use datetime_extra::field::half::{DAY_OF_HALF, HALF_OF_YEAR};

extern crate rustc_serialize;
#[cfg(feature="parse")]
use rustc_serialize::json::Json;

#[cfg(feature="parse")]
use std::fs;
#[cfg(feature="parse")]
use std::path::Path;


fn half_fields(year: i64, half: i64) -> FieldValues {
    FieldValues::new()
        .with(ChronoField::Year, year)
        .with(HALF_OF_YEAR, half)
}


#[cfg(feature="parse")]
#[test]
fn resolution_table() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/half_resolution.json");
    let text = fs::read_to_string(&path).unwrap();
    let cases = Json::from_str(&text).unwrap();

    for case in cases.as_array().unwrap() {
        let case = case.as_array().unwrap();
        let (year, half, day) = (case[0].as_i64().unwrap(), case[1].as_i64().unwrap(), case[2].as_i64().unwrap());
        let style: ResolverStyle = case[3].as_string().unwrap().parse().unwrap();

        let mut values = half_fields(year, half).with(DAY_OF_HALF, day);
        let result = values.resolve_date(style);

        match case[4].as_string() {
            Some(expected) => {
                let expected: LocalDate = expected.parse().unwrap();
                assert_eq!(result, Ok(Some(expected)), "{:?}", case);
                assert!(values.is_empty(), "{:?} left {:?}", case, values);
            },
            None => {
                assert!(result.is_err(), "{:?} gave {:?}", case, result);
                assert_eq!(values.len(), 3);
            },
        }
    }
}

#[test]
fn without_a_day() {
    let date = LocalDate::ymd(2023, datetime_extra::Month::July, 1).unwrap();

    assert_eq!(half_fields(2023, 2).resolve_date(ResolverStyle::Lenient), Ok(Some(date)));
    assert_eq!(half_fields(2023, 2).resolve_date(ResolverStyle::Smart), Ok(None));
    assert_eq!(half_fields(2023, 2).resolve_date(ResolverStyle::Strict), Ok(None));
}

#[test]
fn leaves_other_fields_alone() {
    let mut values = half_fields(2023, 1)
        .with(DAY_OF_HALF, 10)
        .with(ChronoField::HourOfDay, 9);

    assert_eq!(values.resolve_date(ResolverStyle::Smart).map(|d| d.map(|d| d.epoch_day())),
               Ok(Some(LocalDate::ymd(2023, datetime_extra::Month::January, 10).unwrap().epoch_day())));
    assert_eq!(values.get(ChronoField::HourOfDay), Some(9));
    assert_eq!(values.len(), 1);
}
