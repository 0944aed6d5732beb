extern crate datetime_extra;
use datetime_extra::Error;
use datetime_extra::unit::{convert, CalendarUnit};
use datetime_extra::unit::CalendarUnit::*;


#[test]
fn widening_multiplies() {
    assert_eq!(convert(2, Days, Hours), Ok((48, 0)));
    assert_eq!(convert(3, Weeks, Days), Ok((21, 0)));
    assert_eq!(convert(1, Millennia, Months), Ok((12_000, 0)));
}

#[test]
fn narrowing_keeps_a_remainder() {
    assert_eq!(convert(3_601, Seconds, Hours), Ok((1, 1)));
    assert_eq!(convert(-3_601, Seconds, Hours), Ok((-1, -1)));
    assert_eq!(convert(25, Months, Years), Ok((2, 1)));
}

#[test]
fn sub_second_units() {
    assert_eq!(convert(1, Millis, Micros), Ok((1_000, 0)));
    assert_eq!(convert(1_500, Micros, Millis), Ok((1, 500)));
    assert_eq!(convert(12, Hours, HalfDays), Ok((1, 0)));
}

#[test]
fn identity() {
    assert_eq!(convert(i64::MIN, Decades, Decades), Ok((i64::MIN, 0)));
}

#[test]
fn no_exact_ratio() {
    assert_eq!(convert(1, Weeks, Months), Err(Error::IncompatibleUnits { from: Weeks, to: Months }));
    assert_eq!(convert(1, Years, Days), Err(Error::IncompatibleUnits { from: Years, to: Days }));
}

#[test]
fn unsupported() {
    assert_eq!(convert(1, Eras, Years), Err(Error::UnsupportedUnit(Eras)));
    assert_eq!(convert(1, Days, Forever), Err(Error::UnsupportedUnit(Forever)));
    assert_eq!(convert(1, HalfYears, Months), Err(Error::UnsupportedUnit(HalfYears)));
}

#[test]
fn overflow() {
    assert_eq!(convert(i64::MAX, Days, Nanos), Err(Error::Overflow));
}

#[test]
fn round_trips() {
    let units: &[CalendarUnit] = &[ Nanos, Micros, Millis, Seconds, Minutes, Hours, HalfDays, Days, Weeks ];

    for &from in units {
        for &to in units {
            let (value, remainder) = convert(1_003, from, to).unwrap();
            let (back, _) = convert(value, to, from).unwrap();
            let (rest, _) = convert(remainder, from, from).unwrap();
            assert_eq!(back + rest, 1_003, "{} to {}", from, to);
        }
    }
}
