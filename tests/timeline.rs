extern crate datetime_extra;
use datetime_extra::{Duration, Instant, Error};


mod durations {
    use super::*;

    #[test]
    fn adding_carries_milliseconds() {
        assert_eq!(Duration::of_millis(1_500), Duration::of_millis(750) + Duration::of_millis(750));
    }

    #[test]
    fn subtracting_borrows_milliseconds() {
        assert_eq!(Duration::of_millis(750), Duration::of_millis(1_500) - Duration::of_millis(750));
    }

    #[test]
    fn negative_lengths() {
        assert_eq!(Duration::of_millis(-1).lengths(), (-1, 999_000_000));
        assert!(Duration::of_millis(-1).is_negative());
    }

    #[test]
    fn multiplication() {
        assert_eq!(Duration::of(1), Duration::of_millis(250) * 4);
    }

    #[test]
    fn overflow() {
        assert_eq!(Duration::of(i64::MAX).checked_add(Duration::of(1)), Err(Error::Overflow));
        assert_eq!(Duration::of(i64::MIN).checked_neg(), Err(Error::Overflow));
    }
}


mod instants {
    use super::*;

    #[test]
    fn seconds_and_milliseconds() {
        assert_eq!(Instant::at(3), Instant::at_ms(3, 0));
        assert_eq!(Instant::at_ms(3, 333).milliseconds(), 333);
    }

    #[test]
    fn epoch() {
        assert_eq!(Instant::at_epoch().seconds(), 0);
    }

    #[test]
    fn adding_durations() {
        assert_eq!(Instant::at(10), Instant::at(3) + Duration::of(7));
        assert_eq!(Instant::at_ms(1, 200), Instant::at_ms(0, 700) + Duration::of_millis(500));
    }

    #[test]
    fn subtracting_durations() {
        assert_eq!(Instant::at(20), Instant::at(50) - Duration::of(30));
        assert_eq!(Instant::at_ms(-1, 900), Instant::at(0) - Duration::of_millis(100));
    }

    #[test]
    fn durations_between() {
        let start = Instant::at_ms(100, 250);
        let end = Instant::at_ms(102, 0);

        assert_eq!(start.duration_until(&end), Ok(Duration::of_millis(1_750)));
        assert_eq!(end.duration_until(&start), Ok(Duration::of_millis(-1_750)));
    }

    #[test]
    fn the_clock_is_running() {
        assert!(Instant::now().seconds() > 0);
    }
}
