//! Misc stuff.

use std::ops::RangeInclusive;

use num_traits::{CheckedAdd, CheckedMul, CheckedNeg, CheckedSub, ToPrimitive};

use crate::error::Error;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values.
    fn is_within(&self, range: RangeInclusive<Self>) -> bool where Self: Sized;
}

// Define RangeExt on *anything* that can be compared, though it’s only
// really ever used for numeric ranges...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: RangeInclusive<Self>) -> bool {
        *self >= *range.start() && *self <= *range.end()
    }
}


// Every piece of amount arithmetic in this crate goes through one of these,
// so an overflow always surfaces as `Error::Overflow` instead of wrapping.

pub(crate) fn add_exact<N: CheckedAdd>(a: N, b: N) -> Result<N, Error> {
    a.checked_add(&b).ok_or(Error::Overflow)
}

pub(crate) fn sub_exact<N: CheckedSub>(a: N, b: N) -> Result<N, Error> {
    a.checked_sub(&b).ok_or(Error::Overflow)
}

pub(crate) fn mul_exact<N: CheckedMul>(a: N, b: N) -> Result<N, Error> {
    a.checked_mul(&b).ok_or(Error::Overflow)
}

pub(crate) fn neg_exact<N: CheckedNeg>(a: N) -> Result<N, Error> {
    a.checked_neg().ok_or(Error::Overflow)
}

/// Narrows a wide value into an `i32`, failing rather than truncating.
pub(crate) fn to_int_exact<N: ToPrimitive>(n: N) -> Result<i32, Error> {
    n.to_i32().ok_or(Error::Overflow)
}


/// Split a number of periods into a number of whole cycles, and the number
/// of periods left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn within_inclusive() {
        assert!(5.is_within(1 ..= 5));
        assert!(!6.is_within(1 ..= 5));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(mul_exact(i32::MAX, 2), Err(Error::Overflow));
        assert_eq!(neg_exact(i32::MIN), Err(Error::Overflow));
        assert_eq!(to_int_exact(i64::from(i32::MAX) + 1), Err(Error::Overflow));
        assert_eq!(add_exact(2_i64, 3), Ok(5));
    }

    #[test]
    fn negative_cycles_wrap() {
        assert_eq!(split_cycles(-1, 7), (-1, 6));
        assert_eq!(split_cycles(15, 7), (2, 1));
    }
}
