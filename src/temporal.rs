//! The generic interfaces that fields, units, and amounts work through.
//!
//! A **temporal** is a point in time (or on the clock face) that can be
//! queried and adjusted field by field, and moved forwards or backwards
//! by a number of units. A **temporal amount** is a length of time made up
//! of one or more units. Neither trait knows anything about half-years or
//! single-unit amounts: those are built entirely on top of them.

use std::fmt;

use crate::duration::Duration;
use crate::error::Error;
use crate::field::{ChronoField, TemporalField, ValueRange};
use crate::field::half::HALF_YEARS;
use crate::unit::CalendarUnit;
use crate::util::neg_exact;


/// A date, time, or date-time that can be read and adjusted through fields
/// and moved through units.
pub trait Temporal: Copy + fmt::Debug {

    /// Returns whether this temporal has a value for the given built-in
    /// field.
    fn is_supported_field(&self, field: ChronoField) -> bool;

    /// Returns whether this temporal can be moved by the given unit.
    fn is_supported_unit(&self, unit: CalendarUnit) -> bool;

    /// Returns the value of a built-in field.
    fn get_field(&self, field: ChronoField) -> Result<i64, Error>;

    /// Returns the range of valid values for a built-in field, taking this
    /// temporal’s own month, quarter, or year length into account.
    fn field_range(&self, field: ChronoField) -> Result<ValueRange, Error> {
        if self.is_supported_field(field) {
            Ok(field.range())
        }
        else {
            Err(Error::UnsupportedField(field.name()))
        }
    }

    /// Returns a copy of this temporal with a built-in field set to a new
    /// value. The value is checked against the field’s range first.
    fn with_field(&self, field: ChronoField, value: i64) -> Result<Self, Error>;

    /// Returns a copy of this temporal moved by the given amount of a unit.
    fn plus(&self, amount: i64, unit: CalendarUnit) -> Result<Self, Error>;

    /// Returns the number of whole units between this temporal and
    /// another, which is negative if the other one comes first.
    fn until(&self, end: &Self, unit: CalendarUnit) -> Result<i64, Error>;

    /// Returns a copy of this temporal moved back by the given amount of a
    /// unit.
    fn minus(&self, amount: i64, unit: CalendarUnit) -> Result<Self, Error> {
        self.plus(neg_exact(amount)?, unit)
    }

    /// Returns the value of any field, built-in or not.
    fn get<F: TemporalField>(&self, field: F) -> Result<i64, Error> {
        field.get_from(self)
    }

    /// Returns a copy of this temporal with any field, built-in or not,
    /// set to a new value.
    fn with<F: TemporalField>(&self, field: F, value: i64) -> Result<Self, Error> {
        field.adjust_into(*self, value)
    }

    /// Returns a copy of this temporal with an amount added.
    fn plus_amount<A: TemporalAmount>(&self, amount: &A) -> Result<Self, Error> {
        amount.add_to(*self)
    }

    /// Returns a copy of this temporal with an amount subtracted.
    fn minus_amount<A: TemporalAmount>(&self, amount: &A) -> Result<Self, Error> {
        amount.subtract_from(*self)
    }
}


/// An amount of time, made of a value for each of one or more units.
pub trait TemporalAmount {

    /// The units this amount is made from.
    fn units(&self) -> &[CalendarUnit];

    /// The value for one of this amount’s units.
    fn get(&self, unit: CalendarUnit) -> Result<i64, Error>;

    /// Adds this amount to a temporal.
    fn add_to<T: Temporal>(&self, temporal: T) -> Result<T, Error>;

    /// Subtracts this amount from a temporal.
    fn subtract_from<T: Temporal>(&self, temporal: T) -> Result<T, Error>;
}


/// A unit of time that can measure the gap between two temporals and move
/// a temporal forward.
pub trait TemporalUnit: Copy + fmt::Debug {

    /// The length of the unit, which is an estimate for calendar units.
    fn duration(&self) -> Duration;

    fn is_duration_estimated(&self) -> bool;

    fn is_date_based(&self) -> bool;

    fn is_time_based(&self) -> bool;

    /// Returns whether the temporal can be moved by this unit.
    fn is_supported_by<T: Temporal>(&self, temporal: &T) -> bool;

    /// Returns the temporal moved by the given amount of this unit.
    fn add_to<T: Temporal>(&self, temporal: T, amount: i64) -> Result<T, Error>;

    /// Returns the whole number of this unit between the start (inclusive)
    /// and the end (exclusive).
    fn between<T: Temporal>(&self, start: &T, end: &T) -> Result<i64, Error>;
}

impl TemporalUnit for CalendarUnit {
    fn duration(&self) -> Duration {
        CalendarUnit::duration(*self)
    }

    fn is_duration_estimated(&self) -> bool {
        CalendarUnit::is_duration_estimated(*self)
    }

    fn is_date_based(&self) -> bool {
        CalendarUnit::is_date_based(*self)
    }

    fn is_time_based(&self) -> bool {
        CalendarUnit::is_time_based(*self)
    }

    fn is_supported_by<T: Temporal>(&self, temporal: &T) -> bool {
        match *self {
            CalendarUnit::HalfYears => HALF_YEARS.is_supported_by(temporal),
            unit                    => temporal.is_supported_unit(unit),
        }
    }

    fn add_to<T: Temporal>(&self, temporal: T, amount: i64) -> Result<T, Error> {
        temporal.plus(amount, *self)
    }

    fn between<T: Temporal>(&self, start: &T, end: &T) -> Result<i64, Error> {
        start.until(end, *self)
    }
}
