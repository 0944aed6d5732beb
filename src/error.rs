//! The error type shared by units, fields, and amounts.

use thiserror::Error;

use crate::cal::datetime::Error as DateTimeError;
use crate::field::ValueRange;
use crate::unit::CalendarUnit;


#[derive(PartialEq, Debug, Clone, Error)]
pub enum Error {

    /// The unit can never take part in this operation: eras, forever, and
    /// half-years in unit conversion, or a unit the temporal doesn’t have.
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(CalendarUnit),

    /// Both units are supported, but there’s no exact ratio between them,
    /// such as between days and months.
    #[error("unable to convert between units: {from} to {to}")]
    IncompatibleUnits { from: CalendarUnit, to: CalendarUnit },

    #[error("unsupported field: {0}")]
    UnsupportedField(&'static str),

    #[error("invalid value for {field} (valid values {range}): {value}")]
    OutOfRange { field: &'static str, value: i64, range: ValueRange },

    #[error(transparent)]
    Date(#[from] DateTimeError),

    #[error("integer overflow")]
    Overflow,

    #[error("division by zero")]
    DivideByZero,

    /// The text didn’t match the grammar. The offset is the byte position
    /// the parser gave up at.
    #[error("text cannot be parsed at offset {offset}: {text:?}")]
    Parse { text: String, offset: usize },

    /// A generic amount had a unit that doesn’t convert to a whole number
    /// of the target unit.
    #[error("amount could not be converted to a whole number of {target}: {value} {unit}")]
    IncompatibleAmount { value: i64, unit: CalendarUnit, target: CalendarUnit },

    #[error("invalid date range: {0}")]
    InvalidRange(&'static str),
}

impl Error {
    pub(crate) fn parse(text: &str, offset: usize) -> Self {
        Error::Parse { text: text.to_owned(), offset }
    }
}
