//! Turning dates and times into strings.

use std::fmt;

mod iso;
#[cfg(feature="format")] pub mod custom;


/// Values with a standard ISO-8601 text form.
///
/// ```rust
/// use datetime_extra::{LocalDate, Month, ISO};
///
/// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
/// assert_eq!(date.iso().to_string(), "1969-07-20");
/// ```
pub trait ISO: Sized {

    /// Returns a value that formats this one in ISO-8601 form.
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }

    /// Writes this value in ISO-8601 form.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

/// A borrowed value that displays in ISO-8601 form.
#[derive(Debug)]
pub struct ISOString<'a, T: 'a>(&'a T);

impl<'a, T: ISO> fmt::Display for ISOString<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ISO::fmt(self.0, f)
    }
}
