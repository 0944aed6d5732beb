//! Datetime-to-string routines.
//!
//! A format string looks like the ones for `format!`, with a field letter
//! after the colon inside each pair of braces:
//!
//! ```rust
//! use datetime_extra::{LocalDate, Month};
//! use datetime_extra::cal::fmt::custom::DateFormat;
//!
//! let format = DateFormat::parse("{:D} {_:M} {:Y} is in {:H}, day {:d}").unwrap();
//! let date = LocalDate::ymd(2023, Month::August, 2).unwrap();
//! let text = format.format(&date, &locale::Time::english()).unwrap();
//! assert_eq!(text, "2 August 2023 is in H2, day 33");
//! ```
//!
//! The fields are `Y` year, `y` year of century, `M` month name, `D` day,
//! `E` weekday name, `h` hour, `m` minute, `s` second, `H` half of the
//! year, `Q` quarter, `d` day of the half, and `a` for AM or PM. An
//! underscore before the colon picks the long form of a name.

use std::fmt::Display;
use std::str::CharIndices;

use pad::{PadStr, Alignment};

use crate::cal::ampm::AmPm;
use crate::cal::half::Half;
use crate::cal::quarter::Quarter;
use crate::error::Error;
use crate::field::ChronoField;
use crate::field::half::DAY_OF_HALF;
use crate::temporal::Temporal;


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year(NumArguments),
    YearOfCentury(NumArguments),

    MonthName(bool, TextArguments),

    Day(NumArguments),
    WeekdayName(bool, TextArguments),

    Hour(NumArguments),
    Minute(NumArguments),
    Second(NumArguments),

    Half(TextArguments),
    Quarter(TextArguments),
    DayOfHalf(NumArguments),
    AmPm(TextArguments),
}

impl<'a> Field<'a> {
    fn format<T: Temporal>(&self, when: &T, w: &mut String, locale: &locale::Time) -> Result<(), Error> {
        match *self {
            Field::Literal(s)             => w.push_str(s),
            Field::Year(a)                => a.format(w, when.get_field(ChronoField::Year)?),
            Field::YearOfCentury(a)       => a.format(w, when.get_field(ChronoField::Year)? % 100),
            Field::MonthName(true, a)     => a.format(w, &locale.long_month_name(month_index(when)?)),
            Field::MonthName(false, a)    => a.format(w, &locale.short_month_name(month_index(when)?)),
            Field::Day(a)                 => a.format(w, when.get_field(ChronoField::DayOfMonth)?),
            Field::WeekdayName(true, a)   => a.format(w, &locale.long_day_name(weekday_index(when)?)),
            Field::WeekdayName(false, a)  => a.format(w, &locale.short_day_name(weekday_index(when)?)),
            Field::Hour(a)                => a.format(w, when.get_field(ChronoField::HourOfDay)?),
            Field::Minute(a)              => a.format(w, when.get_field(ChronoField::MinuteOfHour)?),
            Field::Second(a)              => a.format(w, when.get_field(ChronoField::SecondOfMinute)?),
            Field::Half(a)                => a.format(w, &Half::from_temporal(when)?.to_string()),
            Field::Quarter(a)             => a.format(w, &Quarter::from_temporal(when)?.to_string()),
            Field::DayOfHalf(a)           => a.format(w, when.get(DAY_OF_HALF)?),
            Field::AmPm(a)                => a.format(w, &AmPm::from_temporal(when)?.to_string()),
        }

        Ok(())
    }
}

/// Months are counted from zero in the locale’s tables.
fn month_index<T: Temporal>(when: &T) -> Result<usize, Error> {
    Ok(when.get_field(ChronoField::MonthOfYear)? as usize - 1)
}

/// Days are counted from Sunday as zero in the locale’s tables.
fn weekday_index<T: Temporal>(when: &T) -> Result<usize, Error> {
    Ok(when.get_field(ChronoField::DayOfWeek)? as usize % 7)
}


#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DateFormat<'a> {
    pub fields: Vec<Field<'a>>,
}


#[derive(PartialEq, Eq, Clone, Copy, Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid character {c:?} at position {pos}")]
    InvalidChar { c: char, colon: bool, pos: Pos },

    #[error("unclosed brace at position {open_pos}")]
    OpenCurlyBrace { open_pos: Pos },

    #[error("unescaped closing brace at position {close_pos}")]
    CloseCurlyBrace { close_pos: Pos },

    #[error("missing field between positions {open_pos} and {close_pos}")]
    MissingField { open_pos: Pos, close_pos: Pos },

    #[error("alignment given twice in the field at position {open_pos}")]
    DoubleAlignment { open_pos: Pos, current_alignment: Alignment },

    #[error("width given twice in the field at position {open_pos}")]
    DoubleWidth { open_pos: Pos, current_width: Width },

    #[error("width too large in the field at position {open_pos}")]
    WidthTooLarge { open_pos: Pos },
}

pub type Width = usize;
pub type Pos = usize;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Arguments {
    pub alignment: Option<Alignment>,
    pub width:     Option<Width>,
    pub pad_char:  Option<char>,
}

impl Arguments {
    pub fn empty() -> Self {
        Self {
            alignment: None,
            width:     None,
            pad_char:  None,
        }
    }

    pub fn set_width(&mut self, width: Width) -> Self {
        self.width = Some(width);
        *self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        *self
    }

    pub fn update_width(&mut self, width: Width, open_pos: Pos) -> Result<(), FormatError> {
        match self.width {
            None => { self.width = Some(width); Ok(())},
            Some(existing) => Err(FormatError::DoubleWidth { open_pos, current_width: existing }),
        }
    }

    pub fn update_alignment(&mut self, alignment: Alignment, open_pos: Pos) -> Result<(), FormatError> {
        match self.alignment {
            None => { self.alignment = Some(alignment); Ok(())},
            Some(existing) => Err(FormatError::DoubleAlignment { open_pos, current_alignment: existing }),
        }
    }

    fn format(self, w: &mut String, string: &str) {
        let width     = self.width.unwrap_or(0);
        let pad_char  = self.pad_char.unwrap_or(' ');
        let alignment = self.alignment.unwrap_or(Alignment::Left);

        w.push_str(&string.pad(width, pad_char, alignment, false));
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.width.is_none() && self.pad_char.is_none()
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TextArguments(Arguments);

impl TextArguments {
    #[cfg(test)]
    fn empty() -> TextArguments {
        TextArguments(Arguments::empty())
    }

    fn format(self, w: &mut String, string: &str) {
        self.0.format(w, string)
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumArguments(Arguments);

impl NumArguments {
    #[cfg(test)]
    fn empty() -> NumArguments {
        NumArguments(Arguments::empty())
    }

    fn format<N: Display>(self, w: &mut String, number: N) {
        self.0.format(w, &number.to_string())
    }
}

impl<'a> DateFormat<'a> {

    /// Formats any temporal, failing if the format asks for a field the
    /// temporal doesn’t have, such as the hour of a date.
    pub fn format<T: Temporal>(&self, when: &T, locale: &locale::Time) -> Result<String, Error> {
        let mut buf = String::new();

        for field in &self.fields {
            field.format(when, &mut buf, locale)?;
        }

        Ok(buf)
    }

    pub fn parse(input: &'a str) -> Result<DateFormat<'a>, FormatError> {
        let mut parser = FormatParser::new(input);
        parser.parse_format_string()?;

        Ok(DateFormat { fields: parser.fields })
    }
}


struct FormatParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<Pos>,
    peekee: Option<Option<(Pos, char)>>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> FormatParser<'a> {
        FormatParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
            peekee: None,
        }
    }

    fn next(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(p) => {
                self.peekee = None;
                p
            },
            None => { self.iter.next() },
        }
    }

    fn peek(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(thing) => thing,
            None => {
                self.peekee = Some(self.iter.next());
                self.peek()
            }
        }
    }

    fn collect_up_to_anchor(&mut self, position: Option<Pos>) {
        if let Some(pos) = self.anchor {
            self.anchor = None;
            let text = match position {
                Some(new_pos) => &self.input[pos..new_pos],
                None          => &self.input[pos..],
            };
            self.fields.push(Field::Literal(text));
        }
    }

    fn parse_format_string(&mut self) -> Result<(), FormatError> {
        loop {
            match self.next() {
                Some((new_pos, '{')) => {
                    self.collect_up_to_anchor(Some(new_pos));

                    let field = self.parse_a_thing(new_pos)?;
                    self.fields.push(field);
                },
                Some((new_pos, '}')) => {
                    if let Some((_, '}')) = self.next() {
                        self.collect_up_to_anchor(Some(new_pos));

                        let field = Field::Literal(&self.input[new_pos ..=new_pos]);
                        self.fields.push(field);
                    }
                    else {
                        return Err(FormatError::CloseCurlyBrace { close_pos: new_pos });
                    }
                },
                Some((pos, _)) => {
                    if self.anchor.is_none() {
                        self.anchor = Some(pos);
                    }
                }
                None => break,
            }
        }

        // Finally, collect any literal characters after the last date field
        // that haven't been turned into a Literal field yet.
        self.collect_up_to_anchor(None);
        Ok(())
    }

    // The Literal strings are just slices of the original formatting string,
    // which shares a lifetime with the formatter object, requiring fewer
    // allocations. The parser is clever and combines consecutive literal
    // strings.
    //
    // However, because they're slices, we can't transform them
    // to escape {{ and }} characters. So instead, up to three adjacent
    // Literal fields can be used to serve '{' or '}' characters, including
    // one that's the *first character* of the "{{" part. This means it can
    // still use slices.

    fn parse_number(&mut self, just_parsed_character: char, open_pos: Pos) -> Result<Width, FormatError> {
        let mut buf = just_parsed_character.to_string();

        while let Some((_, n)) = self.peek() {
            if n.is_ascii_digit() {
                buf.push(n);
                let _ = self.next();  // ignore result - it's going to be the same!
            }
            else {
                break;
            }
        }

        buf.parse().map_err(|_| FormatError::WidthTooLarge { open_pos })
    }

    fn parse_a_thing(&mut self, open_pos: Pos) -> Result<Field<'a>, FormatError> {
        let mut args = Arguments::empty();
        let mut bit = None;
        let close_pos;
        let mut first = true;
        let mut long = false;

        loop {
            match self.next() {
                Some((pos, '{')) if first => return Ok(Field::Literal(&self.input[pos ..=pos])),
                Some((_, '<')) => { args.update_alignment(Alignment::Left, open_pos)?; continue },
                Some((_, '^')) => { args.update_alignment(Alignment::Middle, open_pos)?; continue },
                Some((_, '>')) => { args.update_alignment(Alignment::Right, open_pos)?; continue },
                Some((_, '0')) => { args.pad_char = Some('0'); continue },
                Some((_, n)) if n.is_ascii_digit() => { args.update_width(self.parse_number(n, open_pos)?, open_pos)?; continue },
                Some((_, '_')) => { long = true; },
                Some((_, ':')) => {
                    let bitlet = match self.next() {
                        Some((_, 'Y')) => Field::Year(NumArguments(args)),
                        Some((_, 'y')) => Field::YearOfCentury(NumArguments(args)),
                        Some((_, 'M')) => Field::MonthName(long, TextArguments(args)),
                        Some((_, 'D')) => Field::Day(NumArguments(args)),
                        Some((_, 'E')) => Field::WeekdayName(long, TextArguments(args)),
                        Some((_, 'h')) => Field::Hour(NumArguments(args)),
                        Some((_, 'm')) => Field::Minute(NumArguments(args)),
                        Some((_, 's')) => Field::Second(NumArguments(args)),
                        Some((_, 'H')) => Field::Half(TextArguments(args)),
                        Some((_, 'Q')) => Field::Quarter(TextArguments(args)),
                        Some((_, 'd')) => Field::DayOfHalf(NumArguments(args)),
                        Some((_, 'a')) => Field::AmPm(TextArguments(args)),
                        Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: true, pos }),
                        None => return Err(FormatError::OpenCurlyBrace { open_pos }),
                    };

                    bit = Some(bitlet);
                },
                Some((pos, '}')) => { close_pos = pos; break; },
                Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: false, pos }),
                None => return Err(FormatError::OpenCurlyBrace { open_pos }),
            };

            first = false;
        }

        match bit {
            Some(b) => Ok(b),
            None    => Err(FormatError::MissingField { open_pos, close_pos }),
        }
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::{DateFormat, FormatError, Arguments, NumArguments, TextArguments};
    pub(crate) use super::Field::*;
    pub(crate) use pad::Alignment;

    mod parse {
        use super::*;

        macro_rules! test {
            ($name: ident: $input: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(DateFormat::parse($input), $result)
                }
            };
        }

        test!(empty_string: ""                      => Ok(DateFormat { fields: vec![] }));
        test!(entirely_literal: "Date!"             => Ok(DateFormat { fields: vec![ Literal("Date!") ] }));
        test!(single_element: "{:Y}"                => Ok(DateFormat { fields: vec![ Year(NumArguments::empty()) ] }));
        test!(surrounded: "({:D})"                  => Ok(DateFormat { fields: vec![ Literal("("), Day(NumArguments::empty()), Literal(")") ] }));
        test!(half_and_quarter: "{:H}/{:Q}"         => Ok(DateFormat { fields: vec![ Half(TextArguments::empty()), Literal("/"), Quarter(TextArguments::empty()) ] }));
        test!(day_of_half: "{:d}"                   => Ok(DateFormat { fields: vec![ DayOfHalf(NumArguments::empty()) ] }));
        test!(am_pm: "{:h}{:a}"                     => Ok(DateFormat { fields: vec![ Hour(NumArguments::empty()), AmPm(TextArguments::empty()) ] }));

        test!(missing_field: "{}"                              => Err(FormatError::MissingField { open_pos: 0, close_pos: 1 }));
        test!(invalid_char: "{b}"                              => Err(FormatError::InvalidChar { c: 'b', colon: false, pos: 1 }));
        test!(invalid_char_after_colon: "{:7}"                 => Err(FormatError::InvalidChar { c: '7', colon: true, pos: 2 }));
        test!(open_curly_brace: "{"                            => Err(FormatError::OpenCurlyBrace { open_pos: 0 }));
        test!(mystery_close_brace: "}"                         => Err(FormatError::CloseCurlyBrace { close_pos: 0 }));
        test!(huge_width: "{99999999999999999999999:D}"        => Err(FormatError::WidthTooLarge { open_pos: 0 }));

        test!(escaping_open: "{{"  => Ok(DateFormat { fields: vec![ Literal("{") ] }));
        test!(escaping_middle: "The character {{ is my favourite!" => Ok(DateFormat { fields: vec![ Literal("The character "), Literal("{"), Literal(" is my favourite!") ] }));

        mod alignment {
            use super::*;

            test!(left:   "{<:Y}" => Ok(DateFormat { fields: vec![ Year(NumArguments(Arguments::empty().set_alignment(Alignment::Left))) ]}));
            test!(right:  "{>:Y}" => Ok(DateFormat { fields: vec![ Year(NumArguments(Arguments::empty().set_alignment(Alignment::Right))) ]}));
            test!(double_left:  "{<<:Y}" => Err(FormatError::DoubleAlignment { open_pos: 0, current_alignment: Alignment::Left }));
        }

        mod width {
            use super::*;

            test!(width_2: "{>2:D}"         => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_width(2).set_alignment(Alignment::Right))) ] }));
            test!(width_10_other: "{10>:D}" => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_width(10).set_alignment(Alignment::Right))) ] }));
        }
    }

    mod format {
        use super::DateFormat;
        use crate::cal::datetime::{LocalDate, LocalDateTime, LocalTime, Month};
        use crate::error::Error;

        fn english(format: &str, when: &impl crate::temporal::Temporal) -> Result<String, Error> {
            DateFormat::parse(format).unwrap().format(when, &locale::Time::english())
        }

        #[test]
        fn names() {
            let date = LocalDate::ymd(2024, Month::March, 10).unwrap();
            assert_eq!(english("{_:E}, {:M} {>02:D}", &date), Ok("Sunday, Mar 10".to_string()));
        }

        #[test]
        fn halves_and_quarters() {
            let date = LocalDate::ymd(2024, Month::June, 30).unwrap();
            assert_eq!(english("{:Y} {:H} {:Q} {:d}", &date), Ok("2024 H1 Q2 182".to_string()));
        }

        #[test]
        fn times() {
            let when = LocalDateTime::new(LocalDate::ymd(2024, Month::June, 30).unwrap(), LocalTime::hms(15, 4, 9).unwrap());
            assert_eq!(english("{:h}:{>02:m}:{>02:s} {:a}", &when), Ok("15:04:09 PM".to_string()));
        }

        #[test]
        fn missing_fields() {
            let time = LocalTime::hms(15, 4, 9).unwrap();
            assert_eq!(english("{:Y}", &time), Err(Error::UnsupportedField("Year")));
        }
    }
}
