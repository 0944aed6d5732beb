//! Scanning of ISO-8601 style durations, such as `P2W3D` or `-PT4H-30M`.
//!
//! The grammar is always the same shape: an optional sign, a `P`, any
//! number of date components, then a `T` and any number of time
//! components. Which designators may appear, and in what order, depends on
//! the type being parsed, so each type hands over its own `Grammar`.

use crate::error::Error;


/// A letter that ends one component of a duration, such as the `H` in
/// `PT4H`, along with how many of the target unit it stands for.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Designator {
    pub symbol: u8,
    pub multiplier: i32,
}

/// The designators a type accepts, in the order they must appear.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Grammar {
    pub date: &'static [Designator],
    pub time: &'static [Designator],
}

/// The outcome of scanning: whether the whole thing was negated, and each
/// component’s value with its designator.
#[derive(PartialEq, Debug)]
pub(crate) struct Scanned {
    pub negative: bool,
    pub components: Vec<(Designator, i32)>,
}

impl Scanned {

    /// Sums each component times its designator’s multiplier, then applies
    /// the leading sign. Fails on overflow.
    pub fn total(&self) -> Result<i32, Error> {
        use crate::util::{add_exact, mul_exact};

        let mut total = 0_i32;
        for &(designator, value) in &self.components {
            total = add_exact(total, mul_exact(value, designator.multiplier)?)?;
        }

        if self.negative { mul_exact(total, -1) }
                    else { Ok(total) }
    }
}


/// Scans the text against the grammar. Letters are matched regardless of
/// case. The error’s offset is the byte position where scanning stopped.
pub(crate) fn scan(text: &str, grammar: &Grammar) -> Result<Scanned, Error> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-')  => { pos += 1; true },
        Some(b'+')  => { pos += 1; false },
        _           => false,
    };

    if !matches!(bytes.get(pos), Some(b'P') | Some(b'p')) {
        return Err(Error::parse(text, pos));
    }
    pos += 1;

    let mut components = Vec::new();
    scan_section(text, &mut pos, grammar.date, &mut components)?;

    if matches!(bytes.get(pos), Some(b'T') | Some(b't')) {
        pos += 1;
        let before = components.len();
        scan_section(text, &mut pos, grammar.time, &mut components)?;

        if components.len() == before {
            return Err(Error::parse(text, pos));
        }
    }

    if pos != bytes.len() || components.is_empty() {
        return Err(Error::parse(text, pos));
    }

    Ok(Scanned { negative, components })
}

/// Scans numbers and designators until the next thing isn’t a number, the
/// designators being matched in order against the given table.
fn scan_section(text: &str, pos: &mut usize, table: &[Designator], components: &mut Vec<(Designator, i32)>) -> Result<(), Error> {
    let bytes = text.as_bytes();
    let mut next_designator = 0;

    while let Some(&b) = bytes.get(*pos) {
        if !(b.is_ascii_digit() || b == b'+' || b == b'-') {
            break;
        }

        let start = *pos;
        let mut end = start + 1;
        while bytes.get(end).map_or(false, u8::is_ascii_digit) {
            end += 1;
        }

        let value: i32 = match text[start .. end].parse() {
            Ok(value)  => value,
            Err(_)     => return Err(Error::parse(text, start)),
        };

        let letter = bytes.get(end).map(u8::to_ascii_uppercase);
        let found = table.iter().enumerate().skip(next_designator).find(|(_, d)| Some(d.symbol) == letter);

        match found {
            Some((index, designator)) => {
                components.push((*designator, value));
                next_designator = index + 1;
                *pos = end + 1;
            },
            None => return Err(Error::parse(text, end)),
        }
    }

    Ok(())
}
