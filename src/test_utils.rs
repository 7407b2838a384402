//! Construction helpers shared by the unit tests.

use crate::{GregorianDate, Month};

/// Builds a date from numeric components, panicking on invalid input
pub fn date(year: i64, month: u8, day: u8) -> GregorianDate {
    GregorianDate::from_numbers(year, month, day)
        .unwrap_or_else(|err| panic!("test date ({year}, {month}, {day}) is invalid: {err}"))
}

/// Builds a date from a named month, panicking on invalid input
pub fn ymd(year: i64, month: Month, day: u8) -> GregorianDate {
    GregorianDate::of(year, month, day)
        .unwrap_or_else(|err| panic!("test date ({year}, {month}, {day}) is invalid: {err}"))
}
