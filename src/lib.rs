mod consts;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use range::{DateRange, DateRangeIter, RangeError};
pub use types::{Month, Weekday};

use crate::prelude::*;
use std::str::FromStr;
use types::{days_in_month, days_in_year, is_leap};

/// A validated date in the Gregorian calendar.
///
/// Only years after the calendar's adoption in 1582 are representable. Every
/// instance is checked at construction, and every derived date goes through
/// the same check, so a `GregorianDate` is always canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "({:04}, {:02}, {:02})", year, "month.number()", day)]
pub struct GregorianDate {
    year: i64,
    month: Month,
    day: u8,
}

/// Error type for date construction and date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The day, month and year do not form a Gregorian date.
    #[error("Invalid date: ({year:04}, {month:02}, {day:02})")]
    InvalidDate { year: i64, month: u8, day: u8 },

    #[error("Invalid month: {0} (must be 1-{max})", max = MONTHS_IN_YEAR)]
    InvalidMonth(u8),

    #[error("Invalid weekday index: {0} (must be 0-{max})", max = DAYS_IN_WEEK - 1)]
    InvalidWeekdayIndex(u8),

    /// The leap-year rule is only defined once the calendar is in effect.
    #[error("Invalid year: {0} (must be after {min})", min = GREGORIAN_ADOPTION_YEAR)]
    InvalidYear(i64),

    #[error("Invalid day {ordinal} of year {year}")]
    InvalidYearDay { year: i64, ordinal: u16 },

    #[error("Invalid offset: {0} (must not be negative)")]
    InvalidOffset(i64),

    #[error("Arithmetic overflow in day count")]
    ArithmeticOverflow,

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,
}

/// Returns whether `year` is a Gregorian leap year.
///
/// # Errors
/// Returns `DateError::InvalidYear` for years at or before 1582.
pub fn is_leap_year(year: i64) -> Result<bool, DateError> {
    if year <= GREGORIAN_ADOPTION_YEAR {
        return Err(DateError::InvalidYear(year));
    }
    Ok(is_leap(year))
}

/// Checks whether `(year, month, day)` names a date of the Gregorian calendar
pub const fn is_valid_date(year: i64, month: Month, day: u8) -> bool {
    year > GREGORIAN_ADOPTION_YEAR && day >= MIN_DAY && day <= days_in_month(year, month)
}

fn year_length(year: i64) -> Result<i64, DateError> {
    let leap_day = i64::from(is_leap_year(year)?);
    Ok(i64::from(DAYS_IN_COMMON_YEAR) + leap_day)
}

fn overflow(context: &'static str) -> DateError {
    tracing::debug!(context, "day arithmetic overflowed");
    DateError::ArithmeticOverflow
}

impl GregorianDate {
    /// Creates a date, validating the whole triple
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the day is out of range for the
    /// month or the year is not after 1582.
    pub fn of(year: i64, month: Month, day: u8) -> Result<Self, DateError> {
        if !is_valid_date(year, month, day) {
            tracing::debug!(year, month = month.number(), day, "rejected invalid date");
            return Err(DateError::InvalidDate {
                year,
                month: month.number(),
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from a numeric month (January = 1)
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the month is outside 1-12, otherwise
    /// the same errors as [`GregorianDate::of`].
    pub fn from_numbers(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        Self::of(year, Month::from_number(month)?, day)
    }

    /// Rebuilds a date from its year and 1-based day of the year.
    ///
    /// Scans back from December until the ordinal falls inside a month. The
    /// leap day only shifts months after February.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for years at or before 1582 and
    /// `DateError::InvalidYearDay` if the ordinal is outside the year.
    pub fn from_year_day(year: i64, ordinal: u16) -> Result<Self, DateError> {
        let leap_days = u16::from(is_leap_year(year)?);
        if ordinal < 1 || ordinal > DAYS_IN_COMMON_YEAR + leap_days {
            return Err(DateError::InvalidYearDay { year, ordinal });
        }

        let mut month = Month::December;
        let mut leap = leap_days;
        while ordinal <= month.accumulated_days_before() + leap {
            month = month.previous();
            if !month.is_after_february() {
                leap = 0;
            }
        }

        let day = ordinal - month.accumulated_days_before() - leap;
        let day = u8::try_from(day).map_err(|_| DateError::InvalidYearDay { year, ordinal })?;
        Self::of(year, month, day)
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether the date falls in a leap year
    pub const fn is_leap(&self) -> bool {
        is_leap(self.year)
    }

    /// Number of days in this date's month
    pub const fn month_length(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Number of days in this date's year (365 or 366)
    pub const fn days_in_year(&self) -> u16 {
        days_in_year(self.year)
    }

    /// 1-based position of the date within its year
    pub fn year_day(&self) -> u16 {
        let leap_day = self.month.is_after_february() && is_leap(self.year);
        self.month.accumulated_days_before() + u16::from(self.day) + u16::from(leap_day)
    }

    /// Moves the date by `offset` days, rolling over months and years.
    ///
    /// The year is walked one at a time until the remaining day count fits,
    /// with whole 400-year cycles (always 146 097 days) taken in one stride.
    ///
    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the day count or the year
    /// leaves the `i64` range, and `DateError::InvalidYear` if the result
    /// would fall at or before 1582.
    pub fn add_days(&self, offset: i64) -> Result<Self, DateError> {
        let mut total = i64::from(self.year_day())
            .checked_add(offset)
            .ok_or_else(|| overflow("offset"))?;
        let mut year = self.year;

        if total > DAYS_IN_GREGORIAN_CYCLE {
            let cycles = (total - 1) / DAYS_IN_GREGORIAN_CYCLE;
            year = cycles
                .checked_mul(GREGORIAN_CYCLE)
                .and_then(|years| year.checked_add(years))
                .ok_or_else(|| overflow("year"))?;
            total -= cycles * DAYS_IN_GREGORIAN_CYCLE;
        } else if total <= -DAYS_IN_GREGORIAN_CYCLE {
            let cycles = -total / DAYS_IN_GREGORIAN_CYCLE;
            year = cycles
                .checked_mul(GREGORIAN_CYCLE)
                .and_then(|years| year.checked_sub(years))
                .ok_or_else(|| overflow("year"))?;
            if year <= GREGORIAN_ADOPTION_YEAR {
                return Err(DateError::InvalidYear(GREGORIAN_ADOPTION_YEAR));
            }
            total += cycles * DAYS_IN_GREGORIAN_CYCLE;
        }

        while total > year_length(year)? {
            total -= year_length(year)?;
            year = year.checked_add(1).ok_or_else(|| overflow("year"))?;
        }
        while total <= 0 {
            year = year.checked_sub(1).ok_or_else(|| overflow("year"))?;
            total += year_length(year)?;
        }

        let ordinal = u16::try_from(total).map_err(|_| overflow("ordinal"))?;
        tracing::trace!(year, ordinal, offset, "resolved day offset");
        Self::from_year_day(year, ordinal)
    }

    /// The following day
    ///
    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` past the last representable year.
    pub fn next_day(&self) -> Result<Self, DateError> {
        self.add_days(1)
    }

    /// Moves forward by a non-negative number of days
    ///
    /// # Errors
    /// Returns `DateError::InvalidOffset` for a negative offset, otherwise the
    /// errors of [`GregorianDate::add_days`].
    pub fn future_date(&self, offset: i64) -> Result<Self, DateError> {
        Self::check_offset(offset)?;
        self.add_days(offset)
    }

    /// Moves backward by a non-negative number of days
    ///
    /// # Errors
    /// Returns `DateError::InvalidOffset` for a negative offset, otherwise the
    /// errors of [`GregorianDate::add_days`].
    pub fn past_date(&self, offset: i64) -> Result<Self, DateError> {
        Self::check_offset(offset)?;
        self.add_days(-offset)
    }

    fn check_offset(offset: i64) -> Result<(), DateError> {
        if offset < 0 {
            return Err(DateError::InvalidOffset(offset));
        }
        Ok(())
    }

    /// Day of the week, computed with Gauss's method.
    ///
    /// January and February count as part of the previous year so the leap
    /// day lands at the end of the counted year.
    pub fn day_of_week(&self) -> Weekday {
        let year = if self.month.is_after_february() {
            self.year
        } else {
            self.year - 1
        };
        let century = year.div_euclid(CENTURY_CYCLE);
        let century_offset = CENTURY_WEEKDAY_SHIFT * century.rem_euclid(LEAP_YEAR_CYCLE);
        let year_remainder = year.rem_euclid(CENTURY_CYCLE);
        let year_remainder_offset = year_remainder + year_remainder.div_euclid(LEAP_YEAR_CYCLE);
        let month_offset = i64::from(self.month.accumulated_days_before())
            - i64::from(self.month.is_after_february());

        Weekday::from_week_offset(
            i64::from(self.day) + century_offset + month_offset + year_remainder_offset,
        )
    }

    /// Days elapsed since the year-zero epoch, counting this date
    ///
    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the count does not fit in `i64`.
    pub fn days_since_epoch(&self) -> Result<i64, DateError> {
        let positive = i64::from(self.year > 0);
        let elapsed = self.year - positive;
        let leap_days = elapsed.div_euclid(LEAP_YEAR_CYCLE) - elapsed.div_euclid(CENTURY_CYCLE)
            + elapsed.div_euclid(GREGORIAN_CYCLE);
        let epoch_year = positive * (i64::from(DAYS_IN_COMMON_YEAR) + 1);

        elapsed
            .checked_mul(i64::from(DAYS_IN_COMMON_YEAR))
            .and_then(|days| days.checked_add(epoch_year))
            .and_then(|days| days.checked_add(leap_days))
            .and_then(|days| days.checked_add(i64::from(self.year_day())))
            .ok_or_else(|| overflow("epoch days"))
    }

    /// Absolute number of days between two dates
    ///
    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if either day count overflows.
    pub fn days_between(&self, other: &Self) -> Result<u64, DateError> {
        Ok(other.days_since_epoch()?.abs_diff(self.days_since_epoch()?))
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Tuple rendering: (YYYY, MM, DD)
        if let Some(inner) = trimmed.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
            return Self::parse_components(inner, TUPLE_SEPARATOR);
        }

        // ISO format: YYYY-MM-DD
        if trimmed.contains(DATE_SEPARATOR) {
            return Self::parse_components(trimmed, DATE_SEPARATOR);
        }

        Err(DateError::InvalidFormat(trimmed.to_owned()))
    }
}

impl GregorianDate {
    fn parse_components(s: &str, separator: char) -> Result<Self, DateError> {
        let parts: Vec<&str> = s.split(separator).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected 3 components separated by '{separator}', found {}",
                parts.len()
            )));
        };

        let year = year
            .parse::<i64>()
            .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;

        Self::from_numbers(year, month, day)
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(i64, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from(value: (i64, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_numbers(value.0, value.1, value.2)
    }
}

impl From<GregorianDate> for (i64, u8, u8) {
    fn from(date: GregorianDate) -> Self {
        (date.year, date.month.number(), date.day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
