use crate::consts::{
    ACCUMULATED_DAYS, CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, DAYS_IN_WEEK,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTHS_IN_YEAR,
};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A month of the year, numbered from January = 1 to December = 12.
///
/// Each month knows its length in a common year and how many days of a
/// common year have elapsed before it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Every month in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Looks up a month by its number, January being 1
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MONTHS_IN_YEAR`.
    pub fn from_number(number: u8) -> Result<Self, DateError> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or(DateError::InvalidMonth(number))
    }

    /// Returns the month number (1..=12)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based position of the month in the year
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Length of the month in a common year (February has 28 days)
    #[inline]
    pub const fn length_in_days(self) -> u8 {
        DAYS_IN_MONTH[self.index()]
    }

    /// Days of a common year elapsed before the first of this month
    #[inline]
    pub const fn accumulated_days_before(self) -> u16 {
        ACCUMULATED_DAYS[self.index()]
    }

    /// Length of the month in the given year, counting February 29 in leap years
    pub const fn length_in_year(self, year: i64) -> u8 {
        days_in_month(year, self)
    }

    /// Whether the month comes after the leap day
    #[inline]
    pub const fn is_after_february(self) -> bool {
        self as u8 > Self::February as u8
    }

    /// Moves `months` forward (or backward when negative), wrapping around the year
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn offset(self, months: i64) -> Self {
        let months_in_year = MONTHS_IN_YEAR as usize;
        let shift = months.rem_euclid(MONTHS_IN_YEAR as i64) as usize;
        Self::ALL[(self.index() + shift) % months_in_year]
    }

    /// The following month; December wraps to January
    pub const fn next(self) -> Self {
        self.offset(1)
    }

    /// The preceding month; January wraps to December
    pub const fn previous(self) -> Self {
        self.offset(-1)
    }

    /// English name of the month
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named day of the week, with Sunday as index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Every weekday, starting on Sunday
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Number of days in a week
    pub const DAYS_IN_WEEK: u8 = DAYS_IN_WEEK;

    /// Looks up a weekday by index, Sunday being 0
    ///
    /// # Errors
    /// Returns `DateError::InvalidWeekdayIndex` if the index is > 6.
    pub fn of_index(index: u8) -> Result<Self, DateError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(DateError::InvalidWeekdayIndex(index))
    }

    /// Maps any week offset onto a weekday using a floored modulo
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) const fn from_week_offset(offset: i64) -> Self {
        Self::ALL[offset.rem_euclid(DAYS_IN_WEEK as i64) as usize]
    }

    /// Returns the index of the weekday (0..=6)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The following weekday; Saturday wraps to Sunday
    pub const fn next(self) -> Self {
        Self::from_week_offset(self as i64 + 1)
    }

    /// English name of the weekday
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::of_index(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Helper functions. These apply the Gregorian rule to any year; callers
// outside this crate go through `is_leap_year`, which rejects years before
// the calendar existed.

pub(crate) const fn is_leap(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: i64, month: Month) -> u8 {
    if matches!(month, Month::February) && is_leap(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        month.length_in_days()
    }
}

pub(crate) const fn days_in_year(year: i64) -> u16 {
    if is_leap(year) {
        DAYS_IN_COMMON_YEAR + 1
    } else {
        DAYS_IN_COMMON_YEAR
    }
}
