/// Last year before the Gregorian calendar took effect; only later years are valid
pub const GREGORIAN_ADOPTION_YEAR: i64 = 1582;

/// Number of months in a year
pub const MONTHS_IN_YEAR: u8 = 12;

/// Number of days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in a common (non-leap) year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in one full 400-year Gregorian cycle
pub const DAYS_IN_GREGORIAN_CYCLE: i64 = 146_097;

/// Maximum days in each month (index 0 is January)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed in a common year before each month starts.
/// The trailing entry is the length of the year.
pub const ACCUMULATED_DAYS: [u16; 13] = accumulate(DAYS_IN_MONTH);

const fn accumulate(lengths: [u8; 12]) -> [u16; 13] {
    let mut table = [0u16; 13];
    let mut i = 0;
    while i < lengths.len() {
        table[i + 1] = table[i] + lengths[i] as u16;
        i += 1;
    }
    table
}

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;
/// Weekday shift produced by each century, modulo 7
pub(crate) const CENTURY_WEEKDAY_SHIFT: i64 = 5;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Component separator of the tuple rendering `(YYYY, MM, DD)`
pub const TUPLE_SEPARATOR: char = ',';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
