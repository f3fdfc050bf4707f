//! A signed 64-bit count of time units since 2000-01-01T00:00:00 UTC, tagged
//! with the unit it is counted in, plus calendar fields derived by plain
//! arithmetic.

mod error;
mod precision;

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub use error::{Error, Result};
pub use precision::Precision;

/// Seconds between the Unix epoch and the timestamp epoch.
pub const UNIX_EPOCH_OFFSET: i64 = 946_080_000;

/// Calendar year in which a zero-valued timestamp falls.
pub const EPOCH_YEAR: i64 = 2000;

/// Seconds in one calendar day; leap seconds are not counted.
pub const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

// The Gregorian calendar repeats every 400 years.
const YEARS_PER_CYCLE: i64 = 400;
const DAYS_PER_CYCLE: i64 = 146_097;

// 0 = Sunday
const EPOCH_WEEKDAY: u8 = 6;

const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_year(year: i64) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// `month` is 1-based and must be in 1..=12.
fn days_in_month(year: i64, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[month as usize - 1]
    }
}

/// Splits whole seconds since the epoch into (year, month, day). Whole 400-year
/// cycles are skipped first, then the remaining days are peeled off one year,
/// then one month, at a time, so the walk takes at most ~400 steps.
///
/// Only defined for `secs >= 0`; negative input yields unspecified fields.
fn seconds_to_date(secs: i64) -> (i64, u8, u8) {
    let mut days = secs / SECS_PER_DAY;

    let cycles = days / DAYS_PER_CYCLE;
    days -= cycles * DAYS_PER_CYCLE;
    let mut year = EPOCH_YEAR + cycles * YEARS_PER_CYCLE;
    while days >= days_in_year(year) {
        days -= days_in_year(year);
        year += 1;
    }

    let mut month = 1u8;
    while month < 12 && days >= i64::from(days_in_month(year, month)) {
        days -= i64::from(days_in_month(year, month));
        month += 1;
    }

    (year, month, (days + 1) as u8)
}

fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    let preceding: u16 = (1..month)
        .map(|m| u16::from(days_in_month(year, m)))
        .sum();
    preceding + u16::from(day)
}

/// Weekday of January 1st, found by stepping from the target year back down
/// to the epoch year. Each year stepped over advances the weekday by two when
/// that year is a leap year and by one otherwise.
///
/// A full 400-year cycle advances the weekday by 497, a multiple of 7, so only
/// the years past the last whole cycle are stepped over.
fn first_weekday_of_year(year: i64) -> u8 {
    let mut weekday = EPOCH_WEEKDAY;
    let mut y = EPOCH_YEAR + (year - EPOCH_YEAR) % YEARS_PER_CYCLE;
    while y > EPOCH_YEAR {
        let step = if is_leap_year(y) { 2 } else { 1 };
        weekday = (weekday + step) % 7;
        y -= 1;
    }
    weekday
}

/// Counts how many 7-day steps it takes to bring `day_of_year` down to
/// `first_full_week` or below.
fn week_number(day_of_year: u16, first_full_week: i32) -> u8 {
    let mut days = i32::from(day_of_year);
    let mut week = 0u8;
    while days > first_full_week {
        days -= 7;
        week += 1;
    }
    week
}

/// A point in time: `value` units of `precision` since 2000-01-01T00:00:00 UTC.
///
/// Equality is structural, so `1 s` and `1000 ms` compare unequal. Convert both
/// sides with [`Timestamp::to_precision`] first when comparing across units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    value: i64,
    precision: Precision,
}

impl Timestamp {
    pub const fn new(value: i64, precision: Precision) -> Self {
        Self { value, precision }
    }

    /// Whole seconds since the epoch.
    pub const fn from_secs(value: i64) -> Self {
        Self::new(value, Precision::Seconds)
    }

    /// Builds a timestamp whose precision is given by name (`"ms"`, `"nanoseconds"`, ...).
    pub fn with_precision_name(value: i64, precision: &str) -> Result<Self> {
        Ok(Self::new(value, precision.parse()?))
    }

    /// Returns the current UTC instant from the system clock.
    pub fn now(precision: Precision) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let nanos = i64::try_from(nanos).unwrap_or(i64::MAX);
        Self::from_unix_time_as(nanos, Precision::Nanoseconds, precision)
    }

    pub const fn value(&self) -> i64 {
        self.value
    }

    pub const fn precision(&self) -> Precision {
        self.precision
    }

    // --- Precision scaling ---

    /// This instant counted in `precision` units. Coarser units truncate toward zero.
    pub const fn value_in(&self, precision: Precision) -> i64 {
        Precision::convert(self.value, self.precision, precision)
    }

    pub const fn seconds(&self) -> i64 {
        self.value_in(Precision::Seconds)
    }

    pub const fn milliseconds(&self) -> i64 {
        self.value_in(Precision::Milliseconds)
    }

    pub const fn microseconds(&self) -> i64 {
        self.value_in(Precision::Microseconds)
    }

    pub const fn nanoseconds(&self) -> i64 {
        self.value_in(Precision::Nanoseconds)
    }

    /// Returns a copy re-expressed in `precision`. Lossy when `precision` is coarser.
    pub const fn to_precision(self, precision: Precision) -> Self {
        Self::new(self.value_in(precision), precision)
    }

    /// Re-expresses this timestamp in `precision` in place and returns it for chaining.
    ///
    /// This is the only operation that mutates a `Timestamp`. It takes
    /// `&mut self`, so the borrow checker rules out unsynchronized calls on
    /// the same value from several threads.
    pub fn change_precision(&mut self, precision: Precision) -> &mut Self {
        tracing::trace!(
            from = %self.precision,
            to = %precision,
            value = self.value,
            "changing timestamp precision"
        );
        *self = self.to_precision(precision);
        self
    }

    /// Like [`Timestamp::change_precision`], with the precision given by name.
    /// On error the timestamp is left untouched.
    pub fn change_precision_named(&mut self, precision: &str) -> Result<&mut Self> {
        Ok(self.change_precision(precision.parse()?))
    }

    // --- Unix epoch translation ---

    /// Converts whole seconds since 1970-01-01 into a seconds-precision timestamp.
    pub const fn from_unix_secs(value: i64) -> Self {
        Self::from_secs(value.wrapping_sub(UNIX_EPOCH_OFFSET))
    }

    /// Converts whole seconds since 1970-01-01 into a timestamp counted in `precision`.
    pub const fn from_unix_time(value: i64, precision: Precision) -> Self {
        Self::from_unix_time_as(value, Precision::Seconds, precision)
    }

    /// Converts `value` units of `input_precision` since 1970-01-01 into a
    /// timestamp counted in `precision`.
    pub const fn from_unix_time_as(
        value: i64,
        input_precision: Precision,
        precision: Precision,
    ) -> Self {
        let offset = UNIX_EPOCH_OFFSET * input_precision.units_per_second();
        Self::new(value.wrapping_sub(offset), input_precision).to_precision(precision)
    }

    /// [`Timestamp::from_unix_time_as`] with both precisions given by name.
    pub fn from_unix_time_named(
        value: i64,
        precision: &str,
        input_precision: &str,
    ) -> Result<Self> {
        let precision = precision.parse()?;
        let input_precision = input_precision.parse()?;
        Ok(Self::from_unix_time_as(value, input_precision, precision))
    }

    /// Whole seconds since 1970-01-01.
    pub const fn to_unix_secs(&self) -> i64 {
        self.to_unix_time(Precision::Seconds)
    }

    /// Units of `precision` since 1970-01-01. Wraps on 64-bit overflow.
    pub const fn to_unix_time(&self, precision: Precision) -> i64 {
        let offset = UNIX_EPOCH_OFFSET * precision.units_per_second();
        self.value_in(precision).wrapping_add(offset)
    }

    /// [`Timestamp::to_unix_time`] with the precision given by name.
    pub fn to_unix_time_named(&self, precision: &str) -> Result<i64> {
        Ok(self.to_unix_time(precision.parse()?))
    }

    /// Milliseconds since 1970-01-01, the convention used by most runtime clocks.
    pub const fn to_platform_millis(&self) -> i64 {
        self.to_unix_time(Precision::Milliseconds)
    }

    // --- Calendar fields ---
    //
    // Each accessor redoes the year/month walk. Call `date()` once when several
    // of year, month and day are needed together. The year is an i64, so every
    // non-negative value decomposes without overflow; whole 400-year cycles are
    // skipped, leaving at most ~400 year steps even at i64::MAX seconds.
    // The walk assumes a non-negative value; fields for instants before the
    // epoch are unspecified.

    /// Returns `(year, month, day)` with month and day 1-based.
    pub fn date(&self) -> (i64, u8, u8) {
        seconds_to_date(self.seconds())
    }

    pub fn year(&self) -> i64 {
        self.date().0
    }

    /// Year within its century, e.g. 24 for 2024.
    pub fn year_two_digit(&self) -> i64 {
        self.year() % 100
    }

    pub fn month(&self) -> u8 {
        self.date().1
    }

    pub fn day(&self) -> u8 {
        self.date().2
    }

    /// 1-based ordinal day within the year (1..=366). February counts 29 days
    /// in leap years, so December 31st of a leap year is day 366.
    pub fn day_of_year(&self) -> u16 {
        let (year, month, day) = self.date();
        day_of_year(year, month, day)
    }

    /// Hour on a 24-hour clock (0..=23).
    pub fn hour(&self) -> u8 {
        (self.seconds().rem_euclid(SECS_PER_DAY) / SECS_PER_HOUR) as u8
    }

    /// Hour on a 12-hour clock: midnight and noon both read 12.
    pub fn hour12(&self) -> u8 {
        match self.hour() {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        }
    }

    pub fn minute(&self) -> u8 {
        (self.seconds().rem_euclid(SECS_PER_HOUR) / SECS_PER_MINUTE) as u8
    }

    pub fn second(&self) -> u8 {
        self.seconds().rem_euclid(SECS_PER_MINUTE) as u8
    }

    /// Milliseconds past the whole second (0..=999).
    pub fn millisecond(&self) -> u16 {
        self.milliseconds().rem_euclid(1_000) as u16
    }

    /// Microseconds past the whole millisecond (0..=999).
    pub fn microsecond(&self) -> u16 {
        self.microseconds().rem_euclid(1_000) as u16
    }

    /// Nanoseconds past the whole microsecond (0..=999).
    pub fn nanosecond(&self) -> u16 {
        self.nanoseconds().rem_euclid(1_000) as u16
    }

    /// Weekday index of January 1st plus `day_of_year() % 7`.
    ///
    /// The sum is not reduced modulo 7 and ranges over 0..=12. Only the
    /// January 1st term uses the 0 = Sunday numbering.
    pub fn weekday(&self) -> u8 {
        let (year, month, day) = self.date();
        first_weekday_of_year(year) + (day_of_year(year, month, day) % 7) as u8
    }

    /// Week of the year with Sunday as the first day of the week. Days before
    /// the first full week fall in week 0.
    pub fn week_of_year_sunday(&self) -> u8 {
        let (year, month, day) = self.date();
        let first_full_week = 7 - i32::from(first_weekday_of_year(year));
        week_number(day_of_year(year, month, day), first_full_week)
    }

    /// Week of the year with Monday as the first day of the week. Days before
    /// the first full week fall in week 0.
    pub fn week_of_year_monday(&self) -> u8 {
        let (year, month, day) = self.date();
        let first_full_week = 8 - i32::from(first_weekday_of_year(year));
        week_number(day_of_year(year, month, day), first_full_week)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.precision)
    }
}
