//! Proleptic Gregorian calendar ↔ JDN.

use crate::arith::{floor_mod, quotient};
use crate::date::CalendarDate;
use crate::era::JD_EPOCH_OFFSET_GREGORIAN;
use crate::jdn::Jdn;

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_100_YEARS: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;
const DAYS_PER_YEAR: i64 = 365;

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Divisible by 4, and either not divisible by 100 or divisible by 400.
pub fn is_gregorian_leap_year(year: i64) -> bool {
    floor_mod(year, 4) == 0 && (floor_mod(year, 100) != 0 || floor_mod(year, 400) == 0)
}

/// Month lengths for `year`, index 0 unused.
fn month_lengths(year: i64) -> [u8; 13] {
    let february = if is_gregorian_leap_year(year) { 29 } else { 28 };
    [0, 31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
}

/// Returns the number of days in `month` of `year`, or `None` if `month` is
/// not in 1..=12.
pub fn gregorian_month_days(year: i64, month: u8) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(month_lengths(year)[month as usize])
}

/// Computes the JDN of a proleptic Gregorian date.
///
/// # Examples
///
/// ```
/// use ethcal_calendar::{CalendarDate, gregorian_to_jdn};
///
/// assert_eq!(gregorian_to_jdn(CalendarDate::new(2000, 1, 1)).get(), 2451545);
/// ```
pub fn gregorian_to_jdn(date: CalendarDate) -> Jdn {
    let (year, month, day) = (date.year(), i64::from(date.month()), i64::from(date.day()));

    // 1 when `year` is a leap year, 0 otherwise.
    let s = quotient(year, 4) - quotient(year - 1, 4) - quotient(year, 100)
        + quotient(year - 1, 100)
        + quotient(year, 400)
        - quotient(year - 1, 400);

    // 1 for January and February, 0 from March on.
    let t = quotient(14 - month, 12);

    let day_of_year = 31 * t * (month - 1)
        + (1 - t) * (59 + s + 30 * (month - 3) + quotient(3 * month - 7, 5))
        + day
        - 1;

    Jdn::new(
        JD_EPOCH_OFFSET_GREGORIAN
            + 365 * (year - 1)
            + quotient(year - 1, 4)
            - quotient(year - 1, 100)
            + quotient(year - 1, 400)
            + day_of_year,
    )
}

/// Computes the proleptic Gregorian date of a JDN.
///
/// # Examples
///
/// ```
/// use ethcal_calendar::{CalendarDate, Jdn, jdn_to_gregorian};
///
/// assert_eq!(jdn_to_gregorian(Jdn::new(2451545)), CalendarDate::new(2000, 1, 1));
/// ```
pub fn jdn_to_gregorian(jdn: Jdn) -> CalendarDate {
    let elapsed = jdn.get() - JD_EPOCH_OFFSET_GREGORIAN;

    let n400 = quotient(elapsed, DAYS_PER_400_YEARS);
    let r400 = floor_mod(elapsed, DAYS_PER_400_YEARS);
    let n100 = quotient(r400, DAYS_PER_100_YEARS);
    let r100 = floor_mod(r400, DAYS_PER_100_YEARS);
    let n4 = quotient(r100, DAYS_PER_4_YEARS);
    let r4 = floor_mod(r100, DAYS_PER_4_YEARS);
    let n1 = quotient(r4, DAYS_PER_YEAR);
    let r1 = floor_mod(r4, DAYS_PER_YEAR);

    let completed_years = 400 * n400 + 100 * n100 + 4 * n4 + n1;

    // The last day of a 400-year cycle overflows into n100 == 4, and the
    // last day of a leap 4-year block into n1 == 4. Both are December 31 of
    // the last completed year.
    if n100 == 4 || n1 == 4 {
        return CalendarDate::new(completed_years, 12, 31);
    }

    let year = completed_years + 1;
    let mut remaining = r1 + 1;
    let lengths = month_lengths(year);
    let mut month = 1u8;
    while month < 12 && remaining > i64::from(lengths[month as usize]) {
        remaining -= i64::from(lengths[month as usize]);
        month += 1;
    }
    // remaining is in 1..=31 here: r1 < 365 never runs past December.
    CalendarDate::new(year, month, remaining as u8)
}
