//! Ethiopic and Coptic calendars ↔ JDN.
//!
//! Both calendars have twelve 30-day months followed by a 5-day epagomenal
//! month (6 days every fourth year). They differ only in the epoch offset,
//! so one pair of formulas serves both.

use crate::arith::{floor_mod, quotient};
use crate::date::CalendarDate;
use crate::era::Era;
use crate::jdn::Jdn;

/// Returns `true` if the 13th month of `year` has 6 days.
///
/// The leap day falls in the year before the one divisible by 4.
pub fn is_ethiopic_leap_year(year: i64) -> bool {
    floor_mod(year, 4) == 3
}

/// Returns the number of days in `month` of `year`, or `None` if `month` is
/// not in 1..=13. Applies to Coptic years as well.
pub fn ethiopic_month_days(year: i64, month: u8) -> Option<u8> {
    match month {
        1..=12 => Some(30),
        13 if is_ethiopic_leap_year(year) => Some(6),
        13 => Some(5),
        _ => None,
    }
}

/// Computes the JDN of an Ethiopic or Coptic date counted from `era`.
///
/// # Examples
///
/// ```
/// use ethcal_calendar::{CalendarDate, Era, eth_coptic_to_jdn};
///
/// let new_year = CalendarDate::new(2008, 1, 1);
/// assert_eq!(eth_coptic_to_jdn(new_year, Era::AmeteMihret).get(), 2457278);
/// ```
pub fn eth_coptic_to_jdn(date: CalendarDate, era: Era) -> Jdn {
    let (year, month, day) = (date.year(), i64::from(date.month()), i64::from(date.day()));
    Jdn::new(
        (era.offset() + 365) + 365 * (year - 1) + quotient(year, 4) + 30 * month + day - 31,
    )
}

/// Computes the Ethiopic or Coptic date of a JDN counted from `era`.
pub fn jdn_to_eth_coptic(jdn: Jdn, era: Era) -> CalendarDate {
    let elapsed = jdn.get() - era.offset();
    let r = floor_mod(elapsed, 1461);
    // Day of year, 0-based. The 1461st day of the cycle stays in year 4.
    let n = floor_mod(r, 365) + 365 * quotient(r, 1460);

    let year = 4 * quotient(elapsed, 1461) + quotient(r, 365) - quotient(r, 1460);
    let month = quotient(n, 30) + 1;
    let day = floor_mod(n, 30) + 1;

    // n < 366, so month <= 13 and day <= 30.
    CalendarDate::new(year, month as u8, day as u8)
}
