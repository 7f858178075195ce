//! Multi-calendar conversion over explicit inputs.
//!
//! Every conversion goes through a [`Jdn`]. The optional era only matters on
//! the Ethiopic side: Coptic dates are always counted from the Coptic epoch
//! and Gregorian dates from the Gregorian one.
//!
//! Years beyond [`MAX_ABS_YEAR`] and JDNs beyond [`MAX_ABS_JDN`] are rejected
//! with [`CalendarError::OutOfRange`]; inside those bounds the `i64`
//! arithmetic cannot overflow.

use tracing::trace;

use crate::date::{Calendar, CalendarDate, MAX_ABS_YEAR};
use crate::era::{Era, era_for_ethiopic_year, guess_era_from_jdn};
use crate::error::CalendarError;
use crate::ethiopic::{eth_coptic_to_jdn, jdn_to_eth_coptic};
use crate::gregorian::{gregorian_to_jdn, jdn_to_gregorian};
use crate::jdn::{Jdn, MAX_ABS_JDN};

fn check_range(quantity: &'static str, value: i64, limit: i64) -> Result<(), CalendarError> {
    if value.unsigned_abs() > limit.unsigned_abs() {
        return Err(CalendarError::OutOfRange {
            quantity,
            value,
            limit,
        });
    }
    Ok(())
}

/// Computes the JDN of `date` in `calendar`.
///
/// For Ethiopic dates with no `era`, years up to 0 are read as Amete Alem
/// and later years as Amete Mihret.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] if `calendar` is Ethiopic and `era`
/// is neither Amete Alem nor Amete Mihret, and [`CalendarError::OutOfRange`]
/// if the year or the resulting JDN is outside the supported range.
pub fn to_jdn(
    calendar: Calendar,
    date: CalendarDate,
    era: Option<Era>,
) -> Result<Jdn, CalendarError> {
    check_range("year", date.year(), MAX_ABS_YEAR)?;
    let jdn = match calendar {
        Calendar::Ethiopic => {
            let era = match era {
                Some(era) => era.ensure_ethiopic()?,
                None => {
                    let era = era_for_ethiopic_year(date.year());
                    trace!(year = date.year(), %era, "ethiopic era resolved from year");
                    era
                }
            };
            eth_coptic_to_jdn(date, era)
        }
        Calendar::Coptic => eth_coptic_to_jdn(date, Era::Coptic),
        Calendar::Gregorian => gregorian_to_jdn(date),
    };
    check_range("JDN", jdn.get(), MAX_ABS_JDN)?;
    Ok(jdn)
}

/// Computes the date of `jdn` in `calendar`.
///
/// For Ethiopic output with no `era`, the era is guessed from the JDN.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] if `calendar` is Ethiopic and `era`
/// is neither Amete Alem nor Amete Mihret, and [`CalendarError::OutOfRange`]
/// if `jdn` is outside the supported range.
pub fn from_jdn(
    calendar: Calendar,
    jdn: Jdn,
    era: Option<Era>,
) -> Result<CalendarDate, CalendarError> {
    check_range("JDN", jdn.get(), MAX_ABS_JDN)?;
    let date = match calendar {
        Calendar::Ethiopic => {
            let era = match era {
                Some(era) => era.ensure_ethiopic()?,
                None => {
                    let era = guess_era_from_jdn(jdn);
                    trace!(%jdn, %era, "ethiopic era guessed from JDN");
                    era
                }
            };
            jdn_to_eth_coptic(jdn, era)
        }
        Calendar::Coptic => jdn_to_eth_coptic(jdn, Era::Coptic),
        Calendar::Gregorian => jdn_to_gregorian(jdn),
    };
    Ok(date)
}

/// Converts `date` from `source` to `target`.
///
/// `era` applies to whichever side is Ethiopic; see [`to_jdn`] and
/// [`from_jdn`] for what happens without one.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] if an Ethiopic side is given a
/// non-Ethiopic era, and [`CalendarError::OutOfRange`] if the date is too far
/// from the epoch.
///
/// # Examples
///
/// ```
/// use ethcal_calendar::{Calendar, CalendarDate, convert};
///
/// let gc = CalendarDate::new(2015, 9, 12);
/// let et = convert(Calendar::Gregorian, Calendar::Ethiopic, gc, None).unwrap();
/// assert_eq!(et.to_string(), "1/1/2008");
/// ```
pub fn convert(
    source: Calendar,
    target: Calendar,
    date: CalendarDate,
    era: Option<Era>,
) -> Result<CalendarDate, CalendarError> {
    let jdn = to_jdn(source, date, era)?;
    from_jdn(target, jdn, era)
}

/// Converts an Ethiopic date to Gregorian.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] if `era` is not an Ethiopic era.
pub fn ethiopic_to_gregorian(
    date: CalendarDate,
    era: Option<Era>,
) -> Result<CalendarDate, CalendarError> {
    convert(Calendar::Ethiopic, Calendar::Gregorian, date, era)
}

/// Converts a Gregorian date to Ethiopic.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] if `era` is not an Ethiopic era.
pub fn gregorian_to_ethiopic(
    date: CalendarDate,
    era: Option<Era>,
) -> Result<CalendarDate, CalendarError> {
    convert(Calendar::Gregorian, Calendar::Ethiopic, date, era)
}

/// Converts a Coptic date to Gregorian.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the date is too far from the
/// epoch.
pub fn coptic_to_gregorian(date: CalendarDate) -> Result<CalendarDate, CalendarError> {
    convert(Calendar::Coptic, Calendar::Gregorian, date, None)
}

/// Converts a Gregorian date to Coptic.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the date is too far from the
/// epoch.
pub fn gregorian_to_coptic(date: CalendarDate) -> Result<CalendarDate, CalendarError> {
    convert(Calendar::Gregorian, Calendar::Coptic, date, None)
}
