//! Stateful conversion wrapper holding a session date and era.
//!
//! The free functions in [`crate::conversion`] are the primary API. [`Engine`]
//! adds a current date and a current Ethiopic era for callers that want to
//! set them once and convert repeatedly.

use std::ops::Deref;

use tracing::{debug, trace};

use crate::conversion;
use crate::date::{Calendar, CalendarDate};
use crate::era::{ERA_UNSET_OFFSET, Era};
use crate::error::CalendarError;
use crate::jdn::Jdn;

/// The mutable part of an [`Engine`].
///
/// `era` is either `None` or one of the two Ethiopic eras.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Current date, if set.
    pub date: Option<CalendarDate>,
    /// Current Ethiopic era, if set.
    pub era: Option<Era>,
}

/// Conversion engine with a session date and era.
///
/// # Example
///
/// ```
/// use ethcal_calendar::{CalendarDate, Engine, Era};
///
/// let mut engine = Engine::new();
/// engine.set_date(CalendarDate::new(2008, 1, 1));
/// engine.set_era(Era::AmeteMihret).unwrap();
///
/// let gc = engine.ethiopic_to_gregorian().unwrap();
/// assert_eq!(gc, CalendarDate::new(2015, 9, 12));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: SessionState,
}

impl Engine {
    /// Creates an engine with no date and no era set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given date set and no era.
    pub fn with_date(date: CalendarDate) -> Self {
        Self {
            state: SessionState {
                date: Some(date),
                era: None,
            },
        }
    }

    /// Returns a copy of the session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    // ---------------------------------------------------------------------
    // Session accessors
    // ---------------------------------------------------------------------

    /// Sets the session date.
    pub fn set_date(&mut self, date: CalendarDate) {
        self.state.date = Some(date);
    }

    /// Sets the session date and era together.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] if `era` is not an Ethiopic era.
    /// Neither the date nor the era is changed in that case.
    pub fn set_date_in_era(&mut self, date: CalendarDate, era: Era) -> Result<(), CalendarError> {
        self.set_era(era)?;
        self.set_date(date);
        Ok(())
    }

    /// Returns the session date, if set.
    pub fn get_date(&self) -> Option<CalendarDate> {
        self.state.date
    }

    /// Returns `true` if a session date is set.
    pub fn is_date_set(&self) -> bool {
        self.state.date.is_some()
    }

    /// Clears the session date. The era is left as is.
    pub fn unset_date(&mut self) {
        self.state.date = None;
    }

    /// Sets the session era.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] unless `era` is Amete Alem or
    /// Amete Mihret; the previous era is kept.
    pub fn set_era(&mut self, era: Era) -> Result<(), CalendarError> {
        let era = era.ensure_ethiopic()?;
        trace!(%era, "session era set");
        self.state.era = Some(era);
        Ok(())
    }

    /// Sets the session era from a raw epoch offset.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] unless `offset` is the Amete
    /// Alem or Amete Mihret offset; the previous era is kept.
    pub fn set_era_offset(&mut self, offset: i64) -> Result<(), CalendarError> {
        self.set_era(Era::try_from(offset)?)
    }

    /// Returns the session era, if set.
    pub fn get_era(&self) -> Option<Era> {
        self.state.era
    }

    /// Returns the session era's epoch offset, or [`ERA_UNSET_OFFSET`].
    pub fn era_offset(&self) -> i64 {
        self.state.era.map_or(ERA_UNSET_OFFSET, Era::offset)
    }

    /// Returns `true` if a session era is set.
    pub fn is_era_set(&self) -> bool {
        self.state.era.is_some()
    }

    /// Clears the session era.
    pub fn unset_era(&mut self) {
        if self.state.era.take().is_some() {
            trace!("session era cleared");
        }
    }

    /// Clears both the session date and era.
    pub fn reset(&mut self) {
        self.unset_era();
        self.unset_date();
    }

    fn current_date(&self) -> Result<CalendarDate, CalendarError> {
        self.state.date.ok_or(CalendarError::UnsetDate)
    }

    // ---------------------------------------------------------------------
    // JDN primitives
    // ---------------------------------------------------------------------

    /// Computes the JDN of `date`.
    ///
    /// A missing Ethiopic `era` falls back to the session era, then to the
    /// year-sign default.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] for a non-Ethiopic era on an
    /// Ethiopic date.
    pub fn to_jdn(
        &self,
        calendar: Calendar,
        date: CalendarDate,
        era: Option<Era>,
    ) -> Result<Jdn, CalendarError> {
        conversion::to_jdn(calendar, date, era.or(self.state.era))
    }

    /// Computes the JDN of the session date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsetDate`] if no date is set.
    pub fn current_to_jdn(&self, calendar: Calendar) -> Result<Jdn, CalendarError> {
        self.to_jdn(calendar, self.current_date()?, None)
    }

    /// Computes the date of `jdn`.
    ///
    /// A missing Ethiopic `era` falls back to the session era, then to a
    /// guess from the JDN.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] for a non-Ethiopic era on
    /// Ethiopic output.
    pub fn from_jdn(
        &self,
        calendar: Calendar,
        jdn: Jdn,
        era: Option<Era>,
    ) -> Result<CalendarDate, CalendarError> {
        conversion::from_jdn(calendar, jdn, era.or(self.state.era))
    }

    // ---------------------------------------------------------------------
    // Generic call shapes
    // ---------------------------------------------------------------------

    /// Converts the session date from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsetDate`] if no date is set.
    pub fn convert(&self, source: Calendar, target: Calendar) -> Result<CalendarDate, CalendarError> {
        self.convert_date(source, target, self.current_date()?)
    }

    /// Converts `date` from `source` to `target`.
    ///
    /// An Ethiopic source is read in the session era when one is set, and
    /// otherwise by the sign of its year. An Ethiopic target always takes
    /// its era from the resulting JDN.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying [`conversion::to_jdn`] or
    /// [`conversion::from_jdn`] call. The session era is always Ethiopic, so
    /// none is expected.
    pub fn convert_date(
        &self,
        source: Calendar,
        target: Calendar,
        date: CalendarDate,
    ) -> Result<CalendarDate, CalendarError> {
        let source_era = if source.is_ethiopic() {
            self.state.era
        } else {
            None
        };
        let jdn = conversion::to_jdn(source, date, source_era)?;
        let result = conversion::from_jdn(target, jdn, None)?;
        debug!(%source, %target, input = %date, output = %result, "converted");
        Ok(result)
    }

    /// Converts `date` from `source` to `target` with `era` in force for the
    /// duration of the call.
    ///
    /// The session era is unset afterwards, whatever the outcome. When
    /// neither side is Ethiopic the era plays no part and is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] if an Ethiopic side is involved
    /// and `era` is not an Ethiopic era. The session era is unchanged then.
    pub fn convert_in_era(
        &mut self,
        source: Calendar,
        target: Calendar,
        date: CalendarDate,
        era: Era,
    ) -> Result<CalendarDate, CalendarError> {
        if !source.is_ethiopic() && !target.is_ethiopic() {
            return self.convert_date(source, target, date);
        }
        let scope = self.scoped_era(era)?;
        scope.convert_scoped(source, target, date)
    }

    /// Converts the session date from `source` to `target` with `era` in
    /// force for the duration of the call.
    ///
    /// The session era is unset afterwards, also when the conversion fails
    /// because no date is set.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] for a non-Ethiopic era when an
    /// Ethiopic side is involved, or [`CalendarError::UnsetDate`] if no date
    /// is set.
    pub fn convert_current_in_era(
        &mut self,
        source: Calendar,
        target: Calendar,
        era: Era,
    ) -> Result<CalendarDate, CalendarError> {
        if !source.is_ethiopic() && !target.is_ethiopic() {
            return self.convert(source, target);
        }
        let scope = self.scoped_era(era)?;
        let date = scope.current_date()?;
        scope.convert_scoped(source, target, date)
    }

    /// Sets `era` and returns a guard that unsets it when dropped.
    fn scoped_era(&mut self, era: Era) -> Result<EraScope<'_>, CalendarError> {
        self.set_era(era)?;
        Ok(EraScope { engine: self })
    }

    /// Converts with the session era applied to whichever side is Ethiopic.
    fn convert_scoped(
        &self,
        source: Calendar,
        target: Calendar,
        date: CalendarDate,
    ) -> Result<CalendarDate, CalendarError> {
        conversion::convert(source, target, date, self.state.era)
    }

    // ---------------------------------------------------------------------
    // Named pairs
    // ---------------------------------------------------------------------

    /// Converts the session date from Ethiopic to Gregorian.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsetDate`] if no date is set.
    pub fn ethiopic_to_gregorian(&self) -> Result<CalendarDate, CalendarError> {
        self.convert(Calendar::Ethiopic, Calendar::Gregorian)
    }

    /// Converts an Ethiopic date to Gregorian.
    ///
    /// # Errors
    ///
    /// See [`Engine::convert_date`].
    pub fn ethiopic_to_gregorian_date(
        &self,
        date: CalendarDate,
    ) -> Result<CalendarDate, CalendarError> {
        self.convert_date(Calendar::Ethiopic, Calendar::Gregorian, date)
    }

    /// Converts an Ethiopic date counted in `era` to Gregorian.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] if `era` is not Ethiopic.
    pub fn ethiopic_to_gregorian_in_era(
        &mut self,
        date: CalendarDate,
        era: Era,
    ) -> Result<CalendarDate, CalendarError> {
        self.convert_in_era(Calendar::Ethiopic, Calendar::Gregorian, date, era)
    }

    /// Converts the session date from Gregorian to Ethiopic.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsetDate`] if no date is set.
    pub fn gregorian_to_ethiopic(&self) -> Result<CalendarDate, CalendarError> {
        self.convert(Calendar::Gregorian, Calendar::Ethiopic)
    }

    /// Converts a Gregorian date to Ethiopic, guessing the era from the day.
    ///
    /// # Errors
    ///
    /// See [`Engine::convert_date`].
    pub fn gregorian_to_ethiopic_date(
        &self,
        date: CalendarDate,
    ) -> Result<CalendarDate, CalendarError> {
        self.convert_date(Calendar::Gregorian, Calendar::Ethiopic, date)
    }

    /// Converts a Gregorian date to an Ethiopic date counted in `era`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] if `era` is not Ethiopic.
    pub fn gregorian_to_ethiopic_in_era(
        &mut self,
        date: CalendarDate,
        era: Era,
    ) -> Result<CalendarDate, CalendarError> {
        self.convert_in_era(Calendar::Gregorian, Calendar::Ethiopic, date, era)
    }

    /// Converts the session date from Coptic to Gregorian.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsetDate`] if no date is set.
    pub fn coptic_to_gregorian(&self) -> Result<CalendarDate, CalendarError> {
        self.convert(Calendar::Coptic, Calendar::Gregorian)
    }

    /// Converts a Coptic date to Gregorian.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the date is too far from the
    /// epoch.
    pub fn coptic_to_gregorian_date(
        &self,
        date: CalendarDate,
    ) -> Result<CalendarDate, CalendarError> {
        conversion::coptic_to_gregorian(date)
    }

    /// Converts the session date from Gregorian to Coptic.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsetDate`] if no date is set.
    pub fn gregorian_to_coptic(&self) -> Result<CalendarDate, CalendarError> {
        self.convert(Calendar::Gregorian, Calendar::Coptic)
    }

    /// Converts a Gregorian date to Coptic.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the date is too far from the
    /// epoch.
    pub fn gregorian_to_coptic_date(
        &self,
        date: CalendarDate,
    ) -> Result<CalendarDate, CalendarError> {
        conversion::gregorian_to_coptic(date)
    }
}

/// Keeps an era set on an [`Engine`] until dropped.
struct EraScope<'a> {
    engine: &'a mut Engine,
}

impl Deref for EraScope<'_> {
    type Target = Engine;

    fn deref(&self) -> &Engine {
        self.engine
    }
}

impl Drop for EraScope<'_> {
    fn drop(&mut self) {
        self.engine.unset_era();
    }
}
