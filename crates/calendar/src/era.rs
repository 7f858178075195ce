//! Epoch offsets and era resolution.

use std::fmt;

use crate::error::CalendarError;
use crate::jdn::Jdn;

/// JDN epoch offset of the Amete Alem ("era of the world") Ethiopic epoch.
pub const JD_EPOCH_OFFSET_AMETE_ALEM: i64 = -285_019;
/// JDN epoch offset of the Amete Mihret ("era of mercy") Ethiopic epoch.
pub const JD_EPOCH_OFFSET_AMETE_MIHRET: i64 = 1_723_856;
/// JDN epoch offset of the Coptic calendar.
pub const JD_EPOCH_OFFSET_COPTIC: i64 = 1_824_665;
/// JDN epoch offset of the proleptic Gregorian calendar.
pub const JD_EPOCH_OFFSET_GREGORIAN: i64 = 1_721_426;
/// Raw offset reported for an unset era.
pub const ERA_UNSET_OFFSET: i64 = -1;

/// First JDN that belongs to year 1 of Amete Mihret.
pub(crate) const AMETE_MIHRET_FIRST_JDN: i64 = JD_EPOCH_OFFSET_AMETE_MIHRET + 365;

/// A calendar epoch, identified by its JDN offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Amete Alem, the pre-Incarnation Ethiopic epoch (ዓ/ዓ).
    AmeteAlem,
    /// Amete Mihret, the modern Ethiopic epoch (ዓ/ም).
    AmeteMihret,
    /// The Coptic epoch (Era of the Martyrs).
    Coptic,
    /// The proleptic Gregorian epoch.
    Gregorian,
}

impl Era {
    /// Returns the JDN epoch offset of this era.
    pub const fn offset(self) -> i64 {
        match self {
            Era::AmeteAlem => JD_EPOCH_OFFSET_AMETE_ALEM,
            Era::AmeteMihret => JD_EPOCH_OFFSET_AMETE_MIHRET,
            Era::Coptic => JD_EPOCH_OFFSET_COPTIC,
            Era::Gregorian => JD_EPOCH_OFFSET_GREGORIAN,
        }
    }

    /// Returns `true` for the two eras an Ethiopic date may be counted in.
    pub const fn is_ethiopic(self) -> bool {
        matches!(self, Era::AmeteAlem | Era::AmeteMihret)
    }

    /// Returns `self` if it is an Ethiopic era.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] for the Coptic and Gregorian eras.
    pub fn ensure_ethiopic(self) -> Result<Self, CalendarError> {
        if self.is_ethiopic() {
            Ok(self)
        } else {
            Err(CalendarError::InvalidEra {
                offset: self.offset(),
            })
        }
    }
}

impl TryFrom<i64> for Era {
    type Error = CalendarError;

    fn try_from(offset: i64) -> Result<Self, Self::Error> {
        match offset {
            JD_EPOCH_OFFSET_AMETE_ALEM => Ok(Era::AmeteAlem),
            JD_EPOCH_OFFSET_AMETE_MIHRET => Ok(Era::AmeteMihret),
            JD_EPOCH_OFFSET_COPTIC => Ok(Era::Coptic),
            JD_EPOCH_OFFSET_GREGORIAN => Ok(Era::Gregorian),
            _ => Err(CalendarError::InvalidEra { offset }),
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Era::AmeteAlem => "Amete Alem",
            Era::AmeteMihret => "Amete Mihret",
            Era::Coptic => "Coptic",
            Era::Gregorian => "Gregorian",
        };
        f.write_str(name)
    }
}

/// Picks the Ethiopic era a JDN should be read in when none was chosen.
///
/// Days from 1 Meskerem 1 Amete Mihret onward are Amete Mihret; anything
/// earlier is Amete Alem.
pub fn guess_era_from_jdn(jdn: Jdn) -> Era {
    if jdn.get() >= AMETE_MIHRET_FIRST_JDN {
        Era::AmeteMihret
    } else {
        Era::AmeteAlem
    }
}

/// Picks the Ethiopic era for an Ethiopic year when none was chosen.
///
/// Years up to and including 0 are read as Amete Alem, positive years as
/// Amete Mihret. This is a convenience default, not a historical rule.
pub fn era_for_ethiopic_year(year: i64) -> Era {
    if year <= 0 {
        Era::AmeteAlem
    } else {
        Era::AmeteMihret
    }
}
