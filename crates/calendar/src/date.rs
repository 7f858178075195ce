//! Calendar identifiers and the `(year, month, day)` date triple.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;


/// Largest year magnitude accepted when computing a JDN. Every JDN within
/// [`MAX_ABS_JDN`](crate::MAX_ABS_JDN) maps to a year below it.
pub const MAX_ABS_YEAR: i64 = 1 << 42;

/// One of the calendars this crate converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    /// Ethiopic calendar, counted in Amete Alem or Amete Mihret.
    Ethiopic,
    /// Coptic calendar. Same structure as the Ethiopic one, different epoch.
    Coptic,
    /// Proleptic Gregorian calendar.
    Gregorian,
}

impl Calendar {
    /// Returns `true` for the Ethiopic calendar, the only one with a
    /// choosable era.
    pub const fn is_ethiopic(self) -> bool {
        matches!(self, Calendar::Ethiopic)
    }

    /// Returns the number of months in a year (13 or 12).
    pub const fn months_in_year(self) -> u8 {
        match self {
            Calendar::Ethiopic | Calendar::Coptic => 13,
            Calendar::Gregorian => 12,
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Calendar::Ethiopic => "Ethiopic",
            Calendar::Coptic => "Coptic",
            Calendar::Gregorian => "Gregorian",
        };
        f.write_str(name)
    }
}

/// A `(year, month, day)` triple in some calendar.
///
/// The triple itself is not range-checked: which calendar it belongs to is
/// decided by the function it is passed to, and out-of-range months or days
/// simply land on whatever day the arithmetic produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i64,
    month: u8,
    day: u8,
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl CalendarDate {
    /// Creates a date from year, month and day.
    pub const fn new(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub const fn year(self) -> i64 {
        self.year
    }

    /// Returns the month.
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)` as a tuple.
    pub const fn ymd(self) -> (i64, u8, u8) {
        (self.year, self.month, self.day)
    }
}

impl From<(i64, u8, u8)> for CalendarDate {
    fn from((year, month, day): (i64, u8, u8)) -> Self {
        Self::new(year, month, day)
    }
}

/// Formats as `day/month/year`, the inverse of [`FromStr`].
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Parses `day/month/year`.
///
/// Exactly three `/`-separated integers are required; whitespace around
/// each component is ignored.
///
/// # Examples
///
/// ```
/// use ethcal_calendar::CalendarDate;
///
/// let date: CalendarDate = "1/1/2008".parse().unwrap();
/// assert_eq!(date.ymd(), (2008, 1, 1));
/// assert_eq!(date.to_string(), "1/1/2008");
/// ```
impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| CalendarError::MalformedInput {
            input: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.trim().split('/').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(malformed(format!(
                "expected 3 components, found {}",
                parts.len()
            )));
        }

        let day: u8 = parts[0]
            .parse()
            .map_err(|e| malformed(format!("day {:?}: {e}", parts[0])))?;
        let month: u8 = parts[1]
            .parse()
            .map_err(|e| malformed(format!("month {:?}: {e}", parts[1])))?;
        let year: i64 = parts[2]
            .parse()
            .map_err(|e| malformed(format!("year {:?}: {e}", parts[2])))?;

        Ok(Self::new(year, month, day))
    }
}
