//! Julian Day Number newtype.

use std::fmt;

/// Largest JDN magnitude the conversions accept, a little over three
/// trillion years either side of the epoch.
pub const MAX_ABS_JDN: i64 = 1 << 50;

/// A Julian Day Number: a continuous signed day count shared by every
/// calendar in this crate.
///
/// It carries no calendar meaning of its own; it is the only value passed
/// between the Ethiopic, Coptic and Gregorian formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Jdn(i64);

impl Jdn {
    /// Wraps a raw day number.
    pub const fn new(day: i64) -> Self {
        Self(day)
    }

    /// Returns the raw day number.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the day number `days` later (or earlier, if negative).
    pub const fn add_days(self, days: i64) -> Self {
        Self(self.0 + days)
    }

    /// Returns the following day.
    pub const fn next(self) -> Self {
        self.add_days(1)
    }
}

impl From<i64> for Jdn {
    fn from(day: i64) -> Self {
        Self(day)
    }
}

impl From<Jdn> for i64 {
    fn from(jdn: Jdn) -> Self {
        jdn.0
    }
}

impl fmt::Display for Jdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let jdn = Jdn::new(2451545);
        assert_eq!(jdn.get(), 2451545);
        assert_eq!(i64::from(jdn), 2451545);
        assert_eq!(Jdn::from(2451545), jdn);
    }

    #[test]
    fn add_days_both_directions() {
        let jdn = Jdn::new(10);
        assert_eq!(jdn.add_days(5).get(), 15);
        assert_eq!(jdn.add_days(-15).get(), -5);
        assert_eq!(jdn.next().get(), 11);
    }

    #[test]
    fn ord_trait() {
        assert!(Jdn::new(-1) < Jdn::new(0));
        assert!(Jdn::new(1724221) > Jdn::new(1724220));
    }

    #[test]
    fn display() {
        assert_eq!(Jdn::new(-285019).to_string(), "-285019");
    }
}
