//! Error types for the ethcal-calendar crate.

/// Error type for all fallible operations in the ethcal-calendar crate.
///
/// Each variant is a caller error, never a transient condition, so nothing in
/// the crate retries on failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when an era other than Amete Alem or Amete Mihret is used
    /// where an Ethiopic era is required, or when a raw offset matches no era.
    #[error(
        "unknown era offset {offset}: must be Amete Alem (-285019) or Amete Mihret (1723856)"
    )]
    InvalidEra {
        /// The rejected epoch offset.
        offset: i64,
    },

    /// Returned when an operation on the session date runs before a date
    /// has been set.
    #[error("unset date")]
    UnsetDate,

    /// Returned when a year or JDN lies outside the range the conversion
    /// arithmetic supports.
    #[error("{quantity} {value} is outside the supported range -{limit}..={limit}")]
    OutOfRange {
        /// What was out of range: `"year"` or `"JDN"`.
        quantity: &'static str,
        /// The rejected value.
        value: i64,
        /// The largest accepted magnitude.
        limit: i64,
    },

    /// Returned when a `day/month/year` string does not hold exactly three
    /// integer components.
    #[error("malformed date {input:?}: {reason}")]
    MalformedInput {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}
