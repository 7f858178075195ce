//! Floor division primitives.
//!
//! Years and JDNs go negative before the reference epochs, so every formula
//! in this crate divides with floor semantics. Rust's `/` and `%` truncate
//! toward zero and must not be used on values that can be negative.

/// Returns ⌊i / j⌋.
///
/// # Panics
///
/// Panics if `j == 0`.
///
/// # Examples
///
/// ```
/// use ethcal_calendar::quotient;
///
/// assert_eq!(quotient(7, 2), 3);
/// assert_eq!(quotient(-7, 2), -4);
/// ```
pub fn quotient(i: i64, j: i64) -> i64 {
    let q = i / j;
    if (i % j != 0) && ((i < 0) != (j < 0)) {
        q - 1
    } else {
        q
    }
}

/// Returns `i - j * quotient(i, j)`.
///
/// For positive `j` the result is always in `0..j`, whatever the sign of `i`.
///
/// # Examples
///
/// ```
/// use ethcal_calendar::floor_mod;
///
/// assert_eq!(floor_mod(-1, 7), 6);
/// assert_eq!(floor_mod(15, 7), 1);
/// ```
pub fn floor_mod(i: i64, j: i64) -> i64 {
    i - j * quotient(i, j)
}
