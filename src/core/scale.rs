//! Integer helpers for axis rounding. No floating point anywhere in here,
//! so power-of-ten boundaries come out exact.

/// Number of decimal digits of `n` (`0` has one digit).
#[inline]
#[must_use]
pub fn decimal_digits(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

/// `10^exp`, saturating at `u64::MAX`.
#[inline]
#[must_use]
pub fn pow10(exp: u32) -> u64 {
    10u64.checked_pow(exp).unwrap_or(u64::MAX)
}

/// `num / den` rounded to the nearest integer, halves rounding up.
///
/// `den` must be non-zero.
#[inline]
#[must_use]
pub fn round_half_up(num: u128, den: u128) -> u128 {
    debug_assert!(den != 0, "round_half_up by zero");
    let (q, r) = (num / den, num % den);
    if r * 2 >= den { q + 1 } else { q }
}

/// Largest multiple of `to` that is `<= n`.
#[inline]
#[must_use]
pub fn round_down(n: u64, to: u64) -> u64 {
    n - n % to
}

/// Next multiple of `to` strictly above `n` (an exact multiple still moves
/// up one step).
#[inline]
#[must_use]
pub fn round_up_past(n: u64, to: u64) -> u64 {
    n + (to - n % to)
}
