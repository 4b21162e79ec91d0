//! Signed-to-unsigned transform that keeps numeric order.
//!
//! Flipping the sign bit of a two's-complement `i64` yields a `u64` whose
//! unsigned order (and therefore big-endian byte order) matches the signed
//! order of the input: `i64::MIN` maps to `0`, `-1` to `0x7FFF_FFFF_FFFF_FFFF`,
//! `0` to `0x8000_0000_0000_0000` and `i64::MAX` to `u64::MAX`.

const SIGN_BIT: u64 = 1 << 63;

/// Map a signed value onto the unsigned line, preserving order.
///
/// ```
/// use numtrie::numeric::sortable::to_sortable;
///
/// assert!(to_sortable(-1) < to_sortable(0));
/// assert_eq!(to_sortable(i64::MIN), 0);
/// assert_eq!(to_sortable(i64::MAX), u64::MAX);
/// ```
#[inline]
pub fn to_sortable(value: i64) -> u64 {
    (value as u64) ^ SIGN_BIT
}

/// Inverse of [`to_sortable`].
#[inline]
pub fn from_sortable(sortable: u64) -> i64 {
    (sortable ^ SIGN_BIT) as i64
}
