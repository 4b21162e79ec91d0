//! Prefix-coded terms for trie-indexed numeric values.
//!
//! A prefix-coded term is the sortable form of a value with its low `shift`
//! bits discarded, laid out so that plain byte comparison orders terms of the
//! same shift numerically.
//!
//! # Layout
//!
//! ```text
//! +--------------+------------------------------------------+
//! | 0x20 + shift | (sortable >> shift) in big-endian 7-bit  |
//! |   (marker)   | groups, (63 - shift) / 7 + 1 bytes       |
//! +--------------+------------------------------------------+
//! ```
//!
//! Every payload byte stays below `0x80`, so a term is plain ASCII and can be
//! handed to any text-oriented term dictionary. The marker byte sorts terms of
//! lower shift before terms of higher shift and makes two terms of different
//! shifts unequal regardless of payload.
//!
//! # Examples
//!
//! ```
//! use numtrie::numeric::prefix_coded::PrefixCoded;
//!
//! let term = PrefixCoded::new(-42, 0).unwrap();
//! assert_eq!(term.shift(), 0);
//! assert_eq!(term.to_i64(), -42);
//!
//! let coarse = PrefixCoded::new(-42, 8).unwrap();
//! assert!(coarse.len() < term.len());
//! assert_ne!(coarse, term);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NumtrieError, Result};
use crate::numeric::sortable::{from_sortable, to_sortable};

/// Marker value for shift 0. The marker of a term at shift `s` is this plus `s`.
pub const SHIFT_START_INT64: u8 = 0x20;

/// Number of value bits carried by one payload byte.
const BITS_PER_BYTE: u32 = 7;

/// Shifts at or above this leave nothing to encode.
pub const MAX_SHIFT: u32 = 64;

/// Number of payload bytes for a term at `shift` (which must be below 64).
#[inline]
pub fn payload_len(shift: u32) -> usize {
    ((63 - shift) / BITS_PER_BYTE + 1) as usize
}

/// Total encoded length, marker included, for a term at `shift`.
#[inline]
pub fn encoded_len(shift: u32) -> usize {
    payload_len(shift) + 1
}

/// An immutable prefix-coded term.
///
/// Instances can only be built by the encoder or by validating raw bytes, so
/// every `PrefixCoded` satisfies the layout above.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PrefixCoded(Vec<u8>);

impl PrefixCoded {
    /// Encode a signed value at the given shift.
    pub fn new(value: i64, shift: u32) -> Result<Self> {
        encode(to_sortable(value), shift)
    }

    /// Encode an already sortable value at the given shift.
    pub fn from_sortable(sortable: u64, shift: u32) -> Result<Self> {
        encode(sortable, shift)
    }

    /// Encode a signed value at shift 0.
    ///
    /// Shift 0 is always representable, so this cannot fail.
    pub fn full_precision(value: i64) -> Self {
        must_encode(to_sortable(value), 0)
    }

    /// The shift recorded in the marker byte.
    pub fn shift(&self) -> u32 {
        u32::from(self.0[0] - SHIFT_START_INT64)
    }

    /// Whether this term carries every bit of the original value.
    pub fn is_full_precision(&self) -> bool {
        self.shift() == 0
    }

    /// The sortable value with its low `shift` bits zeroed.
    pub fn to_sortable(&self) -> u64 {
        accumulate(&self.0[1..]) << self.shift()
    }

    /// The signed value this term represents.
    ///
    /// Exact at shift 0; at higher shifts this is the bucket representative,
    /// i.e. the smallest value sharing the term.
    pub fn to_i64(&self) -> i64 {
        from_sortable(self.to_sortable())
    }

    /// The raw term bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the term, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length of the term in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a term holds at least a marker and one payload byte.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Encode `sortable >> shift` as a prefix-coded term.
///
/// Returns [`NumtrieError::UnsupportedShift`] when `shift >= 64`. Ladder
/// generation relies on that variant as its stop condition.
pub fn encode(sortable: u64, shift: u32) -> Result<PrefixCoded> {
    if shift >= MAX_SHIFT {
        return Err(NumtrieError::unsupported_shift(shift));
    }

    let len = payload_len(shift);
    let mut bytes = vec![0u8; len + 1];
    bytes[0] = SHIFT_START_INT64 + shift as u8;

    let mut remaining = sortable >> shift;
    for byte in bytes[1..].iter_mut().rev() {
        *byte = (remaining & 0x7F) as u8;
        remaining >>= BITS_PER_BYTE;
    }

    Ok(PrefixCoded(bytes))
}

/// Encode for call sites that have already validated `shift`.
///
/// # Panics
///
/// Panics if `shift >= 64`. Reaching that is a bug in the caller.
pub fn must_encode(sortable: u64, shift: u32) -> PrefixCoded {
    encode(sortable, shift)
        .unwrap_or_else(|e| panic!("prefix coding at a validated shift failed: {e}"))
}

/// Decode a term into its signed value and shift.
///
/// At shift 0 the value is exact. At higher shifts the sortable low bits are
/// zero before un-flipping the sign, so the result is the bucket
/// representative.
pub fn decode(bytes: &[u8]) -> Result<(i64, u32)> {
    let (sortable, shift) = decode_sortable(bytes)?;
    Ok((from_sortable(sortable), shift))
}

/// Decode a term into its sortable value (low bits zeroed) and shift.
pub fn decode_sortable(bytes: &[u8]) -> Result<(u64, u32)> {
    validate(bytes)?;
    let shift = u32::from(bytes[0] - SHIFT_START_INT64);
    Ok((accumulate(&bytes[1..]) << shift, shift))
}

/// Check that `bytes` follows the prefix-coded layout.
fn validate(bytes: &[u8]) -> Result<()> {
    let Some((&marker, payload)) = bytes.split_first() else {
        return Err(NumtrieError::malformed_term("empty term"));
    };

    let shift = match marker.checked_sub(SHIFT_START_INT64) {
        Some(shift) if u32::from(shift) < MAX_SHIFT => u32::from(shift),
        _ => {
            return Err(NumtrieError::malformed_term(format!(
                "invalid shift marker 0x{marker:02x}"
            )));
        }
    };

    let expected = payload_len(shift);
    if payload.len() != expected {
        return Err(NumtrieError::malformed_term(format!(
            "expected {} payload bytes for shift {shift}, found {}",
            expected,
            payload.len()
        )));
    }

    if let Some(position) = payload.iter().position(|b| b & 0x80 != 0) {
        return Err(NumtrieError::malformed_term(format!(
            "payload byte {position} has its high bit set"
        )));
    }

    // The leading group only carries the bits left over after the full groups.
    let excess = expected as u32 * BITS_PER_BYTE - (MAX_SHIFT - shift);
    if payload[0] >> (BITS_PER_BYTE - excess) != 0 {
        return Err(NumtrieError::malformed_term(format!(
            "leading payload byte 0x{:02x} exceeds {} value bits",
            payload[0],
            MAX_SHIFT - shift
        )));
    }

    Ok(())
}

#[inline]
fn accumulate(payload: &[u8]) -> u64 {
    payload
        .iter()
        .fold(0u64, |acc, &b| (acc << BITS_PER_BYTE) | u64::from(b))
}

impl TryFrom<&[u8]> for PrefixCoded {
    type Error = NumtrieError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        validate(bytes)?;
        Ok(PrefixCoded(bytes.to_vec()))
    }
}

impl TryFrom<Vec<u8>> for PrefixCoded {
    type Error = NumtrieError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        validate(&bytes)?;
        Ok(PrefixCoded(bytes))
    }
}

impl From<PrefixCoded> for Vec<u8> {
    fn from(term: PrefixCoded) -> Self {
        term.0
    }
}

impl AsRef<[u8]> for PrefixCoded {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PrefixCoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PrefixCoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixCoded")
            .field("shift", &self.shift())
            .field("value", &self.to_i64())
            .field("bytes", &format_args!("{self}"))
            .finish()
    }
}
