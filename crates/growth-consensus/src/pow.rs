//! Compact target ("bits") codec and proof-of-work arithmetic.
//!
//! The compact form packs a 256-bit bound into 32 bits: the top byte is the
//! number of significant bytes, the low 23 bits are the mantissa and bit 23 is
//! a sign flag. Decoding never clamps; sign and overflow are reported
//! alongside the magnitude.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{ChainError, ErrorCode};
use crate::hash::Hash256;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedCompact {
    pub value: BigUint,
    pub negative: bool,
    pub overflow: bool,
}

impl DecodedCompact {
    pub fn is_valid(&self) -> bool {
        !self.negative && !self.overflow
    }
}

pub fn decode_compact(bits: u32) -> DecodedCompact {
    let size = bits >> 24;
    let mut word = bits & MANTISSA_MASK;

    let value = if size <= 3 {
        word >>= 8 * (3 - size);
        BigUint::from(word)
    } else {
        BigUint::from(word) << (8 * (size - 3)) as usize
    };

    let negative = word != 0 && (bits & SIGN_BIT) != 0;
    // The shifted mantissa would no longer fit in 256 bits.
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

    DecodedCompact {
        value,
        negative,
        overflow,
    }
}

/// Encodes a non-negative magnitude, keeping the top three significant bytes.
///
/// Magnitudes wider than 256 bits have no compact form and are rejected.
pub fn encode_compact(value: &BigUint) -> Result<u32, ChainError> {
    if value.bits() > 256 {
        return Err(ChainError::new(
            ErrorCode::CompactOverflow,
            format!("magnitude of {} bits exceeds 256-bit range", value.bits()),
        ));
    }
    Ok(encode_compact_256(value))
}

/// `value` must fit in 256 bits so the exponent stays within one byte.
fn encode_compact_256(value: &BigUint) -> u32 {
    if value.is_zero() {
        return 0;
    }

    let mut size = value.bits().div_ceil(8) as u32;
    let mut compact = if size <= 3 {
        low_u32(value) << (8 * (3 - size))
    } else {
        low_u32(&(value >> (8 * (size - 3)) as usize))
    };

    // The mantissa's top bit is the sign flag; move a byte into the exponent.
    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }

    (size << 24) | (compact & MANTISSA_MASK)
}

fn low_u32(value: &BigUint) -> u32 {
    value.iter_u32_digits().next().unwrap_or(0)
}

/// Strict decode: negative or overflowing bits become an arithmetic error.
pub fn compact_to_target(bits: u32) -> Result<BigUint, ChainError> {
    let decoded = decode_compact(bits);
    if decoded.negative {
        return Err(ChainError::new(
            ErrorCode::CompactNegative,
            format!("compact target {bits:#010x} has negative sign bit"),
        ));
    }
    if decoded.overflow {
        return Err(ChainError::new(
            ErrorCode::CompactOverflow,
            format!("compact target {bits:#010x} overflows 256-bit range"),
        ));
    }
    Ok(decoded.value)
}

pub fn target_to_compact(target: &Hash256) -> u32 {
    encode_compact_256(&hash_to_biguint(target))
}

/// Interprets an internal-order digest as a 256-bit unsigned integer.
pub fn hash_to_biguint(hash: &Hash256) -> BigUint {
    BigUint::from_bytes_le(hash)
}

pub fn biguint_to_hash(value: &BigUint) -> Result<Hash256, ChainError> {
    let b = value.to_bytes_le();
    if b.len() > 32 {
        return Err(ChainError::new(
            ErrorCode::CompactOverflow,
            "value exceeds 256 bits",
        ));
    }
    let mut out = [0u8; 32];
    out[..b.len()].copy_from_slice(&b);
    Ok(out)
}

pub fn hash_meets_target(hash: &Hash256, target: &BigUint) -> bool {
    hash_to_biguint(hash) <= *target
}

/// Expected number of hashes to find a block at `bits`: 2^256 / (target + 1).
pub fn block_proof(bits: u32) -> Result<BigUint, ChainError> {
    let target = compact_to_target(bits)?;
    if target.is_zero() {
        return Ok(BigUint::zero());
    }
    Ok((BigUint::one() << 256usize) / (target + BigUint::one()))
}
