use sha2::{Digest, Sha256};

use crate::error::{ChainError, ErrorCode};

/// 32-byte digest in internal (little-endian) byte order.
pub type Hash256 = [u8; 32];

pub const ZERO_HASH: Hash256 = [0u8; 32];

pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

/// Parses the display form (most significant byte first, optional `0x`) into
/// internal byte order. Short inputs are left-padded with zeros.
pub fn hash256_from_hex(input: &str) -> Result<Hash256, ChainError> {
    let mut hex = input.trim();
    if let Some(stripped) = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")) {
        hex = stripped;
    }
    if hex.is_empty() || hex.len() > 64 {
        return Err(ChainError::new(
            ErrorCode::WireParse,
            format!("hash hex must be 1..=64 digits, got {}", hex.len()),
        ));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ChainError::new(
            ErrorCode::WireParse,
            "invalid hex digit in hash",
        ));
    }

    let mut padded = String::with_capacity(64);
    for _ in hex.len()..64 {
        padded.push('0');
    }
    padded.push_str(hex);

    let mut bytes = [0u8; 32];
    for (i, byte_out) in bytes.iter_mut().enumerate() {
        let start = i * 2;
        *byte_out = u8::from_str_radix(&padded[start..start + 2], 16)
            .map_err(|_| ChainError::new(ErrorCode::WireParse, "invalid hex digit in hash"))?;
    }
    bytes.reverse();
    Ok(bytes)
}

/// Display form of an internal-order digest.
pub fn hash256_to_hex(hash: &Hash256) -> String {
    hash.iter().rev().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256d_empty_vector() {
        assert_eq!(
            hash256_to_hex(&sha256d(b"")),
            // sha256d("") displayed byte-reversed
            "56944c5d3f98413ef45cf54545538103cc9f298e0575820ad3591376e2e0f65d"
        );
    }

    #[test]
    fn hex_display_reverses_byte_order() {
        let h = hash256_from_hex("0x00000000000000000000000000000000000000000000000000000000000001ff")
            .expect("hex");
        assert_eq!(h[0], 0xff);
        assert_eq!(h[1], 0x01);
        assert_eq!(
            hash256_to_hex(&h),
            "00000000000000000000000000000000000000000000000000000000000001ff"
        );
    }

    #[test]
    fn short_hex_is_left_padded() {
        let h = hash256_from_hex("ab").expect("hex");
        assert_eq!(h[0], 0xab);
        assert!(h[1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn rejects_bad_hex() {
        assert_eq!(
            hash256_from_hex("zz").unwrap_err().code,
            ErrorCode::WireParse
        );
        assert_eq!(
            hash256_from_hex(&"0".repeat(65)).unwrap_err().code,
            ErrorCode::WireParse
        );
    }
}
