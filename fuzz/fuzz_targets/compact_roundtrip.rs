#![no_main]

use growth_consensus::{decode_compact, encode_compact};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let bits = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);

    // Magnitudes wider than 256 bits have no compact form.
    let raw = BigUint::from_bytes_le(&data[4..]);
    if raw.bits() > 256 {
        assert!(encode_compact(&raw).is_err(), "oversized magnitude encoded");
    }

    let decoded = decode_compact(bits);
    if decoded.value == BigUint::default() {
        assert!(!decoded.negative, "zero decoded as negative: {bits:#010x}");
    }
    if !decoded.is_valid() {
        return;
    }
    assert!(decoded.value.bits() <= 256, "valid compact wider than 256 bits");

    // Any valid decoded value survives an encode/decode cycle unchanged.
    let re = match encode_compact(&decoded.value) {
        Ok(bits) => decode_compact(bits),
        Err(e) => panic!("valid compact {bits:#010x} failed to re-encode: {e}"),
    };
    assert!(re.is_valid(), "re-encoded {bits:#010x} is invalid");
    assert_eq!(re.value, decoded.value, "compact roundtrip mismatch for {bits:#010x}");
});
