#![no_main]

use growth_consensus::{block_hash, parse_block_header_bytes, BLOCK_HEADER_BYTES};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let parsed = parse_block_header_bytes(data);
    let hashed = block_hash(data);
    assert_eq!(parsed.is_ok(), data.len() == BLOCK_HEADER_BYTES);
    assert_eq!(parsed.is_ok(), hashed.is_ok());

    if let (Ok(header), Ok(hash)) = (parsed, hashed) {
        assert_eq!(&header.to_bytes()[..], data);
        assert_eq!(header.hash(), hash);
    }
});
