#![no_main]

use growth_consensus::Block;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic; whatever decodes re-encodes to the same bytes.
    if let Ok(block) = Block::consensus_decode(data) {
        assert_eq!(block.consensus_encode(), data);
    }
});
