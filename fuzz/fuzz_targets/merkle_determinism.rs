#![no_main]

use growth_consensus::merkle_root_txids;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Interpret raw bytes as consecutive 32-byte txids.
    let txids: Vec<[u8; 32]> = data
        .chunks_exact(32)
        .map(|c| {
            let mut id = [0u8; 32];
            id.copy_from_slice(c);
            id
        })
        .collect();

    let a = merkle_root_txids(&txids);
    let b = merkle_root_txids(&txids);
    assert_eq!(a, b, "merkle_root_txids non-deterministic");

    if txids.len() == 1 {
        assert_eq!(a, txids[0]);
    }
    // Duplicating the last leaf of an odd list does not change the root.
    if txids.len() % 2 == 1 && txids.len() > 1 {
        let mut padded = txids.clone();
        padded.push(txids[txids.len() - 1]);
        assert_eq!(merkle_root_txids(&padded), a);
    }
});
