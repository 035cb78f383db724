use crate::hash::{sha256d, Hash256, ZERO_HASH};

/// Merkle root over transaction ids in block order.
///
/// An odd level duplicates its last element before pairing. This makes
/// `[a, b, c]` and `[a, b, c, c]` commit to the same root; consensus depends
/// on that ambiguity staying exactly as it is.
pub fn merkle_root_txids(txids: &[Hash256]) -> Hash256 {
    if txids.is_empty() {
        return ZERO_HASH;
    }

    let mut level: Vec<Hash256> = txids.to_vec();
    let mut node_preimage = [0u8; 64];
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            let last = level[level.len() - 1];
            level.push(last);
        }
        let mut next: Vec<Hash256> = Vec::with_capacity(level.len() / 2);
        for pair in level.chunks_exact(2) {
            node_preimage[..32].copy_from_slice(&pair[0]);
            node_preimage[32..].copy_from_slice(&pair[1]);
            next.push(sha256d(&node_preimage));
        }
        level = next;
    }

    level[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{hash256_from_hex, hash256_to_hex};

    fn ids(hexes: &[&str]) -> Vec<Hash256> {
        hexes
            .iter()
            .map(|h| hash256_from_hex(h).expect("txid hex"))
            .collect()
    }

    // Bitcoin block 100000.
    const BLOCK_100000_TXIDS: [&str; 4] = [
        "8c14f0db3df150123e6f3dbbf30f8b955a8249b62ac1d1ff16284aefa3d06d87",
        "fff2525b8931402dd09222c50775608f75787bd2b87e56995a7bdd30f79702c4",
        "6359f0868171b1d194cbee1af2f16ea598ae8fad666d9b012c8ed2b79a236ec4",
        "e9a66845e05d5abc0ad04ec80f774a7e585c6e8db975962d069a522137b80c1d",
    ];

    #[test]
    fn empty_list_is_zero_digest() {
        assert_eq!(merkle_root_txids(&[]), ZERO_HASH);
    }

    #[test]
    fn single_leaf_root_is_the_leaf() {
        let leaf = ids(&["4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"]);
        assert_eq!(merkle_root_txids(&leaf), leaf[0]);
    }

    #[test]
    fn block_100000_vector() {
        let txids = ids(&BLOCK_100000_TXIDS);
        assert_eq!(
            hash256_to_hex(&merkle_root_txids(&txids)),
            "f3e94742aca4b5ef85488dc37c06c3282295ffec960994b2c0d5ac2a25a95766"
        );
        // Deterministic on repeated calls.
        assert_eq!(merkle_root_txids(&txids), merkle_root_txids(&txids));
    }

    #[test]
    fn two_leaves_hash_concatenation() {
        let txids = ids(&BLOCK_100000_TXIDS[..2]);
        let mut preimage = Vec::with_capacity(64);
        preimage.extend_from_slice(&txids[0]);
        preimage.extend_from_slice(&txids[1]);
        assert_eq!(merkle_root_txids(&txids), sha256d(&preimage));
        assert_eq!(
            hash256_to_hex(&merkle_root_txids(&txids)),
            "ccdafb73d8dcd0173d5d5c3c9a0770d0b3953db889dab99ef05b1907518cb815"
        );
    }

    #[test]
    fn odd_level_duplicates_last_leaf() {
        let three = ids(&BLOCK_100000_TXIDS[..3]);
        let mut four = three.clone();
        four.push(three[2]);

        let pair = |a: &Hash256, b: &Hash256| {
            let mut preimage = Vec::with_capacity(64);
            preimage.extend_from_slice(a);
            preimage.extend_from_slice(b);
            sha256d(&preimage)
        };
        let left = pair(&three[0], &three[1]);
        let right = pair(&three[2], &three[2]);

        let root = merkle_root_txids(&three);
        assert_eq!(root, pair(&left, &right));
        assert_eq!(root, merkle_root_txids(&four));
        assert_ne!(root, merkle_root_txids(&ids(&BLOCK_100000_TXIDS)));
    }
}
