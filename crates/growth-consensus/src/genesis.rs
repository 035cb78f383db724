//! Genesis block construction, verification, and the offline nonce search.

use log::{debug, info};
use num_bigint::BigUint;

use crate::block::{Block, BlockHeader};
use crate::constants::{
    COINBASE_TX_VERSION, GENESIS_COINBASE_BITS_PUSH, GENESIS_COINBASE_EXTRA_NONCE,
    GENESIS_MESSAGE, GENESIS_OUTPUT_PUBKEY, GENESIS_REWARD, GENESIS_VERSION,
};
use crate::error::{ChainError, ErrorCode};
use crate::hash::{hash256_to_hex, Hash256, ZERO_HASH};
use crate::merkle::merkle_root_txids;
use crate::pow::{compact_to_target, hash_meets_target, hash_to_biguint};
use crate::script::{pay_to_pubkey_script, Script};
use crate::tx::{OutPoint, Transaction, TxIn, TxOut};

const SEARCH_PROGRESS_INTERVAL: u32 = 10_000;

/// Inputs to [`build_genesis_block`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisSpec {
    pub message: Vec<u8>,
    pub reward_script: Script,
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: i64,
}

impl GenesisSpec {
    /// The chain's shared message, reward key and reward with per-network header fields.
    pub fn standard(time: u32, nonce: u32, bits: u32) -> Self {
        Self {
            message: GENESIS_MESSAGE.as_bytes().to_vec(),
            reward_script: pay_to_pubkey_script(&GENESIS_OUTPUT_PUBKEY),
            time,
            nonce,
            bits,
            version: GENESIS_VERSION,
            reward: GENESIS_REWARD,
        }
    }

    pub fn build(&self) -> Block {
        build_genesis_block(
            &self.message,
            &self.reward_script,
            self.time,
            self.nonce,
            self.bits,
            self.version,
            self.reward,
        )
    }
}

pub fn genesis_coinbase(message: &[u8], reward_script: &Script, reward: i64) -> Transaction {
    let script_sig = Script::new()
        .push_int(GENESIS_COINBASE_BITS_PUSH)
        .push_script_num(GENESIS_COINBASE_EXTRA_NONCE)
        .push_slice(message);

    Transaction {
        version: COINBASE_TX_VERSION,
        inputs: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }],
        outputs: vec![TxOut {
            value: reward,
            script_pubkey: reward_script.clone(),
        }],
        lock_time: 0,
    }
}

/// Assembles the first block of a chain. Pure and deterministic.
pub fn build_genesis_block(
    message: &[u8],
    reward_script: &Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: i64,
) -> Block {
    let coinbase = genesis_coinbase(message, reward_script, reward);
    let merkle_root = merkle_root_txids(&[coinbase.txid()]);

    Block {
        header: BlockHeader {
            version,
            prev_block_hash: ZERO_HASH,
            merkle_root,
            time,
            bits,
            nonce,
        },
        transactions: vec![coinbase],
    }
}

/// Recovers the message payload from a genesis block's coinbase input.
pub fn coinbase_message(block: &Block) -> Option<&[u8]> {
    let input = block.transactions.first()?.inputs.first()?;
    input.script_sig.pushed_data().last().copied()
}

/// Checks a built genesis block against the hardcoded expectations of its network.
pub fn verify_genesis(
    block: &Block,
    expected_hash: &Hash256,
    expected_merkle_root: &Hash256,
) -> Result<(), ChainError> {
    if block.header.prev_block_hash != ZERO_HASH || block.transactions.len() != 1 {
        return Err(ChainError::new(
            ErrorCode::GenesisStructureInvalid,
            "genesis must have a zero parent and exactly one transaction",
        ));
    }

    let merkle_root = block.compute_merkle_root();
    if merkle_root != block.header.merkle_root || merkle_root != *expected_merkle_root {
        return Err(ChainError::new(
            ErrorCode::GenesisMerkleMismatch,
            format!(
                "genesis merkle root {} != expected {}",
                hash256_to_hex(&merkle_root),
                hash256_to_hex(expected_merkle_root)
            ),
        ));
    }

    let hash = block.hash();
    if hash != *expected_hash {
        return Err(ChainError::new(
            ErrorCode::GenesisHashMismatch,
            format!(
                "genesis hash {} != expected {}",
                hash256_to_hex(&hash),
                hash256_to_hex(expected_hash)
            ),
        ));
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinedGenesis {
    pub time: u32,
    pub nonce: u32,
    pub hash: Hash256,
}

/// Developer tooling: grinds the nonce (bumping time on wrap) until the
/// header hash is at or below the target encoded by `header.bits`.
///
/// Unbounded and CPU-bound. Never called on the node startup path.
pub fn mine_genesis_nonce(header: &BlockHeader) -> Result<MinedGenesis, ChainError> {
    let target = compact_to_target(header.bits)?;
    let mut candidate = *header;
    info!(
        "searching for genesis nonce: bits={:#010x} time={} nonce={}",
        candidate.bits, candidate.time, candidate.nonce
    );

    loop {
        let hash = candidate.hash();
        if hash_meets_target(&hash, &target) {
            info!(
                "found genesis: time={} nonce={} hash={}",
                candidate.time,
                candidate.nonce,
                hash256_to_hex(&hash)
            );
            return Ok(MinedGenesis {
                time: candidate.time,
                nonce: candidate.nonce,
                hash,
            });
        }

        candidate.nonce = candidate.nonce.wrapping_add(1);
        if candidate.nonce == 0 {
            candidate.time = candidate.time.wrapping_add(1);
            info!("nonce wrapped, time now {}", candidate.time);
        }
        if candidate.nonce % SEARCH_PROGRESS_INTERVAL == 0 {
            debug!(
                "nonce {}: hash {}",
                candidate.nonce,
                hash256_to_hex(&candidate.hash())
            );
        }
    }
}

/// True when the header hash, read as a 256-bit integer, does not exceed its target.
pub fn header_meets_own_target(header: &BlockHeader) -> Result<bool, ChainError> {
    let target: BigUint = compact_to_target(header.bits)?;
    Ok(hash_to_biguint(&header.hash()) <= target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{hash256_from_hex, hash256_to_hex};

    #[test]
    fn build_is_deterministic() {
        let spec = GenesisSpec::standard(1_581_238_800, 885_106, 504_365_040);
        let a = spec.build();
        let b = spec.build();
        assert_eq!(a.header.to_bytes(), b.header.to_bytes());
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a.consensus_encode(), b.consensus_encode());
    }

    #[test]
    fn structure_of_built_block() {
        let block = GenesisSpec::standard(1_581_238_800, 885_106, 504_365_040).build();
        assert_eq!(block.header.prev_block_hash, ZERO_HASH);
        assert_eq!(block.transactions.len(), 1);
        let coinbase = &block.transactions[0];
        assert!(coinbase.is_coinbase());
        assert_eq!(coinbase.outputs.len(), 1);
        assert_eq!(coinbase.outputs[0].value, GENESIS_REWARD);
        assert_eq!(coinbase_message(&block), Some(GENESIS_MESSAGE.as_bytes()));
        // A single transaction's id is the merkle root.
        assert_eq!(block.header.merkle_root, coinbase.txid());
    }

    #[test]
    fn verify_reports_the_failing_commitment() {
        let block = GenesisSpec::standard(1_581_238_801, 2_020_001, 504_365_040).build();
        let hash = block.hash();
        let root = block.header.merkle_root;
        verify_genesis(&block, &hash, &root).expect("matches itself");

        let err = verify_genesis(&block, &[0x01; 32], &root).unwrap_err();
        assert_eq!(err.code, ErrorCode::GenesisHashMismatch);
        assert!(err.code.is_fatal());

        let err = verify_genesis(&block, &hash, &[0x01; 32]).unwrap_err();
        assert_eq!(err.code, ErrorCode::GenesisMerkleMismatch);

        let mut tampered = block.clone();
        tampered.transactions[0].outputs[0].value += 1;
        let err = verify_genesis(&tampered, &hash, &root).unwrap_err();
        assert_eq!(err.code, ErrorCode::GenesisMerkleMismatch);
    }

    #[test]
    fn verify_rejects_malformed_structure_before_commitments() {
        let block = GenesisSpec::standard(1_581_238_801, 2_020_001, 504_365_040).build();
        let hash = block.hash();
        let root = block.header.merkle_root;

        let mut with_parent = block.clone();
        with_parent.header.prev_block_hash = [0x01; 32];
        let err = verify_genesis(&with_parent, &hash, &root).unwrap_err();
        assert_eq!(err.code, ErrorCode::GenesisStructureInvalid);
        assert!(err.code.is_fatal());

        let mut two_txs = block.clone();
        two_txs.transactions.push(block.transactions[0].clone());
        assert_eq!(
            verify_genesis(&two_txs, &hash, &root).unwrap_err().code,
            ErrorCode::GenesisStructureInvalid
        );

        let mut empty = block;
        empty.transactions.clear();
        assert_eq!(
            verify_genesis(&empty, &hash, &root).unwrap_err().code,
            ErrorCode::GenesisStructureInvalid
        );
    }

    #[test]
    fn coinbase_message_survives_empty_and_large_payloads() {
        let script = pay_to_pubkey_script(&GENESIS_OUTPUT_PUBKEY);
        let empty = build_genesis_block(b"", &script, 0, 0, 0x207f_ffff, 1, GENESIS_REWARD);
        assert_eq!(coinbase_message(&empty), Some(&[][..]));

        let large = vec![0x42u8; 70_000];
        let block = build_genesis_block(&large, &script, 0, 0, 0x207f_ffff, 1, GENESIS_REWARD);
        assert_eq!(coinbase_message(&block), Some(&large[..]));
    }

    #[test]
    fn search_finds_first_satisfying_nonce() {
        let mut header = GenesisSpec::standard(1_581_238_802, 0, 0x1f00_ffff).build().header;
        let mined = mine_genesis_nonce(&header).expect("search");
        assert_eq!(mined.time, 1_581_238_802);
        assert_eq!(mined.nonce, 7_381);
        assert_eq!(
            hash256_to_hex(&mined.hash),
            "0000a12a184ab12e1a7026c34733077089a9b98033763ca7f31984d537a9739c"
        );
        header.nonce = mined.nonce;
        assert!(header_meets_own_target(&header).expect("bits valid"));
    }

    #[test]
    fn search_bumps_time_on_nonce_wrap() {
        let header = GenesisSpec::standard(1_581_238_802, u32::MAX, 0x207f_ffff).build().header;
        let mined = mine_genesis_nonce(&header).expect("search");
        assert_eq!(mined.time, 1_581_238_803);
        assert_eq!(mined.nonce, 0);
        assert_eq!(
            mined.hash,
            hash256_from_hex("138f60808a316a3cc95c543bbd1478594db9b8fcff88d1772e1b7fc65d59647d")
                .expect("hex")
        );
    }

    #[test]
    fn search_rejects_invalid_bits() {
        let header = GenesisSpec::standard(0, 0, 0x0492_3456).build().header;
        assert_eq!(
            mine_genesis_nonce(&header).unwrap_err().code,
            ErrorCode::CompactNegative
        );
    }
}
