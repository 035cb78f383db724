//! Per-network chain parameters: consensus rules, genesis block, checkpoints
//! and network identity.

use core::fmt;
use core::str::FromStr;

use crate::block::Block;
use crate::checkpoints::{Checkpoint, CheckpointData};
use crate::error::{ChainError, ErrorCode};
use crate::featurebits::Bip9Deployment;
use crate::genesis::{verify_genesis, GenesisSpec};
use crate::hash::{hash256_from_hex, hash256_to_hex, Hash256, ZERO_HASH};
use crate::params::{Bip34Activation, ConsensusParams, GovernanceParams};

pub const MAIN_GENESIS_HASH: &str =
    "386020208f225b5bca2899839b07110fac30d1a13b9755727675598d8869baea";
pub const TEST_GENESIS_HASH: &str =
    "8881d23778e0251fcf64e9f9a87dd402d2647b39194c588226aca7e048b47d9e";
pub const REGTEST_GENESIS_HASH: &str =
    "7676a733edc17eab061423f378ceb3fbc5a23b9f120cb17df78e388929fbba44";
/// All networks share the genesis coinbase, so they share its merkle root.
pub const GENESIS_MERKLE_ROOT: &str =
    "e17858477e8d0b8e71769394e2c91bb48c4c8604763109bfe1a0feb0bbe795c1";

/// Values recorded by the legacy node. They do not match the double-SHA-256
/// header hash of the blocks built from these inputs and are kept only so the
/// mismatch stays documented and tested.
pub const LEGACY_MAIN_GENESIS_HASH: &str =
    "000000b64ffc1b4535b3163a60098f187653d7012044d7647439a0f07b825830";
pub const LEGACY_TEST_GENESIS_HASH: &str =
    "0000018a84798e0a70f7f198c3d96c2637e720338b9e85fdfe51a09a82435273";
pub const LEGACY_REGTEST_GENESIS_HASH: &str =
    "000006e3cc34e815a71e65082746123924922128e31c60ef2b3e1ccf588595cf";
pub const LEGACY_GENESIS_MERKLE_ROOT: &str =
    "96f89d848b498032dbfafc5282fbe48a7acd6856181b13c100b20c45764056c6";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Network {
    Main,
    Test,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            other => Err(ChainError::new(
                ErrorCode::ConfigUnknownNetwork,
                format!("unknown chain {other:?}"),
            )),
        }
    }
}

/// Version bytes consumed by the base58 address encoder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
    pub ext_coin_type: [u8; 4],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PolicyFlags {
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChainParams {
    pub network: Network,
    pub consensus: ConsensusParams,
    pub genesis: Block,
    pub expected_genesis_merkle_root: Hash256,
    pub checkpoints: CheckpointData,
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub base58_prefixes: Base58Prefixes,
    pub alert_public_key: Option<&'static str>,
    pub spork_public_key: Option<&'static str>,
    pub masternode_payments_public_key: Option<&'static str>,
    /// Seconds behind wall clock before the tip counts as stale.
    pub max_tip_age: i64,
    pub prune_after_height: u64,
    pub pool_max_transactions: Option<u32>,
    pub fulfilled_request_expire_time: i64,
    pub policy: PolicyFlags,
    pub dns_seeds: &'static [&'static str],
    pub fixed_seeds: &'static [&'static str],
}

impl ChainParams {
    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis.hash()
    }

    /// Runs every self-consistency check. Any failure here is fatal: the
    /// parameter data does not keep its own promises.
    pub fn verify(&self) -> Result<(), ChainError> {
        self.consensus.validate()?;
        self.consensus
            .validate_genesis_bits(self.genesis.header.bits)?;
        self.checkpoints.validate()?;
        verify_genesis(
            &self.genesis,
            &self.consensus.hash_genesis_block,
            &self.expected_genesis_merkle_root,
        )?;

        if let Some(hash) = self.checkpoints.hash_at(0) {
            if *hash != self.consensus.hash_genesis_block {
                return Err(ChainError::new(
                    ErrorCode::ParamsCheckpointsInvalid,
                    format!(
                        "checkpoint 0 {} is not the genesis block",
                        hash256_to_hex(hash)
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Builds the parameters of `network` without verifying them.
pub fn chain_params(network: Network) -> Result<ChainParams, ChainError> {
    match network {
        Network::Main => mainnet_chain_params(),
        Network::Test => testnet_chain_params(),
        Network::Regtest => regtest_chain_params(),
    }
}

/// Builds and verifies the parameters of `network`.
pub fn verified_chain_params(network: Network) -> Result<ChainParams, ChainError> {
    let params = chain_params(network)?;
    params.verify()?;
    Ok(params)
}

fn mainnet_chain_params() -> Result<ChainParams, ChainError> {
    let genesis = GenesisSpec::standard(1_581_238_800, 885_106, 0x1e0f_fff0).build();
    let genesis_hash = hash256_from_hex(MAIN_GENESIS_HASH)?;

    let consensus = ConsensusParams {
        hash_genesis_block: genesis_hash,
        subsidy_halving_interval: 60_000,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1_000,
        bip34: Some(Bip34Activation {
            height: 227_931,
            hash: hash256_from_hex(
                "000000000000024b89b42a942fe0d9fea3bb44ab7bd1b19115dd6a759c0808b8",
            )?,
        }),
        pow_limit: hash256_from_hex(
            "00000fffff000000000000000000000000000000000000000000000000000000",
        )?,
        pow_target_timespan: 60,
        pow_target_spacing: 60,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1_916,
        miner_confirmation_window: 2_016,
        deployments: [
            Bip9Deployment {
                bit: 28,
                start_time: 1_199_145_601,
                timeout: 1_230_767_999,
            },
            Bip9Deployment {
                bit: 0,
                start_time: 1_523_675_804,
                timeout: 1_555_459_200,
            },
        ],
        // Work of the genesis block alone.
        minimum_chain_work: hash256_from_hex("100010")?,
        default_assume_valid: genesis_hash,
        governance: GovernanceParams {
            masternode_payments_start_block: 2,
            masternode_payments_increase_block: 158_000_000,
            masternode_payments_increase_period: 576 * 30,
            instant_send_keep_lock: 24,
            budget_payments_start_block: 2_100_000_000,
            budget_payments_cycle_blocks: 16_616,
            budget_payments_window_blocks: 100,
            budget_proposal_establishing_time: 60 * 60 * 24,
            superblock_start_block: 2_100_000_000,
            superblock_cycle: 16_616,
            governance_min_quorum: 10,
            governance_filter_elements: 20_000,
            masternode_minimum_confirmations: 15,
        },
    };

    Ok(ChainParams {
        network: Network::Main,
        checkpoints: CheckpointData {
            checkpoints: vec![Checkpoint {
                height: 0,
                hash: genesis_hash,
            }],
            last_checkpoint_time: 1_581_238_800,
            tx_count_at_checkpoint: 0,
            tx_per_day: 500.0,
        },
        consensus,
        genesis,
        expected_genesis_merkle_root: hash256_from_hex(GENESIS_MERKLE_ROOT)?,
        message_start: [0x7a, 0xb3, 0x9e, 0x4f],
        default_port: 10_300,
        base58_prefixes: Base58Prefixes {
            pubkey_address: 38,
            script_address: 16,
            secret_key: 33,
            ext_public_key: [0x04, 0x88, 0xb2, 0x1e],
            ext_secret_key: [0x04, 0x88, 0xad, 0xe4],
            ext_coin_type: [0x80, 0x00, 0x00, 0x05],
        },
        alert_public_key: Some(
            "04f17593e66fe42905300cffe3ef146de8a54c2f809c7ab5b2f2477c394d8285d63b806e5b87b14950e5c9f21c15f3af4be3aa3b55edf0626128c2d0bb3b3fe022",
        ),
        spork_public_key: Some(
            "04d329e7e50f57a73f7f4ee4d3b0b5477b77b4e187519ef6e53c6aa4bbd09ab31a3ca7f7c626016f3900108d5aed96ed6095380a8213a7764d009b1e599b058093",
        ),
        masternode_payments_public_key: Some(
            "04d329e7e50f57a73f7f4ee4d3b0b5477b77b4e187519ef6e53c6aa4bbd09ab31a3ca7f7c626016f3900108d5aed96ed6095380a8213a7764d009b1e599b058093",
        ),
        max_tip_age: 90 * 60,
        prune_after_height: 100_000,
        pool_max_transactions: Some(3),
        fulfilled_request_expire_time: 60 * 60,
        policy: PolicyFlags {
            mining_requires_peers: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: false,
        },
        dns_seeds: &[],
        fixed_seeds: &[],
    })
}

fn testnet_chain_params() -> Result<ChainParams, ChainError> {
    let genesis = GenesisSpec::standard(1_581_238_801, 2_020_001, 0x1e0f_fff0).build();
    let genesis_hash = hash256_from_hex(TEST_GENESIS_HASH)?;

    let consensus = ConsensusParams {
        hash_genesis_block: genesis_hash,
        subsidy_halving_interval: 130_000,
        majority_enforce_block_upgrade: 51,
        majority_reject_block_outdated: 75,
        majority_window: 100,
        bip34: Some(Bip34Activation {
            height: 21_111,
            hash: hash256_from_hex(
                "0000000023b3a96d3484e5abb3755c413e7d41500f8e2a5c3f0dd01299cd8ef8",
            )?,
        }),
        pow_limit: hash256_from_hex(
            "00000fffff000000000000000000000000000000000000000000000000000000",
        )?,
        pow_target_timespan: 60,
        pow_target_spacing: 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1_512,
        miner_confirmation_window: 2_016,
        deployments: [
            Bip9Deployment {
                bit: 28,
                start_time: 1_199_145_601,
                timeout: 1_230_767_999,
            },
            Bip9Deployment {
                bit: 0,
                start_time: 1_523_923_200,
                timeout: 1_555_459_200,
            },
        ],
        minimum_chain_work: ZERO_HASH,
        default_assume_valid: ZERO_HASH,
        governance: GovernanceParams {
            masternode_payments_start_block: 2,
            masternode_payments_increase_block: 46_000,
            masternode_payments_increase_period: 576,
            instant_send_keep_lock: 6,
            budget_payments_start_block: 2_100_000_000,
            budget_payments_cycle_blocks: 50,
            budget_payments_window_blocks: 10,
            budget_proposal_establishing_time: 60 * 20,
            superblock_start_block: 2_100_000_000,
            superblock_cycle: 24,
            governance_min_quorum: 1,
            governance_filter_elements: 500,
            masternode_minimum_confirmations: 1,
        },
    };

    Ok(ChainParams {
        network: Network::Test,
        checkpoints: CheckpointData {
            checkpoints: vec![Checkpoint {
                height: 0,
                hash: genesis_hash,
            }],
            last_checkpoint_time: 1_581_238_801,
            tx_count_at_checkpoint: 0,
            tx_per_day: 500.0,
        },
        consensus,
        genesis,
        expected_genesis_merkle_root: hash256_from_hex(GENESIS_MERKLE_ROOT)?,
        message_start: [0x70, 0xb7, 0x7a, 0xe4],
        default_port: 10_301,
        base58_prefixes: Base58Prefixes {
            pubkey_address: 61,
            script_address: 10,
            secret_key: 33,
            ext_public_key: [0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: [0x04, 0x35, 0x83, 0x94],
            ext_coin_type: [0x80, 0x00, 0x00, 0x01],
        },
        alert_public_key: Some(
            "049114e2dfc88457dc2b1bfb2b6d751ec1fcabbe0fe4de4a10f416c90b070bb22c0873456e4b2f5199413665b2c3fc965dfeb670477b3a2b163cef9689426885fe",
        ),
        spork_public_key: Some(
            "04bd429fcefdd9775510ebb36e824e8184659c72fdc09e4083f129b5de2971032941a43e1114c0da68ece23d5e60dc830fa40b525fb64c2447ed411b4830531a92",
        ),
        masternode_payments_public_key: Some(
            "04bd429fcefdd9775510ebb36e824e8184659c72fdc09e4083f129b5de2971032941a43e1114c0da68ece23d5e60dc830fa40b525fb64c2447ed411b4830531a92",
        ),
        // Allow mining on top of old blocks.
        max_tip_age: 0x7fff_ffff,
        prune_after_height: 1_000,
        pool_max_transactions: Some(3),
        fulfilled_request_expire_time: 5 * 60,
        policy: PolicyFlags {
            mining_requires_peers: false,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,
        },
        dns_seeds: &[],
        fixed_seeds: &[],
    })
}

fn regtest_chain_params() -> Result<ChainParams, ChainError> {
    let genesis = GenesisSpec::standard(1_581_238_802, 240_373, 0x207f_ffff).build();
    let genesis_hash = hash256_from_hex(REGTEST_GENESIS_HASH)?;

    let consensus = ConsensusParams {
        hash_genesis_block: genesis_hash,
        subsidy_halving_interval: 150,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1_000,
        bip34: None,
        pow_limit: hash256_from_hex(
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        )?,
        pow_target_timespan: 60 * 60,
        pow_target_spacing: 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        deployments: [
            Bip9Deployment {
                bit: 28,
                start_time: 0,
                timeout: 999_999_999_999,
            },
            Bip9Deployment {
                bit: 0,
                start_time: 0,
                timeout: 999_999_999_999,
            },
        ],
        minimum_chain_work: ZERO_HASH,
        default_assume_valid: ZERO_HASH,
        governance: GovernanceParams {
            masternode_payments_start_block: 240,
            masternode_payments_increase_block: 350,
            masternode_payments_increase_period: 10,
            instant_send_keep_lock: 6,
            budget_payments_start_block: 1_000,
            budget_payments_cycle_blocks: 50,
            budget_payments_window_blocks: 10,
            budget_proposal_establishing_time: 60 * 20,
            superblock_start_block: 1_500,
            superblock_cycle: 10,
            governance_min_quorum: 1,
            governance_filter_elements: 100,
            masternode_minimum_confirmations: 1,
        },
    };

    Ok(ChainParams {
        network: Network::Regtest,
        checkpoints: CheckpointData {
            checkpoints: vec![Checkpoint {
                height: 0,
                hash: genesis_hash,
            }],
            last_checkpoint_time: 0,
            tx_count_at_checkpoint: 0,
            tx_per_day: 0.0,
        },
        consensus,
        genesis,
        expected_genesis_merkle_root: hash256_from_hex(GENESIS_MERKLE_ROOT)?,
        message_start: [0x75, 0x9e, 0x4e, 0xd6],
        default_port: 11_617,
        base58_prefixes: Base58Prefixes {
            pubkey_address: 112,
            script_address: 10,
            secret_key: 240,
            ext_public_key: [0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: [0x04, 0x35, 0x83, 0x94],
            ext_coin_type: [0x80, 0x00, 0x00, 0x01],
        },
        alert_public_key: None,
        spork_public_key: None,
        masternode_payments_public_key: None,
        max_tip_age: 6 * 60 * 60,
        prune_after_height: 1_000,
        pool_max_transactions: None,
        fulfilled_request_expire_time: 5 * 60,
        policy: PolicyFlags {
            mining_requires_peers: false,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
        },
        dns_seeds: &[],
        fixed_seeds: &[],
    })
}
