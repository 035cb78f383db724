//! Consensus parameter definitions.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{ChainError, ErrorCode};
use crate::featurebits::{Bip9Deployment, DeploymentPos, MAX_VERSION_BITS_DEPLOYMENTS};
use crate::hash::{hash256_to_hex, Hash256};
use crate::pow::{decode_compact, hash_to_biguint, target_to_compact};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bip34Activation {
    pub height: u32,
    pub hash: Hash256,
}

/// Masternode, budget and governance knobs. Carried as opaque values for the
/// subsystems that consume them; nothing in this crate interprets them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GovernanceParams {
    pub masternode_payments_start_block: u32,
    pub masternode_payments_increase_block: u32,
    pub masternode_payments_increase_period: u32,
    pub instant_send_keep_lock: u32,
    pub budget_payments_start_block: u32,
    pub budget_payments_cycle_blocks: u32,
    pub budget_payments_window_blocks: u32,
    pub budget_proposal_establishing_time: i64,
    pub superblock_start_block: u32,
    pub superblock_cycle: u32,
    pub governance_min_quorum: u32,
    pub governance_filter_elements: u32,
    pub masternode_minimum_confirmations: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash256,
    pub subsidy_halving_interval: u32,
    pub majority_enforce_block_upgrade: u32,
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,
    /// `None` when BIP34 is not pinned to a height (regtest).
    pub bip34: Option<Bip34Activation>,
    pub pow_limit: Hash256,
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: [Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS],
    pub minimum_chain_work: Hash256,
    pub default_assume_valid: Hash256,
    pub governance: GovernanceParams,
}

impl ConsensusParams {
    pub fn deployment(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.deployments[pos.index()]
    }

    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    pub fn pow_limit_value(&self) -> BigUint {
        hash_to_biguint(&self.pow_limit)
    }

    pub fn pow_limit_bits(&self) -> u32 {
        target_to_compact(&self.pow_limit)
    }

    pub fn minimum_chain_work_value(&self) -> BigUint {
        hash_to_biguint(&self.minimum_chain_work)
    }

    /// Checks the internal promises of this parameter set.
    pub fn validate(&self) -> Result<(), ChainError> {
        let limit_bits = self.pow_limit_bits();
        let decoded = decode_compact(limit_bits);
        if !decoded.is_valid() || decoded.value.is_zero() {
            return Err(ChainError::new(
                ErrorCode::ParamsPowLimitInvalid,
                format!(
                    "pow limit {} is not representable as a compact target",
                    hash256_to_hex(&self.pow_limit)
                ),
            ));
        }

        if self.miner_confirmation_window == 0
            || self.rule_change_activation_threshold > self.miner_confirmation_window
        {
            return Err(ChainError::new(
                ErrorCode::ParamsThresholdInvalid,
                format!(
                    "activation threshold {} must not exceed confirmation window {}",
                    self.rule_change_activation_threshold, self.miner_confirmation_window
                ),
            ));
        }

        if self.pow_target_spacing <= 0 || self.pow_target_timespan < self.pow_target_spacing {
            return Err(ChainError::new(
                ErrorCode::ParamsThresholdInvalid,
                "pow target timespan must cover at least one positive spacing",
            ));
        }

        for pos in DeploymentPos::ALL {
            let d = self.deployment(pos);
            if !d.bit_in_range() {
                return Err(ChainError::new(
                    ErrorCode::ParamsDeploymentInvalid,
                    format!("deployment {} uses reserved bit {}", pos.as_str(), d.bit),
                ));
            }
            if d.start_time > d.timeout {
                return Err(ChainError::new(
                    ErrorCode::ParamsDeploymentInvalid,
                    format!("deployment {} starts after its timeout", pos.as_str()),
                ));
            }
        }
        for (i, a) in DeploymentPos::ALL.iter().enumerate() {
            for b in &DeploymentPos::ALL[i + 1..] {
                if self.deployment(*a).conflicts_with(self.deployment(*b)) {
                    return Err(ChainError::new(
                        ErrorCode::ParamsDeploymentInvalid,
                        format!(
                            "deployments {} and {} share bit {} over overlapping windows",
                            a.as_str(),
                            b.as_str(),
                            self.deployment(*a).bit
                        ),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Genesis `bits` must decode cleanly and stay within the pow limit.
    pub fn validate_genesis_bits(&self, bits: u32) -> Result<(), ChainError> {
        let decoded = decode_compact(bits);
        if !decoded.is_valid() {
            return Err(ChainError::new(
                ErrorCode::ParamsGenesisBitsInvalid,
                format!(
                    "genesis bits {bits:#010x} negative={} overflow={}",
                    decoded.negative, decoded.overflow
                ),
            ));
        }
        if decoded.value > self.pow_limit_value() {
            return Err(ChainError::new(
                ErrorCode::ParamsGenesisBitsInvalid,
                format!("genesis bits {bits:#010x} exceed the pow limit"),
            ));
        }
        Ok(())
    }
}
