//! Selects and verifies the chain parameters, then reports what was chosen.

use std::fmt::Write as _;
use std::sync::Arc;

use growth_consensus::{
    hash256_to_hex, ChainError, ChainParams, ChainParamsRegistry, ErrorCategory, Network,
};
use log::info;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FATAL: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;

pub fn exit_code(err: &ChainError) -> i32 {
    match err.category() {
        ErrorCategory::Config => EXIT_CONFIG,
        ErrorCategory::Fatal | ErrorCategory::Arithmetic => EXIT_FATAL,
    }
}

/// Runs chain selection once. The returned parameters are immutable and may
/// be shared with any number of readers.
pub fn start(network: Network) -> Result<Arc<ChainParams>, ChainError> {
    // The registry logs selection failures; callers only report them.
    let params = ChainParamsRegistry::new().select(network.as_str())?;
    info!(
        "chain parameters ready: network={} checkpoints={}",
        params.network,
        params.checkpoints.checkpoints.len()
    );
    Ok(params)
}

pub fn render_summary(params: &ChainParams) -> String {
    let c = &params.consensus;
    let mut out = String::new();
    let _ = writeln!(out, "network: {}", params.network);
    let _ = writeln!(out, "genesis: {}", hash256_to_hex(&c.hash_genesis_block));
    let _ = writeln!(out, "port: {}", params.default_port);
    let _ = writeln!(out, "magic: {}", hex::encode(params.message_start));
    let _ = writeln!(out, "pow_limit_bits: {:#010x}", c.pow_limit_bits());
    let _ = writeln!(out, "target_spacing: {}", c.pow_target_spacing);
    let _ = writeln!(out, "halving_interval: {}", c.subsidy_halving_interval);
    let _ = writeln!(
        out,
        "activation: {}/{}",
        c.rule_change_activation_threshold, c.miner_confirmation_window
    );
    out
}

pub fn render_genesis(params: &ChainParams) -> String {
    let header = &params.genesis.header;
    let mut out = String::new();
    let _ = writeln!(out, "hash: {}", hash256_to_hex(&params.genesis.hash()));
    let _ = writeln!(out, "merkle_root: {}", hash256_to_hex(&header.merkle_root));
    let _ = writeln!(out, "version: {}", header.version);
    let _ = writeln!(out, "time: {}", header.time);
    let _ = writeln!(out, "bits: {:#010x}", header.bits);
    let _ = writeln!(out, "nonce: {}", header.nonce);
    let _ = writeln!(out, "block: {}", hex::encode(params.genesis.consensus_encode()));
    out
}
