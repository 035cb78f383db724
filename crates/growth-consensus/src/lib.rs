pub mod block;
pub mod chainparams;
pub mod checkpoints;
mod compactsize;
pub mod constants;
pub mod error;
pub mod featurebits;
pub mod genesis;
mod hash;
pub mod merkle;
pub mod params;
pub mod pow;
pub mod registry;
pub mod script;
pub mod tx;
mod wire_read;

pub use block::{block_hash, parse_block_header_bytes, Block, BlockHeader, BLOCK_HEADER_BYTES};
pub use chainparams::{chain_params, verified_chain_params, ChainParams, Network};
pub use checkpoints::{Checkpoint, CheckpointData};
pub use error::{ChainError, ErrorCategory, ErrorCode};
pub use featurebits::{Bip9Deployment, DeploymentPos, ThresholdState};
pub use genesis::{build_genesis_block, mine_genesis_nonce, verify_genesis, GenesisSpec};
pub use hash::{hash256_from_hex, hash256_to_hex, sha256d, Hash256, ZERO_HASH};
pub use merkle::merkle_root_txids;
pub use params::ConsensusParams;
pub use pow::{block_proof, compact_to_target, decode_compact, encode_compact, DecodedCompact};
pub use registry::ChainParamsRegistry;
pub use script::Script;
pub use tx::{OutPoint, Transaction, TxIn, TxOut};

#[cfg(test)]
mod featurebits_tests;
