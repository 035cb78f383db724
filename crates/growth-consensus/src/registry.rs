//! Selection of the active network.
//!
//! Parameters are built and verified once, then handed out as an immutable
//! shared context. Callers that need them on another thread clone the `Arc`
//! returned by [`ChainParamsRegistry::select`].

use std::sync::Arc;

use log::{error, info, warn};

use crate::chainparams::{chain_params, ChainParams, Network};
use crate::error::ChainError;
use crate::hash::hash256_to_hex;
use crate::params::ConsensusParams;

#[derive(Debug, Default)]
pub struct ChainParamsRegistry {
    active: Option<Arc<ChainParams>>,
}

impl ChainParamsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the parameters for `id` without touching the active selection
    /// and without verifying them.
    pub fn params_for(id: &str) -> Result<ChainParams, ChainError> {
        let network: Network = id.parse()?;
        chain_params(network)
    }

    /// Builds, verifies and activates the parameters for `id`.
    ///
    /// On failure the previous selection, if any, stays active.
    pub fn select(&mut self, id: &str) -> Result<Arc<ChainParams>, ChainError> {
        let params = match Self::params_for(id).and_then(|p| p.verify().map(|()| p)) {
            Ok(p) => p,
            Err(err) => {
                error!("chain params selection failed for {id:?}: {err}");
                return Err(err);
            }
        };

        if let Some(prev) = &self.active {
            if prev.network != params.network {
                warn!(
                    "replacing active chain {} with {}",
                    prev.network, params.network
                );
            }
        }
        info!(
            "selected chain {} genesis={} port={}",
            params.network,
            hash256_to_hex(&params.consensus.hash_genesis_block),
            params.default_port
        );

        let params = Arc::new(params);
        self.active = Some(Arc::clone(&params));
        Ok(params)
    }

    pub fn try_active(&self) -> Option<&ChainParams> {
        self.active.as_deref()
    }

    /// Parameters of the active network.
    ///
    /// # Panics
    ///
    /// Panics if no network has been selected. Selecting a network is a
    /// startup precondition for every consumer.
    pub fn active_chain(&self) -> &ChainParams {
        match self.active.as_deref() {
            Some(params) => params,
            None => panic!("no chain selected; call ChainParamsRegistry::select first"),
        }
    }

    /// Consensus rules of the active network. Same precondition as
    /// [`Self::active_chain`].
    pub fn active(&self) -> &ConsensusParams {
        &self.active_chain().consensus
    }
}
