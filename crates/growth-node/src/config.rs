//! Node configuration: an optional JSON file overlaid by command-line flags.

use std::fs;
use std::path::Path;

use growth_consensus::{ChainError, ErrorCode, Network};
use log::LevelFilter;
use serde::Deserialize;

use crate::logger::parse_level;

pub const DEFAULT_NETWORK: Network = Network::Main;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Contents of the `--config` file. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    pub network: Option<String>,
    pub log_level: Option<String>,
}

impl NodeConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ChainError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            ChainError::new(
                ErrorCode::ConfigFileInvalid,
                format!("read {}: {e}", path.display()),
            )
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            ChainError::new(
                ErrorCode::ConfigFileInvalid,
                format!("parse {}: {e}", path.display()),
            )
        })
    }
}

/// Network and logging choices taken from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliSelection {
    pub network: Option<String>,
    pub testnet: bool,
    pub regtest: bool,
    pub log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub network: Network,
    pub log_level: LevelFilter,
}

fn conflict(msg: String) -> ChainError {
    ChainError::new(ErrorCode::ConfigConflictingNetwork, msg)
}

/// Applies precedence: command line, then config file, then defaults.
pub fn resolve(cli: &CliSelection, file: Option<&NodeConfig>) -> Result<ResolvedConfig, ChainError> {
    if cli.testnet && cli.regtest {
        return Err(conflict("--testnet and --regtest are mutually exclusive".into()));
    }
    let shorthand = if cli.testnet {
        Some(Network::Test)
    } else if cli.regtest {
        Some(Network::Regtest)
    } else {
        None
    };

    let network = match (cli.network.as_deref(), shorthand) {
        (Some(id), Some(short)) => {
            let explicit: Network = id.parse()?;
            if explicit != short {
                return Err(conflict(format!(
                    "--network {explicit} conflicts with --{}",
                    if short == Network::Test { "testnet" } else { "regtest" }
                )));
            }
            explicit
        }
        (Some(id), None) => id.parse()?,
        (None, Some(short)) => short,
        (None, None) => match file.and_then(|f| f.network.as_deref()) {
            Some(id) => id.parse()?,
            None => DEFAULT_NETWORK,
        },
    };

    let log_level = match cli
        .log_level
        .as_deref()
        .or_else(|| file.and_then(|f| f.log_level.as_deref()))
    {
        Some(level) => parse_level(level).ok_or_else(|| {
            ChainError::new(
                ErrorCode::ConfigFileInvalid,
                format!("unsupported log level {level:?}"),
            )
        })?,
        None => DEFAULT_LOG_LEVEL,
    };

    Ok(ResolvedConfig { network, log_level })
}
