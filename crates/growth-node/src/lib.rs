pub mod config;
pub mod logger;
pub mod startup;

pub use config::{resolve, CliSelection, NodeConfig, ResolvedConfig};
pub use startup::{exit_code, render_genesis, render_summary, start};
