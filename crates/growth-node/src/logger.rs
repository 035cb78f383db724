use env_logger::Builder;
use log::{info, LevelFilter};

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Installs the global logger. Only the node and consensus crates log at the
/// requested level; everything else stays at `warn`.
pub fn init_logger(log_level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .filter(None, LevelFilter::Warn)
        .filter(Some("growth_node"), log_level)
        .filter(Some("growth_consensus"), log_level);

    builder.init();

    info!("Logger initialized with log-level: {log_level}");
}
