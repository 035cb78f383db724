use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Parameter data contradicts its own promises; the process must not continue.
    Fatal,
    /// Bad selector or configuration input; the caller reports and exits cleanly.
    Config,
    /// A compact target carried a negative sign or overflowed 256 bits.
    Arithmetic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    ConfigUnknownNetwork,
    ConfigConflictingNetwork,
    ConfigFileInvalid,

    GenesisHashMismatch,
    GenesisMerkleMismatch,
    GenesisStructureInvalid,
    ParamsPowLimitInvalid,
    ParamsGenesisBitsInvalid,
    ParamsThresholdInvalid,
    ParamsDeploymentInvalid,
    ParamsCheckpointsInvalid,

    CompactNegative,
    CompactOverflow,

    WireParse,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ConfigUnknownNetwork => "CONFIG_UNKNOWN_NETWORK",
            ErrorCode::ConfigConflictingNetwork => "CONFIG_CONFLICTING_NETWORK",
            ErrorCode::ConfigFileInvalid => "CONFIG_FILE_INVALID",

            ErrorCode::GenesisHashMismatch => "GENESIS_HASH_MISMATCH",
            ErrorCode::GenesisMerkleMismatch => "GENESIS_MERKLE_MISMATCH",
            ErrorCode::GenesisStructureInvalid => "GENESIS_STRUCTURE_INVALID",
            ErrorCode::ParamsPowLimitInvalid => "PARAMS_POW_LIMIT_INVALID",
            ErrorCode::ParamsGenesisBitsInvalid => "PARAMS_GENESIS_BITS_INVALID",
            ErrorCode::ParamsThresholdInvalid => "PARAMS_THRESHOLD_INVALID",
            ErrorCode::ParamsDeploymentInvalid => "PARAMS_DEPLOYMENT_INVALID",
            ErrorCode::ParamsCheckpointsInvalid => "PARAMS_CHECKPOINTS_INVALID",

            ErrorCode::CompactNegative => "COMPACT_NEGATIVE",
            ErrorCode::CompactOverflow => "COMPACT_OVERFLOW",

            ErrorCode::WireParse => "WIRE_PARSE",
        }
    }

    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorCode::ConfigUnknownNetwork
            | ErrorCode::ConfigConflictingNetwork
            | ErrorCode::ConfigFileInvalid
            | ErrorCode::WireParse => ErrorCategory::Config,

            ErrorCode::GenesisHashMismatch
            | ErrorCode::GenesisMerkleMismatch
            | ErrorCode::GenesisStructureInvalid
            | ErrorCode::ParamsPowLimitInvalid
            | ErrorCode::ParamsGenesisBitsInvalid
            | ErrorCode::ParamsThresholdInvalid
            | ErrorCode::ParamsDeploymentInvalid
            | ErrorCode::ParamsCheckpointsInvalid => ErrorCategory::Fatal,

            ErrorCode::CompactNegative | ErrorCode::CompactOverflow => ErrorCategory::Arithmetic,
        }
    }

    pub fn is_fatal(self) -> bool {
        self.category() == ErrorCategory::Fatal
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainError {
    pub code: ErrorCode,
    pub msg: String,
}

impl ChainError {
    pub fn new(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.msg)
        }
    }
}

impl std::error::Error for ChainError {}
