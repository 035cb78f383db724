//! Soft-fork deployment descriptors (BIP9 version bits).
//!
//! Only the parameter shapes and the per-window transition rule live here.
//! Walking the chain, computing median time past and tallying signals
//! belongs to the validation engine.

use crate::constants::{VERSIONBITS_MAX_BIT, VERSIONBITS_TOP_BITS, VERSIONBITS_TOP_MASK};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeploymentPos {
    TestDummy,
    /// BIP68, BIP112 and BIP113.
    Csv,
}

impl DeploymentPos {
    pub const ALL: [DeploymentPos; 2] = [DeploymentPos::TestDummy, DeploymentPos::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Csv => "csv",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = DeploymentPos::ALL.len();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bip9Deployment {
    pub bit: u8,
    /// Median time past at which signalling may begin (UNIX seconds).
    pub start_time: i64,
    /// Median time past after which an unlocked deployment fails (UNIX seconds).
    pub timeout: i64,
}

impl Bip9Deployment {
    /// Version bit for this deployment; bits outside the signalling range have an empty mask.
    pub fn mask(&self) -> u32 {
        if self.bit_in_range() {
            1u32 << self.bit
        } else {
            0
        }
    }

    pub fn bit_in_range(&self) -> bool {
        self.bit <= VERSIONBITS_MAX_BIT
    }

    /// Whether two deployments could be signalling on the same bit at the same time.
    pub fn conflicts_with(&self, other: &Bip9Deployment) -> bool {
        self.bit == other.bit && self.start_time < other.timeout && other.start_time < self.timeout
    }
}

/// True when a block version signals readiness for `bit`.
pub fn version_signals(version: i32, bit: u8) -> bool {
    bit <= VERSIONBITS_MAX_BIT
        && (version as u32 & VERSIONBITS_TOP_MASK) == VERSIONBITS_TOP_BITS as u32
        && (version as u32 & (1u32 << bit)) != 0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdState {
    Defined,
    Started,
    LockedIn,
    Active,
    Failed,
}

impl ThresholdState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdState::Defined => "DEFINED",
            ThresholdState::Started => "STARTED",
            ThresholdState::LockedIn => "LOCKED_IN",
            ThresholdState::Active => "ACTIVE",
            ThresholdState::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ThresholdState::Active | ThresholdState::Failed)
    }

    /// State of the next confirmation window given the facts of the window
    /// that just closed.
    pub fn next(self, d: &Bip9Deployment, window: &WindowSummary) -> ThresholdState {
        match self {
            ThresholdState::Defined => {
                if window.median_time_past >= d.timeout {
                    ThresholdState::Failed
                } else if window.median_time_past >= d.start_time {
                    ThresholdState::Started
                } else {
                    ThresholdState::Defined
                }
            }
            ThresholdState::Started => {
                if window.median_time_past >= d.timeout {
                    ThresholdState::Failed
                } else if window.signal_count >= window.threshold {
                    ThresholdState::LockedIn
                } else {
                    ThresholdState::Started
                }
            }
            ThresholdState::LockedIn => ThresholdState::Active,
            ThresholdState::Active => ThresholdState::Active,
            ThresholdState::Failed => ThresholdState::Failed,
        }
    }
}

/// What the validation engine observed over one closed confirmation window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSummary {
    pub median_time_past: i64,
    pub signal_count: u32,
    pub threshold: u32,
}
