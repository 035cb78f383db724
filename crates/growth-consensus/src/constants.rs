/// Base units per coin.
pub const COIN: i64 = 100_000_000;

pub const GENESIS_MESSAGE: &str =
    "ISS Tweets Photo Of Miami Prior To Superbowl Kick-Off - 2 Feb 2020";

/// Uncompressed public key the genesis reward is paid to. No private key is
/// known for it, so the output is never spent.
pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = [
    0x04, 0x91, 0x14, 0xe2, 0xdf, 0xc8, 0x84, 0x57, 0xdc, 0x2b, 0x1b, 0xfb, 0x2b, 0x6d,
    0x75, 0x1e, 0xc1, 0xfc, 0xab, 0xbe, 0x0f, 0xe4, 0xde, 0x4a, 0x10, 0xf4, 0x16, 0xc9,
    0x0b, 0x07, 0x0b, 0xb2, 0x2c, 0x08, 0x73, 0x45, 0x6e, 0x4b, 0x2f, 0x51, 0x99, 0x41,
    0x36, 0x65, 0xb2, 0xc3, 0xfc, 0x96, 0x5d, 0xfe, 0xb6, 0x70, 0x47, 0x7b, 0x3a, 0x2b,
    0x16, 0x3c, 0xef, 0x96, 0x89, 0x42, 0x68, 0x85, 0xfe,
];

pub const GENESIS_REWARD: i64 = 5_000 * COIN;
pub const GENESIS_VERSION: i32 = 1;

/// Leading script-number pushes of the genesis coinbase input.
pub const GENESIS_COINBASE_BITS_PUSH: i64 = 486_604_799;
pub const GENESIS_COINBASE_EXTRA_NONCE: i64 = 4;

pub const COINBASE_TX_VERSION: i32 = 1;

/// Version-bits signalling: top three bits must equal `001`.
pub const VERSIONBITS_TOP_BITS: i32 = 0x2000_0000;
pub const VERSIONBITS_TOP_MASK: u32 = 0xe000_0000;
/// Highest bit a deployment may use; 29..=31 carry the top-bits marker.
pub const VERSIONBITS_MAX_BIT: u8 = 28;

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
