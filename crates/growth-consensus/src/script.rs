//! Minimal script construction for the genesis coinbase.

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_CHECKSIG: u8 = 0xac;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push_opcode(mut self, op: u8) -> Self {
        self.0.push(op);
        self
    }

    /// Pushes `data` with the smallest push opcode that can carry its length.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let n = data.len();
        if n < OP_PUSHDATA1 as usize {
            self.0.push(n as u8);
        } else if n <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(n as u8);
        } else if n <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(n as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(n as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Pushes an integer: small values become `OP_1NEGATE`/`OP_0`/`OP_1..OP_16`,
    /// anything else a minimal script number.
    pub fn push_int(self, n: i64) -> Self {
        match n {
            -1 => self.push_opcode(OP_1NEGATE),
            0 => self.push_opcode(OP_0),
            1..=16 => self.push_opcode(OP_1 + (n as u8 - 1)),
            _ => {
                let encoded = script_num_bytes(n);
                self.push_slice(&encoded)
            }
        }
    }

    /// Pushes the script-number encoding of `n` as data, never as a small-int opcode.
    pub fn push_script_num(self, n: i64) -> Self {
        let encoded = script_num_bytes(n);
        self.push_slice(&encoded)
    }

    /// Iterates the data pushes, stopping at the first non-push opcode.
    pub fn pushed_data(&self) -> Vec<&[u8]> {
        let mut out = Vec::new();
        let b = &self.0;
        let mut i = 0usize;
        while i < b.len() {
            let op = b[i];
            i += 1;
            let len = match op {
                OP_0 => 0,
                0x01..=0x4b => op as usize,
                OP_PUSHDATA1 if i < b.len() => {
                    i += 1;
                    b[i - 1] as usize
                }
                OP_PUSHDATA2 if i + 2 <= b.len() => {
                    i += 2;
                    u16::from_le_bytes([b[i - 2], b[i - 1]]) as usize
                }
                OP_PUSHDATA4 if i + 4 <= b.len() => {
                    i += 4;
                    u32::from_le_bytes([b[i - 4], b[i - 3], b[i - 2], b[i - 1]]) as usize
                }
                _ => break,
            };
            if len > b.len() - i {
                break;
            }
            out.push(&b[i..i + len]);
            i += len;
        }
        out
    }
}

/// Little-endian sign-magnitude encoding with minimal length.
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

/// `<pubkey> OP_CHECKSIG`
pub fn pay_to_pubkey_script(pubkey: &[u8]) -> Script {
    Script::new().push_slice(pubkey).push_opcode(OP_CHECKSIG)
}
