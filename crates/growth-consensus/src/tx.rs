use crate::compactsize::{encode_compact_size, read_compact_size};
use crate::error::{ChainError, ErrorCode};
use crate::hash::{sha256d, Hash256, ZERO_HASH};
use crate::script::Script;
use crate::wire_read::Reader;

/// Upper bound on declared element counts while decoding, to keep a hostile
/// length prefix from driving a huge allocation.
const MAX_DECODE_ITEMS: u64 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutPoint {
    pub hash: Hash256,
    pub index: u32,
}

impl OutPoint {
    pub fn null() -> Self {
        Self {
            hash: ZERO_HASH,
            index: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.hash == ZERO_HASH && self.index == u32::MAX
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOut {
    /// Amount in base units.
    pub value: i64,
    pub script_pubkey: Script,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    pub fn consensus_encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.version.to_le_bytes());
        encode_compact_size(self.inputs.len() as u64, &mut out);
        for input in &self.inputs {
            out.extend_from_slice(&input.prevout.hash);
            out.extend_from_slice(&input.prevout.index.to_le_bytes());
            encode_script(&input.script_sig, &mut out);
            out.extend_from_slice(&input.sequence.to_le_bytes());
        }
        encode_compact_size(self.outputs.len() as u64, &mut out);
        for output in &self.outputs {
            out.extend_from_slice(&output.value.to_le_bytes());
            encode_script(&output.script_pubkey, &mut out);
        }
        out.extend_from_slice(&self.lock_time.to_le_bytes());
        out
    }

    /// Decodes one transaction from the front of `r`.
    pub fn decode_from(r: &mut Reader<'_>) -> Result<Self, ChainError> {
        let version = r.read_i32_le()?;

        let input_count = read_count(r, "input")?;
        let mut inputs = Vec::with_capacity(input_count);
        for _ in 0..input_count {
            let hash = r.read_hash()?;
            let index = r.read_u32_le()?;
            let script_sig = decode_script(r)?;
            let sequence = r.read_u32_le()?;
            inputs.push(TxIn {
                prevout: OutPoint { hash, index },
                script_sig,
                sequence,
            });
        }

        let output_count = read_count(r, "output")?;
        let mut outputs = Vec::with_capacity(output_count);
        for _ in 0..output_count {
            let value = r.read_i64_le()?;
            let script_pubkey = decode_script(r)?;
            outputs.push(TxOut {
                value,
                script_pubkey,
            });
        }

        let lock_time = r.read_u32_le()?;
        Ok(Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    /// Decodes a buffer holding exactly one transaction.
    pub fn consensus_decode(bytes: &[u8]) -> Result<Self, ChainError> {
        let mut r = Reader::new(bytes);
        let tx = Self::decode_from(&mut r)?;
        if r.remaining() != 0 {
            return Err(ChainError::new(
                ErrorCode::WireParse,
                format!("{} trailing bytes after transaction", r.remaining()),
            ));
        }
        Ok(tx)
    }

    pub fn txid(&self) -> Hash256 {
        sha256d(&self.consensus_encode())
    }
}

fn encode_script(script: &Script, out: &mut Vec<u8>) {
    encode_compact_size(script.len() as u64, out);
    out.extend_from_slice(script.as_bytes());
}

fn decode_script(r: &mut Reader<'_>) -> Result<Script, ChainError> {
    let len = read_compact_size(r)?;
    if len > r.remaining() as u64 {
        return Err(ChainError::new(
            ErrorCode::WireParse,
            "script length exceeds remaining bytes",
        ));
    }
    Ok(Script::from_bytes(r.read_bytes(len as usize)?.to_vec()))
}

pub(crate) fn read_count(r: &mut Reader<'_>, what: &str) -> Result<usize, ChainError> {
    let n = read_compact_size(r)?;
    if n > MAX_DECODE_ITEMS {
        return Err(ChainError::new(
            ErrorCode::WireParse,
            format!("{what} count {n} exceeds decode limit"),
        ));
    }
    Ok(n as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tx() -> Transaction {
        Transaction {
            version: 1,
            inputs: vec![TxIn {
                prevout: OutPoint::null(),
                script_sig: Script::new().push_int(486_604_799).push_slice(b"msg"),
                sequence: u32::MAX,
            }],
            outputs: vec![TxOut {
                value: 50 * 100_000_000,
                script_pubkey: Script::new().push_slice(&[0x02; 33]).push_opcode(0xac),
            }],
            lock_time: 0,
        }
    }

    #[test]
    fn coinbase_layout() {
        let tx = sample_tx();
        assert!(tx.is_coinbase());
        let bytes = tx.consensus_encode();
        // version | 1 input | null prevout
        assert_eq!(&bytes[..5], &[0x01, 0x00, 0x00, 0x00, 0x01]);
        assert!(bytes[5..37].iter().all(|b| *b == 0));
        assert_eq!(&bytes[37..41], &[0xff; 4]);
        assert_eq!(&bytes[bytes.len() - 4..], &[0x00; 4]);
    }

    #[test]
    fn decode_recovers_encoded_transaction() {
        let tx = sample_tx();
        let decoded = Transaction::consensus_decode(&tx.consensus_encode()).expect("decode");
        assert_eq!(decoded, tx);
        assert_eq!(decoded.txid(), tx.txid());
    }

    #[test]
    fn decode_rejects_trailing_and_truncated() {
        let mut bytes = sample_tx().consensus_encode();
        bytes.push(0x00);
        assert_eq!(
            Transaction::consensus_decode(&bytes).unwrap_err().code,
            ErrorCode::WireParse
        );
        bytes.truncate(bytes.len() - 3);
        assert_eq!(
            Transaction::consensus_decode(&bytes).unwrap_err().code,
            ErrorCode::WireParse
        );
    }

    #[test]
    fn decode_rejects_oversized_counts() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1i32.to_le_bytes());
        bytes.extend_from_slice(&[0xfe, 0xff, 0xff, 0xff, 0x00]);
        assert_eq!(
            Transaction::consensus_decode(&bytes).unwrap_err().code,
            ErrorCode::WireParse
        );
    }
}
