use crate::compactsize::encode_compact_size;
use crate::error::{ChainError, ErrorCode};
use crate::hash::{sha256d, Hash256};
use crate::merkle::merkle_root_txids;
use crate::tx::{read_count, Transaction};
use crate::wire_read::Reader;

pub const BLOCK_HEADER_BYTES: usize = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn to_bytes(&self) -> [u8; BLOCK_HEADER_BYTES] {
        let mut out = [0u8; BLOCK_HEADER_BYTES];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(&self.prev_block_hash);
        out[36..68].copy_from_slice(&self.merkle_root);
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    pub fn hash(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }
}

pub fn parse_block_header_bytes(b: &[u8]) -> Result<BlockHeader, ChainError> {
    if b.len() != BLOCK_HEADER_BYTES {
        return Err(ChainError::new(
            ErrorCode::WireParse,
            format!("block header must be {BLOCK_HEADER_BYTES} bytes, got {}", b.len()),
        ));
    }

    let mut r = Reader::new(b);
    Ok(BlockHeader {
        version: r.read_i32_le()?,
        prev_block_hash: r.read_hash()?,
        merkle_root: r.read_hash()?,
        time: r.read_u32_le()?,
        bits: r.read_u32_le()?,
        nonce: r.read_u32_le()?,
    })
}

pub fn block_hash(header_bytes: &[u8]) -> Result<Hash256, ChainError> {
    if header_bytes.len() != BLOCK_HEADER_BYTES {
        return Err(ChainError::new(
            ErrorCode::WireParse,
            "block hash: invalid header length",
        ));
    }
    Ok(sha256d(header_bytes))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    pub fn compute_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        merkle_root_txids(&txids)
    }

    pub fn consensus_encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BLOCK_HEADER_BYTES + 256);
        out.extend_from_slice(&self.header.to_bytes());
        encode_compact_size(self.transactions.len() as u64, &mut out);
        for tx in &self.transactions {
            out.extend_from_slice(&tx.consensus_encode());
        }
        out
    }

    pub fn consensus_decode(bytes: &[u8]) -> Result<Self, ChainError> {
        if bytes.len() < BLOCK_HEADER_BYTES {
            return Err(ChainError::new(ErrorCode::WireParse, "block shorter than header"));
        }
        let header = parse_block_header_bytes(&bytes[..BLOCK_HEADER_BYTES])?;
        let mut r = Reader::new(&bytes[BLOCK_HEADER_BYTES..]);
        let tx_count = read_count(&mut r, "transaction")?;
        let mut transactions = Vec::with_capacity(tx_count);
        for _ in 0..tx_count {
            transactions.push(Transaction::decode_from(&mut r)?);
        }
        if r.remaining() != 0 {
            return Err(ChainError::new(
                ErrorCode::WireParse,
                format!("{} trailing bytes after block", r.remaining()),
            ));
        }
        Ok(Block {
            header,
            transactions,
        })
    }
}
