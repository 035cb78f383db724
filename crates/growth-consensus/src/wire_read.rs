use crate::error::{ChainError, ErrorCode};

pub struct Reader<'a> {
    b: &'a [u8],
    off: usize,
}

impl<'a> Reader<'a> {
    pub fn new(b: &'a [u8]) -> Self {
        Self { b, off: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.b.len() - self.off
    }

    fn take<const N: usize>(&mut self, what: &'static str) -> Result<[u8; N], ChainError> {
        if self.off + N > self.b.len() {
            return Err(ChainError::new(
                ErrorCode::WireParse,
                format!("unexpected EOF ({what})"),
            ));
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.b[self.off..self.off + N]);
        self.off += N;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, ChainError> {
        Ok(self.take::<1>("u8")?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16, ChainError> {
        Ok(u16::from_le_bytes(self.take("u16le")?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, ChainError> {
        Ok(u32::from_le_bytes(self.take("u32le")?))
    }

    pub fn read_i32_le(&mut self) -> Result<i32, ChainError> {
        Ok(i32::from_le_bytes(self.take("i32le")?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, ChainError> {
        Ok(u64::from_le_bytes(self.take("u64le")?))
    }

    pub fn read_i64_le(&mut self) -> Result<i64, ChainError> {
        Ok(i64::from_le_bytes(self.take("i64le")?))
    }

    pub fn read_hash(&mut self) -> Result<[u8; 32], ChainError> {
        self.take("hash")
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], ChainError> {
        if n > self.remaining() {
            return Err(ChainError::new(
                ErrorCode::WireParse,
                "unexpected EOF (bytes)",
            ));
        }
        let v = &self.b[self.off..self.off + n];
        self.off += n;
        Ok(v)
    }
}
