//! Big-endian bit window over a byte slice.

use crate::error::HuffmanError;

/// Widest window [`BitReader::peek`] can return.
pub(crate) const MAX_PEEK_BITS: u8 = 32;

#[derive(Debug, Clone, Copy)]
pub(crate) struct BitReader<'a> {
    data: &'a [u8],
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub(crate) fn total_bits(&self) -> usize {
        self.data.len() * 8
    }

    pub(crate) fn remaining(&self, offset: usize) -> usize {
        self.total_bits().saturating_sub(offset)
    }

    /// Read `len` bits starting `offset` bits into the data, most significant
    /// bit first. Bits past the end of the data read as zero.
    pub(crate) fn peek(&self, offset: usize, len: u8) -> Result<u32, HuffmanError> {
        if len > MAX_PEEK_BITS {
            return Err(HuffmanError::Internal(format!(
                "code length {} exceeds {}-bit window",
                len, MAX_PEEK_BITS
            )));
        }
        if len == 0 {
            return Ok(0);
        }
        let first = offset / 8;
        let shift = (offset % 8) as u32;
        // Five bytes cover any 32-bit read at any bit alignment.
        let mut window = 0u64;
        for i in 0..5 {
            let byte = self.data.get(first + i).copied().unwrap_or(0);
            window = (window << 8) | byte as u64;
        }
        Ok(((window << (24 + shift)) >> (64 - len as u32)) as u32)
    }
}
