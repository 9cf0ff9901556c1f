//! Growable output buffer shared by both directions.
//!
//! The buffer keeps two lengths: `len()`, the bytes written so far, and
//! `capacity()`, the zero-filled bytes physically available. When a write
//! reaches capacity the buffer grows by a fixed increment chosen by the
//! caller ([`ENCODE_GROW_INCREMENT`](crate::config::ENCODE_GROW_INCREMENT)
//! for the encoder, [`DECODE_GROW_INCREMENT`](crate::config::DECODE_GROW_INCREMENT)
//! for the decoder). Growth preserves every byte already written.

use crate::error::HuffmanError;

/// Owned byte buffer with a logical length and a fixed-increment growth policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    /// Backing storage. Its length is the physical capacity; bytes past
    /// `written` are zero unless they hold the decoder's sentinel.
    data: Vec<u8>,
    written: usize,
    /// Byte budget. Growth past it reports `OutOfMemory`.
    limit: Option<usize>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `capacity` zeroed bytes.
    pub fn with_capacity(capacity: usize) -> Result<Self, HuffmanError> {
        Self::with_limit(capacity, None)
    }

    /// Allocate `capacity` zeroed bytes and cap all later growth at `limit`
    /// bytes. The initial capacity is clamped to the limit.
    pub fn with_limit(capacity: usize, limit: Option<usize>) -> Result<Self, HuffmanError> {
        let mut buf = Self {
            data: Vec::new(),
            written: 0,
            limit,
        };
        let capacity = limit.map_or(capacity, |max| capacity.min(max));
        buf.grow_by(capacity)?;
        Ok(buf)
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.written
    }

    pub fn is_empty(&self) -> bool {
        self.written == 0
    }

    /// Zero-filled bytes available without growing.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    /// The written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.written]
    }

    /// The written bytes followed by the zero sentinel, if the buffer has
    /// room for one past the written bytes.
    pub fn as_bytes_with_nul(&self) -> Option<&[u8]> {
        if self.written < self.data.len() {
            Some(&self.data[..=self.written])
        } else {
            None
        }
    }

    /// Forget the written bytes, keeping the capacity.
    ///
    /// Only the written bytes and the sentinel slot are zeroed; everything
    /// past them is already zero.
    pub fn clear(&mut self) {
        let end = (self.written + 1).min(self.data.len());
        self.data[..end].fill(0);
        self.written = 0;
    }

    /// Take the written bytes, dropping the spare capacity.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.truncate(self.written);
        self.data
    }

    /// Add `increment` zeroed bytes of capacity, or as many as the byte
    /// budget still allows.
    ///
    /// Fails with `OutOfMemory` if the allocator refuses, or if the buffer
    /// already sits at its budget and `increment` is non-zero. The buffer is
    /// unchanged on failure.
    pub fn grow_by(&mut self, increment: usize) -> Result<(), HuffmanError> {
        let capacity = self.data.len();
        let mut new_capacity = capacity
            .checked_add(increment)
            .ok_or(HuffmanError::OutOfMemory)?;
        if let Some(max) = self.limit {
            if new_capacity > max {
                if capacity >= max {
                    log::warn!("output buffer is at its limit of {} bytes", max);
                    return Err(HuffmanError::OutOfMemory);
                }
                new_capacity = max;
            }
        }
        let increment = new_capacity - capacity;
        self.data.try_reserve_exact(increment).map_err(|e| {
            log::warn!("output buffer growth by {} bytes failed: {}", increment, e);
            HuffmanError::OutOfMemory
        })?;
        self.data.resize(new_capacity, 0);
        if increment > 0 {
            log::trace!("output buffer grew to {} bytes", new_capacity);
        }
        Ok(())
    }

    /// Append one byte, growing by `increment` when the write position has
    /// reached capacity.
    pub fn push(&mut self, byte: u8, increment: usize) -> Result<(), HuffmanError> {
        if self.written >= self.data.len() {
            self.grow_by(increment.max(1))?;
        }
        self.data[self.written] = byte;
        self.written += 1;
        Ok(())
    }

    /// OR `bits` into the byte at `index`, growing by `increment` first when
    /// `index` has reached capacity. Marks every byte up to `index` written.
    pub(crate) fn or_at(
        &mut self,
        index: usize,
        bits: u8,
        increment: usize,
    ) -> Result<(), HuffmanError> {
        while index >= self.data.len() {
            self.grow_by(increment.max(1))?;
        }
        self.data[index] |= bits;
        self.written = self.written.max(index + 1);
        Ok(())
    }

    /// Write the zero sentinel just past the written bytes, growing by
    /// `increment` if the buffer is exactly full. The sentinel is not
    /// counted in `len()`.
    pub(crate) fn terminate(&mut self, increment: usize) -> Result<(), HuffmanError> {
        if self.written >= self.data.len() {
            self.grow_by(increment.max(1))?;
        }
        self.data[self.written] = 0;
        Ok(())
    }
}

impl AsRef<[u8]> for OutputBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for OutputBuffer {
    /// Reuse an existing allocation. Its current contents are discarded and
    /// its allocated capacity becomes the buffer's zero-filled capacity.
    fn from(mut data: Vec<u8>) -> Self {
        let capacity = data.capacity();
        data.clear();
        data.resize(capacity, 0);
        Self {
            data,
            written: 0,
            limit: None,
        }
    }
}
