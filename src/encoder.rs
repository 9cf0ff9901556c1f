//! Huffman encoding.
//!
//! Codes are packed most significant bit first: each code fills the highest
//! unused bits of the current byte and spills into the following bytes. The
//! unused low-order bits of the final byte are set to 1, a prefix of the EOS
//! code, as RFC 7541 Section 5.2 requires.

use crate::buffer::OutputBuffer;
use crate::config::EncoderConfig;
use crate::error::HuffmanError;
use crate::table::entry_for_byte;

/// Initial output capacity for `input_len` bytes: 25% over the input length,
/// rounded up to a multiple of 4. Long codes can still overflow it, in which
/// case the buffer grows.
pub fn initial_capacity(input_len: usize) -> usize {
    input_len
        .saturating_mul(5)
        .div_ceil(4)
        .checked_next_multiple_of(4)
        .unwrap_or(usize::MAX)
}

/// Huffman encoder over the static table.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode `input`.
    ///
    /// Empty input yields an empty vector. If the output cannot grow, the
    /// partial output is dropped and `OutOfMemory` is returned.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>, HuffmanError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        let mut out = OutputBuffer::with_limit(
            initial_capacity(input.len()),
            self.config.max_output_len,
        )?;
        self.pack(input, &mut out)?;
        Ok(out.into_vec())
    }

    /// Encode `input` and append it to `dst`. Returns the number of bytes
    /// appended. `dst` is untouched on failure.
    pub fn encode_into(&self, input: &[u8], dst: &mut Vec<u8>) -> Result<usize, HuffmanError> {
        let encoded = self.encode(input)?;
        dst.try_reserve(encoded.len()).map_err(|_| HuffmanError::OutOfMemory)?;
        dst.extend_from_slice(&encoded);
        Ok(encoded.len())
    }

    fn pack(&self, input: &[u8], out: &mut OutputBuffer) -> Result<(), HuffmanError> {
        let increment = self.config.grow_increment;
        let mut bits_set = 0usize;

        for &byte in input {
            let entry = entry_for_byte(byte);
            let mut bits_left = entry.length as usize;
            while bits_left > 0 {
                let used = bits_set % 8;
                let take = bits_left.min(8 - used);
                let chunk = (entry.code >> (bits_left - take)) & ((1u32 << take) - 1);
                out.or_at(bits_set / 8, (chunk as u8) << (8 - used - take), increment)?;
                bits_set += take;
                bits_left -= take;
            }
        }

        let used = bits_set % 8;
        if used != 0 {
            out.or_at(bits_set / 8, 0xff >> used, increment)?;
        }
        Ok(())
    }
}
