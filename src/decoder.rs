//! Huffman decoding.
//!
//! The decoder walks the input bit by bit offset, matching the shortest
//! codes first. Decoding ends when every bit is consumed, when fewer bits
//! remain than the next code length to try, or when nothing matches. What
//! happens to leftover bits depends on the [`PaddingPolicy`].

use std::sync::OnceLock;

use crate::bits::BitReader;
use crate::buffer::OutputBuffer;
use crate::config::{DecoderConfig, PaddingPolicy};
use crate::decode_table::{self, DecodeTable, Lookup};
use crate::error::HuffmanError;
use crate::table::{CodeEntry, EOS_SYMBOL};

/// Where a decoder gets its table.
#[derive(Debug)]
enum TableSource<'a> {
    /// The process-wide table built from the static code.
    Shared,
    /// A table owned by this decoder, built from `entries` on first use.
    Owned {
        entries: &'a [CodeEntry],
        table: OnceLock<DecodeTable>,
    },
}

/// Huffman decoder.
#[derive(Debug)]
pub struct Decoder<'a> {
    config: DecoderConfig,
    source: TableSource<'a>,
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder<'static> {
    /// Decoder using the process-wide table and default settings.
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            config,
            source: TableSource::Shared,
        }
    }
}

impl<'a> Decoder<'a> {
    /// Decoder with its own table built from `entries` on first use. A bad
    /// table surfaces as `InitializationFailed` from the first decode.
    pub fn with_entries(entries: &'a [CodeEntry], config: DecoderConfig) -> Self {
        Self {
            config,
            source: TableSource::Owned {
                entries,
                table: OnceLock::new(),
            },
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Build this decoder's table now rather than on the first decode.
    pub fn prewarm(&self) -> Result<(), HuffmanError> {
        self.table().map(|_| ())
    }

    fn table(&self) -> Result<&DecodeTable, HuffmanError> {
        match &self.source {
            TableSource::Shared => decode_table::shared(),
            TableSource::Owned { entries, table } => decode_table::get_or_build(table, entries),
        }
    }

    /// Decode `input` into a new vector.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>, HuffmanError> {
        let mut out = OutputBuffer::new();
        out.set_limit(self.config.max_output_len);
        self.decode_into(input, &mut out)?;
        Ok(out.into_vec())
    }

    /// Decode `input` into `out`, replacing its contents, and return the
    /// number of bytes decoded.
    ///
    /// An `out` with no capacity is first given `2 * input.len()` bytes. It
    /// grows by the configured increment whenever the write position reaches
    /// its capacity. On success a zero sentinel follows the decoded bytes
    /// when there is room for it. On `OutOfMemory` `out` keeps the bytes
    /// decoded before the failure.
    pub fn decode_into(&self, input: &[u8], out: &mut OutputBuffer) -> Result<usize, HuffmanError> {
        let table = self.table()?;
        let increment = self.config.grow_increment;

        out.clear();
        if out.capacity() == 0 {
            if out.limit().is_none() {
                out.set_limit(self.config.max_output_len);
            }
            let wanted = input.len().saturating_mul(2);
            out.grow_by(out.limit().map_or(wanted, |max| wanted.min(max)))?;
        }

        let reader = BitReader::new(input);
        let total = reader.total_bits();
        let mut offset = 0usize;

        while offset < total {
            match table.lookup(&reader, offset)? {
                Lookup::Symbol(entry) if entry.symbol == EOS_SYMBOL => {
                    if self.config.padding == PaddingPolicy::Strict {
                        log::warn!("EOS symbol in Huffman string at bit {}", offset);
                        return Err(HuffmanError::EosInStream { bit_offset: offset });
                    }
                    break;
                }
                Lookup::Symbol(entry) => {
                    out.push(entry.symbol as u8, increment)?;
                    offset += entry.length as usize;
                }
                Lookup::Truncated | Lookup::NoMatch => break,
            }
        }

        if self.config.padding == PaddingPolicy::Strict {
            check_padding(&reader, offset)?;
        }

        if out.terminate(increment).is_err() {
            log::trace!("no room for sentinel after {} decoded bytes", out.len());
        }
        Ok(out.len())
    }
}

/// RFC 7541 Section 5.2: at most 7 trailing bits, all of them ones.
fn check_padding(reader: &BitReader<'_>, offset: usize) -> Result<(), HuffmanError> {
    let remaining = reader.remaining(offset);
    if remaining > 7 {
        log::warn!("{} undecodable bits at end of Huffman string", remaining);
        return Err(HuffmanError::InvalidPadding { bit_offset: offset });
    }
    let bits = reader.peek(offset, remaining as u8)?;
    if bits != (1u32 << remaining) - 1 {
        log::warn!("Huffman padding {:#b} is not all ones", bits);
        return Err(HuffmanError::InvalidPadding { bit_offset: offset });
    }
    Ok(())
}
