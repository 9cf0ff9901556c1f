//! h2-huffman: the static Huffman code of HPACK as a standalone codec
//!
//! This crate encodes byte strings with the fixed, canonical Huffman code of
//! RFC 7541 Appendix B and decodes them back. The code covers 257 symbols:
//! every octet plus an end-of-string (EOS) pseudo-symbol used only to pad
//! the final byte.
//!
//! # Features
//!
//! - **Sans-I/O Design**: pure functions over byte slices, no runtime
//! - **Fixed Table**: one compiled-in code table, no per-input trees
//! - **Shared Decode Table**: built once per process behind a `OnceLock`,
//!   race-free under concurrent first use, or owned per [`Decoder`]
//! - **Explicit Growth Policy**: output buffers grow in fixed increments
//!   (100 bytes when encoding, 1000 when decoding) with an optional budget
//! - **Padding Policies**: tolerant by default, RFC 7541 strict on request
//!
//! # Quick Start
//!
//! ```rust
//! use h2_huffman::{decode_to_vec, encode};
//!
//! let packed = encode(b"www.example.com").unwrap();
//! assert_eq!(packed.len(), 12);
//!
//! let unpacked = decode_to_vec(&packed).unwrap();
//! assert_eq!(unpacked, b"www.example.com");
//! ```
//!
//! Reusing an output buffer across calls:
//!
//! ```rust
//! use h2_huffman::{decode, prewarm, OutputBuffer};
//!
//! prewarm().unwrap();
//! let mut out = OutputBuffer::with_capacity(64).unwrap();
//! let n = decode(&[0x18, 0xff], &mut out).unwrap();
//! assert_eq!(n, 2);
//! assert_eq!(out.as_bytes(), b"aa");
//! ```
//!
//! # Architecture
//!
//! This crate is intentionally minimal. It provides:
//! - The code table (symbol -> code)
//! - Encoding (bytes -> packed bits)
//! - Decoding (packed bits -> bytes)
//!
//! It does NOT provide:
//! - HPACK header blocks or the dynamic table
//! - HTTP/2 framing
//! - Streaming across multiple calls

mod bits;
pub mod buffer;
pub mod config;
pub mod decode_table;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod table;

pub use buffer::OutputBuffer;
pub use config::{
    DecoderConfig, EncoderConfig, PaddingPolicy, DECODE_GROW_INCREMENT, ENCODE_GROW_INCREMENT,
};
pub use decode_table::{prewarm, DecodeTable};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::HuffmanError;
pub use table::{
    encoded_len, entry_for_byte, entry_for_symbol, CodeEntry, EOS_SYMBOL, MAX_CODE_LENGTH,
    MIN_CODE_LENGTH, STATIC_TABLE, TABLE_SIZE,
};

/// Encode `input` with default settings. Empty input yields an empty vector.
pub fn encode(input: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    Encoder::new().encode(input)
}

/// Decode `input` into `output` with default settings and return the number
/// of bytes decoded. Pass `OutputBuffer::new()` to have one allocated.
pub fn decode(input: &[u8], output: &mut OutputBuffer) -> Result<usize, HuffmanError> {
    Decoder::new().decode_into(input, output)
}

/// Decode `input` into a new vector with default settings.
pub fn decode_to_vec(input: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    Decoder::new().decode(input)
}
