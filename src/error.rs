//! Error kinds surfaced by the encoder, the decoder and table construction.

/// Errors produced by the Huffman codec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HuffmanError {
    /// An output buffer or the decode table could not be allocated, or
    /// growing a buffer would exceed its configured byte budget.
    #[error("out of memory")]
    OutOfMemory,

    /// The decode table could not be built from its source entries.
    #[error("decode table initialization failed: {0}")]
    InitializationFailed(String),

    /// A state the fixed table can never produce.
    #[error("internal error: {0}")]
    Internal(String),

    /// Strict decoding only: trailing bits are longer than 7 bits or are not
    /// all ones (RFC 7541 Section 5.2).
    #[error("invalid padding at bit {bit_offset}")]
    InvalidPadding { bit_offset: usize },

    /// Strict decoding only: the EOS symbol appeared in the bitstream.
    #[error("EOS symbol decoded at bit {bit_offset}")]
    EosInStream { bit_offset: usize },
}
