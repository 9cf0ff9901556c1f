//! Encoder and decoder settings.

/// Capacity added each time the encoder's output fills up.
pub const ENCODE_GROW_INCREMENT: usize = 100;

/// Capacity added each time the decoder's output fills up.
pub const DECODE_GROW_INCREMENT: usize = 1000;

/// How the decoder treats the bits left over after the last full symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingPolicy {
    /// Stop quietly at the first position where no code fits or matches and
    /// return what was decoded. A decoded EOS also ends the string. Malformed
    /// input is indistinguishable from padding.
    #[default]
    Tolerant,
    /// RFC 7541 Section 5.2: padding must be at most 7 bits, all ones, and
    /// EOS must never appear. Violations are errors.
    Strict,
}

/// Settings for [`Encoder`](crate::Encoder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Bytes added when the output fills up. Default: 100.
    pub grow_increment: usize,
    /// Byte budget for the output. Default: `None` (bounded only by the
    /// allocator).
    pub max_output_len: Option<usize>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            grow_increment: ENCODE_GROW_INCREMENT,
            max_output_len: None,
        }
    }
}

/// Settings for [`Decoder`](crate::Decoder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Bytes added when the output fills up. Default: 1000.
    pub grow_increment: usize,
    /// Byte budget for buffers the decoder allocates itself. Default: `None`.
    pub max_output_len: Option<usize>,
    /// Default: [`PaddingPolicy::Tolerant`].
    pub padding: PaddingPolicy,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            grow_increment: DECODE_GROW_INCREMENT,
            max_output_len: None,
            padding: PaddingPolicy::Tolerant,
        }
    }
}

impl DecoderConfig {
    /// Default settings with RFC 7541 padding validation.
    pub fn strict() -> Self {
        Self {
            padding: PaddingPolicy::Strict,
            ..Self::default()
        }
    }
}
