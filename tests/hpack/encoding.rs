//! Tests for encoding against RFC 7541 Appendix C

use h2_huffman::{decode_to_vec, encode, Decoder, DecoderConfig};

/// Huffman-coded string literals from RFC 7541 C.4 and C.6.
const RFC_VECTORS: &[(&[u8], &[u8])] = &[
    (
        b"www.example.com",
        &[0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff],
    ),
    (b"no-cache", &[0xa8, 0xeb, 0x10, 0x64, 0x9c, 0xbf]),
    (b"custom-key", &[0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xa9, 0x7d, 0x7f]),
    (
        b"custom-value",
        &[0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xb8, 0xe8, 0xb4, 0xbf],
    ),
    (b"302", &[0x64, 0x02]),
    (b"private", &[0xae, 0xc3, 0x77, 0x1a, 0x4b]),
    (
        b"Mon, 21 Oct 2013 20:13:21 GMT",
        &[
            0xd0, 0x7a, 0xbe, 0x94, 0x10, 0x54, 0xd4, 0x44, 0xa8, 0x20, 0x05, 0x95, 0x04, 0x0b,
            0x81, 0x66, 0xe0, 0x82, 0xa6, 0x2d, 0x1b, 0xff,
        ],
    ),
    (
        b"https://www.example.com",
        &[
            0x9d, 0x29, 0xad, 0x17, 0x18, 0x63, 0xc7, 0x8f, 0x0b, 0x97, 0xc8, 0xe9, 0xae, 0x82,
            0xae, 0x43, 0xd3,
        ],
    ),
];

#[test]
fn test_encode_matches_rfc_vectors() {
    for &(plain, packed) in RFC_VECTORS {
        assert_eq!(
            encode(plain).unwrap(),
            packed,
            "encoding {:?}",
            String::from_utf8_lossy(plain)
        );
    }
}

#[test]
fn test_decode_matches_rfc_vectors() {
    for &(plain, packed) in RFC_VECTORS {
        assert_eq!(decode_to_vec(packed).unwrap(), plain);
    }
}

#[test]
fn test_rfc_vectors_pass_strict_decoding() {
    let decoder = Decoder::with_config(DecoderConfig::strict());
    for &(plain, packed) in RFC_VECTORS {
        assert_eq!(decoder.decode(packed).unwrap(), plain);
    }
}
