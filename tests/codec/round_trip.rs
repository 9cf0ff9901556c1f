//! Round-trip tests: decode(encode(s)) == s

use h2_huffman::{decode_to_vec, encode, Decoder, DecoderConfig};
use proptest::prelude::*;

#[test]
fn test_round_trip_header_values() {
    let cases: &[&[u8]] = &[
        b"a",
        b"hello",
        b"www.example.com",
        b"Mon, 21 Oct 2013 20:13:21 GMT",
        b"text/html; charset=utf-8",
        b"foo=ASDJKHQKBZXOQWEOPIUAXQWEOIU; max-age=3600; version=1",
    ];
    for &input in cases {
        let packed = encode(input).unwrap();
        assert_eq!(decode_to_vec(&packed).unwrap(), input, "input {:?}", input);
    }
}

#[test]
fn test_round_trip_every_byte_value() {
    let input: Vec<u8> = (0..=255).collect();
    let packed = encode(&input).unwrap();
    assert_eq!(decode_to_vec(&packed).unwrap(), input);
}

proptest! {
    #[test]
    fn prop_round_trip(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let packed = encode(&input).unwrap();
        prop_assert_eq!(decode_to_vec(&packed).unwrap(), input);
    }

    #[test]
    fn prop_round_trip_strict(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        let decoder = Decoder::with_config(DecoderConfig::strict());
        let packed = encode(&input).unwrap();
        prop_assert_eq!(decoder.decode(&packed).unwrap(), input);
    }

    #[test]
    fn prop_truncation_yields_prefix(
        input in proptest::collection::vec(any::<u8>(), 1..128),
        cut in 0usize..64,
    ) {
        let packed = encode(&input).unwrap();
        let keep = packed.len().saturating_sub(cut % (packed.len() + 1));
        let partial = decode_to_vec(&packed[..keep]).unwrap();
        prop_assert!(input.starts_with(&partial));
    }
}
