//! Tests decoding our Huffman output with fluke-hpack

use h2_huffman::encode;

/// Build a header block holding one "literal header field without indexing,
/// new name" (RFC 7541 6.2.2) whose name and value are Huffman coded.
fn literal_block(name: &[u8], value: &[u8]) -> Vec<u8> {
    let mut block = vec![0x00];
    for s in [name, value] {
        let packed = encode(s).unwrap();
        assert!(packed.len() < 127, "string too long for a one-byte length");
        block.push(0x80 | packed.len() as u8); // H bit + length
        block.extend_from_slice(&packed);
    }
    block
}

fn fluke_decode(block: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut decoder = fluke_hpack::Decoder::new();
    decoder
        .decode(block)
        .unwrap_or_else(|e| panic!("HPACK decode error: {:?}", e))
        .into_iter()
        .map(|(name, value)| (name.to_vec(), value.to_vec()))
        .collect()
}

#[test]
fn test_fluke_decodes_simple_header() {
    let block = literal_block(b"custom-key", b"custom-value");
    let headers = fluke_decode(&block);

    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].0, b"custom-key");
    assert_eq!(headers[0].1, b"custom-value");
}

#[test]
fn test_fluke_decodes_mixed_case_and_symbols() {
    let block = literal_block(b"x-request-id", b"abc-123-DEF_{}|~");
    let headers = fluke_decode(&block);

    assert_eq!(headers[0].0, b"x-request-id");
    assert_eq!(headers[0].1, b"abc-123-DEF_{}|~");
}

#[test]
fn test_fluke_decodes_binary_value() {
    let value: Vec<u8> = (0u8..16).chain(240..=255).collect();
    let block = literal_block(b"x-bin", &value);
    let headers = fluke_decode(&block);

    assert_eq!(headers[0].1, value);
}

#[test]
fn test_fluke_decodes_every_printable_byte() {
    let value: Vec<u8> = (0x20u8..0x7f).collect();
    // Split so each encoded half stays under the one-byte length prefix.
    for chunk in value.chunks(48) {
        let block = literal_block(b"x-chunk", chunk);
        let headers = fluke_decode(&block);
        assert_eq!(headers[0].1, chunk);
    }
}
