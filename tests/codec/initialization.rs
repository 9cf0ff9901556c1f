//! Tests for decode table construction and first-use behavior

use h2_huffman::{
    decode_table, prewarm, CodeEntry, DecodeTable, Decoder, DecoderConfig, HuffmanError,
    OutputBuffer, STATIC_TABLE,
};

#[test]
fn test_prewarm_succeeds() {
    assert_eq!(prewarm(), Ok(()));
    // Idempotent.
    assert_eq!(prewarm(), Ok(()));
}

#[test]
fn test_shared_table_is_sorted_by_length() {
    let table = decode_table::shared().unwrap();
    let lengths: Vec<u8> = table.entries().iter().map(|e| e.length).collect();
    let mut sorted = lengths.clone();
    sorted.sort();
    assert_eq!(lengths, sorted);
}

#[test]
fn test_failed_construction_surfaces_on_decode() {
    // A source missing the EOS entry cannot be built.
    let decoder = Decoder::with_entries(&STATIC_TABLE[..256], DecoderConfig::default());
    let mut out = OutputBuffer::with_capacity(8).unwrap();
    let result = decoder.decode_into(&[0x1f], &mut out);
    assert!(
        matches!(result, Err(HuffmanError::InitializationFailed(_))),
        "got {:?}",
        result
    );
    assert!(out.is_empty());
}

#[test]
fn test_failed_construction_is_retried() {
    let decoder = Decoder::with_entries(&[], DecoderConfig::default());
    assert!(decoder.prewarm().is_err());
    assert!(decoder.prewarm().is_err());
}

#[test]
fn test_non_canonical_source_rejected() {
    let mut entries: Vec<CodeEntry> = STATIC_TABLE.to_vec();
    // Swap the codes of two 5-bit symbols so codes no longer ascend with
    // symbols inside the run.
    let (a, c) = (b'a' as usize, b'c' as usize);
    let tmp = entries[a].code;
    entries[a].code = entries[c].code;
    entries[c].code = tmp;
    let err = DecodeTable::build(&entries).unwrap_err();
    assert!(matches!(err, HuffmanError::InitializationFailed(_)));
}

#[test]
fn test_concurrent_first_use() {
    let decoder = Decoder::with_entries(&STATIC_TABLE, DecoderConfig::default());
    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                assert_eq!(decoder.decode(&[0x18, 0xff]).unwrap(), b"aa");
            });
        }
    });
}
