//! Tests for the static code table

use h2_huffman::{entry_for_byte, entry_for_symbol, EOS_SYMBOL, STATIC_TABLE, TABLE_SIZE};

#[test]
fn test_table_has_257_unique_symbols() {
    assert_eq!(STATIC_TABLE.len(), TABLE_SIZE);
    let mut symbols: Vec<u16> = STATIC_TABLE.iter().map(|e| e.symbol).collect();
    symbols.sort_unstable();
    symbols.dedup();
    assert_eq!(symbols, (0..=256).collect::<Vec<u16>>());
}

#[test]
fn test_table_prefix_free() {
    for a in STATIC_TABLE.iter() {
        for b in STATIC_TABLE.iter() {
            if a.symbol == b.symbol {
                continue;
            }
            assert!(!a.is_prefix_of(b), "{} prefixes {}", a.symbol, b.symbol);
            assert!(!b.is_prefix_of(a), "{} prefixes {}", b.symbol, a.symbol);
        }
    }
}

#[test]
fn test_lookup_by_symbol_and_byte_agree() {
    for byte in 0..=255u8 {
        assert_eq!(Some(entry_for_byte(byte)), entry_for_symbol(byte as u16));
    }
    assert_eq!(entry_for_symbol(EOS_SYMBOL).map(|e| e.length), Some(30));
    assert_eq!(entry_for_symbol(300), None);
}
