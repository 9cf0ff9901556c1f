//! Integration tests for the Huffman codec

mod initialization;
mod round_trip;
mod table;
