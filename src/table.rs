//! The static Huffman code of HPACK (RFC 7541 Appendix B).
//!
//! Every octet value has a code between 5 and 30 bits long; index 256 holds
//! the end-of-string (EOS) pseudo-symbol, whose code is 30 one-bits and is
//! only ever used (as a prefix) to pad the final byte of an encoded string.

/// Number of symbols in the alphabet: 256 octets plus EOS.
pub const TABLE_SIZE: usize = 257;

/// The end-of-string pseudo-symbol.
pub const EOS_SYMBOL: u16 = 256;

/// Length of the shortest code in the table.
pub const MIN_CODE_LENGTH: u8 = 5;

/// Length of the longest code in the table.
pub const MAX_CODE_LENGTH: u8 = 30;

/// One symbol of the alphabet and its code.
///
/// The low `length` bits of `code` hold the code, most significant bit
/// first on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: u16,
    pub code: u32,
    pub length: u8,
}

impl CodeEntry {
    /// True if this entry's code is a bit-prefix of `other`'s code.
    pub fn is_prefix_of(&self, other: &CodeEntry) -> bool {
        self.length <= other.length
            && other.code >> (other.length - self.length) == self.code
    }
}

const fn entry(symbol: u16, code: u32, length: u8) -> CodeEntry {
    CodeEntry { symbol, code, length }
}

/// The code table, indexed by symbol.
pub static STATIC_TABLE: [CodeEntry; TABLE_SIZE] = [
    entry(0, 0x1ff8, 13),
    entry(1, 0x7fffd8, 23),
    entry(2, 0xfffffe2, 28),
    entry(3, 0xfffffe3, 28),
    entry(4, 0xfffffe4, 28),
    entry(5, 0xfffffe5, 28),
    entry(6, 0xfffffe6, 28),
    entry(7, 0xfffffe7, 28),
    entry(8, 0xfffffe8, 28),
    entry(9, 0xffffea, 24),
    entry(10, 0x3ffffffc, 30),
    entry(11, 0xfffffe9, 28),
    entry(12, 0xfffffea, 28),
    entry(13, 0x3ffffffd, 30),
    entry(14, 0xfffffeb, 28),
    entry(15, 0xfffffec, 28),
    entry(16, 0xfffffed, 28),
    entry(17, 0xfffffee, 28),
    entry(18, 0xfffffef, 28),
    entry(19, 0xffffff0, 28),
    entry(20, 0xffffff1, 28),
    entry(21, 0xffffff2, 28),
    entry(22, 0x3ffffffe, 30),
    entry(23, 0xffffff3, 28),
    entry(24, 0xffffff4, 28),
    entry(25, 0xffffff5, 28),
    entry(26, 0xffffff6, 28),
    entry(27, 0xffffff7, 28),
    entry(28, 0xffffff8, 28),
    entry(29, 0xffffff9, 28),
    entry(30, 0xffffffa, 28),
    entry(31, 0xffffffb, 28),
    entry(32, 0x14, 6),         // ' '
    entry(33, 0x3f8, 10),       // '!'
    entry(34, 0x3f9, 10),       // '"'
    entry(35, 0xffa, 12),       // '#'
    entry(36, 0x1ff9, 13),      // '$'
    entry(37, 0x15, 6),         // '%'
    entry(38, 0xf8, 8),         // '&'
    entry(39, 0x7fa, 11),       // "'"
    entry(40, 0x3fa, 10),       // '('
    entry(41, 0x3fb, 10),       // ')'
    entry(42, 0xf9, 8),         // '*'
    entry(43, 0x7fb, 11),       // '+'
    entry(44, 0xfa, 8),         // ','
    entry(45, 0x16, 6),         // '-'
    entry(46, 0x17, 6),         // '.'
    entry(47, 0x18, 6),         // '/'
    entry(48, 0x0, 5),          // '0'
    entry(49, 0x1, 5),          // '1'
    entry(50, 0x2, 5),          // '2'
    entry(51, 0x19, 6),         // '3'
    entry(52, 0x1a, 6),         // '4'
    entry(53, 0x1b, 6),         // '5'
    entry(54, 0x1c, 6),         // '6'
    entry(55, 0x1d, 6),         // '7'
    entry(56, 0x1e, 6),         // '8'
    entry(57, 0x1f, 6),         // '9'
    entry(58, 0x5c, 7),         // ':'
    entry(59, 0xfb, 8),         // ';'
    entry(60, 0x7ffc, 15),      // '<'
    entry(61, 0x20, 6),         // '='
    entry(62, 0xffb, 12),       // '>'
    entry(63, 0x3fc, 10),       // '?'
    entry(64, 0x1ffa, 13),      // '@'
    entry(65, 0x21, 6),         // 'A'
    entry(66, 0x5d, 7),         // 'B'
    entry(67, 0x5e, 7),         // 'C'
    entry(68, 0x5f, 7),         // 'D'
    entry(69, 0x60, 7),         // 'E'
    entry(70, 0x61, 7),         // 'F'
    entry(71, 0x62, 7),         // 'G'
    entry(72, 0x63, 7),         // 'H'
    entry(73, 0x64, 7),         // 'I'
    entry(74, 0x65, 7),         // 'J'
    entry(75, 0x66, 7),         // 'K'
    entry(76, 0x67, 7),         // 'L'
    entry(77, 0x68, 7),         // 'M'
    entry(78, 0x69, 7),         // 'N'
    entry(79, 0x6a, 7),         // 'O'
    entry(80, 0x6b, 7),         // 'P'
    entry(81, 0x6c, 7),         // 'Q'
    entry(82, 0x6d, 7),         // 'R'
    entry(83, 0x6e, 7),         // 'S'
    entry(84, 0x6f, 7),         // 'T'
    entry(85, 0x70, 7),         // 'U'
    entry(86, 0x71, 7),         // 'V'
    entry(87, 0x72, 7),         // 'W'
    entry(88, 0xfc, 8),         // 'X'
    entry(89, 0x73, 7),         // 'Y'
    entry(90, 0xfd, 8),         // 'Z'
    entry(91, 0x1ffb, 13),      // '['
    entry(92, 0x7fff0, 19),     // '\\'
    entry(93, 0x1ffc, 13),      // ']'
    entry(94, 0x3ffc, 14),      // '^'
    entry(95, 0x22, 6),         // '_'
    entry(96, 0x7ffd, 15),      // '`'
    entry(97, 0x3, 5),          // 'a'
    entry(98, 0x23, 6),         // 'b'
    entry(99, 0x4, 5),          // 'c'
    entry(100, 0x24, 6),        // 'd'
    entry(101, 0x5, 5),         // 'e'
    entry(102, 0x25, 6),        // 'f'
    entry(103, 0x26, 6),        // 'g'
    entry(104, 0x27, 6),        // 'h'
    entry(105, 0x6, 5),         // 'i'
    entry(106, 0x74, 7),        // 'j'
    entry(107, 0x75, 7),        // 'k'
    entry(108, 0x28, 6),        // 'l'
    entry(109, 0x29, 6),        // 'm'
    entry(110, 0x2a, 6),        // 'n'
    entry(111, 0x7, 5),         // 'o'
    entry(112, 0x2b, 6),        // 'p'
    entry(113, 0x76, 7),        // 'q'
    entry(114, 0x2c, 6),        // 'r'
    entry(115, 0x8, 5),         // 's'
    entry(116, 0x9, 5),         // 't'
    entry(117, 0x2d, 6),        // 'u'
    entry(118, 0x77, 7),        // 'v'
    entry(119, 0x78, 7),        // 'w'
    entry(120, 0x79, 7),        // 'x'
    entry(121, 0x7a, 7),        // 'y'
    entry(122, 0x7b, 7),        // 'z'
    entry(123, 0x7ffe, 15),     // '{'
    entry(124, 0x7fc, 11),      // '|'
    entry(125, 0x3ffd, 14),     // '}'
    entry(126, 0x1ffd, 13),     // '~'
    entry(127, 0xffffffc, 28),
    entry(128, 0xfffe6, 20),
    entry(129, 0x3fffd2, 22),
    entry(130, 0xfffe7, 20),
    entry(131, 0xfffe8, 20),
    entry(132, 0x3fffd3, 22),
    entry(133, 0x3fffd4, 22),
    entry(134, 0x3fffd5, 22),
    entry(135, 0x7fffd9, 23),
    entry(136, 0x3fffd6, 22),
    entry(137, 0x7fffda, 23),
    entry(138, 0x7fffdb, 23),
    entry(139, 0x7fffdc, 23),
    entry(140, 0x7fffdd, 23),
    entry(141, 0x7fffde, 23),
    entry(142, 0xffffeb, 24),
    entry(143, 0x7fffdf, 23),
    entry(144, 0xffffec, 24),
    entry(145, 0xffffed, 24),
    entry(146, 0x3fffd7, 22),
    entry(147, 0x7fffe0, 23),
    entry(148, 0xffffee, 24),
    entry(149, 0x7fffe1, 23),
    entry(150, 0x7fffe2, 23),
    entry(151, 0x7fffe3, 23),
    entry(152, 0x7fffe4, 23),
    entry(153, 0x1fffdc, 21),
    entry(154, 0x3fffd8, 22),
    entry(155, 0x7fffe5, 23),
    entry(156, 0x3fffd9, 22),
    entry(157, 0x7fffe6, 23),
    entry(158, 0x7fffe7, 23),
    entry(159, 0xffffef, 24),
    entry(160, 0x3fffda, 22),
    entry(161, 0x1fffdd, 21),
    entry(162, 0xfffe9, 20),
    entry(163, 0x3fffdb, 22),
    entry(164, 0x3fffdc, 22),
    entry(165, 0x7fffe8, 23),
    entry(166, 0x7fffe9, 23),
    entry(167, 0x1fffde, 21),
    entry(168, 0x7fffea, 23),
    entry(169, 0x3fffdd, 22),
    entry(170, 0x3fffde, 22),
    entry(171, 0xfffff0, 24),
    entry(172, 0x1fffdf, 21),
    entry(173, 0x3fffdf, 22),
    entry(174, 0x7fffeb, 23),
    entry(175, 0x7fffec, 23),
    entry(176, 0x1fffe0, 21),
    entry(177, 0x1fffe1, 21),
    entry(178, 0x3fffe0, 22),
    entry(179, 0x1fffe2, 21),
    entry(180, 0x7fffed, 23),
    entry(181, 0x3fffe1, 22),
    entry(182, 0x7fffee, 23),
    entry(183, 0x7fffef, 23),
    entry(184, 0xfffea, 20),
    entry(185, 0x3fffe2, 22),
    entry(186, 0x3fffe3, 22),
    entry(187, 0x3fffe4, 22),
    entry(188, 0x7ffff0, 23),
    entry(189, 0x3fffe5, 22),
    entry(190, 0x3fffe6, 22),
    entry(191, 0x7ffff1, 23),
    entry(192, 0x3ffffe0, 26),
    entry(193, 0x3ffffe1, 26),
    entry(194, 0xfffeb, 20),
    entry(195, 0x7fff1, 19),
    entry(196, 0x3fffe7, 22),
    entry(197, 0x7ffff2, 23),
    entry(198, 0x3fffe8, 22),
    entry(199, 0x1ffffec, 25),
    entry(200, 0x3ffffe2, 26),
    entry(201, 0x3ffffe3, 26),
    entry(202, 0x3ffffe4, 26),
    entry(203, 0x7ffffde, 27),
    entry(204, 0x7ffffdf, 27),
    entry(205, 0x3ffffe5, 26),
    entry(206, 0xfffff1, 24),
    entry(207, 0x1ffffed, 25),
    entry(208, 0x7fff2, 19),
    entry(209, 0x1fffe3, 21),
    entry(210, 0x3ffffe6, 26),
    entry(211, 0x7ffffe0, 27),
    entry(212, 0x7ffffe1, 27),
    entry(213, 0x3ffffe7, 26),
    entry(214, 0x7ffffe2, 27),
    entry(215, 0xfffff2, 24),
    entry(216, 0x1fffe4, 21),
    entry(217, 0x1fffe5, 21),
    entry(218, 0x3ffffe8, 26),
    entry(219, 0x3ffffe9, 26),
    entry(220, 0xffffffd, 28),
    entry(221, 0x7ffffe3, 27),
    entry(222, 0x7ffffe4, 27),
    entry(223, 0x7ffffe5, 27),
    entry(224, 0xfffec, 20),
    entry(225, 0xfffff3, 24),
    entry(226, 0xfffed, 20),
    entry(227, 0x1fffe6, 21),
    entry(228, 0x3fffe9, 22),
    entry(229, 0x1fffe7, 21),
    entry(230, 0x1fffe8, 21),
    entry(231, 0x7ffff3, 23),
    entry(232, 0x3fffea, 22),
    entry(233, 0x3fffeb, 22),
    entry(234, 0x1ffffee, 25),
    entry(235, 0x1ffffef, 25),
    entry(236, 0xfffff4, 24),
    entry(237, 0xfffff5, 24),
    entry(238, 0x3ffffea, 26),
    entry(239, 0x7ffff4, 23),
    entry(240, 0x3ffffeb, 26),
    entry(241, 0x7ffffe6, 27),
    entry(242, 0x3ffffec, 26),
    entry(243, 0x3ffffed, 26),
    entry(244, 0x7ffffe7, 27),
    entry(245, 0x7ffffe8, 27),
    entry(246, 0x7ffffe9, 27),
    entry(247, 0x7ffffea, 27),
    entry(248, 0x7ffffeb, 27),
    entry(249, 0xffffffe, 28),
    entry(250, 0x7ffffec, 27),
    entry(251, 0x7ffffed, 27),
    entry(252, 0x7ffffee, 27),
    entry(253, 0x7ffffef, 27),
    entry(254, 0x7fffff0, 27),
    entry(255, 0x3ffffee, 26),
    entry(256, 0x3fffffff, 30), // EOS
];

/// Look up the entry for `symbol`. Returns `None` above [`EOS_SYMBOL`].
pub fn entry_for_symbol(symbol: u16) -> Option<CodeEntry> {
    STATIC_TABLE.get(symbol as usize).copied()
}

/// Look up the entry for an octet.
#[inline]
pub fn entry_for_byte(byte: u8) -> CodeEntry {
    STATIC_TABLE[byte as usize]
}

/// Exact size in bytes of the Huffman encoding of `data`, padding included.
pub fn encoded_len(data: &[u8]) -> usize {
    let bits: usize = data
        .iter()
        .map(|&byte| entry_for_byte(byte).length as usize)
        .sum();
    bits.div_ceil(8)
}
