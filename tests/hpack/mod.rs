//! Tests against HPACK: RFC 7541 Appendix C vectors and fluke-hpack interop

mod decoding;
mod encoding;
