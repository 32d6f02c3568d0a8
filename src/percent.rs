use crate::compat::{String, Vec};
use crate::error::{Result, UriError};
use percent_encoding::{AsciiSet, utf8_percent_encode};

/// Percent-encode a string using the provided encode set.
/// Multi-byte characters are escaped byte-wise.
pub fn encode(input: &str, encode_set: &'static AsciiSet) -> String {
    let mut out = String::with_capacity(input.len());
    encode_into(&mut out, input, encode_set);
    out
}

/// Write the percent-encoded form of `input` directly to `buffer`
/// (zero-copy chunks when no encoding is needed)
pub fn encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Decode a percent-encoded string.
///
/// Every literal `%` introduces an escape and is consumed together with the
/// two hex digits that must follow it; no allow-list is consulted, so any
/// `%XX` is accepted. A `%` with fewer than two hex digits left is an
/// `IncompleteEscape` error rather than a silent truncation. Decoded bytes
/// are not required to form valid UTF-8; invalid sequences are replaced at
/// the string boundary.
pub fn decode(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(&hi), Some(&lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    out.push((hex_value(hi) << 4) | hex_value(lo));
                    i += 3;
                }
                _ => return Err(UriError::IncompleteEscape),
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Uppercase every `%xx` triplet in an already-encoded string.
/// Used as the final pass of normalized rendering, independent of which
/// component produced each escape.
pub fn uppercase_escapes(input: &str) -> String {
    let mut bytes = input.as_bytes().to_vec();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            bytes[i + 1].make_ascii_uppercase();
            bytes[i + 2].make_ascii_uppercase();
            i += 3;
        } else {
            i += 1;
        }
    }
    // Only ASCII letters were touched, so the buffer is still valid UTF-8
    String::from_utf8_lossy(&bytes).into_owned()
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
