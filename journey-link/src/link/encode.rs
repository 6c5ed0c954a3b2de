//! Percent-encoding for the `stops` payload.
//!
//! The destination service decodes the payload the way a browser's
//! `encodeURIComponent` produced it, so the unreserved set here is exactly
//! that one: ASCII alphanumerics and `-_.!~*'()`.

/// Encoded form of `%s` that is turned back into a literal placeholder.
const ENCODED_PLACEHOLDER: &str = "%25s";

/// Literal placeholder the destination fills in itself.
const PLACEHOLDER: &str = "%s";

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Whether a byte passes through `encodeURIComponent` untouched.
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encode every byte outside the unreserved set, with uppercase hex.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for &b in input.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
    }
    out
}

/// Encode a stops payload, keeping `%s` placeholders literal.
///
/// The placeholder restore runs over the whole encoded string, not just the
/// labels inside it.
pub fn encode_stops(json: &str) -> String {
    encode_component(json).replace(ENCODED_PLACEHOLDER, PLACEHOLDER)
}
