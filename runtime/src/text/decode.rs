//! Best-effort percent-decoding.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use tracing::debug;

/// Percent-decode `text`, returning it unchanged when decoding fails.
///
/// Decoding fails when a `%` is not followed by two hex digits or when the
/// decoded bytes are not valid UTF-8. `+` is not treated as a space.
pub fn decode_or_raw(text: &str) -> Cow<'_, str> {
    if has_malformed_escape(text) {
        debug!(text, "malformed percent escape, using raw text");
        return Cow::Borrowed(text);
    }

    match percent_decode_str(text).decode_utf8() {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!(text, error = %e, "percent-decoded bytes are not UTF-8, using raw text");
            Cow::Borrowed(text)
        }
    }
}

fn has_malformed_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}
