use std::borrow::Cow;

use encoding_rs::Encoding;

/// Characters stripped from both ends of reported text: the padding and
/// line endings firmware strings usually carry.
const TRIM: &[char] = &[' ', '\n', '\r', '\0'];

/// Strict decode of a candidate window
///
/// `None` means the window is not valid text in the target charset. That is
/// the routine rejection signal, not an error. Malformed sequences are
/// never replaced with U+FFFD; a single bad code unit fails the whole
/// window.
#[inline]
pub fn decode_strict<'a>(encoding: &'static Encoding, raw: &'a [u8]) -> Option<Cow<'a, str>> {
    encoding.decode_without_bom_handling_and_without_replacement(raw)
}

/// Decoded text of an accepted run, trimmed for reporting
pub fn decode_text(encoding: &'static Encoding, raw: &[u8]) -> Option<String> {
    decode_strict(encoding, raw).map(|text| text.trim_matches(TRIM).to_string())
}
