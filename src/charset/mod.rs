pub mod decode;
pub mod filter;

pub use decode::{decode_strict, decode_text};
pub use filter::ByteFilter;

use encoding_rs::Encoding;

/// Two-tier validity check for a candidate window
///
/// The byte screen runs first and rejects almost everything cheaply; only
/// survivors pay for a strict decode. Windows the screen rejects must never
/// reach the decoder.
#[inline]
pub fn is_valid_string(filter: &ByteFilter, encoding: &'static Encoding, raw: &[u8]) -> bool {
    filter.accepts(raw) && decode_strict(encoding, raw).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::GBK;

    #[test]
    fn test_both_tiers_pass() {
        let filter = ByteFilter::gb2312();
        assert!(is_valid_string(&filter, GBK, b"plain ascii"));
        assert!(is_valid_string(
            &filter,
            GBK,
            &[0x46, 0x4d, 0xca, 0xd5, 0xd2, 0xf4, 0xbb, 0xfa]
        ));
    }

    #[test]
    fn test_screen_rejects_before_decode() {
        let filter = ByteFilter::gb2312();
        // Control byte, NUL, reserved byte: all die in the first tier
        assert!(!is_valid_string(&filter, GBK, b"line\nbreak"));
        assert!(!is_valid_string(&filter, GBK, b"nul\0byte"));
        assert!(!is_valid_string(&filter, GBK, &[b'o', b'k', 0x90]));
    }

    #[test]
    fn test_decoder_rejects_what_the_screen_passed() {
        let filter = ByteFilter::gb2312();
        // Screen-clean but malformed: lead byte followed by DEL
        let window = [0xc4, 0x7f];
        assert!(filter.accepts(&window));
        assert!(!is_valid_string(&filter, GBK, &window));

        // Screen-clean but truncated: lead byte with no trail
        let dangling = [0x46, 0x4d, 0xca];
        assert!(filter.accepts(&dangling));
        assert!(!is_valid_string(&filter, GBK, &dangling));
    }
}
