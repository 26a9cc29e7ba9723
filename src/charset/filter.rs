/// Byte-level screen for GB2312-class text
///
/// A necessary-but-not-sufficient check: every byte of a candidate window
/// must clear it before the full decode is worth attempting. The reserved
/// range is the charset-specific part; GB2312 code units start at 0xA1, so
/// 0x80..=0xA0 can appear in neither half of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteFilter {
    reserved_lo: u8,
    reserved_hi: u8,
}

impl ByteFilter {
    /// Screen with a custom reserved high-byte range.
    pub const fn with_reserved(reserved_lo: u8, reserved_hi: u8) -> Self {
        Self {
            reserved_lo,
            reserved_hi,
        }
    }

    /// Screen parameterized for the GB2312 family.
    pub const fn gb2312() -> Self {
        Self::with_reserved(0x80, 0xa0)
    }

    /// Check if a single byte can appear anywhere inside a string
    #[inline]
    pub fn byte_ok(&self, b: u8) -> bool {
        // Strings never span a NUL
        if b == 0 {
            return false;
        }
        // Control bytes end a string. Also drops format strings carrying
        // raw escapes.
        if b < 0x20 {
            return false;
        }
        b < self.reserved_lo || b > self.reserved_hi
    }

    /// Check if every byte of the window clears the screen
    #[inline]
    pub fn accepts(&self, window: &[u8]) -> bool {
        window.iter().all(|&b| self.byte_ok(b))
    }
}

impl Default for ByteFilter {
    fn default() -> Self {
        Self::gb2312()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nul_rejected() {
        let filter = ByteFilter::gb2312();
        assert!(!filter.byte_ok(0x00));
        assert!(!filter.accepts(b"FM\x00radio"));
    }

    #[test]
    fn test_control_bytes_rejected() {
        let filter = ByteFilter::gb2312();
        for b in 0x01..=0x1f {
            assert!(!filter.byte_ok(b), "control byte {:#04x} slipped through", b);
        }
        assert!(!filter.accepts(b"line\none"));
        assert!(!filter.accepts(b"tab\there"));
    }

    #[test]
    fn test_reserved_range_rejected() {
        let filter = ByteFilter::gb2312();
        for b in 0x80..=0xa0 {
            assert!(!filter.byte_ok(b), "reserved byte {:#04x} slipped through", b);
        }
    }

    #[test]
    fn test_boundary_bytes() {
        let filter = ByteFilter::gb2312();
        // Last control byte rejected, first printable accepted
        assert!(!filter.byte_ok(0x1f));
        assert!(filter.byte_ok(0x20));
        // DEL clears the screen even though it never decodes as a trail
        assert!(filter.byte_ok(0x7e));
        assert!(filter.byte_ok(0x7f));
        // Edges of the reserved range
        assert!(!filter.byte_ok(0x80));
        assert!(!filter.byte_ok(0xa0));
        assert!(filter.byte_ok(0xa1));
        assert!(filter.byte_ok(0xff));
    }

    #[test]
    fn test_clean_windows_accepted() {
        let filter = ByteFilter::gb2312();
        assert!(filter.accepts(b"plain ascii text"));
        // "FM收音机" in GB2312 bytes
        assert!(filter.accepts(&[0x46, 0x4d, 0xca, 0xd5, 0xd2, 0xf4, 0xbb, 0xfa]));
        // The empty window is vacuously clean
        assert!(filter.accepts(&[]));
    }

    #[test]
    fn test_screen_is_deterministic() {
        let filter = ByteFilter::gb2312();
        let window: Vec<u8> = (0u8..=255).collect();
        let first: Vec<bool> = window.iter().map(|&b| filter.byte_ok(b)).collect();
        let second: Vec<bool> = window.iter().map(|&b| filter.byte_ok(b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_reserved_range() {
        // An ASCII-only screen: everything above 0x7E is reserved
        let filter = ByteFilter::with_reserved(0x7f, 0xff);
        assert!(filter.accepts(b"ascii only"));
        assert!(!filter.byte_ok(0xc4));
        assert!(!filter.byte_ok(0xff));
    }
}
