use encoding_rs::{Encoding, GBK};

/// Newtype wrapper for byte offsets in firmware images
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(pub u64);

impl Offset {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Offset shifted by the load address of the image.
    pub fn rebased(&self, base: u64) -> Offset {
        Offset(base.saturating_add(self.0))
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Scanner configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Minimum accepted run length in bytes
    pub min_len: usize,

    /// Base address added to reported offsets
    pub base_addr: u64,

    /// Target charset for the decode checks
    pub encoding: &'static Encoding,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_len: 8,
            base_addr: 0,
            encoding: GBK,
        }
    }
}

/// A string accepted by the scan: where it sits in the image, the raw
/// bytes it spans, and the decoded text.
#[derive(Debug, Clone, PartialEq)]
pub struct StringMatch<'a> {
    pub offset: Offset,
    pub raw: &'a [u8],
    pub text: String,
}
