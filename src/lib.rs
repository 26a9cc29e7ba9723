//! gbstrings - GB2312 string extraction from firmware images
//!
//! The scan is a single forward sweep over a memory-mapped image. A cheap
//! byte screen measures how far a candidate string could extend at each
//! offset, a strict decode confirms the survivors, and accepted strings
//! come out as offset/text pairs.

pub mod charset;
pub mod cli;
pub mod error;
pub mod image;
pub mod report;
pub mod scanner;
pub mod selftest;
pub mod types;

// Re-export commonly used types
pub use charset::{decode_strict, decode_text, is_valid_string, ByteFilter};
pub use error::{Result, ScanError};
pub use image::FirmwareImage;
pub use report::Reporter;
pub use scanner::{Matches, Scanner, Step};
pub use types::{Offset, ScanConfig, StringMatch};
