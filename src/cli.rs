use clap::Parser;
use std::path::PathBuf;

use crate::types::ScanConfig;

/// gbstrings - GB2312 string extractor for firmware images
#[derive(Parser, Debug, Clone)]
#[command(name = "gbstrings")]
#[command(version)]
#[command(about = "Finds GB2312 strings in firmware images", long_about = None)]
pub struct Args {
    /// Firmware image file to scan
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Minimum string length in bytes
    #[arg(
        short = 'n',
        long = "min-length",
        value_name = "BYTES",
        default_value_t = 8
    )]
    pub min_length: usize,

    /// Base address of the image, added to reported offsets.
    /// Accepts decimal, 0x-prefixed hex, or 0-prefixed octal.
    #[arg(
        short = 'b',
        long = "base",
        value_name = "ADDR",
        default_value = "0",
        value_parser = parse_address
    )]
    pub base: u64,

    /// Decode a few built-in samples and print them
    #[arg(long = "test")]
    pub test: bool,
}

impl Args {
    /// Scan parameters extracted from the flags
    pub fn config(&self) -> ScanConfig {
        ScanConfig {
            min_len: self.min_length,
            base_addr: self.base,
            ..ScanConfig::default()
        }
    }
}

/// Parse an address: decimal by default, hex with a 0x prefix, octal with
/// a leading zero
fn parse_address(s: &str) -> Result<u64, String> {
    let t = s.trim();
    let (digits, radix) = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        (hex, 16)
    } else if t.len() > 1 && t.starts_with('0') {
        (&t[1..], 8)
    } else {
        (t, 10)
    };
    u64::from_str_radix(digits, radix).map_err(|e| format!("invalid address '{}': {}", s, e))
}
