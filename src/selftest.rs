use std::io::Write;

use crate::charset::decode_text;
use crate::error::{Result, ScanError};
use crate::types::{Offset, ScanConfig};

// 你好，Travis.\n
const GREETING: &[u8] = &[
    0xc4, 0xe3, 0xba, 0xc3, 0xa3, 0xac, 0x54, 0x72, 0x61, 0x76, 0x69, 0x73, 0x2e, 0x0a,
];

// FM收音机\n
const FM_RADIO: &[u8] = &[0x46, 0x4d, 0xca, 0xd5, 0xd2, 0xf4, 0xbb, 0xfa, 0x0a];

// 快速组队\n
const QUICK_TEAM: &[u8] = &[0xbf, 0xec, 0xcb, 0xd9, 0xd7, 0xe9, 0xb6, 0xd3, 0x0a];

/// Decode the built-in samples and print them, one per line
///
/// A quick end-to-end check that the decoder is wired up correctly. The
/// samples are known-good, so a decode failure is a fault in the tool, not
/// in any input.
pub fn run<W: Write>(config: &ScanConfig, out: &mut W) -> Result<()> {
    for sample in [GREETING, FM_RADIO, QUICK_TEAM] {
        let text = decode_text(config.encoding, sample).ok_or(ScanError::Decode {
            offset: Offset::new(0),
            encoding: config.encoding.name(),
        })?;
        writeln!(out, "{}", text)?;
    }
    Ok(())
}
