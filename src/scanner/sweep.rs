use encoding_rs::Encoding;

use crate::charset::{self, ByteFilter};
use crate::error::{Result, ScanError};
use crate::types::{Offset, ScanConfig, StringMatch};

/// Result of one sweep transition: possibly an accepted string, plus the
/// cursor position for the next step.
#[derive(Debug)]
pub struct Step<'a> {
    pub found: Option<StringMatch<'a>>,
    pub next: usize,
}

/// Forward sweep over an in-memory image
///
/// At every offset the sweep measures the longest window the byte screen
/// allows, validates survivors against the decoder, and either jumps past
/// an accepted string or slides one byte forward. The cursor never moves
/// backwards, so every byte is visited at most once as a run start.
pub struct Scanner<'a> {
    data: &'a [u8],
    filter: ByteFilter,
    min_len: usize,
    encoding: &'static Encoding,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with the default GB2312 screen
    pub fn new(data: &'a [u8], config: &ScanConfig) -> Self {
        Self::with_filter(data, config, ByteFilter::gb2312())
    }

    /// Create a scanner with a custom byte screen
    pub fn with_filter(data: &'a [u8], config: &ScanConfig, filter: ByteFilter) -> Self {
        Self {
            data,
            filter,
            min_len: config.min_len,
            encoding: config.encoding,
        }
    }

    /// Maximal length of a screen-clean run starting at `start`
    ///
    /// Extension probes one byte at a time, with a two-byte fallback probe
    /// before giving up: both halves of a double-byte code unit have to be
    /// present before a window can look clean again, so a one-byte
    /// rejection alone does not end the run.
    pub fn run_len(&self, start: usize) -> usize {
        let mut end = start;
        while end < self.data.len() {
            if self.filter.accepts(&self.data[end..end + 1]) {
                end += 1;
            } else if end + 2 <= self.data.len() && self.filter.accepts(&self.data[end..end + 2]) {
                end += 2;
            } else {
                break;
            }
        }
        end - start
    }

    /// One transition of the sweep at `cursor`
    ///
    /// Pure with respect to the scanner; the caller owns the cursor and
    /// feeds it back in. An accepted string moves the cursor past its last
    /// byte, anything else moves it one byte forward.
    pub fn step(&self, cursor: usize) -> Result<Step<'a>> {
        let len = self.run_len(cursor);
        // Empty runs never count, whatever the configured minimum
        if len > 0 && len >= self.min_len {
            let raw = &self.data[cursor..cursor + len];
            if charset::is_valid_string(&self.filter, self.encoding, raw) {
                let offset = Offset::new(cursor as u64);
                // The run just validated, so a failure here means the scan
                // state is inconsistent; fatal rather than skipped
                let text = charset::decode_text(self.encoding, raw).ok_or(ScanError::Decode {
                    offset,
                    encoding: self.encoding.name(),
                })?;
                return Ok(Step {
                    found: Some(StringMatch { offset, raw, text }),
                    next: cursor + len,
                });
            }
        }
        Ok(Step {
            found: None,
            next: cursor + 1,
        })
    }

    /// Accepted strings in scan order
    pub fn matches(&self) -> Matches<'a, '_> {
        Matches {
            scanner: self,
            cursor: 0,
        }
    }
}

/// Iterator driving the sweep from offset 0 to the end of the image
pub struct Matches<'a, 's> {
    scanner: &'s Scanner<'a>,
    cursor: usize,
}

impl<'a> Iterator for Matches<'a, '_> {
    type Item = Result<StringMatch<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.scanner.data.len() {
            match self.scanner.step(self.cursor) {
                Ok(step) => {
                    self.cursor = step.next;
                    if let Some(found) = step.found {
                        return Some(Ok(found));
                    }
                }
                Err(e) => {
                    // A fatal error ends the sweep
                    self.cursor = self.scanner.data.len();
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
