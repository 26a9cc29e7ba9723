use std::io::{self, Write};

use crate::types::StringMatch;

/// Writes accepted strings to an output sink in scan order
///
/// One line per string: the offset as a fixed-width hex address, shifted by
/// the configured base, then a colon and the decoded text.
pub struct Reporter<W: Write> {
    out: W,
    base: u64,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, base: u64) -> Self {
        Self { out, base }
    }

    /// Emit one accepted string
    pub fn emit(&mut self, found: &StringMatch<'_>) -> io::Result<()> {
        writeln!(self.out, "{}: {}", found.offset.rebased(self.base), found.text)
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Consume the reporter and return the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}
