use crate::error::{Result, ScanError};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Read-only memory-mapped firmware image
///
/// The whole file maps at once; the scan walks the mapping in place without
/// copying. Empty files are valid input and read as an empty byte slice
/// (mapping zero bytes is an OS error, so they skip the mmap).
#[derive(Debug)]
pub struct FirmwareImage {
    mmap: Option<Mmap>,
    path: String,
}

impl FirmwareImage {
    /// Open a firmware image file with memory mapping
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.display().to_string();

        // Open the file
        let file = File::open(path_ref).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanError::FileNotFound(path_str.clone())
            } else {
                ScanError::Io(e)
            }
        })?;

        let len = file.metadata()?.len();

        // Memory map the file
        let mmap = if len == 0 {
            None
        } else {
            Some(unsafe {
                Mmap::map(&file)
                    .map_err(|e| ScanError::Mmap(format!("Failed to mmap {}: {}", path_str, e)))?
            })
        };

        Ok(Self {
            mmap,
            path: path_str,
        })
    }

    /// Get the raw bytes of the image
    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Get the size of the image in bytes
    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the path the image was opened from
    pub fn path(&self) -> &str {
        &self.path
    }
}
