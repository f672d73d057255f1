//! Whole-buffer file I/O for the CLI.
//!
//! Grounded on the original `file_utils.h` (`load_u8_file`/`save_u8_file`
//! and friends): read the whole file into a `Vec<u8>`, write a whole
//! `Vec<u8>` back out. Reduced from the teacher's streaming `Lz4ReadFile`/
//! `Lz4WriteFile` since spec.md explicitly excludes a streaming/online mode.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read an entire file into memory.
pub fn read_whole_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Write `data` to `path`, creating or truncating it.
pub fn write_whole_file(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}
