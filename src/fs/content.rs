//! Whole-file content helpers.

use crate::error::FsError;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

/// Bytes allowed in a text file: BEL, BS, TAB, LF, FF, CR, ESC and the
/// printable range minus DEL. Anything else marks the file as binary.
fn is_text_byte(b: u8) -> bool {
    matches!(b, 7..=10 | 12 | 13 | 27 | 0x20..=0x7e | 0x80..=0xff)
}

/// Read the complete content of a file as a string.
pub fn read_file(path: &Path) -> Result<String, FsError> {
    Ok(fs::read_to_string(path)?)
}

/// Write content to a file, replacing anything already there.
pub fn write_file(path: &Path, content: &str) -> Result<(), FsError> {
    Ok(fs::write(path, content)?)
}

/// Append content to a file, creating it if absent.
pub fn append_file(path: &Path, content: &str) -> Result<(), FsError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Heuristic binary check: inspect the first 1 KiB for non-text bytes.
pub fn is_binary_file(path: &Path) -> Result<bool, FsError> {
    let mut buf = [0u8; 1024];
    let mut file = fs::File::open(path)?;
    let n = file.read(&mut buf)?;
    Ok(buf[..n].iter().any(|&b| !is_text_byte(b)))
}
