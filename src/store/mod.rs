//! Record store - the ID record as a line-oriented text file.
//!
//! File layout:
//! ```text
//! Filetype: ID Data
//! Version: 1
//! Name: <value>
//! Email: <value>
//! Tel: <value>
//! Addr: <value>
//! Notes: <value>
//! ```
//!
//! Every line is `Key: value`; the value is the rest of the line, without
//! escaping. On load, fields are looked up by key: a missing line leaves
//! the field as it was, the first occurrence of a key wins, unknown keys,
//! blank lines and `#` comments are skipped. The header is written but not
//! required.
//!
//! Bytes go through a [`FileStorage`] backend: internal flash on the device,
//! the file system or memory on a host.

#[cfg(feature = "std")]
mod fs;
#[cfg(feature = "std")]
mod mem;

#[cfg(feature = "std")]
pub use fs::FsStorage;
#[cfg(feature = "std")]
pub use mem::MemStorage;

use core::fmt::Write;

use crate::config::{FILE_TYPE, FILE_VERSION, MAX_FILE_SIZE};
use crate::error::Error;
use crate::record::{FieldKind, Record};
use heapless::String;

/// Encoded record file.
pub type FileText = String<MAX_FILE_SIZE>;

const FILETYPE_KEY: &str = "Filetype";
const VERSION_KEY: &str = "Version";

/// Whole-file access to a storage medium addressed by path.
pub trait FileStorage {
    /// Copy the start of the file at `path` into `buf`.
    ///
    /// Returns the full size of the file; when that is larger than `buf`
    /// only the first `buf.len()` bytes were copied. Fails with
    /// [`Error::NotFound`] if there is no such file.
    fn read(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, Error>;

    /// Create or fully overwrite the file at `path`.
    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), Error>;
}

impl<T: FileStorage + ?Sized> FileStorage for &mut T {
    fn read(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, Error> {
        (**self).read(path, buf)
    }

    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), Error> {
        (**self).write(path, data)
    }
}

/// Serialise a record, header first, fields in [`FieldKind::ALL`] order.
pub fn encode(record: &Record) -> Result<FileText, Error> {
    let mut out = FileText::new();
    writeln!(out, "{}: {}", FILETYPE_KEY, FILE_TYPE).map_err(|_| Error::BufferOverflow)?;
    writeln!(out, "{}: {}", VERSION_KEY, FILE_VERSION).map_err(|_| Error::BufferOverflow)?;
    for field in FieldKind::ALL {
        writeln!(out, "{}: {}", field.key(), record.get(field))
            .map_err(|_| Error::BufferOverflow)?;
    }
    Ok(out)
}

/// Apply the field lines found in `text` to `record`.
///
/// Returns how many fields were set.
pub fn decode(text: &str, record: &mut Record) -> usize {
    let mut seen = [false; FieldKind::COUNT];
    let mut applied = 0;

    for line in text.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.strip_prefix(' ').unwrap_or(value);

        match key {
            FILETYPE_KEY => {
                if value != FILE_TYPE {
                    warn!("store: unexpected file type {=str}", value);
                }
            }
            VERSION_KEY => {
                if value.parse::<u32>().ok() != Some(FILE_VERSION) {
                    warn!("store: unexpected version {=str}", value);
                }
            }
            _ => {
                let Some(field) = FieldKind::from_key(key) else {
                    continue;
                };
                if seen[field.index()] {
                    continue;
                }
                seen[field.index()] = true;
                if !record.set(field, value) {
                    warn!("store: {=str} truncated to field capacity", field.key());
                }
                applied += 1;
            }
        }
    }

    applied
}

/// Read the record file at `path` into `record`.
///
/// A file larger than `MAX_FILE_SIZE` is read up to the last complete line
/// that fits. On error `record` is left untouched.
pub fn load<S: FileStorage + ?Sized>(
    storage: &mut S,
    path: &str,
    record: &mut Record,
) -> Result<usize, Error> {
    let mut buf = [0u8; MAX_FILE_SIZE];
    let size = storage.read(path, &mut buf)?;
    let mut bytes = &buf[..size.min(buf.len())];
    if size > bytes.len() {
        warn!("store: {=str} is {} bytes, reading the first {}", path, size, bytes.len());
        let end = bytes.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
        bytes = &bytes[..end];
    }
    let text = core::str::from_utf8(bytes).map_err(|_| Error::Encoding)?;
    Ok(decode(text, record))
}

/// Overwrite the record file at `path` with `record`.
pub fn save<S: FileStorage + ?Sized>(
    storage: &mut S,
    path: &str,
    record: &Record,
) -> Result<(), Error> {
    let text = encode(record)?;
    storage.write(path, text.as_bytes())
}
