//! In-memory backend for tests and simulations.

use std::collections::BTreeMap;

use super::FileStorage;
use crate::error::Error;

#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    files: BTreeMap<String, Vec<u8>>,
    fail_writes: bool,
    writes: usize,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` at `path` as if it had been written earlier.
    pub fn with_file(mut self, path: &str, text: &str) -> Self {
        self.files.insert(path.to_string(), text.as_bytes().to_vec());
        self
    }

    /// Make every following write fail with [`Error::Storage`].
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn file(&self, path: &str) -> Option<&str> {
        self.files
            .get(path)
            .and_then(|data| core::str::from_utf8(data).ok())
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl FileStorage for MemStorage {
    fn read(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, Error> {
        let data = self.files.get(path).ok_or(Error::NotFound)?;
        let copied = data.len().min(buf.len());
        buf[..copied].copy_from_slice(&data[..copied]);
        Ok(data.len())
    }

    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), Error> {
        if self.fail_writes {
            return Err(Error::Storage);
        }
        self.files.insert(path.to_string(), data.to_vec());
        self.writes += 1;
        Ok(())
    }
}
