//! Host file-system backend.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::FileStorage;
use crate::error::Error;

/// Keeps device paths (`/ext/id.txt`) under a root directory on the host.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Host path for a device path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl FileStorage for FsStorage {
    fn read(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, Error> {
        let data = fs::read(self.resolve(path)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound,
            _ => Error::Storage,
        })?;
        let copied = data.len().min(buf.len());
        buf[..copied].copy_from_slice(&data[..copied]);
        Ok(data.len())
    }

    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), Error> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|_| Error::Storage)?;
        }
        fs::write(target, data).map_err(|_| Error::Storage)
    }
}
