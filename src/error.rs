//! Unified error type for the ID card app.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Storage
    /// The requested file does not exist.
    NotFound,

    /// The storage backend failed to read or write.
    Storage,

    /// The file does not hold valid UTF-8 text.
    Encoding,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,

    // Scenes
    /// The scene stack is already at `SCENE_STACK_DEPTH`.
    SceneStackFull,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::NotFound => "file not found",
            Error::Storage => "storage access failed",
            Error::Encoding => "file is not valid UTF-8",
            Error::BufferOverflow => "buffer too small",
            Error::SceneStackFull => "scene stack full",
        };
        f.write_str(msg)
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for Error {}
