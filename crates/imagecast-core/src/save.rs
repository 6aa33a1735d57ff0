//! The file-saving capability injected into operations.
//!
//! The browser download side effect (synthesize an anchor element, click
//! it) is host-specific, so operations only see this trait. The WASM crate
//! supplies the anchor-based implementation; tests and headless hosts use
//! [`MemorySaver`] or [`NullSaver`].

use std::cell::RefCell;

use thiserror::Error;

/// Errors from the save capability.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The host has no save mechanism available (e.g. no DOM).
    #[error("saving unavailable: {0}")]
    Unavailable(String),

    /// The host save mechanism failed.
    #[error("save failed: {0}")]
    Failed(String),
}

/// A sink for downloaded operation results.
pub trait FileSaver {
    /// Persist encoded bytes under the given filename.
    ///
    /// `mime` is the declared type of the bytes, for hosts whose save
    /// mechanism is typed (the browser anchor download needs it to build
    /// the data URI href).
    fn save(&self, bytes: &[u8], mime: &str, filename: &str) -> Result<(), SaveError>;
}

/// A saver that discards everything. For hosts that never download.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSaver;

impl FileSaver for NullSaver {
    fn save(&self, _bytes: &[u8], _mime: &str, _filename: &str) -> Result<(), SaveError> {
        Ok(())
    }
}

/// A file captured by [`MemorySaver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// A saver that records every save in memory, for tests and headless hosts.
///
/// Interior mutability keeps the [`FileSaver`] trait object shareable; this
/// type is not meant to cross threads.
#[derive(Debug, Default)]
pub struct MemorySaver {
    saved: RefCell<Vec<SavedFile>>,
}

impl MemorySaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files saved so far, oldest first.
    pub fn files(&self) -> Vec<SavedFile> {
        self.saved.borrow().clone()
    }

    /// Number of saves recorded.
    pub fn len(&self) -> usize {
        self.saved.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.borrow().is_empty()
    }
}

impl FileSaver for MemorySaver {
    fn save(&self, bytes: &[u8], mime: &str, filename: &str) -> Result<(), SaveError> {
        self.saved.borrow_mut().push(SavedFile {
            filename: filename.to_string(),
            mime: mime.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}
