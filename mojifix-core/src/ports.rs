use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::cell::RefCell;
use std::collections::BTreeMap;
use thiserror::Error;

/// Why one file could not be repaired. Both variants are recovered locally:
/// the file is skipped and the run continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("decode error: {message}")]
    Decode { message: String },
}

impl FileError {
    fn io(err: impl std::fmt::Display) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }

    fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

/// Access to the tree of candidate files.
///
/// The runner goes through this so it can be tested against an in-memory
/// implementation instead of the real filesystem.
pub trait SourceTree {
    /// The scan root this tree is anchored at.
    fn root(&self) -> &Utf8Path;

    /// Enumerate candidate files, relative to the root. Failure here is
    /// fatal for the run.
    fn discover(&self, extensions: &[String]) -> anyhow::Result<Vec<Utf8PathBuf>>;

    /// Read one file as strict UTF-8.
    fn read(&self, rel: &Utf8Path) -> Result<String, FileError>;

    /// Overwrite one file.
    fn write(&self, rel: &Utf8Path, contents: &str) -> Result<(), FileError>;
}

/// Filesystem-backed `SourceTree`.
#[derive(Debug, Clone)]
pub struct FsSourceTree {
    root: Utf8PathBuf,
}

impl FsSourceTree {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    fn abs(&self, rel: &Utf8Path) -> Utf8PathBuf {
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }
}

impl SourceTree for FsSourceTree {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn discover(&self, extensions: &[String]) -> anyhow::Result<Vec<Utf8PathBuf>> {
        mojifix_scan::discover_files(&self.root, extensions)
    }

    fn read(&self, rel: &Utf8Path) -> Result<String, FileError> {
        let bytes = fs::read(self.abs(rel)).map_err(FileError::io)?;
        String::from_utf8(bytes).map_err(FileError::decode)
    }

    fn write(&self, rel: &Utf8Path, contents: &str) -> Result<(), FileError> {
        fs::write(self.abs(rel), contents).map_err(FileError::io)
    }
}

/// In-memory `SourceTree` for tests. Files are raw bytes so invalid UTF-8
/// content can be staged to exercise decode failures.
#[derive(Debug, Default)]
pub struct MemoryTree {
    root: Utf8PathBuf,
    files: RefCell<BTreeMap<Utf8PathBuf, Vec<u8>>>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            files: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn insert(&self, rel: impl Into<Utf8PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(rel.into(), bytes.into());
    }

    pub fn bytes_of(&self, rel: &Utf8Path) -> Option<Vec<u8>> {
        self.files.borrow().get(rel).cloned()
    }
}

impl SourceTree for MemoryTree {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn discover(&self, extensions: &[String]) -> anyhow::Result<Vec<Utf8PathBuf>> {
        let files = self.files.borrow();
        Ok(files
            .keys()
            .filter(|p| {
                p.extension()
                    .map(|ext| extensions.iter().any(|e| e == ext))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    fn read(&self, rel: &Utf8Path) -> Result<String, FileError> {
        let files = self.files.borrow();
        let bytes = files
            .get(rel)
            .ok_or_else(|| FileError::io(format!("no such file: {rel}")))?;
        String::from_utf8(bytes.clone()).map_err(FileError::decode)
    }

    fn write(&self, rel: &Utf8Path, contents: &str) -> Result<(), FileError> {
        self.files
            .borrow_mut()
            .insert(rel.to_path_buf(), contents.as_bytes().to_vec());
        Ok(())
    }
}
