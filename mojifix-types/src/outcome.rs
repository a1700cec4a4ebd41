use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// What happened to one discovered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Content changed and was (or, in a dry run, would be) rewritten.
    Fixed,
    /// No substitution fired; the file was not touched.
    Unchanged,
    /// Reading, decoding, or writing failed; the file was skipped.
    Failed,
}

/// Per-file result record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Path relative to the scan root.
    pub path: Utf8PathBuf,
    pub status: FileStatus,

    /// Error detail for failed files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_before: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_after: Option<String>,
}

impl FileOutcome {
    pub fn new(path: Utf8PathBuf, status: FileStatus) -> Self {
        Self {
            path,
            status,
            message: None,
            sha256_before: None,
            sha256_after: None,
        }
    }
}

/// Counters for a whole run. `scanned` covers every discovered file,
/// including failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub scanned: u64,
    pub fixed: u64,
    pub unchanged: u64,
    pub failed: u64,
}
