//! Run orchestration: turn a configuration and a source tree into repaired
//! files and a run report.
//!
//! This crate owns *when* files are read, transformed, and written back, and
//! how failures are isolated per file. The text work itself lives in
//! `mojifix-engine`; discovery lives in `mojifix-scan`.

mod config;
mod ports;
mod runner;

pub use config::{FixerConfig, RunOptions, DEFAULT_SCAN_ROOT, SOURCE_EXTENSIONS};
pub use ports::{FileError, FsSourceTree, MemoryTree, SourceTree};
pub use runner::{FixReport, Fixer, ProgressSink};
