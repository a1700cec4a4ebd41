use camino::{Utf8Path, Utf8PathBuf};
use mojifix_types::table::ReplacementTable;

/// Subdirectory holding the sources to repair, relative to the repo root.
pub const DEFAULT_SCAN_ROOT: &str = "frontend/src";

/// Extensions of files eligible for repair.
pub const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts"];

/// Everything that determines a run: where to look, what to look at, and the
/// ordered table to apply. The production shape is fixed; tests construct
/// synthetic configs against in-memory trees.
#[derive(Debug, Clone)]
pub struct FixerConfig {
    pub scan_root: Utf8PathBuf,
    pub extensions: Vec<String>,
    pub table: ReplacementTable,
}

impl FixerConfig {
    /// The fixed production configuration, anchored at `repo_root`.
    pub fn for_repo(repo_root: &Utf8Path) -> Self {
        Self {
            scan_root: repo_root.join(DEFAULT_SCAN_ROOT),
            extensions: SOURCE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            table: ReplacementTable::builtin(),
        }
    }
}

/// Per-invocation switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report what would change without writing anything.
    pub dry_run: bool,
}
