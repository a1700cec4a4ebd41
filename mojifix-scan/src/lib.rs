//! Candidate file discovery.
//!
//! Recursively enumerates every file under the scan root whose name ends in
//! one of the recognized extensions. Paths come back relative to the scan
//! root, sorted and deduplicated, so downstream processing and reporting are
//! deterministic. Files outside the root or with other extensions never
//! enter the set.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use glob::glob;
use std::collections::BTreeSet;
use tracing::debug;

/// Enumerate candidate files under `scan_root`, one entry per file.
///
/// The scan root must exist: the whole run depends on it, so a missing root
/// is a fatal error rather than an empty result.
pub fn discover_files(
    scan_root: &Utf8Path,
    extensions: &[String],
) -> anyhow::Result<Vec<Utf8PathBuf>> {
    if !scan_root.is_dir() {
        anyhow::bail!("scan root {} is not a directory", scan_root);
    }

    let mut found = BTreeSet::new();
    for ext in extensions {
        let pattern = scan_root.join(format!("**/*.{ext}"));
        let pattern_str = pattern.as_str();

        debug!(pattern = %pattern_str, "scanning for candidate files");

        for entry in glob(pattern_str).with_context(|| format!("glob {}", pattern_str))? {
            let path = entry.map_err(|e| anyhow::anyhow!("glob error: {e}"))?;
            if !path.is_file() {
                continue;
            }
            let utf8_path = Utf8PathBuf::from_path_buf(path)
                .map_err(|p| anyhow::anyhow!("non-UTF-8 path: {}", p.display()))?;
            let rel = utf8_path
                .strip_prefix(scan_root)
                .unwrap_or(&utf8_path)
                .to_path_buf();
            found.insert(rel);
        }
    }

    debug!(count = found.len(), root = %scan_root, "discovery complete");
    Ok(found.into_iter().collect())
}
