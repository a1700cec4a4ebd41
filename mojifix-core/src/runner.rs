use crate::config::{FixerConfig, RunOptions};
use crate::ports::{FileError, SourceTree};
use anyhow::Context;
use camino::Utf8Path;
use mojifix_engine::transform;
use mojifix_types::outcome::{FileOutcome, FileStatus, RunSummary};
use sha2::{Digest, Sha256};
use tracing::debug;

/// Observer for per-file events, so progress can surface while the run is
/// still going. Unchanged files produce no event.
pub trait ProgressSink {
    /// A file's content changed (and was written back, unless dry-run).
    fn file_fixed(&mut self, path: &Utf8Path, before: &str, after: &str);

    /// A file could not be read, decoded, or written; the run continues.
    fn file_failed(&mut self, path: &Utf8Path, error: &FileError);
}

/// Outcome of a whole run.
#[derive(Debug, Clone)]
pub struct FixReport {
    pub outcomes: Vec<FileOutcome>,
    pub summary: RunSummary,
}

/// The repair loop: discover, then read -> transform -> compare -> maybe
/// write, one file at a time. A bad file is reported and skipped; only
/// discovery failure aborts the run.
pub struct Fixer {
    config: FixerConfig,
}

enum FileFix {
    Changed { before: String, after: String },
    Unchanged,
}

impl Fixer {
    pub fn new(config: FixerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FixerConfig {
        &self.config
    }

    pub fn run(
        &self,
        tree: &dyn SourceTree,
        opts: &RunOptions,
        sink: &mut dyn ProgressSink,
    ) -> anyhow::Result<FixReport> {
        let files = tree
            .discover(&self.config.extensions)
            .with_context(|| format!("discover candidate files under {}", tree.root()))?;

        let mut summary = RunSummary {
            scanned: files.len() as u64,
            ..RunSummary::default()
        };
        let mut outcomes = Vec::with_capacity(files.len());

        for rel in &files {
            match self.fix_file(tree, rel, opts) {
                Ok(FileFix::Changed { before, after }) => {
                    debug!(path = %rel, dry_run = opts.dry_run, "content changed");
                    let mut outcome = FileOutcome::new(rel.clone(), FileStatus::Fixed);
                    outcome.sha256_before = Some(sha256_hex(before.as_bytes()));
                    outcome.sha256_after = Some(sha256_hex(after.as_bytes()));
                    summary.fixed += 1;
                    sink.file_fixed(rel, &before, &after);
                    outcomes.push(outcome);
                }
                Ok(FileFix::Unchanged) => {
                    summary.unchanged += 1;
                    outcomes.push(FileOutcome::new(rel.clone(), FileStatus::Unchanged));
                }
                Err(err) => {
                    debug!(path = %rel, error = %err, "skipping file");
                    let mut outcome = FileOutcome::new(rel.clone(), FileStatus::Failed);
                    outcome.message = Some(err.to_string());
                    summary.failed += 1;
                    sink.file_failed(rel, &err);
                    outcomes.push(outcome);
                }
            }
        }

        Ok(FixReport { outcomes, summary })
    }

    fn fix_file(
        &self,
        tree: &dyn SourceTree,
        rel: &Utf8Path,
        opts: &RunOptions,
    ) -> Result<FileFix, FileError> {
        let raw = tree.read(rel)?;
        let transformed = transform(&raw, &self.config.table);
        if !transformed.changed {
            return Ok(FileFix::Unchanged);
        }

        if !opts.dry_run {
            tree.write(rel, &transformed.text)?;
        }

        Ok(FileFix::Changed {
            before: raw,
            after: transformed.text,
        })
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
