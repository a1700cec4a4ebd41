use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::Parser;
use fs_err as fs;
use mojifix_core::{FileError, Fixer, FixerConfig, FsSourceTree, ProgressSink, RunOptions};
use mojifix_engine::render_patch;
use mojifix_types::report::{RunReport, ToolInfo};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "mojifix",
    version,
    about = "Repairs mojibake-corrupted source files in place."
)]
struct Cli {
    /// Directory the fixed frontend/src scan root is anchored at (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Report what would change without writing any file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Print a unified diff for each changed file.
    #[arg(long, default_value_t = false)]
    diff: bool,

    /// Write a JSON run report to this path.
    #[arg(long)]
    report: Option<Utf8PathBuf>,
}

/// Prints the per-file progress lines as the run proceeds.
struct ConsoleSink {
    diff: bool,
}

impl ProgressSink for ConsoleSink {
    fn file_fixed(&mut self, path: &Utf8Path, before: &str, after: &str) {
        println!("Fixed: {path}");
        if self.diff {
            print!("{}", render_patch(path, before, after));
        }
    }

    fn file_failed(&mut self, path: &Utf8Path, error: &FileError) {
        println!("Error processing {path}: {error}");
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut report = RunReport::new(tool_info());

    let config = FixerConfig::for_repo(&cli.repo_root);
    let tree = FsSourceTree::new(config.scan_root.clone());
    let opts = RunOptions {
        dry_run: cli.dry_run,
    };

    let mut sink = ConsoleSink { diff: cli.diff };
    let outcome = Fixer::new(config).run(&tree, &opts, &mut sink)?;

    println!();
    println!(
        "Total files fixed: {}/{}",
        outcome.summary.fixed, outcome.summary.scanned
    );

    if let Some(path) = cli.report {
        report.summary = outcome.summary;
        report.outcomes = outcome.outcomes;
        report.run.ended_at = Some(Utc::now());
        write_json(&path, &report)?;
        info!("wrote run report to {}", path);
    }

    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "mojifix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
