//! Command-line interface module

use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::parser::{check_file, directory::find_json_files};
use crate::report::{Reporter, ValidationRun};

/// Text printed when no folder is given
pub const USAGE: &str = "\
Usage: slugcheck <folder_path>

Checks all JSON files in the folder for invalid object keys (attribute names).
Only lowercase letters, digits, and hyphens (-) are allowed for keys.

Note: String values (like display text) are NOT checked.
Exception: If the JSON file is a top-level array of strings, those are validated.";

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "slugcheck")]
#[command(about = "Check JSON object keys for slug naming (lowercase letters, digits, hyphens)")]
#[command(version)]
pub struct Args {
    /// Folder to scan recursively for .json files
    #[arg(value_name = "FOLDER_PATH")]
    pub folder: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Settings for one validation run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub color: bool,
}

impl RunConfig {
    /// Build the run configuration; `None` when no folder was given
    pub fn from_args(args: &Args) -> Option<Self> {
        let root = args.folder.clone()?;
        Some(Self {
            root,
            color: !args.no_color && console::colors_enabled(),
        })
    }
}

/// Set up tracing on stderr. `RUST_LOG` takes precedence over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore an already-installed subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Print the usage text
pub fn print_usage<W: Write>(mut out: W) -> io::Result<()> {
    writeln!(out, "{}", USAGE)
}

/// Discover the files under `root`; path errors are printed and yield no files.
pub fn discover(root: &Path) -> Vec<PathBuf> {
    match find_json_files(root) {
        Ok(files) => files,
        Err(err) => {
            show_error(&err.to_string());
            Vec::new()
        }
    }
}

/// Scan, check and report. Returns the finished run.
pub fn run<W: Write>(config: &RunConfig, out: W) -> io::Result<ValidationRun> {
    let mut reporter = Reporter::new(out, config.color);
    let mut run = ValidationRun::new();

    reporter.scanning(&config.root)?;
    let json_files = discover(&config.root);

    if json_files.is_empty() {
        reporter.no_files()?;
        return Ok(run);
    }

    reporter.found(json_files.len())?;

    for json_file in &json_files {
        let issues = check_file(json_file);
        tracing::debug!(file = %json_file.display(), issues = issues.len(), "checked file");
        if let Some(report) = run.record(json_file, issues) {
            reporter.file(report)?;
        }
    }

    reporter.summary(run.stats())?;
    tracing::info!(
        files = run.stats().files_scanned,
        files_with_issues = run.stats().files_with_issues,
        issues = run.stats().total_issues,
        "validation finished"
    );

    Ok(run)
}

/// Exit status for a finished run: failure if any issue was found
pub fn exit_code(run: &ValidationRun) -> ExitCode {
    if run.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Show an error message on stderr
pub fn show_error(message: &str) {
    eprintln!("Error: {}", message);
}
