//! Aggregating per-file issues into a run and printing the text report

pub mod stats;

pub use stats::RunStatistics;

use crate::checker::Issue;
use console::Style;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 60;

/// Issues found in one file, in the order they were found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub issues: Vec<Issue>,
}

/// Every file checked in one invocation, plus counters
#[derive(Debug, Clone, Default)]
pub struct ValidationRun {
    files: Vec<FileReport>,
    stats: RunStatistics,
}

impl ValidationRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the issues of one scanned file.
    ///
    /// Returns the stored report when the file had at least one issue.
    pub fn record(&mut self, path: &Path, issues: Vec<Issue>) -> Option<&FileReport> {
        self.stats.record_file(issues.len());
        if issues.is_empty() {
            return None;
        }
        self.files.push(FileReport {
            path: path.to_path_buf(),
            issues,
        });
        self.files.last()
    }

    pub fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    pub fn is_success(&self) -> bool {
        self.stats.is_success()
    }
}

/// Plain-text report writer
pub struct Reporter<W: Write> {
    out: W,
    heading: Style,
    success: Style,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            heading: Style::new().yellow().bold().force_styling(color),
            success: Style::new().green().force_styling(color),
        }
    }

    pub fn scanning(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "Scanning for JSON files in: {}", root.display())
    }

    pub fn no_files(&mut self) -> io::Result<()> {
        writeln!(self.out, "No JSON files found.")
    }

    pub fn found(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "Found {} JSON file(s)\n", count)
    }

    /// Print one file's issue block
    pub fn file(&mut self, report: &FileReport) -> io::Result<()> {
        let heading = format!("{}:", report.path.display());
        writeln!(self.out, "\n{}", self.heading.apply_to(heading))?;
        for issue in &report.issues {
            writeln!(self.out, "  - {}", issue)?;
        }
        Ok(())
    }

    pub fn summary(&mut self, stats: &RunStatistics) -> io::Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out, "{}", stats)?;
        if stats.is_success() {
            let line = "✓ All JSON files passed validation!";
            writeln!(self.out, "\n{}", self.success.apply_to(line))?;
        }
        Ok(())
    }
}
