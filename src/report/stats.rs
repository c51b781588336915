//! Counters for a validation run

use std::fmt;

/// Totals collected across every scanned file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Number of JSON files checked
    pub files_scanned: usize,
    /// Number of files that produced at least one issue
    pub files_with_issues: usize,
    /// Number of issues across all files
    pub total_issues: usize,
}

impl RunStatistics {
    /// Record the outcome of checking one file
    pub fn record_file(&mut self, issue_count: usize) {
        self.files_scanned += 1;
        if issue_count > 0 {
            self.files_with_issues += 1;
            self.total_issues += issue_count;
        }
    }

    pub fn is_success(&self) -> bool {
        self.total_issues == 0
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Total files scanned: {}", self.files_scanned)?;
        writeln!(f, "  Files with issues: {}", self.files_with_issues)?;
        write!(f, "  Total issues found: {}", self.total_issues)
    }
}
