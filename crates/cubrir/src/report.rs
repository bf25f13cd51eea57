//! Coverage Report
//!
//! Per-file line hit counts accumulated over a session, plus summary
//! statistics. Reports from separate runs can be merged into one, which is
//! what the merged formatter aggregates over.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coverage summary statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Total number of instrumented lines
    pub total_lines: usize,
    /// Number of covered lines (hit count > 0)
    pub covered_lines: usize,
    /// Coverage percentage
    pub coverage_percent: f64,
}

/// Coverage report containing all coverage data for a session
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Session name
    session_name: Option<String>,
    /// Hit counts per line, keyed by project-relative file path
    files: BTreeMap<String, BTreeMap<u32, u64>>,
}

impl CoverageReport {
    /// Create a new, empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session name
    pub fn set_session_name(&mut self, name: &str) {
        self.session_name = Some(name.to_string());
    }

    /// Get the session name
    #[must_use]
    pub fn session_name(&self) -> Option<&str> {
        self.session_name.as_deref()
    }

    /// Record a single hit on a line
    pub fn record_hit(&mut self, file: &str, line: u32) {
        self.record_hits(file, line, 1);
    }

    /// Record multiple hits on a line
    ///
    /// A count of zero registers the line as instrumented but uncovered,
    /// so it still contributes to the total in the summary.
    pub fn record_hits(&mut self, file: &str, line: u32, count: u64) {
        *self
            .files
            .entry(file.to_string())
            .or_default()
            .entry(line)
            .or_insert(0) += count;
    }

    /// Get the hit count for a line
    #[must_use]
    pub fn hit_count(&self, file: &str, line: u32) -> u64 {
        self.files
            .get(file)
            .and_then(|lines| lines.get(&line))
            .copied()
            .unwrap_or(0)
    }

    /// Check if a line is covered
    #[must_use]
    pub fn is_covered(&self, file: &str, line: u32) -> bool {
        self.hit_count(file, line) > 0
    }

    /// Iterate over files and their line hit counts
    pub fn files(&self) -> impl Iterator<Item = (&str, &BTreeMap<u32, u64>)> {
        self.files.iter().map(|(f, lines)| (f.as_str(), lines))
    }

    /// Number of files in the report
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total number of instrumented lines
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.files.values().map(BTreeMap::len).sum()
    }

    /// Number of covered lines
    #[must_use]
    pub fn covered_lines(&self) -> usize {
        self.files
            .values()
            .flat_map(BTreeMap::values)
            .filter(|&&c| c > 0)
            .count()
    }

    /// Get the coverage percentage
    #[must_use]
    pub fn coverage_percent(&self) -> f64 {
        let total = self.total_lines();
        if total == 0 {
            return 100.0; // Vacuously true
        }
        (self.covered_lines() as f64 / total as f64) * 100.0
    }

    /// Get coverage summary
    #[must_use]
    pub fn summary(&self) -> CoverageSummary {
        CoverageSummary {
            total_lines: self.total_lines(),
            covered_lines: self.covered_lines(),
            coverage_percent: self.coverage_percent(),
        }
    }

    /// Merge another report into this one
    ///
    /// Hit counts add per line; the session name of `self` wins.
    pub fn merge(&mut self, other: &CoverageReport) {
        for (file, lines) in &other.files {
            for (line, count) in lines {
                self.record_hits(file, *line, *count);
            }
        }
        if self.session_name.is_none() {
            self.session_name.clone_from(&other.session_name);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_vacuously_covered() {
        let report = CoverageReport::new();
        assert_eq!(report.total_lines(), 0);
        assert!((report.coverage_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_and_query_hits() {
        let mut report = CoverageReport::new();
        report.record_hit("src/lib.rs", 10);
        report.record_hits("src/lib.rs", 10, 4);

        assert_eq!(report.hit_count("src/lib.rs", 10), 5);
        assert!(report.is_covered("src/lib.rs", 10));
        assert!(!report.is_covered("src/lib.rs", 11));
    }

    #[test]
    fn test_zero_count_registers_uncovered_line() {
        let mut report = CoverageReport::new();
        report.record_hits("src/lib.rs", 3, 0);

        assert_eq!(report.total_lines(), 1);
        assert_eq!(report.covered_lines(), 0);
        assert!((report.coverage_percent() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary() {
        let mut report = CoverageReport::new();
        report.record_hits("src/a.rs", 1, 2);
        report.record_hits("src/a.rs", 2, 0);
        report.record_hits("src/b.rs", 1, 1);

        let summary = report.summary();
        assert_eq!(summary.total_lines, 3);
        assert_eq!(summary.covered_lines, 2);
        assert!((summary.coverage_percent - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge_adds_hit_counts() {
        let mut first = CoverageReport::new();
        first.record_hits("src/a.rs", 1, 2);

        let mut second = CoverageReport::new();
        second.record_hits("src/a.rs", 1, 3);
        second.record_hits("src/b.rs", 7, 1);

        first.merge(&second);

        assert_eq!(first.hit_count("src/a.rs", 1), 5);
        assert_eq!(first.hit_count("src/b.rs", 7), 1);
        assert_eq!(first.file_count(), 2);
    }

    #[test]
    fn test_merge_keeps_own_session_name() {
        let mut first = CoverageReport::new();
        first.set_session_name("first");

        let mut second = CoverageReport::new();
        second.set_session_name("second");

        first.merge(&second);
        assert_eq!(first.session_name(), Some("first"));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut report = CoverageReport::new();
        report.set_session_name("session");
        report.record_hits("src/a.rs", 5, 9);

        let json = serde_json::to_string(&report).unwrap();
        let loaded: CoverageReport = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.session_name(), Some("session"));
        assert_eq!(loaded.hit_count("src/a.rs", 5), 9);
    }
}
