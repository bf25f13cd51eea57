//! Merged Report Formatter
//!
//! Generates a single aggregated coverage report: one line per source file
//! with covered/total line counts and a percentage, followed by a TOTAL
//! line. Merge reports from multiple runs into one `CoverageReport` first
//! (`CoverageReport::merge`) and format the result.
//!
//! ```text
//! SF:src/game.rs 2/3 66.7%
//! SF:src/player.rs 1/1 100.0%
//! TOTAL 3/4 75.0%
//! ```

use crate::report::CoverageReport;
use crate::result::CubrirResult;
use std::path::Path;

/// Merged-format report generator
#[derive(Debug)]
pub struct MergedFormatter<'a> {
    report: &'a CoverageReport,
}

impl<'a> MergedFormatter<'a> {
    /// Create a new merged formatter from coverage data
    #[must_use]
    pub fn new(report: &'a CoverageReport) -> Self {
        Self { report }
    }

    /// Generate the merged report as a string
    #[must_use]
    pub fn generate(&self) -> String {
        use std::fmt::Write;

        let mut output = String::new();

        if let Some(name) = self.report.session_name() {
            let _ = writeln!(output, "TN:{name}");
        }

        for (file, lines) in self.report.files() {
            let total = lines.len();
            let covered = lines.values().filter(|&&c| c > 0).count();
            let percent = Self::percent(covered, total);
            let _ = writeln!(output, "SF:{file} {covered}/{total} {percent:.1}%");
        }

        let summary = self.report.summary();
        let _ = writeln!(
            output,
            "TOTAL {}/{} {:.1}%",
            summary.covered_lines, summary.total_lines, summary.coverage_percent
        );

        output
    }

    /// Generate the report as pretty-printed JSON
    pub fn generate_json(&self) -> CubrirResult<String> {
        Ok(serde_json::to_string_pretty(self.report)?)
    }

    /// Save the merged report to a file
    ///
    /// # Errors
    ///
    /// Returns error if directory creation or file write fails
    pub fn save(&self, path: &Path) -> CubrirResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.generate())?;
        Ok(())
    }

    fn percent(covered: usize, total: usize) -> f64 {
        if total == 0 {
            return 100.0;
        }
        (covered as f64 / total as f64) * 100.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn create_test_report() -> CoverageReport {
        let mut report = CoverageReport::new();
        report.set_session_name("test_session");

        report.record_hits("src/game.rs", 10, 10);
        report.record_hits("src/game.rs", 15, 5);
        report.record_hits("src/game.rs", 20, 0);
        report.record_hits("src/player.rs", 5, 3);

        report
    }

    #[test]
    fn test_generate_empty_report() {
        let report = CoverageReport::new();
        let output = MergedFormatter::new(&report).generate();

        assert!(output.contains("TOTAL 0/0 100.0%"));
    }

    #[test]
    fn test_generate_contains_session_name() {
        let report = create_test_report();
        let output = MergedFormatter::new(&report).generate();

        assert!(output.contains("TN:test_session"));
    }

    #[test]
    fn test_generate_contains_source_files() {
        let report = create_test_report();
        let output = MergedFormatter::new(&report).generate();

        assert!(output.contains("SF:src/game.rs 2/3 66.7%"));
        assert!(output.contains("SF:src/player.rs 1/1 100.0%"));
    }

    #[test]
    fn test_generate_total_line() {
        let report = create_test_report();
        let output = MergedFormatter::new(&report).generate();

        assert!(output.contains("TOTAL 3/4 75.0%"));
    }

    #[test]
    fn test_generate_aggregates_merged_runs() {
        let mut first = create_test_report();

        let mut second = CoverageReport::new();
        second.record_hits("src/game.rs", 20, 2); // covers the missed line
        first.merge(&second);

        let output = MergedFormatter::new(&first).generate();
        assert!(output.contains("TOTAL 4/4 100.0%"));
    }

    #[test]
    fn test_generate_json_parses_back() {
        let report = create_test_report();
        let json = MergedFormatter::new(&report).generate_json().unwrap();

        let loaded: CoverageReport = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.hit_count("src/game.rs", 10), 10);
    }

    #[test]
    fn test_save_creates_file_and_parents() {
        let report = create_test_report();
        let formatter = MergedFormatter::new(&report);

        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("coverage").join("coverage.txt");

        formatter.save(&path).unwrap();

        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("TOTAL"));
    }
}
