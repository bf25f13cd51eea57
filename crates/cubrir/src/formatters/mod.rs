//! Coverage Report Formatters
//!
//! Output strategies for coverage reports. The merged formatter produces a
//! single aggregated report for the whole run; the per-run formatter writes
//! one file per session.

mod merged;

pub use merged::MergedFormatter;

/// Report output strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formatter {
    /// One report file per session (host default)
    #[default]
    PerRun,
    /// Single aggregated report for the whole run
    Merged,
}

impl Formatter {
    /// File name the formatter writes under the output directory
    #[must_use]
    pub fn file_name(self, session_name: &str) -> String {
        match self {
            Self::Merged => "coverage.txt".to_string(),
            Self::PerRun => format!("{session_name}.txt"),
        }
    }
}
