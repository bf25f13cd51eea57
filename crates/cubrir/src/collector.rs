//! Coverage Collector
//!
//! The collection seam the bootstrap drives: `set_formatter` then `start`.
//! `CoverageCollector` is the in-process implementation; tests verify the
//! bootstrap contract against a recording double of the same trait.

use crate::config::SessionConfig;
use crate::formatters::{Formatter, MergedFormatter};
use crate::report::CoverageReport;
use crate::result::{CubrirError, CubrirResult};
use std::path::PathBuf;
use tracing::{debug, info};

/// The coverage-collection seam driven by the bootstrap
pub trait Collector {
    /// Select the report output strategy for subsequent sessions
    fn set_formatter(&mut self, formatter: Formatter);

    /// Begin a coverage session with the given configuration
    ///
    /// Fails if a session is already active.
    fn start(&mut self, config: &SessionConfig) -> CubrirResult<()>;
}

/// In-process coverage collector
///
/// Owns the active session and its report. At most one session is active
/// per collector; the harness constructs exactly one collector at entry,
/// which gives the per-process version of the same invariant without any
/// module-level global.
#[derive(Debug, Default)]
pub struct CoverageCollector {
    formatter: Formatter,
    config: Option<SessionConfig>,
    report: Option<CoverageReport>,
    session_active: bool,
}

impl CoverageCollector {
    /// Create a new collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a session is active
    #[must_use]
    pub fn is_session_active(&self) -> bool {
        self.session_active
    }

    /// Get the active formatter
    #[must_use]
    pub fn formatter(&self) -> Formatter {
        self.formatter
    }

    /// Get the active session configuration
    #[must_use]
    pub fn config(&self) -> Option<&SessionConfig> {
        self.config.as_ref()
    }

    /// Record a hit on a line
    ///
    /// Hits on excluded paths are dropped. Hits outside an active session
    /// are ignored.
    pub fn record_hit(&mut self, file: &str, line: u32) {
        self.record_hits(file, line, 1);
    }

    /// Record multiple hits on a line
    pub fn record_hits(&mut self, file: &str, line: u32, count: u64) {
        if !self.session_active {
            return;
        }
        if let Some(config) = &self.config {
            if config.filters.excludes(file) {
                return;
            }
        }
        if let Some(report) = &mut self.report {
            report.record_hits(file, line, count);
        }
    }

    /// End the active session and return its report
    pub fn end_session(&mut self) -> CubrirResult<CoverageReport> {
        if !self.session_active {
            return Err(CubrirError::NoSession);
        }
        self.session_active = false;
        debug!("coverage session ended");
        self.report.take().ok_or(CubrirError::NoSession)
    }

    /// End the active session and write its report to disk
    ///
    /// Returns the path of the written report. The merged formatter always
    /// writes the single aggregated file; per-run sessions get a file of
    /// their own.
    pub fn end_session_to_disk(&mut self) -> CubrirResult<PathBuf> {
        let config = self.config.clone().ok_or(CubrirError::NoSession)?;
        let report = self.end_session()?;
        // the formatter choice is already baked into report_path
        let path = config.report_path();
        MergedFormatter::new(&report).save(&path)?;

        info!(path = %path.display(), "coverage report written");
        Ok(path)
    }
}

impl Collector for CoverageCollector {
    fn set_formatter(&mut self, formatter: Formatter) {
        self.formatter = formatter;
    }

    fn start(&mut self, config: &SessionConfig) -> CubrirResult<()> {
        if self.session_active {
            return Err(CubrirError::SessionActive {
                name: self
                    .config
                    .as_ref()
                    .map_or_else(String::new, |c| c.session_name.clone()),
            });
        }

        let mut report = CoverageReport::new();
        report.set_session_name(&config.session_name);

        self.formatter = config.formatter;
        self.config = Some(config.clone());
        self.report = Some(report);
        self.session_active = true;

        info!(
            session = %config.session_name,
            filters = config.filters.len(),
            "coverage session started"
        );
        Ok(())
    }
}
