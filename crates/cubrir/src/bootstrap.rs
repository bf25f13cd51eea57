//! Coverage Bootstrap
//!
//! One-shot, environment-conditional harness initialization: resolve the
//! `COVERAGE` flag once at process entry, and when it is set, start a
//! collection session with the merged formatter and the default exclusion
//! filters before any code under test runs.
//!
//! Ordering contract: call [`initialize`] at the top of the harness entry
//! point, before the code under test executes, otherwise lines run during
//! its setup are not attributed to coverage.

use crate::collector::Collector;
use crate::config::{SessionConfig, DEFAULT_EXCLUSIONS};
use crate::formatters::Formatter;
use crate::result::CubrirResult;
use std::ffi::OsStr;
use tracing::{debug, info};

/// Environment variable gating coverage collection
pub const COVERAGE_ENV: &str = "COVERAGE";

/// Whether coverage collection is enabled for this process
///
/// Truthiness convention: any non-empty value enables coverage; an unset
/// variable or an empty string disables it. Resolve once at process entry
/// and pass the value through, rather than re-reading the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageToggle {
    /// `COVERAGE` is set to a non-empty value
    Enabled,
    /// `COVERAGE` is unset or empty
    Disabled,
}

impl CoverageToggle {
    /// Resolve the toggle from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var_os(COVERAGE_ENV).as_deref())
    }

    /// Resolve the toggle from an explicit value
    ///
    /// Injectable form of [`from_env`](Self::from_env) for tests.
    #[must_use]
    pub fn from_value(value: Option<&OsStr>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::Enabled,
            _ => Self::Disabled,
        }
    }

    /// Check if coverage is enabled
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

/// Initialize coverage collection for this process
///
/// When the toggle is disabled this is a no-op: the collector is never
/// touched and `Ok(None)` is returned. When enabled, the collector's
/// formatter is set to [`Formatter::Merged`] and a session starts with the
/// exclusion filters of [`DEFAULT_EXCLUSIONS`]; the started configuration
/// is returned so the harness can locate the report later.
///
/// Runs exactly once per process. Errors are startup failures and should
/// abort the run.
pub fn initialize<C: Collector>(
    toggle: CoverageToggle,
    collector: &mut C,
) -> CubrirResult<Option<SessionConfig>> {
    if !toggle.is_enabled() {
        debug!("{COVERAGE_ENV} not set, coverage collection disabled");
        return Ok(None);
    }

    let config = SessionConfig::builder()
        .formatter(Formatter::Merged)
        .default_exclusions()
        .build()?;

    collector.set_formatter(Formatter::Merged);
    collector.start(&config)?;

    info!(
        filters = DEFAULT_EXCLUSIONS.len(),
        "coverage session started (merged report)"
    );
    Ok(Some(config))
}
