//! Session Configuration
//!
//! Explicit configuration for a coverage session, constructed once at the
//! harness entry point and passed into the collector. There is no
//! module-level global: whoever owns the config owns the session.

use crate::filter::ExclusionFilters;
use crate::formatters::Formatter;
use crate::result::CubrirResult;
use std::path::PathBuf;

/// Exclusion patterns applied to every coverage-enabled run: vendored
/// dependencies, example code, and the test suite itself.
pub const DEFAULT_EXCLUSIONS: [&str; 3] = ["vendor", "examples", "spec"];

/// Coverage session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Report output strategy
    pub formatter: Formatter,
    /// Paths excluded from coverage accounting
    pub filters: ExclusionFilters,
    /// Session name (used for per-run report file names)
    pub session_name: String,
    /// Directory reports are written to
    pub output_dir: PathBuf,
}

impl SessionConfig {
    /// Create a builder for session config
    #[must_use]
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    /// Path of the report file this session writes
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.output_dir
            .join(self.formatter.file_name(&self.session_name))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            formatter: Formatter::default(),
            filters: ExclusionFilters::new(),
            session_name: "coverage".to_string(),
            output_dir: PathBuf::from("coverage"),
        }
    }
}

/// Builder for session configuration
///
/// Patterns are validated in `build`, so a bad filter surfaces as a
/// startup failure rather than being dropped silently.
#[derive(Debug, Default)]
pub struct SessionConfigBuilder {
    formatter: Formatter,
    patterns: Vec<String>,
    session_name: Option<String>,
    output_dir: Option<PathBuf>,
}

impl SessionConfigBuilder {
    /// Set the report output strategy
    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Add an exclusion pattern
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Add the default exclusion patterns (vendor, examples, spec)
    #[must_use]
    pub fn default_exclusions(mut self) -> Self {
        self.patterns
            .extend(DEFAULT_EXCLUSIONS.iter().map(ToString::to_string));
        self
    }

    /// Set the session name
    #[must_use]
    pub fn session_name(mut self, name: impl Into<String>) -> Self {
        self.session_name = Some(name.into());
        self
    }

    /// Set the report output directory
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Build the configuration, validating filter patterns
    pub fn build(self) -> CubrirResult<SessionConfig> {
        let defaults = SessionConfig::default();
        Ok(SessionConfig {
            formatter: self.formatter,
            filters: ExclusionFilters::from_patterns(self.patterns)?,
            session_name: self.session_name.unwrap_or(defaults.session_name),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
        })
    }
}
