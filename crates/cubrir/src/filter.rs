//! Exclusion Filters
//!
//! Path-prefix patterns marking code that should not count toward coverage:
//! vendored dependencies, example code, the test suite itself.
//!
//! Matching is by leading path component: `vendor` excludes
//! `vendor/foo/bar.rs` but not `vendored/bar.rs`.

use crate::result::{CubrirError, CubrirResult};
use std::collections::BTreeSet;

/// A set of path-prefix exclusion patterns
///
/// Set semantics: insertion order does not matter and duplicates collapse,
/// so two filter sets compare equal whenever they hold the same patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionFilters {
    patterns: BTreeSet<String>,
}

impl ExclusionFilters {
    /// Create an empty filter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter set from an iterator of patterns
    pub fn from_patterns<I, S>(patterns: I) -> CubrirResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filters = Self::new();
        for pattern in patterns {
            filters.add(pattern)?;
        }
        Ok(filters)
    }

    /// Add a pattern to the set
    ///
    /// Patterns are project-relative; a leading `./` is stripped and a
    /// trailing `/` is ignored. Empty and absolute patterns are rejected.
    pub fn add(&mut self, pattern: impl Into<String>) -> CubrirResult<()> {
        let raw = pattern.into();
        let trimmed = raw
            .strip_prefix("./")
            .unwrap_or(&raw)
            .trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(CubrirError::InvalidFilter {
                reason: "empty pattern".to_string(),
            });
        }
        if trimmed.starts_with('/') {
            return Err(CubrirError::InvalidFilter {
                reason: format!("absolute pattern: {raw}"),
            });
        }

        self.patterns.insert(trimmed.to_string());
        Ok(())
    }

    /// Check whether a path is excluded by any pattern in the set
    #[must_use]
    pub fn excludes(&self, path: &str) -> bool {
        let path = path.strip_prefix("./").unwrap_or(path);
        self.patterns.iter().any(|p| Self::prefix_match(p, path))
    }

    /// Iterate over the patterns in the set
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// Number of patterns in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// A pattern matches when it is a whole-component prefix of the path
    fn prefix_match(pattern: &str, path: &str) -> bool {
        match path.strip_prefix(pattern) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}
