//! Cubrir: Coverage Bootstrap for Test Harnesses
//!
//! Cubrir (Spanish: "to cover") is the environment-gated coverage bootstrap
//! for test harnesses: it decides at process entry, from the `COVERAGE`
//! flag, whether to start a coverage-collection session, and when it does,
//! configures the merged report formatter and the standard exclusion
//! filters (vendor, examples, spec) before any code under test runs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    CUBRIR Architecture                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ COVERAGE   │    │ Coverage   │    │ Merged     │            │
//! │   │ env toggle │───►│ Collector  │───►│ Report     │            │
//! │   │ (entry)    │    │ (session)  │    │ (exit)     │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use cubrir::{initialize, CoverageCollector, CoverageToggle};
//!
//! let mut collector = CoverageCollector::new();
//! let toggle = CoverageToggle::from_env();
//! let session = initialize(toggle, &mut collector)?;
//!
//! // ... run the suite, then at exit:
//! if session.is_some() {
//!     collector.end_session_to_disk()?;
//! }
//! # Ok::<(), cubrir::CubrirError>(())
//! ```
//!
//! No hidden global state: the toggle is resolved once and threaded through,
//! and the collector is an explicitly constructed object owned by the
//! harness.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod bootstrap;
mod collector;
mod config;
mod filter;
pub mod formatters;
mod report;
mod result;

pub use bootstrap::{initialize, CoverageToggle, COVERAGE_ENV};
pub use collector::{Collector, CoverageCollector};
pub use config::{SessionConfig, SessionConfigBuilder, DEFAULT_EXCLUSIONS};
pub use filter::ExclusionFilters;
pub use formatters::{Formatter, MergedFormatter};
pub use report::{CoverageReport, CoverageSummary};
pub use result::{CubrirError, CubrirResult};
