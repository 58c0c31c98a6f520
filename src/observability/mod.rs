//! Observability subsystem for neodb
//!
//! Structured JSON logging plus scope-based phase tracing.
//!
//! # Principles
//!
//! 1. Observability is read-only: no effect on linking or query results
//! 2. Synchronous, no background threads
//! 3. Deterministic output for identical events
//!
//! # Usage
//!
//! ```ignore
//! use neodb::observability::{Logger, ObservationScope, Severity};
//!
//! Logger::set_min_severity(Severity::Info);
//! Logger::info("QUERY_COMPLETE", &[("returned", "42")]);
//!
//! let scope = ObservationScope::new("LOAD");
//! // ... do work ...
//! scope.complete();
//! ```

mod logger;
mod scope;

pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};
