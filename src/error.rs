//! Planner errors.
//!
//! Only caller mistakes are errors. Everything the engine can recover
//! from (dangling references, infeasible closures, exhausted caps) is
//! reported as a [`Diagnostic`](crate::diagnostics::Diagnostic) instead.

use thiserror::Error;

/// Errors raised before a search starts.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A configuration value is out of range.
    #[error("invalid planner configuration: {0}")]
    InvalidConfig(String),

    /// A catalog or curriculum document is not structurally valid.
    #[error("malformed catalog document: {0}")]
    Catalog(#[from] serde_json::Error),
}
