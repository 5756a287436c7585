//! Non-fatal diagnostics side channel.
//!
//! Diagnostics never change control flow. Each one is collected for the
//! caller and mirrored to `tracing` at `warn` level.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Categories of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A prerequisite code matches no mandatory course; the reference was dropped.
    UnknownPrerequisite,
    /// A corequisite code matches no mandatory course; the reference was dropped.
    UnknownCorequisite,
    /// A course code appeared more than once; later occurrences were dropped.
    DuplicateCode,
    /// A course had an empty code and was dropped.
    EmptyCode,
    /// Credits were negative or not finite and were treated as zero.
    InvalidCredits,
    /// Cycle composition hit the combination cap; alternatives were pruned.
    ComboCapReached,
    /// Best-first search hit the expansion cap; the plan is best-effort.
    ExpansionCapReached,
    /// Some courses can never become eligible; the plan is partial.
    Stalled,
    /// A corequisite closure exceeds the per-cycle course limit.
    OversizedClosure,
    /// The catalog document could not be read as a list of courses.
    InvalidCatalog,
}

/// A single diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Category.
    pub kind: DiagnosticKind,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Ordered diagnostic collector.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and logs it.
    pub fn push(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(kind, message);
        warn!(kind = ?diagnostic.kind, "{}", diagnostic.message);
        self.entries.push(diagnostic);
    }

    /// Whether a diagnostic of the given kind was recorded.
    pub fn contains(&self, kind: DiagnosticKind) -> bool {
        self.entries.iter().any(|d| d.kind == kind)
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the collector.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
