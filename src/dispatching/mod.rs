//! Priority rules for ordering schedulable units.
//!
//! The fast planning strategy fills each cycle greedily from an ordered
//! list of units. The order is a policy, not a correctness requirement,
//! so it is expressed as composable dispatching rules.
//!
//! # Usage
//!
//! ```
//! use u_curriculum::dispatching::{rules, RuleEngine};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::EarliestCycle)
//!     .with_tie_breaker(rules::LargestClosure);
//! // let order = engine.sort_indices(&units);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{EvaluationMode, RuleEngine};

use crate::search::Unit;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (scheduled first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates unit priority.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait UnitRule: Send + Sync + Debug {
    /// Rule name (e.g., "EC", "LC").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a unit. Lower = scheduled first.
    fn evaluate(&self, unit: &Unit) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
