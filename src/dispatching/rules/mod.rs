//! Built-in unit rules.
//!
//! # Categories
//!
//! - **Curriculum order**: EC (earliest cycle hint)
//! - **Throughput**: LC (largest closure), MU (most unlocks)
//! - **Cost**: FC (fewest credits), SC (smallest closure)
//!
//! # Score Convention
//! All rules return lower scores for higher priority units.

use super::{RuleScore, UnitRule};
use crate::search::Unit;

/// Earliest Cycle.
///
/// Prefers units whose earliest member sits in an earlier curriculum
/// cycle, keeping the plan close to the recommended order.
#[derive(Debug, Clone, Copy)]
pub struct EarliestCycle;

impl UnitRule for EarliestCycle {
    fn name(&self) -> &'static str {
        "EC"
    }

    fn evaluate(&self, unit: &Unit) -> RuleScore {
        unit.earliest_cycle as f64
    }

    fn description(&self) -> &'static str {
        "Earliest Cycle hint"
    }
}

/// Largest Closure.
///
/// Prefers bigger corequisite groups: they are the hardest to place later.
#[derive(Debug, Clone, Copy)]
pub struct LargestClosure;

impl UnitRule for LargestClosure {
    fn name(&self) -> &'static str {
        "LC"
    }

    fn evaluate(&self, unit: &Unit) -> RuleScore {
        -(unit.size as f64)
    }

    fn description(&self) -> &'static str {
        "Largest Closure"
    }
}

/// Most Unlocks.
///
/// Prefers units that are prerequisites of many other courses.
#[derive(Debug, Clone, Copy)]
pub struct MostUnlocks;

impl UnitRule for MostUnlocks {
    fn name(&self) -> &'static str {
        "MU"
    }

    fn evaluate(&self, unit: &Unit) -> RuleScore {
        -(unit.unlocks as f64)
    }

    fn description(&self) -> &'static str {
        "Most Unlocks"
    }
}

/// Fewest Credits.
#[derive(Debug, Clone, Copy)]
pub struct FewestCredits;

impl UnitRule for FewestCredits {
    fn name(&self) -> &'static str {
        "FC"
    }

    fn evaluate(&self, unit: &Unit) -> RuleScore {
        unit.credits
    }

    fn description(&self) -> &'static str {
        "Fewest Credits"
    }
}

/// Smallest Closure.
///
/// Used to pick the unit scheduled alone when nothing fits a cycle.
#[derive(Debug, Clone, Copy)]
pub struct SmallestClosure;

impl UnitRule for SmallestClosure {
    fn name(&self) -> &'static str {
        "SC"
    }

    fn evaluate(&self, unit: &Unit) -> RuleScore {
        unit.size as f64
    }

    fn description(&self) -> &'static str {
        "Smallest Closure"
    }
}
