//! Search primitives shared by both planning strategies.
//!
//! Data flows strictly downward:
//!
//! 1. [`closure::resolve`]: corequisite closure of a seed course, validated all-or-nothing.
//! 2. [`heuristic::estimate`]: admissible lower bound on remaining cycles.
//! 3. [`eligibility::eligible`]: every valid closure schedulable from a state, as [`Unit`]s.
//! 4. [`compose::compose`]: bounded enumeration of non-overlapping unit combinations.
//!
//! The drivers in [`crate::scheduler`] turn composed cycles into state
//! transitions.

pub mod closure;
pub mod compose;
pub mod eligibility;
pub mod heuristic;

pub use closure::resolve;
pub use compose::{compose, Combo, Composition};
pub use eligibility::eligible;
pub use heuristic::{capacity_bound, chain_bound, estimate};

use crate::course_set::CourseSet;

/// Tolerance for credit budget comparisons.
pub(crate) const CREDIT_EPSILON: f64 = 1e-9;

/// Whether a credit total fits within a limit.
#[inline]
pub(crate) fn within_credits(total: f64, limit: f64) -> bool {
    total <= limit + CREDIT_EPSILON
}

/// A validated corequisite closure: the atom of scheduling.
///
/// All members must be enrolled in the same cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Member courses.
    pub mask: CourseSet,
    /// Ordinal of the course the closure was resolved from.
    pub seed: usize,
    /// Number of members.
    pub size: usize,
    /// Credit sum of members.
    pub credits: f64,
    /// Smallest cycle hint among members.
    pub earliest_cycle: u32,
    /// Number of other courses listing any member as a prerequisite.
    pub unlocks: usize,
}
