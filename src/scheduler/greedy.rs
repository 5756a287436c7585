//! Deterministic greedy planning.
//!
//! # Algorithm
//!
//! 1. Compute eligible units for the current taken-set.
//! 2. Order them with the configured [`RuleEngine`](crate::dispatching::RuleEngine).
//! 3. Accept units in order while they are disjoint from the cycle and fit
//!    the course and credit budget.
//! 4. If nothing fits (every unit is larger than the course limit), take
//!    the smallest unit alone; closures are never split.
//! 5. Commit the cycle and repeat.
//!
//! Stops on success, when no unit is eligible (stall), or if a taken-set
//! recurs. Every committed cycle adds at least one course, so the walk
//! ends within `n + 1` iterations.
//!
//! # Complexity
//! O(n² · (n + e)) per iteration, dominated by eligibility.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::collections::HashSet;

use tracing::debug;

use super::config::PlannerConfig;
use super::{PlanStatus, Trace};
use crate::course_set::CourseSet;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::dispatching::{rules, RuleEngine};
use crate::index::CourseIndex;
use crate::search::{eligible, within_credits};

/// Runs the greedy walk from `start`.
pub(crate) fn search(
    index: &CourseIndex,
    start: &CourseSet,
    config: &PlannerConfig,
    diagnostics: &mut Diagnostics,
) -> Trace {
    let max_courses = config.max_courses_per_cycle;
    let max_credits = config.max_credits_per_cycle;
    let ordering = config.unit_ordering();
    let smallest = RuleEngine::new()
        .with_rule(rules::SmallestClosure)
        .with_tie_breaker(rules::FewestCredits);

    let mut taken = start.clone();
    let mut seen: HashSet<CourseSet> = HashSet::new();
    seen.insert(taken.clone());
    let mut cycles = Vec::new();
    let mut status = PlanStatus::Stalled;
    let mut iterations = 0;

    while iterations <= index.len() {
        if taken.is_full() {
            status = PlanStatus::Complete;
            break;
        }
        iterations += 1;

        let units = eligible(index, &taken, max_credits);
        if units.is_empty() {
            break;
        }

        let mut cycle = index.empty_set();
        let mut size = 0;
        let mut credits = 0.0;
        for i in ordering.sort_indices(&units) {
            let unit = &units[i];
            if size + unit.size <= max_courses
                && within_credits(credits + unit.credits, max_credits)
                && cycle.is_disjoint(&unit.mask)
            {
                cycle.union_with(&unit.mask);
                size += unit.size;
                credits += unit.credits;
            }
        }

        if cycle.is_empty() {
            let Some(pick) = smallest.select_best(&units) else {
                break;
            };
            let unit = &units[pick];
            diagnostics.push(
                DiagnosticKind::OversizedClosure,
                format!(
                    "corequisite group {:?} has {} courses, above the limit of {max_courses}; scheduling it alone",
                    index.codes_of(&unit.mask),
                    unit.size
                ),
            );
            cycle = unit.mask.clone();
        }

        let next = taken.union(&cycle);
        if !seen.insert(next.clone()) {
            break;
        }
        taken = next;
        cycles.push(cycle);
    }

    debug!(
        iterations,
        cycles = cycles.len(),
        complete = status == PlanStatus::Complete,
        "greedy walk finished"
    );

    Trace {
        cycles,
        status,
        expansions: iterations,
        combo_truncated: false,
    }
}
