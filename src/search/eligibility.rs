//! Eligibility: which closures can be scheduled next.

use std::collections::HashSet;

use super::{resolve, within_credits, Unit};
use crate::course_set::CourseSet;
use crate::index::CourseIndex;

/// Computes every unit schedulable in the cycle after `taken`.
///
/// A seed qualifies when it is not taken, its prerequisites are in
/// `taken`, and its rule gate is satisfied. Its closure must resolve and
/// fit `max_credits` on its own. Units are returned in seed order; a
/// closure reached from several seeds is kept once (first seed).
///
/// # Complexity
/// O(n · (n + e)) closure resolutions per call.
pub fn eligible(index: &CourseIndex, taken: &CourseSet, max_credits: f64) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut seen: HashSet<CourseSet> = HashSet::new();

    for seed in 0..index.len() {
        if taken.contains(seed)
            || !index.prerequisites_met(seed, taken)
            || !index.rule_satisfied(seed, taken)
        {
            continue;
        }

        let Some(mask) = resolve(index, seed, taken) else {
            continue;
        };

        let credits = index.credit_sum(&mask);
        if !within_credits(credits, max_credits) || seen.contains(&mask) {
            continue;
        }

        units.push(Unit {
            seed,
            size: mask.count(),
            credits,
            earliest_cycle: index.earliest_cycle(&mask),
            unlocks: index.unlock_potential(&mask),
            mask: mask.clone(),
        });
        seen.insert(mask);
    }

    units
}
