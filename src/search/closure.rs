//! Corequisite closure resolution.
//!
//! A course with pending corequisites can only be taken together with
//! them, transitively. The closure of a seed is every not-yet-taken
//! course reachable from it through corequisite edges.
//!
//! # Feasibility
//! Closures are all-or-nothing. Every member must already have its
//! prerequisites and rule gate satisfied by `taken`; a member cannot
//! satisfy another member's prerequisite because they share a cycle.
//! One infeasible member rejects the whole closure.

use crate::course_set::CourseSet;
use crate::index::CourseIndex;

/// Resolves the closure of `seed` against `taken`.
///
/// Returns `None` if any member is infeasible. If `seed` itself is
/// already taken, the closure holds only its pending partners (possibly
/// empty).
///
/// # Complexity
/// O(n + e) for the walk plus O(n) subset checks on members.
pub fn resolve(index: &CourseIndex, seed: usize, taken: &CourseSet) -> Option<CourseSet> {
    let mut visited = index.empty_set();
    let mut closure = index.empty_set();
    let mut stack = vec![seed];

    while let Some(u) = stack.pop() {
        if visited.contains(u) {
            continue;
        }
        visited.insert(u);

        // Taken partners are satisfied; the walk still passes through them.
        if !taken.contains(u) {
            closure.insert(u);
        }

        for &co in index.corequisites(u) {
            if !visited.contains(co) {
                stack.push(co);
            }
        }
    }

    let feasible = closure
        .iter()
        .all(|u| index.prerequisites_met(u, taken) && index.rule_satisfied(u, taken));

    feasible.then_some(closure)
}
