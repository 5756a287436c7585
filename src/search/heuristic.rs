//! Admissible lower bounds on remaining cycles.
//!
//! Two independent bounds, combined by maximum:
//!
//! - **Capacity**: `ceil(remaining / max_courses)`; every cycle holds at
//!   most `max_courses` courses.
//! - **Chain**: the longest prerequisite chain among not-yet-taken courses
//!   (a chain of length L needs L distinct cycles).
//!
//! Neither bound ever overestimates, so best-first search using their
//! maximum stays optimal.
//!
//! # Reference
//! Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//! Determination of Minimum Cost Paths"

use crate::course_set::CourseSet;
use crate::index::CourseIndex;

/// Lower bound on cycles needed to take every remaining course.
///
/// Returns 0 when nothing remains.
pub fn estimate(index: &CourseIndex, taken: &CourseSet, max_courses: usize) -> usize {
    let remaining = index.len() - taken.count();
    if remaining == 0 {
        return 0;
    }
    capacity_bound(remaining, max_courses).max(chain_bound(index, taken))
}

/// `ceil(remaining / max_courses)`; a zero course limit is treated as 1.
#[inline]
pub fn capacity_bound(remaining: usize, max_courses: usize) -> usize {
    remaining.div_ceil(max_courses.max(1))
}

#[derive(Clone, Copy)]
enum Depth {
    Unvisited,
    InProgress,
    Done(usize),
}

/// Longest chain of not-yet-taken courses linked by unmet prerequisites.
///
/// A course with no unmet prerequisite has depth 1. Memoization is local
/// to the call. A prerequisite cycle contributes nothing past its
/// back-edge, which keeps the walk finite.
pub fn chain_bound(index: &CourseIndex, taken: &CourseSet) -> usize {
    let mut memo = vec![Depth::Unvisited; index.len()];
    (0..index.len())
        .filter(|&u| !taken.contains(u))
        .map(|u| depth(u, index, taken, &mut memo))
        .max()
        .unwrap_or(0)
}

fn depth(u: usize, index: &CourseIndex, taken: &CourseSet, memo: &mut [Depth]) -> usize {
    match memo[u] {
        Depth::Done(d) => return d,
        Depth::InProgress => return 0, // Back edge
        Depth::Unvisited => {}
    }
    memo[u] = Depth::InProgress;

    let mut longest = 0;
    for p in index.prerequisites(u).iter() {
        if !taken.contains(p) {
            longest = longest.max(depth(p, index, taken, memo));
        }
    }

    let d = longest + 1;
    memo[u] = Depth::Done(d);
    d
}
