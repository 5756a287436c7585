//! Best-first (A*) planning.
//!
//! # Algorithm
//!
//! 1. States are taken-sets; the start is the completed set.
//! 2. Pop the frontier entry with the lowest `f = g + h` (`g` = cycles used,
//!    `h` = [`estimate`]); ties prefer deeper states, then older entries.
//! 3. Expand: compute eligible units, compose combos, and enqueue
//!    `taken | combo` with `g + 1` only when it improves the best known
//!    cost for that exact state.
//! 4. Stop at the first popped goal (every course taken). Otherwise, when
//!    the frontier empties or the expansion cap is hit, fall back to a
//!    best-effort plan.
//!
//! With an admissible `h`, the first goal popped uses the minimum number
//! of cycles reachable under the composition cap.
//!
//! # Reference
//! Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//! Determination of Minimum Cost Paths"

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use super::config::{CapFallback, PlannerConfig};
use super::{greedy, PlanStatus, Trace};
use crate::course_set::CourseSet;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::index::CourseIndex;
use crate::search::{compose, eligible, estimate};

/// A visited state with its best known predecessor.
struct Node {
    state: CourseSet,
    g: usize,
    parent: Option<usize>,
    action: Option<CourseSet>,
}

#[derive(Debug, PartialEq, Eq)]
struct Frontier {
    f: usize,
    g: usize,
    seq: usize,
    node: usize,
}

impl Ord for Frontier {
    // BinaryHeap is a max-heap: "greater" pops first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs best-first search from `start`.
pub(crate) fn search(
    index: &CourseIndex,
    start: &CourseSet,
    config: &PlannerConfig,
    diagnostics: &mut Diagnostics,
) -> Trace {
    let max_courses = config.max_courses_per_cycle;
    let max_credits = config.max_credits_per_cycle;

    let mut nodes = vec![Node {
        state: start.clone(),
        g: 0,
        parent: None,
        action: None,
    }];
    let mut lookup: HashMap<CourseSet, usize> = HashMap::new();
    lookup.insert(start.clone(), 0);

    let mut frontier = BinaryHeap::new();
    frontier.push(Frontier {
        f: estimate(index, start, max_courses),
        g: 0,
        seq: 0,
        node: 0,
    });
    let mut seq = 1;

    let mut expansions = 0;
    let mut combo_truncated = false;
    let mut capped = false;
    let mut goal = None;

    while let Some(entry) = frontier.pop() {
        let current = entry.node;
        if entry.g > nodes[current].g {
            continue; // Stale
        }
        if nodes[current].state.is_full() {
            goal = Some(current);
            break;
        }
        if expansions >= config.expansion_cap {
            capped = true;
            break;
        }
        expansions += 1;

        let state = nodes[current].state.clone();
        let units = eligible(index, &state, max_credits);
        if units.is_empty() {
            continue;
        }
        let composition = compose(&units, max_courses, max_credits, config.combo_cap);
        combo_truncated |= composition.truncated;

        let g = entry.g + 1;
        for combo in composition.combos {
            let next = state.union(&combo.mask);
            let id = match lookup.get(&next).copied() {
                Some(id) if nodes[id].g <= g => continue,
                Some(id) => {
                    let node = &mut nodes[id];
                    node.g = g;
                    node.parent = Some(current);
                    node.action = Some(combo.mask);
                    id
                }
                None => {
                    let id = nodes.len();
                    lookup.insert(next.clone(), id);
                    nodes.push(Node {
                        state: next,
                        g,
                        parent: Some(current),
                        action: Some(combo.mask),
                    });
                    id
                }
            };
            frontier.push(Frontier {
                f: g + estimate(index, &nodes[id].state, max_courses),
                g,
                seq,
                node: id,
            });
            seq += 1;
        }
    }

    debug!(
        expansions,
        visited = nodes.len(),
        reached_goal = goal.is_some(),
        capped,
        "best-first search finished"
    );

    if let Some(goal) = goal {
        return Trace {
            cycles: reconstruct(&nodes, goal),
            status: PlanStatus::Complete,
            expansions,
            combo_truncated,
        };
    }

    if capped && config.cap_fallback == CapFallback::Greedy {
        diagnostics.push(
            DiagnosticKind::ExpansionCapReached,
            format!(
                "search expansion cap of {} reached; falling back to the greedy strategy",
                config.expansion_cap
            ),
        );
        let fallback = greedy::search(index, start, config, diagnostics);
        return Trace {
            status: PlanStatus::CapReached,
            expansions: expansions + fallback.expansions,
            combo_truncated,
            cycles: fallback.cycles,
        };
    }

    let best = most_scheduled(&nodes);
    let cycles = reconstruct(&nodes, best);

    if capped {
        diagnostics.push(
            DiagnosticKind::ExpansionCapReached,
            format!(
                "search expansion cap of {} reached; returning a best-effort plan of {} cycles",
                config.expansion_cap,
                cycles.len()
            ),
        );
    }

    Trace {
        cycles,
        status: if capped {
            PlanStatus::CapReached
        } else {
            PlanStatus::Stalled
        },
        expansions,
        combo_truncated,
    }
}

/// Visited node with the most courses taken; the first visited wins ties.
fn most_scheduled(nodes: &[Node]) -> usize {
    let mut best = 0;
    let mut best_count = nodes[0].state.count();
    for (id, node) in nodes.iter().enumerate().skip(1) {
        let count = node.state.count();
        if count > best_count {
            best = id;
            best_count = count;
        }
    }
    best
}

/// Follows predecessor links back to the start; returns actions in order.
fn reconstruct(nodes: &[Node], target: usize) -> Vec<CourseSet> {
    let mut actions = Vec::new();
    let mut current = target;
    while let (Some(parent), Some(action)) = (nodes[current].parent, &nodes[current].action) {
        actions.push(action.clone());
        current = parent;
    }
    actions.reverse();
    actions
}
