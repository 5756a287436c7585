//! Planning drivers and KPI evaluation.
//!
//! Turns a course catalog into an ordered list of cycles.
//!
//! # Strategies
//!
//! - [`Strategy::Optimal`]: best-first (A*) search over taken-sets with an
//!   admissible heuristic. Minimizes the number of cycles, bounded by
//!   `expansion_cap` and `combo_cap`.
//! - [`Strategy::Fast`]: deterministic greedy walk ordered by a
//!   [`RuleEngine`](crate::dispatching::RuleEngine). Polynomial per step,
//!   at most `n + 1` steps, not guaranteed minimal.
//!
//! Both strategies sit behind [`Planner`], which owns configuration,
//! diagnostics, and the conversion from bit masks back to course codes.
//!
//! # KPI
//!
//! [`PlanKpi`] computes plan-level metrics: cycle count, credit spread,
//! and fill rate against the per-cycle course limit.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod config;
mod greedy;
mod kpi;
mod optimal;
mod planner;

pub use config::{CapFallback, PlannerConfig, Strategy};
pub use kpi::PlanKpi;
pub use planner::{run_planner, PlanOutcome, PlanRequest, Planner};

use serde::{Deserialize, Serialize};

use crate::course_set::CourseSet;

/// How a planning run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Every mandatory course is completed or scheduled.
    Complete,
    /// No further course can be scheduled (cyclic or unsatisfiable requirements).
    Stalled,
    /// The expansion cap stopped the optimal search; the plan is best-effort.
    CapReached,
}

/// Raw driver output, before conversion to course codes.
#[derive(Debug, Clone)]
pub(crate) struct Trace {
    /// Committed cycles, in order.
    pub cycles: Vec<CourseSet>,
    pub status: PlanStatus,
    /// States expanded (optimal) or iterations run (fast).
    pub expansions: usize,
    /// Whether any composition hit `combo_cap`.
    pub combo_truncated: bool,
}
