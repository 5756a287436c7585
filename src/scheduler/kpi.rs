//! Plan quality metrics (KPIs).
//!
//! Computes plan-level indicators from a finished plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Cycle count | Number of cycles (the objective of the optimal strategy) |
//! | Course count | Courses scheduled across all cycles |
//! | Total credits | Sum of cycle credits |
//! | Min / Max / Avg credits | Credit load spread across cycles |
//! | Avg courses | Mean courses per cycle |
//! | Fill rate | courses / (cycles × max courses per cycle) |

use serde::{Deserialize, Serialize};

use crate::models::Plan;

/// Plan performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanKpi {
    /// Number of cycles.
    pub cycle_count: usize,
    /// Number of scheduled courses.
    pub course_count: usize,
    /// Sum of credits over every cycle.
    pub total_credits: f64,
    /// Lightest cycle load (0 for an empty plan).
    pub min_cycle_credits: f64,
    /// Heaviest cycle load (0 for an empty plan).
    pub max_cycle_credits: f64,
    /// Mean cycle load.
    pub avg_cycle_credits: f64,
    /// Mean number of courses per cycle.
    pub avg_courses_per_cycle: f64,
    /// Share of course slots used (0.0..=1.0 for valid plans).
    pub fill_rate: f64,
}

impl PlanKpi {
    /// Computes KPIs for a plan built under `max_courses` per cycle.
    pub fn calculate(plan: &Plan, max_courses: usize) -> Self {
        let cycle_count = plan.cycle_count();
        let course_count = plan.course_count();
        let total_credits = plan.total_credits();

        if cycle_count == 0 {
            return Self {
                cycle_count,
                course_count,
                total_credits,
                min_cycle_credits: 0.0,
                max_cycle_credits: 0.0,
                avg_cycle_credits: 0.0,
                avg_courses_per_cycle: 0.0,
                fill_rate: 0.0,
            };
        }

        let min_cycle_credits = plan
            .cycles
            .iter()
            .map(|c| c.credits)
            .fold(f64::INFINITY, f64::min);
        let max_cycle_credits = plan
            .cycles
            .iter()
            .map(|c| c.credits)
            .fold(f64::NEG_INFINITY, f64::max);

        let slots = cycle_count * max_courses;
        let fill_rate = if slots == 0 {
            0.0
        } else {
            course_count as f64 / slots as f64
        };

        Self {
            cycle_count,
            course_count,
            total_credits,
            min_cycle_credits,
            max_cycle_credits,
            avg_cycle_credits: total_credits / cycle_count as f64,
            avg_courses_per_cycle: course_count as f64 / cycle_count as f64,
            fill_rate,
        }
    }

    /// Whether the plan fits within `max_cycles` and uses at least
    /// `min_fill_rate` of its course slots.
    pub fn meets_thresholds(&self, max_cycles: usize, min_fill_rate: f64) -> bool {
        self.cycle_count <= max_cycles && self.fill_rate >= min_fill_rate
    }
}
