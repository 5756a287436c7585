//! Plan (solution) model.
//!
//! A plan is an ordered sequence of cycles; each cycle lists the course
//! codes enrolled together. Plans produced by the planner are always
//! consistent; [`Violation`]s are reported by
//! [`validate_plan`](crate::validation::validate_plan) when checking a plan
//! from any source.

use serde::{Deserialize, Serialize};

use super::{AcademicCalendar, Term};

/// A complete or partial enrollment plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Cycles in enrollment order (earliest first).
    pub cycles: Vec<Cycle>,
}

/// One enrollment cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    /// Course codes enrolled in this cycle, in catalog order.
    pub courses: Vec<String>,
    /// Sum of the courses' credits.
    pub credits: f64,
}

/// A rule broken by a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Offending course code (empty for cycle-level violations).
    pub course: String,
    /// 0-based cycle index the violation was found in, if any.
    pub cycle: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of plan violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A cycle holds more courses than allowed.
    CourseLimitExceeded,
    /// A cycle holds more credits than allowed.
    CreditLimitExceeded,
    /// A course is scheduled before one of its prerequisites.
    PrerequisiteUnmet,
    /// A course and a pending corequisite landed in different cycles.
    CorequisiteSplit,
    /// A `requires_all_until` gate was not satisfied.
    RuleUnmet,
    /// A course appears more than once, or was already completed.
    DuplicateCourse,
    /// A planned code is not a mandatory catalog course.
    UnknownCourse,
    /// A mandatory course is neither completed nor planned.
    Missing,
}

impl Cycle {
    /// Creates a cycle.
    pub fn new(courses: Vec<String>, credits: f64) -> Self {
        Self { courses, credits }
    }

    /// Number of courses.
    #[inline]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether this cycle has no course.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether the cycle contains the code.
    pub fn contains(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c == code)
    }
}

impl Violation {
    pub(crate) fn new(
        violation_type: ViolationType,
        course: impl Into<String>,
        cycle: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            course: course.into(),
            cycle,
            message: message.into(),
        }
    }
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cycle.
    pub fn push_cycle(&mut self, cycle: Cycle) {
        self.cycles.push(cycle);
    }

    /// Number of cycles.
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Whether the plan has no cycle.
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Total number of scheduled courses.
    pub fn course_count(&self) -> usize {
        self.cycles.iter().map(Cycle::len).sum()
    }

    /// Total scheduled credits.
    pub fn total_credits(&self) -> f64 {
        self.cycles.iter().map(|c| c.credits).sum()
    }

    /// 0-based index of the cycle a course is scheduled in.
    pub fn cycle_of(&self, code: &str) -> Option<usize> {
        self.cycles.iter().position(|c| c.contains(code))
    }

    /// All scheduled codes, in plan order.
    pub fn scheduled_codes(&self) -> impl Iterator<Item = &str> {
        self.cycles
            .iter()
            .flat_map(|c| c.courses.iter().map(String::as_str))
    }

    /// The plain `list<list<code>>` form of the plan.
    pub fn to_codes(&self) -> Vec<Vec<String>> {
        self.cycles.iter().map(|c| c.courses.clone()).collect()
    }

    /// Pairs every cycle with its calendar term.
    pub fn labeled<'a>(&'a self, calendar: &AcademicCalendar) -> Vec<(Term, &'a Cycle)> {
        self.cycles
            .iter()
            .enumerate()
            .map(|(index, cycle)| (calendar.term_of(index), cycle))
            .collect()
    }
}
