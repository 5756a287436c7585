//! Planner entry point.
//!
//! Wires the index builder, the selected strategy, and the diagnostics
//! side channel into one call that returns course codes.

use tracing::debug;

use super::config::{PlannerConfig, Strategy};
use super::{greedy, optimal, PlanStatus, Trace};
use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::index::CourseIndex;
use crate::models::{parse_courses, Course, Curriculum, Cycle, Plan};
use crate::PlanError;

/// Input container for planning.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Catalog courses (electives are ignored).
    pub courses: Vec<Course>,
    /// Codes of courses already completed.
    pub completed: Vec<String>,
}

impl PlanRequest {
    /// Creates a request with nothing completed.
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            completed: Vec::new(),
        }
    }

    /// Creates a request from a curriculum document.
    pub fn from_curriculum(curriculum: &Curriculum) -> Self {
        Self::new(curriculum.courses())
    }

    /// Marks a course as completed.
    pub fn with_completed(mut self, code: impl Into<String>) -> Self {
        self.completed.push(code.into());
        self
    }
}

/// Result of a planning run.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// Ordered cycles.
    pub plan: Plan,
    /// How the run ended.
    pub status: PlanStatus,
    /// Strategy that produced the plan.
    pub strategy: Strategy,
    /// Mandatory courses neither completed nor planned, in catalog order.
    pub unscheduled: Vec<String>,
    /// Non-fatal diagnostics, in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
    /// States expanded (optimal) or iterations run (fast).
    pub expansions: usize,
}

impl PlanOutcome {
    /// Whether every mandatory course is completed or planned.
    pub fn is_complete(&self) -> bool {
        self.status == PlanStatus::Complete
    }

    /// The plain `list<list<code>>` form of the plan.
    pub fn to_codes(&self) -> Vec<Vec<String>> {
        self.plan.to_codes()
    }

    /// Whether a diagnostic of the given kind was raised.
    pub fn has_diagnostic(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind == kind)
    }
}

/// Course planner.
///
/// # Example
///
/// ```
/// use u_curriculum::models::Course;
/// use u_curriculum::scheduler::{Planner, PlannerConfig};
///
/// let courses = vec![
///     Course::new("A").with_credits(3.0).with_cycle(1),
///     Course::new("B").with_credits(3.0).with_cycle(2).with_prerequisite("A"),
/// ];
/// let planner = Planner::new(PlannerConfig::default()).unwrap();
/// let outcome = planner.plan(&courses, &[] as &[&str]);
/// assert_eq!(outcome.to_codes(), vec![vec!["A"], vec!["B"]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner after validating its configuration.
    pub fn new(config: PlannerConfig) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans every mandatory course not in `completed`.
    ///
    /// Never fails: reference problems, stalls, and cap hits are reported
    /// through [`PlanOutcome::diagnostics`] and [`PlanOutcome::status`].
    pub fn plan<S: AsRef<str>>(&self, courses: &[Course], completed: &[S]) -> PlanOutcome {
        let mut diagnostics = Diagnostics::new();
        let index = CourseIndex::build(courses, &mut diagnostics);
        let start = index.initial_state(completed);

        let trace: Trace = match self.config.strategy {
            Strategy::Optimal => optimal::search(&index, &start, &self.config, &mut diagnostics),
            Strategy::Fast => greedy::search(&index, &start, &self.config, &mut diagnostics),
        };

        if trace.combo_truncated {
            diagnostics.push(
                DiagnosticKind::ComboCapReached,
                format!(
                    "cycle composition stopped at {} combinations; some alternatives were not explored",
                    self.config.combo_cap
                ),
            );
        }

        let mut plan = Plan::new();
        let mut reached = start;
        for mask in &trace.cycles {
            plan.push_cycle(Cycle::new(index.codes_of(mask), index.credit_sum(mask)));
            reached.union_with(mask);
        }
        let unscheduled = index.codes_of(&index.all().difference(&reached));

        match trace.status {
            PlanStatus::Stalled => diagnostics.push(
                DiagnosticKind::Stalled,
                format!(
                    "no further course can be scheduled; {} left unscheduled: {}",
                    unscheduled.len(),
                    unscheduled.join(", ")
                ),
            ),
            PlanStatus::CapReached if !unscheduled.is_empty() => diagnostics.push(
                DiagnosticKind::ExpansionCapReached,
                format!(
                    "best-effort plan leaves {} unscheduled: {}",
                    unscheduled.len(),
                    unscheduled.join(", ")
                ),
            ),
            _ => {}
        }

        debug!(
            strategy = ?self.config.strategy,
            status = ?trace.status,
            cycles = plan.cycle_count(),
            unscheduled = unscheduled.len(),
            expansions = trace.expansions,
            "planning finished"
        );

        PlanOutcome {
            plan,
            status: trace.status,
            strategy: self.config.strategy,
            unscheduled,
            diagnostics: diagnostics.into_vec(),
            expansions: trace.expansions,
        }
    }

    /// Plans a [`PlanRequest`].
    pub fn plan_request(&self, request: &PlanRequest) -> PlanOutcome {
        self.plan(&request.courses, &request.completed)
    }

    /// Plans a curriculum document.
    pub fn plan_curriculum<S: AsRef<str>>(
        &self,
        curriculum: &Curriculum,
        completed: &[S],
    ) -> PlanOutcome {
        self.plan(&curriculum.courses(), completed)
    }

    /// Plans a JSON catalog: either an array of courses or a curriculum
    /// document.
    ///
    /// A document that cannot be read yields an empty plan with an
    /// [`DiagnosticKind::InvalidCatalog`] diagnostic.
    pub fn plan_json<S: AsRef<str>>(&self, json: &str, completed: &[S]) -> PlanOutcome {
        let parsed = if json.trim_start().starts_with('[') {
            parse_courses(json)
        } else {
            Curriculum::from_json(json).map(|c| c.courses())
        };

        match parsed {
            Ok(courses) => self.plan(&courses, completed),
            Err(err) => {
                let mut diagnostics = Diagnostics::new();
                diagnostics.push(
                    DiagnosticKind::InvalidCatalog,
                    format!("catalog could not be read: {err}"),
                );
                PlanOutcome {
                    plan: Plan::new(),
                    status: PlanStatus::Stalled,
                    strategy: self.config.strategy,
                    unscheduled: Vec::new(),
                    diagnostics: diagnostics.into_vec(),
                    expansions: 0,
                }
            }
        }
    }
}

/// Validates `config` and plans `courses` in one call.
pub fn run_planner<S: AsRef<str>>(
    courses: &[Course],
    completed: &[S],
    config: &PlannerConfig,
) -> Result<PlanOutcome, PlanError> {
    Ok(Planner::new(config.clone())?.plan(courses, completed))
}
