//! Catalog and plan validation.
//!
//! [`validate_catalog`] checks the structural integrity of a course list
//! before planning. The planner itself tolerates every problem reported
//! here (it drops or clamps with a diagnostic); this report lets callers
//! surface them all at once. Detects:
//! - Empty and duplicate codes
//! - Unknown prerequisite/corequisite references
//! - Self-references and asymmetric corequisites
//! - Negative or non-finite credits
//! - Circular prerequisite dependencies (DAG validation)
//! - `requires_all_until` thresholds that cover no course
//!
//! [`validate_plan`] checks a plan from any source against the catalog and
//! budgets, returning every [`Violation`].
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use crate::models::{Course, Plan, Violation, ViolationType};
use crate::search::within_credits;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A course has an empty code.
    EmptyCode,
    /// Two courses share the same code.
    DuplicateCode,
    /// A prerequisite references no mandatory course.
    UnknownPrerequisite,
    /// A corequisite references no mandatory course.
    UnknownCorequisite,
    /// `A` lists `B` as corequisite but `B` does not list `A`.
    AsymmetricCorequisite,
    /// A course lists itself as prerequisite or corequisite.
    SelfReference,
    /// Credits are negative or not finite.
    InvalidCredits,
    /// Prerequisite graph contains a cycle.
    CyclicPrerequisite,
    /// A `requires_all_until` threshold covers no other course.
    UnusedRuleThreshold,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Electives are ignored, like the planner ignores them.
///
/// Checks:
/// 1. No empty or duplicate codes
/// 2. Credits are finite and non-negative
/// 3. Every prerequisite/corequisite references a mandatory course other than itself
/// 4. Corequisite lists are symmetric
/// 5. Every rule threshold covers at least one other course
/// 6. No circular prerequisite dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut catalog: HashMap<&str, &Course> = HashMap::new();
    let mut order: Vec<&Course> = Vec::new();
    for course in courses.iter().filter(|c| c.is_mandatory()) {
        if course.code.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCode,
                format!("Course '{}' has an empty code", course.name),
            ));
            continue;
        }
        if catalog.contains_key(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate course code: {}", course.code),
            ));
            continue;
        }
        catalog.insert(&course.code, course);
        order.push(course);
    }

    for course in &order {
        if !course.credits.is_finite() || course.credits < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCredits,
                format!("Course '{}' has invalid credits {}", course.code, course.credits),
            ));
        }

        for pre in &course.prerequisites {
            if pre == &course.code {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfReference,
                    format!("Course '{}' lists itself as prerequisite", course.code),
                ));
            } else if !catalog.contains_key(pre.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPrerequisite,
                    format!(
                        "Course '{}' references unknown prerequisite '{}'",
                        course.code, pre
                    ),
                ));
            }
        }

        for co in &course.corequisites {
            if co == &course.code {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfReference,
                    format!("Course '{}' lists itself as corequisite", course.code),
                ));
                continue;
            }
            match catalog.get(co.as_str()) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCorequisite,
                    format!(
                        "Course '{}' references unknown corequisite '{}'",
                        course.code, co
                    ),
                )),
                Some(partner) if !partner.corequisites.contains(&course.code) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::AsymmetricCorequisite,
                        format!(
                            "Course '{}' lists '{}' as corequisite, but not the reverse",
                            course.code, co
                        ),
                    ))
                }
                Some(_) => {}
            }
        }

        if let Some(threshold) = course.rule_threshold() {
            let covered = order.iter().any(|other| {
                other.code != course.code && other.cycle_hint.is_some_and(|h| h <= threshold)
            });
            if !covered {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnusedRuleThreshold,
                    format!(
                        "Course '{}' requires all courses until cycle {}, but none exist",
                        course.code, threshold
                    ),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(&order) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
fn detect_cycles(order: &[&Course]) -> Option<ValidationError> {
    // prerequisite → dependents
    let known: HashSet<&str> = order.iter().map(|c| c.code.as_str()).collect();
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for course in order {
        for pre in &course.prerequisites {
            if known.contains(pre.as_str()) {
                adj.entry(pre.as_str()).or_default().push(course.code.as_str());
            }
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for course in order {
        let node = course.code.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisite chain detected involving course '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

/// Checks a plan against the catalog and per-cycle budgets.
///
/// Checks, for every cycle `k`:
/// 1. At most `max_courses` courses and `max_credits` credits
/// 2. Every planned code is a mandatory course, planned once, not completed
/// 3. Every known prerequisite is completed or planned before `k`
/// 4. Every pending corequisite is planned in `k`
/// 5. Every `requires_all_until` gate is satisfied before `k`
///
/// and finally that every mandatory course is completed or planned.
/// Dangling references are ignored, as the planner ignores them.
pub fn validate_plan<S: AsRef<str>>(
    courses: &[Course],
    completed: &[S],
    plan: &Plan,
    max_courses: usize,
    max_credits: f64,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut catalog: HashMap<&str, &Course> = HashMap::new();
    let mut order: Vec<&Course> = Vec::new();
    for course in courses.iter().filter(|c| c.is_mandatory() && !c.code.is_empty()) {
        if !catalog.contains_key(course.code.as_str()) {
            catalog.insert(&course.code, course);
            order.push(course);
        }
    }

    let done: HashSet<&str> = completed.iter().map(|c| c.as_ref()).collect();
    let mut placed: HashMap<&str, usize> = HashMap::new();

    for (k, cycle) in plan.cycles.iter().enumerate() {
        if cycle.len() > max_courses {
            violations.push(Violation::new(
                ViolationType::CourseLimitExceeded,
                "",
                Some(k),
                format!("cycle {} has {} courses (limit {max_courses})", k + 1, cycle.len()),
            ));
        }

        let credits: f64 = cycle
            .courses
            .iter()
            .filter_map(|code| catalog.get(code.as_str()))
            .map(|c| credit_value(c))
            .sum();
        if !within_credits(credits, max_credits) {
            violations.push(Violation::new(
                ViolationType::CreditLimitExceeded,
                "",
                Some(k),
                format!("cycle {} has {credits} credits (limit {max_credits})", k + 1),
            ));
        }

        for code in &cycle.courses {
            if !catalog.contains_key(code.as_str()) {
                violations.push(Violation::new(
                    ViolationType::UnknownCourse,
                    code.as_str(),
                    Some(k),
                    format!("{code} is not a mandatory catalog course"),
                ));
            } else if done.contains(code.as_str()) || placed.contains_key(code.as_str()) {
                violations.push(Violation::new(
                    ViolationType::DuplicateCourse,
                    code.as_str(),
                    Some(k),
                    format!("{code} is already completed or planned"),
                ));
            } else {
                placed.insert(code, k);
            }
        }
    }

    let before =
        |code: &str, k: usize| done.contains(code) || placed.get(code).is_some_and(|&p| p < k);

    for (&code, &k) in &placed {
        let Some(course) = catalog.get(code) else {
            continue;
        };

        for pre in course.prerequisites.iter().filter(|p| catalog.contains_key(p.as_str())) {
            if !before(pre.as_str(), k) {
                violations.push(Violation::new(
                    ViolationType::PrerequisiteUnmet,
                    code,
                    Some(k),
                    format!("{code} is planned before its prerequisite {pre}"),
                ));
            }
        }

        for co in course.corequisites.iter().filter(|c| catalog.contains_key(c.as_str())) {
            if !done.contains(co.as_str()) && placed.get(co.as_str()) != Some(&k) {
                violations.push(Violation::new(
                    ViolationType::CorequisiteSplit,
                    code,
                    Some(k),
                    format!("{code} and its corequisite {co} are not in the same cycle"),
                ));
            }
        }

        if let Some(threshold) = course.rule_threshold() {
            let unmet = order.iter().find(|other| {
                other.code != code
                    && other.cycle_hint.is_some_and(|h| h <= threshold)
                    && !before(other.code.as_str(), k)
            });
            if let Some(other) = unmet {
                violations.push(Violation::new(
                    ViolationType::RuleUnmet,
                    code,
                    Some(k),
                    format!(
                        "{code} requires every course until cycle {threshold}; {} is not done",
                        other.code
                    ),
                ));
            }
        }
    }

    for course in &order {
        let code = course.code.as_str();
        if !done.contains(code) && !placed.contains_key(code) {
            violations.push(Violation::new(
                ViolationType::Missing,
                code,
                None,
                format!("{code} is neither completed nor planned"),
            ));
        }
    }

    // HashMap iteration above is unordered
    violations.sort_by(|a, b| a.cycle.cmp(&b.cycle).then_with(|| a.course.cmp(&b.course)));
    violations
}

fn credit_value(course: &Course) -> f64 {
    if course.credits.is_finite() && course.credits >= 0.0 {
        course.credits
    } else {
        0.0
    }
}
