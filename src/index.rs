//! Course index builder.
//!
//! Normalizes a course list into the dense, immutable model the search
//! works on: each mandatory course gets an ordinal `0..n` (input order),
//! prerequisites become bit vectors, corequisites become adjacency lists,
//! and `requires_all_until` rules become precomputed gate sets.
//!
//! # Recovery
//! Building never fails. Dangling references, duplicate or empty codes,
//! and invalid credits are dropped or clamped with a diagnostic.

use std::collections::HashMap;

use tracing::debug;

use crate::course_set::CourseSet;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::models::Course;

/// Cycle hint assigned to courses without one; sorts after every real cycle.
pub const UNSCHEDULED_CYCLE: u32 = u32::MAX;

/// Dense, read-only view of a catalog for one planning run.
#[derive(Debug, Clone)]
pub struct CourseIndex {
    codes: Vec<String>,
    credits: Vec<f64>,
    cycle_hints: Vec<u32>,
    prerequisites: Vec<CourseSet>,
    corequisites: Vec<Vec<usize>>,
    rule_thresholds: Vec<Option<u32>>,
    rule_gates: Vec<Option<CourseSet>>,
    dependents: Vec<CourseSet>,
    ordinals: HashMap<String, usize>,
}

impl CourseIndex {
    /// Builds the index from raw course records.
    ///
    /// # Algorithm
    /// 1. Drop electives, empty codes, and duplicate codes (first wins).
    /// 2. Assign ordinals in input order.
    /// 3. Resolve prerequisite/corequisite codes; drop unknown ones.
    /// 4. Precompute rule gates and reverse prerequisite edges.
    pub fn build(courses: &[Course], diagnostics: &mut Diagnostics) -> Self {
        let mut kept: Vec<&Course> = Vec::new();
        let mut ordinals: HashMap<String, usize> = HashMap::new();

        for (position, course) in courses.iter().enumerate().filter(|(_, c)| c.is_mandatory()) {
            if course.code.is_empty() {
                diagnostics.push(
                    DiagnosticKind::EmptyCode,
                    format!("course without code at catalog position {position} dropped"),
                );
                continue;
            }
            if ordinals.contains_key(&course.code) {
                diagnostics.push(
                    DiagnosticKind::DuplicateCode,
                    format!("duplicate course code \"{}\"; keeping the first entry", course.code),
                );
                continue;
            }
            ordinals.insert(course.code.clone(), kept.len());
            kept.push(course);
        }

        let n = kept.len();
        let mut codes = Vec::with_capacity(n);
        let mut credits = Vec::with_capacity(n);
        let mut cycle_hints = Vec::with_capacity(n);
        let mut prerequisites = Vec::with_capacity(n);
        let mut corequisites = Vec::with_capacity(n);
        let mut rule_thresholds = Vec::with_capacity(n);

        for course in &kept {
            codes.push(course.code.clone());
            credits.push(sanitize_credits(course, diagnostics));
            cycle_hints.push(course.cycle_hint.unwrap_or(UNSCHEDULED_CYCLE));
            rule_thresholds.push(course.rule_threshold());

            let mut prereq = CourseSet::empty(n);
            for code in &course.prerequisites {
                match ordinals.get(code) {
                    Some(&ordinal) => {
                        prereq.insert(ordinal);
                    }
                    None => diagnostics.push(
                        DiagnosticKind::UnknownPrerequisite,
                        format!(
                            "unknown prerequisite \"{code}\" referenced by {}; ignoring the reference",
                            course.code
                        ),
                    ),
                }
            }
            prerequisites.push(prereq);

            let mut coreq = Vec::new();
            for code in &course.corequisites {
                match ordinals.get(code) {
                    Some(&ordinal) => coreq.push(ordinal),
                    None => diagnostics.push(
                        DiagnosticKind::UnknownCorequisite,
                        format!(
                            "unknown corequisite \"{code}\" referenced by {}; ignoring the reference",
                            course.code
                        ),
                    ),
                }
            }
            corequisites.push(coreq);
        }

        let rule_gates = rule_thresholds
            .iter()
            .enumerate()
            .map(|(owner, threshold)| {
                threshold.map(|limit| {
                    CourseSet::from_ordinals(
                        n,
                        (0..n).filter(|&v| v != owner && cycle_hints[v] <= limit),
                    )
                })
            })
            .collect();

        let mut dependents = vec![CourseSet::empty(n); n];
        for (course, prereq) in prerequisites.iter().enumerate() {
            for p in prereq.iter() {
                dependents[p].insert(course);
            }
        }

        debug!(courses = n, dropped = courses.len() - n, "course index built");

        Self {
            codes,
            credits,
            cycle_hints,
            prerequisites,
            corequisites,
            rule_thresholds,
            rule_gates,
            dependents,
            ordinals,
        }
    }

    /// Number of indexed (mandatory) courses.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the index holds no course.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Ordinal of a code.
    pub fn ordinal(&self, code: &str) -> Option<usize> {
        self.ordinals.get(code).copied()
    }

    /// Code of an ordinal.
    pub fn code(&self, ordinal: usize) -> &str {
        &self.codes[ordinal]
    }

    /// Credits of an ordinal.
    pub fn credits(&self, ordinal: usize) -> f64 {
        self.credits[ordinal]
    }

    /// Cycle hint of an ordinal ([`UNSCHEDULED_CYCLE`] if none).
    pub fn cycle_hint(&self, ordinal: usize) -> u32 {
        self.cycle_hints[ordinal]
    }

    /// Prerequisite set of an ordinal.
    pub fn prerequisites(&self, ordinal: usize) -> &CourseSet {
        &self.prerequisites[ordinal]
    }

    /// Corequisite adjacency of an ordinal.
    pub fn corequisites(&self, ordinal: usize) -> &[usize] {
        &self.corequisites[ordinal]
    }

    /// `requires_all_until` threshold of an ordinal.
    pub fn rule_threshold(&self, ordinal: usize) -> Option<u32> {
        self.rule_thresholds[ordinal]
    }

    /// Whether every prerequisite of `ordinal` is in `taken`.
    #[inline]
    pub fn prerequisites_met(&self, ordinal: usize, taken: &CourseSet) -> bool {
        self.prerequisites[ordinal].is_subset(taken)
    }

    /// Whether the rule gate of `ordinal` (if any) is satisfied by `taken`.
    ///
    /// A gate covers every other course with `cycle_hint <= threshold`.
    /// The gated course itself is left out of its own gate even when its
    /// hint is within the threshold; otherwise such a course could never
    /// be taken.
    #[inline]
    pub fn rule_satisfied(&self, ordinal: usize, taken: &CourseSet) -> bool {
        self.rule_gates[ordinal]
            .as_ref()
            .map_or(true, |gate| gate.is_subset(taken))
    }

    /// Empty set sized to this index.
    pub fn empty_set(&self) -> CourseSet {
        CourseSet::empty(self.len())
    }

    /// Set of every ordinal (the goal state).
    pub fn all(&self) -> CourseSet {
        CourseSet::full(self.len())
    }

    /// Builds the start state from completed codes; unknown codes have no effect.
    pub fn initial_state<S: AsRef<str>>(&self, completed: &[S]) -> CourseSet {
        let mut state = self.empty_set();
        for code in completed {
            if let Some(ordinal) = self.ordinal(code.as_ref()) {
                state.insert(ordinal);
            }
        }
        state
    }

    /// Sum of credits over a set.
    pub fn credit_sum(&self, set: &CourseSet) -> f64 {
        set.iter().map(|u| self.credits[u]).sum()
    }

    /// Smallest cycle hint among members ([`UNSCHEDULED_CYCLE`] for an empty set).
    pub fn earliest_cycle(&self, set: &CourseSet) -> u32 {
        set.iter()
            .map(|u| self.cycle_hints[u])
            .min()
            .unwrap_or(UNSCHEDULED_CYCLE)
    }

    /// Number of courses outside `set` that list any member as a prerequisite.
    pub fn unlock_potential(&self, set: &CourseSet) -> usize {
        let mut unlocked = self.empty_set();
        for u in set.iter() {
            unlocked.union_with(&self.dependents[u]);
        }
        unlocked.difference(set).count()
    }

    /// Codes of a set's members, in ordinal order.
    pub fn codes_of(&self, set: &CourseSet) -> Vec<String> {
        set.iter().map(|u| self.codes[u].clone()).collect()
    }
}

fn sanitize_credits(course: &Course, diagnostics: &mut Diagnostics) -> f64 {
    if course.credits.is_finite() && course.credits >= 0.0 {
        course.credits
    } else {
        diagnostics.push(
            DiagnosticKind::InvalidCredits,
            format!(
                "course {} has invalid credits {}; treating as 0",
                course.code, course.credits
            ),
        );
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("A").with_credits(3.0).with_cycle(1),
            Course::new("B").with_credits(3.0).with_cycle(1),
            Course::new("C").with_credits(4.0).with_cycle(2).with_prerequisite("A"),
            Course::new("D")
                .with_credits(1.0)
                .with_cycle(2)
                .with_prerequisite("B")
                .with_corequisite("E"),
            Course::new("E")
                .with_credits(3.0)
                .with_cycle(2)
                .with_prerequisite("B")
                .with_corequisite("D"),
        ]
    }

    #[test]
    fn test_ordinals_in_input_order() {
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&sample_courses(), &mut diags);

        assert_eq!(index.len(), 5);
        assert_eq!(index.ordinal("A"), Some(0));
        assert_eq!(index.ordinal("E"), Some(4));
        assert_eq!(index.code(2), "C");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_prerequisite_and_corequisite_structures() {
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&sample_courses(), &mut diags);

        assert_eq!(index.prerequisites(2).iter().collect::<Vec<_>>(), vec![0]);
        assert_eq!(index.corequisites(3), &[4]);
        assert_eq!(index.corequisites(4), &[3]);
        assert!(index.corequisites(0).is_empty());
    }

    #[test]
    fn test_electives_are_dropped() {
        let courses = vec![
            Course::new("A"),
            Course::new("E1").elective(),
            Course::new("B").with_prerequisite("E1"),
        ];
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&courses, &mut diags);

        assert_eq!(index.len(), 2);
        assert_eq!(index.ordinal("E1"), None);
        assert_eq!(index.ordinal("B"), Some(1));
        // Reference to the elective dangles.
        assert!(diags.contains(DiagnosticKind::UnknownPrerequisite));
        assert!(index.prerequisites(1).is_empty());
    }

    #[test]
    fn test_dangling_references_keep_other_references() {
        let courses = vec![
            Course::new("A"),
            Course::new("B")
                .with_prerequisite("A")
                .with_prerequisite("GHOST")
                .with_corequisite("PHANTOM"),
        ];
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&courses, &mut diags);

        assert_eq!(diags.len(), 2);
        assert!(diags.contains(DiagnosticKind::UnknownPrerequisite));
        assert!(diags.contains(DiagnosticKind::UnknownCorequisite));
        assert_eq!(index.prerequisites(1).iter().collect::<Vec<_>>(), vec![0]);
        assert!(index.corequisites(1).is_empty());
    }

    #[test]
    fn test_duplicate_and_empty_codes() {
        let courses = vec![
            Course::new("A").with_credits(3.0),
            Course::new(""),
            Course::new("A").with_credits(9.0),
        ];
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&courses, &mut diags);

        assert_eq!(index.len(), 1);
        assert_eq!(index.credits(0), 3.0);
        assert!(diags.contains(DiagnosticKind::DuplicateCode));
        assert!(diags.contains(DiagnosticKind::EmptyCode));
    }

    #[test]
    fn test_invalid_credits_clamped() {
        let courses = vec![
            Course::new("A").with_credits(-2.0),
            Course::new("B").with_credits(f64::NAN),
        ];
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&courses, &mut diags);

        assert_eq!(index.credits(0), 0.0);
        assert_eq!(index.credits(1), 0.0);
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn test_initial_state_ignores_unknown_codes() {
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&sample_courses(), &mut diags);

        let state = index.initial_state(&["A", "NOPE", "D"]);
        assert_eq!(state.iter().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn test_rule_gate() {
        let courses = vec![
            Course::new("A").with_cycle(1),
            Course::new("B").with_cycle(2),
            Course::new("C").with_cycle(3),
            Course::new("X").with_cycle(3).requires_all_until(2),
            Course::new("U"),
        ];
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&courses, &mut diags);

        let x = index.ordinal("X").unwrap();
        assert_eq!(index.rule_threshold(x), Some(2));
        assert!(!index.rule_satisfied(x, &index.initial_state(&["A"])));
        assert!(index.rule_satisfied(x, &index.initial_state(&["A", "B"])));
        assert!(index.rule_satisfied(0, &index.empty_set()));
        assert_eq!(index.cycle_hint(4), UNSCHEDULED_CYCLE);
    }

    #[test]
    fn test_rule_gate_excludes_owner() {
        let courses = vec![
            Course::new("A").with_cycle(1),
            Course::new("X").with_cycle(1).requires_all_until(1),
        ];
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&courses, &mut diags);

        assert!(index.rule_satisfied(1, &index.initial_state(&["A"])));
    }

    #[test]
    fn test_set_metrics() {
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&sample_courses(), &mut diags);

        let de = CourseSet::from_ordinals(5, [3, 4]);
        assert_eq!(index.credit_sum(&de), 4.0);
        assert_eq!(index.earliest_cycle(&de), 2);
        assert_eq!(index.codes_of(&de), vec!["D", "E"]);

        // B unlocks D and E; inside {B} both are outside the set.
        let b = CourseSet::from_ordinals(5, [1]);
        assert_eq!(index.unlock_potential(&b), 2);
        assert_eq!(index.unlock_potential(&de), 0);
        assert_eq!(index.earliest_cycle(&index.empty_set()), UNSCHEDULED_CYCLE);
    }

    #[test]
    fn test_empty_catalog() {
        let mut diags = Diagnostics::new();
        let index = CourseIndex::build(&[], &mut diags);
        assert!(index.is_empty());
        assert!(index.all().is_full());
    }
}
