//! Course model.
//!
//! A course is one catalog entry: credits, prerequisite and corequisite
//! references (by code), an ordering hint, and an optional enrollment rule.

use serde::{Deserialize, Deserializer, Serialize};

/// Whether a course is part of the mandatory track.
///
/// Electives are never scheduled automatically; a caller that wants an
/// elective planned must pass it in as `Mandatory`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseKind {
    #[default]
    Mandatory,
    Elective,
}

/// Course-level enrollment gate.
///
/// Serialized externally tagged, e.g. `{"requires_all_until": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseRule {
    /// Every course with `cycle_hint <= n` must be completed in an
    /// earlier cycle before this course can be taken.
    RequiresAllUntil(u32),
}

/// A catalog course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique, non-empty course code.
    pub code: String,
    /// Human-readable name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Credit weight (non-negative).
    #[serde(default, deserialize_with = "null_as_default")]
    pub credits: f64,
    /// Codes of courses that must be completed in an earlier cycle.
    #[serde(default, deserialize_with = "null_as_default")]
    pub prerequisites: Vec<String>,
    /// Codes of courses that must be taken in the same cycle (unless already completed).
    #[serde(default, deserialize_with = "null_as_default")]
    pub corequisites: Vec<String>,
    /// Cycle the curriculum places this course in. `None` = unscheduled.
    #[serde(default)]
    pub cycle_hint: Option<u32>,
    /// Mandatory or elective.
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: CourseKind,
    /// Optional enrollment gate.
    #[serde(default, deserialize_with = "rule_or_none")]
    pub rule: Option<CourseRule>,
}

impl Course {
    /// Creates a mandatory course with the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            credits: 0.0,
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
            cycle_hint: None,
            kind: CourseKind::Mandatory,
            rule: None,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credits: f64) -> Self {
        self.credits = credits;
        self
    }

    /// Adds a prerequisite code.
    pub fn with_prerequisite(mut self, code: impl Into<String>) -> Self {
        self.prerequisites.push(code.into());
        self
    }

    /// Adds a corequisite code.
    pub fn with_corequisite(mut self, code: impl Into<String>) -> Self {
        self.corequisites.push(code.into());
        self
    }

    /// Sets the cycle hint.
    pub fn with_cycle(mut self, cycle: u32) -> Self {
        self.cycle_hint = Some(cycle);
        self
    }

    /// Sets the course kind.
    pub fn with_kind(mut self, kind: CourseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Marks the course as an elective.
    pub fn elective(self) -> Self {
        self.with_kind(CourseKind::Elective)
    }

    /// Sets the enrollment rule.
    pub fn with_rule(mut self, rule: CourseRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Shorthand for `with_rule(CourseRule::RequiresAllUntil(cycle))`.
    pub fn requires_all_until(self, cycle: u32) -> Self {
        self.with_rule(CourseRule::RequiresAllUntil(cycle))
    }

    /// Whether this course is eligible for automatic scheduling.
    #[inline]
    pub fn is_mandatory(&self) -> bool {
        self.kind == CourseKind::Mandatory
    }

    /// The `requires_all_until` threshold, if any.
    pub fn rule_threshold(&self) -> Option<u32> {
        match self.rule {
            Some(CourseRule::RequiresAllUntil(cycle)) => Some(cycle),
            None => None,
        }
    }
}

/// Reads an explicit `null` as the field's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Rule object as authored; `{}` and `null` both mean "no rule".
#[derive(Deserialize)]
struct RuleRecord {
    #[serde(default)]
    requires_all_until: Option<u32>,
}

fn rule_or_none<'de, D>(deserializer: D) -> Result<Option<CourseRule>, D::Error>
where
    D: Deserializer<'de>,
{
    let record = Option::<RuleRecord>::deserialize(deserializer)?;
    Ok(record
        .and_then(|r| r.requires_all_until)
        .map(CourseRule::RequiresAllUntil))
}

/// Parses a JSON array of course records.
///
/// Fails only when the document is not structurally a list of course-like
/// records; reference problems are left for the index builder to report.
pub fn parse_courses(json: &str) -> Result<Vec<Course>, crate::PlanError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let course = Course::new("MAT-102")
            .with_name("Calculus II")
            .with_credits(4.0)
            .with_prerequisite("MAT-101")
            .with_corequisite("MAT-102L")
            .with_cycle(2)
            .requires_all_until(1);

        assert_eq!(course.code, "MAT-102");
        assert_eq!(course.name, "Calculus II");
        assert_eq!(course.credits, 4.0);
        assert_eq!(course.prerequisites, vec!["MAT-101".to_string()]);
        assert_eq!(course.corequisites, vec!["MAT-102L".to_string()]);
        assert_eq!(course.cycle_hint, Some(2));
        assert_eq!(course.rule_threshold(), Some(1));
        assert!(course.is_mandatory());
    }

    #[test]
    fn test_elective() {
        let course = Course::new("ELE-1").elective();
        assert!(!course.is_mandatory());
        assert_eq!(course.rule_threshold(), None);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let course: Course = serde_json::from_str(r#"{"code": "A"}"#).unwrap();
        assert_eq!(course, Course::new("A"));
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "code": "INF-400",
            "name": "Capstone",
            "credits": 6,
            "prerequisites": ["INF-300"],
            "corequisites": [],
            "cycle_hint": 9,
            "kind": "mandatory",
            "rule": {"requires_all_until": 8}
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.credits, 6.0);
        assert_eq!(course.cycle_hint, Some(9));
        assert_eq!(course.rule, Some(CourseRule::RequiresAllUntil(8)));
    }

    #[test]
    fn test_deserialize_empty_rule_and_nulls() {
        let json = r#"{
            "code": "A",
            "name": null,
            "credits": null,
            "prerequisites": null,
            "corequisites": null,
            "kind": null,
            "rule": {}
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course, Course::new("A"));

        let course: Course = serde_json::from_str(r#"{"code": "B", "rule": null}"#).unwrap();
        assert_eq!(course.rule, None);
    }

    #[test]
    fn test_rule_round_trips_through_json() {
        let course = Course::new("X").requires_all_until(3);
        let json = serde_json::to_string(&course).unwrap();
        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rule_threshold(), Some(3));
    }

    #[test]
    fn test_parse_courses_rejects_non_list() {
        assert!(parse_courses(r#"{"code": "A"}"#).is_err());
        assert_eq!(parse_courses("[]").unwrap().len(), 0);
    }
}
