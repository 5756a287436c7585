//! Curriculum document.
//!
//! The authoring format groups courses by the cycle the institution
//! recommends, plus a separate pool of electives. Planning works on a
//! flat course list, so [`Curriculum::courses`] turns cycle position into
//! each course's `cycle_hint`.

use serde::{Deserialize, Serialize};

use super::course::null_as_default;
use super::{Course, CourseKind};
use crate::PlanError;

/// One recommended cycle of a curriculum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurriculumCycle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<Course>,
}

/// A curriculum: ordered recommended cycles plus electives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Curriculum {
    /// Program name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Recommended cycles, in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cycles: Vec<CurriculumCycle>,
    /// Elective pool.
    #[serde(default, deserialize_with = "null_as_default")]
    pub electives: Vec<Course>,
}

impl Curriculum {
    /// Creates an empty curriculum.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends a recommended cycle.
    pub fn with_cycle(mut self, courses: Vec<Course>) -> Self {
        self.cycles.push(CurriculumCycle { courses });
        self
    }

    /// Adds an elective.
    pub fn with_elective(mut self, course: Course) -> Self {
        self.electives.push(course);
        self
    }

    /// Parses a curriculum document from JSON.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of courses across all recommended cycles.
    pub fn course_count(&self) -> usize {
        self.cycles.iter().map(|c| c.courses.len()).sum()
    }

    /// Flattens the document into planner input.
    ///
    /// Courses in the `i`-th cycle (0-based) get `cycle_hint = i + 1`.
    /// Electives are emitted last with no hint, no references, and kind
    /// `Elective`. Codes and names are trimmed.
    pub fn courses(&self) -> Vec<Course> {
        let mut out = Vec::with_capacity(self.course_count() + self.electives.len());

        for (index, cycle) in self.cycles.iter().enumerate() {
            for course in &cycle.courses {
                let mut normalized = trimmed(course);
                normalized.cycle_hint = Some(index as u32 + 1);
                out.push(normalized);
            }
        }

        for elective in &self.electives {
            let mut normalized = trimmed(elective);
            normalized.cycle_hint = None;
            normalized.prerequisites.clear();
            normalized.corequisites.clear();
            normalized.kind = CourseKind::Elective;
            normalized.rule = None;
            out.push(normalized);
        }

        out
    }
}

fn trimmed(course: &Course) -> Course {
    let mut out = course.clone();
    out.code = course.code.trim().to_string();
    out.name = course.name.trim().to_string();
    out
}
