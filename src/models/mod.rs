//! Curriculum planning domain models.
//!
//! Provides the data types the planner consumes and produces. Models are
//! plain, serde-friendly records; the dense bit-vector view used by the
//! search lives in [`crate::index`].
//!
//! # Domain Mappings
//!
//! | u-curriculum | University | Training program | Certification track |
//! |--------------|------------|------------------|---------------------|
//! | Course | Course/Subject | Module | Exam |
//! | Cycle | Semester/Term | Cohort block | Sitting window |
//! | Plan | Study plan | Training roadmap | Exam schedule |
//! | Curriculum | Pensum/Program | Syllabus | Track definition |

mod calendar;
mod course;
mod curriculum;
mod plan;

pub use calendar::{AcademicCalendar, Term};
pub use course::{parse_courses, Course, CourseKind, CourseRule};
pub use curriculum::{Curriculum, CurriculumCycle};
pub use plan::{Cycle, Plan, Violation, ViolationType};
