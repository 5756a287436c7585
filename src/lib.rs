//! Course planning engine for the U-Engine ecosystem.
//!
//! Given a catalog of courses with prerequisites, corequisites, credits,
//! and curriculum-cycle hints, produces an ordered sequence of cycles that
//! completes every pending mandatory course under per-cycle course and
//! credit limits.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Curriculum`, `Plan`, `Cycle`,
//!   `AcademicCalendar`
//! - **`index`**: Dense catalog index built once per planning call
//! - **`search`**: Closure resolution, admissible heuristic, eligibility,
//!   cycle composition
//! - **`dispatching`**: Composable unit-ordering rules for greedy planning
//! - **`scheduler`**: `Planner` with optimal (A*) and fast (greedy)
//!   strategies, plus plan KPIs
//! - **`validation`**: Catalog integrity checks and plan verification
//! - **`diagnostics`**: Non-fatal warnings side channel
//!
//! # Example
//!
//! ```
//! use u_curriculum::models::Course;
//! use u_curriculum::scheduler::{Planner, PlannerConfig};
//!
//! let courses = vec![
//!     Course::new("A").with_credits(3.0).with_cycle(1),
//!     Course::new("B").with_credits(3.0).with_cycle(1),
//!     Course::new("C").with_credits(4.0).with_cycle(2).with_prerequisite("A"),
//!     Course::new("D").with_credits(1.0).with_cycle(2).with_prerequisite("B").with_corequisite("E"),
//!     Course::new("E").with_credits(3.0).with_cycle(2).with_prerequisite("B").with_corequisite("D"),
//! ];
//! let config = PlannerConfig::default().with_max_courses(2).with_max_credits(8.0);
//! let outcome = Planner::new(config)?.plan(&courses, &[] as &[&str]);
//!
//! assert_eq!(outcome.to_codes(), vec![vec!["A", "B"], vec!["D", "E"], vec!["C"]]);
//! # Ok::<(), u_curriculum::PlanError>(())
//! ```
//!
//! # Architecture
//!
//! The engine is pure and synchronous: each call builds its own index and
//! owns its search state. Caps (`expansion_cap`, `combo_cap`) bound the
//! worst case; hitting one yields a best-effort plan, never an error.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod course_set;
pub mod diagnostics;
pub mod dispatching;
mod error;
pub mod index;
pub mod models;
pub mod scheduler;
pub mod search;
pub mod validation;

pub use course_set::CourseSet;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::PlanError;
pub use models::{Course, Plan};
pub use scheduler::{run_planner, PlanOutcome, PlanStatus, Planner, PlannerConfig, Strategy};
