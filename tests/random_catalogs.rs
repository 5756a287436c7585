//! Seeded stress catalogs.

mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::{code, completable_catalog, CourseShape};
use u_curriculum::models::{Course, ViolationType};
use u_curriculum::scheduler::{PlanStatus, Planner, PlannerConfig, Strategy};
use u_curriculum::validation::validate_plan;

const NONE: &[&str] = &[];

fn random_shapes(rng: &mut StdRng, n: usize) -> Vec<CourseShape> {
    (0..n)
        .map(|i| {
            let mut prerequisites = Vec::new();
            // Up to two prerequisites among the previous four courses.
            for _ in 0..rng.random_range(0..=2) {
                if i > 0 {
                    prerequisites.push(i - rng.random_range(1..=i.min(4)));
                }
            }
            CourseShape {
                prerequisites,
                credits: rng.random_range(1..=5),
                cycle: (i / 4) as u32 + 1,
                paired: rng.random_bool(0.2),
            }
        })
        .collect()
}

fn planner(strategy: Strategy, max_courses: usize, max_credits: f64) -> Planner {
    Planner::new(
        PlannerConfig::default()
            .with_max_courses(max_courses)
            .with_max_credits(max_credits)
            .with_strategy(strategy)
            .with_expansion_cap(50_000),
    )
    .unwrap()
}

#[test]
fn optimal_never_needs_more_cycles_than_fast() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..25 {
        let n = rng.random_range(6..=14);
        let shapes = random_shapes(&mut rng, n);
        let gate = rng.random_bool(0.3).then(|| rng.random_range(1..=3));
        let courses = completable_catalog(&shapes, gate);

        let optimal = planner(Strategy::Optimal, 4, 12.0).plan(&courses, NONE);
        let fast = planner(Strategy::Fast, 4, 12.0).plan(&courses, NONE);

        assert_eq!(fast.status, PlanStatus::Complete);
        assert!(validate_plan(&courses, NONE, &fast.plan, 4, 12.0).is_empty());
        if optimal.status == PlanStatus::Complete {
            assert!(validate_plan(&courses, NONE, &optimal.plan, 4, 12.0).is_empty());
            assert!(
                optimal.plan.cycle_count() <= fast.plan.cycle_count(),
                "optimal {} > fast {}",
                optimal.plan.cycle_count(),
                fast.plan.cycle_count()
            );
        }
    }
}

#[test]
fn fast_mode_handles_large_catalogs() {
    let mut rng = StdRng::seed_from_u64(42);
    let shapes = random_shapes(&mut rng, 120);
    let courses = completable_catalog(&shapes, Some(5));

    let outcome = planner(Strategy::Fast, 5, 18.0).plan(&courses, NONE);
    assert!(outcome.is_complete());
    assert!(outcome.expansions <= courses.len() + 1);
    assert!(validate_plan(&courses, NONE, &outcome.plan, 5, 18.0).is_empty());
}

#[test]
fn cyclic_prerequisites_terminate() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let n = rng.random_range(5..=12);
        let shapes = random_shapes(&mut rng, n);
        let mut courses = completable_catalog(&shapes, None);

        // A back-edge from an early course to a later one closes a loop.
        let from = rng.random_range(0..n / 2);
        let to = rng.random_range(n / 2..n);
        courses[from].prerequisites.push(code(to));

        for strategy in [Strategy::Optimal, Strategy::Fast] {
            let outcome = planner(strategy, 3, 12.0).plan(&courses, NONE);
            assert_ne!(outcome.status, PlanStatus::CapReached, "{strategy:?}");

            let violations = validate_plan(&courses, NONE, &outcome.plan, 3, 12.0);
            assert!(
                violations
                    .iter()
                    .all(|v| v.violation_type == ViolationType::Missing),
                "{strategy:?}: {violations:?}"
            );
            if outcome.status == PlanStatus::Stalled {
                assert!(!outcome.unscheduled.is_empty());
            }
        }
    }
}

#[test]
fn many_independent_closures_hit_combo_cap() {
    let courses: Vec<Course> = (0..40)
        .map(|i| {
            let partner = if i % 2 == 0 { i + 1 } else { i - 1 };
            Course::new(code(i))
                .with_credits(1.0)
                .with_corequisite(code(partner))
        })
        .collect();

    let planner = Planner::new(
        PlannerConfig::default()
            .with_max_courses(8)
            .with_max_credits(20.0)
            .with_combo_cap(50),
    )
    .unwrap();
    let outcome = planner.plan(&courses, NONE);

    assert!(outcome.is_complete());
    assert_eq!(outcome.plan.cycle_count(), 5);
    assert!(outcome.has_diagnostic(u_curriculum::DiagnosticKind::ComboCapReached));
}
