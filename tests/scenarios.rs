//! End-to-end planning scenarios.

use u_curriculum::models::{AcademicCalendar, Course, Curriculum};
use u_curriculum::scheduler::{PlanKpi, PlanStatus, Planner, PlannerConfig, Strategy};
use u_curriculum::validation::{validate_catalog, validate_plan};
use u_curriculum::DiagnosticKind;

const NONE: &[&str] = &[];
const STRATEGIES: [Strategy; 2] = [Strategy::Optimal, Strategy::Fast];

fn planner(strategy: Strategy, max_courses: usize, max_credits: f64) -> Planner {
    Planner::new(
        PlannerConfig::default()
            .with_max_courses(max_courses)
            .with_max_credits(max_credits)
            .with_strategy(strategy),
    )
    .unwrap()
}

fn scenario_a() -> Vec<Course> {
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

/// A four-cycle engineering curriculum with labs, a capstone gate, and an elective.
fn engineering() -> Curriculum {
    Curriculum::new("Engineering")
        .with_cycle(vec![
            Course::new("MAT1").with_credits(4.0),
            Course::new("PHY1").with_credits(4.0).with_corequisite("PHY1L"),
            Course::new("PHY1L").with_credits(1.0).with_corequisite("PHY1"),
            Course::new("PRG1").with_credits(3.0),
            Course::new("COM1").with_credits(2.0),
        ])
        .with_cycle(vec![
            Course::new("MAT2").with_credits(4.0).with_prerequisite("MAT1"),
            Course::new("PHY2")
                .with_credits(4.0)
                .with_prerequisite("PHY1")
                .with_corequisite("PHY2L"),
            Course::new("PHY2L")
                .with_credits(1.0)
                .with_prerequisite("PHY1L")
                .with_corequisite("PHY2"),
            Course::new("PRG2").with_credits(3.0).with_prerequisite("PRG1"),
            Course::new("STA1").with_credits(3.0).with_prerequisite("MAT1"),
        ])
        .with_cycle(vec![
            Course::new("MAT3").with_credits(4.0).with_prerequisite("MAT2"),
            Course::new("ALG").with_credits(3.0).with_prerequisite("PRG2"),
            Course::new("DBS").with_credits(3.0).with_prerequisite("PRG2"),
        ])
        .with_cycle(vec![
            Course::new("CAP").with_credits(4.0).requires_all_until(3),
            Course::new("ETH").with_credits(2.0),
        ])
        .with_elective(Course::new("ART").with_credits(2.0))
}

#[test]
fn scenario_a_clean_packing() {
    for strategy in STRATEGIES {
        let outcome = planner(strategy, 2, 8.0).plan(&scenario_a(), NONE);
        assert_eq!(outcome.status, PlanStatus::Complete, "{strategy:?}");
        assert_eq!(
            outcome.to_codes(),
            vec![vec!["A", "B"], vec!["D", "E"], vec!["C"]],
            "{strategy:?}"
        );
    }
}

#[test]
fn scenario_b_rule_gate() {
    let courses = vec![
        Course::new("P1").with_credits(3.0).with_cycle(1),
        Course::new("P2").with_credits(3.0).with_cycle(1),
        Course::new("P3").with_credits(3.0).with_cycle(1),
        Course::new("Q1").with_credits(3.0).with_cycle(2).with_prerequisite("P1"),
        Course::new("Q2").with_credits(3.0).with_cycle(2),
        Course::new("X").with_credits(3.0).with_cycle(3).requires_all_until(2),
    ];

    for strategy in STRATEGIES {
        let outcome = planner(strategy, 3, 18.0).plan(&courses, NONE);
        assert!(outcome.is_complete(), "{strategy:?}");

        let x = outcome.plan.cycle_of("X").unwrap();
        assert!(x >= 2, "{strategy:?}: X planned in cycle {}", x + 1);
        assert_eq!(outcome.plan.cycles[x].courses, vec!["X"]);
        assert!(validate_plan(&courses, NONE, &outcome.plan, 3, 18.0).is_empty());
    }
}

#[test]
fn scenario_c_dangling_reference() {
    let courses = vec![
        Course::new("A").with_credits(3.0),
        Course::new("B")
            .with_credits(3.0)
            .with_prerequisite("A")
            .with_prerequisite("NOPE-999"),
    ];

    for strategy in STRATEGIES {
        let outcome = planner(strategy, 4, 18.0).plan(&courses, NONE);
        assert!(outcome.is_complete());
        assert_eq!(outcome.to_codes(), vec![vec!["A"], vec!["B"]]);

        let dangling: Vec<_> = outcome
            .diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::UnknownPrerequisite)
            .collect();
        assert_eq!(dangling.len(), 1);
        assert!(dangling[0].message.contains("NOPE-999"));
    }
}

#[test]
fn scenario_d_already_complete() {
    for strategy in STRATEGIES {
        let outcome = planner(strategy, 2, 8.0).plan(&scenario_a(), &["A", "B", "C", "D", "E"]);
        assert!(outcome.is_complete());
        assert!(outcome.plan.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }
}

#[test]
fn scenario_e_stall() {
    let courses = vec![
        Course::new("A").with_credits(3.0),
        Course::new("X").with_credits(3.0).with_prerequisite("Y"),
        Course::new("Y").with_credits(3.0).with_prerequisite("X"),
    ];

    for strategy in STRATEGIES {
        let outcome = planner(strategy, 4, 18.0).plan(&courses, NONE);
        assert_eq!(outcome.status, PlanStatus::Stalled);
        assert_eq!(outcome.to_codes(), vec![vec!["A"]]);
        assert_eq!(outcome.unscheduled, vec!["X", "Y"]);
        assert!(outcome.has_diagnostic(DiagnosticKind::Stalled));
    }
}

#[test]
fn nothing_schedulable_returns_empty_plan() {
    let courses = vec![
        Course::new("X").with_prerequisite("Y"),
        Course::new("Y").with_prerequisite("X"),
    ];
    for strategy in STRATEGIES {
        let outcome = planner(strategy, 4, 18.0).plan(&courses, NONE);
        assert!(outcome.plan.is_empty());
        assert_eq!(outcome.status, PlanStatus::Stalled);
    }
}

#[test]
fn engineering_curriculum_is_valid() {
    assert!(validate_catalog(&engineering().courses()).is_ok());
}

#[test]
fn engineering_optimal_meets_lower_bound() {
    // CAP needs the 13 courses of cycles 1-3 first: ceil(13 / 4) + 1 = 5.
    let courses = engineering().courses();
    let outcome = planner(Strategy::Optimal, 4, 16.0).plan(&courses, NONE);
    assert!(outcome.is_complete());
    assert_eq!(outcome.plan.cycle_count(), 5);
    assert_eq!(outcome.plan.cycle_of("CAP"), Some(4));
    assert!(outcome.plan.cycle_of("ART").is_none());
}

#[test]
fn engineering_plans_respect_every_rule() {
    let courses = engineering().courses();
    for strategy in STRATEGIES {
        let outcome = planner(strategy, 4, 16.0).plan(&courses, NONE);
        assert!(outcome.is_complete(), "{strategy:?}");
        let violations = validate_plan(&courses, NONE, &outcome.plan, 4, 16.0);
        assert!(violations.is_empty(), "{strategy:?}: {violations:?}");
    }
}

#[test]
fn optimal_never_worse_than_fast() {
    let courses = engineering().courses();
    let optimal = planner(Strategy::Optimal, 4, 16.0).plan(&courses, NONE);
    let fast = planner(Strategy::Fast, 4, 16.0).plan(&courses, NONE);
    assert!(optimal.plan.cycle_count() <= fast.plan.cycle_count());
}

#[test]
fn coverage_with_partial_progress() {
    let courses = engineering().courses();
    let completed = ["MAT1", "PHY1", "PHY1L", "PRG1"];
    for strategy in STRATEGIES {
        let outcome = planner(strategy, 4, 16.0).plan(&courses, &completed);
        let mut planned: Vec<&str> = outcome.plan.scheduled_codes().collect();
        planned.sort_unstable();

        let mut expected: Vec<&str> = courses
            .iter()
            .filter(|c| c.is_mandatory() && !completed.contains(&c.code.as_str()))
            .map(|c| c.code.as_str())
            .collect();
        expected.sort_unstable();

        assert_eq!(planned, expected, "{strategy:?}");
    }
}

#[test]
fn completed_corequisite_frees_partner() {
    let courses = engineering().courses();
    let outcome = planner(Strategy::Optimal, 4, 16.0).plan(&courses, &["PHY1L"]);
    assert!(outcome.is_complete());
    assert!(outcome.plan.cycle_of("PHY1").is_some());
    assert!(outcome.plan.cycle_of("PHY1L").is_none());
}

#[test]
fn replanning_after_completion_is_empty() {
    let courses = engineering().courses();
    for strategy in STRATEGIES {
        let planner = planner(strategy, 4, 16.0);
        let first = planner.plan(&courses, &["MAT1"]);

        let mut completed = vec!["MAT1".to_string()];
        completed.extend(first.plan.scheduled_codes().map(String::from));

        let second = planner.plan(&courses, &completed);
        assert!(second.is_complete());
        assert!(second.plan.is_empty());
    }
}

#[test]
fn fast_mode_is_deterministic() {
    let courses = engineering().courses();
    let planner = planner(Strategy::Fast, 3, 12.0);
    let first = planner.plan(&courses, NONE);
    for _ in 0..5 {
        assert_eq!(planner.plan(&courses, NONE).plan, first.plan);
    }
}

#[test]
fn credit_budget_holds_for_every_cycle() {
    let courses = engineering().courses();
    for strategy in STRATEGIES {
        let outcome = planner(strategy, 5, 9.0).plan(&courses, NONE);
        for cycle in &outcome.plan.cycles {
            assert!(cycle.credits <= 9.0 + 1e-9, "{strategy:?}: {cycle:?}");
            assert!(cycle.len() <= 5);
        }
    }
}

#[test]
fn json_curriculum_document() {
    let json = r#"{
        "name": "Short Program",
        "cycles": [
            {"courses": [
                {"code": "INTRO", "name": "Introduction", "credits": 3},
                {"code": "LAB", "credits": 1, "corequisites": ["WORK"]},
                {"code": "WORK", "credits": 3, "corequisites": ["LAB"]}
            ]},
            {"courses": [
                {"code": "ADV", "credits": 4, "prerequisites": ["INTRO"]},
                {"code": "THESIS", "credits": 6, "rule": {"requires_all_until": 1}}
            ]}
        ],
        "electives": [{"code": "MUSIC", "credits": 2}]
    }"#;

    let planner = planner(Strategy::Optimal, 3, 10.0);
    let outcome = planner.plan_json(json, NONE);
    assert!(outcome.is_complete());
    assert_eq!(
        outcome.to_codes(),
        vec![vec!["INTRO", "LAB", "WORK"], vec!["ADV", "THESIS"]]
    );
}

#[test]
fn invalid_json_yields_empty_plan() {
    let outcome = planner(Strategy::Optimal, 3, 10.0).plan_json("not a catalog", NONE);
    assert!(outcome.plan.is_empty());
    assert!(outcome.has_diagnostic(DiagnosticKind::InvalidCatalog));
}

#[test]
fn expansion_cap_gives_best_effort_plan() {
    let courses = engineering().courses();
    let planner = Planner::new(
        PlannerConfig::default()
            .with_max_courses(4)
            .with_max_credits(16.0)
            .with_expansion_cap(3),
    )
    .unwrap();
    let outcome = planner.plan(&courses, NONE);
    assert_eq!(outcome.status, PlanStatus::CapReached);
    assert!(!outcome.unscheduled.is_empty());
    assert!(outcome.has_diagnostic(DiagnosticKind::ExpansionCapReached));

    // Partial plans still respect every rule they touch.
    let violations = validate_plan(&courses, NONE, &outcome.plan, 4, 16.0);
    assert!(violations
        .iter()
        .all(|v| v.violation_type == u_curriculum::models::ViolationType::Missing));
}

#[test]
fn plan_labels_and_kpis() {
    let outcome = planner(Strategy::Optimal, 2, 8.0).plan(&scenario_a(), NONE);
    let labels: Vec<String> = outcome
        .plan
        .labeled(&AcademicCalendar::new(3, 2024))
        .iter()
        .map(|(term, _)| term.to_string())
        .collect();
    assert_eq!(labels, vec!["01-2025", "02-2025", "03-2025"]);

    let kpi = PlanKpi::calculate(&outcome.plan, 2);
    assert_eq!(kpi.cycle_count, 3);
    assert_eq!(kpi.course_count, 5);
    assert!((kpi.total_credits - 14.0).abs() < 1e-9);
    assert!((kpi.fill_rate - 5.0 / 6.0).abs() < 1e-9);
}
