#![allow(dead_code)]

use u_curriculum::models::Course;

/// Shape of one generated course.
#[derive(Debug, Clone)]
pub struct CourseShape {
    /// Prerequisite indices; only `j < i` is used.
    pub prerequisites: Vec<usize>,
    pub credits: u8,
    pub cycle: u32,
    /// Pair with the next course as mutual corequisites.
    pub paired: bool,
}

/// Builds a catalog that can always be completed.
///
/// Prerequisites only point to earlier courses, corequisite pairs are
/// `(i, i + 1)` with `i` even and no prerequisite between them, and an
/// optional gated course (`requires_all_until`) is appended last so no
/// other course can depend on it.
pub fn completable_catalog(shapes: &[CourseShape], gate: Option<u32>) -> Vec<Course> {
    let n = shapes.len();
    let mut courses: Vec<Course> = shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            Course::new(code(i))
                .with_credits(shape.credits as f64)
                .with_cycle(shape.cycle)
        })
        .collect();

    for (i, shape) in shapes.iter().enumerate() {
        for &j in &shape.prerequisites {
            // Never require a later course or the corequisite partner.
            if j >= i || (i % 2 == 1 && j == i - 1 && shapes[j].paired) {
                continue;
            }
            if !courses[i].prerequisites.contains(&code(j)) {
                courses[i].prerequisites.push(code(j));
            }
        }
    }

    for i in (0..n.saturating_sub(1)).step_by(2) {
        if shapes[i].paired {
            courses[i].corequisites.push(code(i + 1));
            courses[i + 1].corequisites.push(code(i));
        }
    }

    if let Some(threshold) = gate {
        courses.push(
            Course::new("GATE")
                .with_credits(2.0)
                .with_cycle(9)
                .requires_all_until(threshold),
        );
    }

    courses
}

pub fn code(i: usize) -> String {
    format!("K{i:02}")
}

/// Codes of mandatory courses, in catalog order.
pub fn mandatory_codes(courses: &[Course]) -> Vec<String> {
    courses
        .iter()
        .filter(|c| c.is_mandatory())
        .map(|c| c.code.clone())
        .collect()
}
