//! Cycle composition.
//!
//! Enumerates unions of pairwise-disjoint units that fit one cycle's
//! course and credit budget. Each combination is a candidate cycle.
//!
//! # Algorithm
//! Depth-first backtracking over units in input order; a branch is
//! pruned as soon as it would overlap, exceed `max_courses`, or exceed
//! `max_credits`. Enumeration stops once `combo_cap` combinations exist.
//!
//! # Ordering
//! Results are sorted by course count descending, then credits
//! ascending; ties keep enumeration order. Drivers rely on the fullest
//! cycle coming first.

use super::{within_credits, Unit};
use crate::course_set::CourseSet;

/// One candidate cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Combo {
    /// Union of the chosen units.
    pub mask: CourseSet,
    /// Number of courses.
    pub size: usize,
    /// Credit sum.
    pub credits: f64,
}

/// Output of [`compose`].
#[derive(Debug, Clone, Default)]
pub struct Composition {
    /// Candidate cycles, fullest first.
    pub combos: Vec<Combo>,
    /// Whether enumeration stopped at the cap.
    pub truncated: bool,
}

impl Composition {
    /// Whether no combination was found.
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
}

struct Composer<'a> {
    units: &'a [Unit],
    max_courses: usize,
    max_credits: f64,
    combo_cap: usize,
    combos: Vec<Combo>,
    truncated: bool,
}

impl Composer<'_> {
    fn backtrack(&mut self, start: usize, mask: &CourseSet, size: usize, credits: f64) {
        for j in start..self.units.len() {
            if self.truncated {
                return;
            }

            let unit = &self.units[j];
            let next_size = size + unit.size;
            let next_credits = credits + unit.credits;
            if next_size > self.max_courses
                || !within_credits(next_credits, self.max_credits)
                || !mask.is_disjoint(&unit.mask)
            {
                continue;
            }

            if self.combos.len() >= self.combo_cap {
                self.truncated = true;
                return;
            }

            let next_mask = mask.union(&unit.mask);
            self.combos.push(Combo {
                mask: next_mask.clone(),
                size: next_size,
                credits: next_credits,
            });
            self.backtrack(j + 1, &next_mask, next_size, next_credits);
        }
    }
}

/// Enumerates bounded, non-overlapping unit combinations.
///
/// Never fails: a cap hit returns what was found so far with
/// `truncated = true`.
pub fn compose(
    units: &[Unit],
    max_courses: usize,
    max_credits: f64,
    combo_cap: usize,
) -> Composition {
    let Some(first) = units.first() else {
        return Composition::default();
    };

    let mut composer = Composer {
        units,
        max_courses,
        max_credits,
        combo_cap,
        combos: Vec::new(),
        truncated: false,
    };
    composer.backtrack(0, &CourseSet::empty(first.mask.width()), 0, 0.0);

    let mut combos = composer.combos;
    combos.sort_by(|a, b| {
        b.size
            .cmp(&a.size)
            .then_with(|| a.credits.total_cmp(&b.credits))
    });

    Composition {
        combos,
        truncated: composer.truncated,
    }
}
