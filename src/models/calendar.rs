//! Academic calendar.
//!
//! Plan cycles are abstract ("cycle 1, 2, ..."). Institutions run a fixed
//! number of terms per year, so a plan starting after the student's last
//! completed term can be labeled with real terms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A concrete academic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Term {
    /// Calendar year.
    pub year: i32,
    /// Term within the year (1-based).
    pub term: u32,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}", self.term, self.year)
    }
}

/// Maps plan cycles onto terms.
///
/// The first plan cycle is the term right after `last_term`/`last_year`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicCalendar {
    /// Terms per academic year (at least 1).
    pub terms_per_year: u32,
    /// Last term already completed (1-based; 0 = none yet this year).
    pub last_term: u32,
    /// Year of the last completed term.
    pub last_year: i32,
}

impl AcademicCalendar {
    /// Creates a calendar with three terms per year.
    pub fn new(last_term: u32, last_year: i32) -> Self {
        Self {
            terms_per_year: 3,
            last_term,
            last_year,
        }
    }

    /// Sets the number of terms per year.
    pub fn with_terms_per_year(mut self, terms: u32) -> Self {
        self.terms_per_year = terms.max(1);
        self
    }

    /// Term for the 0-based plan cycle `index`.
    pub fn term_of(&self, index: usize) -> Term {
        let per_year = i64::from(self.terms_per_year.max(1));
        // Zero-based position of the target term counted from term 1 of last_year.
        let position = i64::from(self.last_term) - 1 + index as i64 + 1;
        let year_offset = position.div_euclid(per_year);
        let term = position.rem_euclid(per_year) + 1;
        Term {
            year: self.last_year + year_offset as i32,
            term: term as u32,
        }
    }
}

impl Default for AcademicCalendar {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
