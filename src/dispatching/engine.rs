//! Rule engine for multi-criteria unit ordering.
//!
//! Composes multiple unit rules with configurable evaluation modes.
//! Sorting is stable: units that tie on every rule keep their input
//! (seed) order, which keeps planning deterministic.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, RuleScore, UnitRule};
use crate::search::Unit;

/// How multiple rules are combined.
#[derive(Debug, Clone, Default)]
pub enum EvaluationMode {
    /// Apply rules in sequence; use next rule only on ties.
    #[default]
    Sequential,
    /// Compute weighted sum of all rule scores.
    Weighted,
}

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn UnitRule>,
    weight: f64,
}

/// A composable rule engine for unit prioritization.
///
/// # Example
/// ```
/// use u_curriculum::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::EarliestCycle)
///     .with_tie_breaker(rules::LargestClosure)
///     .with_tie_breaker(rules::MostUnlocks);
/// assert_eq!(engine.rule_names(), vec!["EC", "LC", "MU"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<WeightedRule>,
    mode: EvaluationMode,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            mode: EvaluationMode::Sequential,
            epsilon: 1e-9,
        }
    }

    /// The default greedy ordering.
    ///
    /// Earliest cycle hint (when `prefer_earlier_cycle`), then largest
    /// closure, then most unlocks, then fewest credits.
    pub fn greedy(prefer_earlier_cycle: bool) -> Self {
        let engine = if prefer_earlier_cycle {
            Self::new().with_rule(rules::EarliestCycle)
        } else {
            Self::new()
        };
        engine
            .with_tie_breaker(rules::LargestClosure)
            .with_tie_breaker(rules::MostUnlocks)
            .with_tie_breaker(rules::FewestCredits)
    }

    /// Adds a primary rule (weight 1.0).
    pub fn with_rule<R: UnitRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 1.0,
        });
        self
    }

    /// Adds a weighted rule.
    pub fn with_weighted_rule<R: UnitRule + 'static>(mut self, rule: R, weight: f64) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Adds a tie-breaking rule (weight 0.0, used only in Sequential mode).
    pub fn with_tie_breaker<R: UnitRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 0.0,
        });
        self
    }

    /// Sets the evaluation mode.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|wr| wr.rule.name()).collect()
    }

    /// Sorts units by priority (highest priority first).
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(&self, units: &[Unit]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..units.len()).collect();

        match &self.mode {
            EvaluationMode::Sequential => {
                indices.sort_by(|&a, &b| self.compare_sequential(&units[a], &units[b]));
            }
            EvaluationMode::Weighted => {
                let scores: Vec<f64> = units.iter().map(|u| self.weighted_score(u)).collect();
                indices.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
            }
        }

        indices
    }

    /// Returns the index of the highest-priority unit.
    pub fn select_best(&self, units: &[Unit]) -> Option<usize> {
        self.sort_indices(units).first().copied()
    }

    /// Evaluates a single unit and returns weighted scores from each rule.
    pub fn evaluate(&self, unit: &Unit) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(unit) * wr.weight)
            .collect()
    }

    fn compare_sequential(&self, a: &Unit, b: &Unit) -> Ordering {
        for wr in &self.rules {
            let score_a = wr.rule.evaluate(a);
            let score_b = wr.rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.total_cmp(&score_b);
            }
        }
        Ordering::Equal
    }

    fn weighted_score(&self, unit: &Unit) -> f64 {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(unit) * wr.weight)
            .sum()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .field("mode", &self.mode)
            .finish()
    }
}
