//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::dispatching::RuleEngine;
use crate::PlanError;

/// Search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Best-first search; minimizes the number of cycles.
    #[default]
    Optimal,
    /// Deterministic greedy walk; fast, not guaranteed minimal.
    Fast,
}

/// What the optimal strategy returns when it hits the expansion cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapFallback {
    /// Plan to the visited state with the most courses (first visited wins ties).
    #[default]
    MostScheduled,
    /// Discard the partial search and run the greedy strategy from the start.
    Greedy,
}

/// Configuration for one planning run.
///
/// # Defaults
///
/// ```
/// use u_curriculum::scheduler::{PlannerConfig, Strategy};
///
/// let config = PlannerConfig::default();
/// assert_eq!(config.max_courses_per_cycle, 4);
/// assert_eq!(config.max_credits_per_cycle, 18.0);
/// assert_eq!(config.strategy, Strategy::Optimal);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_curriculum::scheduler::{PlannerConfig, Strategy};
///
/// let config = PlannerConfig::default()
///     .with_max_courses(5)
///     .with_max_credits(21.0)
///     .with_strategy(Strategy::Fast);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum courses per cycle (> 0).
    pub max_courses_per_cycle: usize,

    /// Maximum credits per cycle (finite, > 0).
    pub max_credits_per_cycle: f64,

    /// Maximum combinations enumerated when composing one cycle.
    ///
    /// Bounds work on catalogs with many independent closures.
    pub combo_cap: usize,

    /// Maximum state expansions for the optimal strategy.
    pub expansion_cap: usize,

    /// Whether the fast strategy favors units from earlier curriculum cycles.
    pub prefer_earlier_cycle: bool,

    /// Search strategy.
    pub strategy: Strategy,

    /// Behavior of the optimal strategy on expansion cap.
    pub cap_fallback: CapFallback,

    /// Custom unit ordering for the fast strategy.
    ///
    /// `None` uses [`RuleEngine::greedy`] with `prefer_earlier_cycle`.
    #[serde(skip)]
    pub rule_engine: Option<RuleEngine>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_courses_per_cycle: 4,
            max_credits_per_cycle: 18.0,
            combo_cap: 4000,
            expansion_cap: 400_000,
            prefer_earlier_cycle: true,
            strategy: Strategy::Optimal,
            cap_fallback: CapFallback::MostScheduled,
            rule_engine: None,
        }
    }
}

impl PlannerConfig {
    /// Sets the per-cycle course limit.
    pub fn with_max_courses(mut self, n: usize) -> Self {
        self.max_courses_per_cycle = n;
        self
    }

    /// Sets the per-cycle credit limit.
    pub fn with_max_credits(mut self, credits: f64) -> Self {
        self.max_credits_per_cycle = credits;
        self
    }

    /// Sets the combination cap.
    pub fn with_combo_cap(mut self, n: usize) -> Self {
        self.combo_cap = n;
        self
    }

    /// Sets the expansion cap.
    pub fn with_expansion_cap(mut self, n: usize) -> Self {
        self.expansion_cap = n;
        self
    }

    /// Enables or disables the earlier-cycle preference.
    pub fn with_prefer_earlier_cycle(mut self, prefer: bool) -> Self {
        self.prefer_earlier_cycle = prefer;
        self
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the expansion-cap fallback.
    pub fn with_cap_fallback(mut self, fallback: CapFallback) -> Self {
        self.cap_fallback = fallback;
        self
    }

    /// Sets a custom unit ordering for the fast strategy.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = Some(engine);
        self
    }

    /// Unit ordering used by the fast strategy.
    pub fn unit_ordering(&self) -> RuleEngine {
        self.rule_engine
            .clone()
            .unwrap_or_else(|| RuleEngine::greedy(self.prefer_earlier_cycle))
    }

    /// Checks that every limit is usable.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.max_courses_per_cycle == 0 {
            return Err(PlanError::InvalidConfig(
                "max_courses_per_cycle must be at least 1".into(),
            ));
        }
        if !self.max_credits_per_cycle.is_finite() || self.max_credits_per_cycle <= 0.0 {
            return Err(PlanError::InvalidConfig(
                "max_credits_per_cycle must be a positive number".into(),
            ));
        }
        if self.combo_cap == 0 {
            return Err(PlanError::InvalidConfig("combo_cap must be at least 1".into()));
        }
        if self.expansion_cap == 0 {
            return Err(PlanError::InvalidConfig(
                "expansion_cap must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
