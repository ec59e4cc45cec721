// ABOUTME: Fallback health grading with an ordered first-match-wins rule list
// ABOUTME: Fills health_grade and health_reason only where the source left them out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fallback Grading Engine
//!
//! Rules are evaluated top-down and the first match wins:
//!
//! 1. `calories > 500` or (`carbs > 50` and `protein < 5`) → `D`
//! 2. `protein > 20` → `A`
//! 3. otherwise → `B`
//!
//! The thresholds overlap (a 700 kcal item with 40 g protein satisfies both
//! rule 1 and rule 2), so the order is part of the contract.

use nutrigrade_core::constants::auto_grade;
use nutrigrade_core::models::{FoodItem, HealthGrade};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Thresholds used by the fallback rules; comparisons are strict
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradingThresholds {
    /// Calories above which an item is graded D
    pub calorie_ceiling: f64,
    /// Carbs above which a low-protein item is graded D
    pub carb_ceiling: f64,
    /// Protein below which the carb ceiling applies
    pub low_protein_floor: f64,
    /// Protein above which an item is graded A
    pub high_protein_floor: f64,
}

impl Default for GradingThresholds {
    fn default() -> Self {
        Self {
            calorie_ceiling: auto_grade::CALORIE_CEILING,
            carb_ceiling: auto_grade::CARB_CEILING,
            low_protein_floor: auto_grade::LOW_PROTEIN_FLOOR,
            high_protein_floor: auto_grade::HIGH_PROTEIN_FLOOR,
        }
    }
}

/// One fallback rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeRule {
    /// Calorie-dense or sugary item
    HighCalorieDensity,
    /// Protein-rich item
    HighProteinSource,
    /// Catch-all
    BalancedMeal,
}

impl GradeRule {
    /// Evaluation order; do not reorder
    pub const ORDERED: [Self; 3] = [
        Self::HighCalorieDensity,
        Self::HighProteinSource,
        Self::BalancedMeal,
    ];

    /// Whether the rule applies to the item
    #[must_use]
    pub fn matches(&self, item: &FoodItem, thresholds: &GradingThresholds) -> bool {
        match self {
            Self::HighCalorieDensity => {
                item.calories > thresholds.calorie_ceiling
                    || (item.carbs > thresholds.carb_ceiling
                        && item.protein < thresholds.low_protein_floor)
            }
            Self::HighProteinSource => item.protein > thresholds.high_protein_floor,
            Self::BalancedMeal => true,
        }
    }

    /// Grade assigned by the rule
    #[must_use]
    pub const fn grade(&self) -> HealthGrade {
        match self {
            Self::HighCalorieDensity => HealthGrade::D,
            Self::HighProteinSource => HealthGrade::A,
            Self::BalancedMeal => HealthGrade::B,
        }
    }

    /// Rationale attached by the rule
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::HighCalorieDensity => auto_grade::HIGH_CALORIE_DENSITY,
            Self::HighProteinSource => auto_grade::HIGH_PROTEIN_SOURCE,
            Self::BalancedMeal => auto_grade::BALANCED_MEAL,
        }
    }
}

/// What grading did to a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeOutcome {
    /// Source grade and rationale kept as-is
    Kept,
    /// Source grade kept; rationale filled from the grade description
    ReasonFilled(HealthGrade),
    /// Grade synthesized by a fallback rule
    AutoGraded(GradeRule),
}

/// Counts of grading outcomes over a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingSummary {
    /// Items whose source grade and rationale were kept
    pub kept: usize,
    /// Items whose rationale was filled in
    pub reasons_filled: usize,
    /// Items graded by a fallback rule
    pub auto_graded: usize,
}

impl GradingSummary {
    fn record(&mut self, outcome: GradeOutcome) {
        match outcome {
            GradeOutcome::Kept => self.kept += 1,
            GradeOutcome::ReasonFilled(_) => self.reasons_filled += 1,
            GradeOutcome::AutoGraded(_) => self.auto_graded += 1,
        }
    }
}

/// Stateless fallback grader
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradingEngine {
    thresholds: GradingThresholds,
}

impl GradingEngine {
    /// Create an engine with custom thresholds
    #[must_use]
    pub const fn new(thresholds: GradingThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &GradingThresholds {
        &self.thresholds
    }

    /// First rule matching the item
    #[must_use]
    pub fn classify(&self, item: &FoodItem) -> GradeRule {
        GradeRule::ORDERED
            .into_iter()
            .find(|rule| rule.matches(item, &self.thresholds))
            .unwrap_or(GradeRule::BalancedMeal)
    }

    /// Ensure the item carries a grade and rationale
    ///
    /// A grade already present is never changed.
    pub fn grade(&self, item: &mut FoodItem) -> GradeOutcome {
        if let Some(grade) = item.health_grade {
            let has_reason = item
                .health_reason
                .as_deref()
                .is_some_and(|reason| !reason.trim().is_empty());
            if has_reason {
                return GradeOutcome::Kept;
            }
            item.health_reason = Some(grade.description().to_owned());
            return GradeOutcome::ReasonFilled(grade);
        }

        let rule = self.classify(item);
        debug!(food = %item.name, ?rule, grade = %rule.grade(), "Auto-graded food item");
        item.health_grade = Some(rule.grade());
        item.health_reason = Some(rule.reason().to_owned());
        GradeOutcome::AutoGraded(rule)
    }

    /// Grade every item in place, preserving order
    pub fn grade_all(&self, items: &mut [FoodItem]) -> GradingSummary {
        items.iter_mut().fold(GradingSummary::default(), |mut summary, item| {
            summary.record(self.grade(item));
            summary
        })
    }
}
