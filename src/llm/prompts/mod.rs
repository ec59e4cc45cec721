// ABOUTME: Prompts sent to the upstream completion service, loaded at compile time
// ABOUTME: Vision analysis, meal description, and daily recommendation prompt builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.
//! Both analysis prompts ask for the shapes the normalizer accepts, including
//! the `{"error": "not_food"}` sentinel.

use nutrigrade_core::models::{MacroTotals, NutritionGoals};

/// Prompt for analyzing a food photo
pub const VISION_ANALYSIS_PROMPT: &str = include_str!("vision_analysis.md");

/// Prompt template for analyzing a typed meal description
///
/// `{meal}` is replaced by the user's description.
pub const MEAL_DESCRIPTION_TEMPLATE: &str = include_str!("meal_description.md");

const MEAL_PLACEHOLDER: &str = "{meal}";

/// Get the vision analysis prompt
#[must_use]
pub const fn get_vision_analysis_prompt() -> &'static str {
    VISION_ANALYSIS_PROMPT
}

/// Build the analysis prompt for a typed meal description
#[must_use]
pub fn build_meal_description_prompt(meal: &str) -> String {
    MEAL_DESCRIPTION_TEMPLATE.replace(MEAL_PLACEHOLDER, meal.trim())
}

/// Build the prompt asking for advice on the rest of the day
#[must_use]
pub fn build_recommendation_prompt(goals: &NutritionGoals, consumed: &MacroTotals) -> String {
    format!(
        "Given a daily calorie goal of {} kcal, protein goal of {}g, carbs goal of {}g, \
         and fats goal of {}g, and current consumption of {} kcal, {}g protein, {}g carbs, \
         and {}g fats, provide a smart recommendation for the rest of the day.",
        goals.calories,
        goals.protein,
        goals.carbs,
        goals.fats,
        consumed.calories,
        consumed.protein,
        consumed.carbs,
        consumed.fats,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vision_prompt_mentions_sentinel() {
        assert!(get_vision_analysis_prompt().contains(r#"{ "error": "not_food" }"#));
        assert!(get_vision_analysis_prompt().contains("health_grade"));
    }

    #[test]
    fn test_meal_prompt_substitutes_description() {
        let prompt = build_meal_description_prompt("  two eggs and toast ");
        assert!(prompt.ends_with("Meal: two eggs and toast\n"));
        assert!(!prompt.contains(MEAL_PLACEHOLDER));
        assert!(prompt.contains(r#"{ "foods": ["#));
    }

    #[test]
    fn test_recommendation_prompt_includes_numbers() {
        let consumed = MacroTotals {
            calories: 850.0,
            protein: 40.0,
            carbs: 90.0,
            fats: 30.0,
        };
        let prompt = build_recommendation_prompt(&NutritionGoals::default(), &consumed);
        assert!(prompt.contains("daily calorie goal of 2000 kcal"));
        assert!(prompt.contains("current consumption of 850 kcal, 40g protein"));
    }
}
