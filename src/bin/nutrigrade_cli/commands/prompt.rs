// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Prompt command for nutrigrade-cli
// ABOUTME: Prints the vision, meal description, and recommendation prompts

use anyhow::{bail, Result};
use nutrigrade::config::AnalysisConfig;
use nutrigrade::llm::{
    build_meal_description_prompt, build_recommendation_prompt, get_vision_analysis_prompt,
};
use nutrigrade_core::models::MacroTotals;

/// Print the food photo prompt
pub fn vision() {
    print!("{}", get_vision_analysis_prompt());
}

/// Print the prompt for a typed meal
pub fn meal(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        bail!("Meal description is empty");
    }
    print!("{}", build_meal_description_prompt(description));
    Ok(())
}

/// Print the recommendation prompt for what was consumed so far
pub fn recommend(config: &AnalysisConfig, calories: f64, protein: f64, carbs: f64, fats: f64) {
    let consumed = MacroTotals {
        calories,
        protein,
        carbs,
        fats,
    };
    println!(
        "{}",
        build_recommendation_prompt(&config.default_goals, &consumed)
    );
}
