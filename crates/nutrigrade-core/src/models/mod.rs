// ABOUTME: Core data models for the NutriGrade workspace
// ABOUTME: Re-exports FoodItem, HealthGrade, and the meal log and goal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `FoodItem`: one structured nutrition record with an optional grade
//! - `HealthGrade`: the closed `A`..`F` grade vocabulary
//! - `MealLogEntry`, `NutritionGoals`, `MacroTotals`: records exchanged with
//!   the meal journal

mod nutrition;

pub use nutrition::{
    non_negative, FoodItem, FoodsResponse, HealthGrade, InvalidHealthGrade, MacroTotals,
    MealLogEntry, NutritionGoals,
};
