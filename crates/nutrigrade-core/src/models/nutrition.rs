// ABOUTME: Nutrition models for graded food analysis
// ABOUTME: HealthGrade, FoodItem, MealLogEntry, NutritionGoals, and MacroTotals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::constants::goals;

/// Health grade of a food item, ordered from best (`A`) to worst (`F`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthGrade {
    /// Very healthy (vegetables, lean protein)
    A,
    /// Healthy
    B,
    /// Moderate (sandwich, pasta)
    C,
    /// Less healthy
    D,
    /// Unhealthy (soda, candy, fried food)
    F,
}

impl HealthGrade {
    /// Single-letter wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Human-readable meaning of the grade
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Very healthy",
            Self::B => "Healthy",
            Self::C => "Moderate",
            Self::D => "Less healthy",
            Self::F => "Unhealthy",
        }
    }

    /// Parse a grade symbol leniently
    ///
    /// Accepts one letter of the closed vocabulary in either case, ignoring
    /// surrounding whitespace. Anything else yields `None`.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            "D" | "d" => Some(Self::D),
            "F" | "f" => Some(Self::F),
            _ => None,
        }
    }
}

impl fmt::Display for HealthGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a grade symbol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a health grade (expected one of A, B, C, D, F)")]
pub struct InvalidHealthGrade(pub String);

impl FromStr for HealthGrade {
    type Err = InvalidHealthGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| InvalidHealthGrade(s.to_owned()))
    }
}

/// A single structured nutrition record
///
/// Numeric quantities are never negative. `health_grade` and `health_reason`
/// are optional while a record is being normalized and always populated once
/// it has been graded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    #[serde(default)]
    pub name: String,
    /// Calories
    #[serde(default)]
    pub calories: f64,
    /// Protein (grams)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates (grams)
    #[serde(default)]
    pub carbs: f64,
    /// Fats (grams)
    #[serde(default)]
    pub fats: f64,
    /// Health grade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_grade: Option<HealthGrade>,
    /// Short rationale for the grade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_reason: Option<String>,
}

impl FoodItem {
    /// Create an ungraded item with the given macros
    ///
    /// Negative or non-finite quantities are stored as zero.
    #[must_use]
    pub fn new(name: impl Into<String>, calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            name: name.into(),
            calories: non_negative(calories),
            protein: non_negative(protein),
            carbs: non_negative(carbs),
            fats: non_negative(fats),
            health_grade: None,
            health_reason: None,
        }
    }

    /// Attach a grade and rationale
    #[must_use]
    pub fn with_grade(mut self, grade: HealthGrade, reason: impl Into<String>) -> Self {
        self.health_grade = Some(grade);
        self.health_reason = Some(reason.into());
        self
    }

    /// Whether both grade and rationale are present
    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.health_grade.is_some() && self.health_reason.is_some()
    }
}

/// Clamp a quantity into the valid non-negative range
#[must_use]
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Caller-facing envelope for an analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodsResponse {
    /// Graded foods, in upstream order
    pub foods: Vec<FoodItem>,
}

impl From<Vec<FoodItem>> for FoodsResponse {
    fn from(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }
}

/// One logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLogEntry {
    /// Unique identifier for this entry
    pub id: Uuid,
    /// When the meal was logged
    pub timestamp: DateTime<Utc>,
    /// Foods in the meal
    pub foods: Vec<FoodItem>,
}

impl MealLogEntry {
    /// Stamp a list of foods as a new log entry
    #[must_use]
    pub fn new(foods: Vec<FoodItem>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            foods,
        }
    }

    /// Summed macros of the meal
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        MacroTotals::from_foods(&self.foods)
    }
}

/// Daily nutrition goals stored in the user profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    /// Daily calories
    pub calories: f64,
    /// Daily protein (grams)
    pub protein: f64,
    /// Daily carbohydrates (grams)
    pub carbs: f64,
    /// Daily fats (grams)
    pub fats: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: goals::DEFAULT_CALORIES,
            protein: goals::DEFAULT_PROTEIN,
            carbs: goals::DEFAULT_CARBS,
            fats: goals::DEFAULT_FATS,
        }
    }
}

/// Summed macros over a set of foods
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Total calories
    pub calories: f64,
    /// Total protein (grams)
    pub protein: f64,
    /// Total carbohydrates (grams)
    pub carbs: f64,
    /// Total fats (grams)
    pub fats: f64,
}

impl MacroTotals {
    /// Sum the macros of the given foods
    #[must_use]
    pub fn from_foods<'a>(foods: impl IntoIterator<Item = &'a FoodItem>) -> Self {
        foods.into_iter().fold(Self::default(), |mut acc, food| {
            acc.calories += food.calories;
            acc.protein += food.protein;
            acc.carbs += food.carbs;
            acc.fats += food.fats;
            acc
        })
    }

    /// Add another total into this one
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
        }
    }

    /// What is left of the goals after these totals, floored at zero
    #[must_use]
    pub fn remaining(&self, goals: &NutritionGoals) -> Self {
        Self {
            calories: (goals.calories - self.calories).max(0.0),
            protein: (goals.protein - self.protein).max(0.0),
            carbs: (goals.carbs - self.carbs).max(0.0),
            fats: (goals.fats - self.fats).max(0.0),
        }
    }
}
