// ABOUTME: Environment-driven configuration for grading thresholds, chat grading, and default goals
// ABOUTME: Parses overrides through a typed helper and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for `NutriGrade`
//!
//! Everything is read from environment variables; unset variables keep their
//! defaults.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `NUTRIGRADE_GRADE_CALORIE_CEILING` | 500 |
//! | `NUTRIGRADE_GRADE_CARB_CEILING` | 50 |
//! | `NUTRIGRADE_GRADE_LOW_PROTEIN_FLOOR` | 5 |
//! | `NUTRIGRADE_GRADE_HIGH_PROTEIN_FLOOR` | 20 |
//! | `NUTRIGRADE_GRADE_CHAT_REPLIES` | false |
//! | `NUTRIGRADE_DEFAULT_GOAL_CALORIES` | 2000 |
//! | `NUTRIGRADE_DEFAULT_GOAL_PROTEIN` | 150 |
//! | `NUTRIGRADE_DEFAULT_GOAL_CARBS` | 200 |
//! | `NUTRIGRADE_DEFAULT_GOAL_FATS` | 70 |

use std::env;
use std::str::FromStr;

use nutrigrade_core::errors::{AppError, ErrorCode};
use nutrigrade_core::models::NutritionGoals;
use nutrigrade_intelligence::{GradingEngine, GradingThresholds};
use thiserror::Error;
use tracing::info;

use crate::analysis::Pipeline;
use crate::chat::ChatNormalizer;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Value parsed but is not acceptable
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}

/// Analysis configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalysisConfig {
    /// Fallback grading thresholds
    pub grading: GradingThresholds,
    /// Grade food lists found in text-chat replies
    pub grade_chat_replies: bool,
    /// Goals reported when the profile has none stored
    pub default_goals: NutritionGoals,
}

impl AnalysisConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or a value is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        info!(
            calorie_ceiling = config.grading.calorie_ceiling,
            grade_chat_replies = config.grade_chat_replies,
            "Analysis configuration loaded"
        );
        Ok(config)
    }

    /// Check that thresholds and goals are finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            (self.grading.calorie_ceiling, "Calorie ceiling must be a non-negative number"),
            (self.grading.carb_ceiling, "Carb ceiling must be a non-negative number"),
            (self.grading.low_protein_floor, "Low protein floor must be a non-negative number"),
            (self.grading.high_protein_floor, "High protein floor must be a non-negative number"),
            (self.default_goals.calories, "Calorie goal must be a non-negative number"),
            (self.default_goals.protein, "Protein goal must be a non-negative number"),
            (self.default_goals.carbs, "Carbs goal must be a non-negative number"),
            (self.default_goals.fats, "Fats goal must be a non-negative number"),
        ];

        for (value, message) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }
        Ok(())
    }

    /// Pipeline using the configured thresholds
    #[must_use]
    pub const fn pipeline(&self) -> Pipeline {
        Pipeline::new(GradingEngine::new(self.grading))
    }

    /// Chat normalizer using the configured pipeline and switch
    #[must_use]
    pub const fn chat_normalizer(&self) -> ChatNormalizer {
        ChatNormalizer::new(self.pipeline(), self.grade_chat_replies)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_flag(env_var_name: &str, target: &mut bool) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => return Err(ConfigError::Parse(format!("Invalid {env_var_name}"))),
            };
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Grading thresholds
        Self::apply_env_var(
            "NUTRIGRADE_GRADE_CALORIE_CEILING",
            &mut self.grading.calorie_ceiling,
        )?;
        Self::apply_env_var("NUTRIGRADE_GRADE_CARB_CEILING", &mut self.grading.carb_ceiling)?;
        Self::apply_env_var(
            "NUTRIGRADE_GRADE_LOW_PROTEIN_FLOOR",
            &mut self.grading.low_protein_floor,
        )?;
        Self::apply_env_var(
            "NUTRIGRADE_GRADE_HIGH_PROTEIN_FLOOR",
            &mut self.grading.high_protein_floor,
        )?;
        Self::apply_env_flag("NUTRIGRADE_GRADE_CHAT_REPLIES", &mut self.grade_chat_replies)?;

        // Default profile goals
        Self::apply_env_var(
            "NUTRIGRADE_DEFAULT_GOAL_CALORIES",
            &mut self.default_goals.calories,
        )?;
        Self::apply_env_var("NUTRIGRADE_DEFAULT_GOAL_PROTEIN", &mut self.default_goals.protein)?;
        Self::apply_env_var("NUTRIGRADE_DEFAULT_GOAL_CARBS", &mut self.default_goals.carbs)?;
        Self::apply_env_var("NUTRIGRADE_DEFAULT_GOAL_FATS", &mut self.default_goals.fats)?;

        Ok(self)
    }
}
