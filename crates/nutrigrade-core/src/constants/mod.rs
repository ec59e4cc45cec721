// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Wire-format keys, grading vocabulary text, and profile defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Keys and markers of the JSON payloads produced by the upstream model
pub mod payload {
    /// Member carrying the "not a valid subject" marker
    pub const SENTINEL_KEY: &str = "error";
    /// Sentinel value meaning no food was detected
    pub const NOT_FOOD: &str = "not_food";
    /// Wrapper member holding the food list (text entry point shape)
    pub const FOODS_KEY: &str = "foods";

    /// Food item member names
    pub const NAME: &str = "name";
    /// Calories member
    pub const CALORIES: &str = "calories";
    /// Protein member (grams)
    pub const PROTEIN: &str = "protein";
    /// Carbohydrates member (grams)
    pub const CARBS: &str = "carbs";
    /// Fats member (grams)
    pub const FATS: &str = "fats";
    /// Health grade member
    pub const HEALTH_GRADE: &str = "health_grade";
    /// Health grade rationale member
    pub const HEALTH_REASON: &str = "health_reason";

    /// Every member that marks an object as a single food item
    pub const FOOD_FIELDS: &[&str] = &[
        NAME,
        CALORIES,
        PROTEIN,
        CARBS,
        FATS,
        HEALTH_GRADE,
        HEALTH_REASON,
    ];
}

/// Markdown fence markers that wrap JSON in model output
pub mod fences {
    /// Fence opener annotated with the JSON language tag
    pub const JSON_FENCE: &str = "```json";
    /// Bare fence marker
    pub const FENCE: &str = "```";
}

/// Rationale text attached by the fallback grader
pub mod auto_grade {
    /// Reason for grade D
    pub const HIGH_CALORIE_DENSITY: &str = "High calorie density (auto-graded)";
    /// Reason for grade A
    pub const HIGH_PROTEIN_SOURCE: &str = "High protein source (auto-graded)";
    /// Reason for grade B
    pub const BALANCED_MEAL: &str = "Balanced meal (auto-graded)";

    /// Calories above which an item is graded D
    pub const CALORIE_CEILING: f64 = 500.0;
    /// Carbs above which a low-protein item is graded D
    pub const CARB_CEILING: f64 = 50.0;
    /// Protein below which the carb ceiling applies
    pub const LOW_PROTEIN_FLOOR: f64 = 5.0;
    /// Protein above which an item is graded A
    pub const HIGH_PROTEIN_FLOOR: f64 = 20.0;
}

/// Profile goal defaults used when no profile has been stored
pub mod goals {
    /// Daily calories
    pub const DEFAULT_CALORIES: f64 = 2000.0;
    /// Daily protein (grams)
    pub const DEFAULT_PROTEIN: f64 = 150.0;
    /// Daily carbohydrates (grams)
    pub const DEFAULT_CARBS: f64 = 200.0;
    /// Daily fats (grams)
    pub const DEFAULT_FATS: f64 = 70.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const NUTRIGRADE: &str = "nutrigrade";
}
