// ABOUTME: Coerces parsed model output into the canonical ordered list of food items
// ABOUTME: Detects the not-food sentinel and the single, array, and wrapped payload shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Schema Normalization
//!
//! Upstream models answer in one of a handful of shapes. The shape is detected
//! structurally and never trusted from a single expected schema:
//!
//! | Shape | Detected by | Result |
//! |-------|-------------|--------|
//! | `NotFood` | object with `"error": "not_food"` | empty list |
//! | `Wrapped` | object with a `foods` array | the array's items |
//! | `Single` | object with any food field | one item |
//! | `Many` | array | its items |
//!
//! Everything else is a [`MalformedPayload`]. Defects inside individual items
//! are repaired locally and never abort the batch.

use nutrigrade_core::constants::payload;
use nutrigrade_core::models::{non_negative, FoodItem, HealthGrade};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Model output that cannot be turned into food records
#[derive(Debug, Error)]
pub enum MalformedPayload {
    /// Candidate text is empty after fence stripping
    #[error("payload is empty")]
    Empty,
    /// Candidate text is not valid JSON
    #[error("payload is not valid JSON: {0}")]
    NotJson(#[from] serde_json::Error),
    /// Top-level value matches none of the accepted shapes
    #[error("unsupported payload shape: {0}")]
    UnsupportedShape(&'static str),
    /// The `foods` wrapper member is present but not an array
    #[error("`foods` member is not an array")]
    FoodsNotArray,
}

/// Accepted top-level payload shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadShape {
    /// Sentinel: no food in the source content
    NotFood,
    /// One food object
    Single,
    /// Array of food objects
    Many,
    /// Object wrapping the array under `foods`
    Wrapped,
}

/// A classified payload with its raw entries
#[derive(Debug, Clone, PartialEq)]
enum ClassifiedPayload {
    NotFood,
    Single(Map<String, Value>),
    Many(Vec<Value>),
    Wrapped(Vec<Value>),
}

impl ClassifiedPayload {
    fn classify(value: Value) -> Result<Self, MalformedPayload> {
        match value {
            Value::Array(entries) => Ok(Self::Many(entries)),
            Value::Object(object) => Self::classify_object(object),
            Value::Null => Err(MalformedPayload::UnsupportedShape("null")),
            Value::Bool(_) => Err(MalformedPayload::UnsupportedShape("boolean")),
            Value::Number(_) => Err(MalformedPayload::UnsupportedShape("number")),
            Value::String(_) => Err(MalformedPayload::UnsupportedShape("string")),
        }
    }

    fn classify_object(mut object: Map<String, Value>) -> Result<Self, MalformedPayload> {
        if is_sentinel(&object) {
            return Ok(Self::NotFood);
        }

        if let Some(foods) = object.remove(payload::FOODS_KEY) {
            return match foods {
                Value::Array(entries) => Ok(Self::Wrapped(entries)),
                _ => Err(MalformedPayload::FoodsNotArray),
            };
        }

        if payload::FOOD_FIELDS
            .iter()
            .any(|field| object.contains_key(*field))
        {
            return Ok(Self::Single(object));
        }

        Err(MalformedPayload::UnsupportedShape(
            "object without food fields",
        ))
    }

    const fn shape(&self) -> PayloadShape {
        match self {
            Self::NotFood => PayloadShape::NotFood,
            Self::Single(_) => PayloadShape::Single,
            Self::Many(_) => PayloadShape::Many,
            Self::Wrapped(_) => PayloadShape::Wrapped,
        }
    }
}

fn is_sentinel(object: &Map<String, Value>) -> bool {
    object
        .get(payload::SENTINEL_KEY)
        .and_then(Value::as_str)
        .is_some_and(|marker| marker == payload::NOT_FOOD)
}

/// Canonical result of normalization, before grading
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPayload {
    /// Detected top-level shape
    pub shape: PayloadShape,
    /// Food records in upstream order
    pub foods: Vec<FoodItem>,
    /// Entries dropped because they were not objects
    pub skipped_entries: usize,
}

/// Parse candidate JSON text and normalize it
///
/// # Errors
///
/// Returns [`MalformedPayload`] when the text is empty, is not JSON, or its
/// top-level shape is not one of the accepted forms.
pub fn normalize(candidate: &str) -> Result<NormalizedPayload, MalformedPayload> {
    if candidate.trim().is_empty() {
        return Err(MalformedPayload::Empty);
    }
    let value: Value = serde_json::from_str(candidate)?;
    normalize_value(value)
}

/// Normalize an already-parsed JSON value
///
/// # Errors
///
/// Returns [`MalformedPayload`] when the value's top-level shape is not one
/// of the accepted forms.
pub fn normalize_value(value: Value) -> Result<NormalizedPayload, MalformedPayload> {
    let classified = ClassifiedPayload::classify(value)?;
    let shape = classified.shape();

    let entries = match classified {
        ClassifiedPayload::NotFood => Vec::new(),
        ClassifiedPayload::Single(object) => vec![Value::Object(object)],
        ClassifiedPayload::Many(entries) | ClassifiedPayload::Wrapped(entries) => entries,
    };

    let total = entries.len();
    let foods: Vec<FoodItem> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Value::Object(object) => Some(food_from_object(&object)),
            other => {
                warn!(index, kind = json_kind(&other), "Skipping non-object food entry");
                None
            }
        })
        .collect();

    Ok(NormalizedPayload {
        shape,
        skipped_entries: total - foods.len(),
        foods,
    })
}

/// Build a food record from one JSON object, defaulting what is missing
#[must_use]
pub fn food_from_object(object: &Map<String, Value>) -> FoodItem {
    let name = object
        .get(payload::NAME)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();

    let mut item = FoodItem::new(
        name,
        quantity(object, payload::CALORIES),
        quantity(object, payload::PROTEIN),
        quantity(object, payload::CARBS),
        quantity(object, payload::FATS),
    );
    item.health_grade = grade(object);
    item.health_reason = object
        .get(payload::HEALTH_REASON)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|reason| !reason.is_empty())
        .map(str::to_owned);
    item
}

fn quantity(object: &Map<String, Value>, field: &str) -> f64 {
    let value = match object.get(field) {
        Some(Value::Number(number)) => number.as_f64().unwrap_or_default(),
        Some(Value::String(text)) => leading_number(text).unwrap_or_default(),
        _ => 0.0,
    };
    non_negative(value)
}

/// Parse the numeric prefix of strings such as `"35g"` or `"210 kcal"`
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let end = text
        .char_indices()
        .find(|&(index, c)| !(c.is_ascii_digit() || c == '.' || (index == 0 && c == '-')))
        .map_or(text.len(), |(index, _)| index);
    text[..end].parse().ok()
}

fn grade(object: &Map<String, Value>) -> Option<HealthGrade> {
    let raw = object.get(payload::HEALTH_GRADE)?.as_str()?;
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = HealthGrade::parse_lenient(raw);
    if parsed.is_none() {
        warn!(grade = raw, "Ignoring health grade outside the A-F vocabulary");
    }
    parsed
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("35g"), Some(35.0));
        assert_eq!(leading_number(" 210 kcal"), Some(210.0));
        assert_eq!(leading_number("12.5"), Some(12.5));
        assert_eq!(leading_number("-4"), Some(-4.0));
        assert_eq!(leading_number("about 20"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn test_sentinel_wins_over_other_members() {
        let object = json!({"error": "not_food", "name": "Cat"});
        let classified = ClassifiedPayload::classify(object).unwrap();
        assert_eq!(classified, ClassifiedPayload::NotFood);
    }

    #[test]
    fn test_other_error_markers_are_malformed() {
        let result = ClassifiedPayload::classify(json!({"error": "quota"}));
        assert!(matches!(
            result,
            Err(MalformedPayload::UnsupportedShape(_))
        ));
    }

    #[test]
    fn test_non_string_grade_is_ignored() {
        let object = json!({"name": "Egg", "health_grade": 3});
        let item = food_from_object(object.as_object().unwrap());
        assert_eq!(item.health_grade, None);
    }
}
