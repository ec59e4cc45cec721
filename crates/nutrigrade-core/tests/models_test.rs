// ABOUTME: Integration tests for the nutrition models
// ABOUTME: Tests grade parsing, FoodItem wire format, goals defaults, and macro totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use nutrigrade_core::models::{
    FoodItem, FoodsResponse, HealthGrade, MacroTotals, MealLogEntry, NutritionGoals,
};
use serde_json::json;

// ============================================================================
// HealthGrade Tests
// ============================================================================

#[test]
fn test_health_grade_parse_lenient() {
    assert_eq!(HealthGrade::parse_lenient("A"), Some(HealthGrade::A));
    assert_eq!(HealthGrade::parse_lenient(" c "), Some(HealthGrade::C));
    assert_eq!(HealthGrade::parse_lenient("f"), Some(HealthGrade::F));
    // E is not part of the vocabulary
    assert_eq!(HealthGrade::parse_lenient("E"), None);
    assert_eq!(HealthGrade::parse_lenient("B+"), None);
    assert_eq!(HealthGrade::parse_lenient(""), None);
}

#[test]
fn test_health_grade_from_str_error() {
    let err = "Z".parse::<HealthGrade>().unwrap_err();
    assert!(err.to_string().contains("'Z'"));
    assert_eq!("d".parse::<HealthGrade>().unwrap(), HealthGrade::D);
}

#[test]
fn test_health_grade_ordering() {
    assert!(HealthGrade::A < HealthGrade::B);
    assert!(HealthGrade::D < HealthGrade::F);
}

#[test]
fn test_health_grade_wire_format() {
    assert_eq!(serde_json::to_value(HealthGrade::B).unwrap(), json!("B"));
    let grade: HealthGrade = serde_json::from_value(json!("F")).unwrap();
    assert_eq!(grade, HealthGrade::F);
}

// ============================================================================
// FoodItem Tests
// ============================================================================

#[test]
fn test_food_item_new_clamps_quantities() {
    let item = FoodItem::new("Mystery", -10.0, f64::NAN, 12.5, f64::INFINITY);
    assert!(item.calories.abs() < f64::EPSILON);
    assert!(item.protein.abs() < f64::EPSILON);
    assert!((item.carbs - 12.5).abs() < f64::EPSILON);
    assert!(item.fats.abs() < f64::EPSILON);
    assert!(!item.is_graded());
}

#[test]
fn test_food_item_serialization_shape() {
    let item = FoodItem::new("Apple", 95.0, 0.5, 25.0, 0.3)
        .with_grade(HealthGrade::A, "Whole fruit");

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["name"], "Apple");
    assert_eq!(value["health_grade"], "A");
    assert_eq!(value["health_reason"], "Whole fruit");
}

#[test]
fn test_ungraded_food_item_omits_grade_fields() {
    let value = serde_json::to_value(FoodItem::new("Toast", 80.0, 3.0, 15.0, 1.0)).unwrap();
    assert!(value.get("health_grade").is_none());
    assert!(value.get("health_reason").is_none());
}

#[test]
fn test_foods_response_envelope() {
    let response = FoodsResponse::from(vec![FoodItem::new("Egg", 70.0, 6.0, 0.0, 5.0)]);
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["foods"].as_array().unwrap().len(), 1);
}

// ============================================================================
// Goals and Totals Tests
// ============================================================================

#[test]
fn test_default_goals() {
    let goals = NutritionGoals::default();
    assert!((goals.calories - 2000.0).abs() < f64::EPSILON);
    assert!((goals.protein - 150.0).abs() < f64::EPSILON);
    assert!((goals.carbs - 200.0).abs() < f64::EPSILON);
    assert!((goals.fats - 70.0).abs() < f64::EPSILON);
}

#[test]
fn test_macro_totals_and_remaining() {
    let foods = vec![
        FoodItem::new("Chicken", 200.0, 35.0, 0.0, 5.0),
        FoodItem::new("Rice", 200.0, 4.0, 45.0, 1.0),
    ];
    let totals = MacroTotals::from_foods(&foods);
    assert!((totals.calories - 400.0).abs() < f64::EPSILON);
    assert!((totals.protein - 39.0).abs() < f64::EPSILON);

    let goals = NutritionGoals {
        calories: 300.0,
        protein: 150.0,
        carbs: 200.0,
        fats: 70.0,
    };
    let remaining = totals.remaining(&goals);
    // Over the calorie goal: floored at zero
    assert!(remaining.calories.abs() < f64::EPSILON);
    assert!((remaining.protein - 111.0).abs() < f64::EPSILON);
}

#[test]
fn test_meal_log_entry_totals() {
    let entry = MealLogEntry::new(
        vec![
            FoodItem::new("Soda", 600.0, 0.0, 80.0, 0.0),
            FoodItem::new("Fries", 300.0, 3.0, 40.0, 15.0),
        ],
        Utc::now(),
    );
    let totals = entry.totals();
    assert!((totals.calories - 900.0).abs() < f64::EPSILON);
    assert!((totals.fats - 15.0).abs() < f64::EPSILON);
}
