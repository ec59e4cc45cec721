// ABOUTME: Core types and constants for the NutriGrade analysis pipeline
// ABOUTME: Foundation crate with error handling, nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriGrade` Core
//!
//! Shared types and constants for the `NutriGrade` workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Wire-format keys, auto-grade reasons, and default goals
//! - **models**: `FoodItem`, `HealthGrade`, meal log and goal records

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Nutrition data models (`FoodItem`, `HealthGrade`, `MealLogEntry`, goals)
pub mod models;
