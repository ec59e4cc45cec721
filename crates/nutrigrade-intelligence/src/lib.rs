// ABOUTME: Health grading intelligence for NutriGrade food records
// ABOUTME: Exposes the ordered fallback rule list and its thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriGrade` Intelligence
//!
//! Deterministic grading applied to food records whose upstream source
//! omitted a health grade. A source-provided grade always wins.

/// Ordered fallback grading rules
pub mod grading;

pub use grading::{GradeOutcome, GradeRule, GradingEngine, GradingSummary, GradingThresholds};
