// ABOUTME: Main library entry point for the NutriGrade response normalization pipeline
// ABOUTME: Turns raw model answers about food into canonical, graded nutrition records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriGrade`
//!
//! Normalizes nutrition answers produced by an upstream text/vision model.
//! Model output is untrusted: it may be wrapped in markdown fences, arrive in
//! several shapes, omit fields, or skip the health grade entirely. The
//! pipeline repairs all of that and guarantees every returned record carries
//! a grade and a reason.
//!
//! ## Architecture
//!
//! - **Analysis**: fence extraction, schema normalization, pipeline
//! - **Chat**: free-form chat reply normalization
//! - **LLM**: completion-provider boundary and prompts
//! - **Analyzer**: provider plus pipeline for the photo and text paths
//! - **Journal**: meal log and profile goals
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrigrade::analysis::Pipeline;
//!
//! let foods = Pipeline::default().process(r#"{"name": "Toast"}"#)?;
//! assert_eq!(foods[0].calories, 0.0);
//! assert_eq!(foods[0].health_reason.as_deref(), Some("Balanced meal (auto-graded)"));
//! # Ok::<(), nutrigrade::analysis::MalformedPayload>(())
//! ```

/// Response normalization and grading pipeline
pub mod analysis;

/// Food analysis service over a completion provider
pub mod analyzer;

/// Text-chat reply normalization
pub mod chat;

/// Environment configuration
pub mod config;

/// Meal log and goals persistence boundary
pub mod journal;

/// Completion provider boundary and prompts
pub mod llm;

/// Tracing subscriber setup
pub mod logging;

pub use analysis::{AnalysisOutcome, MalformedPayload, PayloadShape, Pipeline};
pub use analyzer::FoodAnalyzer;
pub use nutrigrade_core::errors::{AppError, AppResult, ErrorCode};
pub use nutrigrade_core::models::{FoodItem, FoodsResponse, HealthGrade};
