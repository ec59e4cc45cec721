// ABOUTME: Response normalization and grading pipeline for model-generated nutrition answers
// ABOUTME: Extractor, schema normalizer, and pipeline orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analysis Pipeline
//!
//! Data flows strictly one way:
//!
//! ```text
//! raw text ──► extractor ──► normalizer ──► grading ──► Vec<FoodItem>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nutrigrade::analysis::Pipeline;
//!
//! let raw = "```json\n[{\"name\": \"Chicken\", \"calories\": 200, \"protein\": 35}]\n```";
//! let foods = Pipeline::default().process(raw)?;
//! assert_eq!(foods[0].health_grade.map(|g| g.as_str()), Some("A"));
//! # Ok::<(), nutrigrade::analysis::MalformedPayload>(())
//! ```

/// Fence stripping
pub mod extractor;
/// Shape detection and per-item coercion
pub mod normalizer;
/// Stage orchestration
pub mod pipeline;

pub use extractor::extract_candidate;
pub use normalizer::{
    food_from_object, normalize, normalize_value, MalformedPayload, NormalizedPayload,
    PayloadShape,
};
pub use pipeline::{process, AnalysisOutcome, NormalizationResult, Pipeline};
