// ABOUTME: Orchestrates fence extraction, schema normalization, and fallback grading
// ABOUTME: Stateless and reentrant; turns raw model text into graded food records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrigrade_core::errors::AppError;
use nutrigrade_core::models::{FoodItem, FoodsResponse};
use nutrigrade_intelligence::{GradingEngine, GradingSummary};
use serde_json::Value;
use tracing::{debug, warn};

use super::extractor::{extract_candidate, has_fence};
use super::normalizer::{normalize, normalize_value, MalformedPayload, PayloadShape};

/// Outcome of one pipeline invocation: graded foods or a malformed payload
pub type NormalizationResult = Result<Vec<FoodItem>, MalformedPayload>;

/// Graded foods plus what the pipeline observed while producing them
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    /// Detected top-level payload shape
    pub shape: PayloadShape,
    /// Graded foods in upstream order
    pub foods: Vec<FoodItem>,
    /// Grading counts
    pub grading: GradingSummary,
    /// Non-object entries dropped during normalization
    pub skipped_entries: usize,
}

impl AnalysisOutcome {
    /// Upstream explicitly reported that the content holds no food
    #[must_use]
    pub fn is_not_food(&self) -> bool {
        self.shape == PayloadShape::NotFood
    }

    /// Caller-facing `{ "foods": [...] }` envelope
    #[must_use]
    pub fn into_response(self) -> FoodsResponse {
        FoodsResponse::from(self.foods)
    }
}

/// Response normalization and grading pipeline
///
/// Holds only the grading thresholds, so a single value can be shared across
/// threads and invoked concurrently on independent inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pipeline {
    grading: GradingEngine,
}

impl Pipeline {
    /// Create a pipeline with a specific grading engine
    #[must_use]
    pub const fn new(grading: GradingEngine) -> Self {
        Self { grading }
    }

    /// Turn raw model text into graded food records
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPayload`] when the extracted text is not JSON or its
    /// shape is not accepted. No partial result is produced.
    pub fn process(&self, raw_text: &str) -> NormalizationResult {
        self.analyze(raw_text).map(|outcome| outcome.foods)
    }

    /// Like [`Pipeline::process`], also reporting shape and grading counts
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPayload`] when the extracted text is not JSON or its
    /// shape is not accepted.
    pub fn analyze(&self, raw_text: &str) -> Result<AnalysisOutcome, MalformedPayload> {
        let candidate = extract_candidate(raw_text);
        debug!(
            fenced = has_fence(raw_text),
            candidate_len = candidate.len(),
            "Extracted candidate JSON"
        );

        let normalized = normalize(&candidate).inspect_err(|error| {
            warn!(%error, "Failed to normalize model response");
        })?;
        Ok(self.finish(normalized.shape, normalized.foods, normalized.skipped_entries))
    }

    /// Run normalization and grading over an already-parsed value
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPayload`] when the value's shape is not accepted.
    pub fn analyze_value(&self, value: Value) -> Result<AnalysisOutcome, MalformedPayload> {
        let normalized = normalize_value(value)?;
        Ok(self.finish(normalized.shape, normalized.foods, normalized.skipped_entries))
    }

    fn finish(
        &self,
        shape: PayloadShape,
        mut foods: Vec<FoodItem>,
        skipped_entries: usize,
    ) -> AnalysisOutcome {
        let grading = self.grading.grade_all(&mut foods);
        debug!(
            ?shape,
            foods = foods.len(),
            auto_graded = grading.auto_graded,
            skipped_entries,
            "Normalized model response"
        );
        AnalysisOutcome {
            shape,
            foods,
            grading,
            skipped_entries,
        }
    }
}

/// Run the default pipeline over raw model text
///
/// # Errors
///
/// Returns [`MalformedPayload`] when the payload cannot be normalized.
pub fn process(raw_text: &str) -> NormalizationResult {
    Pipeline::default().process(raw_text)
}

impl From<MalformedPayload> for AppError {
    fn from(error: MalformedPayload) -> Self {
        let message = error.to_string();
        Self::malformed_payload(message).with_source(error)
    }
}
