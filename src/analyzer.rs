// ABOUTME: Food analysis service composing a completion provider with the grading pipeline
// ABOUTME: Handles the photo path, the typed meal description path, and text chat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Analyzer
//!
//! Asks the upstream service for an answer, then hands the raw text to the
//! [`Pipeline`]. Every call gets a request id that is attached to its tracing
//! span and to any error it returns.

use std::sync::Arc;

use nutrigrade_core::errors::{AppError, AppResult};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::{AnalysisOutcome, Pipeline};
use crate::chat::{ChatNormalizer, ChatResponse};
use crate::llm::{
    build_meal_description_prompt, get_vision_analysis_prompt, CompletionProvider,
    CompletionRequest, ImageInput,
};

/// Food analysis service
#[derive(Clone)]
pub struct FoodAnalyzer {
    provider: Arc<dyn CompletionProvider>,
    pipeline: Pipeline,
    chat: ChatNormalizer,
}

impl FoodAnalyzer {
    /// Create an analyzer using the given provider and pipeline
    #[must_use]
    pub fn new(provider: Arc<dyn CompletionProvider>, pipeline: Pipeline) -> Self {
        Self {
            provider,
            pipeline,
            chat: ChatNormalizer::new(pipeline, false),
        }
    }

    /// Replace the chat normalizer
    #[must_use]
    pub const fn with_chat_normalizer(mut self, chat: ChatNormalizer) -> Self {
        self.chat = chat;
        self
    }

    /// Analyze a food photo
    ///
    /// # Errors
    ///
    /// Returns an error if the provider lacks vision support, the image is
    /// empty, the provider fails, or its answer cannot be normalized.
    pub async fn analyze_image(&self, image: ImageInput) -> AppResult<AnalysisOutcome> {
        let request_id = Uuid::new_v4().to_string();
        if !self.provider.capabilities().supports_vision() {
            return Err(AppError::invalid_input(format!(
                "Provider {} does not support image analysis",
                self.provider.name()
            ))
            .with_request_id(request_id));
        }
        if image.is_empty() {
            return Err(AppError::invalid_input("Image data is empty").with_request_id(request_id));
        }

        let request = CompletionRequest::new(get_vision_analysis_prompt()).with_image(image);
        let span = info_span!("analyze_image", %request_id, provider = self.provider.name());
        self.run(&request, request_id).instrument(span).await
    }

    /// Analyze a typed meal description
    ///
    /// # Errors
    ///
    /// Returns an error if the description is blank, the provider fails, or
    /// its answer cannot be normalized.
    pub async fn analyze_description(&self, meal: &str) -> AppResult<AnalysisOutcome> {
        let request_id = Uuid::new_v4().to_string();
        if meal.trim().is_empty() {
            return Err(
                AppError::invalid_input("Meal description is empty").with_request_id(request_id)
            );
        }

        let request = CompletionRequest::new(build_meal_description_prompt(meal));
        let span = info_span!("analyze_description", %request_id, provider = self.provider.name());
        self.run(&request, request_id).instrument(span).await
    }

    /// Send a free-form chat message and normalize the reply
    ///
    /// # Errors
    ///
    /// Returns an error if the message is blank or the provider fails.
    pub async fn chat(&self, message: &str) -> AppResult<ChatResponse> {
        let request_id = Uuid::new_v4().to_string();
        if message.trim().is_empty() {
            return Err(AppError::invalid_input("Message is empty").with_request_id(request_id));
        }

        let span = info_span!("chat", %request_id, provider = self.provider.name());
        async {
            let response = self
                .provider
                .complete(&CompletionRequest::new(message))
                .await
                .map_err(|error| error.with_request_id(request_id.clone()))?;
            Ok::<_, AppError>(self.chat.normalize(&response.content))
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        request: &CompletionRequest,
        request_id: String,
    ) -> AppResult<AnalysisOutcome> {
        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|error| error.with_request_id(request_id.clone()))?;

        let outcome = self
            .pipeline
            .analyze(&response.content)
            .map_err(|error| AppError::from(error).with_request_id(request_id))?;

        info!(
            shape = ?outcome.shape,
            foods = outcome.foods.len(),
            auto_graded = outcome.grading.auto_graded,
            "Food analysis completed"
        );
        Ok(outcome)
    }
}
