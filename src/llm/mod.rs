// ABOUTME: Boundary to the upstream text/vision completion service
// ABOUTME: Defines the CompletionProvider contract, request types, and failure mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Completion Provider Interface
//!
//! This crate never talks to a model itself. Callers supply a
//! [`CompletionProvider`] that turns a prompt (and optionally an image) into
//! raw text; the analysis pipeline takes it from there.
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use nutrigrade::llm::{CompletionProvider, CompletionRequest};
//!
//! async fn example(provider: &dyn CompletionProvider) {
//!     let request = CompletionRequest::new("Describe this meal");
//!     let response = provider.complete(&request).await;
//! }
//! ```

pub mod prompts;

pub use prompts::{
    build_meal_description_prompt, build_recommendation_prompt, get_vision_analysis_prompt,
};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use nutrigrade_core::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// Provider capability flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CompletionCapabilities: u8 {
        /// Provider accepts text prompts
        const TEXT = 0b0000_0001;
        /// Provider accepts inline images
        const VISION = 0b0000_0010;
    }
}

impl CompletionCapabilities {
    /// Text-only provider
    #[must_use]
    pub const fn text_only() -> Self {
        Self::TEXT
    }

    /// Provider accepting text and images
    #[must_use]
    pub const fn multimodal() -> Self {
        Self::TEXT.union(Self::VISION)
    }

    /// Check if image input is supported
    #[must_use]
    pub const fn supports_vision(&self) -> bool {
        self.contains(Self::VISION)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Inline image attached to a completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInput {
    /// MIME type, e.g. `image/jpeg`
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl ImageInput {
    /// Encode raw image bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Whether any image data is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Configuration for a completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Prompt text
    pub prompt: String,
    /// Optional image for vision analysis
    pub image: Option<ImageInput>,
}

impl CompletionRequest {
    /// Create a text-only request
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
        }
    }

    /// Attach an image
    #[must_use]
    pub fn with_image(mut self, image: ImageInput) -> Self {
        self.image = Some(image);
        self
    }
}

/// Raw model answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text, possibly fenced
    pub content: String,
}

impl CompletionResponse {
    /// Wrap generated text
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Upstream text/vision completion service
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Unique provider identifier
    fn name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> CompletionCapabilities;

    /// Produce raw text for the request
    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResponse>;
}

/// Map an HTTP failure from a provider into the application taxonomy
///
/// 429 becomes [`ErrorCode::ExternalRateLimited`], 5xx becomes
/// [`ErrorCode::ExternalServiceUnavailable`], anything else is an
/// [`ErrorCode::ExternalServiceError`].
#[must_use]
pub fn provider_http_error(provider: &str, status: u16, body: &str) -> AppError {
    match status {
        429 => AppError::rate_limited(provider),
        500..=599 => AppError::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{provider} returned {status}"),
        ),
        _ => AppError::external_service(provider, format!("HTTP {status}: {body}")),
    }
    .with_details(serde_json::json!({ "status": status }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_input_encodes_base64() {
        let image = ImageInput::from_bytes(b"jpeg", "image/jpeg");
        assert_eq!(image.data, "anBlZw==");
        assert!(!image.is_empty());
    }

    #[test]
    fn test_provider_http_error_mapping() {
        assert_eq!(
            provider_http_error("gemini", 429, "").code,
            ErrorCode::ExternalRateLimited
        );
        assert_eq!(
            provider_http_error("gemini", 503, "").code,
            ErrorCode::ExternalServiceUnavailable
        );
        let error = provider_http_error("gemini", 400, "bad request");
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert!(error.message.contains("bad request"));
    }
}
