// ABOUTME: Application error taxonomy for the NutriGrade workspace
// ABOUTME: Error codes with HTTP mapping, AppError with context, and the ErrorResponse body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Errors
//!
//! Domain errors (a malformed model payload, a bad configuration value)
//! convert into [`AppError`], whose [`ErrorCode`] decides the HTTP status
//! and the user-facing message of an [`ErrorResponse`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Caller (3000-3499)
    /// Request was rejected before reaching the upstream model
    InvalidInput = 3000,

    // Model output (3500-3599)
    /// Upstream model output could not be turned into food records
    MalformedPayload = 3500,

    // Upstream (5000-5099)
    /// Completion service answered with an error
    ExternalServiceError = 5000,
    /// Completion service failed on its side
    ExternalServiceUnavailable = 5001,
    /// Completion service is throttling requests
    ExternalRateLimited = 5003,

    // Configuration (6000-6099)
    /// A configuration value failed to parse or validate
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// HTTP status a transport layer should answer with
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ExternalRateLimited => 429,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable => 502,
            Self::MalformedPayload | Self::ConfigInvalid => 500,
        }
    }

    /// Message shown to the end user
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid request",
            Self::MalformedPayload => "Failed to parse AI response",
            Self::ExternalServiceError => "AI service returned an error",
            Self::ExternalServiceUnavailable => "AI service is unavailable",
            Self::ExternalRateLimited => "Rate Limit Reached",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Correlation data carried by an error
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Id of the analysis request that failed
    pub request_id: Option<String>,
    /// Free-form diagnostic data
    pub details: serde_json::Value,
}

/// Application error
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// What went wrong
    pub code: ErrorCode,
    /// Diagnostic message
    pub message: String,
    /// Correlation data
    pub context: ErrorContext,
    /// Underlying cause
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create an error with empty context
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Tag the error with the id of the request that produced it
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Attach diagnostic data
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status for this error's code
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Rejected request
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Model output that cannot be normalized
    #[must_use]
    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedPayload, message)
    }

    /// Error reported by a completion provider
    #[must_use]
    pub fn external_service(provider: &str, message: impl AsRef<str>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{provider}: {}", message.as_ref()),
        )
    }

    /// Completion provider is throttling requests
    #[must_use]
    pub fn rate_limited(provider: &str) -> Self {
        Self::new(
            ErrorCode::ExternalRateLimited,
            format!("{provider} rate limit reached"),
        )
    }
}

/// Convenience alias
pub type AppResult<T> = Result<T, AppError>;

/// Body a transport layer sends for a failed request
///
/// ```json
/// { "error": "Failed to parse AI response",
///   "details": { "code": "MALFORMED_PAYLOAD", "message": "..." } }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing message
    pub error: String,
    /// Machine-readable part
    pub details: ErrorResponseDetails,
}

/// Machine-readable part of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Diagnostic message
    pub message: String,
    /// Failed request id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Diagnostic data
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub context: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let AppError {
            code,
            message,
            context,
            ..
        } = error;
        Self {
            error: code.description().to_owned(),
            details: ErrorResponseDetails {
                code,
                message,
                request_id: context.request_id,
                context: context.details,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::MalformedPayload.http_status(), 500);
        assert_eq!(ErrorCode::ExternalRateLimited.http_status(), 429);
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ExternalServiceUnavailable.http_status(), 502);
    }

    #[test]
    fn test_display_uses_description() {
        let error = AppError::malformed_payload("not json").with_request_id("req-123");
        assert_eq!(error.to_string(), "Failed to parse AI response: not json");
        assert_eq!(error.context.request_id.as_deref(), Some("req-123"));
    }

    #[test]
    fn test_error_response_body() {
        let response = ErrorResponse::from(AppError::rate_limited("gemini"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "error": "Rate Limit Reached",
                "details": {
                    "code": "EXTERNAL_RATE_LIMITED",
                    "message": "gemini rate limit reached"
                }
            })
        );
    }
}
