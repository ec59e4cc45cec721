// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides quiet logging setup and a scripted completion provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrigrade`

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use nutrigrade::llm::{
    CompletionCapabilities, CompletionProvider, CompletionRequest, CompletionResponse,
};
use nutrigrade::{AppError, AppResult};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Provider that answers every request with a fixed reply and records prompts
pub struct ScriptedProvider {
    reply: Result<String, AppError>,
    capabilities: CompletionCapabilities,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    /// Provider answering with `reply`
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_owned()),
            capabilities: CompletionCapabilities::multimodal(),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Text-only provider answering with `reply`
    pub fn text_only(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_owned()),
            capabilities: CompletionCapabilities::text_only(),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Provider failing every request with `error`
    pub fn failing(error: AppError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            capabilities: CompletionCapabilities::multimodal(),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn capabilities(&self) -> CompletionCapabilities {
        self.capabilities
    }

    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(reply) => Ok(CompletionResponse::new(reply.clone())),
            Err(error) => Err(AppError::new(error.code, error.message.clone())),
        }
    }
}
