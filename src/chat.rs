// ABOUTME: Normalizes free-form text-chat replies from the upstream model
// ABOUTME: Replies that parse as JSON become structured values, anything else stays text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Chat Replies
//!
//! Unlike the analysis paths, a chat reply is usually prose. Fences are only
//! stripped when the reply opens with a ```` ```json ```` marker; the result
//! is kept as structured output when it parses as JSON and as text otherwise.

use std::borrow::Cow;

use nutrigrade_core::constants::fences;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::analysis::{extract_candidate, PayloadShape, Pipeline};

/// A normalized chat reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatReply {
    /// Reply carried JSON
    Structured(Value),
    /// Plain text reply
    Text(String),
}

impl ChatReply {
    /// Whether the reply carried JSON
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

/// Caller-facing chat envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Structured value or reply text
    #[serde(rename = "responseText")]
    pub response_text: ChatReply,
}

impl From<ChatReply> for ChatResponse {
    fn from(response_text: ChatReply) -> Self {
        Self { response_text }
    }
}

/// Normalize a raw chat reply without grading
#[must_use]
pub fn normalize_chat_reply(raw_text: &str) -> ChatReply {
    let candidate = if raw_text.starts_with(fences::JSON_FENCE) {
        extract_candidate(raw_text)
    } else {
        Cow::Borrowed(raw_text)
    };

    match serde_json::from_str::<Value>(&candidate) {
        Ok(value) => ChatReply::Structured(value),
        Err(error) => {
            debug!(%error, "Chat reply is not JSON, returning text");
            ChatReply::Text(candidate.into_owned())
        }
    }
}

/// Chat reply normalizer with optional grading of food lists
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChatNormalizer {
    pipeline: Pipeline,
    grade_food_replies: bool,
}

impl ChatNormalizer {
    /// Create a normalizer
    #[must_use]
    pub const fn new(pipeline: Pipeline, grade_food_replies: bool) -> Self {
        Self {
            pipeline,
            grade_food_replies,
        }
    }

    /// Whether food-bearing replies are graded
    #[must_use]
    pub const fn grades_food_replies(&self) -> bool {
        self.grade_food_replies
    }

    /// Normalize a reply, grading it when it is a food list and grading is on
    ///
    /// Structured replies that are not food-bearing are returned untouched.
    #[must_use]
    pub fn normalize(&self, raw_text: &str) -> ChatResponse {
        let reply = normalize_chat_reply(raw_text);
        if !self.grade_food_replies {
            return reply.into();
        }

        match reply {
            ChatReply::Structured(value) => self.grade_structured(value).into(),
            text @ ChatReply::Text(_) => text.into(),
        }
    }

    fn grade_structured(&self, value: Value) -> ChatReply {
        match self.pipeline.analyze_value(value.clone()) {
            Ok(outcome) if outcome.shape != PayloadShape::NotFood => {
                debug!(
                    shape = ?outcome.shape,
                    auto_graded = outcome.grading.auto_graded,
                    "Graded food list in chat reply"
                );
                serde_json::to_value(outcome.into_response())
                    .map_or(ChatReply::Structured(value), ChatReply::Structured)
            }
            _ => ChatReply::Structured(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prose_passes_through() {
        let reply = normalize_chat_reply("Try adding more greens to dinner.");
        assert_eq!(
            reply,
            ChatReply::Text("Try adding more greens to dinner.".to_owned())
        );
    }

    #[test]
    fn test_bare_json_is_structured() {
        let reply = normalize_chat_reply(r#"{"tip": "drink water"}"#);
        assert_eq!(reply, ChatReply::Structured(json!({"tip": "drink water"})));
    }

    #[test]
    fn test_fenced_json_is_structured() {
        let reply = normalize_chat_reply("```json\n{\"tip\": \"drink water\"}\n```");
        assert_eq!(reply, ChatReply::Structured(json!({"tip": "drink water"})));
    }
}
