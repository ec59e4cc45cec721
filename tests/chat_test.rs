// ABOUTME: Integration tests for text-chat reply normalization
// ABOUTME: Verifies JSON detection, fence stripping, text fallback, and optional food grading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrigrade::chat::{normalize_chat_reply, ChatNormalizer, ChatReply, ChatResponse};
use nutrigrade::Pipeline;
use serde_json::json;

const FENCED_FOODS: &str =
    "```json\n{\"foods\": [{\"name\": \"Soda\", \"calories\": 600, \"carbs\": 80}]}\n```";

#[test]
fn test_prose_reply_is_verbatim() {
    let raw = "  You are 300 kcal under your goal.\n";
    assert_eq!(normalize_chat_reply(raw), ChatReply::Text(raw.to_owned()));
}

#[test]
fn test_fenced_json_reply_is_structured() {
    let reply = normalize_chat_reply("```json\n{\"tip\": \"eat more fiber\"}\n```");
    assert_eq!(reply, ChatReply::Structured(json!({"tip": "eat more fiber"})));
}

#[test]
fn test_unfenced_json_reply_is_structured() {
    let reply = normalize_chat_reply(r#"{"calories": 1800, "note": "on track"}"#);
    assert_eq!(
        reply,
        ChatReply::Structured(json!({"calories": 1800, "note": "on track"}))
    );
}

#[test]
fn test_fence_must_open_the_reply() {
    let raw = "\n  ```json\n[1, 2]\n```";
    assert_eq!(normalize_chat_reply(raw), ChatReply::Text(raw.to_owned()));
}

#[test]
fn test_broken_fenced_json_falls_back_to_stripped_text() {
    let reply = normalize_chat_reply("```json\nnot json\n```");
    assert_eq!(reply, ChatReply::Text("not json".to_owned()));

    let reply = normalize_chat_reply("```json\n{\"tip\": oops}\n```");
    assert_eq!(reply, ChatReply::Text("{\"tip\": oops}".to_owned()));
}

#[test]
fn test_plain_fence_is_not_parsed() {
    let raw = "```\n{\"tip\": \"water\"}\n```";
    assert!(!normalize_chat_reply(raw).is_structured());
}

#[test]
fn test_response_envelope_serialization() {
    let text = ChatResponse::from(ChatReply::Text("hello".to_owned()));
    assert_eq!(
        serde_json::to_value(&text).unwrap(),
        json!({"responseText": "hello"})
    );

    let structured = ChatResponse::from(ChatReply::Structured(json!({"a": 1})));
    assert_eq!(
        serde_json::to_value(&structured).unwrap(),
        json!({"responseText": {"a": 1}})
    );
}

#[test]
fn test_food_replies_untouched_when_grading_disabled() {
    let response = ChatNormalizer::default().normalize(FENCED_FOODS);
    let foods = &serde_json::to_value(&response).unwrap()["responseText"]["foods"];
    assert_eq!(foods[0]["name"], "Soda");
    assert!(foods[0].get("health_grade").is_none());
}

#[test]
fn test_food_replies_graded_when_enabled() {
    let normalizer = ChatNormalizer::new(Pipeline::default(), true);
    assert!(normalizer.grades_food_replies());

    let response = normalizer.normalize(FENCED_FOODS);
    let value = serde_json::to_value(&response).unwrap();
    let soda = &value["responseText"]["foods"][0];
    assert_eq!(soda["health_grade"], "D");
    assert_eq!(soda["health_reason"], "High calorie density (auto-graded)");
    assert_eq!(soda["protein"], 0.0);
}

#[test]
fn test_unfenced_food_reply_graded_when_enabled() {
    let normalizer = ChatNormalizer::new(Pipeline::default(), true);
    let response = normalizer.normalize(r#"[{"name": "Lentil soup", "protein": 25}]"#);
    let value = serde_json::to_value(&response).unwrap();
    let soup = &value["responseText"]["foods"][0];
    assert_eq!(soup["health_grade"], "A");
    assert_eq!(soup["health_reason"], "High protein source (auto-graded)");
}

#[test]
fn test_non_food_json_untouched_when_grading_enabled() {
    let normalizer = ChatNormalizer::new(Pipeline::default(), true);
    let response = normalizer.normalize("```json\n{\"tip\": \"walk after dinner\"}\n```");
    assert_eq!(
        response.response_text,
        ChatReply::Structured(json!({"tip": "walk after dinner"}))
    );

    let sentinel = normalizer.normalize("```json\n{\"error\": \"not_food\"}\n```");
    assert_eq!(
        sentinel.response_text,
        ChatReply::Structured(json!({"error": "not_food"}))
    );
}
