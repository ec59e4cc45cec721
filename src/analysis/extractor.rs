// ABOUTME: Strips Markdown code fences from raw model output
// ABOUTME: Produces the candidate JSON text handed to the schema normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::borrow::Cow;

use nutrigrade_core::constants::fences::FENCE;

/// Produce the candidate JSON text from raw model output
///
/// When the text contains a fence marker, every marker is removed and the
/// remainder is trimmed. Markers alternate between opening and closing; a
/// language tag written directly after an opening marker (` ```json `,
/// ` ```JSON `) goes with it, while text after a closing marker is kept.
/// Text without fences is only trimmed.
/// Never fails: an empty or unparseable candidate is the normalizer's concern.
#[must_use]
pub fn extract_candidate(raw: &str) -> Cow<'_, str> {
    if !raw.contains(FENCE) {
        return Cow::Borrowed(raw.trim());
    }

    let mut stripped = String::with_capacity(raw.len());
    let mut rest = raw;
    let mut opening = true;
    while let Some(index) = rest.find(FENCE) {
        stripped.push_str(&rest[..index]);
        let after_marker = &rest[index + FENCE.len()..];
        rest = if opening {
            after_marker.trim_start_matches(is_language_tag_char)
        } else {
            after_marker
        };
        opening = !opening;
    }
    stripped.push_str(rest);

    Cow::Owned(stripped.trim().to_owned())
}

/// Whether the text contains at least one fence marker
#[must_use]
pub fn has_fence(raw: &str) -> bool {
    raw.contains(FENCE)
}

fn is_language_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_text_is_trimmed_and_borrowed() {
        let candidate = extract_candidate("  [1, 2]\n");
        assert!(matches!(candidate, Cow::Borrowed("[1, 2]")));
    }

    #[test]
    fn test_json_fence_is_removed() {
        let raw = "```json\n[{\"name\": \"Apple\"}]\n```";
        assert_eq!(extract_candidate(raw), "[{\"name\": \"Apple\"}]");
    }

    #[test]
    fn test_bare_fence_and_other_tags_are_removed() {
        assert_eq!(extract_candidate("```\n{}\n```"), "{}");
        assert_eq!(extract_candidate("```JSON\n{}\n```"), "{}");
    }

    #[test]
    fn test_fence_followed_by_json_keeps_payload() {
        // Tag stripping stops at the first non-tag character
        assert_eq!(extract_candidate("```{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(extract_candidate("```[1]```"), "[1]");
    }

    #[test]
    fn test_text_after_closing_fence_is_kept() {
        assert_eq!(extract_candidate("```json\n[]\n```Enjoy"), "[]\nEnjoy");
        assert_eq!(
            extract_candidate("```json\n{}\n```\n```json\n[]\n```ok"),
            "{}\n\n\n[]\nok"
        );
    }

    #[test]
    fn test_unterminated_fence() {
        assert_eq!(extract_candidate("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_prose_outside_fence_is_kept() {
        let candidate = extract_candidate("Here you go:\n```json\n[]\n```");
        assert_eq!(candidate, "Here you go:\n\n[]");
    }
}
