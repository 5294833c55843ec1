use serde::{Deserialize, Serialize};

use crate::generate_content::types::{Candidate, PromptFeedback, UsageMetadata};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first non-thought part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find(|part| !part.thought.unwrap_or(false))?
            .text
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "The meaning of life is a question for the ages."}],
                    "role": "model"
                },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {
                "promptTokenCount": 9,
                "candidatesTokenCount": 11,
                "totalTokenCount": 20
            },
            "modelVersion": "gemini-2.5-flash"
        }))
        .expect("deserialize generate response");

        assert_eq!(
            response.first_text(),
            Some("The meaning of life is a question for the ages.")
        );
    }

    #[test]
    fn empty_candidates_extract_nothing() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .expect("deserialize blocked response");

        assert!(response.candidates.is_empty());
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn skips_thought_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "weighing the question", "thought": true},
                        {"text": "42"}
                    ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }))
        .expect("deserialize thinking response");

        assert_eq!(response.first_text(), Some("42"));
    }

    #[test]
    fn textless_parts_extract_nothing() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [], "role": "model"},
                "finishReason": "MAX_TOKENS"
            }]
        }))
        .expect("deserialize empty-parts response");

        assert_eq!(response.first_text(), None);
    }
}
