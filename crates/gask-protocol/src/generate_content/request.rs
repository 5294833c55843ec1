use serde::{Deserialize, Serialize};

use crate::generate_content::types::{Content, GenerationConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentPath {
    /// Format: models/{model}. The bare model name is also accepted.
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequestBody {
    /// Required. The content sent to the model.
    pub contents: Vec<Content>,
    /// System instruction (text-only Content).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone)]
pub struct GenerateContentRequest {
    pub path: GenerateContentPath,
    pub body: GenerateContentRequestBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_prompt_and_generation_config() {
        let body = GenerateContentRequestBody {
            contents: vec![Content::text("Hi, what is the meaning of life?")],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                top_p: Some(0.95),
                top_k: Some(40),
                max_output_tokens: Some(1024),
            }),
        };

        let value = serde_json::to_value(&body).expect("serialize generate request body");
        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            "Hi, what is the meaning of life?"
        );
        assert_eq!(value["generationConfig"]["temperature"], 0.7);
        assert_eq!(value["generationConfig"]["topP"], 0.95);
        assert_eq!(value["generationConfig"]["topK"], 40);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn omits_absent_optional_fields() {
        let body = GenerateContentRequestBody {
            contents: vec![Content::text("hello")],
            system_instruction: None,
            generation_config: None,
        };

        let value = serde_json::to_value(&body).expect("serialize generate request body");
        let object = value.as_object().expect("body is an object");
        assert!(!object.contains_key("systemInstruction"));
        assert!(!object.contains_key("generationConfig"));
        let part = value["contents"][0]["parts"][0]
            .as_object()
            .expect("part is an object");
        assert!(!part.contains_key("thought"));
        assert!(
            !value["contents"][0]
                .as_object()
                .expect("content is an object")
                .contains_key("role")
        );
    }
}
