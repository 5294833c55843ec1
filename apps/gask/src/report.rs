use gask_protocol::GenerateContentResponse;
use serde_json::Value;

pub(crate) const CANNOT_EXTRACT: &str = "error: cannot extract content from response";

pub(crate) fn render_reply(response: &GenerateContentResponse) -> String {
    match response.first_text() {
        Some(text) => text.to_string(),
        None => CANNOT_EXTRACT.to_string(),
    }
}

pub(crate) fn render_api_error(status: u16, body: &Value) -> String {
    let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    format!("API error (status {status}):\n{pretty}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_response() -> GenerateContentResponse {
        serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "Life has whatever meaning you give it."}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }))
        .expect("deserialize success response")
    }

    #[test]
    fn renders_reply_text_exactly() {
        let response = success_response();
        assert_eq!(
            render_reply(&response),
            "Life has whatever meaning you give it."
        );
    }

    #[test]
    fn rendering_is_byte_identical_across_runs() {
        let response = success_response();
        assert_eq!(render_reply(&response), render_reply(&response));
    }

    #[test]
    fn empty_candidates_render_extraction_diagnostic() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).expect("deserialize empty response");
        assert_eq!(render_reply(&response), CANNOT_EXTRACT);
    }

    #[test]
    fn api_error_renders_pretty_body() {
        let body = serde_json::json!({
            "error": {
                "code": 400,
                "message": "API key not valid.",
                "status": "INVALID_ARGUMENT"
            }
        });
        let rendered = render_api_error(400, &body);
        assert!(rendered.starts_with("API error (status 400):\n"));
        assert!(rendered.contains("\"message\": \"API key not valid.\""));
    }
}
