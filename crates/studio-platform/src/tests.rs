#[cfg(test)]
mod tests {
    use crate::llm::gemini::*;
    use studio_core::ports::ImagePayload;
    use studio_types::config::ModelConfig;
    use studio_types::message::{Role, Turn, TurnStatus};

    fn config() -> ModelConfig {
        ModelConfig {
            api_key: "test-key".to_string(),
            ..ModelConfig::default()
        }
    }

    // ─── Request body tests ──────────────────────────────────

    #[test]
    fn test_chat_body_appends_new_message_after_history() {
        let history = vec![Turn::user("hi"), Turn::assistant("hello")];
        let body = build_chat_body(&config(), &history, "how are you?");

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "how are you?");
    }

    #[test]
    fn test_chat_body_uses_wire_roles() {
        let history = vec![Turn::assistant("previous reply")];
        let body = build_chat_body(&config(), &history, "next");

        // assistant turns go back out as "model", never "assistant"
        assert_eq!(body["contents"][0]["role"], "model");
    }

    #[test]
    fn test_chat_body_carries_generation_config() {
        let body = build_chat_body(&config(), &[], "hello");
        let gen = &body["generationConfig"];
        assert!(gen["temperature"].is_number());
        assert!(gen["maxOutputTokens"].is_number());
    }

    #[test]
    fn test_single_turn_body_has_one_content() {
        let body = build_chat_body(&config(), &[], "what is Rust?");
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["role"], "user");
    }

    #[test]
    fn test_caption_body_inlines_base64_image() {
        let image = ImagePayload {
            mime: "image/png".to_string(),
            bytes: vec![1, 2, 3, 4],
        };
        let body = build_caption_body(&config(), "write a short caption for this image", &image);

        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["text"], "write a short caption for this image");
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/png");
        // base64 of [1,2,3,4]
        assert_eq!(parts[1]["inline_data"]["data"], "AQIDBA==");
    }

    #[test]
    fn test_embed_body_shape() {
        let body = build_embed_body("text-embedding-004", "some text");
        assert_eq!(body["model"], "models/text-embedding-004");
        assert_eq!(body["content"]["parts"][0]["text"], "some text");
    }

    #[test]
    fn test_embed_body_accepts_empty_text() {
        let body = build_embed_body("text-embedding-004", "");
        assert_eq!(body["content"]["parts"][0]["text"], "");
    }

    // ─── Response parsing tests ──────────────────────────────

    fn generate_response(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_reply_translates_model_role() {
        let data = generate_response(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hi there"}]}}]}"#,
        );
        let turn = parse_reply(data).unwrap();
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.text, "Hi there");
        assert_eq!(turn.status, TurnStatus::Complete);
    }

    #[test]
    fn test_parse_reply_concatenates_parts() {
        let data = generate_response(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"world"}]}}]}"#,
        );
        let turn = parse_reply(data).unwrap();
        assert_eq!(turn.text, "Hello world");
    }

    #[test]
    fn test_parse_reply_defaults_to_model_role_when_absent() {
        let data =
            generate_response(r#"{"candidates":[{"content":{"parts":[{"text":"reply"}]}}]}"#);
        let turn = parse_reply(data).unwrap();
        assert_eq!(turn.role, Role::Assistant);
    }

    #[test]
    fn test_parse_reply_no_candidates_is_model_error() {
        let data = generate_response(r#"{"candidates":[]}"#);
        let err = parse_reply(data).unwrap_err();
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn test_parse_reply_missing_content_is_model_error() {
        let data = generate_response(r#"{"candidates":[{}]}"#);
        assert!(parse_reply(data).is_err());
    }

    #[test]
    fn test_parse_reply_tolerates_partless_content() {
        let data = generate_response(r#"{"candidates":[{"content":{"role":"model"}}]}"#);
        let turn = parse_reply(data).unwrap();
        assert_eq!(turn.text, "");
    }
}
