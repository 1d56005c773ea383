#[cfg(test)]
mod tests {
    use crate::state::*;
    use studio_types::event::StudioEvent;
    use studio_types::panel::Panel;

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert_eq!(state.active_panel, Panel::ChatBot);
        assert!(state.chat.entries.is_empty());
        assert!(state.chat.input.is_empty());
        assert!(state.caption.picked.is_none());
        assert!(state.embed.values.is_none());
        assert!(state.ask.answer.is_none());
        assert!(!state.show_settings);
        assert_eq!(state.status_text, "Ready");
        assert!(!state.is_busy());
    }

    #[test]
    fn test_push_user_entry() {
        let mut state = UiState::new();
        state.push_user_entry("hello");
        assert_eq!(state.chat.entries.len(), 1);
        assert_eq!(state.chat.entries[0].role, "user");
        assert_eq!(state.chat.entries[0].text, "hello");
        assert!(!state.chat.entries[0].failed);
    }

    #[test]
    fn test_request_start_sets_waiting() {
        let mut state = UiState::new();
        state.process_events(vec![StudioEvent::RequestStart { panel: Panel::ChatBot }]);
        assert!(state.chat.waiting);
        assert!(state.is_busy());
        assert!(state.status_text.contains("ChatBot"));
    }

    #[test]
    fn test_chat_reply_appends_assistant_entry() {
        let mut state = UiState::new();
        state.push_user_entry("Hello");
        state.process_events(vec![
            StudioEvent::RequestStart { panel: Panel::ChatBot },
            StudioEvent::ChatReply { text: "Hi there!".to_string() },
        ]);

        assert_eq!(state.chat.entries.len(), 2);
        assert_eq!(state.chat.entries[1].role, "assistant");
        assert_eq!(state.chat.entries[1].text, "Hi there!");
        assert!(!state.chat.waiting);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_chat_failed_marks_user_turn_and_shows_error() {
        let mut state = UiState::new();
        state.push_user_entry("Hello?");
        state.process_events(vec![
            StudioEvent::RequestStart { panel: Panel::ChatBot },
            StudioEvent::ChatFailed { message: "Network error: reset".to_string() },
        ]);

        // the user turn stays visible, marked; no assistant entry appears
        assert_eq!(state.chat.entries.len(), 2);
        assert_eq!(state.chat.entries[0].role, "user");
        assert!(state.chat.entries[0].failed);
        assert_eq!(state.chat.entries[1].role, "error");
        assert!(!state.chat.waiting);
        assert!(state.status_text.contains("Network error"));
    }

    #[test]
    fn test_chat_failed_marks_latest_user_turn_only() {
        let mut state = UiState::new();
        state.push_user_entry("first");
        state.process_events(vec![StudioEvent::ChatReply { text: "ok".to_string() }]);
        state.push_user_entry("second");
        state.process_events(vec![StudioEvent::ChatFailed { message: "boom".to_string() }]);

        assert!(!state.chat.entries[0].failed);
        assert!(state.chat.entries[2].failed);
    }

    #[test]
    fn test_caption_ready() {
        let mut state = UiState::new();
        state.caption.waiting = true;
        state.process_events(vec![StudioEvent::CaptionReady {
            text: "a dog on a beach".to_string(),
        }]);
        assert_eq!(state.caption.caption.as_deref(), Some("a dog on a beach"));
        assert!(state.caption.error.is_none());
        assert!(!state.caption.waiting);
    }

    #[test]
    fn test_embedding_values_stored_untransformed() {
        let mut state = UiState::new();
        let values = vec![0.123, -4.5, 0.0, 7.25];
        state.process_events(vec![StudioEvent::EmbeddingReady {
            values: values.clone(),
        }]);
        assert_eq!(state.embed.values.as_deref(), Some(values.as_slice()));
    }

    #[test]
    fn test_answer_ready() {
        let mut state = UiState::new();
        state.ask.waiting = true;
        state.process_events(vec![StudioEvent::AnswerReady {
            text: "Rust is a systems language.".to_string(),
        }]);
        assert_eq!(
            state.ask.answer.as_deref(),
            Some("Rust is a systems language.")
        );
        assert!(!state.ask.waiting);
    }

    #[test]
    fn test_request_failed_routes_to_owning_panel() {
        let mut state = UiState::new();
        state.caption.waiting = true;
        state.process_events(vec![StudioEvent::RequestFailed {
            panel: Panel::ImageCaptioning,
            message: "no image uploaded".to_string(),
        }]);

        assert_eq!(state.caption.error.as_deref(), Some("no image uploaded"));
        assert!(!state.caption.waiting);
        assert!(state.embed.error.is_none());
        assert!(state.ask.error.is_none());
    }

    #[test]
    fn test_request_failed_for_embed_panel() {
        let mut state = UiState::new();
        state.process_events(vec![StudioEvent::RequestFailed {
            panel: Panel::EmbedText,
            message: "HTTP 429: quota".to_string(),
        }]);
        assert!(state.embed.error.as_deref().unwrap().contains("429"));
    }

    // ─── Panel Router Tests ──────────────────────────────────

    #[test]
    fn test_select_panel_switches_active() {
        let mut state = UiState::new();
        state.select_panel(Panel::EmbedText);
        assert_eq!(state.active_panel, Panel::EmbedText);
    }

    #[test]
    fn test_select_panel_discards_in_progress_input() {
        let mut state = UiState::new();
        state.chat.input = "half-typed".to_string();
        state.embed.input = "some text".to_string();
        state.ask.input = "a question".to_string();

        state.select_panel(Panel::ImageCaptioning);

        assert!(state.chat.input.is_empty());
        assert!(state.embed.input.is_empty());
        assert!(state.ask.input.is_empty());
    }

    #[test]
    fn test_select_panel_keeps_chat_history() {
        let mut state = UiState::new();
        state.push_user_entry("hello");
        state.process_events(vec![StudioEvent::ChatReply { text: "hi".to_string() }]);

        state.select_panel(Panel::AskAnything);
        state.select_panel(Panel::ChatBot);

        // the history belongs to the session and survives panel switches
        assert_eq!(state.chat.entries.len(), 2);
    }

    #[test]
    fn test_select_same_panel_is_noop() {
        let mut state = UiState::new();
        state.chat.input = "typing".to_string();
        state.select_panel(Panel::ChatBot);
        assert_eq!(state.chat.input, "typing");
    }

    #[test]
    fn test_select_panel_keeps_view_with_request_in_flight() {
        let mut state = UiState::new();
        state.embed.input = "embed me".to_string();
        state.process_events(vec![StudioEvent::RequestStart { panel: Panel::EmbedText }]);

        state.select_panel(Panel::ChatBot);

        // the in-flight result still has somewhere to land
        assert!(state.embed.waiting);
        assert_eq!(state.embed.input, "embed me");
    }

    // ─── Upload staging Tests ────────────────────────────────

    #[test]
    fn test_set_picked_image_clears_previous_results() {
        let mut state = UiState::new();
        state.caption.caption = Some("old caption".to_string());
        state.caption.error = Some("old error".to_string());

        state.set_picked_image("photo.jpg".to_string(), vec![1, 2, 3]);

        let picked = state.caption.picked.as_ref().unwrap();
        assert_eq!(picked.name, "photo.jpg");
        assert_eq!(picked.bytes, vec![1, 2, 3]);
        assert!(state.caption.caption.is_none());
        assert!(state.caption.error.is_none());
        assert!(state.caption.preview.is_none());
    }

    // ─── Busy state Tests ────────────────────────────────────

    #[test]
    fn test_is_busy_tracks_any_view() {
        let mut state = UiState::new();
        assert!(!state.is_busy());

        state.caption.waiting = true;
        assert!(state.is_busy());

        state.caption.waiting = false;
        state.ask.waiting = true;
        assert!(state.is_busy());

        state.ask.waiting = false;
        assert!(!state.is_busy());
    }

    #[test]
    fn test_full_chat_lifecycle() {
        let mut state = UiState::new();

        state.push_user_entry("What is WASM?");
        state.process_events(vec![StudioEvent::RequestStart { panel: Panel::ChatBot }]);
        assert!(state.is_busy());

        state.process_events(vec![StudioEvent::ChatReply {
            text: "A portable binary format.".to_string(),
        }]);

        assert!(!state.is_busy());
        assert_eq!(state.chat.entries.len(), 2);
        assert_eq!(state.chat.entries[0].role, "user");
        assert_eq!(state.chat.entries[1].role, "assistant");
        assert_eq!(state.status_text, "Ready");
    }
}
