#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::persona::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_system() {
        let msg = Message::system("You are Gym Coach");
        assert_eq!(msg.role, Role::System);
        assert_eq!(msg.text, "You are Gym Coach");
    }

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text, "Hello");
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.text, "I can help");
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user("test input");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, msg);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::System).unwrap();
        assert_eq!(json, r#""system""#);

        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, r#""user""#);

        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str(r#""assistant""#).unwrap();
        assert_eq!(role, Role::Assistant);
    }

    // ─── Persona Tests ───────────────────────────────────────

    #[test]
    fn test_persona_instruction_describes_phases() {
        assert!(PERSONA_INSTRUCTION.contains("Evaluation"));
        assert!(PERSONA_INSTRUCTION.contains("Planning"));
    }

    #[test]
    fn test_seed_texts_nonempty() {
        assert!(!GREETING.is_empty());
        assert!(!OPENING_QUESTION.is_empty());
        assert!(OPENING_QUESTION.contains("training"));
    }

    #[test]
    fn test_phase_default_is_evaluation() {
        assert_eq!(Phase::default(), Phase::Evaluation);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::Evaluation.label(), "Evaluation");
        assert_eq!(Phase::Planning.label(), "Planning");
    }

    #[test]
    fn test_phase_serialization() {
        let json = serde_json::to_string(&Phase::Planning).unwrap();
        assert_eq!(json, r#""planning""#);
        let phase: Phase = serde_json::from_str(r#""evaluation""#).unwrap();
        assert_eq!(phase, Phase::Evaluation);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_session_event_serialization() {
        let event = SessionEvent::TurnStart { turn_id: 1 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("TurnStart"));
    }

    #[test]
    fn test_session_event_reply() {
        let event = SessionEvent::Reply {
            text: "Start with three sessions a week".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("three sessions"));
    }

    #[test]
    fn test_session_event_error_roundtrip() {
        let event = SessionEvent::Error {
            message: "HTTP 500".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: SessionEvent = serde_json::from_str(&json).unwrap();
        if let SessionEvent::Error { message } = deserialized {
            assert_eq!(message, "HTTP 500");
        } else {
            panic!("Wrong variant");
        }
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = CoachConfig::default();
        assert_eq!(config.llm.provider, LlmProvider::OpenAI);
        assert_eq!(config.llm.model, "gpt-4");
        assert!(config.llm.api_key.is_empty());
        assert!(config.llm.api_base.is_none());
        assert_eq!(config.llm.max_tokens, 1024);
        assert_eq!(config.persona, PERSONA_INSTRUCTION);
    }

    #[test]
    fn test_config_with_api_key() {
        let config = CoachConfig::with_api_key(Some("sk-test".to_string())).unwrap();
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.persona, PERSONA_INSTRUCTION);
    }

    #[test]
    fn test_config_missing_api_key() {
        let err = CoachConfig::with_api_key(None).unwrap_err();
        assert!(matches!(err, CoachError::Config(_)));
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_config_blank_api_key() {
        let err = CoachConfig::with_api_key(Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, CoachError::Config(_)));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = CoachConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CoachConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.llm.provider, LlmProvider::OpenAI);
        assert_eq!(deserialized.llm.model, "gpt-4");
    }

    #[test]
    fn test_llm_provider_base_urls() {
        assert_eq!(LlmProvider::OpenAI.default_base_url(), "https://api.openai.com");
        assert_eq!(LlmProvider::DeepSeek.default_base_url(), "https://api.deepseek.com");
        assert!(LlmProvider::Custom.default_base_url().is_empty());
    }

    #[test]
    fn test_llm_provider_labels() {
        assert_eq!(LlmProvider::OpenAI.label(), "OpenAI");
        assert_eq!(LlmProvider::DeepSeek.label(), "DeepSeek");
        assert_eq!(LlmProvider::Groq.label(), "Groq");
        assert_eq!(LlmProvider::Custom.label(), "Custom");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = CoachError::Config("no key".to_string());
        assert_eq!(err.to_string(), "Configuration error: no key");

        let err = CoachError::Upstream("rate limit".to_string());
        assert_eq!(err.to_string(), "Upstream error: rate limit");

        let err = CoachError::Network("fetch failed".to_string());
        assert_eq!(err.to_string(), "Network error: fetch failed");
    }

    #[test]
    fn test_error_recoverability() {
        assert!(!CoachError::Config("x".to_string()).is_recoverable());
        assert!(CoachError::Upstream("x".to_string()).is_recoverable());
        assert!(CoachError::Network("x".to_string()).is_recoverable());
        assert!(CoachError::Serialization("x".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_from_serde() {
        let bad_json = "{{invalid}}";
        let serde_err = serde_json::from_str::<serde_json::Value>(bad_json).unwrap_err();
        let err: CoachError = serde_err.into();
        assert!(matches!(err, CoachError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = CoachError::Network("timeout".to_string());
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
