use whr_toolbox::chat::{canned_answer, ChatClient, ChatError, FALLBACK_REPLY};
use whr_toolbox::config::ChatConfig;

fn offline_client() -> ChatClient {
    ChatClient::new(ChatConfig::default(), None)
}

#[test]
fn missing_key_gives_fallback() {
    let client = offline_client();
    assert!(!client.has_credential());
    assert_eq!(
        client.reply("Tell me about turbine blades").unwrap(),
        FALLBACK_REPLY
    );
}

#[test]
fn canned_answers_need_no_key() {
    let client = offline_client();
    let answer = client.reply("How does it work?").unwrap();
    assert!(answer.contains("2257"));
    assert_eq!(Some(answer.as_str()), canned_answer("how does it work"));
}

#[test]
fn empty_message_is_rejected() {
    let err = offline_client().reply("   ").unwrap_err();
    assert!(matches!(err, ChatError::EmptyMessage));
}

#[test]
fn unreachable_provider_surfaces_error() {
    let config = ChatConfig {
        endpoint: "http://127.0.0.1:9/v1/chat/completions".into(),
        timeout_secs: 2,
        ..ChatConfig::default()
    };
    let client = ChatClient::new(config, Some("test-key".into()));
    let err = client.reply("Tell me about turbine blades").unwrap_err();
    assert!(matches!(err, ChatError::Provider(_)));
}
