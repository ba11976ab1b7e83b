//! Tests for the `build_provider()` and `create_provider()` factories.

use geodash_model::{
    Client, ConfigError, Provider, ProviderKind, Resolved, build_provider, create_provider,
};

#[test]
fn build_gemini_default() {
    let resolved = Resolved::new(ProviderKind::Gemini, "test-key");
    let p = build_provider(&resolved, Client::new()).unwrap();
    assert!(matches!(p, Provider::Gemini(_)));
    assert_eq!(
        p.endpoint(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
    );
}

#[test]
fn build_openai_custom_url() {
    let resolved = Resolved::new(ProviderKind::OpenAI, "test-key")
        .with_base_url(Some("http://localhost:8080/v1/"))
        .with_model("gpt-4o");
    let p = build_provider(&resolved, Client::new()).unwrap();
    assert!(matches!(p, Provider::OpenAI(_)));
    assert_eq!(p.endpoint(), "http://localhost:8080/v1/chat/completions");
    assert_eq!(p.model(), "gpt-4o");
}

#[test]
fn build_claude_default() {
    let resolved = Resolved::new(ProviderKind::Anthropic, "test-key");
    let p = build_provider(&resolved, Client::new()).unwrap();
    assert!(matches!(p, Provider::Claude(_)));
    assert_eq!(p.kind(), ProviderKind::Anthropic);
    assert_eq!(p.endpoint(), "https://api.anthropic.com/v1/messages");
}

#[test]
fn build_rejects_unencodable_key() {
    let resolved = Resolved::new(ProviderKind::Anthropic, "bad\nkey");
    assert!(matches!(
        build_provider(&resolved, Client::new()),
        Err(ConfigError::InvalidCredential {
            provider: ProviderKind::Anthropic
        })
    ));
}

#[test]
fn create_by_identity() {
    assert!(matches!(
        create_provider("gemini", "k", None).unwrap(),
        Provider::Gemini(_)
    ));
    assert!(matches!(
        create_provider("openai", "k", None).unwrap(),
        Provider::OpenAI(_)
    ));
    assert!(matches!(
        create_provider("claude", "k", None).unwrap(),
        Provider::Claude(_)
    ));
}

#[test]
fn create_unknown_identity() {
    let err = create_provider("llama", "k", None).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedProvider(_)));
    assert!(err.to_string().contains("llama"));
}
