//! The process-wide provider. Kept in its own test binary because it reads
//! and mutates the process environment.

use geodash_model::{ConfigError, ProviderKind, get_provider};
use std::sync::Arc;

#[test]
fn global_provider_from_environment() {
    // SAFETY: the only test in this binary, so no other thread reads the
    // environment concurrently.
    unsafe {
        std::env::set_var("LLM_PROVIDER", "openai");
        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("OPENAI_BASE_URL");
    }

    let err = get_provider().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingCredential {
            provider: ProviderKind::OpenAI,
            var: "OPENAI_API_KEY",
        }
    ));
    assert!(err.to_string().contains("OPENAI_API_KEY"));

    // The failure is not cached; the next call reads the environment again.
    unsafe {
        std::env::set_var("OPENAI_API_KEY", "sk-test");
    }
    let first = get_provider().unwrap();
    assert_eq!(first.kind(), ProviderKind::OpenAI);

    unsafe {
        std::env::set_var("LLM_PROVIDER", "gemini");
    }
    let second = get_provider().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.kind(), ProviderKind::OpenAI);
}
