//! Provider implementation.
//!
//! Unified `Provider` enum with enum dispatch over concrete backends.
//! `build_provider()` matches on the resolved `ProviderKind`.

use crate::{
    claude::Claude,
    config::{ConfigError, ProviderKind, Resolved},
    gemini::Gemini,
    openai::OpenAI,
};
use anyhow::Result;
use gcore::{Model, Options};
use std::fmt;

/// Unified text generation provider.
///
/// Callers are monomorphized on `Provider` and never branch on the
/// concrete backend.
#[derive(Clone)]
pub enum Provider {
    /// Google Gemini API.
    Gemini(Gemini),
    /// OpenAI chat completions API.
    OpenAI(OpenAI),
    /// Anthropic Messages API.
    Claude(Claude),
}

impl Provider {
    /// The backend this provider talks to.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Gemini(_) => ProviderKind::Gemini,
            Self::OpenAI(_) => ProviderKind::OpenAI,
            Self::Claude(_) => ProviderKind::Anthropic,
        }
    }

    /// The configured model.
    pub fn model(&self) -> &str {
        match self {
            Self::Gemini(p) => p.model(),
            Self::OpenAI(p) => p.model(),
            Self::Claude(p) => p.model(),
        }
    }

    /// The URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Gemini(p) => p.endpoint(),
            Self::OpenAI(p) => p.endpoint(),
            Self::Claude(p) => p.endpoint(),
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("kind", &self.kind())
            .field("model", &self.model())
            .field("endpoint", &self.endpoint())
            .finish()
    }
}

/// Construct a `Provider` from a resolved selection and a shared HTTP client.
///
/// Pure construction: no request is sent.
pub fn build_provider(resolved: &Resolved, client: reqwest::Client) -> Result<Provider, ConfigError> {
    let kind = resolved.kind;
    let key = resolved.api_key.as_str();
    let base_url = resolved.base_url();
    let model = resolved.model.as_str();

    let provider = match kind {
        ProviderKind::Gemini => Gemini::custom(client, key, base_url, model).map(Provider::Gemini),
        ProviderKind::OpenAI => OpenAI::custom(client, key, base_url, model).map(Provider::OpenAI),
        ProviderKind::Anthropic => {
            Claude::custom(client, key, base_url, model).map(Provider::Claude)
        }
    }
    .map_err(|e| {
        tracing::debug!("failed to build {kind} provider: {e}");
        ConfigError::InvalidCredential { provider: kind }
    })?;

    tracing::debug!("built {kind} provider for model {model}");
    Ok(provider)
}

/// Construct a provider from an identity string and a credential.
///
/// Uses the backend's default model. Fails with
/// [`ConfigError::UnsupportedProvider`] on an unknown identity.
pub fn create_provider(
    identity: &str,
    credential: &str,
    base_url: Option<&str>,
) -> Result<Provider, ConfigError> {
    let kind: ProviderKind = identity.parse()?;
    let resolved = Resolved::new(kind, credential).with_base_url(base_url);
    build_provider(&resolved, reqwest::Client::new())
}

impl Model for Provider {
    async fn generate(&self, prompt: &str, options: &Options) -> Result<String> {
        match self {
            Self::Gemini(p) => p.generate(prompt, options).await,
            Self::OpenAI(p) => p.generate(prompt, options).await,
            Self::Claude(p) => p.generate(prompt, options).await,
        }
    }

    fn name(&self) -> &str {
        self.kind().as_str()
    }
}
