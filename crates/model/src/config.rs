//! Provider configuration.
//!
//! One provider identity is selected per process (`LLM_PROVIDER`, default
//! gemini). Each identity carries its own credential plus optional base URL
//! and model overrides. Configuration comes from the environment or from a
//! TOML file with `${VAR}` expansion, and is read once.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

/// Environment variable selecting the provider identity.
pub const PROVIDER_VAR: &str = "LLM_PROVIDER";

/// Configuration failures. Fatal when the registry is first used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The provider identity is not one of the supported backends.
    #[error("unsupported provider '{0}' (expected one of gemini, openai, anthropic)")]
    UnsupportedProvider(String),
    /// No credential is configured for the selected provider.
    #[error("{var} environment variable not set (required by the {provider} provider)")]
    MissingCredential {
        /// The selected provider.
        provider: ProviderKind,
        /// The environment variable expected to hold the credential.
        var: &'static str,
    },
    /// The credential cannot be sent as an HTTP header value.
    #[error("invalid credential for the {provider} provider")]
    InvalidCredential {
        /// The selected provider.
        provider: ProviderKind,
    },
    /// The configuration file could not be read.
    #[error("failed to read configuration {}: {source}", path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`Settings`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Supported text generation backends.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ProviderKind {
    /// Google Gemini `generateContent` API.
    #[default]
    #[serde(rename = "gemini", alias = "google")]
    Gemini,
    /// OpenAI chat completions API.
    #[serde(rename = "openai")]
    OpenAI,
    /// Anthropic Messages API.
    #[serde(rename = "anthropic", alias = "claude")]
    Anthropic,
}

impl ProviderKind {
    /// All supported providers.
    pub const ALL: [ProviderKind; 3] = [Self::Gemini, Self::OpenAI, Self::Anthropic];

    /// Canonical identity string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
        }
    }

    /// Environment variable holding the credential.
    pub fn api_key_var(self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::OpenAI => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    /// Environment variable holding the base URL override.
    pub fn base_url_var(self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_BASE_URL",
            Self::OpenAI => "OPENAI_BASE_URL",
            Self::Anthropic => "ANTHROPIC_BASE_URL",
        }
    }

    /// Environment variable holding the model override.
    pub fn model_var(self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_MODEL",
            Self::OpenAI => "OPENAI_MODEL",
            Self::Anthropic => "ANTHROPIC_MODEL",
        }
    }

    /// API base URL used without an override.
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Gemini => crate::gemini::BASE_URL,
            Self::OpenAI => crate::openai::BASE_URL,
            Self::Anthropic => crate::claude::BASE_URL,
        }
    }

    /// Model used without an override.
    pub fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => crate::gemini::DEFAULT_MODEL,
            Self::OpenAI => crate::openai::DEFAULT_MODEL,
            Self::Anthropic => crate::claude::DEFAULT_MODEL,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAI),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            _ => Err(ConfigError::UnsupportedProvider(s.to_owned())),
        }
    }
}

/// Settings of one provider.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key (supports `${ENV_VAR}` expansion in TOML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Optional base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Optional model override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<CompactString>,
}

impl ProviderConfig {
    fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.base_url.is_none() && self.model.is_none()
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Process-wide provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Selected provider identity. Validated on [`Settings::resolve`].
    #[serde(default = "default_provider")]
    pub provider: CompactString,
    /// Per-provider settings (`[providers.<name>]` tables).
    #[serde(default)]
    pub providers: BTreeMap<ProviderKind, ProviderConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            providers: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its
    /// value. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let mut providers = BTreeMap::new();
        for kind in ProviderKind::ALL {
            let config = ProviderConfig {
                api_key: var(kind.api_key_var()),
                base_url: var(kind.base_url_var()),
                model: var(kind.model_var()).map(CompactString::from),
            };
            if !config.is_empty() {
                providers.insert(kind, config);
            }
        }

        Self {
            provider: var(PROVIDER_VAR)
                .map(CompactString::from)
                .unwrap_or_else(default_provider),
            providers,
        }
    }

    /// Parse a TOML string, expanding `${VAR}` references first.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env_vars(toml_str);
        Ok(toml::from_str(&expanded)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// The selected provider identity.
    pub fn kind(&self) -> Result<ProviderKind, ConfigError> {
        self.provider.parse()
    }

    /// Resolve the selected provider and its credential.
    pub fn resolve(&self) -> Result<Resolved, ConfigError> {
        let kind = self.kind()?;
        let config = self.providers.get(&kind).cloned().unwrap_or_default();
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingCredential {
                provider: kind,
                var: kind.api_key_var(),
            })?;

        Ok(Resolved {
            kind,
            api_key,
            base_url: config.base_url.filter(|url| !url.trim().is_empty()),
            model: config
                .model
                .unwrap_or_else(|| CompactString::from(kind.default_model())),
        })
    }
}

/// A fully resolved provider selection, ready for construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Provider identity.
    pub kind: ProviderKind,
    /// Credential.
    pub api_key: String,
    /// Base URL override.
    pub base_url: Option<String>,
    /// Model name.
    pub model: CompactString,
}

impl Resolved {
    /// Resolve `kind` with `api_key` and the default model and base URL.
    pub fn new(kind: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            kind,
            api_key: api_key.into(),
            base_url: None,
            model: CompactString::from(kind.default_model()),
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        self.base_url = base_url.map(ToOwned::to_owned);
        self
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<CompactString>) -> Self {
        self.model = model.into();
        self
    }

    /// Effective base URL.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.kind.default_base_url())
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("kind", &self.kind)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Expand `${VAR}` patterns with environment variable values.
///
/// Unknown variables are replaced with an empty string. A `${` without a
/// closing brace is kept as written.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return result;
        };
        if let Ok(value) = std::env::var(&after[..end]) {
            result.push_str(&value);
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}

fn default_provider() -> CompactString {
    CompactString::const_new("gemini")
}
