//! Claude (Anthropic) provider.
//!
//! Implements the Anthropic Messages API, which differs from the OpenAI
//! chat completions format in header names, the mandatory `max_tokens`
//! and the content block response shape.

use crate::http::{self, HttpProvider};
use compact_str::CompactString;
use reqwest::Client;
pub use request::{Request, Response};

mod provider;
mod request;

/// Anthropic API base URL.
pub const BASE_URL: &str = "https://api.anthropic.com/v1";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-latest";

/// The Anthropic API version header value.
const API_VERSION: &str = "2023-06-01";

/// The Claude provider.
#[derive(Clone)]
pub struct Claude {
    http: HttpProvider,
    model: CompactString,
}

impl Claude {
    /// Create a provider targeting a custom Anthropic-compatible base URL.
    pub fn custom(client: Client, key: &str, base_url: &str, model: &str) -> anyhow::Result<Self> {
        let endpoint = http::endpoint(base_url, "messages");
        let http = HttpProvider::custom_header(
            client,
            &[("x-api-key", key), ("anthropic-version", API_VERSION)],
            &endpoint,
        )?;
        Ok(Self {
            http,
            model: model.into(),
        })
    }

    /// The configured model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The Messages API URL.
    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }
}
