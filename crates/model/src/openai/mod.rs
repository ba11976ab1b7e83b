//! OpenAI chat completions provider.
//!
//! Any OpenAI-compatible server works through [`OpenAI::custom`].

use crate::http::{self, HttpProvider};
use compact_str::CompactString;
use reqwest::Client;
pub use request::{Request, Response};

mod provider;
mod request;

/// OpenAI API base URL.
pub const BASE_URL: &str = "https://api.openai.com/v1";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// The OpenAI provider.
#[derive(Clone)]
pub struct OpenAI {
    http: HttpProvider,
    model: CompactString,
}

impl OpenAI {
    /// Create a provider targeting a custom OpenAI-compatible base URL.
    pub fn custom(client: Client, key: &str, base_url: &str, model: &str) -> anyhow::Result<Self> {
        let endpoint = http::endpoint(base_url, "chat/completions");
        Ok(Self {
            http: HttpProvider::bearer(client, key, &endpoint)?,
            model: model.into(),
        })
    }

    /// The configured model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The chat completions URL.
    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }
}
