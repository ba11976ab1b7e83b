//! Google Gemini provider.
//!
//! Talks to the `generateContent` endpoint of the Generative Language API.
//! The model name is part of the URL and the key travels in the
//! `x-goog-api-key` header.

use crate::http::{self, HttpProvider};
use compact_str::CompactString;
use reqwest::Client;
pub use request::{Request, Response};

mod provider;
mod request;

/// Generative Language API base URL.
pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// The Gemini provider.
#[derive(Clone)]
pub struct Gemini {
    http: HttpProvider,
    model: CompactString,
}

impl Gemini {
    /// Create a provider targeting a custom Gemini-compatible base URL.
    pub fn custom(client: Client, key: &str, base_url: &str, model: &str) -> anyhow::Result<Self> {
        let endpoint = http::endpoint(base_url, &format!("models/{model}:generateContent"));
        let http = HttpProvider::custom_header(client, &[("x-goog-api-key", key)], &endpoint)?;
        Ok(Self {
            http,
            model: model.into(),
        })
    }

    /// The configured model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The `generateContent` URL.
    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }
}
