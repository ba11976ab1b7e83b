//! Shared HTTP transport for the hosted providers.
//!
//! `HttpProvider` wraps a `reqwest::Client` with pre-configured headers and
//! endpoint URL. Each provider builds its own request body and response
//! shape on top of [`HttpProvider::send`].

use anyhow::{Context, Result, bail};
use reqwest::{
    Client, Method, StatusCode,
    header::{self, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Shared HTTP transport.
///
/// Holds a `reqwest::Client`, pre-built headers (auth + content-type),
/// and the target endpoint URL.
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
}

impl HttpProvider {
    /// Create a provider with Bearer token authentication.
    pub fn bearer(client: Client, key: &str, endpoint: &str) -> Result<Self> {
        let mut headers = json_headers();
        headers.insert(header::AUTHORIZATION, format!("Bearer {key}").parse()?);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
        })
    }

    /// Create a provider authenticated by custom headers.
    ///
    /// Used by providers that don't use Bearer tokens (Gemini sends
    /// `x-goog-api-key`, Anthropic sends `x-api-key`).
    pub fn custom_header(client: Client, extra: &[(&str, &str)], endpoint: &str) -> Result<Self> {
        let mut headers = json_headers();
        for (name, value) in extra {
            headers.insert(name.parse::<HeaderName>()?, value.parse::<HeaderValue>()?);
        }
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
        })
    }

    /// POST `body` and deserialize the JSON response.
    ///
    /// A non-success status fails with the message extracted by
    /// [`error_message`]. A success body that is not JSON also fails.
    pub async fn send<T: DeserializeOwned>(&self, body: &impl Serialize) -> Result<T> {
        tracing::trace!("request: {}", serde_json::to_string(body)?);
        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.endpoint))?;

        let status = response.status();
        let text = response.text().await?;
        tracing::trace!("response ({status}): {text}");

        if !status.is_success() {
            let message = error_message(status, &text);
            tracing::warn!("provider returned {status}: {message}");
            bail!("{message}");
        }

        serde_json::from_str(&text)
            .with_context(|| format!("malformed response from {}", self.endpoint))
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Join a base URL and a path with exactly one slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Best available error message for a failed response.
///
/// Tries `error.message`, a string `error`, then a top-level `message`,
/// then the status reason phrase.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok();
    let from_body = parsed.as_ref().and_then(|value| {
        // Gemini occasionally wraps the error object in an array.
        let value = value.get(0).unwrap_or(value);
        value
            .pointer("/error/message")
            .and_then(Value::as_str)
            .or_else(|| value.get("error").and_then(Value::as_str))
            .or_else(|| value.get("message").and_then(Value::as_str))
            .map(str::trim)
            .filter(|message| !message.is_empty())
    });

    match from_body {
        Some(message) => message.to_owned(),
        None => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned(),
    }
}

/// Deserialize a field that may be absent or `null` into its default.
///
/// Pair with `#[serde(default)]` so both shapes read as empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
