//! Gemini `generateContent` wire types.

use gcore::Options;
use serde::{Deserialize, Serialize};

/// A single-turn `generateContent` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl Request {
    /// A request carrying `prompt` as one user turn.
    pub fn new(prompt: &str, options: &Options) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![Part {
                    text: Some(prompt.to_owned()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: options.temperature,
                top_p: options.top_p,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default, deserialize_with = "crate::http::null_as_default")]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

/// A `generateContent` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "crate::http::null_as_default")]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl Response {
    /// Text of the first candidate, its parts concatenated. Empty when the
    /// response carries no text.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}
