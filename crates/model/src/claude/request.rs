//! Messages API wire types.

use gcore::Options;
use serde::{Deserialize, Serialize};

/// Upper bound on generated tokens sent with every request.
pub const MAX_TOKENS: u32 = 1024;

/// A single-turn Messages API request.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
    temperature: f32,
    top_p: f32,
}

impl Request {
    /// A request carrying `prompt` as one user message.
    pub fn new(model: &str, prompt: &str, options: &Options) -> Self {
        Self {
            model: model.to_owned(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt.to_owned(),
            }],
            temperature: options.temperature,
            top_p: options.top_p,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// A Messages API response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "crate::http::null_as_default")]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        #[serde(default, deserialize_with = "crate::http::null_as_default")]
        text: String,
    },
    #[serde(other)]
    Other,
}

impl Response {
    /// Text of the first text block. Empty when there is none or its
    /// text is null.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text.clone()),
                ContentBlock::Other => None,
            })
            .unwrap_or_default()
    }
}
