//! Chat completions wire types.

use gcore::Options;
use serde::{Deserialize, Serialize};

/// A single-turn chat completions request.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    top_p: f32,
}

impl Request {
    /// A request carrying `prompt` as one user message.
    pub fn new(model: &str, prompt: &str, options: &Options) -> Self {
        Self {
            model: model.to_owned(),
            messages: vec![Message {
                role: "user".into(),
                content: Some(prompt.to_owned()),
            }],
            temperature: options.temperature,
            top_p: options.top_p,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Message {
    #[serde(default, deserialize_with = "crate::http::null_as_default")]
    role: String,
    #[serde(default)]
    content: Option<String>,
}

/// A chat completions response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "crate::http::null_as_default")]
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<Message>,
}

impl Response {
    /// Content of the first choice. Empty when absent or null.
    pub fn text(&self) -> String {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.clone())
            .unwrap_or_default()
    }
}
