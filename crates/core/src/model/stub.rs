//! Scripted model for tests.
//!
//! Returns a canned reply (or a canned failure) for every call and records
//! each prompt it receives. Never touches the network.

use crate::model::{Model, Options};
use anyhow::{Result, anyhow};
use parking_lot::Mutex;

/// A model that answers every prompt with the same scripted outcome.
pub struct Scripted {
    reply: std::result::Result<String, String>,
    calls: Mutex<Vec<(String, Options)>>,
}

impl Scripted {
    /// Always resolve with `text`.
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `message`.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts and options received so far, oldest first.
    pub fn calls(&self) -> Vec<(String, Options)> {
        self.calls.lock().clone()
    }

    /// The most recent prompt, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().last().map(|(prompt, _)| prompt.clone())
    }
}

impl Model for Scripted {
    async fn generate(&self, prompt: &str, options: &Options) -> Result<String> {
        self.calls.lock().push((prompt.to_owned(), *options));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(anyhow!("{message}")),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
