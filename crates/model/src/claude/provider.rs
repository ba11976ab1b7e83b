//! Model implementation for the Claude provider.

use super::{Claude, Request, Response};
use anyhow::Result;
use gcore::{Model, Options};

impl Model for Claude {
    async fn generate(&self, prompt: &str, options: &Options) -> Result<String> {
        let request = Request::new(&self.model, prompt, options);
        let response: Response = self.http.send(&request).await?;
        Ok(response.text())
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}
