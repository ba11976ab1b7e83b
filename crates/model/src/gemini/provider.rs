//! Model implementation for the Gemini provider.

use super::{Gemini, Request, Response};
use anyhow::Result;
use gcore::{Model, Options};

impl Model for Gemini {
    async fn generate(&self, prompt: &str, options: &Options) -> Result<String> {
        let response: Response = self.http.send(&Request::new(prompt, options)).await?;
        Ok(response.text())
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
