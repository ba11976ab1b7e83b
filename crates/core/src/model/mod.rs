//! Unified text generation interface.
//!
//! Every backend (Gemini, OpenAI, Anthropic) implements [`Model`]; callers
//! never see which one they talk to.

use anyhow::Result;
pub use options::Options;
use std::sync::Arc;
#[cfg(feature = "testing")]
pub use stub::Scripted;

mod options;
#[cfg(feature = "testing")]
mod stub;

/// Unified text generation trait.
///
/// One call is one outbound request: no retries, no streaming. The call
/// either resolves with the generated text (possibly empty) or fails with
/// a provider-specific error message.
///
/// Constructors are inherent methods on each provider and never called
/// polymorphically.
pub trait Model: Send + Sync {
    /// Generate text for a single user prompt.
    fn generate(
        &self,
        prompt: &str,
        options: &Options,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Short backend name used in logs.
    fn name(&self) -> &str;
}

impl<M: Model> Model for Arc<M> {
    fn generate(
        &self,
        prompt: &str,
        options: &Options,
    ) -> impl Future<Output = Result<String>> + Send {
        (**self).generate(prompt, options)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
