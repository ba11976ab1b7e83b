//! Text generation providers.
//!
//! Three hosted backends (Gemini, OpenAI, Anthropic) behind the
//! [`gcore::Model`] trait, a factory selecting one by identity, and a
//! lazily initialized process-wide [`Registry`].

pub use config::{ConfigError, ProviderConfig, ProviderKind, Resolved, Settings};
pub use provider::{Provider, build_provider, create_provider};
pub use registry::{Registry, get_provider};
pub use reqwest::Client;

pub mod claude;
pub mod config;
pub mod gemini;
pub mod http;
pub mod openai;
mod provider;
mod registry;
