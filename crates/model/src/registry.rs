//! Lazily constructed, process-wide provider.
//!
//! Configuration is read on first use, not at startup. Once a provider is
//! built every later call returns the same instance. A configuration error
//! is returned to the caller and not cached, so a corrected environment is
//! picked up by the next call.

use crate::{Provider, Settings, build_provider, config::ConfigError};
use parking_lot::Mutex;
use std::{
    fmt,
    sync::{Arc, LazyLock, OnceLock},
};

type Loader = Box<dyn Fn() -> Result<Settings, ConfigError> + Send + Sync>;

/// The process-wide registry, configured from the environment.
static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::from_env);

/// The shared provider, built from the environment on first call.
pub fn get_provider() -> Result<Arc<Provider>, ConfigError> {
    GLOBAL.get()
}

/// Holds at most one provider, built on first access.
///
/// Concurrent first calls construct exactly one instance: the fast path
/// reads the cell, the slow path serializes construction on `init`.
pub struct Registry {
    loader: Loader,
    cell: OnceLock<Arc<Provider>>,
    init: Mutex<()>,
}

impl Registry {
    /// Create a registry reading its settings through `loader`.
    pub fn new(loader: impl Fn() -> Result<Settings, ConfigError> + Send + Sync + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            cell: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Create a registry reading the process environment.
    pub fn from_env() -> Self {
        Self::new(|| Ok(Settings::from_env()))
    }

    /// Create a registry over fixed settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self::new(move || Ok(settings.clone()))
    }

    /// The shared provider, constructing it on first call.
    pub fn get(&self) -> Result<Arc<Provider>, ConfigError> {
        if let Some(provider) = self.cell.get() {
            return Ok(provider.clone());
        }

        let _guard = self.init.lock();
        if let Some(provider) = self.cell.get() {
            return Ok(provider.clone());
        }

        let resolved = (self.loader)()?.resolve().inspect_err(|e| {
            tracing::error!("provider configuration error: {e}");
        })?;
        let provider = Arc::new(build_provider(&resolved, reqwest::Client::new())?);
        tracing::info!(
            "initialized {} provider (model {})",
            provider.kind(),
            provider.model()
        );

        let _ = self.cell.set(provider.clone());
        Ok(provider)
    }

    /// Whether the provider has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("provider", &self.cell.get())
            .finish()
    }
}
