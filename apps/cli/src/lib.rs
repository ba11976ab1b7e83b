//! geodash CLI: one-shot analysis and search, the static catalog, and the
//! HTTP API server.

pub use cmd::{Cli, Command};

pub mod cmd;
