//! User-facing orchestrator error.

use gcore::{
    Language,
    i18n::{Message, t},
};
use thiserror::Error;

/// A failed provider call, reduced to one localized sentence.
///
/// The provider's own message is logged where the failure happens and
/// never reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct Error {
    language: Language,
}

impl Error {
    /// The error for a request made in `language`.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Language of the message.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The localized message.
    pub fn message(&self) -> &'static str {
        t(Message::AiError, self.language)
    }
}
