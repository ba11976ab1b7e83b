//! Core types and traits for the geodash dashboard.
//!
//! Holds the provider-agnostic text generation contract ([`Model`]), the
//! static catalog of countries and datasets, the document library used for
//! closed-book search, and the localized message table.

pub use {
    corpus::{Corpus, Library},
    lang::Language,
    model::{Model, Options},
};

pub mod catalog;
pub mod corpus;
pub mod i18n;
mod lang;
pub mod model;
