//! Document corpora backing closed-book search.
//!
//! A [`Library`] maps organization ids to a [`Corpus`]. The `general`
//! corpus always exists and answers questions that are not scoped to an
//! organization, or scoped to one without documents of its own.

use crate::catalog::Organization;
use anyhow::{Context, Result};
use compact_str::CompactString;
use std::{collections::BTreeMap, fs, path::Path, sync::Arc};

/// Key of the corpus used when no organization is selected.
pub const GENERAL: &str = "general";

/// Built-in general corpus, used when no document directory is configured.
pub const BUILTIN_DOCUMENT: &str = include_str!("../data/document.txt");

/// File extensions read as documents.
const EXTENSIONS: [&str; 2] = ["txt", "md"];

/// A read-only block of document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    text: Arc<str>,
}

impl Corpus {
    /// Wrap `text` as a corpus.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    /// The full corpus text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the corpus holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Corpora keyed by organization id.
#[derive(Debug, Clone)]
pub struct Library {
    corpora: BTreeMap<CompactString, Corpus>,
}

impl Library {
    /// A library holding only the built-in general corpus.
    pub fn builtin() -> Self {
        Self::with_general(Corpus::new(BUILTIN_DOCUMENT))
    }

    /// A library holding only `general`.
    pub fn with_general(general: Corpus) -> Self {
        let mut corpora = BTreeMap::new();
        corpora.insert(CompactString::const_new(GENERAL), general);
        Self { corpora }
    }

    /// Add or replace the corpus of an organization.
    pub fn insert(&mut self, org: impl Into<CompactString>, corpus: Corpus) {
        self.corpora.insert(org.into(), corpus);
    }

    /// Load a `<dir>/<org>/*.{txt,md}` tree.
    ///
    /// Files of one organization are concatenated in name order. A missing
    /// `general` directory falls back to the built-in document.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut library = Self::builtin();
        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read document directory {}", dir.display()))?;

        let mut orgs = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                orgs.push(path);
            }
        }
        orgs.sort();

        for path in orgs {
            let Some(org) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let corpus = read_corpus(&path)?;
            if corpus.is_empty() {
                tracing::warn!("no documents found for '{org}' in {}", path.display());
                continue;
            }
            tracing::debug!("loaded corpus '{org}' ({} bytes)", corpus.text().len());
            library.insert(org, corpus);
        }

        tracing::info!(
            "loaded {} document corpora from {}",
            library.corpora.len(),
            dir.display()
        );
        Ok(library)
    }

    /// The corpus for `org`, falling back to `general`.
    pub fn get(&self, org: Option<&str>) -> &Corpus {
        org.and_then(|org| self.corpora.get(org))
            .unwrap_or_else(|| self.general())
    }

    /// The general corpus.
    pub fn general(&self) -> &Corpus {
        &self.corpora[GENERAL]
    }

    /// Whether `org` has a corpus of its own.
    pub fn contains(&self, org: &str) -> bool {
        self.corpora.contains_key(org)
    }

    /// Organizations with their own corpus, in id order.
    pub fn organizations(&self) -> Vec<Organization> {
        self.corpora
            .keys()
            .filter(|id| id.as_str() != GENERAL)
            .map(|id| Organization {
                id: id.to_string(),
                name: id.replace(['_', '-'], " "),
            })
            .collect()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_corpus(dir: &Path) -> Result<Corpus> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))? {
        let path = entry?.path();
        let is_document = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| EXTENSIONS.contains(&e));
        if path.is_file() && is_document {
            files.push(path);
        }
    }
    files.sort();

    let mut parts = Vec::with_capacity(files.len());
    for file in files {
        let text = fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let text = text.trim();
        if !text.is_empty() {
            parts.push(text.to_owned());
        }
    }
    Ok(Corpus::new(parts.join("\n\n")))
}
