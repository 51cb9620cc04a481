use crate::error::{Result, ShelfError};
use crate::models::Snippet;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/snippets.json");

/// The snippet store, loaded once at startup. Ids are unique.
#[derive(Debug, Clone)]
pub struct Catalog {
    snippets: Vec<Snippet>,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load from `path` if given, otherwise the built-in catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                let catalog = Self::from_json(&content)?;
                tracing::info!(path = %path.display(), count = catalog.len(), "loaded catalog");
                Ok(catalog)
            }
            None => Self::builtin(),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let snippets: Vec<Snippet> = serde_json::from_str(content)?;
        Self::from_snippets(snippets)
    }

    pub fn from_snippets(snippets: Vec<Snippet>) -> Result<Self> {
        let mut seen = HashSet::new();
        for snippet in &snippets {
            if !seen.insert(snippet.id.as_str()) {
                return Err(ShelfError::DuplicateId(snippet.id.clone()));
            }
        }
        Ok(Self { snippets })
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&Snippet> {
        self.get(id)
            .ok_or_else(|| ShelfError::SnippetNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}
