use crate::models::Language;
use serde::{Deserialize, Serialize};

/// A published snippet from the catalog. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub description: String,
    pub language: Language,
    pub code: String,
    pub author: String,
    /// Shown as written; no particular format is required
    pub date: String,
}

impl Snippet {
    pub fn display_date(&self) -> &str {
        &self.date
    }

    pub fn byline(&self) -> String {
        format!("by {}", self.author)
    }

    /// First `max_lines` lines of code for card previews
    pub fn get_preview(&self, max_lines: usize) -> String {
        self.code
            .lines()
            .take(max_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn get_line_count(&self) -> usize {
        self.code.lines().count()
    }

    /// Case-insensitive substring match on title, description and code.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.code.to_lowercase().contains(needle)
    }
}
