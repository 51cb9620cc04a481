//! Add-snippet form model
//!
//! A draft is never stored. Submitting only validates it and, when valid, reports a
//! simulated success.

use crate::models::Language;
use std::collections::BTreeMap;
use std::fmt;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DraftField {
    #[default]
    Title,
    Description,
    Language,
    Tags,
    Code,
}

impl DraftField {
    /// Tab order in the form
    pub const ORDER: [DraftField; 5] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::Language,
        DraftField::Tags,
        DraftField::Code,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Title *",
            DraftField::Description => "Description *",
            DraftField::Language => "Language *",
            DraftField::Tags => "Tags (comma-separated)",
            DraftField::Code => "Code *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Title => "e.g., React Custom Hook - useLocalStorage",
            DraftField::Description => "Brief description of what this snippet does...",
            DraftField::Language => "Select language",
            DraftField::Tags => "e.g., hooks, react, typescript",
            DraftField::Code => "Paste your code here...",
        }
    }

    pub fn next(&self) -> DraftField {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> DraftField {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, DraftField::Description | DraftField::Code)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::Language => "language",
            DraftField::Tags => "tags",
            DraftField::Code => "code",
        };
        f.write_str(name)
    }
}

/// Field → message. Empty means the draft is valid.
pub type ValidationErrors = BTreeMap<DraftField, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    PullRequest,
    Commit,
}

impl SubmitAction {
    pub fn success_message(&self) -> &'static str {
        match self {
            SubmitAction::PullRequest => "Pull request created successfully!",
            SubmitAction::Commit => "Snippet committed successfully!",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetDraft {
    pub title: String,
    pub description: String,
    pub language: Option<Language>,
    pub code: String,
    pub tags: String,
}

impl SnippetDraft {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.title.chars().count() > TITLE_MAX_CHARS {
            errors.insert(
                DraftField::Title,
                format!("Title must be less than {TITLE_MAX_CHARS} characters"),
            );
        } else if self.title.trim().is_empty() {
            errors.insert(DraftField::Title, "Title is required".to_string());
        }

        if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.insert(
                DraftField::Description,
                format!("Description must be less than {DESCRIPTION_MAX_CHARS} characters"),
            );
        } else if self.description.trim().is_empty() {
            errors.insert(
                DraftField::Description,
                "Description is required".to_string(),
            );
        }

        if self.language.is_none() {
            errors.insert(DraftField::Language, "Language is required".to_string());
        }

        if self.code.trim().is_empty() {
            errors.insert(DraftField::Code, "Code is required".to_string());
        }

        errors
    }

    /// Tags split on commas and trimmed, blanks dropped.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }

    /// Mutable text of a field. `Language` has no text buffer.
    pub fn text_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Title => Some(&mut self.title),
            DraftField::Description => Some(&mut self.description),
            DraftField::Tags => Some(&mut self.tags),
            DraftField::Code => Some(&mut self.code),
            DraftField::Language => None,
        }
    }

    pub fn text(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Title => Some(&self.title),
            DraftField::Description => Some(&self.description),
            DraftField::Tags => Some(&self.tags),
            DraftField::Code => Some(&self.code),
            DraftField::Language => None,
        }
    }
}
