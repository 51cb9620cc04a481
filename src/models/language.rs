use crate::error::ShelfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of languages a snippet can be tagged with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    React,
    CSS,
    HTML,
    SQL,
    Shell,
}

impl Language {
    /// Filter bar and language picker order
    pub const ALL: [Language; 8] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::React,
        Language::CSS,
        Language::HTML,
        Language::SQL,
        Language::Shell,
    ];

    /// The identifier used in locations and as the download extension.
    pub fn identifier(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::React => "React",
            Language::CSS => "CSS",
            Language::HTML => "HTML",
            Language::SQL => "SQL",
            Language::Shell => "Shell",
        }
    }

    /// Upper-cased badge text shown on cards and in the detail overlay
    pub fn badge(&self) -> String {
        self.identifier().to_uppercase()
    }

    /// Name of the syntect syntax used to highlight code in this language
    pub fn syntax_name(&self) -> &'static str {
        match self {
            Language::JavaScript | Language::React => "JavaScript",
            // the default syntax set ships no TypeScript grammar
            Language::TypeScript => "JavaScript",
            Language::Python => "Python",
            Language::CSS => "CSS",
            Language::HTML => "HTML",
            Language::SQL => "SQL",
            Language::Shell => "Bourne Again Shell (bash)",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Language::JavaScript => "\u{e74e}",
            Language::TypeScript => "\u{e628}",
            Language::Python => "\u{e73c}",
            Language::React => "\u{e7ba}",
            Language::CSS => "\u{e749}",
            Language::HTML => "\u{e736}",
            Language::SQL => "\u{e706}",
            Language::Shell => "\u{e795}",
        }
    }

    /// Next language in filter order, `None` meaning "All".
    pub fn cycle_next(current: Option<Language>) -> Option<Language> {
        match current {
            None => Some(Self::ALL[0]),
            Some(lang) => Self::ALL.get(lang.position() + 1).copied(),
        }
    }

    /// Previous language in filter order, `None` meaning "All".
    pub fn cycle_previous(current: Option<Language>) -> Option<Language> {
        match current {
            None => Self::ALL.last().copied(),
            Some(lang) => lang.position().checked_sub(1).map(|i| Self::ALL[i]),
        }
    }

    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|l| l == self).unwrap_or(0)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Language {
    type Err = ShelfError;

    /// Case-insensitive match against the identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .find(|lang| lang.identifier().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| ShelfError::UnknownLanguage(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("CSS", Language::CSS)]
    #[case("css", Language::CSS)]
    #[case(" typescript ", Language::TypeScript)]
    #[case("Shell", Language::Shell)]
    fn parses_identifiers_case_insensitively(#[case] input: &str, #[case] expected: Language) {
        assert_eq!(input.parse::<Language>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_language() {
        let err = "Rust".parse::<Language>().unwrap_err();
        assert!(matches!(err, ShelfError::UnknownLanguage(name) if name == "Rust"));
    }

    #[test]
    fn cycling_walks_through_all_and_back_to_none() {
        let mut current = None;
        let mut seen = Vec::new();
        loop {
            current = Language::cycle_next(current);
            match current {
                Some(lang) => seen.push(lang),
                None => break,
            }
        }
        assert_eq!(seen, Language::ALL.to_vec());
        assert_eq!(Language::cycle_previous(None), Some(Language::Shell));
        assert_eq!(Language::cycle_previous(Some(Language::JavaScript)), None);
    }
}
