use crate::models::{Language, Snippet};

/// Query plus optional language. Visible snippets are derived on read, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub language: Option<Language>,
}

impl FilterState {
    pub fn new(query: impl Into<String>, language: Option<Language>) -> Self {
        Self {
            query: query.into(),
            language,
        }
    }

    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    pub fn with_language(self, language: Option<Language>) -> Self {
        Self { language, ..self }
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.language.is_some()
    }

    pub fn matches(&self, snippet: &Snippet) -> bool {
        self.language.is_none_or(|lang| snippet.language == lang)
            && snippet.matches_lowercase(&self.query.to_lowercase())
    }

    /// Matching snippets in catalog order.
    pub fn apply<'a>(&self, snippets: &'a [Snippet]) -> Vec<&'a Snippet> {
        let needle = self.query.to_lowercase();
        snippets
            .iter()
            .filter(|s| self.language.is_none_or(|lang| s.language == lang))
            .filter(|s| s.matches_lowercase(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn titles(filter: &FilterState) -> Vec<String> {
        let catalog = Catalog::builtin().unwrap();
        filter
            .apply(catalog.snippets())
            .into_iter()
            .map(|s| s.title.clone())
            .collect()
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let all: Vec<&Snippet> = catalog.snippets().iter().collect();
        assert_eq!(FilterState::default().apply(catalog.snippets()), all);
    }

    #[test]
    fn query_python_finds_only_the_email_validator() {
        assert_eq!(
            titles(&FilterState::new("python", None)),
            vec!["Python Email Validator".to_string()]
        );
    }

    #[test]
    fn css_language_finds_only_the_gradient_button() {
        assert_eq!(
            titles(&FilterState::new("", Some(Language::CSS))),
            vec!["CSS Gradient Button".to_string()]
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Language::JavaScript))]
    #[case(Some(Language::Shell))]
    fn nonsense_query_finds_nothing(#[case] language: Option<Language>) {
        assert!(titles(&FilterState::new("nonexistent-zzz", language)).is_empty());
    }

    #[test]
    fn query_and_language_combine_with_and() {
        // "react" hits a TypeScript hook through its code and the React skeleton
        assert_eq!(
            titles(&FilterState::new("REACT", None)),
            vec![
                "React Custom Hook - useLocalStorage".to_string(),
                "React Loading Skeleton".to_string()
            ]
        );
        assert_eq!(
            titles(&FilterState::new("react", Some(Language::TypeScript))),
            vec!["React Custom Hook - useLocalStorage".to_string()]
        );
    }

    #[test]
    fn every_result_satisfies_the_predicate_and_nothing_else_does() {
        let catalog = Catalog::builtin().unwrap();
        for query in ["usage", "git", "", "Email", "a"] {
            for language in std::iter::once(None).chain(Language::ALL.into_iter().map(Some)) {
                let filter = FilterState::new(query, language);
                let result = filter.apply(catalog.snippets());
                for snippet in catalog.snippets() {
                    let expected = filter.matches(snippet);
                    let present = result.iter().any(|s| s.id == snippet.id);
                    assert_eq!(present, expected, "query={query:?} lang={language:?}");
                }
            }
        }
    }

    #[test]
    fn transitions_keep_the_other_field() {
        let filter = FilterState::default()
            .with_query("git")
            .with_language(Some(Language::Shell));
        assert_eq!(filter, FilterState::new("git", Some(Language::Shell)));
        assert!(filter.is_active());
        assert_eq!(filter.with_language(None).query, "git");
        assert!(!FilterState::cleared().is_active());
    }
}
