//! Address-bar state
//!
//! The gallery keeps a browser-style location in sync with the filter so it can be
//! shown, copied into embed markup, and used to restore a filtered view on startup.

use crate::models::{FilterState, Language};
use std::fmt;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Listing,
    AddSnippet,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Listing => "/",
            Route::AddSnippet => "/add",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    base_url: String,
    pub route: Route,
    pub filter: FilterState,
}

impl Location {
    pub fn new(base_url: &str, route: Route, filter: FilterState) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            route,
            filter,
        }
    }

    /// `q` then `lang`, each omitted when empty/unset.
    pub fn query_string(filter: &FilterState) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !filter.query.is_empty() {
            serializer.append_pair("q", &filter.query);
        }
        if let Some(lang) = filter.language {
            serializer.append_pair("lang", lang.identifier());
        }
        serializer.finish()
    }

    /// Filter state from a query string (with or without the leading `?`).
    /// Unknown `lang` values leave the language unset.
    pub fn parse_query(query: &str) -> FilterState {
        let mut filter = FilterState::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "q" => filter.query = value.into_owned(),
                "lang" => match value.parse::<Language>() {
                    Ok(lang) => filter.language = Some(lang),
                    Err(e) => tracing::warn!(error = %e, "ignoring lang parameter"),
                },
                _ => {}
            }
        }
        filter
    }

    /// Parse a full location such as `http://host/add?q=x`. Anything before the
    /// path is ignored; a path of `/add` selects the add route.
    pub fn parse(base_url: &str, location: &str) -> Self {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, query),
            None => (location, ""),
        };
        let route = if path.trim_end_matches('/').ends_with("/add") {
            Route::AddSnippet
        } else {
            Route::Listing
        };
        Self::new(base_url, route, Self::parse_query(query))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base_url, self.route.path())?;
        let query = Self::query_string(&self.filter);
        if !query.is_empty() {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const BASE: &str = "http://localhost:8080";

    #[rstest]
    #[case(FilterState::default(), "http://localhost:8080/")]
    #[case(FilterState::new("python", None), "http://localhost:8080/?q=python")]
    #[case(FilterState::new("", Some(Language::CSS)), "http://localhost:8080/?lang=CSS")]
    #[case(
        FilterState::new("api fetch&co", Some(Language::TypeScript)),
        "http://localhost:8080/?q=api+fetch%26co&lang=TypeScript"
    )]
    fn renders_only_set_parameters(#[case] filter: FilterState, #[case] expected: &str) {
        assert_eq!(
            Location::new(BASE, Route::Listing, filter).to_string(),
            expected
        );
    }

    #[test]
    fn trailing_slash_on_base_is_normalised() {
        let location = Location::new("http://x/", Route::AddSnippet, FilterState::default());
        assert_eq!(location.to_string(), "http://x/add");
    }

    #[test]
    fn parses_query_and_language() {
        let location = Location::parse(BASE, "http://localhost:8080/?q=api+fetch%26co&lang=css");
        assert_eq!(location.route, Route::Listing);
        assert_eq!(
            location.filter,
            FilterState::new("api fetch&co", Some(Language::CSS))
        );
    }

    #[test]
    fn unknown_language_is_dropped() {
        let filter = Location::parse_query("?q=x&lang=Cobol");
        assert_eq!(filter, FilterState::new("x", None));
    }

    #[test]
    fn add_route_is_recognised() {
        assert_eq!(Location::parse(BASE, "/add").route, Route::AddSnippet);
        assert_eq!(Location::parse(BASE, "/").route, Route::Listing);
    }
}
