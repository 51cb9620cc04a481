use crate::models::{Language, Snippet};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// `<lowercased title, whitespace runs as hyphens>.<language identifier>`
pub fn download_file_name(title: &str, language: Language) -> String {
    let slug = WHITESPACE_RUN.replace_all(&title.to_lowercase(), "-").into_owned();
    format!("{}.{}", slug, language.identifier())
}

/// Write the snippet's raw code into `dir` and return the written path.
pub fn save_download(dir: &Path, snippet: &Snippet) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create download directory {}", dir.display()))?;

    let path = dir.join(download_file_name(&snippet.title, snippet.language));
    fs::write(&path, &snippet.code)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

/// Iframe markup pointing at `location`
pub fn embed_markup(location: &str) -> String {
    format!(r#"<iframe src="{location}" width="100%" height="400"></iframe>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("CSS Gradient Button", Language::CSS, "css-gradient-button.CSS")]
    #[case(
        "React Custom Hook - useLocalStorage",
        Language::TypeScript,
        "react-custom-hook---uselocalstorage.TypeScript"
    )]
    #[case("  Tabs\tand   spaces ", Language::Shell, "-tabs-and-spaces-.Shell")]
    fn file_names_follow_the_slug_rule(
        #[case] title: &str,
        #[case] language: Language,
        #[case] expected: &str,
    ) {
        assert_eq!(download_file_name(title, language), expected);
    }

    #[test]
    fn download_writes_raw_code() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin().unwrap();
        let snippet = catalog.get("6").unwrap();

        let path = save_download(&dir.path().join("nested"), snippet).unwrap();

        assert_eq!(path.file_name().unwrap(), "sql-find-duplicates.SQL");
        assert_eq!(fs::read_to_string(path).unwrap(), snippet.code);
    }

    #[test]
    fn embed_references_the_location() {
        assert_eq!(
            embed_markup("http://localhost:8080/?lang=SQL"),
            r#"<iframe src="http://localhost:8080/?lang=SQL" width="100%" height="400"></iframe>"#
        );
    }
}
