use crate::config::Config;
use crate::models::{
    Catalog, FilterState, Language, Location, Route, Snippet, SnippetDraft, embed_markup,
    save_download,
};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

fn bar() -> colored::ColoredString {
    "┃".bright_magenta()
}

fn rule(width: usize) {
    println!("{}", "─".repeat(width).bright_magenta());
}

/// Prints every snippet passing the filter, one block per snippet
pub fn list(catalog: &Catalog, query: &str, language: Option<Language>) {
    let filter = FilterState::new(query, language);
    let matches = filter.apply(catalog.snippets());

    println!(
        "{}  {} {}",
        bar(),
        "SNIPPETS".bright_green().bold(),
        format!("({} of {})", matches.len(), catalog.len()).bright_black()
    );
    rule(60);

    if matches.is_empty() {
        println!("{}  No snippets found matching your criteria", bar());
        return;
    }

    for snippet in matches {
        println!(
            "{}  {} {} {}",
            bar(),
            format!("[{}]", snippet.id).bright_yellow(),
            snippet.title.bright_white().bold(),
            snippet.language.badge().bright_cyan()
        );
        println!("{}      {}", bar(), snippet.description);
        println!(
            "{}      {}",
            bar(),
            format!("{}  {}", snippet.byline(), snippet.display_date()).bright_black()
        );
    }
}

/// Shows the full content of one snippet
pub fn show(catalog: &Catalog, id: &str) -> Result<()> {
    let snippet = catalog.require(id)?;
    display_snippet(snippet);
    Ok(())
}

fn display_snippet(snippet: &Snippet) {
    println!(
        "{}  {} {}",
        bar(),
        "SNIPPET".bright_green().bold(),
        snippet.title.bold()
    );
    rule(60);
    println!("{}  {}: {}", bar(), "Language".bright_yellow(), snippet.language);
    println!("{}  {}: {}", bar(), "Description".bright_cyan(), snippet.description);
    println!("{}  {}: {}", bar(), "Author".bright_blue(), snippet.author);
    println!("{}  {}: {}", bar(), "Date".bright_blue(), snippet.display_date());
    println!("{}  {}: {}", bar(), "ID".bright_black(), snippet.id);
    rule(60);

    for line in snippet.code.lines() {
        println!("{}  {}", bar(), line);
    }
    rule(60);
}

pub fn languages(catalog: &Catalog) {
    println!("{}  {}", bar(), "LANGUAGES".bright_green().bold());
    rule(40);
    for language in Language::ALL {
        let count = catalog
            .snippets()
            .iter()
            .filter(|s| s.language == language)
            .count();
        println!(
            "{}  {:<12} {}",
            bar(),
            language.identifier().bright_white(),
            count.to_string().bright_yellow()
        );
    }
}

pub fn download(catalog: &Catalog, id: &str, dir: &Path) -> Result<()> {
    let snippet = catalog.require(id)?;
    let path = save_download(dir, snippet)?;
    tracing::info!(path = %path.display(), "snippet downloaded");
    println!(
        "{}  {} {}",
        bar(),
        "Snippet downloaded!".bright_green(),
        path.display().to_string().bright_white()
    );
    Ok(())
}

pub fn embed(config: &Config, query: String, language: Option<Language>) {
    let location = Location::new(
        &config.base_url,
        Route::Listing,
        FilterState::new(query, language),
    );
    println!("{}", embed_markup(&location.to_string()));
}

/// Prints each validation error; returns whether the draft is acceptable.
pub fn validate(draft: &SnippetDraft) -> bool {
    let errors = draft.validate();
    if errors.is_empty() {
        println!("{}  {}", bar(), "Draft is valid".bright_green());
        if !draft.tag_list().is_empty() {
            println!(
                "{}  {}: {}",
                bar(),
                "Tags".bright_cyan(),
                draft.tag_list().join(", ")
            );
        }
        return true;
    }

    println!(
        "{}  {}",
        bar(),
        "Please fix the errors before submitting".bright_red()
    );
    for (field, message) in errors {
        println!("{}  {:<12} {}", bar(), field.label().bright_yellow(), message);
    }
    false
}
