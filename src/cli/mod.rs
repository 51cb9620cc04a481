//! CLI Module for snipshelf
//! Lets the catalog be queried from a plain shell without launching the TUI.
//! With no subcommand the binary starts the interactive gallery.

pub mod commands;

use crate::config::Config;
use crate::models::{Catalog, Language};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "snipshelf", version, about = "Browse, search and share code snippets")]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start at a location, e.g. "/?q=hook&lang=TypeScript" or "/add"
    #[arg(long, value_name = "URL", conflicts_with_all = ["q", "lang"])]
    pub location: Option<String>,

    /// Initial search text
    #[arg(long)]
    pub q: Option<String>,

    /// Initial language filter
    #[arg(long)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// List snippets, optionally filtered
    #[command(visible_alias = "ls")]
    List {
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Show one snippet with its code
    #[command(visible_aliases = ["view", "cat"])]
    Show { id: String },
    /// Languages with the number of snippets in each
    Languages,
    /// Save a snippet's code as <slug>.<language>
    Download {
        id: String,
        /// Target directory (defaults to the configured download_dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print iframe markup for a gallery location
    Embed {
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Check a draft against the add-snippet rules; exits 1 when invalid
    Validate {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        language: Option<Language>,
        #[arg(long, default_value = "")]
        code: String,
        /// Comma separated
        #[arg(long, default_value = "")]
        tags: String,
    },
}

/// Run a subcommand against the loaded catalog.
pub fn execute(action: Action, config: &Config, catalog: &Catalog) -> anyhow::Result<ExitCode> {
    tracing::debug!(?action, "running cli command");
    match action {
        Action::List { q, lang } => commands::list(catalog, q.as_deref().unwrap_or(""), lang),
        Action::Show { id } => commands::show(catalog, &id)?,
        Action::Languages => commands::languages(catalog),
        Action::Download { id, dir } => {
            let dir = dir.unwrap_or_else(|| config.download_dir.clone());
            commands::download(catalog, &id, &dir)?;
        }
        Action::Embed { q, lang } => commands::embed(config, q.unwrap_or_default(), lang),
        Action::Validate {
            title,
            description,
            language,
            code,
            tags,
        } => {
            let draft = crate::models::SnippetDraft {
                title,
                description,
                language,
                code,
                tags,
            };
            if !commands::validate(&draft) {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_filters() {
        let cli = Cli::try_parse_from(["snipshelf", "list", "--q", "hook", "--lang", "typescript"])
            .unwrap();
        match cli.action {
            Some(Action::List { q, lang }) => {
                assert_eq!(q.as_deref(), Some("hook"));
                assert_eq!(lang, Some(Language::TypeScript));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["snipshelf", "list", "--lang", "cobol"]).is_err());
    }

    #[test]
    fn location_conflicts_with_filter_flags() {
        assert!(Cli::try_parse_from(["snipshelf", "--location", "/", "--q", "x"]).is_err());
    }

    #[test]
    fn invalid_draft_fails_validation() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let code = execute(
            Action::Validate {
                title: String::new(),
                description: String::new(),
                language: None,
                code: String::new(),
                tags: String::new(),
            },
            &config,
            &catalog,
        )
        .unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn download_writes_into_given_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        execute(
            Action::Download {
                id: "2".into(),
                dir: Some(dir.path().to_path_buf()),
            },
            &config,
            &catalog,
        )
        .unwrap();
        assert!(dir.path().join("python-email-validator.Python").exists());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let catalog = Catalog::builtin().unwrap();
        assert!(execute(Action::Show { id: "99".into() }, &Config::default(), &catalog).is_err());
    }
}
