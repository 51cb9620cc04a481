use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config file {} does not exist", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("duplicate snippet id `{0}` in catalog")]
    DuplicateId(String),

    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    #[error("no snippet with id `{0}`")]
    SnippetNotFound(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
