pub mod catalog;
pub mod draft;
pub mod export;
pub mod filter;
pub mod language;
pub mod location;
pub mod snippet;

pub use catalog::Catalog;
pub use draft::{DraftField, SnippetDraft, SubmitAction, ValidationErrors};
pub use export::{download_file_name, embed_markup, save_download};
pub use filter::FilterState;
pub use language::Language;
pub use location::{Location, Route};
pub use snippet::Snippet;
