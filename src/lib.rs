//! snipshelf - Code Snippet Gallery
//!
//! A terminal gallery for browsing, searching and sharing code snippets. The
//! listing filters by free text and language, a detail overlay offers copy,
//! download and embed, and an add-snippet form validates drafts before a
//! simulated submission.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod ui;
