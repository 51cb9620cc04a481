use crate::error::{Result, ShelfError};
use arboard::Clipboard;

/// Write-only clipboard target for copy and embed.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard. Opened per write so a missing display server only
/// fails the action that needed it.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().map_err(|e| ShelfError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ShelfError::Clipboard(e.to_string()))
    }
}

/// Keeps every write in memory. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}
