//! Markup Session
//!
//! Owns the annotated document for one editing session and forwards
//! style commands from the UI layer. The session is the single writer;
//! a multi-threaded host must serialize access to it.

use tracing::debug;

use crate::error::Result;
use crate::models::{Document, Selection};
use crate::serialize;
use crate::styles::StyleAttribute;

/// One editing session over a block of annotated text
#[derive(Debug, Clone, Default)]
pub struct Session {
    document: Document,
}

impl Session {
    /// Create a session with an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from initial plain text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            document: Document::from_text(text),
        }
    }

    /// Borrow the session document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The current plain text
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// Replace the session text, dropping all formatting
    pub fn load_text(&mut self, text: impl Into<String>) {
        self.document.load_text(text);
    }

    /// Apply a style command to the selected span
    pub fn apply(&mut self, selection: Selection, attribute: StyleAttribute) -> Result<()> {
        crate::format::apply(&mut self.document, selection, attribute)
    }

    /// Serialize the document into an ANSI escape-coded string
    pub fn serialize(&self) -> String {
        serialize::serialize(&self.document)
    }

    /// The chat-ready clipboard payload: the serialized string wrapped
    /// in an ```ansi fence
    pub fn clipboard_payload(&self) -> String {
        serialize::wrap_for_chat(&self.serialize())
    }

    /// Strip all formatting from the session document
    pub fn reset(&mut self) {
        debug!("Resetting formatting for {} byte document", self.document.len());
        self.document.reset();
    }
}
