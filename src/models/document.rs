//! Annotated Document Model
//!
//! The canonical source of truth for what formatting applies to what text:
//! an ordered sequence of runs that partitions the full document text.
//! Runs are non-empty, cover the text with no gaps and no overlaps, and
//! are mutated only by the formatting applier and the reset operation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Run;

/// An ordered sequence of styled runs over a block of plain text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub(crate) runs: Vec<Run>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from plain text as a single unstyled run.
    ///
    /// Empty text yields a document with no runs.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run::plain(text)]
        };
        Self { runs }
    }

    /// The runs in document order
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Total length of the document text in bytes
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// Check if the document holds no text
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The full plain text, reassembled from the runs in order
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.len());
        for run in &self.runs {
            text.push_str(&run.text);
        }
        text
    }

    /// Check whether a byte offset into the flattened text lands on a
    /// char boundary. The document length itself is a valid boundary.
    pub fn is_char_boundary(&self, offset: usize) -> bool {
        let mut start = 0;
        for run in &self.runs {
            let end = start + run.len();
            if offset < end {
                return run.text.is_char_boundary(offset - start);
            }
            start = end;
        }
        offset == start
    }

    /// Strip all formatting, collapsing the document to one plain run
    /// over the full text. Idempotent; discards run boundaries and
    /// attribute data irrecoverably.
    pub fn reset(&mut self) {
        if self.runs.len() == 1 && !self.runs[0].has_attributes() {
            return;
        }
        let text = self.text();
        self.runs.clear();
        if !text.is_empty() {
            self.runs.push(Run::plain(text));
        }
    }

    /// Replace the document text, dropping all formatting
    pub fn load_text(&mut self, text: impl Into<String>) {
        *self = Self::from_text(text);
    }

    /// Serialize the document to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a document from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
