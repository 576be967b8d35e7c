//! Selection Model
//!
//! An ephemeral half-open byte range into the document's flattened text.
//! Selections are consumed once per formatting call and never stored.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::models::Document;

/// A half-open `[start, end)` range of byte offsets into the document text.
///
/// Offsets are UTF-8 byte positions and must fall on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Selection {
    /// Create a new selection
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if the selection covers no text
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the selection in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Validate the selection against a document.
    ///
    /// Fails with [`Error::InvalidSelection`] when `start > end`, either
    /// offset is out of bounds, or an offset does not land on a char
    /// boundary of the flattened text. An empty in-bounds selection is
    /// valid (the applier treats it as a no-op).
    pub fn validate(&self, document: &Document) -> Result<()> {
        let len = document.len();
        if self.start > self.end
            || self.end > len
            || !document.is_char_boundary(self.start)
            || !document.is_char_boundary(self.end)
        {
            return Err(Error::InvalidSelection {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(())
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
