//! Styled Run Model
//!
//! A run is a contiguous, non-empty slice of document text together with
//! the set of style attributes active over the whole slice. Attribute
//! insertion order is preserved and drives serialization order.

use serde::{Deserialize, Serialize};

use crate::styles::{StyleAttribute, StyleKind};

/// A contiguous slice of document text with one fixed attribute set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text covered by this run
    pub text: String,

    /// Attributes active over the whole run, in insertion order
    pub attributes: Vec<StyleAttribute>,
}

impl Run {
    /// Create an unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: Vec::new(),
        }
    }

    /// Create a run with a pre-built attribute set
    pub fn styled(text: impl Into<String>, attributes: Vec<StyleAttribute>) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    /// Length of the run text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the run covers no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if any attribute is active on this run
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Get the active attribute of a given kind, if any
    pub fn attribute_of(&self, kind: StyleKind) -> Option<&StyleAttribute> {
        self.attributes.iter().find(|attr| attr.kind == kind)
    }

    /// Insert an attribute, replacing any existing attribute of the same kind.
    ///
    /// Attributes of the same kind are mutually exclusive on a run: a new
    /// foreground color overwrites the old one rather than stacking. A
    /// replaced attribute keeps its position in the insertion order.
    pub fn upsert_attribute(&mut self, attribute: StyleAttribute) {
        match self.attributes.iter_mut().find(|a| a.kind == attribute.kind) {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
    }
}
