//! ansimark - text annotation and ANSI serialization engine
//!
//! This library lets a caller mark up a block of plain text with colors,
//! background colors, and text styles, then flatten the markup into ANSI
//! SGR escape sequences suitable for pasting into a chat client that
//! renders ANSI inside a fenced code block.
//!
//! ## Features
//!
//! - **Run model:** Formatting is stored as an ordered partition of styled
//!   runs over the text, never as escape bytes mixed into it
//! - **Overlap handling:** Applying a style to a span splits runs at the
//!   selection boundaries and preserves pre-existing styles underneath
//! - **Same-kind replacement:** A new foreground color replaces the old
//!   one on the affected text instead of stacking
//! - **Deterministic output:** Serializing an unmutated document twice
//!   yields byte-identical escape-coded strings
//!
//! ## Module Organization
//!
//! - [`models`] - Data structures (Document, Run, Selection)
//! - [`styles`] - Static registry of selectable colors and text styles
//! - [`format`] - The formatting applier (run splitting and merging)
//! - [`serialize`] - ANSI SGR serialization and chat fencing
//! - [`session`] - Single-owner session facade over a document
//! - [`mod@error`] - Error types and Result alias
//!
//! ## Quick Start
//!
//! ```
//! use ansimark::{Selection, Session, StyleAttribute};
//!
//! # fn main() -> ansimark::Result<()> {
//! let mut session = Session::with_text("hello world");
//! session.apply(Selection::new(0, 5), StyleAttribute::foreground(31))?;
//!
//! assert_eq!(session.serialize(), "\x1b[31mhello\x1b[0m world");
//!
//! // Chat-ready payload, fenced for the renderer
//! let payload = session.clipboard_payload();
//! assert!(payload.starts_with("```ansi\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Every operation is a synchronous, non-suspending call over plain data.
//! The core holds no locks and assumes single-writer, single-reader access;
//! a multi-threaded host must serialize calls itself.

pub mod error;
pub mod format;
pub mod models;
pub mod serialize;
pub mod session;
pub mod styles;

// Re-exports for convenience
pub use error::{Error, Result};
pub use models::{Document, Run, Selection};
pub use serialize::{serialize, wrap_for_chat};
pub use session::Session;
pub use styles::{FontEffect, RenderHint, StyleAttribute, StyleEntry, StyleKind};
