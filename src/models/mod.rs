//! Core data models for ansimark
//!
//! This module contains the data structures that represent the annotated
//! document: styled runs, the run sequence itself, and the ephemeral
//! selection consumed by the formatting applier.

pub mod document;
pub mod run;
pub mod selection;

// Re-exports for convenience
pub use document::Document;
pub use run::Run;
pub use selection::Selection;
