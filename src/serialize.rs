//! ANSI Serializer
//!
//! Flattens an annotated document into a single escape-coded string.
//! Each styled run emits one combined SGR prefix (`ESC [ c1 ; c2 ; .. m`,
//! codes in attribute insertion order), its raw text, and the reset
//! suffix `ESC [ 0 m`. Adjacent runs with identical attribute sets are
//! not coalesced; every styled run carries its own prefix/suffix pair
//! so the output format stays stable across run-boundary changes.

use std::fmt::Write;

use crate::models::Document;

/// Control Sequence Introducer
const CSI: &str = "\x1b[";

/// Reset-all-attributes suffix
const RESET: &str = "\x1b[0m";

/// Serialize a document into a single ANSI escape-coded string.
///
/// Unstyled runs emit their raw text with no escape wrapping. The walk
/// follows document order and the result is deterministic: serializing
/// the same document twice yields byte-identical output.
pub fn serialize(document: &Document) -> String {
    let mut out = String::with_capacity(document.len());
    for run in document.runs() {
        if !run.has_attributes() {
            out.push_str(&run.text);
            continue;
        }
        out.push_str(CSI);
        for (i, attr) in run.attributes.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            // Writing into a String cannot fail
            let _ = write!(out, "{}", attr.code);
        }
        out.push('m');
        out.push_str(&run.text);
        out.push_str(RESET);
    }
    out
}

/// Wrap a serialized string in the fenced code block the target chat
/// renderer expects: triple-backtick fence with the `ansi` language tag
/// and a newline on each side of the payload.
pub fn wrap_for_chat(payload: &str) -> String {
    format!("```ansi\n{}\n```", payload)
}
