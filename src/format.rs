//! Formatting Applier
//!
//! Splits and merges document runs so a style command applies exactly to
//! the selected span, preserving pre-existing styles on the overlapping
//! portions. A partial overlap splits a run into up to three pieces:
//! untouched head, styled middle, untouched tail.

use tracing::{debug, trace};

use crate::error::Result;
use crate::models::{Document, Run, Selection};
use crate::styles::{self, StyleAttribute};

/// Apply a style attribute to the selected span of the document.
///
/// Runs overlapping the selection are split at the selection boundaries
/// and the attribute is upserted on every run fully inside it, replacing
/// any existing attribute of the same kind. Runs outside the selection
/// are left untouched. An empty selection is a no-op.
///
/// Validation happens before any mutation: on error the document is
/// exactly as it was before the call.
pub fn apply(
    document: &mut Document,
    selection: Selection,
    attribute: StyleAttribute,
) -> Result<()> {
    selection.validate(document)?;
    styles::lookup(attribute.kind, attribute.code)?;

    if selection.is_empty() {
        trace!(
            "Empty selection at {}, nothing to format",
            selection.start
        );
        return Ok(());
    }

    let old_runs = std::mem::take(&mut document.runs);
    let mut rebuilt = Vec::with_capacity(old_runs.len() + 2);
    let mut offset = 0;

    for mut run in old_runs {
        let run_start = offset;
        let run_end = offset + run.len();
        offset = run_end;

        // Disjoint: keep the run as-is
        if run_end <= selection.start || run_start >= selection.end {
            rebuilt.push(run);
            continue;
        }

        let split_start = selection.start.max(run_start) - run_start;
        let split_end = selection.end.min(run_end) - run_start;

        // Selection covers the whole run: upsert in place, no split
        if split_start == 0 && split_end == run.len() {
            run.upsert_attribute(attribute);
            rebuilt.push(run);
            continue;
        }

        if split_start > 0 {
            rebuilt.push(Run::styled(
                &run.text[..split_start],
                run.attributes.clone(),
            ));
        }

        let mut middle = Run::styled(&run.text[split_start..split_end], run.attributes.clone());
        middle.upsert_attribute(attribute);
        rebuilt.push(middle);

        if split_end < run.len() {
            rebuilt.push(Run::styled(&run.text[split_end..], run.attributes));
        }
    }

    document.runs = rebuilt;
    debug!(
        "Applied {} code {} to {}..{} ({} runs)",
        attribute.kind,
        attribute.code,
        selection.start,
        selection.end,
        document.runs.len()
    );
    Ok(())
}
