//! Render projection
//!
//! Pure functions from `(collection, operation, step, operands)` to what the
//! UI should draw at that instant. Nothing here mutates sequencer state.

use crate::collection::Collection;
use crate::structures::{Operands, Structure};
use std::collections::BTreeSet;

/// One drawable instant of an animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Collection as it should appear, including any preview splice
    pub display: Collection,
    /// Indices into `display` to emphasize
    pub highlighted: BTreeSet<usize>,
    /// Node whose outgoing link is emphasized
    pub link: Option<usize>,
    /// Detached element shown next to the collection
    pub pending: Option<i64>,
    /// Phase description for this step
    pub status: String,
    pub step: usize,
    pub step_count: usize,
    pub running: bool,
}

/// Collection to display at `step`
///
/// Inside the structure's preview window the operation's effect is shown
/// ahead of time; the sequencer applies the very same effect at the terminal
/// tick.
pub fn preview_at<S: Structure>(
    structure: &S,
    collection: &Collection,
    op: S::Op,
    step: usize,
    operands: Operands,
) -> Collection {
    match structure.effect(op, operands) {
        Some(effect) if structure.preview_steps(op).contains(&step) => collection.apply(effect),
        _ => collection.clone(),
    }
}

/// Phase description: `lines[min(step, lines.len() - 1)]`
pub fn status_text(lines: &[String], step: usize) -> String {
    lines
        .get(step.min(lines.len().saturating_sub(1)))
        .cloned()
        .unwrap_or_default()
}

/// Full projection of one instant
pub fn project<S: Structure>(
    structure: &S,
    collection: &Collection,
    op: S::Op,
    step: usize,
    operands: Operands,
    running: bool,
) -> Frame {
    let display = preview_at(structure, collection, op, step, operands);
    let highlighted = structure
        .highlights(op, step, operands, collection, &display)
        .into_iter()
        .filter(|&i| i < display.len())
        .collect();
    let link = structure
        .link(op, step)
        .filter(|&i| i + 1 < display.len());
    let lines = structure.status_lines(op, operands, collection);

    Frame {
        highlighted,
        link,
        pending: structure.pending(op, step, operands),
        status: status_text(&lines, step),
        step,
        step_count: structure.step_count(op, collection),
        running,
        display,
    }
}
