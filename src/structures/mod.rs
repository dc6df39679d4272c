//! Visualized data structures
//!
//! Each structure is a small table of behavior plugged into the generic
//! [`Sequencer`](crate::sequencer::Sequencer): which operations exist, how many
//! animation steps each takes, what net [`Effect`] it has on the collection,
//! and what the render projection should emphasize at every step.
//!
//! - [`LinkedList`]: traverse / insert / delete over an unbounded list
//! - [`Queue`]: enqueue / dequeue over a fixed-capacity array queue
//! - [`Vector`]: push back / insert / erase / sort / reverse over a growable array

pub mod linked_list;
pub mod queue;
pub mod vector;

pub use linked_list::{LinkedList, ListOp};
pub use queue::{Queue, QueueOp};
pub use vector::{Vector, VectorOp};

use crate::collection::{Collection, Effect};
use crate::snippet::Language;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

/// User-supplied operand fields
///
/// Every operation reads only the fields it needs: insert uses both, delete
/// and erase use `position`, enqueue and push back use `value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Operands {
    pub value: i64,
    pub position: i64,
}

impl Operands {
    pub fn new(value: i64, position: i64) -> Self {
        Operands { value, position }
    }
}

/// Which operand fields an operation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandUse {
    pub value: bool,
    pub position: bool,
}

impl OperandUse {
    pub const NONE: OperandUse = OperandUse {
        value: false,
        position: false,
    };
    pub const VALUE: OperandUse = OperandUse {
        value: true,
        position: false,
    };
    pub const POSITION: OperandUse = OperandUse {
        value: false,
        position: true,
    };
    pub const BOTH: OperandUse = OperandUse {
        value: true,
        position: true,
    };
}

/// Behavior table for one visualized structure
pub trait Structure {
    /// Closed set of operations this structure animates
    type Op: Copy + Eq + fmt::Debug + fmt::Display + 'static;

    /// Title shown on the tab
    fn name(&self) -> &'static str;

    /// All operations, in selector order
    fn operations(&self) -> &'static [Self::Op];

    /// Operation selected when the page loads
    fn default_operation(&self) -> Self::Op;

    /// Collection restored by a full reset
    fn seed(&self) -> Collection;

    /// Operands the input fields start with
    fn default_operands(&self) -> Operands {
        Operands::default()
    }

    /// Number of discrete steps a run of `op` passes through
    fn step_count(&self, op: Self::Op, collection: &Collection) -> usize;

    /// Net change applied at the terminal tick, if any
    fn effect(&self, op: Self::Op, operands: Operands) -> Option<Effect>;

    /// Steps during which the display shows the effect ahead of the mutation
    fn preview_steps(&self, op: Self::Op) -> Range<usize>;

    /// Element positions to emphasize at `step`, indexed into `display`
    fn highlights(
        &self,
        op: Self::Op,
        step: usize,
        operands: Operands,
        before: &Collection,
        display: &Collection,
    ) -> BTreeSet<usize>;

    /// Index of the node whose outgoing link is emphasized
    fn link(&self, _op: Self::Op, _step: usize) -> Option<usize> {
        None
    }

    /// Element shown detached from the collection ("created, not yet linked")
    fn pending(&self, _op: Self::Op, _step: usize, _operands: Operands) -> Option<i64> {
        None
    }

    /// Ordered phase descriptions; the projection indexes them by step
    fn status_lines(&self, op: Self::Op, operands: Operands, collection: &Collection)
        -> Vec<String>;

    /// Whether the start control is enabled for `op` on `collection`
    fn admits(&self, _op: Self::Op, _operands: Operands, _collection: &Collection) -> bool {
        true
    }

    /// Which operand fields `op` reads
    fn operand_use(&self, op: Self::Op) -> OperandUse;

    /// The collection rendered as a code snippet in `language`
    fn snippet(&self, collection: &Collection, language: Language) -> String;
}
