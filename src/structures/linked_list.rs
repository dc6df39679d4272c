//! Singly linked list visualization
//!
//! The list is simulated over a plain [`Collection`]; nodes are drawn in order
//! and terminated by `NULL`.

use super::{OperandUse, Operands, Structure};
use crate::collection::{Collection, Effect};
use crate::snippet::{join_values, Language};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

/// Default list contents
pub const DEFAULT_SEED: [i64; 3] = [10, 20, 30];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOp {
    Traverse,
    Insert,
    Delete,
}

impl fmt::Display for ListOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListOp::Traverse => "Traverse",
            ListOp::Insert => "Insert",
            ListOp::Delete => "Delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct LinkedList {
    seed: Vec<i64>,
}

impl LinkedList {
    pub fn new(seed: Vec<i64>) -> Self {
        LinkedList { seed }
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new(DEFAULT_SEED.to_vec())
    }
}

impl Structure for LinkedList {
    type Op = ListOp;

    fn name(&self) -> &'static str {
        "Linked List"
    }

    fn operations(&self) -> &'static [ListOp] {
        &[ListOp::Traverse, ListOp::Insert, ListOp::Delete]
    }

    fn default_operation(&self) -> ListOp {
        ListOp::Traverse
    }

    fn seed(&self) -> Collection {
        Collection::unbounded(self.seed.clone())
    }

    fn default_operands(&self) -> Operands {
        Operands::new(15, 1)
    }

    fn step_count(&self, op: ListOp, collection: &Collection) -> usize {
        match op {
            ListOp::Traverse => collection.len() + 1,
            ListOp::Insert => 4,
            ListOp::Delete => 3,
        }
    }

    fn effect(&self, op: ListOp, operands: Operands) -> Option<Effect> {
        match op {
            ListOp::Traverse => None,
            ListOp::Insert => Some(Effect::InsertAt {
                position: operands.position,
                value: operands.value,
            }),
            ListOp::Delete => Some(Effect::RemoveAt {
                position: operands.position,
            }),
        }
    }

    fn preview_steps(&self, op: ListOp) -> Range<usize> {
        match op {
            ListOp::Traverse => 0..0,
            ListOp::Insert => 3..4,
            ListOp::Delete => 2..3,
        }
    }

    fn highlights(
        &self,
        op: ListOp,
        step: usize,
        operands: Operands,
        _before: &Collection,
        _display: &Collection,
    ) -> BTreeSet<usize> {
        let p = operands.position;
        let candidates: Vec<i64> = match (op, step) {
            (ListOp::Traverse, s) if s >= 1 => vec![s as i64 - 1],
            (ListOp::Insert, 2) => vec![p - 1],
            (ListOp::Insert, 3) => vec![p],
            // Neighbors that now link past the removed node
            (ListOp::Delete, 2) => vec![p - 1, p],
            _ => Vec::new(),
        };
        candidates
            .into_iter()
            .filter_map(|i| usize::try_from(i).ok())
            .collect()
    }

    fn link(&self, op: ListOp, step: usize) -> Option<usize> {
        match op {
            ListOp::Traverse if step >= 1 => Some(step - 1),
            _ => None,
        }
    }

    fn pending(&self, op: ListOp, step: usize, operands: Operands) -> Option<i64> {
        (op == ListOp::Insert && step == 1).then_some(operands.value)
    }

    fn status_lines(&self, op: ListOp, operands: Operands, collection: &Collection) -> Vec<String> {
        let (v, p) = (operands.value, operands.position);
        match op {
            ListOp::Traverse => {
                let mut lines = vec!["Starting traversal from head".to_string()];
                lines.extend(
                    collection
                        .values()
                        .iter()
                        .enumerate()
                        .map(|(i, value)| format!("Visiting node at position {} with value {}", i, value)),
                );
                lines.push("Traversal complete".to_string());
                lines
            }
            ListOp::Insert => vec![
                format!("Preparing to insert new node with value {}", v),
                format!("Creating new node with value {}", v),
                format!("Finding position {} for insertion", p),
                format!("Inserting new node at position {}", p),
                "Insertion complete".to_string(),
            ],
            ListOp::Delete => vec![
                format!("Preparing to delete node at position {}", p),
                format!("Finding position {} for deletion", p),
                format!("Updating references to skip node at position {}", p),
                "Deletion complete".to_string(),
            ],
        }
    }

    fn operand_use(&self, op: ListOp) -> OperandUse {
        match op {
            ListOp::Traverse => OperandUse::NONE,
            ListOp::Insert => OperandUse::BOTH,
            ListOp::Delete => OperandUse::POSITION,
        }
    }

    fn snippet(&self, collection: &Collection, language: Language) -> String {
        let values = collection.values();
        let (decl, null) = match language {
            Language::Cpp => ("LinkedList list;", "NULL"),
            Language::Java => ("LinkedList list = new LinkedList();", "null"),
        };
        let mut out = String::from("// Current Linked List State\n");
        out.push_str(decl);
        out.push('\n');
        for v in values {
            out.push_str(&format!("list.insertAtTail({});\n", v));
        }
        let chain = if values.is_empty() {
            null.to_string()
        } else {
            format!("{} -> {}", join_values(values, " -> "), null)
        };
        out.push_str(&format!("// List: {}\n", chain));
        out.push_str(&format!("// Size: {} nodes", values.len()));
        out
    }
}
