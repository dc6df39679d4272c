//! Dynamic array visualization with size/capacity bookkeeping

use super::{OperandUse, Operands, Structure};
use crate::collection::{checked_index, clamp_insert_index, Capacity, Collection, Effect};
use crate::snippet::{join_values, Language};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

pub const DEFAULT_SEED: [i64; 9] = [5, 9, 3, 7, 1, 8, 6, 2, 4];
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorOp {
    PushBack,
    Insert,
    Erase,
    Sort,
    Reverse,
}

impl fmt::Display for VectorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VectorOp::PushBack => "Push back",
            VectorOp::Insert => "Insert",
            VectorOp::Erase => "Erase",
            VectorOp::Sort => "Sort",
            VectorOp::Reverse => "Reverse",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Vector {
    seed: Vec<i64>,
    capacity: usize,
}

impl Vector {
    pub fn new(seed: Vec<i64>, capacity: usize) -> Self {
        Vector { seed, capacity }
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new(DEFAULT_SEED.to_vec(), DEFAULT_CAPACITY)
    }
}

impl Structure for Vector {
    type Op = VectorOp;

    fn name(&self) -> &'static str {
        "Vector"
    }

    fn operations(&self) -> &'static [VectorOp] {
        &[
            VectorOp::PushBack,
            VectorOp::Insert,
            VectorOp::Erase,
            VectorOp::Sort,
            VectorOp::Reverse,
        ]
    }

    fn default_operation(&self) -> VectorOp {
        VectorOp::PushBack
    }

    fn seed(&self) -> Collection {
        Collection::new(self.seed.clone(), Capacity::Growable(self.capacity))
    }

    fn default_operands(&self) -> Operands {
        Operands::new(10, 0)
    }

    fn step_count(&self, _op: VectorOp, _collection: &Collection) -> usize {
        3
    }

    fn effect(&self, op: VectorOp, operands: Operands) -> Option<Effect> {
        Some(match op {
            VectorOp::PushBack => Effect::PushBack {
                value: operands.value,
            },
            VectorOp::Insert => Effect::InsertAt {
                position: operands.position,
                value: operands.value,
            },
            VectorOp::Erase => Effect::RemoveAt {
                position: operands.position,
            },
            VectorOp::Sort => Effect::Sort,
            VectorOp::Reverse => Effect::Reverse,
        })
    }

    fn preview_steps(&self, _op: VectorOp) -> Range<usize> {
        2..3
    }

    fn highlights(
        &self,
        op: VectorOp,
        step: usize,
        operands: Operands,
        before: &Collection,
        display: &Collection,
    ) -> BTreeSet<usize> {
        match (op, step) {
            (VectorOp::PushBack, 2) => display.len().checked_sub(1).into_iter().collect(),
            (VectorOp::Insert, 2) => [clamp_insert_index(operands.position, before.len())]
                .into_iter()
                .collect(),
            (VectorOp::Erase, 1) => checked_index(operands.position, before.len())
                .into_iter()
                .collect(),
            (VectorOp::Sort | VectorOp::Reverse, 1 | 2) => (0..display.len()).collect(),
            _ => BTreeSet::new(),
        }
    }

    fn pending(&self, op: VectorOp, step: usize, operands: Operands) -> Option<i64> {
        (step == 1 && matches!(op, VectorOp::PushBack | VectorOp::Insert)).then_some(operands.value)
    }

    fn status_lines(&self, op: VectorOp, operands: Operands, collection: &Collection) -> Vec<String> {
        let (v, p) = (operands.value, operands.position);
        match op {
            VectorOp::PushBack => vec![
                format!("Preparing to push back {}", v),
                format!("Creating element {}", v),
                format!("Placing {} at index {}", v, collection.len()),
                "Push back complete".to_string(),
            ],
            VectorOp::Insert => vec![
                format!("Preparing to insert {} at index {}", v, p),
                format!("Creating element {}", v),
                format!("Shifting elements right from index {}", p),
                "Insert complete".to_string(),
            ],
            VectorOp::Erase => vec![
                format!("Preparing to erase index {}", p),
                format!("Locating element at index {}", p),
                format!("Shifting elements left over index {}", p),
                "Erase complete".to_string(),
            ],
            VectorOp::Sort => vec![
                "Preparing to sort".to_string(),
                "Comparing elements".to_string(),
                "Placing elements in ascending order".to_string(),
                "Sort complete".to_string(),
            ],
            VectorOp::Reverse => vec![
                "Preparing to reverse".to_string(),
                "Pairing elements from both ends".to_string(),
                "Swapping mirrored elements".to_string(),
                "Reverse complete".to_string(),
            ],
        }
    }

    // Index operations only start with an in-range index.
    fn admits(&self, op: VectorOp, operands: Operands, collection: &Collection) -> bool {
        match op {
            VectorOp::Insert => {
                usize::try_from(operands.position).is_ok_and(|p| p <= collection.len())
            }
            VectorOp::Erase => checked_index(operands.position, collection.len()).is_some(),
            _ => true,
        }
    }

    fn operand_use(&self, op: VectorOp) -> OperandUse {
        match op {
            VectorOp::PushBack => OperandUse::VALUE,
            VectorOp::Insert => OperandUse::BOTH,
            VectorOp::Erase => OperandUse::POSITION,
            VectorOp::Sort | VectorOp::Reverse => OperandUse::NONE,
        }
    }

    fn snippet(&self, collection: &Collection, language: Language) -> String {
        let values = collection.values();
        let capacity = collection.capacity().limit().unwrap_or(values.len());
        let first = collection
            .get(0)
            .map_or_else(|| "N/A".to_string(), |v| v.to_string());
        let last = values
            .last()
            .map_or_else(|| "N/A".to_string(), |v| v.to_string());
        match language {
            Language::Cpp => format!(
                "vector<int> vec = {{{}}};\n// Vector size: {}\n// Vector capacity: {}\n// First element: {}\n// Last element: {}",
                join_values(values, ", "),
                values.len(),
                capacity,
                first,
                last
            ),
            Language::Java => format!(
                "ArrayList<Integer> list = new ArrayList<>(Arrays.asList({}));\n// ArrayList size: {}\n// ArrayList capacity: ~{}\n// First element: {}\n// Last element: {}",
                join_values(values, ", "),
                values.len(),
                capacity,
                first,
                last
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_highlights_every_element() {
        let v = Vector::default();
        let seed = v.seed();
        let h = v.highlights(VectorOp::Sort, 1, Operands::default(), &seed, &seed);
        assert_eq!(h.len(), seed.len());
    }

    #[test]
    fn erase_highlights_target_before_removal() {
        let v = Vector::default();
        let seed = v.seed();
        let h = v.highlights(VectorOp::Erase, 1, Operands::new(0, 4), &seed, &seed);
        assert!(h.contains(&4));
    }

    #[test]
    fn index_operations_need_in_range_positions() {
        let v = Vector::new(vec![1, 2, 3], 8);
        let seed = v.seed();
        assert!(v.admits(VectorOp::Insert, Operands::new(9, 3), &seed));
        assert!(!v.admits(VectorOp::Insert, Operands::new(9, 4), &seed));
        assert!(!v.admits(VectorOp::Erase, Operands::new(0, 3), &seed));
        assert!(!v.admits(VectorOp::Erase, Operands::new(0, -1), &seed));
    }

    #[test]
    fn cpp_snippet_reports_capacity() {
        let v = Vector::new(vec![1, 2], 4);
        let text = v.snippet(&v.seed(), Language::Cpp);
        assert!(text.starts_with("vector<int> vec = {1, 2};"));
        assert!(text.contains("// Vector capacity: 4"));
        assert!(text.contains("// Last element: 2"));
    }

    #[test]
    fn empty_snippet_uses_placeholder() {
        let v = Vector::new(vec![], 4);
        let text = v.snippet(&v.seed(), Language::Java);
        assert!(text.contains("// First element: N/A"));
    }
}
