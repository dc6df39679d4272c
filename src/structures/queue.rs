//! Array-backed FIFO queue visualization with a fixed capacity

use super::{OperandUse, Operands, Structure};
use crate::collection::{Capacity, Collection, Effect};
use crate::snippet::{join_values, Language};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

pub const DEFAULT_SEED: [i64; 3] = [10, 20, 30];
pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOp {
    Enqueue,
    Dequeue,
}

impl fmt::Display for QueueOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueOp::Enqueue => f.write_str("Enqueue"),
            QueueOp::Dequeue => f.write_str("Dequeue"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Queue {
    seed: Vec<i64>,
    capacity: usize,
}

impl Queue {
    pub fn new(seed: Vec<i64>, capacity: usize) -> Self {
        Queue { seed, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new(DEFAULT_SEED.to_vec(), DEFAULT_CAPACITY)
    }
}

impl Structure for Queue {
    type Op = QueueOp;

    fn name(&self) -> &'static str {
        "Queue"
    }

    fn operations(&self) -> &'static [QueueOp] {
        &[QueueOp::Enqueue, QueueOp::Dequeue]
    }

    fn default_operation(&self) -> QueueOp {
        QueueOp::Enqueue
    }

    fn seed(&self) -> Collection {
        Collection::new(self.seed.clone(), Capacity::Fixed(self.capacity))
    }

    fn default_operands(&self) -> Operands {
        Operands::new(40, 0)
    }

    fn step_count(&self, _op: QueueOp, _collection: &Collection) -> usize {
        3
    }

    fn effect(&self, op: QueueOp, operands: Operands) -> Option<Effect> {
        Some(match op {
            QueueOp::Enqueue => Effect::PushBack {
                value: operands.value,
            },
            QueueOp::Dequeue => Effect::PopFront,
        })
    }

    fn preview_steps(&self, _op: QueueOp) -> Range<usize> {
        2..3
    }

    fn highlights(
        &self,
        op: QueueOp,
        step: usize,
        _operands: Operands,
        _before: &Collection,
        display: &Collection,
    ) -> BTreeSet<usize> {
        let mut set = BTreeSet::new();
        if step == 2 && !display.is_empty() {
            match op {
                QueueOp::Enqueue => set.insert(display.len() - 1),
                QueueOp::Dequeue => set.insert(0),
            };
        }
        set
    }

    fn pending(&self, op: QueueOp, step: usize, operands: Operands) -> Option<i64> {
        (op == QueueOp::Enqueue && step == 1).then_some(operands.value)
    }

    fn status_lines(&self, op: QueueOp, operands: Operands, collection: &Collection) -> Vec<String> {
        match op {
            QueueOp::Enqueue => vec![
                format!("Preparing to enqueue value {}", operands.value),
                format!(
                    "Checking queue capacity ({}/{})",
                    collection.len(),
                    self.capacity
                ),
                format!("Adding {} to the rear", operands.value),
                "Enqueue complete".to_string(),
            ],
            QueueOp::Dequeue => vec![
                "Preparing to dequeue from front".to_string(),
                "Accessing front element".to_string(),
                "Removing front element".to_string(),
                "Dequeue complete".to_string(),
            ],
        }
    }

    // Overflow and underflow disable the start control instead of animating.
    fn admits(&self, op: QueueOp, _operands: Operands, collection: &Collection) -> bool {
        match op {
            QueueOp::Enqueue => !collection.is_full(),
            QueueOp::Dequeue => !collection.is_empty(),
        }
    }

    fn operand_use(&self, op: QueueOp) -> OperandUse {
        match op {
            QueueOp::Enqueue => OperandUse::VALUE,
            QueueOp::Dequeue => OperandUse::NONE,
        }
    }

    fn snippet(&self, collection: &Collection, language: Language) -> String {
        let values = collection.values();
        let decl = match language {
            Language::Cpp => format!("Queue queue({});", self.capacity),
            Language::Java => format!("Queue queue = new Queue({});", self.capacity),
        };
        let mut out = format!("// Current Queue State\n{}\n", decl);
        for v in values {
            out.push_str(&format!("queue.enqueue({});\n", v));
        }
        out.push_str(&format!("// Queue: {}\n", join_values(values, " ")));
        out.push_str(&format!("// Size: {} elements", values.len()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_queue_refuses_enqueue() {
        let q = Queue::new(vec![1, 2, 3, 4, 5], 5);
        assert!(!q.admits(QueueOp::Enqueue, Operands::default(), &q.seed()));
        assert!(q.admits(QueueOp::Dequeue, Operands::default(), &q.seed()));
    }

    #[test]
    fn empty_queue_refuses_dequeue() {
        let q = Queue::new(vec![], 5);
        assert!(!q.admits(QueueOp::Dequeue, Operands::default(), &q.seed()));
    }

    #[test]
    fn capacity_line_reports_fill() {
        let q = Queue::default();
        let lines = q.status_lines(QueueOp::Enqueue, Operands::new(40, 0), &q.seed());
        assert_eq!(lines[1], "Checking queue capacity (3/5)");
    }

    #[test]
    fn java_snippet_declares_capacity() {
        let q = Queue::default();
        let text = q.snippet(&q.seed(), Language::Java);
        assert!(text.contains("Queue queue = new Queue(5);"));
        assert!(text.contains("// Queue: 10 20 30"));
    }
}
