//! Step-indexed animation sequencer
//!
//! One [`Sequencer`] drives the animation of a single visualized structure.
//! It owns the current step, the selected operation and its operands, the
//! [`Collection`] being animated, and while running, a [`Ticker`].
//!
//! # Run lifecycle
//!
//! ```text
//! start ──► tick ──► tick ──► … ──► tick (step == step_count)
//!   │                                   │
//!   └─ acquires Ticker                  ├─ stop (Ticker dropped)
//!                                       └─ terminal mutation applied once
//! ```
//!
//! The last frame stays on screen after completion: the step is left at its
//! terminal value until the next `start`, `reset_step` or operation switch.

pub mod ticker;
pub mod visualizer;

pub use ticker::{Ticker, DEFAULT_INTERVAL};
pub use visualizer::Visualizer;

use crate::collection::{Applied, Collection};
use crate::projection::{self, Frame};
use crate::snippet::Language;
use crate::structures::{Operands, Structure};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Sequencer<S: Structure> {
    structure: S,
    collection: Collection,
    operation: S::Op,
    operands: Operands,
    step: usize,
    interval: Duration,
    ticker: Option<Ticker>,
}

impl<S: Structure> Sequencer<S> {
    /// Create a sequencer seeded with the structure's default collection
    pub fn new(structure: S, interval: Duration) -> Self {
        let collection = structure.seed();
        let operation = structure.default_operation();
        let operands = structure.default_operands();
        Sequencer {
            structure,
            collection,
            operation,
            operands,
            step: 0,
            interval,
            ticker: None,
        }
    }

    pub fn structure(&self) -> &S {
        &self.structure
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn operation(&self) -> S::Op {
        self.operation
    }

    pub fn operands(&self) -> Operands {
        self.operands
    }

    /// Replace the operands; a live run with different operands is rewound
    pub fn set_operands(&mut self, operands: Operands) {
        if self.is_running() && operands != self.operands {
            log::debug!("{}: operands changed mid-run, rewinding", self.structure.name());
            self.reset_step();
        }
        self.operands = operands;
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Steps the active operation passes through on the current collection
    pub fn step_count(&self) -> usize {
        self.structure.step_count(self.operation, &self.collection)
    }

    /// Whether the start control should be offered
    pub fn can_start(&self) -> bool {
        !self.is_running()
            && self
                .structure
                .admits(self.operation, self.operands, &self.collection)
    }

    /// Begin ticking now
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Begin ticking with the first tick due one interval after `now`
    ///
    /// No-op while running. A finished run is rewound to step 0 first.
    pub fn start_at(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        if self.step >= self.step_count() {
            self.reset_step();
        }
        log::info!(
            "{}: starting {} at step {}/{}",
            self.structure.name(),
            self.operation,
            self.step,
            self.step_count()
        );
        self.ticker = Some(Ticker::start(self.interval, now));
    }

    /// Cancel the tick source, keeping the current step
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            log::debug!(
                "{}: stopped at step {} after {} tick(s)",
                self.structure.name(),
                self.step,
                ticker.fired()
            );
        }
    }

    /// Advance one step; applies the terminal mutation on the final step
    ///
    /// Does nothing without a live tick source.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        let step_count = self.step_count();
        self.step += 1;
        log::debug!(
            "{}: {} step {}/{}",
            self.structure.name(),
            self.operation,
            self.step,
            step_count
        );
        if self.step >= step_count {
            self.step = step_count;
            self.stop();
            self.apply_terminal_mutation();
        }
    }

    /// Deliver every tick that is due at `now`; returns how many fired
    pub fn pump(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(ticker) = self.ticker.as_mut() {
            if !ticker.poll(now) {
                break;
            }
            self.tick();
            fired += 1;
        }
        fired
    }

    /// Stop and rewind to step 0, keeping the collection
    pub fn reset_step(&mut self) {
        self.stop();
        self.step = 0;
    }

    /// Stop, rewind, and restore the seed collection
    pub fn reset_all(&mut self) {
        self.reset_step();
        self.collection = self.structure.seed();
        log::info!(
            "{}: reset to {}",
            self.structure.name(),
            self.collection
        );
    }

    /// Switch the active operation; always stops and rewinds
    pub fn select_operation(&mut self, operation: S::Op) {
        self.reset_step();
        self.operation = operation;
    }

    /// Position of the active operation in the selector
    pub fn operation_index(&self) -> usize {
        self.structure
            .operations()
            .iter()
            .position(|op| *op == self.operation)
            .unwrap_or(0)
    }

    /// Select the operation `offset` places away, wrapping around
    pub fn cycle_operation(&mut self, offset: isize) {
        let ops = self.structure.operations();
        if ops.is_empty() {
            return;
        }
        let len = ops.len() as isize;
        let index = (self.operation_index() as isize + offset).rem_euclid(len) as usize;
        self.select_operation(ops[index]);
    }

    /// What to draw right now
    pub fn frame(&self) -> Frame {
        projection::project(
            &self.structure,
            &self.collection,
            self.operation,
            self.step,
            self.operands,
            self.is_running(),
        )
    }

    /// The collection as a code snippet
    pub fn snippet(&self, language: Language) -> String {
        self.structure.snippet(&self.collection, language)
    }

    /// Set a growable collection's capacity
    pub fn reserve(&mut self, capacity: usize) -> Applied {
        self.collection.reserve(capacity)
    }

    /// Shrink a growable collection's capacity to its length
    pub fn shrink_to_fit(&mut self) -> Applied {
        self.collection.shrink_to_fit()
    }

    fn apply_terminal_mutation(&mut self) {
        let Some(effect) = self.structure.effect(self.operation, self.operands) else {
            log::info!("{}: {} complete", self.structure.name(), self.operation);
            return;
        };
        match self.collection.apply_in_place(effect) {
            Applied::Changed => log::info!(
                "{}: {} complete, now {}",
                self.structure.name(),
                self.operation,
                self.collection
            ),
            Applied::Unchanged => log::warn!(
                "{}: {} with {:?} left the collection unchanged",
                self.structure.name(),
                self.operation,
                self.operands
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{LinkedList, ListOp, Queue, QueueOp};

    fn list() -> Sequencer<LinkedList> {
        Sequencer::new(LinkedList::default(), DEFAULT_INTERVAL)
    }

    #[test]
    fn tick_without_tick_source_is_ignored() {
        let mut seq = list();
        seq.tick();
        assert_eq!(seq.step(), 0);
    }

    #[test]
    fn pump_stops_at_terminal_step_even_when_late() {
        let mut seq = list();
        seq.select_operation(ListOp::Delete);
        let t0 = Instant::now();
        seq.start_at(t0);
        let fired = seq.pump(t0 + Duration::from_secs(60));
        assert_eq!(fired, 3);
        assert_eq!(seq.step(), 3);
        assert!(!seq.is_running());
        assert_eq!(seq.collection().values(), &[10, 30]);
    }

    #[test]
    fn stop_keeps_step_and_cancels_ticks() {
        let mut seq = list();
        let t0 = Instant::now();
        seq.start_at(t0);
        seq.pump(t0 + Duration::from_millis(1000));
        seq.stop();
        assert_eq!(seq.step(), 1);
        assert_eq!(seq.pump(t0 + Duration::from_secs(10)), 0);
        assert_eq!(seq.step(), 1);
    }

    #[test]
    fn cycle_wraps_both_ways() {
        let mut seq = list();
        seq.cycle_operation(-1);
        assert_eq!(seq.operation(), ListOp::Delete);
        seq.cycle_operation(1);
        assert_eq!(seq.operation(), ListOp::Traverse);
    }

    #[test]
    fn full_queue_cannot_start_enqueue() {
        let seq = Sequencer::new(Queue::new(vec![1, 2, 3, 4, 5], 5), DEFAULT_INTERVAL);
        assert_eq!(seq.operation(), QueueOp::Enqueue);
        assert!(!seq.can_start());
    }
}
