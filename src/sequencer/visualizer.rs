//! Object-safe view of a [`Sequencer`] so the UI can hold one per tab

use super::Sequencer;
use crate::collection::{Applied, Capacity, Collection};
use crate::projection::Frame;
use crate::snippet::Language;
use crate::structures::{OperandUse, Operands, Structure};
use std::time::Instant;

pub trait Visualizer {
    fn title(&self) -> &'static str;
    fn operation_names(&self) -> Vec<String>;
    fn operation_index(&self) -> usize;
    /// Select the operation `offset` places away; stops and rewinds
    fn cycle_operation(&mut self, offset: isize);
    fn operand_use(&self) -> OperandUse;
    fn operands(&self) -> Operands;
    fn set_operands(&mut self, operands: Operands);
    fn collection(&self) -> &Collection;
    fn can_start(&self) -> bool;
    fn is_running(&self) -> bool;
    fn start_at(&mut self, now: Instant);
    fn stop(&mut self);
    fn pump(&mut self, now: Instant) -> usize;
    fn reset_step(&mut self);
    fn reset_all(&mut self);
    fn frame(&self) -> Frame;
    fn snippet(&self, language: Language) -> String;
    /// Whether reserve / shrink-to-fit apply to this structure
    fn has_growable_capacity(&self) -> bool;
    fn reserve(&mut self, capacity: usize) -> Applied;
    fn shrink_to_fit(&mut self) -> Applied;
}

impl<S: Structure> Visualizer for Sequencer<S> {
    fn title(&self) -> &'static str {
        self.structure().name()
    }

    fn operation_names(&self) -> Vec<String> {
        self.structure()
            .operations()
            .iter()
            .map(|op| op.to_string())
            .collect()
    }

    fn operation_index(&self) -> usize {
        Sequencer::operation_index(self)
    }

    fn cycle_operation(&mut self, offset: isize) {
        Sequencer::cycle_operation(self, offset);
    }

    fn operand_use(&self) -> OperandUse {
        self.structure().operand_use(self.operation())
    }

    fn operands(&self) -> Operands {
        Sequencer::operands(self)
    }

    fn set_operands(&mut self, operands: Operands) {
        Sequencer::set_operands(self, operands);
    }

    fn collection(&self) -> &Collection {
        Sequencer::collection(self)
    }

    fn can_start(&self) -> bool {
        Sequencer::can_start(self)
    }

    fn is_running(&self) -> bool {
        Sequencer::is_running(self)
    }

    fn start_at(&mut self, now: Instant) {
        Sequencer::start_at(self, now);
    }

    fn stop(&mut self) {
        Sequencer::stop(self);
    }

    fn pump(&mut self, now: Instant) -> usize {
        Sequencer::pump(self, now)
    }

    fn reset_step(&mut self) {
        Sequencer::reset_step(self);
    }

    fn reset_all(&mut self) {
        Sequencer::reset_all(self);
    }

    fn frame(&self) -> Frame {
        Sequencer::frame(self)
    }

    fn snippet(&self, language: Language) -> String {
        Sequencer::snippet(self, language)
    }

    fn has_growable_capacity(&self) -> bool {
        matches!(self.collection().capacity(), Capacity::Growable(_))
    }

    fn reserve(&mut self, capacity: usize) -> Applied {
        Sequencer::reserve(self, capacity)
    }

    fn shrink_to_fit(&mut self) -> Applied {
        Sequencer::shrink_to_fit(self)
    }
}
