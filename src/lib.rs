//! # Introduction
//!
//! dsviz animates operations on small data structures (a linked list, a
//! bounded queue and a growable vector) one step at a time in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Settings → Sequencer (step, ticker) → Projection → TUI
//!                 │
//!                 └─ terminal mutation on the last step
//! ```
//!
//! 1. [`collection`]: the ordered values plus their capacity policy, and the
//!    [`collection::Effect`]s an operation can have on them.
//! 2. [`structures`]: per-structure operations, step tables, phase text and
//!    highlight rules.
//! 3. [`sequencer`]: the step counter and its repeating tick source.
//! 4. [`projection`]: the pure view of a collection at a given step.
//! 5. [`snippet`]: the collection rendered back as C++ or Java source.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod collection;
pub mod error;
pub mod input;
pub mod projection;
pub mod sequencer;
pub mod settings;
pub mod snippet;
pub mod structures;
pub mod ui;
