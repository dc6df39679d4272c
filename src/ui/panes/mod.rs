//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`structure`]: the animated collection and the phase description
//! - [`controls`]: operation selector, operand fields and start availability
//! - [`code`]: the collection rebuilt as a C++ or Java snippet
//! - [`status`]: status bar with keybindings and run state
//!
//! Each pane module exports a primary `render_*` function; panes hold no
//! state of their own beyond scroll offsets owned by the app.

pub mod code;
pub mod controls;
pub mod status;
pub mod structure;

pub use code::render_code_pane;
pub use controls::{render_controls_pane, ControlsRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use structure::{render_phase_pane, render_structure_pane};
