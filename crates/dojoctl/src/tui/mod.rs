//! TUI Module - terminal front end for the problem engine
//!
//! - event_loop: entry point, terminal setup and the poll loop
//! - input: key handling for lobby and drill screens
//! - layout: drill screen grid
//! - render: drawing
//! - state: screen, answer buffer, flash and lockout deadlines

mod event_loop;
pub mod input;
pub mod layout;
pub mod render;
pub mod state;

pub use event_loop::run;
pub use state::{DojoTuiState, Flash, Screen};
