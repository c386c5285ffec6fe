//! Application layer driving the terminal.
//!
//! This module defines the command line and runs the UI loop, wiring the
//! domain state to the real terminal.

pub mod cli;
pub mod ui;
