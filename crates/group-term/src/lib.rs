//! Titled text input box for the terminal.
//!
//! Draws a single bordered box whose top edge carries a label, and lets the
//! user type a group name into it. Enter clears the field, ctrl+c exits.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Event, FrameTitle, InputField, Phase, Viewport};
pub use domain::services::{AppState, AppStateProps, EventsService};
pub use infrastructure::terminal::{CrosstermViewport, ViewportProbe};
