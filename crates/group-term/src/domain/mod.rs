//! Core logic of the group input box.
//!
//! This module holds the input box state, its event handling and the layout of
//! the titled frame, independent of the real terminal it is drawn on.

pub mod models;
pub mod services;
