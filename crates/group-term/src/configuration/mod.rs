//! Configuration of the input box.
//!
//! Values come from built-in defaults, then environment variables, then
//! command line flags. There is no configuration file.

mod config;

pub use config::*;
