//! Infrastructure layer providing external integrations.
//!
//! This module talks to the controlling terminal and owns the diagnostic log
//! writer.

pub mod logging;
pub mod terminal;
