use crossterm::terminal;

use crate::domain::models::TerminalError;
use crate::domain::models::Viewport;

pub trait ViewportProbe {
    fn probe(&self) -> Result<Viewport, TerminalError>;
}

/// Asks the controlling terminal for its size on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermViewport;

impl ViewportProbe for CrosstermViewport {
    fn probe(&self) -> Result<Viewport, TerminalError> {
        let (cols, rows) = terminal::size().map_err(TerminalError::TerminalQueryFailure)?;
        return Ok(Viewport::new(cols, rows));
    }
}
