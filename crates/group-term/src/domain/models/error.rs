use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("unable to read the terminal size: {0}")]
    TerminalQueryFailure(#[source] io::Error),
    #[error("can't open the log file {}: {source}", path.display())]
    LogFileOpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
