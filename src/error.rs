//! Application error type
//!
//! The trace generator and the playback controller cannot fail; a bad
//! closing bracket is an ordinary [`Action::Error`](crate::trace::Action)
//! step. What can fail is everything around them: reading the expression
//! file, opening the log file and driving the terminal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing or event polling failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read expression from '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open log file '{}': {source}", .path.display())]
    Logging {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
