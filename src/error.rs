use std::io;
use thiserror::Error;

/// Errors from reading an event stream source.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
