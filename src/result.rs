use std::{
    error::Error as StdError,
    result::Result as StdResult,
    io::Error as IoError,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Result type
pub type Result<T> = StdResult<T, Error>;

/// Error type
///
/// Only conditions the caller must not ignore end up here. A compiler that
/// cannot be launched or exits with failure is reported as a [`Failure`](crate::Failure)
/// instead.
#[derive(Debug)]
pub enum Error {
    /// Compiler succeeded but its output has no search list block
    Parse(String),
    /// Writing the detected paths out failed
    Io(IoError),
}

impl StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        use Error::*;

        match self {
            Parse(e) => write!(f, "Unrecognized compiler output: {}", e),
            Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}
