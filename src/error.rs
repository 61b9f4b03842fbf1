use std::io;

use thiserror::Error;

/// Everything that can go wrong during a POP3 exchange.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying stream failed while reading or writing. The session
    /// should be considered unusable afterwards.
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),

    /// The server rejected the command with "-ERR"; carries the server's
    /// explanation text verbatim.
    #[error("server rejected command: {0}")]
    Negative(String),

    /// The first response line started with neither "+OK" nor "-ERR", or a
    /// structured payload did not contain the expected number of numeric
    /// fields. The stream is in an undefined framing position afterwards.
    #[error("malformed response from server")]
    Malformed,

    /// A local precondition failed before any network I/O was performed.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
