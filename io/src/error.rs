/*!
This module defines the error type shared by every sink and source in the crate.
*/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A write would take an output past its size ceiling.
    #[error("Output overflow: {requested} bytes requested, limit is {limit} bytes")]
    Overflow { requested: usize, limit: usize },

    /// A provider was constructed with an unusable configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(alloc::string::String),

    /// The input ran out of bytes before a read could be satisfied.
    #[error("Unexpected end of input at position {position}")]
    UnexpectedEnd { position: u64 },

    /// The operation cannot be performed by this kind of input.
    #[error("Unsupported input operation: {0}")]
    Unsupported(&'static str),

    /// The underlying file or stream failed.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
