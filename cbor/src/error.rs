use super::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A simple value code outside the legal ranges.
    #[error("Invalid simple value {0}, must be in the range 0..=19 or 24..=255")]
    InvalidSimpleValue(i32),

    /// An initial byte that does not introduce a simple value.
    #[error("Initial byte {0:#04x} is not a simple value")]
    NotSimpleValue(u8),

    /// The receiver holds a different kind of data item than the one asked for.
    #[error("Expected {expected}, found {actual}")]
    UnexpectedDataItem {
        expected: &'static str,
        actual: DataItem,
    },

    /// Text payload that is not valid UTF-8.
    #[error(transparent)]
    InvalidUtf8(#[from] core::str::Utf8Error),

    /// The input or output failed underneath the item.
    #[error(transparent)]
    Io(#[from] tessera_io::Error),
}
