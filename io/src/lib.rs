/*!
Byte transport for the tessera codec.

Encoders write into an [`Output`], decoders read from an [`Input`]. Inputs are
either *direct* ([`ArrayInput`], fully resident, random access) or *chunked*
([`ChunkedInput`], a forward-only sequence of chunks pulled from a
[`ChunkSource`]). The [`provider`] module picks the right shape for a slice,
file, reader or chunk iterator.
*/
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

use tracing::*;

mod byte_access;
mod chunked;
mod config;
mod error;
mod input;
mod output;

#[cfg(feature = "std")]
mod stream;

pub mod provider;

pub use byte_access::{ByteAccess, Chunk};
pub use chunked::{ChunkSource, ChunkedInput, IterChunks};
pub use config::{Config, DEFAULT_BUFFER_SIZE, MIN_BUFFER_SIZE};
pub use error::Error;
pub use input::{ArrayInput, Input};
pub use output::{BufferOutput, INITIAL_CAPACITY, MAX_OUTPUT_SIZE, Output};

#[cfg(feature = "std")]
pub use stream::StreamChunks;

pub type Result<T, E = Error> = core::result::Result<T, E>;


#[cfg(test)]
mod input_tests;
