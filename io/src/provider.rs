/*!
Construction of [`Input`]s from the sources a host environment hands over.

- Slices and owned buffers become direct [`ArrayInput`]s without copying.
- Files no larger than [`Config::buffer_size`] are read in one go and become
  direct inputs; larger files are streamed in chunks.
- Readers are streamed through a [`StreamChunks`](crate::StreamChunks) pair
  of alternating buffers.
- Chunk iterators are composed into one [`ChunkedInput`] in iteration order.

Configuration is checked before any byte is read. Closing files and streams
stays with the caller: a provider reads until exhaustion and nothing more.
*/

use super::*;

#[cfg(feature = "std")]
use std::{fs::File, io::Read, path::Path};

/// Conversion of an in-memory byte container into a direct input.
pub trait IntoInput {
    type Input: Input;

    fn into_input(self) -> Self::Input;
}

impl<'a> IntoInput for &'a [u8] {
    type Input = ArrayInput<&'a [u8]>;

    fn into_input(self) -> Self::Input {
        ArrayInput::new(self)
    }
}

impl<'a, const N: usize> IntoInput for &'a [u8; N] {
    type Input = ArrayInput<&'a [u8]>;

    fn into_input(self) -> Self::Input {
        ArrayInput::new(self.as_slice())
    }
}

impl<'a> IntoInput for &'a alloc::vec::Vec<u8> {
    type Input = ArrayInput<&'a [u8]>;

    fn into_input(self) -> Self::Input {
        ArrayInput::new(self.as_slice())
    }
}

impl IntoInput for alloc::vec::Vec<u8> {
    type Input = ArrayInput<alloc::vec::Vec<u8>>;

    fn into_input(self) -> Self::Input {
        ArrayInput::new(self)
    }
}

impl IntoInput for bytes::Bytes {
    type Input = ArrayInput<bytes::Bytes>;

    fn into_input(self) -> Self::Input {
        ArrayInput::new(self)
    }
}

pub fn from_slice(data: &[u8]) -> ArrayInput<&[u8]> {
    ArrayInput::new(data)
}

pub fn from_chunks<T>(chunks: T) -> ChunkedInput<IterChunks<T::IntoIter>>
where
    T: IntoIterator,
    T::Item: ByteAccess,
{
    ChunkedInput::new(IterChunks::new(chunks))
}

#[cfg(feature = "std")]
pub fn from_reader<R>(reader: R, config: &Config) -> Result<ChunkedInput<StreamChunks<R>>>
where
    R: Read,
{
    Ok(ChunkedInput::new(StreamChunks::new(reader, config)?))
}

#[cfg(feature = "std")]
pub fn from_file<P>(path: P, config: &Config) -> Result<FileInput>
where
    P: AsRef<Path>,
{
    config.validate()?;

    let path = path.as_ref();
    let mut file = File::open(path)?;
    let size = file.metadata()?.len();
    if size <= config.buffer_size as u64 {
        debug!("Reading {} ({size} bytes) as a single chunk", path.display());
        let mut data = Vec::with_capacity(size as usize);
        file.read_to_end(&mut data)?;
        Ok(FileInput::Array(ArrayInput::new(data)))
    } else {
        debug!(
            "Streaming {} ({size} bytes) in {} byte chunks",
            path.display(),
            config.buffer_size
        );
        Ok(FileInput::Stream(from_reader(file, config)?))
    }
}

/// The input [`from_file`] settled on.
#[cfg(feature = "std")]
pub enum FileInput {
    Array(ArrayInput<Vec<u8>>),
    Stream(ChunkedInput<StreamChunks<File>>),
}

#[cfg(feature = "std")]
impl FileInput {
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

#[cfg(feature = "std")]
impl Input for FileInput {
    fn position(&self) -> u64 {
        match self {
            Self::Array(i) => i.position(),
            Self::Stream(i) => i.position(),
        }
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        match self {
            Self::Array(i) => i.peek_byte(),
            Self::Stream(i) => i.peek_byte(),
        }
    }

    fn read_byte(&mut self) -> Result<u8> {
        match self {
            Self::Array(i) => i.read_byte(),
            Self::Stream(i) => i.read_byte(),
        }
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        match self {
            Self::Array(i) => i.read_into(buf),
            Self::Stream(i) => i.read_into(buf),
        }
    }

    fn read_bytes<B>(&mut self, len: usize) -> Result<B>
    where
        B: ByteAccess,
    {
        match self {
            Self::Array(i) => i.read_bytes(len),
            Self::Stream(i) => i.read_bytes(len),
        }
    }
}
