use super::*;
use alloc::vec::Vec;

/// A forward-only producer of byte chunks.
///
/// [`ChunkSource::current`] borrows the source, so a chunk view must be
/// dropped before the source can [`advance`](ChunkSource::advance) and
/// reuse the memory behind it. Before the first `advance`, and after an
/// `advance` returns `false`, `current` keeps returning the last chunk (or an
/// empty slice if there never was one).
pub trait ChunkSource {
    /// Move to the next chunk. Returns `false` once the source is exhausted.
    fn advance(&mut self) -> Result<bool>;

    fn current(&self) -> &[u8];
}

impl<S> ChunkSource for &mut S
where
    S: ChunkSource + ?Sized,
{
    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn current(&self) -> &[u8] {
        (**self).current()
    }
}

/// Chunked input: one logical byte sequence over a [`ChunkSource`].
///
/// The cursor is tracked as (chunk index, offset in chunk). Reads that cross
/// a chunk boundary continue transparently in the next chunk.
#[derive(Debug)]
pub struct ChunkedInput<S> {
    source: S,
    exhausted: bool,
    chunks_seen: usize,
    offset: usize,
    consumed: u64,
}

impl<S> ChunkedInput<S>
where
    S: ChunkSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            exhausted: false,
            chunks_seen: 0,
            offset: 0,
            consumed: 0,
        }
    }

    /// Index of the chunk the cursor is in.
    pub fn chunk_index(&self) -> usize {
        self.chunks_seen.saturating_sub(1)
    }

    /// Offset of the cursor within the current chunk.
    pub fn chunk_offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed part of the current chunk.
    pub fn chunk_remaining(&self) -> &[u8] {
        &self.source.current()[self.offset..]
    }

    /// Move the cursor back by `count` bytes, within the current chunk only.
    pub fn unread(&mut self, count: usize) -> Result<()> {
        self.offset = self
            .offset
            .checked_sub(count)
            .ok_or(Error::Unsupported("unread across a chunk boundary"))?;
        Ok(())
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    fn fill(&mut self) -> Result<bool> {
        loop {
            let len = self.source.current().len();
            if self.offset < len {
                return Ok(true);
            }
            if self.exhausted {
                return Ok(false);
            }
            if self.source.advance()? {
                self.consumed += len as u64;
                self.offset = 0;
                self.chunks_seen += 1;
            } else {
                self.exhausted = true;
            }
        }
    }
}

impl<S> Input for ChunkedInput<S>
where
    S: ChunkSource,
{
    fn position(&self) -> u64 {
        self.consumed + self.offset as u64
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        if self.fill()? {
            Ok(Some(self.source.current()[self.offset]))
        } else {
            Ok(None)
        }
    }

    fn read_byte(&mut self) -> Result<u8> {
        if !self.fill()? {
            return Err(Error::UnexpectedEnd {
                position: self.position(),
            });
        }
        let b = self.source.current()[self.offset];
        self.offset += 1;
        Ok(b)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            if !self.fill()? {
                return Err(Error::UnexpectedEnd {
                    position: self.position(),
                });
            }
            let chunk = &self.source.current()[self.offset..];
            let n = chunk.len().min(buf.len() - filled);
            buf[filled..filled + n].copy_from_slice(&chunk[..n]);
            filled += n;
            self.offset += n;
        }
        Ok(())
    }

    fn read_bytes<B>(&mut self, len: usize) -> Result<B>
    where
        B: ByteAccess,
    {
        if len == 0 {
            return Ok(B::empty());
        }

        let mut v = Vec::new();
        while v.len() < len {
            if !self.fill()? {
                return Err(Error::UnexpectedEnd {
                    position: self.position(),
                });
            }
            let chunk = &self.source.current()[self.offset..];
            let n = chunk.len().min(len - v.len());
            v.extend_from_slice(&chunk[..n]);
            self.offset += n;
        }
        Ok(B::from_vec(v))
    }
}

/// Chunk source over an iterator of already materialised chunks.
pub struct IterChunks<I>
where
    I: Iterator,
{
    iter: I,
    current: Option<I::Item>,
}

impl<I> IterChunks<I>
where
    I: Iterator,
    I::Item: ByteAccess,
{
    pub fn new<T>(chunks: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: chunks.into_iter(),
            current: None,
        }
    }
}

impl<I> ChunkSource for IterChunks<I>
where
    I: Iterator,
    I::Item: ByteAccess,
{
    fn advance(&mut self) -> Result<bool> {
        match self.iter.next() {
            Some(chunk) => {
                trace!("Next chunk of {} bytes", chunk.len());
                self.current = Some(chunk);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn current(&self) -> &[u8] {
        match &self.current {
            Some(chunk) => chunk.as_bytes(),
            None => &[],
        }
    }
}
