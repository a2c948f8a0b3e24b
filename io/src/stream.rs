use super::*;
use std::io::{ErrorKind, Read};

/// Chunk source reading fixed-size chunks from a [`Read`] into two
/// alternating buffers.
///
/// The chunk before the current one stays readable through
/// [`StreamChunks::previous`] while the next one is being filled, so a
/// decoder can look at a value split across a chunk boundary without a copy.
/// A fill that comes up short is the final chunk; once the reader reports the
/// end of the stream it is never read again.
pub struct StreamChunks<R> {
    reader: R,
    buffers: [Vec<u8>; 2],
    index: usize,
    len: usize,
    previous_len: Option<usize>,
    chunks: usize,
    done: bool,
}

impl<R> StreamChunks<R>
where
    R: Read,
{
    pub fn new(reader: R, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            buffers: [vec![0; config.buffer_size], vec![0; config.buffer_size]],
            index: 1,
            len: 0,
            previous_len: None,
            chunks: 0,
            done: false,
        })
    }

    pub fn buffer_size(&self) -> usize {
        self.buffers[0].len()
    }

    /// The chunk yielded before the current one, valid until the next advance.
    pub fn previous(&self) -> Option<&[u8]> {
        self.previous_len.map(|len| &self.buffers[self.index ^ 1][..len])
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }
}

impl<R> ChunkSource for StreamChunks<R>
where
    R: Read,
{
    fn advance(&mut self) -> Result<bool> {
        if self.done {
            return Ok(false);
        }

        let next = self.index ^ 1;
        let filled = Self::fill(&mut self.reader, &mut self.buffers[next])?;
        if filled == 0 {
            debug!("End of stream after {} chunks", self.chunks);
            self.done = true;
            return Ok(false);
        }

        if filled < self.buffers[next].len() {
            debug!("Final stream chunk of {filled} bytes");
            self.done = true;
        } else {
            trace!("Read full stream chunk into buffer {next}");
        }

        if self.chunks > 0 {
            self.previous_len = Some(self.len);
        }
        self.index = next;
        self.len = filled;
        self.chunks += 1;
        Ok(true)
    }

    fn current(&self) -> &[u8] {
        &self.buffers[self.index][..self.len]
    }
}
