use super::*;
use alloc::vec::Vec;
use core::ops::Range;

/// A read-only byte source a decoder consumes sequentially.
///
/// The big-endian helpers mirror the ones on [`Output`], so a value written
/// with [`Output::write_int`] reads back with [`Input::read_int`].
pub trait Input {
    /// Number of bytes consumed so far.
    fn position(&self) -> u64;

    fn peek_byte(&mut self) -> Result<Option<u8>>;

    fn read_byte(&mut self) -> Result<u8>;

    /// Fill `buf` completely, or fail with [`Error::UnexpectedEnd`].
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        for b in buf.iter_mut() {
            *b = self.read_byte()?;
        }
        Ok(())
    }

    fn is_end(&mut self) -> Result<bool> {
        self.peek_byte().map(|b| b.is_none())
    }

    fn read_bytes<B>(&mut self, len: usize) -> Result<B>
    where
        B: ByteAccess,
    {
        if len == 0 {
            return Ok(B::empty());
        }

        // Grow only as bytes arrive
        let mut v = Vec::new();
        let mut buf = [0u8; 256];
        while v.len() < len {
            let n = (len - v.len()).min(buf.len());
            self.read_into(&mut buf[..n])?;
            v.extend_from_slice(&buf[..n]);
        }
        Ok(B::from_vec(v))
    }

    fn read_short(&mut self) -> Result<u16> {
        Ok(((self.read_byte()? as u16) << 8) | self.read_byte()? as u16)
    }

    fn read_int(&mut self) -> Result<u32> {
        Ok(((self.read_short()? as u32) << 16) | self.read_short()? as u32)
    }

    fn read_long(&mut self) -> Result<u64> {
        Ok(((self.read_int()? as u64) << 32) | self.read_int()? as u64)
    }
}

impl<I> Input for &mut I
where
    I: Input + ?Sized,
{
    fn position(&self) -> u64 {
        (**self).position()
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        (**self).peek_byte()
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_into(buf)
    }

    fn read_bytes<B>(&mut self, len: usize) -> Result<B>
    where
        B: ByteAccess,
    {
        (**self).read_bytes(len)
    }
}

/// Direct-access input over a fully resident byte sequence.
///
/// `T` is anything that derefs to bytes: a borrowed slice for zero-copy
/// decoding, or an owned `Vec<u8>` when the input took ownership (e.g. a small
/// file read in one go).
#[derive(Debug, Clone)]
pub struct ArrayInput<T> {
    data: T,
    offset: usize,
}

impl<T> ArrayInput<T>
where
    T: AsRef<[u8]>,
{
    pub fn new(data: T) -> Self {
        Self { data, offset: 0 }
    }

    pub fn len(&self) -> usize {
        self.data.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The unconsumed tail.
    pub fn remaining(&self) -> &[u8] {
        &self.data.as_ref()[self.offset..]
    }

    /// Borrow an arbitrary range without copying or moving the cursor.
    pub fn view(&self, range: Range<usize>) -> Option<&[u8]> {
        self.data.as_ref().get(range)
    }

    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.len() {
            return Err(Error::UnexpectedEnd {
                position: position as u64,
            });
        }
        self.offset = position;
        Ok(())
    }

    /// Move the cursor back by `count` bytes.
    pub fn unread(&mut self, count: usize) -> Result<()> {
        self.offset = self
            .offset
            .checked_sub(count)
            .ok_or(Error::Unsupported("unread before start of input"))?;
        Ok(())
    }

    pub fn into_inner(self) -> T {
        self.data
    }

    fn slice_ahead(&self, len: usize) -> Result<(&[u8], usize)> {
        self.offset
            .checked_add(len)
            .and_then(|end| Some((self.data.as_ref().get(self.offset..end)?, end)))
            .ok_or(Error::UnexpectedEnd {
                position: self.len() as u64,
            })
    }
}

impl<T> Input for ArrayInput<T>
where
    T: AsRef<[u8]>,
{
    fn position(&self) -> u64 {
        self.offset as u64
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.data.as_ref().get(self.offset).copied())
    }

    fn read_byte(&mut self) -> Result<u8> {
        let b = self
            .data
            .as_ref()
            .get(self.offset)
            .copied()
            .ok_or(Error::UnexpectedEnd {
                position: self.offset as u64,
            })?;
        self.offset += 1;
        Ok(b)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let (src, end) = self.slice_ahead(buf.len())?;
        buf.copy_from_slice(src);
        self.offset = end;
        Ok(())
    }

    fn read_bytes<B>(&mut self, len: usize) -> Result<B>
    where
        B: ByteAccess,
    {
        let (src, end) = self.slice_ahead(len)?;
        let b = B::from_slice(src);
        self.offset = end;
        Ok(b)
    }
}
