use super::*;
use alloc::vec::Vec;

/// Capacity of a freshly created [`BufferOutput`].
pub const INITIAL_CAPACITY: usize = 64;

/// Largest number of bytes a single output may hold (just under 2^31).
pub const MAX_OUTPUT_SIZE: usize = i32::MAX as usize;

/// A byte sink an encoder appends to.
///
/// Multi-byte helpers are defined in terms of [`Output::write_byte`] and always
/// write the most significant byte first, which is the wire order of every
/// length and integer the codec emits.
pub trait Output {
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Number of bytes written so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write_slice(&mut self, bytes: &[u8]) -> Result<()> {
        for b in bytes {
            self.write_byte(*b)?;
        }
        Ok(())
    }

    fn write_bytes<B>(&mut self, bytes: &B) -> Result<()>
    where
        B: ByteAccess,
    {
        self.write_slice(bytes.as_bytes())
    }

    fn write_short(&mut self, value: u16) -> Result<()> {
        self.write_byte((value >> 8) as u8)?;
        self.write_byte(value as u8)
    }

    fn write_int(&mut self, value: u32) -> Result<()> {
        self.write_short((value >> 16) as u16)?;
        self.write_short(value as u16)
    }

    fn write_long(&mut self, value: u64) -> Result<()> {
        self.write_int((value >> 32) as u32)?;
        self.write_int(value as u32)
    }
}

/// The growable output buffer.
///
/// Capacity starts at [`INITIAL_CAPACITY`] and doubles (or grows to exactly
/// what a pending write needs, whichever is larger) until the limit is
/// reached. A write that would push the cursor past the limit fails with
/// [`Error::Overflow`] and leaves the bytes already written untouched.
#[derive(Debug, Clone)]
pub struct BufferOutput {
    buffer: Vec<u8>,
    cursor: usize,
    limit: usize,
}

impl Default for BufferOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_OUTPUT_SIZE);
        let mut buffer = Vec::new();
        buffer.resize(capacity, 0);
        Self {
            buffer,
            cursor: 0,
            limit: MAX_OUTPUT_SIZE,
        }
    }

    /// Impose a lower ceiling than [`MAX_OUTPUT_SIZE`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(self.cursor, MAX_OUTPUT_SIZE);
        self
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The bytes written so far, including after a failed write.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[..self.cursor]
    }

    /// Finish the output, returning exactly the bytes written.
    pub fn result(mut self) -> Vec<u8> {
        if self.cursor != self.buffer.len() {
            self.buffer.truncate(self.cursor);
            self.buffer.shrink_to_fit();
        }
        self.buffer
    }

    pub fn result_as<B>(self) -> B
    where
        B: ByteAccess,
    {
        B::from_vec(self.result())
    }

    pub(crate) fn ensure(&mut self, additional: usize) -> Result<usize> {
        let required = self
            .cursor
            .checked_add(additional)
            .filter(|r| *r <= self.limit)
            .ok_or(Error::Overflow {
                requested: self.cursor.saturating_add(additional),
                limit: self.limit,
            })?;

        if required > self.buffer.len() {
            let new_capacity = self
                .buffer
                .len()
                .saturating_mul(2)
                .min(self.limit)
                .max(required);

            trace!(
                "Growing output buffer from {} to {new_capacity} bytes",
                self.buffer.len()
            );

            self.buffer.reserve_exact(new_capacity - self.buffer.len());
            self.buffer.resize(new_capacity, 0);
        }
        Ok(required)
    }
}

impl Output for BufferOutput {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        let end = self.ensure(1)?;
        self.buffer[self.cursor] = byte;
        self.cursor = end;
        Ok(())
    }

    fn len(&self) -> usize {
        self.cursor
    }

    fn write_slice(&mut self, bytes: &[u8]) -> Result<()> {
        let end = self.ensure(bytes.len())?;
        self.buffer[self.cursor..end].copy_from_slice(bytes);
        self.cursor = end;
        Ok(())
    }
}

impl Output for Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        if Vec::len(self) >= MAX_OUTPUT_SIZE {
            return Err(Error::Overflow {
                requested: Vec::len(self).saturating_add(1),
                limit: MAX_OUTPUT_SIZE,
            });
        }
        self.push(byte);
        Ok(())
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn write_slice(&mut self, bytes: &[u8]) -> Result<()> {
        let requested = Vec::len(self).saturating_add(bytes.len());
        if requested > MAX_OUTPUT_SIZE {
            return Err(Error::Overflow {
                requested,
                limit: MAX_OUTPUT_SIZE,
            });
        }
        self.extend_from_slice(bytes);
        Ok(())
    }
}
