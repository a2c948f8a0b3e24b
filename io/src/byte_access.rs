use alloc::{boxed::Box, vec::Vec};

/// Conversion between a byte container and the canonical raw byte view.
///
/// Implemented on the container type itself so every read and write through
/// a container is resolved statically.
pub trait ByteAccess: Sized {
    fn empty() -> Self;

    fn as_bytes(&self) -> &[u8];

    fn from_slice(bytes: &[u8]) -> Self;

    fn from_vec(bytes: Vec<u8>) -> Self {
        Self::from_slice(&bytes)
    }

    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn concat(self, other: Self) -> Self {
        if other.is_empty() {
            self
        } else if self.is_empty() {
            other
        } else {
            let mut v = Vec::with_capacity(self.len() + other.len());
            v.extend_from_slice(self.as_bytes());
            v.extend_from_slice(other.as_bytes());
            Self::from_vec(v)
        }
    }
}

impl ByteAccess for Vec<u8> {
    fn empty() -> Self {
        Vec::new()
    }

    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn from_slice(bytes: &[u8]) -> Self {
        bytes.to_vec()
    }

    fn from_vec(bytes: Vec<u8>) -> Self {
        bytes
    }

    fn concat(mut self, other: Self) -> Self {
        self.extend_from_slice(&other);
        self
    }
}

impl ByteAccess for Box<[u8]> {
    fn empty() -> Self {
        Box::default()
    }

    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn from_slice(bytes: &[u8]) -> Self {
        bytes.into()
    }

    fn from_vec(bytes: Vec<u8>) -> Self {
        bytes.into_boxed_slice()
    }
}

impl ByteAccess for bytes::Bytes {
    fn empty() -> Self {
        bytes::Bytes::new()
    }

    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn from_slice(bytes: &[u8]) -> Self {
        bytes::Bytes::copy_from_slice(bytes)
    }

    fn from_vec(bytes: Vec<u8>) -> Self {
        bytes.into()
    }
}

/// A chunk whose representation is chosen per chunk, so a single chunk
/// iterator can mix owned, shared and static data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Owned(Vec<u8>),
    Shared(bytes::Bytes),
    Static(&'static [u8]),
}

impl ByteAccess for Chunk {
    fn empty() -> Self {
        Self::Static(&[])
    }

    fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Owned(v) => v,
            Self::Shared(b) => b,
            Self::Static(s) => s,
        }
    }

    fn from_slice(bytes: &[u8]) -> Self {
        Self::Owned(bytes.to_vec())
    }

    fn from_vec(bytes: Vec<u8>) -> Self {
        Self::Owned(bytes)
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(value: Vec<u8>) -> Self {
        Self::Owned(value)
    }
}

impl From<bytes::Bytes> for Chunk {
    fn from(value: bytes::Bytes) -> Self {
        Self::Shared(value)
    }
}

impl From<&'static [u8]> for Chunk {
    fn from(value: &'static [u8]) -> Self {
        Self::Static(value)
    }
}
