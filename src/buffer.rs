use std::ops::{Deref, DerefMut};

use crate::{Error, WORD_SIZE};

#[derive(Debug)]
/// The reusable output buffer. Its length is always a non-zero multiple of [`WORD_SIZE`] and it
/// is released when dropped, on every exit path of the loop that owns it.
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    /// Allocates a zeroed buffer of `size` bytes.
    ///
    /// Fails with [`Error::BufferSize`] if `size` is zero or not a multiple of the word size, and
    /// with [`Error::Allocation`] if the memory cannot be reserved.
    ///
    /// # Example
    /// ```
    /// # use rdrand_stream::Buffer;
    /// let buffer = Buffer::new(64).unwrap();
    /// assert_eq!(buffer.len(), 64);
    /// assert!(Buffer::new(63).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self, Error> {
        if size == 0 || size % WORD_SIZE != 0 {
            return Err(Error::BufferSize { size });
        }
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(size).map_err(Error::Allocation)?;
        bytes.resize(size, 0);
        Ok(Self { bytes })
    }

    /// Overwrites the contents with zeros, so that a word the source never wrote stands out in
    /// the output.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}
