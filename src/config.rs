use std::num::NonZeroU32;

use crate::{Error, WORD_SIZE};

/// Number of bytes collected before each write to the sink (64 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 256 * 256;

/// Consecutive failed requests tolerated for a single word.
pub const DEFAULT_RETRIES: NonZeroU32 = match NonZeroU32::new(3) {
    Some(retries) => retries,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tunables of a streaming run.
pub struct Config {
    /// Size in bytes of the buffer handed to the sink. Must be a non-zero multiple of
    /// [`WORD_SIZE`].
    pub buffer_size: usize,
    /// Retry budget for each word of the buffer.
    pub retries: NonZeroU32,
}

impl Config {
    /// Checks the buffer size precondition.
    ///
    /// # Example
    /// ```
    /// # use rdrand_stream::Config;
    /// let config = Config { buffer_size: 12, ..Config::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        if self.buffer_size == 0 || self.buffer_size % WORD_SIZE != 0 {
            return Err(Error::BufferSize {
                size: self.buffer_size,
            });
        }
        Ok(())
    }

    /// Number of words in one buffer.
    pub fn words(&self) -> usize {
        self.buffer_size / WORD_SIZE
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            retries: DEFAULT_RETRIES,
        }
    }
}
