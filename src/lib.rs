//! Streams random bytes from the processor's RDRAND instruction.
//!
//! A fixed-size [`Buffer`] is filled word by word from a [`WordSource`], each word getting a
//! small retry budget, and then written in full to a sink. The loop in [`Session::run`] repeats
//! this until it is asked to stop or the consumer disconnects.

mod buffer;
mod config;
mod error;
mod hwrng;
mod output;
#[cfg(feature = "rand")]
mod rand_support;
mod session;
pub mod signal;
mod stream;

#[cfg(test)]
mod bench;

pub use buffer::Buffer;
pub use config::{Config, DEFAULT_BUFFER_SIZE, DEFAULT_RETRIES};
pub use error::{Error, Exhausted};
pub use hwrng::{is_supported, Rdrand, WordSource};
pub use output::FdSink;
pub use session::{Session, Stop, Summary};
pub use stream::{fill, write_all, WriteOutcome};

/// Size in bytes of one hardware random word.
pub const WORD_SIZE: usize = std::mem::size_of::<u64>();
