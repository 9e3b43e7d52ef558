use std::{collections::TryReserveError, io};

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("hardware random source failed {attempts} consecutive times on word {slot}")]
/// A single word of the buffer could not be filled within the retry budget.
pub struct Exhausted {
    /// Index of the word that could not be filled.
    pub slot: usize,
    /// Number of consecutive failed requests for that word.
    pub attempts: u32,
}

#[derive(Debug, Error)]
/// Errors that end a run with a failure status.
pub enum Error {
    #[error("the current CPU does not support the RDRAND instruction")]
    Unsupported,

    #[error("buffer size {size} is not a non-zero multiple of {} bytes", crate::WORD_SIZE)]
    BufferSize { size: usize },

    #[error("failed to allocate the output buffer")]
    Allocation(#[source] TryReserveError),

    #[error(transparent)]
    Exhausted(#[from] Exhausted),

    #[error("failed to register the interrupt handler")]
    Signal(#[source] io::Error),
}
