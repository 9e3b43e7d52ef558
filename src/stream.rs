use std::{
    io::{self, ErrorKind, Write},
    num::NonZeroU32,
};

use log::{debug, error, trace};

use crate::{Exhausted, WordSource, WORD_SIZE};

#[derive(Debug)]
/// How an attempt to hand a buffer to the sink ended.
pub enum WriteOutcome {
    /// Every byte was accepted.
    Success,
    /// The consumer went away (broken pipe). This is the normal way for a stream to end.
    Closed,
    /// Any other I/O failure. It has already been logged by [`write_all`].
    Error(io::Error),
}

/// Fills every word of `buffer` from `source`, replacing the existing contents.
///
/// Each word gets up to `retries` consecutive requests and takes the first one that succeeds.
/// If a word runs out of attempts the whole fill is abandoned at once and no further words are
/// requested; the buffer contents are then unspecified and must not be used.
///
/// # Panics
/// If the length of `buffer` is not a multiple of [`WORD_SIZE`].
///
/// # Example
/// ```
/// # use std::num::NonZeroU32;
/// # use rdrand_stream::{fill, WordSource};
/// struct Counter(u64);
///
/// impl WordSource for Counter {
///     fn fetch_word(&mut self) -> Option<u64> {
///         self.0 += 1;
///         Some(self.0)
///     }
/// }
///
/// let mut buffer = [0; 16];
/// fill(&mut Counter(0), &mut buffer, NonZeroU32::new(3).unwrap()).unwrap();
/// assert_eq!(buffer[..8], 1u64.to_ne_bytes());
/// ```
pub fn fill<S>(source: &mut S, buffer: &mut [u8], retries: NonZeroU32) -> Result<(), Exhausted>
where
    S: WordSource + ?Sized,
{
    assert!(
        buffer.len() % WORD_SIZE == 0,
        "buffer length {} is not a multiple of the word size",
        buffer.len()
    );
    for (slot, chunk) in buffer.chunks_exact_mut(WORD_SIZE).enumerate() {
        let word = (0..retries.get())
            .find_map(|attempt| {
                let word = source.fetch_word();
                if word.is_none() {
                    trace!("word {slot}: request {} failed", attempt + 1);
                }
                word
            })
            .ok_or(Exhausted {
                slot,
                attempts: retries.get(),
            })?;
        chunk.copy_from_slice(&word.to_ne_bytes());
    }
    Ok(())
}

/// Writes all of `buffer` to `sink`, reissuing the remainder after short writes.
///
/// Interrupted calls are restarted. A broken pipe yields [`WriteOutcome::Closed`]; any other
/// failure, including a sink that stops accepting bytes, is logged and yields
/// [`WriteOutcome::Error`]. Neither is retried.
pub fn write_all<W>(sink: &mut W, buffer: &[u8]) -> WriteOutcome
where
    W: Write + ?Sized,
{
    let mut written = 0;
    while written < buffer.len() {
        match sink.write(&buffer[written..]) {
            Ok(0) => {
                return classify(io::Error::new(
                    ErrorKind::WriteZero,
                    "sink accepted no bytes",
                ))
            }
            Ok(count) => {
                written += count;
                debug_assert!(written <= buffer.len());
            }
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return classify(err),
        }
    }
    loop {
        match sink.flush() {
            Ok(()) => return WriteOutcome::Success,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return classify(err),
        }
    }
}

fn classify(err: io::Error) -> WriteOutcome {
    if err.kind() == ErrorKind::BrokenPipe {
        debug!("output closed by the consumer");
        WriteOutcome::Closed
    } else {
        error!("write(): {err}");
        WriteOutcome::Error(err)
    }
}
