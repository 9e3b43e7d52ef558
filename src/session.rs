use std::{
    io::Write,
    sync::atomic::{AtomicBool, Ordering},
};

use log::debug;

use crate::{fill, write_all, Buffer, Config, Error, WordSource, WriteOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why a run stopped without failing.
pub enum Stop {
    /// The shutdown flag was raised, normally by SIGINT.
    Interrupted,
    /// The consumer closed the output.
    Closed,
    /// The sink reported an I/O error other than a closed pipe. The error has been logged; the
    /// run still counts as successful.
    WriteFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a finished run produced.
pub struct Summary {
    /// Buffers written to the sink in full.
    pub writes: u64,
    /// Bytes written in those buffers.
    pub bytes: u64,
    pub stop: Stop,
}

#[derive(Debug)]
/// A validated run that has not allocated anything yet.
pub struct Session<S> {
    config: Config,
    source: S,
}

impl<S> Session<S>
where
    S: WordSource,
{
    /// Checks `config`, then asks `detect` for a word source.
    ///
    /// `detect` is called at most once and only if the configuration is valid. Nothing is
    /// allocated and no word is requested here.
    pub fn prepare<F>(config: Config, detect: F) -> Result<Self, Error>
    where
        F: FnOnce() -> Option<S>,
    {
        config.validate()?;
        let source = detect().ok_or(Error::Unsupported)?;
        Ok(Self { config, source })
    }

    /// Streams buffers of random words into `sink` until `shutdown` is raised or the sink stops
    /// accepting data.
    ///
    /// `shutdown` is checked once before every fill, so a request to stop takes effect after the
    /// current buffer has been written. A closed or failing sink raises `shutdown` itself.
    /// Running out of retries on any word is fatal and returns [`Error::Exhausted`].
    pub fn run<W>(mut self, mut sink: W, shutdown: &AtomicBool) -> Result<Summary, Error>
    where
        W: Write,
    {
        let mut buffer = Buffer::new(self.config.buffer_size)?;
        debug!(
            "streaming {} words per buffer, {} attempts per word",
            self.config.words(),
            self.config.retries
        );

        let mut writes = 0;
        let mut stop = Stop::Interrupted;
        while !shutdown.load(Ordering::Relaxed) {
            #[cfg(debug_assertions)]
            buffer.clear();

            fill(&mut self.source, &mut buffer, self.config.retries)?;

            match write_all(&mut sink, &buffer) {
                WriteOutcome::Success => writes += 1,
                WriteOutcome::Closed => {
                    stop = Stop::Closed;
                    shutdown.store(true, Ordering::Relaxed);
                }
                WriteOutcome::Error(_) => {
                    stop = Stop::WriteFailed;
                    shutdown.store(true, Ordering::Relaxed);
                }
            }
        }

        Ok(Summary {
            writes,
            bytes: writes * buffer.len() as u64,
            stop,
        })
    }
}
