use std::num::NonZeroU32;

use rand::{CryptoRng, RngCore};

use crate::{fill, Exhausted, Rdrand, WordSource, DEFAULT_RETRIES, WORD_SIZE};

impl Rdrand {
    /// Fills `data` of any length, taking the trailing bytes from the front of one extra word.
    fn fill_any(&mut self, data: &mut [u8], retries: NonZeroU32) -> Result<(), Exhausted> {
        let whole = data.len() / WORD_SIZE * WORD_SIZE;
        let (head, tail) = data.split_at_mut(whole);
        fill(&mut *self, head, retries)?;
        if !tail.is_empty() {
            let mut word = [0; WORD_SIZE];
            fill(&mut *self, &mut word, retries).map_err(|err| Exhausted {
                slot: whole / WORD_SIZE,
                ..err
            })?;
            tail.copy_from_slice(&word[..tail.len()]);
        }
        Ok(())
    }

    fn word(&mut self) -> u64 {
        (0..DEFAULT_RETRIES.get())
            .find_map(|_| self.fetch_word())
            .unwrap_or_else(|| panic!("RDRAND failed {DEFAULT_RETRIES} consecutive times"))
    }
}

impl RngCore for Rdrand {
    fn next_u32(&mut self) -> u32 {
        (self.word() >> 32) as _
    }

    fn next_u64(&mut self) -> u64 {
        self.word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = self.try_fill_bytes(dest) {
            panic!("Error: {err}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_any(dest, DEFAULT_RETRIES).map_err(rand::Error::new)
    }
}

impl CryptoRng for Rdrand {}
