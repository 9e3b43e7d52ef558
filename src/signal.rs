use std::sync::{atomic::AtomicBool, Arc};

use signal_hook::{consts::SIGINT, flag, SigId};

use crate::Error;

/// Raises `shutdown` whenever SIGINT is delivered.
///
/// The handler does nothing but store to the flag. Blocking calls interrupted by the signal are
/// restarted (`SA_RESTART`), and repeated deliveries are harmless.
pub fn register(shutdown: &Arc<AtomicBool>) -> Result<SigId, Error> {
    flag::register(SIGINT, Arc::clone(shutdown)).map_err(Error::Signal)
}
