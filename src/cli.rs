use std::num::NonZeroU32;

use clap::Parser;
use rdrand_stream::{Config, DEFAULT_BUFFER_SIZE, DEFAULT_RETRIES};

#[derive(Parser, Debug)]
#[command(version, rename_all = "kebab")]
/// Write an endless stream of random bytes from the RDRAND instruction to stdout.
///
/// The stream ends cleanly on Ctrl-C or when the reader closes the pipe.
pub struct Options {
    /// Bytes collected before each write to stdout. Must be a multiple of 8.
    #[arg(long, env = "RDRAND_STREAM_BUFFER_SIZE", default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// Consecutive RDRAND failures tolerated for one word before giving up.
    #[arg(long, env = "RDRAND_STREAM_RETRIES", default_value_t = DEFAULT_RETRIES)]
    retries: NonZeroU32,

    /// Increase log verbosity. Pass multiple times for more log output.
    ///
    /// By default we only show error messages. Passing `-v` will show warnings,
    /// `-vv` adds info, `-vvv` for debug, and `-vvvv` for trace.
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Set fancier logging filters.
    ///
    /// This is equivalent to the `RUST_LOG` environment variable.
    /// For more info, see the `env_logger` crate documentation.
    #[arg(long, env = "RDRAND_STREAM_LOG")]
    log_filter: Option<String>,
}

impl Options {
    pub fn config(&self) -> Config {
        Config {
            buffer_size: self.buffer_size,
            retries: self.retries,
        }
    }

    /// Build & initialize a global logger writing to stderr.
    /// As with Builder::init(), this will panic if called more than once.
    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.verbosity_level())
            .parse_filters(self.log_filter.as_deref().unwrap_or_default())
            .target(env_logger::Target::Stderr)
            .init();
    }

    /// Convert the -vvv.. count into a log level.
    fn verbosity_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference() {
        let options = Options::try_parse_from(["rdrand-stream"]).unwrap();
        assert_eq!(options.config(), Config::default());
        assert_eq!(options.verbosity_level(), log::LevelFilter::Error);
    }

    #[test]
    fn overrides() {
        let options = Options::try_parse_from([
            "rdrand-stream",
            "--buffer-size",
            "4096",
            "--retries",
            "10",
            "-vvv",
        ])
        .unwrap();
        let config = options.config();
        assert_eq!(config.buffer_size, 4096);
        assert_eq!(config.retries.get(), 10);
        assert_eq!(options.verbosity_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn zero_retries_rejected() {
        assert!(Options::try_parse_from(["rdrand-stream", "--retries", "0"]).is_err());
    }
}
