mod cli;

use std::sync::{atomic::AtomicBool, Arc};

use anyhow::Context;
use clap::Parser;
use log::info;
use rdrand_stream::{signal, FdSink, Rdrand, Session};

fn main() -> anyhow::Result<()> {
    let options = cli::Options::parse();
    options.init_logger();

    let session = Session::prepare(options.config(), Rdrand::detect)
        .context("cannot start the random stream")?;

    let shutdown = Arc::new(AtomicBool::new(false));
    signal::register(&shutdown).context("cannot handle SIGINT")?;

    let summary = session
        .run(FdSink::stdout(), &shutdown)
        .context("random stream failed")?;
    info!(
        "wrote {} bytes in {} buffers ({:?})",
        summary.bytes, summary.writes, summary.stop
    );
    Ok(())
}
