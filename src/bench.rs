use std::{io, time::Instant};

use crate::{fill, write_all, Rdrand, WriteOutcome, DEFAULT_RETRIES};

#[test]
#[ignore]
fn bench() {
    // Benchmark RDRAND fill throughput for a few buffer sizes, with and without the write to a
    // discarding sink.
    // Run with `cargo test bench --release -- --ignored --nocapture`
    const TOTAL: usize = 1 << 30;
    const SIZES: [usize; 3] = [1 << 12, 1 << 16, 1 << 20];

    let Some(mut rng) = Rdrand::detect() else {
        println!("RDRAND not supported");
        return;
    };

    println!("\nThroughputs:");
    for size in SIZES {
        let mut buffer = vec![0u8; size];
        let mut sink = io::sink();
        let (mut fill_nanos, mut write_nanos) = (0, 0);

        for _ in 0..TOTAL / size {
            let start = Instant::now();
            fill(&mut rng, &mut buffer, DEFAULT_RETRIES).unwrap();
            fill_nanos += start.elapsed().as_nanos();

            let start = Instant::now();
            assert!(matches!(write_all(&mut sink, &buffer), WriteOutcome::Success));
            write_nanos += start.elapsed().as_nanos();
        }

        let gigs = TOTAL as f64 / ((1 << 30) as f64);
        let secs = |nanos: u128| nanos as f64 / 1_000_000_000.0;
        println!(
            " {:>8} B: fill {:.3} GB/s, fill + write {:.3} GB/s",
            size,
            gigs / secs(fill_nanos),
            gigs / secs(fill_nanos + write_nanos)
        );
    }
}
