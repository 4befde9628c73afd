//! Benchmark a recursive factorial with the default budget
//!
//! Usage: cargo run -p adaptive-bench --example factorial --release

use adaptive_bench::reporter::ConsoleReporter;
use std::hint::black_box;

fn factorial(n: u64) -> u64 {
    if n > 0 {
        factorial(n - 1).wrapping_mul(n)
    } else {
        1
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let samples = adaptive_bench::benchmark(|_| {
        black_box(factorial(black_box(100)));
    });

    println!("{}", ConsoleReporter::format_samples(&samples));
}
