//! Demonstration workloads

use adaptive_bench::Bencher;
use clap::ValueEnum;
use std::hint::black_box;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Workload {
    /// Recursive factorial of 100
    Factorial,
    /// Copy a buffer of `--size` bytes
    Memcpy,
}

impl Workload {
    pub fn name(&self) -> &'static str {
        match self {
            Workload::Factorial => "factorial",
            Workload::Memcpy => "memcpy",
        }
    }

    /// Closure that runs one unit of this workload
    pub fn build(self, size: usize) -> Box<dyn FnMut(&mut Bencher)> {
        match self {
            Workload::Factorial => Box::new(|_: &mut Bencher| {
                black_box(factorial(black_box(100)));
            }),
            Workload::Memcpy => {
                let source = vec![0xA5u8; size];
                let mut dest = vec![0u8; size];
                Box::new(move |b: &mut Bencher| {
                    dest.copy_from_slice(black_box(&source));
                    black_box(&mut dest);
                    b.set_bytes(size as u64);
                })
            }
        }
    }
}

/// Textbook recursive factorial; overflow wraps
pub fn factorial(n: u64) -> u64 {
    if n > 0 {
        factorial(n - 1).wrapping_mul(n)
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_memcpy_reports_bytes() {
        let mut workload = Workload::Memcpy.build(256);
        let mut bencher = Bencher::new();
        let run = bencher.bench_n(3, &mut workload);

        assert_eq!(run.bytes, 256);
    }

    #[test]
    fn test_factorial_reports_no_bytes() {
        let mut workload = Workload::Factorial.build(0);
        let mut bencher = Bencher::new();
        let run = bencher.bench_n(3, &mut workload);

        assert_eq!(run.bytes, 0);
    }
}
