// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Driver timing the scalar loop against the vectorized addition.

use crate::add::{add_loop, add_vectorized};
use crate::macros::log_debug;
use crate::timer::Timer;
use std::fmt;
use std::hint::black_box;
use std::ops::Add;

/// Default number of items in each input sequence.
pub const DEFAULT_LEN: usize = 10_000;

/// Parameters of a benchmark run.
///
/// ```
/// # use vecspeed::Benchmark;
/// let report = Benchmark { len: 1000 }.run();
/// assert!(report.loop_secs >= 0.0);
/// assert!(report.vectorized_secs >= 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benchmark {
    /// Number of items in each input sequence.
    pub len: usize,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self { len: DEFAULT_LEN }
    }
}

impl Benchmark {
    /// Adds two sequences of ones, first with the per-index loop and then
    /// with the vectorized addition, and reports the time taken by each.
    pub fn run(&self) -> BenchmarkReport {
        log_debug!("Allocating inputs of {} items", self.len);
        let a = vec![1.0f32; self.len];
        let b = vec![1.0f32; self.len];
        Self::run_with(&a, &b).report
    }

    /// Runs both timed steps on the given inputs instead of sequences of ones,
    /// and returns the outputs of both kernels along with the measured
    /// durations.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` don't have the same length.
    pub fn run_with<T>(a: &[T], b: &[T]) -> BenchmarkRun<T>
    where
        T: Copy + Default + Add<Output = T>,
    {
        let mut c = vec![T::default(); a.len()];
        let mut timer = Timer::new();

        timer.start();
        add_loop(black_box(a), black_box(b), black_box(c.as_mut_slice()));
        let loop_secs = timer.stop();
        log_debug!("Scalar loop over {} items: {loop_secs:.9} sec", a.len());

        timer.start();
        let d = add_vectorized(black_box(a), black_box(b));
        let vectorized_secs = timer.stop();
        log_debug!(
            "Vectorized addition over {} items: {vectorized_secs:.9} sec",
            a.len()
        );

        BenchmarkRun {
            loop_output: c,
            vectorized_output: d,
            report: BenchmarkReport {
                loop_secs,
                vectorized_secs,
            },
        }
    }
}

/// Outputs and timings of a benchmark run.
#[derive(Debug)]
pub struct BenchmarkRun<T> {
    /// Result of the per-index loop.
    pub loop_output: Vec<T>,
    /// Result of the vectorized addition.
    pub vectorized_output: Vec<T>,
    /// Time taken by each step.
    pub report: BenchmarkReport,
}

/// Time taken by each step of a benchmark run, in seconds.
///
/// The [`Display`](fmt::Display) implementation prints one line per step,
/// with 5 decimals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkReport {
    /// Duration of the per-index loop.
    pub loop_secs: f64,
    /// Duration of the vectorized addition.
    pub vectorized_secs: f64,
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:.5} sec", self.loop_secs)?;
        writeln!(f, "{:.5} sec", self.vectorized_secs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn test_default_len() {
        assert_eq!(Benchmark::default().len, 10_000);
    }

    #[test]
    fn test_run_default() {
        let report = Benchmark::default().run();
        assert!(report.loop_secs >= 0.0);
        assert!(report.vectorized_secs >= 0.0);
    }

    #[test]
    fn test_run_with_ones() {
        let a = vec![1.0f32; DEFAULT_LEN];
        let b = vec![1.0f32; DEFAULT_LEN];
        let run = Benchmark::run_with(&a, &b);
        assert_eq!(run.loop_output, vec![2.0; DEFAULT_LEN]);
        assert_eq!(run.vectorized_output, vec![2.0; DEFAULT_LEN]);
    }

    #[test]
    fn test_run_empty() {
        let report = Benchmark { len: 0 }.run();
        assert!(report.loop_secs >= 0.0);
        assert!(report.vectorized_secs >= 0.0);

        let run = Benchmark::run_with::<f32>(&[], &[]);
        assert!(run.loop_output.is_empty());
        assert!(run.vectorized_output.is_empty());
    }

    #[test]
    fn test_run_with_random_inputs() {
        let mut rng = ChaCha12Rng::seed_from_u64(42);
        let len = 1234;
        let a = (0..len).map(|_| rng.random::<f64>()).collect::<Vec<f64>>();
        let b = (0..len).map(|_| rng.random::<f64>()).collect::<Vec<f64>>();
        let run = Benchmark::run_with(&a, &b);
        assert_eq!(run.loop_output, run.vectorized_output);
    }

    #[test]
    #[should_panic(expected = "called add_loop() with inputs of different lengths")]
    fn test_run_with_unequal_inputs() {
        Benchmark::run_with(&[1, 2, 3], &[1, 2]);
    }

    #[test]
    fn test_report_display() {
        let report = BenchmarkReport {
            loop_secs: 0.123456789,
            vectorized_secs: 0.00002,
        };
        assert_eq!(report.to_string(), "0.12346 sec\n0.00002 sec\n");
    }

    #[test]
    fn test_report_display_zero() {
        let report = BenchmarkReport {
            loop_secs: 0.0,
            vectorized_secs: 0.0,
        };
        assert_eq!(report.to_string(), "0.00000 sec\n0.00000 sec\n");
    }
}
