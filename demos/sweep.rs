// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI tool to compare the scalar loop and the vectorized addition over
//! several input lengths.

use clap::Parser;
use std::hint::black_box;
use std::num::NonZeroUsize;
use vecspeed::{add_loop, add_vectorized, Timer, DEFAULT_LEN};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    println!(
        "{:>12} {:>12} {:>12} {:>8}",
        "len", "loop", "vectorized", "speedup"
    );
    for &len in &cli.lengths {
        let a = vec![1.0f32; len];
        let b = vec![1.0f32; len];
        let mut c = vec![0.0f32; len];

        let mut loop_timer = Timer::new();
        let mut vectorized_timer = Timer::new();
        for _ in 0..cli.repeats.get() {
            loop_timer.start();
            add_loop(black_box(&a), black_box(&b), black_box(&mut c));
            loop_timer.stop();

            vectorized_timer.start();
            let d = add_vectorized(black_box(&a), black_box(&b));
            vectorized_timer.stop();
            black_box(d);
        }

        // Both timers recorded `repeats` measurements, which is non-zero.
        let loop_avg = loop_timer.avg().unwrap_or_default();
        let vectorized_avg = vectorized_timer.avg().unwrap_or_default();
        let speedup = if vectorized_avg > 0.0 {
            loop_avg / vectorized_avg
        } else {
            f64::NAN
        };
        println!("{len:>12} {loop_avg:>12.5} {vectorized_avg:>12.5} {speedup:>7.1}x");
    }
}

/// CLI tool to compare the scalar loop and the vectorized addition.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(version)]
struct Cli {
    /// Number of items in the inputs, as a comma-separated list.
    #[arg(long, value_delimiter = ',', default_values_t = [DEFAULT_LEN])]
    lengths: Vec<usize>,

    /// Number of times to repeat each measurement.
    #[arg(long, default_value_t = NonZeroUsize::new(10).unwrap())]
    repeats: NonZeroUsize,
}
