// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![forbid(missing_docs, unsafe_code)]

pub mod add;
pub mod bench;
mod macros;
pub mod timer;

pub use add::{add_loop, add_vectorized};
pub use bench::{Benchmark, BenchmarkReport, BenchmarkRun, DEFAULT_LEN};
pub use timer::Timer;
