// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Program that times the addition of two sequences of ones, first with a
//! scalar loop and then with a vectorized addition.

use vecspeed::Benchmark;

fn main() {
    let report = Benchmark::default().run();
    print!("{report}");
}
