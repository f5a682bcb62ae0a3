// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element-wise addition kernels: a scalar per-index loop and a vectorized
//! variant.

use std::hint::black_box;
use std::ops::Add;

/// Adds two slices element-wise into `out`, one index at a time.
///
/// This is the scalar baseline: each iteration performs a bounds-checked
/// indexed read of both inputs and an indexed write of the output.
///
/// ```
/// # use vecspeed::add_loop;
/// let a = [1.0, 2.0, 3.0];
/// let b = [10.0, 20.0, 30.0];
/// let mut c = [0.0; 3];
/// add_loop(&a, &b, &mut c);
/// assert_eq!(c, [11.0, 22.0, 33.0]);
/// ```
///
/// # Panics
///
/// Panics if `a`, `b` and `out` don't all have the same length.
pub fn add_loop<T: Copy + Add<Output = T>>(a: &[T], b: &[T], out: &mut [T]) {
    assert_eq!(
        a.len(),
        b.len(),
        "called add_loop() with inputs of different lengths"
    );
    assert_eq!(
        a.len(),
        out.len(),
        "called add_loop() with an output of a different length"
    );

    #[allow(clippy::needless_range_loop)]
    for i in 0..out.len() {
        // Hide the index from the optimizer so that this stays a scalar loop.
        let i = black_box(i);
        out[i] = a[i] + b[i];
    }
}

/// Adds two slices element-wise in a single call, returning a new vector.
///
/// The output is built from a single zipped iterator over both inputs, whose
/// exact length lets the compiler allocate once and lower the additions to
/// SIMD instructions on supported targets.
///
/// ```
/// # use vecspeed::add_vectorized;
/// let a = vec![1.0f32; 10];
/// let b = vec![1.0f32; 10];
/// let d = add_vectorized(&a, &b);
/// assert_eq!(d, vec![2.0; 10]);
/// ```
///
/// # Panics
///
/// Panics if `a` and `b` don't have the same length.
pub fn add_vectorized<T: Copy + Add<Output = T>>(a: &[T], b: &[T]) -> Vec<T> {
    assert_eq!(
        a.len(),
        b.len(),
        "called add_vectorized() with inputs of different lengths"
    );

    a.iter().zip(b).map(|(&x, &y)| x + y).collect()
}
