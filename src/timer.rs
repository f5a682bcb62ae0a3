// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A wall-clock timer recording a series of measurements.

use crate::macros::log_trace;
use std::time::Instant;

/// A timer that records elapsed wall-clock time across start/stop intervals.
///
/// The timer is started upon creation, so [`stop()`](Self::stop) always
/// measures a well-defined interval.
///
/// ```
/// # use vecspeed::Timer;
/// let mut timer = Timer::new();
/// let first = timer.stop();
///
/// timer.start();
/// let second = timer.stop();
///
/// assert_eq!(timer.times(), &[first, second]);
/// assert!(timer.sum() >= 0.0);
/// ```
#[derive(Debug)]
pub struct Timer {
    times: Vec<f64>,
    tick: Instant,
}

impl Timer {
    /// Creates a new timer with no measurements, and starts it.
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            tick: Instant::now(),
        }
    }

    /// Resets the reference point to the current time.
    pub fn start(&mut self) {
        self.tick = Instant::now();
    }

    /// Records the number of seconds elapsed since the last call to
    /// [`start()`](Self::start) (or since creation), and returns it.
    pub fn stop(&mut self) -> f64 {
        let elapsed = self.tick.elapsed().as_secs_f64();
        log_trace!("Timer stopped after {elapsed:.9} sec");
        self.times.push(elapsed);
        elapsed
    }

    /// Returns all the recorded measurements, in order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the average of the recorded measurements, or [`None`] if
    /// nothing was recorded yet.
    pub fn avg(&self) -> Option<f64> {
        if self.times.is_empty() {
            None
        } else {
            Some(self.sum() / self.times.len() as f64)
        }
    }

    /// Returns the sum of the recorded measurements.
    pub fn sum(&self) -> f64 {
        self.times.iter().sum()
    }

    /// Returns the running totals of the recorded measurements.
    pub fn cumsum(&self) -> Vec<f64> {
        self.times
            .iter()
            .scan(0.0, |total, &t| {
                *total += t;
                Some(*total)
            })
            .collect()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_stop_without_explicit_start() {
        let mut timer = Timer::new();
        let elapsed = timer.stop();
        assert!(elapsed >= 0.0);
        assert_eq!(timer.times(), &[elapsed]);
    }

    #[test]
    fn test_stop_is_non_negative() {
        let mut timer = Timer::new();
        for _ in 0..100 {
            timer.start();
            assert!(timer.stop() >= 0.0);
        }
        assert_eq!(timer.times().len(), 100);
    }

    #[test]
    fn test_stop_measures_sleep() {
        let mut timer = Timer::new();
        timer.start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();
        assert!(elapsed >= 0.010);
    }

    #[test]
    fn test_start_resets_reference() {
        let mut timer = Timer::new();
        std::thread::sleep(Duration::from_millis(20));
        let with_sleep = timer.stop();

        timer.start();
        let without_sleep = timer.stop();

        // The sleep before start() must not be counted.
        assert!(with_sleep >= 0.020);
        assert!(without_sleep < with_sleep);
    }

    #[test]
    fn test_stop_twice_without_start() {
        let mut timer = Timer::new();
        let first = timer.stop();
        std::thread::sleep(Duration::from_millis(1));
        let second = timer.stop();
        // Both intervals share the same reference point.
        assert!(second >= first);
    }

    #[test]
    fn test_empty_statistics() {
        let timer = Timer::default();
        assert!(timer.times().is_empty());
        assert_eq!(timer.avg(), None);
        assert_eq!(timer.sum(), 0.0);
        assert!(timer.cumsum().is_empty());
    }

    #[test]
    fn test_statistics() {
        let timer = Timer {
            times: vec![1.0, 2.0, 4.5],
            tick: Instant::now(),
        };
        assert_eq!(timer.sum(), 7.5);
        assert_eq!(timer.avg(), Some(2.5));
        assert_eq!(timer.cumsum(), vec![1.0, 3.0, 7.5]);
    }
}
