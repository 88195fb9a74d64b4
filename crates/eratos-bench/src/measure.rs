// Copyright 2025 the eratos developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scoped acquisition of a time/memory measurement context.

use eratos_core::memory::{
    currently_allocated_bytes, reset_peak_allocated_bytes, PEAK_ALLOCATED_BYTES,
};
use eratos_core::Stopwatch;
use std::sync::atomic::Ordering;
use std::time::Duration;

/// What a [`MeasurementScope`] reports on exit.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// Wall-clock time spent inside the scope.
    pub elapsed: Duration,
    /// Signed heap delta across the scope: bytes allocated at exit minus
    /// bytes allocated at entry. Allocator reuse makes this noisy; zero or
    /// negative readings are legitimate.
    pub heap_delta_bytes: i64,
    /// Peak heap growth above the entry baseline. Zero when no tracking
    /// allocator is registered.
    pub peak_heap_bytes: u64,
}

impl Measurement {
    /// The elapsed time in seconds.
    pub fn elapsed_secs_f64(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Brackets exactly one unit of work for measurement.
///
/// `begin` rebases the global peak counter and records the wall-clock and
/// heap baselines; `finish` reads the clock and counters again and returns
/// the [`Measurement`]. The reading is only meaningful when nothing else
/// allocates concurrently, which the sequential harness guarantees.
#[derive(Debug)]
pub struct MeasurementScope {
    stopwatch: Stopwatch,
    baseline_bytes: usize,
}

impl MeasurementScope {
    /// Opens a measurement scope.
    pub fn begin() -> Self {
        let baseline_bytes = reset_peak_allocated_bytes();
        Self {
            // Started after the peak rebase so the clock never includes it.
            stopwatch: Stopwatch::new(),
            baseline_bytes,
        }
    }

    /// Closes the scope and reports what it observed.
    pub fn finish(self) -> Measurement {
        let elapsed = self.stopwatch.elapsed();
        let end_bytes = currently_allocated_bytes();
        let peak_bytes = PEAK_ALLOCATED_BYTES.load(Ordering::Relaxed);

        Measurement {
            elapsed,
            heap_delta_bytes: end_bytes as i64 - self.baseline_bytes as i64,
            peak_heap_bytes: peak_bytes.saturating_sub(self.baseline_bytes as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No tracking allocator is registered in this binary, so the byte
    // figures here exercise the zero-reading path; the registered path is
    // covered by the memory_footprint integration test.

    #[test]
    fn elapsed_is_monotonic_and_non_negative() {
        let scope = MeasurementScope::begin();
        let measurement = scope.finish();
        assert!(measurement.elapsed_secs_f64() >= 0.0);
    }

    #[test]
    fn elapsed_covers_the_bracketed_work() {
        let scope = MeasurementScope::begin();
        std::thread::sleep(Duration::from_millis(15));
        let measurement = scope.finish();
        assert!(measurement.elapsed >= Duration::from_millis(15));
    }

    #[test]
    fn unregistered_allocator_reads_zero() {
        let scope = MeasurementScope::begin();
        let _work: Vec<usize> = (0..10_000).collect();
        let measurement = scope.finish();
        assert_eq!(measurement.heap_delta_bytes, 0);
        assert_eq!(measurement.peak_heap_bytes, 0);
    }
}
