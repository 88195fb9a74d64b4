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

//! A stopwatch over the monotonic clock.

use std::time::{Duration, Instant};

/// Measures elapsed wall-clock time from its creation.
///
/// Backed by [`Instant`], so readings are monotonic and never negative.
/// Very fast scopes can still read as zero when the platform clock lacks
/// the resolution to distinguish them.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    /// Creates a stopwatch and starts it immediately.
    #[inline]
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Elapsed time since the stopwatch was started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Elapsed time in whole milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Elapsed time in seconds as an `f64`.
    #[inline]
    pub fn elapsed_secs_f64(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Restarts the stopwatch, returning the elapsed time up to now.
    #[inline]
    pub fn restart(&mut self) -> Duration {
        let elapsed = self.started_at.elapsed();
        self.started_at = Instant::now();
        elapsed
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
