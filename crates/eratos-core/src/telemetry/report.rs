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

//! The benchmark report: one record per (limit, algorithm) run.
//!
//! The report is the stable boundary handed to presentation code, so it is
//! plain data, `Serialize`-able, and iterable in exactly the order runs
//! were inserted (limit order first, then algorithm registration order).

use serde::Serialize;
use thiserror::Error;

/// How many leading and trailing primes a result keeps as a preview.
pub const PREVIEW_LEN: usize = 5;

/// The record produced for a single (limit, algorithm) run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    /// Wall-clock duration of the run, in seconds. Never negative; very
    /// fast runs may read as zero at the clock's resolution.
    pub execution_time_secs: f64,
    /// Number of primes produced; always equals `primes.len()`.
    pub prime_count: usize,
    /// Up to the first [`PREVIEW_LEN`] primes.
    pub first_primes: Vec<usize>,
    /// Up to the last [`PREVIEW_LEN`] primes.
    pub last_primes: Vec<usize>,
    /// The full prime list, owned by the report.
    pub primes: Vec<usize>,
    /// Signed heap delta across the run, in bytes. Allocator reuse makes
    /// this noisy; it can legitimately be zero or negative, so it is
    /// informational only.
    pub memory_used_bytes: i64,
    /// Peak heap growth above the run's baseline, in bytes. Zero when no
    /// tracking allocator is registered.
    pub peak_memory_bytes: u64,
}

impl BenchmarkResult {
    /// Builds a result record from a prime list and its measurements,
    /// deriving the count and the previews.
    pub fn new(
        primes: Vec<usize>,
        execution_time_secs: f64,
        memory_used_bytes: i64,
        peak_memory_bytes: u64,
    ) -> Self {
        let first_primes = primes.iter().take(PREVIEW_LEN).copied().collect();
        let last_primes = primes
            .iter()
            .skip(primes.len().saturating_sub(PREVIEW_LEN))
            .copied()
            .collect();
        Self {
            execution_time_secs,
            prime_count: primes.len(),
            first_primes,
            last_primes,
            primes,
            memory_used_bytes,
            peak_memory_bytes,
        }
    }

    /// The signed heap delta in megabytes.
    pub fn memory_used_mb(&self) -> f64 {
        self.memory_used_bytes as f64 / (1024.0 * 1024.0)
    }

    /// The peak heap growth in megabytes.
    pub fn peak_memory_mb(&self) -> f64 {
        self.peak_memory_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// All results recorded for one limit, in algorithm registration order.
#[derive(Debug, Clone, Serialize)]
pub struct LimitRun {
    /// The inclusive upper bound the algorithms were run with.
    pub limit: usize,
    /// One entry per registered algorithm.
    pub results: Vec<AlgorithmRun>,
}

/// One algorithm's result within a [`LimitRun`].
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmRun {
    /// The algorithm name the result is keyed by.
    pub algorithm: String,
    /// The run record.
    pub result: BenchmarkResult,
}

/// Lookup failure on a [`BenchmarkReport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// No run was recorded for the requested (limit, algorithm) pair.
    #[error("no benchmark entry for limit {limit} and algorithm {algorithm:?}")]
    MissingEntry {
        /// The limit that was looked up.
        limit: usize,
        /// The algorithm name that was looked up.
        algorithm: String,
    },
}

/// The full benchmark report, ordered by insertion.
///
/// Backed by vectors rather than a map so that iteration reproduces the
/// order limits were supplied and algorithms were registered.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchmarkReport {
    runs: Vec<LimitRun>,
}

impl BenchmarkReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result under the given limit and algorithm name.
    ///
    /// A new limit opens a new [`LimitRun`] at the end of the report;
    /// an already-seen limit appends to its existing run list.
    pub fn insert(
        &mut self,
        limit: usize,
        algorithm: impl Into<String>,
        result: BenchmarkResult,
    ) {
        let entry = AlgorithmRun {
            algorithm: algorithm.into(),
            result,
        };
        match self.runs.iter_mut().find(|run| run.limit == limit) {
            Some(run) => run.results.push(entry),
            None => self.runs.push(LimitRun {
                limit,
                results: vec![entry],
            }),
        }
    }

    /// Looks up the result for a (limit, algorithm) pair.
    pub fn get(&self, limit: usize, algorithm: &str) -> Option<&BenchmarkResult> {
        self.runs
            .iter()
            .find(|run| run.limit == limit)?
            .results
            .iter()
            .find(|entry| entry.algorithm == algorithm)
            .map(|entry| &entry.result)
    }

    /// Like [`get`](Self::get) but with a typed error for the miss case.
    pub fn require(&self, limit: usize, algorithm: &str) -> Result<&BenchmarkResult, ReportError> {
        self.get(limit, algorithm).ok_or_else(|| ReportError::MissingEntry {
            limit,
            algorithm: algorithm.to_owned(),
        })
    }

    /// The recorded limits, in insertion order.
    pub fn limits(&self) -> impl Iterator<Item = usize> + '_ {
        self.runs.iter().map(|run| run.limit)
    }

    /// All runs, in insertion order.
    pub fn runs(&self) -> &[LimitRun] {
        &self.runs
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(primes: Vec<usize>) -> BenchmarkResult {
        BenchmarkResult::new(primes, 0.0, 0, 0)
    }

    #[test]
    fn previews_track_the_prime_list() {
        let result = result_with(vec![2, 3, 5, 7, 11, 13, 17]);
        assert_eq!(result.prime_count, 7);
        assert_eq!(result.first_primes, vec![2, 3, 5, 7, 11]);
        assert_eq!(result.last_primes, vec![5, 7, 11, 13, 17]);
    }

    #[test]
    fn short_lists_preview_everything() {
        let result = result_with(vec![2, 3]);
        assert_eq!(result.first_primes, vec![2, 3]);
        assert_eq!(result.last_primes, vec![2, 3]);

        let empty = result_with(Vec::new());
        assert_eq!(empty.prime_count, 0);
        assert!(empty.first_primes.is_empty());
        assert!(empty.last_primes.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut report = BenchmarkReport::new();
        report.insert(100, "b", result_with(vec![2]));
        report.insert(100, "a", result_with(vec![2]));
        report.insert(10, "b", result_with(vec![2]));

        let limits: Vec<usize> = report.limits().collect();
        assert_eq!(limits, vec![100, 10]);

        let names: Vec<&str> = report.runs()[0]
            .results
            .iter()
            .map(|entry| entry.algorithm.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn lookup_hits_and_misses() {
        let mut report = BenchmarkReport::new();
        report.insert(10, "a", result_with(vec![2, 3, 5, 7]));

        assert_eq!(report.get(10, "a").unwrap().prime_count, 4);
        assert!(report.get(10, "z").is_none());
        assert_eq!(
            report.require(99, "a").unwrap_err(),
            ReportError::MissingEntry {
                limit: 99,
                algorithm: "a".to_owned(),
            }
        );
    }

    #[test]
    fn megabyte_conversions() {
        let mut result = result_with(vec![2]);
        result.memory_used_bytes = 2 * 1024 * 1024;
        result.peak_memory_bytes = 1024 * 1024;
        assert_eq!(result.memory_used_mb(), 2.0);
        assert_eq!(result.peak_memory_mb(), 1.0);
    }
}
