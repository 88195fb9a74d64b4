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

//! The analysis driver: every algorithm, every limit, one measurement each.

use crate::measure::MeasurementScope;
use eratos_core::sieve::{Algorithm, SieveKind};
use eratos_core::telemetry::{BenchmarkReport, BenchmarkResult};

/// Runs every algorithm against every limit and collects the report.
///
/// Limits run in the order supplied; within a limit, algorithms run in
/// registration order, and the report preserves both. Each invocation is
/// bracketed by its own [`MeasurementScope`] so measurements never
/// cross-contaminate. The harness performs no error recovery: a panicking
/// algorithm aborts the whole call.
pub fn analyze(limits: &[usize], algorithms: &[Algorithm]) -> BenchmarkReport {
    let mut report = BenchmarkReport::new();

    for &limit in limits {
        log::info!("Benchmarking limit {limit}");
        for algorithm in algorithms {
            let scope = MeasurementScope::begin();
            let primes = (algorithm.generate)(limit);
            let measurement = scope.finish();

            log::debug!(
                "{} at limit {}: {} primes in {:.4}s (heap delta {} B, peak {} B)",
                algorithm.name,
                limit,
                primes.len(),
                measurement.elapsed_secs_f64(),
                measurement.heap_delta_bytes,
                measurement.peak_heap_bytes,
            );

            report.insert(
                limit,
                algorithm.name.clone(),
                BenchmarkResult::new(
                    primes,
                    measurement.elapsed_secs_f64(),
                    measurement.heap_delta_bytes,
                    measurement.peak_heap_bytes,
                ),
            );
        }
    }
    report
}

/// [`analyze`] over the built-in algorithms in their registration order.
pub fn analyze_default(limits: &[usize]) -> BenchmarkReport {
    let algorithms: Vec<Algorithm> = SieveKind::ALL.iter().map(|kind| kind.as_algorithm()).collect();
    analyze(limits, &algorithms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn report_covers_every_limit_and_algorithm_in_order() {
        let report = analyze_default(&[100, 10]);

        let limits: Vec<usize> = report.limits().collect();
        assert_eq!(limits, vec![100, 10]);

        for run in report.runs() {
            let names: Vec<&str> = run
                .results
                .iter()
                .map(|entry| entry.algorithm.as_str())
                .collect();
            assert_eq!(
                names,
                vec!["Sieve of Eratosthenes", "Segmented Sieve", "Sundaram"]
            );
        }
    }

    #[test]
    fn result_invariants_hold_for_every_entry() {
        let report = analyze_default(&[2, 3, 10, 100]);

        for run in report.runs() {
            for entry in &run.results {
                let result = &entry.result;
                assert!(result.execution_time_secs >= 0.0);
                assert_eq!(result.prime_count, result.primes.len());
                let preview = result.prime_count.min(5);
                assert_eq!(result.first_primes, result.primes[..preview]);
                assert_eq!(
                    result.last_primes,
                    result.primes[result.primes.len() - preview..]
                );
                assert!(result.primes.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }

    #[test]
    fn algorithms_agree_modulo_the_sundaram_bound() {
        let report = analyze_default(&[2, 3, 10, 100, 10_000]);

        for run in report.runs() {
            let reference = &report
                .get(run.limit, SieveKind::Eratosthenes.name())
                .unwrap()
                .primes;
            let segmented = &report
                .get(run.limit, SieveKind::Segmented.name())
                .unwrap()
                .primes;
            assert_eq!(reference, segmented, "limit {}", run.limit);

            let sundaram: Vec<usize> = report
                .get(run.limit, SieveKind::Sundaram.name())
                .unwrap()
                .primes
                .iter()
                .copied()
                .filter(|&p| p <= run.limit)
                .collect();
            assert_eq!(reference, &sundaram, "limit {}", run.limit);
        }
    }

    #[test]
    fn custom_algorithms_run_under_their_registered_name() {
        fn fixed(_limit: usize) -> Vec<usize> {
            vec![2, 3, 5]
        }

        let algorithms = [Algorithm {
            name: Cow::Borrowed("fixed"),
            generate: fixed,
        }];
        let report = analyze(&[42], &algorithms);

        let result = report.get(42, "fixed").unwrap();
        assert_eq!(result.prime_count, 3);
        assert_eq!(result.primes, vec![2, 3, 5]);
    }

    #[test]
    fn empty_inputs_produce_an_empty_report() {
        // A limit with no algorithms never opens a run entry at all.
        assert!(analyze_default(&[]).is_empty());
        assert!(analyze(&[10], &[]).is_empty());
    }
}
