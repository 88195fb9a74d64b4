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

// Eratos Suite
// Benchmarks the three sieve algorithms over the reference limits,
// prints the per-run report, and optionally emits chart JSON for an
// external plotting tool (set ERATOS_CHART_JSON=1).

use anyhow::Result;
use eratos_bench::{
    analyze_default, execution_time_chart, gap_chart, memory_usage_chart, ChartSpec,
};
use eratos_core::gaps::{prime_gaps, twin_prime_gaps, twin_primes};
use eratos_core::memory::memory_stats;
use eratos_core::sieve::SieveKind;
use eratos_core::telemetry::BenchmarkReport;
use eratos_data::TrackingAllocator;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator::new(std::alloc::System);

/// The reference limit ladder.
const TEST_LIMITS: [usize; 4] = [10_000, 100_000, 1_000_000, 10_000_000];

/// The limit whose Eratosthenes run feeds the gap analysis.
const GAP_SOURCE_LIMIT: usize = 100_000;

fn main() -> Result<()> {
    env_logger::init();

    let report = analyze_default(&TEST_LIMITS);
    print_report(&report);

    let source = report.require(GAP_SOURCE_LIMIT, SieveKind::Eratosthenes.name())?;
    let gaps = prime_gaps(&source.primes);
    let twins = twin_primes(&source.primes);
    let twin_gaps = twin_prime_gaps(&twins);
    log::info!(
        "Gap analysis over limit {}: {} gaps, {} twin pairs",
        GAP_SOURCE_LIMIT,
        gaps.len(),
        twins.len(),
    );

    let charts = [
        execution_time_chart(&report),
        memory_usage_chart(&report),
        gap_chart(
            &gaps,
            "Prime Number Gaps",
            "Gap Size (number of non-primes)",
        ),
        gap_chart(&twin_gaps, "Twin Prime Gaps", "Gap Size Between Twin Primes"),
    ];
    if std::env::var_os("ERATOS_CHART_JSON").is_some() {
        emit_charts(&charts)?;
    }

    let stats = memory_stats();
    log::debug!(
        "allocator totals: {} allocations, {} deallocations, {} B lifetime",
        stats.total_allocations,
        stats.total_deallocations,
        stats.bytes_allocated_lifetime,
    );

    Ok(())
}

fn print_report(report: &BenchmarkReport) {
    for run in report.runs() {
        println!("\nPerformance Analysis for Limit: {}", run.limit);
        for entry in &run.results {
            let result = &entry.result;
            println!("\n{}:", entry.algorithm);
            println!(
                "  Execution Time: {:.4} seconds",
                result.execution_time_secs
            );
            println!("  Prime Count: {}", result.prime_count);
            println!("  Memory Used: {:.4} MB", result.memory_used_mb());
            println!("  Peak Memory: {:.4} MB", result.peak_memory_mb());
            println!("  First 5 Primes: {:?}", result.first_primes);
            println!("  Last 5 Primes: {:?}", result.last_primes);
        }
    }
}

fn emit_charts(charts: &[ChartSpec]) -> Result<()> {
    for chart in charts {
        println!("{}", serde_json::to_string_pretty(chart)?);
    }
    Ok(())
}
