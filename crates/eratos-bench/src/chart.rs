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

//! Chart-ready views of a benchmark report.
//!
//! Rendering lives outside this workspace; these types only fix the shape
//! a plotting collaborator consumes: a title, axis labels, an x-scale
//! hint, and one point series per algorithm.

use eratos_core::telemetry::BenchmarkReport;
use serde::Serialize;

/// One labelled line in a chart.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// (x, y) points in drawing order.
    pub points: Vec<(f64, f64)>,
}

/// A complete chart description.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Whether the x-axis should be log-scaled.
    pub log_x: bool,
    /// The data series.
    pub series: Vec<Series>,
}

/// Execution time against limit, one series per algorithm.
pub fn execution_time_chart(report: &BenchmarkReport) -> ChartSpec {
    ChartSpec {
        title: "Prime Generation Algorithm Performance Comparison".to_owned(),
        x_label: "Upper Limit".to_owned(),
        y_label: "Execution Time (seconds)".to_owned(),
        log_x: true,
        series: per_algorithm_series(report, |result| result.execution_time_secs),
    }
}

/// Memory use in MB against limit, one series per algorithm.
pub fn memory_usage_chart(report: &BenchmarkReport) -> ChartSpec {
    ChartSpec {
        title: "Prime Generation Algorithm Memory Usage".to_owned(),
        x_label: "Upper Limit".to_owned(),
        y_label: "Memory Usage (MB)".to_owned(),
        log_x: true,
        series: per_algorithm_series(report, |result| result.memory_used_mb()),
    }
}

/// A generic gap-sequence line chart, reused for prime gaps and
/// twin-prime gaps by parameterizing the title and y-axis label.
pub fn gap_chart(gaps: &[usize], title: &str, y_label: &str) -> ChartSpec {
    ChartSpec {
        title: title.to_owned(),
        x_label: "Gap Index".to_owned(),
        y_label: y_label.to_owned(),
        log_x: false,
        series: vec![Series {
            label: title.to_owned(),
            points: gaps
                .iter()
                .enumerate()
                .map(|(index, &gap)| (index as f64, gap as f64))
                .collect(),
        }],
    }
}

/// One series per algorithm (registration order), one point per limit
/// (insertion order), with the y-value extracted per result.
fn per_algorithm_series(
    report: &BenchmarkReport,
    value: impl Fn(&eratos_core::telemetry::BenchmarkResult) -> f64,
) -> Vec<Series> {
    let mut series: Vec<Series> = Vec::new();

    for run in report.runs() {
        for entry in &run.results {
            let point = (run.limit as f64, value(&entry.result));
            match series.iter_mut().find(|s| s.label == entry.algorithm) {
                Some(existing) => existing.points.push(point),
                None => series.push(Series {
                    label: entry.algorithm.clone(),
                    points: vec![point],
                }),
            }
        }
    }
    series
}
