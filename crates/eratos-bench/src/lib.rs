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

//! # Eratos Bench
//!
//! The performance harness: runs every registered sieve algorithm over
//! every requested limit inside a scoped time/memory measurement, and
//! shapes the results for the console and chart consumers.

#![warn(missing_docs)]

pub mod analyze;
pub mod chart;
pub mod measure;

pub use analyze::{analyze, analyze_default};
pub use chart::{execution_time_chart, gap_chart, memory_usage_chart, ChartSpec, Series};
pub use measure::{Measurement, MeasurementScope};
