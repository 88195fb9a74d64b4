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

//! # Eratos Core
//!
//! Foundational crate containing the prime sieve algorithms, the derived
//! gap metrics, the global memory-tracking contract, and the benchmark
//! report types shared by the rest of the workspace.

#![warn(missing_docs)]

pub mod gaps;
pub mod memory;
pub mod sieve;
pub mod telemetry;
pub mod utils;

pub use sieve::{Algorithm, SieveKind};
pub use utils::timer::Stopwatch;
