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

//! The three classical prime sieve algorithms.
//!
//! Each algorithm is a pure function from an inclusive upper limit to the
//! ordered list of primes it finds. There is no shared mutable state
//! between calls, so independent invocations are safe to run concurrently
//! even though the benchmark harness drives them sequentially.

mod eratosthenes;
mod segmented;
mod sundaram;

pub use eratosthenes::eratosthenes;
pub use segmented::segmented;
pub use sundaram::sundaram;

use std::borrow::Cow;
use std::fmt;

/// A prime generation function: inclusive upper limit in, ordered primes out.
pub type SieveFn = fn(usize) -> Vec<usize>;

/// The sieve algorithms this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SieveKind {
    /// Full-range boolean-marker sieve.
    Eratosthenes,
    /// Square-root-sized segments, bounding peak auxiliary memory.
    Segmented,
    /// Odd-domain sieve; see [`sundaram`] for its boundary behavior.
    Sundaram,
}

impl SieveKind {
    /// Every built-in algorithm, in the harness registration order.
    pub const ALL: [SieveKind; 3] = [
        SieveKind::Eratosthenes,
        SieveKind::Segmented,
        SieveKind::Sundaram,
    ];

    /// The display name used as the report key.
    pub fn name(&self) -> &'static str {
        match self {
            SieveKind::Eratosthenes => "Sieve of Eratosthenes",
            SieveKind::Segmented => "Segmented Sieve",
            SieveKind::Sundaram => "Sundaram",
        }
    }

    /// Runs the algorithm for the given limit.
    pub fn generate(&self, limit: usize) -> Vec<usize> {
        (self.sieve_fn())(limit)
    }

    /// The underlying function pointer.
    pub fn sieve_fn(&self) -> SieveFn {
        match self {
            SieveKind::Eratosthenes => eratosthenes,
            SieveKind::Segmented => segmented,
            SieveKind::Sundaram => sundaram,
        }
    }

    /// Packages the algorithm as a harness registration pair.
    pub fn as_algorithm(&self) -> Algorithm {
        Algorithm {
            name: Cow::Borrowed(self.name()),
            generate: self.sieve_fn(),
        }
    }
}

impl fmt::Display for SieveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named prime generation function, as registered with the harness.
///
/// Custom algorithms can be benchmarked alongside the built-ins by
/// constructing one of these directly; the harness only sees the pair.
#[derive(Debug, Clone)]
pub struct Algorithm {
    /// The name under which results are keyed in the report.
    pub name: Cow<'static, str>,
    /// The generation function itself.
    pub generate: SieveFn,
}
