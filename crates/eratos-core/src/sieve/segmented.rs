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

//! A segmented sieve of Eratosthenes.

use super::eratosthenes;

/// Returns every prime in `[2, limit]` by sieving sqrt-sized segments.
///
/// Base primes up to `isqrt(limit)` are computed once with the full-range
/// sieve; `[2, limit]` is then partitioned into segments of `isqrt(limit)`
/// candidates (the last one truncated), and each segment strikes multiples
/// of the base primes independently. Striking starts at the larger of `p²`
/// and the first multiple of `p` at or above the segment's low bound.
///
/// Peak auxiliary allocation is therefore O(sqrt(limit)) per segment
/// instead of the full sieve's O(limit) marker array, which is what the
/// memory benchmark is designed to expose.
///
/// Limits below 2 yield an empty list.
pub fn segmented(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }

    let segment_size = limit.isqrt();
    let base_primes = eratosthenes(segment_size);

    let mut primes = Vec::new();
    let mut low = 2;
    while low <= limit {
        let high = (low + segment_size - 1).min(limit);
        let mut survives = vec![true; high - low + 1];

        for &p in &base_primes {
            let first = (p * p).max(low.div_ceil(p) * p);
            let mut multiple = first;
            while multiple <= high {
                survives[multiple - low] = false;
                multiple += p;
            }
        }

        for (offset, &keep) in survives.iter().enumerate() {
            if keep {
                primes.push(low + offset);
            }
        }
        low += segment_size;
    }
    primes
}
