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

//! The sieve of Eratosthenes over the full range `[0, limit]`.

/// Returns every prime in `[2, limit]`, in ascending order.
///
/// Allocates one boolean marker per candidate, so peak auxiliary memory is
/// O(limit). For a given `i` the inner loop starts at `i * i`: every smaller
/// composite multiple of `i` has a prime factor below `i` and is already
/// struck.
///
/// Limits below 2 yield an empty list.
pub fn eratosthenes(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }

    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            let mut multiple = i * i;
            while multiple <= limit {
                is_prime[multiple] = false;
                multiple += i;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .skip(2)
        .filter_map(|(candidate, &keep)| keep.then_some(candidate))
        .collect()
}
