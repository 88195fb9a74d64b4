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

//! Gap metrics derived from an ordered prime list.
//!
//! All three transformations are pure and stateless; empty and singleton
//! inputs simply yield empty outputs.

/// Differences between consecutive primes.
///
/// The output has one element fewer than the input (zero for inputs
/// shorter than two).
pub fn prime_gaps(primes: &[usize]) -> Vec<usize> {
    primes.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Consecutive prime pairs whose gap is exactly 2.
///
/// Only adjacent list elements are considered, so a pair of primes that
/// differ by 2 but have another prime between them is never reported
/// (which cannot happen for real prime lists, but holds for arbitrary
/// input too).
pub fn twin_primes(primes: &[usize]) -> Vec<(usize, usize)> {
    primes
        .windows(2)
        .filter(|pair| pair[1] - pair[0] == 2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// Differences between the first elements of consecutive twin-prime pairs.
pub fn twin_prime_gaps(twins: &[(usize, usize)]) -> Vec<usize> {
    twins.windows(2).map(|pair| pair[1].0 - pair[0].0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_of_reference_list() {
        assert_eq!(prime_gaps(&[2, 3, 5, 7, 11]), vec![1, 2, 2, 4]);
    }

    #[test]
    fn gaps_of_short_inputs_are_empty() {
        assert!(prime_gaps(&[]).is_empty());
        assert!(prime_gaps(&[2]).is_empty());
    }

    #[test]
    fn twins_of_reference_list() {
        assert_eq!(twin_primes(&[2, 3, 5, 7, 11]), vec![(3, 5), (5, 7)]);
    }

    #[test]
    fn twins_require_adjacency() {
        // 13 and 15 are not both prime, but the function only looks at
        // consecutive elements and their difference.
        assert_eq!(twin_primes(&[11, 13, 17]), vec![(11, 13)]);
        assert!(twin_primes(&[2, 7, 23]).is_empty());
    }

    #[test]
    fn twin_gaps_of_reference_list() {
        assert_eq!(twin_prime_gaps(&[(3, 5), (5, 7)]), vec![2]);
    }

    #[test]
    fn twin_gaps_of_short_inputs_are_empty() {
        assert!(twin_prime_gaps(&[]).is_empty());
        assert!(twin_prime_gaps(&[(3, 5)]).is_empty());
    }

    #[test]
    fn chain_over_a_sieved_list() {
        let primes = crate::sieve::eratosthenes(100);
        let twins = twin_primes(&primes);
        assert_eq!(
            twins,
            vec![(3, 5), (5, 7), (11, 13), (17, 19), (29, 31), (41, 43), (59, 61), (71, 73)]
        );
        assert_eq!(twin_prime_gaps(&twins).len(), twins.len() - 1);
    }
}
