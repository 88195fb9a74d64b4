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

//! Global heap allocation counters.
//!
//! This module is one half of a contract: a registered global allocator
//! (see `eratos-data`) increments these counters on every allocation, and
//! the measurement scopes in `eratos-bench` read them to compute per-run
//! heap deltas and peak growth. If no tracking allocator is registered the
//! counters stay at zero and every derived figure reads as zero.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Bytes currently allocated by the registered global allocator.
pub static CURRENTLY_ALLOCATED_BYTES: AtomicUsize = AtomicUsize::new(0);

/// High-water mark of [`CURRENTLY_ALLOCATED_BYTES`] since the last
/// [`reset_peak_allocated_bytes`] call (or process start).
pub static PEAK_ALLOCATED_BYTES: AtomicU64 = AtomicU64::new(0);

/// Total number of allocation calls.
pub static TOTAL_ALLOCATIONS: AtomicU64 = AtomicU64::new(0);

/// Total number of deallocation calls.
pub static TOTAL_DEALLOCATIONS: AtomicU64 = AtomicU64::new(0);

/// Cumulative bytes ever allocated.
pub static BYTES_ALLOCATED_LIFETIME: AtomicU64 = AtomicU64::new(0);

/// Cumulative bytes ever deallocated.
pub static BYTES_DEALLOCATED_LIFETIME: AtomicU64 = AtomicU64::new(0);

/// A snapshot of the allocation counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStats {
    /// Bytes currently in use.
    pub current_allocated_bytes: usize,
    /// High-water mark since the last peak reset.
    pub peak_allocated_bytes: u64,
    /// Total allocation calls.
    pub total_allocations: u64,
    /// Total deallocation calls.
    pub total_deallocations: u64,
    /// Cumulative bytes ever allocated.
    pub bytes_allocated_lifetime: u64,
    /// Cumulative bytes ever deallocated.
    pub bytes_deallocated_lifetime: u64,
    /// `total_allocations - total_deallocations`.
    pub net_allocations: i64,
}

/// Reads every counter (relaxed) into a [`MemoryStats`] snapshot.
pub fn memory_stats() -> MemoryStats {
    let total_allocations = TOTAL_ALLOCATIONS.load(Ordering::Relaxed);
    let total_deallocations = TOTAL_DEALLOCATIONS.load(Ordering::Relaxed);

    MemoryStats {
        current_allocated_bytes: CURRENTLY_ALLOCATED_BYTES.load(Ordering::Relaxed),
        peak_allocated_bytes: PEAK_ALLOCATED_BYTES.load(Ordering::Relaxed),
        total_allocations,
        total_deallocations,
        bytes_allocated_lifetime: BYTES_ALLOCATED_LIFETIME.load(Ordering::Relaxed),
        bytes_deallocated_lifetime: BYTES_DEALLOCATED_LIFETIME.load(Ordering::Relaxed),
        net_allocations: total_allocations as i64 - total_deallocations as i64,
    }
}

/// Bytes currently allocated, without the full snapshot.
pub fn currently_allocated_bytes() -> usize {
    CURRENTLY_ALLOCATED_BYTES.load(Ordering::Relaxed)
}

/// Rebases the peak counter to the current usage and returns that usage.
///
/// A measurement scope calls this on entry so that the peak observed on
/// exit reflects only growth inside the scope. Meaningful only while a
/// single logical thread is allocating; concurrent activity outside the
/// scope contaminates the reading.
pub fn reset_peak_allocated_bytes() -> usize {
    let current = CURRENTLY_ALLOCATED_BYTES.load(Ordering::Relaxed);
    PEAK_ALLOCATED_BYTES.store(current as u64, Ordering::Relaxed);
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counter values depend on whether a tracking allocator is registered
    // in the test binary (here it is not), so tests only exercise the
    // snapshot plumbing and the peak rebase contract.

    #[test]
    fn snapshot_is_internally_consistent() {
        let stats = memory_stats();
        assert_eq!(
            stats.net_allocations,
            stats.total_allocations as i64 - stats.total_deallocations as i64
        );
    }

    #[test]
    fn peak_reset_rebases_to_current() {
        let baseline = reset_peak_allocated_bytes();
        assert_eq!(baseline, currently_allocated_bytes());
        assert_eq!(
            PEAK_ALLOCATED_BYTES.load(Ordering::Relaxed),
            baseline as u64
        );
    }
}
