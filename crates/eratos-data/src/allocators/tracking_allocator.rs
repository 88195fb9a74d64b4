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

//! An implementation of `GlobalAlloc` that tracks heap usage.

use eratos_core::memory::*;
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::Ordering;

/// A wrapper around a `GlobalAlloc` implementation (normally
/// [`System`]) that intercepts every allocation call to update the global
/// counters defined in `eratos_core::memory`.
///
/// Registering it as the `#[global_allocator]` is what makes the benchmark
/// harness's heap-delta and peak figures non-zero; without it they read as
/// zero and measurements are timing-only.
///
/// # Type Parameters
///
/// * `A`: The underlying allocator performing the actual work. Defaults to
///   [`System`].
///
/// # Usage
///
/// ```rust,ignore
/// use eratos_data::TrackingAllocator;
///
/// #[global_allocator]
/// static GLOBAL: TrackingAllocator = TrackingAllocator::new(std::alloc::System);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator<A = System> {
    inner: A,
}

impl<A> TrackingAllocator<A> {
    /// Creates a tracking allocator wrapping the given inner allocator.
    pub const fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A> TrackingAllocator<A> {
    fn record_alloc(size: usize) {
        let result = CURRENTLY_ALLOCATED_BYTES.fetch_update(
            Ordering::Relaxed,
            Ordering::Relaxed,
            |current| current.checked_add(size),
        );

        match result {
            Ok(previous_total) => {
                let new_total = previous_total + size;
                PEAK_ALLOCATED_BYTES.fetch_max(new_total as u64, Ordering::Relaxed);
                TOTAL_ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
                BYTES_ALLOCATED_LIFETIME.fetch_add(size as u64, Ordering::Relaxed);
            }
            Err(_) => {
                log::error!("Memory tracking counter overflowed during alloc! Size: {size}");
            }
        }
    }

    fn record_dealloc(size: usize) {
        let result = CURRENTLY_ALLOCATED_BYTES.fetch_update(
            Ordering::Relaxed,
            Ordering::Relaxed,
            |current| current.checked_sub(size),
        );

        if result.is_err() {
            log::error!("Memory tracking counter underflowed during dealloc! Size: {size}");
        } else {
            TOTAL_DEALLOCATIONS.fetch_add(1, Ordering::Relaxed);
            BYTES_DEALLOCATED_LIFETIME.fetch_add(size as u64, Ordering::Relaxed);
        }
    }
}

unsafe impl<A: GlobalAlloc> GlobalAlloc for TrackingAllocator<A> {
    /// Allocates memory and updates the tracking counters.
    ///
    /// # Safety
    ///
    /// Part of the `GlobalAlloc` contract; the caller must ensure `layout`
    /// has a non-zero size.
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc(layout);
        if !ptr.is_null() {
            Self::record_alloc(layout.size());
        }
        ptr
    }

    /// Deallocates memory and updates the tracking counters.
    ///
    /// # Safety
    ///
    /// Part of the `GlobalAlloc` contract; `ptr` must have been allocated
    /// by this allocator with the same `layout`.
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        Self::record_dealloc(layout.size());
        self.inner.dealloc(ptr, layout);
    }

    /// Allocates zero-initialized memory and updates the tracking counters.
    ///
    /// # Safety
    ///
    /// Same requirements as [`alloc`](Self::alloc).
    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc_zeroed(layout);
        if !ptr.is_null() {
            Self::record_alloc(layout.size());
        }
        ptr
    }

    /// Reallocates memory and updates the tracking counters by the size
    /// difference.
    ///
    /// # Safety
    ///
    /// Same requirements as `GlobalAlloc::realloc`.
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let old_size = layout.size();
        let new_ptr = self.inner.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            match new_size.cmp(&old_size) {
                std::cmp::Ordering::Greater => {
                    let grown = new_size - old_size;
                    BYTES_ALLOCATED_LIFETIME.fetch_add(grown as u64, Ordering::Relaxed);
                    let result = CURRENTLY_ALLOCATED_BYTES.fetch_update(
                        Ordering::Relaxed,
                        Ordering::Relaxed,
                        |current| current.checked_add(grown),
                    );
                    match result {
                        Ok(previous_total) => {
                            let new_total = previous_total + grown;
                            PEAK_ALLOCATED_BYTES.fetch_max(new_total as u64, Ordering::Relaxed);
                        }
                        Err(_) => {
                            log::error!(
                                "Memory tracking counter overflowed during realloc! Grown: {grown}"
                            );
                        }
                    }
                }
                std::cmp::Ordering::Less => {
                    let shrunk = old_size - new_size;
                    BYTES_DEALLOCATED_LIFETIME.fetch_add(shrunk as u64, Ordering::Relaxed);
                    let result = CURRENTLY_ALLOCATED_BYTES.fetch_update(
                        Ordering::Relaxed,
                        Ordering::Relaxed,
                        |current| current.checked_sub(shrunk),
                    );
                    if result.is_err() {
                        log::error!(
                            "Memory tracking counter underflowed during realloc! Shrunk: {shrunk}"
                        );
                    }
                }
                std::cmp::Ordering::Equal => {}
            }
        }
        new_ptr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The allocator is exercised directly here rather than registered
    // globally, so the counters only move when these tests drive them.
    // Assertions are deltas, not absolutes, to stay independent of test
    // ordering within this binary.

    #[test]
    fn alloc_and_dealloc_move_the_counters_symmetrically() {
        let allocator: TrackingAllocator = TrackingAllocator::new(System);
        let layout = Layout::from_size_align(4096, 8).unwrap();

        let allocs_before = TOTAL_ALLOCATIONS.load(Ordering::Relaxed);
        let lifetime_before = BYTES_ALLOCATED_LIFETIME.load(Ordering::Relaxed);

        unsafe {
            let ptr = allocator.alloc(layout);
            assert!(!ptr.is_null());
            allocator.dealloc(ptr, layout);
        }

        assert!(TOTAL_ALLOCATIONS.load(Ordering::Relaxed) > allocs_before);
        assert!(BYTES_ALLOCATED_LIFETIME.load(Ordering::Relaxed) >= lifetime_before + 4096);
    }

    #[test]
    fn peak_observes_growth() {
        let allocator: TrackingAllocator = TrackingAllocator::new(System);
        let layout = Layout::from_size_align(64 * 1024, 8).unwrap();

        let baseline = eratos_core::memory::reset_peak_allocated_bytes() as u64;
        unsafe {
            let ptr = allocator.alloc(layout);
            assert!(!ptr.is_null());
            let peak = PEAK_ALLOCATED_BYTES.load(Ordering::Relaxed);
            // Concurrent tests in this binary move the counters by at most
            // a few KiB, so a 32 KiB margin keeps this race-free.
            assert!(peak >= baseline + 32 * 1024);
            allocator.dealloc(ptr, layout);
        }
    }
}
