/// Hybrid run-and-merge sort, a simplified Timsort without galloping or
/// natural run detection.
///
/// The input is cut into fixed-size runs, each run is sorted with binary
/// insertion sort, then neighbouring runs are merged bottom-up with a
/// doubling width until one sorted run remains.
use std::num::NonZeroUsize;

use log::trace;

use super::insertion::binary_insertion_sort;
use super::merge::merge_adjacent;

/// Run length used when none is given.
pub const DEFAULT_RUN_SIZE: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(n) => n,
    None => panic!("default run size must be non-zero"),
};

/// Sort `v` with runs of [`DEFAULT_RUN_SIZE`] elements.
pub fn timsort<T, F>(v: &mut [T], is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    timsort_with_run_size(v, DEFAULT_RUN_SIZE, is_less);
}

/// Sort `v` with runs of `run_size` elements.
///
/// Runs are `v[k*R..min((k+1)*R, n)]`. Each merge pass joins
/// `[left, left+width)` with `[left+width, left+2*width)`, clipped to the
/// slice; a trailing block with no right partner is already sorted and is
/// left alone. A run size of at least `v.len()` makes this a plain binary
/// insertion sort.
///
/// O(n log(n/R)) merge comparisons plus O(R^2) insertion work per run,
/// O(n) auxiliary space. Stable. `is_less` must be a strict total order.
pub fn timsort_with_run_size<T, F>(v: &mut [T], run_size: NonZeroUsize, mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let run = run_size.get();
    for chunk in v.chunks_mut(run) {
        binary_insertion_sort(chunk, &mut is_less);
    }
    if run >= len {
        return;
    }

    let mut scratch = Vec::with_capacity(len);
    let mut width = run;
    while width < len {
        let mut left = 0;
        let mut merges = 0usize;
        while left < len {
            let mid = left.saturating_add(width).min(len);
            let right = mid.saturating_add(width).min(len);
            if mid < right {
                merge_adjacent(&mut v[left..right], mid - left, &mut scratch, &mut is_less);
                merges += 1;
            }
            left = right;
        }
        trace!("timsort: width {} pass merged {} block pairs", width, merges);
        width = width.saturating_mul(2);
    }
}
