/// Binary insertion sort.
///
/// Keeps the prefix `v[..i]` sorted and inserts `v[i]` into it, using a
/// binary search to find the slot and a single rotation to open it. The
/// search cuts comparisons to O(log i) per element, but the rotation still
/// moves O(i) elements, so the sort is O(n^2) overall and O(1) in space.
/// Fast for short slices, which is why the hybrid sort uses it for runs.
///
/// Stable: an element is inserted after every element it is not less than,
/// so equal elements keep their input order. Slices of length 0 or 1 are
/// returned without calling `is_less`.
///
/// `is_less` must be a strict total order. If it is not, the result is an
/// unspecified permutation of the input; the sort still terminates.
pub fn binary_insertion_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let (sorted, rest) = v.split_at(i);
        let pos = insertion_point(sorted, &rest[0], &mut is_less);
        if pos < i {
            v[pos..=i].rotate_right(1);
        }
    }
}

/// Index of the first element of `sorted` that `key` is less than, or
/// `sorted.len()` if there is none.
#[inline]
fn insertion_point<T, F>(sorted: &[T], key: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lo = 0;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_less(key, &sorted[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
