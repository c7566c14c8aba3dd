//! Two-way merging and top-down merge sort.

/// Merge two sorted slices into `dest`, which must be exactly as long as
/// both inputs together.
///
/// The right element is taken only when it is strictly less than the left
/// one, so on ties the left slice wins and the merge is stable. Once either
/// side runs out, the rest of the other side is copied without comparisons.
pub fn merge_into<T, F>(left: &[T], right: &[T], dest: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(
        left.len() + right.len(),
        dest.len(),
        "merge destination must hold both inputs"
    );

    let (mut li, mut ri, mut k) = (0, 0, 0);
    while li < left.len() && ri < right.len() {
        if is_less(&right[ri], &left[li]) {
            dest[k] = right[ri].clone();
            ri += 1;
        } else {
            dest[k] = left[li].clone();
            li += 1;
        }
        k += 1;
    }

    if li < left.len() {
        dest[k..].clone_from_slice(&left[li..]);
    } else if ri < right.len() {
        dest[k..].clone_from_slice(&right[ri..]);
    }
}

/// Merge the sorted halves `v[..mid]` and `v[mid..]` in place, staging the
/// inputs in `scratch`. The scratch vector is reused between calls so a
/// whole sort allocates at most once.
pub(crate) fn merge_adjacent<T, F>(
    v: &mut [T],
    mid: usize,
    scratch: &mut Vec<T>,
    is_less: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    scratch.clear();
    scratch.extend_from_slice(v);
    let (left, right) = scratch.split_at(mid);
    merge_into(left, right, v, &mut *is_less);
}

/// Classic recursive merge sort.
///
/// Splits the slice at its midpoint, sorts both halves and merges them.
/// O(n log n) comparisons, O(n) auxiliary space for the lifetime of the
/// call, recursion depth log2(n). Stable. Slices of length 0 or 1 are
/// returned without calling `is_less`.
///
/// `is_less` must be a strict total order; otherwise the output is an
/// unspecified permutation of the input.
pub fn merge_sort<T, F>(v: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }
    let mut scratch = Vec::with_capacity(v.len());
    merge_sort_recursive(v, &mut scratch, &mut is_less);
}

fn merge_sort_recursive<T, F>(v: &mut [T], scratch: &mut Vec<T>, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    // Left half takes the extra element of an odd-length range.
    let mid = len - len / 2;
    merge_sort_recursive(&mut v[..mid], scratch, is_less);
    merge_sort_recursive(&mut v[mid..], scratch, is_less);
    merge_adjacent(v, mid, scratch, is_less);
}
