//! dsk-sort: randomized in-place quicksort.
//!
//! Hoare partitioning with a randomly chosen pivot, falling back to
//! insertion sort on short subranges. Not stable; O(n log n) expected time,
//! O(log n) expected stack depth.

use rand::Rng;

/// Subranges shorter than this are insertion-sorted instead of partitioned.
const INSERTION_CUTOFF: usize = 40;

/// Sort the slice into ascending order using a thread-local RNG for pivot
/// selection.
pub fn quicksort<T: Ord + Copy>(v: &mut [T]) {
    quicksort_with(v, &mut rand::thread_rng());
}

/// Sort the slice into ascending order drawing pivots from the given RNG.
///
/// Handy for deterministic tests with a seeded [`rand::rngs::StdRng`].
pub fn quicksort_with<T: Ord + Copy, R: Rng>(v: &mut [T], rng: &mut R) {
    if v.len() < INSERTION_CUTOFF {
        insertion_sort(v);
        return;
    }

    let mid = partition(v, rng);
    let (lo, hi) = v.split_at_mut(mid + 1);
    quicksort_with(lo, rng);
    quicksort_with(hi, rng);
}

fn insertion_sort<T: Ord + Copy>(a: &mut [T]) {
    for i in 1..a.len() {
        let x = a[i];
        let mut j = i;
        while j > 0 && a[j - 1] > x {
            a[j] = a[j - 1];
            j -= 1;
        }
        a[j] = x;
    }
}

/// Hoare partition around a random pivot.
///
/// The pivot element is first swapped to `a[0]`; that guarantees the
/// returned split point is strictly less than `a.len() - 1`, so both
/// subranges shrink. Elements in `a[..=mid]` are <= every element in
/// `a[mid + 1..]`.
fn partition<T: Ord + Copy, R: Rng>(a: &mut [T], rng: &mut R) -> usize {
    a.swap(0, rng.gen_range(0..a.len()));
    let pivot = a[0];

    let mut i: isize = -1;
    let mut j = a.len() as isize;
    loop {
        loop {
            i += 1;
            if a[i as usize] >= pivot {
                break;
            }
        }
        loop {
            j -= 1;
            if a[j as usize] <= pivot {
                break;
            }
        }
        if i >= j {
            return j as usize;
        }
        a.swap(i as usize, j as usize);
    }
}
