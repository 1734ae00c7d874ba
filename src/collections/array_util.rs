//! Hybrid binary/linear search over sorted primitive arrays, and the
//! amortized array growth policy used by every paged collection.

/// Below this many live elements, a binary search switches to a linear
/// scan — cheaper once the range is small enough to fit a few cache lines.
pub const LINEAR_SEARCH_LIMIT: usize = 64;

/// Maximum size for a single (non-paged) array allocation.
pub const MAX_ARRAY_LENGTH: usize = 1 << 28;

pub struct ArrayUtil;

impl ArrayUtil {
    /// Returns `true` iff `key` occurs anywhere in `arr[0..len)`, which must be sorted.
    pub fn contains_sorted(arr: &[i64], len: usize, key: i64) -> bool {
        Self::binary_search_index(arr, 0, len, key) >= 0
    }

    /// Returns the index of `key` in `arr[0..len)`, or `-(insertion_point + 1)`
    /// if absent, matching the classic binary-search contract.
    pub fn index_of(arr: &[i64], len: usize, key: i64) -> i64 {
        Self::binary_search_index(arr, 0, len, key)
    }

    /// Binary search over the whole `arr[0..len)` range, returning the match
    /// index or `-(insertion_point + 1)` if absent.
    pub fn binary_search_index_full(arr: &[i64], len: usize, key: i64) -> i64 {
        Self::binary_search_index(arr, 0, len, key)
    }

    /// Leftmost occurrence of `key` in `arr[lo..hi)`, or a negative
    /// insertion point if absent.
    pub fn first_of(arr: &[i64], lo: usize, hi: usize, key: i64) -> i64 {
        Self::binary_search_first(arr, lo, hi, key)
    }

    /// Rightmost occurrence of `key` in `arr[lo..hi)`, or a negative
    /// insertion point if absent.
    pub fn last_of(arr: &[i64], lo: usize, hi: usize, key: i64) -> i64 {
        Self::binary_search_last(arr, lo, hi, key)
    }

    /// Returns `k` such that `bucket_starts[k] <= id < bucket_starts[k+1]`,
    /// `-1` if `id < bucket_starts[0]`, or `len - 1` if `id` is past the
    /// last bucket start.
    pub fn range_bucket(id: i64, bucket_starts: &[i64]) -> isize {
        if bucket_starts.is_empty() || id < bucket_starts[0] {
            return -1;
        }
        let insertion = Self::binary_search_index(bucket_starts, 0, bucket_starts.len(), id);
        if insertion >= 0 {
            insertion as isize
        } else {
            // -(insertion_point + 1): bucket_starts[insertion_point - 1] < id < bucket_starts[insertion_point]
            let insertion_point = (-insertion - 1) as isize;
            insertion_point - 1
        }
    }

    fn binary_search_index(arr: &[i64], from: usize, to: usize, key: i64) -> i64 {
        let mut lo = from;
        let mut hi = to;
        while hi - lo > LINEAR_SEARCH_LIMIT {
            let mid = lo + (hi - lo) / 2;
            match arr[mid].cmp(&key) {
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
                std::cmp::Ordering::Equal => return mid as i64,
            }
        }
        Self::linear_search_2_index(arr, lo, hi, key)
    }

    fn binary_search_first(arr: &[i64], from: usize, to: usize, key: i64) -> i64 {
        let mut lo = from;
        let mut hi = to;
        while hi - lo > LINEAR_SEARCH_LIMIT {
            let mid = lo + (hi - lo) / 2;
            if arr[mid] < key {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        let found = Self::linear_search_first(arr, lo, hi, key);
        found
    }

    fn binary_search_last(arr: &[i64], from: usize, to: usize, key: i64) -> i64 {
        let mut lo = from;
        let mut hi = to;
        while hi - lo > LINEAR_SEARCH_LIMIT {
            let mid = lo + (hi - lo) / 2;
            if arr[mid] <= key {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        Self::linear_search_last(arr, lo, hi, key)
    }

    /// Linear scan over a sorted range, early-exiting once an element
    /// exceeds `key`. Returns the match index or `-(insertion_point + 1)`.
    fn linear_search_2_index(arr: &[i64], from: usize, to: usize, key: i64) -> i64 {
        for i in from..to {
            if arr[i] == key {
                return i as i64;
            }
            if arr[i] > key {
                return -((i as i64) + 1);
            }
        }
        -((to as i64) + 1)
    }

    fn linear_search_first(arr: &[i64], from: usize, to: usize, key: i64) -> i64 {
        for i in from..to {
            if arr[i] == key {
                return i as i64;
            }
            if arr[i] > key {
                return -((i as i64) + 1);
            }
        }
        -((to as i64) + 1)
    }

    fn linear_search_last(arr: &[i64], from: usize, to: usize, key: i64) -> i64 {
        let mut result = -1i64;
        for i in from..to {
            if arr[i] == key {
                result = i as i64;
            } else if arr[i] > key {
                return if result >= 0 {
                    result
                } else {
                    -((i as i64) + 1)
                };
            }
        }
        if result >= 0 {
            result
        } else {
            -((to as i64) + 1)
        }
    }

    /// Unrolled (stride-4) linear search over an unsorted range. Returns
    /// the index of the first occurrence of `key`, or `-1`.
    pub fn linear_search(arr: &[i64], from: usize, to: usize, key: i64) -> i64 {
        let mut i = from;
        while i + 4 <= to {
            if arr[i] == key {
                return i as i64;
            }
            if arr[i + 1] == key {
                return (i + 1) as i64;
            }
            if arr[i + 2] == key {
                return (i + 2) as i64;
            }
            if arr[i + 3] == key {
                return (i + 3) as i64;
            }
            i += 4;
        }
        while i < to {
            if arr[i] == key {
                return i as i64;
            }
            i += 1;
        }
        -1
    }

    /// Amortized array growth: computes a new capacity ≥ `min_target_size`,
    /// adding `max(3, min_target_size / 8)` slack and rounding up to the
    /// alignment matching `bytes_per_element` (which must be a power of two),
    /// then capping at [`MAX_ARRAY_LENGTH`].
    pub fn oversize(min_target_size: i64, bytes_per_element: usize) -> usize {
        Self::oversize_unbounded(min_target_size, bytes_per_element).min(MAX_ARRAY_LENGTH)
    }

    /// Same growth policy as [`Self::oversize`] but without the
    /// [`MAX_ARRAY_LENGTH`] cap — used for huge (paged) arrays.
    pub fn oversize_huge(min_target_size: i64, bytes_per_element: usize) -> usize {
        Self::oversize_unbounded(min_target_size, bytes_per_element)
    }

    fn oversize_unbounded(min_target_size: i64, bytes_per_element: usize) -> usize {
        if min_target_size < 0 {
            return 0;
        }
        if min_target_size == 0 {
            return 0;
        }
        assert!(
            bytes_per_element.is_power_of_two(),
            "bytes_per_element must be a power of two, got {}",
            bytes_per_element
        );

        let min_target_size = min_target_size as usize;
        let extra = (min_target_size / 8).max(3);
        let new_size = min_target_size + extra;

        // Round up to the alignment matching bytes_per_element.
        let alignment = bytes_per_element.max(1);
        (new_size + alignment - 1) / alignment * alignment
    }
}
