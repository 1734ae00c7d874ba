//! Parallel page creator for i64 array initialization.
//!
//! Builds the backing pages of a huge long array directly, filling each page
//! in parallel from a generator function keyed by the page's global base
//! index. Used by `HugeLongArray::new_with_generator` for identity mappings
//! (node ID arrays) and other computed sequences.

use crate::collections::PageUtil;
use crate::concurrency::Concurrency;
use std::sync::Arc;

const PAGE_SHIFT_BYTES: usize = PageUtil::PAGE_SIZE_32KB;

/// Parallel page creator for i64 arrays.
///
/// # Generator patterns
///
/// 1. **Identity**: `|i| i as i64` — `array[i] = i`
/// 2. **Custom**: any `Fn(usize) -> i64`
/// 3. **Pass-through**: no generator, pages are zero-filled
pub struct ParallelLongPageCreator {
    concurrency: Concurrency,
    generator: Option<Arc<dyn Fn(usize) -> i64 + Send + Sync>>,
}

impl ParallelLongPageCreator {
    /// Element size used to size pages, matching `HugeLongArray`.
    const ELEMENT_SIZE: usize = std::mem::size_of::<i64>();

    pub fn of<F>(concurrency: Concurrency, generator: F) -> Self
    where
        F: Fn(usize) -> i64 + Send + Sync + 'static,
    {
        Self {
            concurrency,
            generator: Some(Arc::new(generator)),
        }
    }

    pub fn identity(concurrency: Concurrency) -> Self {
        Self::of(concurrency, |i| i as i64)
    }

    pub fn pass_through(concurrency: Concurrency) -> Self {
        Self {
            concurrency,
            generator: None,
        }
    }

    pub fn page_size(&self) -> usize {
        PageUtil::page_size_for(PAGE_SHIFT_BYTES, Self::ELEMENT_SIZE)
    }

    pub fn estimate_memory_usage(&self, total_size: usize) -> usize {
        total_size * Self::ELEMENT_SIZE
    }

    /// Creates and fills pages for `total_size` elements.
    pub fn create_pages(&self, total_size: usize) -> Vec<Vec<i64>> {
        if total_size == 0 {
            return Vec::new();
        }

        let page_size = self.page_size();
        let num_pages = total_size.div_ceil(page_size);
        let last_page_size = if total_size % page_size == 0 {
            page_size
        } else {
            total_size % page_size
        };

        let mut pages: Vec<Vec<i64>> = (0..num_pages).map(|_| Vec::new()).collect();
        self.fill_pages(&mut pages, last_page_size, page_size);
        pages
    }

    /// Fills pre-allocated (empty) pages, using `concurrency` workers for
    /// every page but the last, which is filled on the current thread since
    /// it may have a different size.
    pub fn fill_pages(&self, pages: &mut [Vec<i64>], last_page_size: usize, page_size: usize) {
        if pages.is_empty() {
            return;
        }

        let last_page_index = pages.len() - 1;

        if last_page_index > 0 {
            if self.concurrency.value() > 1 {
                use rayon::prelude::*;
                pages[0..last_page_index]
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(page_index, page)| {
                        self.fill_page(page, page_index * page_size, page_size);
                    });
            } else {
                for (page_index, page) in pages[0..last_page_index].iter_mut().enumerate() {
                    self.fill_page(page, page_index * page_size, page_size);
                }
            }
        }

        self.fill_page(
            &mut pages[last_page_index],
            last_page_index * page_size,
            last_page_size,
        );
    }

    fn fill_page(&self, page: &mut Vec<i64>, base: usize, size: usize) {
        page.clear();
        page.reserve_exact(size);
        if let Some(ref gen) = self.generator {
            for i in 0..size {
                page.push(gen(base + i));
            }
        } else {
            page.resize(size, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_mapping_spans_pages() {
        let creator = ParallelLongPageCreator::identity(Concurrency::of(2));
        let pages = creator.create_pages(10_000);

        assert_eq!(pages[0][0], 0);
        assert_eq!(pages[0][100], 100);

        let page_size = creator.page_size();
        assert_eq!(pages[1][0], page_size as i64);

        let last_page = pages.last().unwrap();
        assert_eq!(*last_page.last().unwrap(), 9999);
    }

    #[test]
    fn custom_generator() {
        let creator = ParallelLongPageCreator::of(Concurrency::of(4), |i| (i * i) as i64);
        let pages = creator.create_pages(1000);

        assert_eq!(pages[0][0], 0);
        assert_eq!(pages[0][10], 100);
    }

    #[test]
    fn pass_through_zeroes() {
        let creator = ParallelLongPageCreator::pass_through(Concurrency::of(2));
        let pages = creator.create_pages(1000);
        assert!(pages[0].iter().all(|&v| v == 0));
    }

    #[test]
    fn empty_array() {
        let creator = ParallelLongPageCreator::identity(Concurrency::of(4));
        assert!(creator.create_pages(0).is_empty());
    }

    #[test]
    fn single_partial_page() {
        let creator = ParallelLongPageCreator::identity(Concurrency::of(4));
        let pages = creator.create_pages(100);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 100);
        assert_eq!(pages[0][99], 99);
    }

    #[test]
    fn parallel_consistency_across_concurrency() {
        let size = 50_000;
        let reference = ParallelLongPageCreator::identity(Concurrency::of(1)).create_pages(size);
        for c in [2, 4, 8] {
            let pages = ParallelLongPageCreator::identity(Concurrency::of(c)).create_pages(size);
            assert_eq!(pages, reference);
        }
    }
}
