//! Self-growing thread-safe atomic bitset.
//!
//! Unlike [`crate::collections::HugeAtomicBitSet`], which is allocated once at
//! a fixed size, this bitset grows on demand: setting a bit beyond the current
//! capacity atomically extends the page table instead of panicking. Useful
//! for concurrent import pipelines that discover node IDs as they stream in
//! and don't know the final node count up front.

use crate::collections::{ArrayUtil, PageUtil};
use std::sync::atomic::{AtomicI64, AtomicPtr, Ordering};
use std::sync::Arc;

const NUM_BITS: usize = 64;
const BIT_MASK: usize = NUM_BITS - 1;

/// Page shift for bit addressing: 2^16 bits per page, i.e. 1024 i64 words per page.
const PAGE_SHIFT_BITS: usize = 16;

/// Self-growing thread-safe atomic bitset.
///
/// All operations are lock-free; growth races are resolved with CAS on the
/// page table pointer.
pub struct HugeAtomicGrowingBitSet {
    page_size: usize,
    page_shift: u32,
    page_mask: usize,
    pages: AtomicPtr<Pages>,
}

impl HugeAtomicGrowingBitSet {
    /// Creates a growing atomic bitset with an initial capacity of at least `bit_size` bits.
    pub fn create(bit_size: usize) -> Self {
        let word_size = bit_size.div_ceil(NUM_BITS);

        let page_shift = (PAGE_SHIFT_BITS - 6) as u32;
        let page_size = 1usize << page_shift;
        let page_mask = page_size - 1;

        let page_count = word_size.div_ceil(page_size).max(1);
        let pages = Box::into_raw(Box::new(Pages::new(page_count, page_size)));

        Self {
            page_size,
            page_shift,
            page_mask,
            pages: AtomicPtr::new(pages),
        }
    }

    /// Sets the bit at `index`, growing the bitset if necessary.
    pub fn set(&self, index: usize) {
        let long_index = index >> 6;
        let page_index = PageUtil::page_index(long_index, self.page_shift);
        let word_index = PageUtil::index_in_page(long_index, self.page_mask);
        let bit_index = index & BIT_MASK;

        let page = self.get_page(page_index);
        let bitmask = 1i64 << bit_index;

        let mut old_word = page.get(word_index);
        loop {
            let new_word = old_word | bitmask;
            if new_word == old_word {
                return;
            }
            match page.compare_exchange(word_index, old_word, new_word) {
                Ok(_) => return,
                Err(current) => old_word = current,
            }
        }
    }

    /// Returns whether the bit at `index` is set. Indices beyond the current
    /// capacity read as unset rather than growing the bitset.
    pub fn get(&self, index: usize) -> bool {
        let long_index = index >> 6;
        let page_index = PageUtil::page_index(long_index, self.page_shift);
        if page_index >= self.page_count() {
            return false;
        }
        let word_index = PageUtil::index_in_page(long_index, self.page_mask);
        let bit_index = index & BIT_MASK;

        let page = self.get_page(page_index);
        let bitmask = 1i64 << bit_index;
        (page.get(word_index) & bitmask) != 0
    }

    /// Sets the bit at `index` and returns its previous value, growing the
    /// bitset if necessary. The fundamental "claim this slot" primitive for
    /// concurrent discovery.
    pub fn get_and_set(&self, index: usize) -> bool {
        let long_index = index >> 6;
        let page_index = PageUtil::page_index(long_index, self.page_shift);
        let word_index = PageUtil::index_in_page(long_index, self.page_mask);
        let bit_index = index & BIT_MASK;

        let page = self.get_page(page_index);
        let bitmask = 1i64 << bit_index;

        let mut old_word = page.get(word_index);
        loop {
            let new_word = old_word | bitmask;
            if new_word == old_word {
                return true;
            }
            match page.compare_exchange(word_index, old_word, new_word) {
                Ok(_) => return false,
                Err(current) => old_word = current,
            }
        }
    }

    /// Clears the bit at `index`.
    pub fn clear(&self, index: usize) {
        let long_index = index >> 6;
        let page_index = PageUtil::page_index(long_index, self.page_shift);
        if page_index >= self.page_count() {
            return;
        }
        let word_index = PageUtil::index_in_page(long_index, self.page_mask);
        let bit_index = index & BIT_MASK;

        let page = self.get_page(page_index);
        let bitmask = !(1i64 << bit_index);

        let mut old_word = page.get(word_index);
        loop {
            let new_word = old_word & bitmask;
            if new_word == old_word {
                return;
            }
            match page.compare_exchange(word_index, old_word, new_word) {
                Ok(_) => return,
                Err(current) => old_word = current,
            }
        }
    }

    /// Number of set bits. May undercount in the presence of concurrent writes.
    pub fn cardinality(&self) -> usize {
        let pages = unsafe { &*self.pages.load(Ordering::Acquire) };
        let mut count = 0;
        for page_index in 0..pages.length() {
            let page = pages.get_page(page_index);
            for word_index in 0..self.page_size {
                count += page.get(word_index).count_ones() as usize;
            }
        }
        count
    }

    /// Calls `consumer` for every currently-set bit index, in ascending order.
    pub fn for_each_set_bit<F>(&self, mut consumer: F)
    where
        F: FnMut(usize),
    {
        let pages = unsafe { &*self.pages.load(Ordering::Acquire) };
        let mut base = 0;
        for page_index in 0..pages.length() {
            let page = pages.get_page(page_index);
            for word_index in 0..self.page_size {
                let mut word = page.get(word_index);
                while word != 0 {
                    let next = word.trailing_zeros() as usize;
                    consumer(NUM_BITS * (base + word_index) + next);
                    word &= word - 1;
                }
            }
            base += self.page_size;
        }
    }

    /// Current bit capacity. Setting a bit beyond this triggers growth.
    pub fn capacity(&self) -> usize {
        self.page_count() * self.page_size * NUM_BITS
    }

    fn page_count(&self) -> usize {
        let pages = unsafe { &*self.pages.load(Ordering::Acquire) };
        pages.length()
    }

    fn get_page(&self, page_index: usize) -> &AtomicPage {
        let mut pages_ptr = self.pages.load(Ordering::Acquire);
        let mut pages = unsafe { &*pages_ptr };

        while pages.length() <= page_index {
            // Amortized growth: over-allocate by ~1/8 so a run of
            // one-past-the-end writers doesn't each trigger their own
            // reallocation of the whole page table.
            let required = page_index + 1;
            let new_page_count = ArrayUtil::oversize_huge(required as i64, 1);
            let new_pages = Box::into_raw(Box::new(Pages::from_existing(
                pages,
                new_page_count,
                self.page_size,
            )));

            match self.pages.compare_exchange(
                pages_ptr,
                new_pages,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    pages_ptr = new_pages;
                    pages = unsafe { &*pages_ptr };
                }
                Err(current) => {
                    unsafe {
                        drop(Box::from_raw(new_pages));
                    }
                    pages_ptr = current;
                    pages = unsafe { &*pages_ptr };
                }
            }
        }

        pages.get_page(page_index)
    }
}

impl Drop for HugeAtomicGrowingBitSet {
    fn drop(&mut self) {
        let pages_ptr = self.pages.load(Ordering::Acquire);
        unsafe {
            drop(Box::from_raw(pages_ptr));
        }
    }
}

unsafe impl Send for HugeAtomicGrowingBitSet {}
unsafe impl Sync for HugeAtomicGrowingBitSet {}

struct AtomicPage {
    words: Vec<AtomicI64>,
}

impl AtomicPage {
    fn new(size: usize) -> Self {
        let mut words = Vec::with_capacity(size);
        for _ in 0..size {
            words.push(AtomicI64::new(0));
        }
        Self { words }
    }

    fn get(&self, index: usize) -> i64 {
        self.words[index].load(Ordering::Acquire)
    }

    fn compare_exchange(&self, index: usize, expected: i64, update: i64) -> Result<i64, i64> {
        self.words[index].compare_exchange(expected, update, Ordering::AcqRel, Ordering::Acquire)
    }
}

/// Snapshot of the page table. Replaced wholesale (old pages `Arc`-shared into
/// the new table) whenever growth is needed.
struct Pages {
    pages: Vec<Arc<AtomicPage>>,
}

impl Pages {
    fn new(page_count: usize, page_size: usize) -> Self {
        let pages = (0..page_count)
            .map(|_| Arc::new(AtomicPage::new(page_size)))
            .collect();
        Self { pages }
    }

    fn from_existing(old_pages: &Pages, new_page_count: usize, page_size: usize) -> Self {
        let mut pages = Vec::with_capacity(new_page_count);
        pages.extend(old_pages.pages.iter().cloned());
        for _ in old_pages.pages.len()..new_page_count {
            pages.push(Arc::new(AtomicPage::new(page_size)));
        }
        Self { pages }
    }

    fn get_page(&self, page_index: usize) -> &AtomicPage {
        &self.pages[page_index]
    }

    fn length(&self) -> usize {
        self.pages.len()
    }
}
