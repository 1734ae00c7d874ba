//! A huge atomic array of i64 values supporting lock-free concurrent operations.
//!
//! Backs [`crate::collections::HugeAtomicBitSet`] and concurrent ID-mapping
//! builders, where many threads race to claim or update slots during import.
//!
//! # Design
//!
//! Same paged architecture as [`crate::collections::HugeLongArray`] but with
//! `AtomicI64` storage: single `Vec<AtomicI64>` for ≤268M elements, paged
//! otherwise.

use crate::collections::PageUtil;
use std::sync::atomic::{AtomicI64, Ordering};

const MAX_ARRAY_LENGTH: usize = 1 << 28;
const PAGE_SIZE_IN_BYTES: usize = 4096;

/// Huge atomic array supporting >2 billion i64 elements with lock-free operations.
pub enum HugeAtomicLongArray {
    Single(SingleHugeAtomicLongArray),
    Paged(PagedHugeAtomicLongArray),
}

impl HugeAtomicLongArray {
    /// Creates a new huge atomic long array of the specified size, zero-initialized.
    pub fn new(size: usize) -> Self {
        if size <= MAX_ARRAY_LENGTH {
            Self::Single(SingleHugeAtomicLongArray::new(size))
        } else {
            Self::Paged(PagedHugeAtomicLongArray::new(size))
        }
    }

    /// Atomically reads the value at `index`.
    pub fn get(&self, index: usize) -> i64 {
        match self {
            Self::Single(s) => s.get(index),
            Self::Paged(p) => p.get(index),
        }
    }

    /// Atomically writes `value` at `index`.
    pub fn set(&self, index: usize, value: i64) {
        match self {
            Self::Single(s) => s.set(index, value),
            Self::Paged(p) => p.set(index, value),
        }
    }

    /// Atomically adds `delta` and returns the previous value.
    pub fn get_and_add(&self, index: usize, delta: i64) -> i64 {
        match self {
            Self::Single(s) => s.get_and_add(index, delta),
            Self::Paged(p) => p.get_and_add(index, delta),
        }
    }

    /// Atomically replaces the value at `index`, returning the previous value.
    pub fn get_and_replace(&self, index: usize, value: i64) -> i64 {
        match self {
            Self::Single(s) => s.get_and_replace(index, value),
            Self::Paged(p) => p.get_and_replace(index, value),
        }
    }

    /// Compare-and-set: stores `update` at `index` iff the current value is `expect`.
    pub fn compare_and_set(&self, index: usize, expect: i64, update: i64) -> bool {
        match self {
            Self::Single(s) => s.compare_and_set(index, expect, update),
            Self::Paged(p) => p.compare_and_set(index, expect, update),
        }
    }

    /// Compare-and-exchange: returns the witness value (== `expect` on success,
    /// the actual current value on failure), avoiding a second read in CAS loops.
    pub fn compare_and_exchange(&self, index: usize, expect: i64, update: i64) -> i64 {
        match self {
            Self::Single(s) => s.compare_and_exchange(index, expect, update),
            Self::Paged(p) => p.compare_and_exchange(index, expect, update),
        }
    }

    /// Atomically applies `f` at `index` in a CAS retry loop.
    pub fn update<F>(&self, index: usize, f: F)
    where
        F: Fn(i64) -> i64,
    {
        match self {
            Self::Single(s) => s.update(index, f),
            Self::Paged(p) => p.update(index, f),
        }
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        match self {
            Self::Single(s) => s.size(),
            Self::Paged(p) => p.size(),
        }
    }

    /// Memory used in bytes.
    pub fn size_of(&self) -> usize {
        match self {
            Self::Single(s) => s.size_of(),
            Self::Paged(p) => p.size_of(),
        }
    }

    /// Sets every element to `value`. Not itself atomic across elements —
    /// only safe for single-threaded initialization.
    pub fn set_all(&self, value: i64) {
        match self {
            Self::Single(s) => s.set_all(value),
            Self::Paged(p) => p.set_all(value),
        }
    }
}

pub struct SingleHugeAtomicLongArray {
    size: usize,
    storage: Vec<AtomicI64>,
}

impl SingleHugeAtomicLongArray {
    fn new(size: usize) -> Self {
        let mut storage = Vec::with_capacity(size);
        for _ in 0..size {
            storage.push(AtomicI64::new(0));
        }
        Self { size, storage }
    }

    fn get(&self, index: usize) -> i64 {
        self.storage[index].load(Ordering::SeqCst)
    }

    fn set(&self, index: usize, value: i64) {
        self.storage[index].store(value, Ordering::SeqCst);
    }

    fn get_and_add(&self, index: usize, delta: i64) -> i64 {
        self.storage[index].fetch_add(delta, Ordering::SeqCst)
    }

    fn get_and_replace(&self, index: usize, value: i64) -> i64 {
        self.storage[index].swap(value, Ordering::SeqCst)
    }

    fn compare_and_set(&self, index: usize, expect: i64, update: i64) -> bool {
        self.storage[index]
            .compare_exchange(expect, update, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    fn compare_and_exchange(&self, index: usize, expect: i64, update: i64) -> i64 {
        match self.storage[index].compare_exchange(
            expect,
            update,
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            Ok(v) => v,
            Err(v) => v,
        }
    }

    fn update<F>(&self, index: usize, f: F)
    where
        F: Fn(i64) -> i64,
    {
        let atom = &self.storage[index];
        let mut old = atom.load(Ordering::SeqCst);
        loop {
            let new = f(old);
            match atom.compare_exchange(old, new, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => break,
                Err(witness) => old = witness,
            }
        }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn size_of(&self) -> usize {
        std::mem::size_of::<Self>() + self.size * std::mem::size_of::<AtomicI64>()
    }

    fn set_all(&self, value: i64) {
        for atom in &self.storage {
            atom.store(value, Ordering::SeqCst);
        }
    }
}

pub struct PagedHugeAtomicLongArray {
    size: usize,
    pages: Vec<Vec<AtomicI64>>,
    page_shift: u32,
    page_mask: usize,
}

impl PagedHugeAtomicLongArray {
    fn new(size: usize) -> Self {
        let element_size = std::mem::size_of::<AtomicI64>();
        let page_size = PageUtil::page_size_for(PAGE_SIZE_IN_BYTES, element_size);
        let page_shift = page_size.trailing_zeros();
        let page_mask = page_size - 1;
        let num_pages = PageUtil::num_pages_for(size, page_size);

        let mut pages = Vec::with_capacity(num_pages);
        for _ in 0..(num_pages - 1) {
            let mut page = Vec::with_capacity(page_size);
            for _ in 0..page_size {
                page.push(AtomicI64::new(0));
            }
            pages.push(page);
        }

        let last_page_size = PageUtil::exclusive_index_of_page(size, page_mask);
        let mut last_page = Vec::with_capacity(last_page_size);
        for _ in 0..last_page_size {
            last_page.push(AtomicI64::new(0));
        }
        pages.push(last_page);

        Self {
            size,
            pages,
            page_shift,
            page_mask,
        }
    }

    fn get(&self, index: usize) -> i64 {
        let page_index = index >> self.page_shift;
        let index_in_page = index & self.page_mask;
        self.pages[page_index][index_in_page].load(Ordering::SeqCst)
    }

    fn set(&self, index: usize, value: i64) {
        let page_index = index >> self.page_shift;
        let index_in_page = index & self.page_mask;
        self.pages[page_index][index_in_page].store(value, Ordering::SeqCst);
    }

    fn get_and_add(&self, index: usize, delta: i64) -> i64 {
        let page_index = index >> self.page_shift;
        let index_in_page = index & self.page_mask;
        self.pages[page_index][index_in_page].fetch_add(delta, Ordering::SeqCst)
    }

    fn get_and_replace(&self, index: usize, value: i64) -> i64 {
        let page_index = index >> self.page_shift;
        let index_in_page = index & self.page_mask;
        self.pages[page_index][index_in_page].swap(value, Ordering::SeqCst)
    }

    fn compare_and_set(&self, index: usize, expect: i64, update: i64) -> bool {
        let page_index = index >> self.page_shift;
        let index_in_page = index & self.page_mask;
        self.pages[page_index][index_in_page]
            .compare_exchange(expect, update, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    fn compare_and_exchange(&self, index: usize, expect: i64, update: i64) -> i64 {
        let page_index = index >> self.page_shift;
        let index_in_page = index & self.page_mask;
        match self.pages[page_index][index_in_page].compare_exchange(
            expect,
            update,
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            Ok(v) => v,
            Err(v) => v,
        }
    }

    fn update<F>(&self, index: usize, f: F)
    where
        F: Fn(i64) -> i64,
    {
        let page_index = index >> self.page_shift;
        let index_in_page = index & self.page_mask;
        let atom = &self.pages[page_index][index_in_page];
        let mut old = atom.load(Ordering::SeqCst);
        loop {
            let new = f(old);
            match atom.compare_exchange(old, new, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => break,
                Err(witness) => old = witness,
            }
        }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn size_of(&self) -> usize {
        let mut total = std::mem::size_of::<Self>();
        for page in &self.pages {
            total += page.len() * std::mem::size_of::<AtomicI64>();
        }
        total
    }

    fn set_all(&self, value: i64) {
        for page in &self.pages {
            for atom in page {
                atom.store(value, Ordering::SeqCst);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_small() {
        let array = HugeAtomicLongArray::new(100);
        assert_eq!(array.size(), 100);
        assert_eq!(array.get(0), 0);
    }

    #[test]
    fn test_get_set() {
        let array = HugeAtomicLongArray::new(100);
        array.set(0, 42);
        array.set(99, -7);
        assert_eq!(array.get(0), 42);
        assert_eq!(array.get(99), -7);
    }

    #[test]
    fn test_get_and_add() {
        let array = HugeAtomicLongArray::new(10);
        array.set(0, 10);
        assert_eq!(array.get_and_add(0, 5), 10);
        assert_eq!(array.get(0), 15);
    }

    #[test]
    fn test_compare_and_set() {
        let array = HugeAtomicLongArray::new(10);
        array.set(0, 42);
        assert!(array.compare_and_set(0, 42, 100));
        assert!(!array.compare_and_set(0, 42, 200));
        assert_eq!(array.get(0), 100);
    }

    #[test]
    fn test_compare_and_exchange() {
        let array = HugeAtomicLongArray::new(10);
        array.set(0, 42);
        assert_eq!(array.compare_and_exchange(0, 42, 100), 42);
        assert_eq!(array.compare_and_exchange(0, 42, 200), 100);
        assert_eq!(array.get(0), 100);
    }

    #[test]
    fn test_update() {
        let array = HugeAtomicLongArray::new(10);
        array.set(0, 5);
        array.update(0, |x| x * 3);
        assert_eq!(array.get(0), 15);
    }

    #[test]
    fn test_set_all() {
        let array = HugeAtomicLongArray::new(50);
        array.set_all(7);
        for i in 0..50 {
            assert_eq!(array.get(i), 7);
        }
    }

    #[test]
    fn test_paged_array() {
        let size = MAX_ARRAY_LENGTH + 1000;
        let array = HugeAtomicLongArray::new(size);
        assert_eq!(array.size(), size);

        array.set(MAX_ARRAY_LENGTH - 1, 11);
        array.set(MAX_ARRAY_LENGTH, 22);
        array.set(MAX_ARRAY_LENGTH + 1, 33);

        assert_eq!(array.get(MAX_ARRAY_LENGTH - 1), 11);
        assert_eq!(array.get(MAX_ARRAY_LENGTH), 22);
        assert_eq!(array.get(MAX_ARRAY_LENGTH + 1), 33);
    }

    #[test]
    fn test_concurrent_additions() {
        use std::sync::Arc;
        use std::thread;

        let array = Arc::new(HugeAtomicLongArray::new(10));
        let num_threads = 4;
        let additions_per_thread = 1000;

        let handles: Vec<_> = (0..num_threads)
            .map(|_| {
                let array = Arc::clone(&array);
                thread::spawn(move || {
                    for _ in 0..additions_per_thread {
                        array.get_and_add(0, 1);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(array.get(0), num_threads * additions_per_thread);
    }
}
