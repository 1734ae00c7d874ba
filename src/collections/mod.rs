//! Paged collection primitives: page/index arithmetic, hybrid search, growth
//! policy, cursors, huge arrays, and atomic variants used for concurrent import.

pub mod array_util;
pub mod cursor;
pub mod huge_array;
pub mod huge_atomic_array;
pub mod huge_atomic_bitset;
pub mod huge_atomic_growing_bitset;
pub mod page_util;
pub mod paged_long_stack;

pub use array_util::ArrayUtil;
pub use huge_array::{HugeDoubleArray, HugeIntArray, HugeLongArray};
pub use huge_atomic_array::HugeAtomicLongArray;
pub use huge_atomic_bitset::HugeAtomicBitSet;
pub use huge_atomic_growing_bitset::HugeAtomicGrowingBitSet;
pub use page_util::PageUtil;
pub use paged_long_stack::PagedLongStack;
