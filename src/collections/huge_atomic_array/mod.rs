//! Atomic huge arrays used for lock-free concurrent writes during import.

pub mod huge_atomic_long_array;

pub use huge_atomic_long_array::HugeAtomicLongArray;
