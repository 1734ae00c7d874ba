//! Memory resident calculation interface
//!
//! Provides a calculation interface for objects that have resources residing in memory.

use super::memory_range::MemoryRange;
use crate::core::graph_dimensions::GraphDimensions;

/// A calculation of an object that has resources residing in memory
///
/// This trait represents a function that estimates memory usage based on
/// graph dimensions and concurrency settings.
pub trait MemoryResident {
    /// Estimates the number of bytes that this object occupies in memory
    fn estimate_memory_usage(
        &self,
        dimensions: &dyn GraphDimensions,
        concurrency: usize,
    ) -> MemoryRange;
}

/// Function-based memory resident implementation
pub struct FunctionMemoryResident<F>
where
    F: Fn(&dyn GraphDimensions, usize) -> MemoryRange,
{
    func: F,
}

impl<F> FunctionMemoryResident<F>
where
    F: Fn(&dyn GraphDimensions, usize) -> MemoryRange,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> MemoryResident for FunctionMemoryResident<F>
where
    F: Fn(&dyn GraphDimensions, usize) -> MemoryRange,
{
    fn estimate_memory_usage(
        &self,
        dimensions: &dyn GraphDimensions,
        concurrency: usize,
    ) -> MemoryRange {
        (self.func)(dimensions, concurrency)
    }
}
