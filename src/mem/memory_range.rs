//! Memory range type representing min/max byte values
//!
//! A memory range represents a span of possible memory usage values,
//! with a minimum and maximum. Supports arithmetic operations for
//! combining and transforming ranges.

use std::fmt;

/// Represents a range of positive byte values
///
/// The range can span 0 bytes when min and max are identical.
/// Supports arithmetic operations for memory estimation composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryRange {
    min: usize,
    max: usize,
}

impl MemoryRange {
    /// Creates a memory range with identical min and max values
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_gds::mem::MemoryRange;
    ///
    /// let range = MemoryRange::of(1024);
    /// assert_eq!(range.min(), 1024);
    /// assert_eq!(range.max(), 1024);
    /// ```
    pub fn of(value: usize) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Creates a memory range with different min and max values
    ///
    /// # Panics
    ///
    /// Panics if max < min
    pub fn of_range(min: usize, max: usize) -> Self {
        assert!(max >= min, "Max must be >= min");
        Self { min, max }
    }

    /// Returns an empty memory range (0 bytes)
    pub fn empty() -> Self {
        Self { min: 0, max: 0 }
    }

    /// Returns the minimum value
    pub fn min(&self) -> usize {
        self.min
    }

    /// Returns the maximum value
    pub fn max(&self) -> usize {
        self.max
    }

    /// Checks if the range is empty (both min and max are 0)
    pub fn is_empty(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    /// Adds a scalar value to both min and max
    pub fn add_scalar(&self, value: usize) -> Self {
        Self {
            min: self.min.saturating_add(value),
            max: self.max.saturating_add(value),
        }
    }

    /// Adds another memory range
    pub fn add(&self, other: &Self) -> Self {
        Self {
            min: self.min.saturating_add(other.min),
            max: self.max.saturating_add(other.max),
        }
    }

    /// Multiplies by a scalar
    pub fn times(&self, count: usize) -> Self {
        Self {
            min: self.min.saturating_mul(count),
            max: self.max.saturating_mul(count),
        }
    }

    /// Subtracts a scalar value
    ///
    /// Uses saturating subtraction (won't go below 0)
    pub fn subtract(&self, value: usize) -> Self {
        Self {
            min: self.min.saturating_sub(value),
            max: self.max.saturating_sub(value),
        }
    }

    /// Element-wise subtraction of another range
    pub fn element_wise_subtract(&self, other: &Self) -> Self {
        Self {
            min: self.min.saturating_sub(other.min),
            max: self.max.saturating_sub(other.max),
        }
    }

    /// Union of two ranges (takes min of mins, max of maxs)
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Maximum of two ranges (takes max of mins, max of maxs)
    pub fn maximum(range1: &Self, range2: &Self) -> Self {
        Self {
            min: range1.min.max(range2.min),
            max: range1.max.max(range2.max),
        }
    }

    /// Apply a function to both min and max
    pub fn apply<F>(&self, f: F) -> Self
    where
        F: Fn(usize) -> usize,
    {
        Self {
            min: f(self.min),
            max: f(self.max),
        }
    }
}

impl fmt::Display for MemoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{} bytes", self.min)
        } else {
            write!(f, "[{} bytes, {} bytes]", self.min, self.max)
        }
    }
}

impl std::ops::Add for MemoryRange {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            min: self.min.saturating_add(other.min),
            max: self.max.saturating_add(other.max),
        }
    }
}

impl std::ops::Mul<usize> for MemoryRange {
    type Output = Self;

    fn mul(self, count: usize) -> Self {
        self.times(count)
    }
}
