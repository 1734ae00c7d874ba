//! Per-batch allocation handle produced by [`super::builder::IdMapBuilder`].

use crate::errors::GdsError;

use super::{MappedNodeId, OriginalNodeId};

/// A reserved, contiguous slice of the final mapped-id space.
///
/// `allocate` itself is thread-safe (multiple batches can be reserved
/// concurrently); the returned allocator is not — each batch is meant to be
/// filled by a single thread via [`IdMapAllocator::insert`].
pub struct IdMapAllocator {
    start: MappedNodeId,
    length: usize,
}

impl IdMapAllocator {
    pub(crate) fn new(start: MappedNodeId, length: usize) -> Self {
        Self { start, length }
    }

    pub fn start(&self) -> MappedNodeId {
        self.start
    }

    pub fn batch_length(&self) -> usize {
        self.length
    }

    /// Fills this batch's reserved slots. `original_ids` must have exactly
    /// `batch_length()` entries, in mapped-id order starting at `start()`.
    pub fn insert(&self, original_ids: &[OriginalNodeId]) -> Result<Vec<(MappedNodeId, OriginalNodeId)>, GdsError> {
        if original_ids.len() != self.length {
            return Err(GdsError::InvalidBatch {
                expected: self.length,
                actual: original_ids.len(),
            });
        }

        Ok(original_ids
            .iter()
            .enumerate()
            .map(|(offset, &original)| (self.start + offset as MappedNodeId, original))
            .collect())
    }
}
