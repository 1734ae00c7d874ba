// Copyright (c) "Neo4j"
// Neo4j Sweden AB [http://neo4j.com]
//
// This file is part of Neo4j.
//
// Neo4j is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Core utilities for rust-gds.
//!
//! This module provides foundational utilities used throughout the library:
//! - Time and clock services
//! - Progress tracking and timing
//! - Partitioning strategies
//! - Queue implementations
//! - Data shuffling utilities
//! - Bit manipulation and raw value encoding
//! - Set intersections and vector similarity operations
//! - Cache-efficient binary search (Eytzinger layout)
//! - Lazy batch collection for parallel processing

pub mod lazy_batch_collection;
pub mod paged;

// Re-exports for convenience
pub use lazy_batch_collection::LazyBatchCollection;
