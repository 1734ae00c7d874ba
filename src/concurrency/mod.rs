//! Concurrency configuration shared across the storage engine.

mod concurrency_level;

pub use concurrency_level::{Concurrency, ConcurrencyError};
