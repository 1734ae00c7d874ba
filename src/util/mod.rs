//! Utility modules for rust-gds
//!
//! Common utilities: logging, exception handling, thread-local resource
//! management, and feature toggles.

pub mod exception_util;
pub mod feature_toggles;
pub mod log;
pub mod thread_local;

pub use exception_util::{AutoCloseable, ChainedError, ExceptionUtil};
pub use feature_toggles::{AdjacencyPackingStrategy, FeatureConfig, FeatureToggle};
pub use log::{ConsoleLog, Log, NoOpLog, PrefixedLog};
pub use thread_local::{AutoCloseableThreadLocal, CloseableThreadLocal};
