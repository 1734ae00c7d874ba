//! Cooperative cancellation for long-running operations.
//!
//! [`TerminationFlag`] wraps a [`TerminationMonitor`] with throttled checking
//! so hot loops (page boundaries, per-source iteration) can poll it cheaply.
//! A flag that observes termination raises [`TerminatedException`].

pub mod termination_exception;
pub mod termination_flag;
pub mod termination_monitor;

pub use termination_exception::TerminatedException;
pub use termination_flag::TerminationFlag;
pub use termination_monitor::{EmptyTerminationMonitor, TerminationMonitor};
