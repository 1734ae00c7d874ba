//! Exception handling utilities.
//!
//! Root cause analysis and resource cleanup helpers.
//!
//! **Design Philosophy**: Rust uses "Error" for its native concepts. This leaves
//! "Exception" available for our Java GDS compatibility framework.

use std::error::Error as StdError;
use std::fmt;

/// Exception handling utilities matching Java patterns.
pub struct ExceptionUtil;

impl ExceptionUtil {
    /// Returns the root cause of an exception chain.
    pub fn root_cause(error: &dyn StdError) -> &dyn StdError {
        let mut current = error;
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }

    /// Adds the current exception to the initial exception as suppressed.
    ///
    /// Returns `current` if `initial` is None, otherwise returns `initial`.
    pub fn chain<E: StdError + 'static>(
        initial: Option<Box<E>>,
        current: Option<Box<E>>,
    ) -> Option<Box<E>> {
        match (initial, current) {
            (None, current) => current,
            (initial, None) => initial,
            (Some(initial), Some(_current)) => Some(initial),
        }
    }

    /// Close all AutoCloseable resources, collecting the first error.
    pub fn close_all<I>(closeables: I) -> Result<(), Box<dyn StdError>>
    where
        I: IntoIterator<Item = Box<dyn AutoCloseable>>,
    {
        let mut error: Option<Box<dyn StdError>> = None;
        for closeable in closeables {
            if let Err(e) = closeable.close() {
                if error.is_none() {
                    error = Some(e);
                }
            }
        }
        match error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Safely run code, catching panics and routing them to an exception consumer.
    pub fn safe_run_with_log_exception<F, M, L>(message: M, runnable: F, exception_consumer: L)
    where
        F: FnOnce(),
        M: FnOnce() -> String,
        L: FnOnce(String, Box<dyn StdError>),
    {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(runnable));

        if let Err(panic_info) = result {
            let error_msg = if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };

            let error = Box::new(PanicError::new(error_msg));
            exception_consumer(message(), error);
        }
    }
}

/// Trait for AutoCloseable resources (matches Java's AutoCloseable).
pub trait AutoCloseable {
    /// Close the resource, potentially returning an error.
    fn close(&self) -> Result<(), Box<dyn StdError>>;
}

/// Error wrapper for panics (used in safe_run_with_log_exception).
#[derive(Debug)]
struct PanicError {
    message: String,
}

impl PanicError {
    fn new(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Panic: {}", self.message)
    }
}

impl StdError for PanicError {}

/// Error type for chained exceptions.
#[derive(Debug)]
pub struct ChainedError {
    message: String,
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl ChainedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: Box<dyn StdError + Send + Sync>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }
}

impl fmt::Display for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for ChainedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_root_cause() {
        let inner = io::Error::new(io::ErrorKind::NotFound, "inner error");
        let middle = io::Error::new(io::ErrorKind::Other, inner);
        let outer = io::Error::new(io::ErrorKind::Other, middle);

        let root = ExceptionUtil::root_cause(&outer);
        assert_eq!(root.to_string(), "inner error");
    }

    #[test]
    fn test_root_cause_single() {
        let error = io::Error::new(io::ErrorKind::NotFound, "single error");
        let root = ExceptionUtil::root_cause(&error);
        assert_eq!(root.to_string(), "single error");
    }

    #[test]
    fn test_chain_none_none() {
        let result: Option<Box<io::Error>> = ExceptionUtil::chain(None, None);
        assert!(result.is_none());
    }

    #[test]
    fn test_chain_some_none() {
        let error = Box::new(io::Error::new(io::ErrorKind::NotFound, "error"));
        let result = ExceptionUtil::chain(Some(error), None);
        assert!(result.is_some());
    }

    #[test]
    fn test_chained_error() {
        let inner = Box::new(io::Error::new(io::ErrorKind::NotFound, "inner"));
        let error = ChainedError::with_cause("outer message", inner);

        assert_eq!(error.to_string(), "outer message");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_safe_run_with_log_exception_success() {
        let mut logged = false;
        ExceptionUtil::safe_run_with_log_exception(
            || "test message".to_string(),
            || { /* no panic */ },
            |_msg, _err| {
                logged = true;
            },
        );
        assert!(!logged);
    }

    #[test]
    fn test_safe_run_with_log_exception_panic() {
        let mut logged = false;
        let mut captured_msg = String::new();

        ExceptionUtil::safe_run_with_log_exception(
            || "test operation".to_string(),
            || panic!("test panic"),
            |msg, _err| {
                logged = true;
                captured_msg = msg;
            },
        );

        assert!(logged);
        assert_eq!(captured_msg, "test operation");
    }
}
