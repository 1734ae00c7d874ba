use thiserror::Error;

/// Errors surfaced by the storage engine's public operations.
///
/// Every variant corresponds to one of the error kinds named by the
/// component contracts: page/id-map math, catalog lookups, and
/// node-property type inference.
#[derive(Debug, Error)]
pub enum GdsError {
    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("capacity overflow: requested {requested}, limit {limit}")]
    Overflow { requested: usize, limit: usize },

    #[error("underflow: {0}")]
    Underflow(String),

    #[error("graph '{graph_name}' not found for user '{user}'")]
    NotFound { user: String, graph_name: String },

    #[error("graph '{graph_name}' is ambiguous, present for users {users:?}")]
    AmbiguousMatch {
        graph_name: String,
        users: Vec<String>,
    },

    #[error(
        "graph '{graph_name}' already exists for user '{user}' in database '{database_name}'"
    )]
    DuplicateGraph {
        user: String,
        database_name: String,
        graph_name: String,
    },

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("type mismatch for property '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("cannot infer type for property '{key}': no values and no default")]
    MissingType { key: String },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("invalid batch: expected length {expected}, got {actual}")]
    InvalidBatch { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unsupported relationship type(s): {0:?}")]
    UnsupportedRelationshipType(Vec<String>),

    #[error("no registered graph store factory can supply a factory for config type '{0}'")]
    NoFactory(String),
}

pub type GdsResult<T> = Result<T, GdsError>;

// Note: no blanket `From<GdsError> for Box<dyn Error>` — the standard
// library already provides a conflicting implementation for all
// `std::error::Error` types. Leave conversions explicit where needed.
