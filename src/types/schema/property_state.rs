use serde::{Deserialize, Serialize};

/// Whether a property's values are persisted with the graph store or
/// computed on the fly for the lifetime of a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyState {
    Persistent,
    Transient,
}

impl std::fmt::Display for PropertyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyState::Persistent => write!(f, "PERSISTENT"),
            PropertyState::Transient => write!(f, "TRANSIENT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_upper_case() {
        assert_eq!(PropertyState::Persistent.to_string(), "PERSISTENT");
        assert_eq!(PropertyState::Transient.to_string(), "TRANSIENT");
    }
}
