//! Error types for the sel2coll library.

use thiserror::Error;

/// Main error type for host-model and operator dispatch failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Operator invoked with nothing selected
    #[error("No objects selected!")]
    EmptySelection,

    /// Object id does not resolve in this scene
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Collection id does not resolve in this scene
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Linking would make a collection an ancestor of itself
    #[error("Collection cycle: cannot link '{child}' under '{parent}'")]
    CollectionCycle { parent: String, child: String },

    /// Operator idname has no registered type
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Operator idname registered twice
    #[error("Operator already registered: {0}")]
    AlreadyRegistered(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type alias for sel2coll operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::EmptySelection;
        assert_eq!(e.to_string(), "No objects selected!");

        let e = Error::CollectionCycle {
            parent: "Props".to_string(),
            child: "Scene Collection".to_string(),
        };
        assert!(e.to_string().contains("Props"));
        assert!(e.to_string().contains("Scene Collection"));
    }

    #[test]
    fn test_error_other() {
        let e = Error::other("something odd");
        assert_eq!(e.to_string(), "something odd");
        assert!(matches!(e, Error::Other(_)));
    }
}
