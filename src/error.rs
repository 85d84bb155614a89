use thiserror::Error;

/// Result alias for `headline-cluster`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the vectorizer, the cluster engine and the pipeline.
///
/// Every variant is terminal for a run: no partial grouping is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No items were supplied.
    #[error("empty input provided")]
    EmptyInput,

    /// Every item reduced to zero terms after tokenization and stop-word removal.
    #[error("empty vocabulary: no item contains a usable term")]
    EmptyVocabulary,

    /// Invalid number of clusters requested.
    #[error("cannot create {requested} clusters from {n_items} items")]
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of items.
        n_items: usize,
    },

    /// Length or width mismatch between two inputs that must agree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_cluster_count() {
        let err = Error::InvalidClusterCount {
            requested: 0,
            n_items: 4,
        };
        assert_eq!(err.to_string(), "cannot create 0 clusters from 4 items");
    }

    #[test]
    fn test_empty_input_and_vocabulary_are_distinct() {
        assert_ne!(Error::EmptyInput, Error::EmptyVocabulary);
        assert!(Error::EmptyVocabulary.to_string().contains("vocabulary"));
    }
}
