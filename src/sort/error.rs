use thiserror::Error;

/// Errors raised while configuring a sort. Sorting itself cannot fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("unknown sort key '{0}' (expected title, score, genre or platform)")]
    UnknownRelation(String),

    #[error("unknown algorithm '{0}' (expected insertion, merge, timsort or std)")]
    UnknownAlgorithm(String),

    #[error("invalid run size '{0}': must be a positive integer")]
    InvalidRunSize(String),
}
