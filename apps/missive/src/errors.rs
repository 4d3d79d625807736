use thiserror::Error;

/// Application-level error type.
///
/// Recoverable document problems (corrupt containers, unsupported
/// extensions) never reach this enum; the extraction layer logs them
/// and produces empty text instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required letter fields still empty after every source was merged.
    #[error("Please fill in all required fields. Missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
