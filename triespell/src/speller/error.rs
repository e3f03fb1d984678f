//! Error types for speller configuration.

/// Errors that can occur when reading a [`SpellerConfig`](super::SpellerConfig).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Configuration JSON could not be read or parsed
    #[error("Failed to parse speller config")]
    Json(#[from] serde_json::Error),

    /// Edit distance other than 1 or 2
    #[error("Unsupported edit distance {0:?} (expected 1 or 2)")]
    EditDistance(String),
}
