use std::path::PathBuf;

/// Errors raised by the matcher and its evaluation harness.
///
/// Numeric edge cases (zero magnitudes, empty documents, zero denominators)
/// are not errors; they resolve to `0.0` where they occur.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("n-gram order must be at least 1, got {0}")]
    InvalidNgramOrder(usize),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

impl MatchError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        MatchError::InvalidArgument { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
