use thiserror::Error;

/// Error types that can occur while loading, grouping, or evaluating
/// recorded conversations.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A transcript record is missing a required field or has a malformed shape
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    /// A requested metric name is not in the fixed catalog
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
    /// A metric's scoring capability failed during a replay
    #[error("Scoring failure for metric '{metric}' at unit {unit_index}: {reason}")]
    ScoringFailure {
        metric: String,
        unit_index: usize,
        reason: String,
    },
    /// Errors reported by the scoring provider itself
    #[error("Provider error: {0}")]
    ProviderError(String),
    /// Run configuration errors
    #[error("Config error: {0}")]
    ConfigError(String),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// File and stream I/O errors
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        EvalError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

impl From<serde_yaml::Error> for EvalError {
    fn from(err: serde_yaml::Error) -> Self {
        EvalError::ConfigError(err.to_string())
    }
}
