//! Error types for the analysis layer.

/// Errors that can occur while analyzing text.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The requested user has no registered preference record.
    #[error("unknown user: {0}")]
    UnknownUser(String),

    /// The external sentiment scorer failed to produce a compound score.
    #[error("sentiment scorer failure: {0}")]
    Scorer(String),
}
