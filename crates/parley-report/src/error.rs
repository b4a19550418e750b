/// Report-specific result type
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors from report generation
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Transcription lacks a field the report is computed from
    #[error("transcription is missing required field '{0}'")]
    MissingField(&'static str),

    /// Grammar checker could not be constructed
    #[error("failed to initialize grammar checker: {0}")]
    Grammar(#[from] grammar::GrammarError),
}
