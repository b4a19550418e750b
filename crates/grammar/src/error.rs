/// Grammar-specific result type
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Errors raised while talking to the grammar service
///
/// These never escape report generation; [`crate::check_grammar`] turns
/// them into an empty summary after logging.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    /// Transport failure, including timeouts
    #[error("failed to reach grammar service: {0}")]
    Request(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("grammar service error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if readable
        message: String,
    },

    /// Response body was not the expected JSON shape
    #[error("failed to parse grammar service response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configured base URL cannot be turned into a check endpoint
    #[error("invalid grammar service URL: {0}")]
    InvalidUrl(String),
}

impl GrammarError {
    /// Whether the failure was the request timeout firing
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}
