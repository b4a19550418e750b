pub(crate) mod languagetool;

use async_trait::async_trait;

use crate::types::GrammarFinding;

/// A service that finds grammar, style, and spelling problems in text
///
/// Implementations return every finding the service reports, in service
/// order. Filtering and formatting happen in [`crate::check_grammar`].
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    /// Check a block of text
    async fn check(&self, text: &str) -> crate::error::Result<Vec<GrammarFinding>>;

    /// Get the checker name, used in logs
    fn name(&self) -> &str;
}
