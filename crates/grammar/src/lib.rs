#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod format;
mod http_client;
mod metrics;
mod provider;
mod types;

use std::time::Instant;

use metrics::GrammarMetrics;

pub use error::{GrammarError, Result};
pub use format::{TYPOS_CATEGORY, summarize};
pub use provider::{GrammarChecker, languagetool::LanguageToolChecker};
pub use types::{GrammarFinding, GrammarSummary};

/// Check text and summarize its grammar/syntax findings
///
/// Spelling findings are dropped. Grammar checking is best-effort: any
/// failure talking to the service is logged and yields an empty summary,
/// so callers always get a result.
pub async fn check_grammar(checker: &dyn GrammarChecker, text: &str) -> GrammarSummary {
    check_grammar_recorded(checker, text, &GrammarMetrics::global()).await
}

async fn check_grammar_recorded(checker: &dyn GrammarChecker, text: &str, metrics: &GrammarMetrics) -> GrammarSummary {
    if text.trim().is_empty() {
        tracing::debug!("Skipping grammar check for empty text");
        return GrammarSummary::default();
    }

    let start = Instant::now();
    let result = checker.check(text).await;
    metrics.record_check(start, result.is_ok());

    match result {
        Ok(findings) => {
            let summary = summarize(&findings);
            metrics.record_findings(summary.count);

            tracing::debug!(
                checker = checker.name(),
                findings = findings.len(),
                reported = summary.count,
                "Grammar check complete"
            );

            summary
        }
        Err(e) => {
            tracing::error!(
                checker = checker.name(),
                timeout = e.is_timeout(),
                "Error checking grammar/syntax: {e}"
            );

            GrammarSummary::default()
        }
    }
}
