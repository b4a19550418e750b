use std::sync::Arc;

use grammar::{GrammarChecker, GrammarSummary, LanguageToolChecker};
use parley_telemetry::metrics;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    error::ReportError,
    stats::WordStats,
    types::{Report, TranscriptionResult},
};

/// Issues text used when the grammar check reports nothing
pub const NO_ISSUES_MESSAGE: &str = "No Grammar/Syntax Issues Found.";

/// Builds speech reports from transcription results
///
/// Holds no per-report state, so one builder can serve any number of
/// concurrent reports.
#[derive(Clone)]
pub struct ReportBuilder {
    checker: Arc<dyn GrammarChecker>,
}

impl ReportBuilder {
    pub fn new(checker: Arc<dyn GrammarChecker>) -> Self {
        Self { checker }
    }

    /// Create a builder backed by the configured LanguageTool service
    pub fn from_config(config: &parley_config::Config) -> crate::error::Result<Self> {
        let checker = LanguageToolChecker::from_config(&config.grammar)?;
        Ok(Self::new(Arc::new(checker)))
    }

    /// Generate the report for one transcription and the question it answers
    ///
    /// Grammar service failures do not fail the report; they show up as
    /// "no issues". Missing transcription fields do.
    #[tracing::instrument(skip_all, fields(transcription_id = %transcription.id))]
    pub async fn build(&self, transcription: &TranscriptionResult, question: &str) -> crate::error::Result<Report> {
        let confidence = transcription.confidence.ok_or(ReportError::MissingField("confidence"))?;
        let text = transcription.text.as_deref().ok_or(ReportError::MissingField("text"))?;
        let words = transcription.words.as_deref().ok_or(ReportError::MissingField("words"))?;

        let word_details = WordStats::from_words(words.iter().map(|w| w.text.as_str())).into_details();

        tracing::debug!(
            total_words = word_details.total_words,
            filler_words = word_details.filler_words_count,
            unique_vocabulary = word_details.unique_vocabulary,
            "Word statistics computed"
        );

        let summary = grammar::check_grammar(self.checker.as_ref(), text).await;

        let grammar_syntax_issues = if summary.count > 0 {
            summary
        } else {
            GrammarSummary {
                count: 0,
                issues: NO_ISSUES_MESSAGE.to_owned(),
            }
        };

        metrics::meter()
            .u64_counter(metrics::REPORT_GENERATED_COUNT)
            .build()
            .add(1, &[]);

        Ok(Report {
            id: transcription.id.clone(),
            status: transcription.status.clone(),
            audio_url: transcription.audio_url.clone(),
            overall_confidence: format_percentage(confidence),
            question: question.to_owned(),
            transcript: text.to_owned(),
            word_details,
            grammar_syntax_issues,
        })
    }
}

/// Render a 0.0-1.0 ratio as a percentage with two decimals
///
/// Exact ties round away from zero, so `0.93625` becomes `"93.63"`.
fn format_percentage(ratio: f64) -> String {
    let percentage = ratio * 100.0;

    match Decimal::from_f64_retain(percentage) {
        Some(exact) => format!(
            "{:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{percentage:.2}"),
    }
}
